use shared_types::{unwrap_object_as, AppError, DashboardStats};

use crate::ApiClient;

#[tracing::instrument(skip(client))]
pub async fn stats(client: &ApiClient) -> Result<DashboardStats, AppError> {
    let value = client.get_json("/admin/stats", &[]).await?;
    unwrap_object_as(&value, Some("stats"))
}
