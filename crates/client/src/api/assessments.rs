use shared_types::{unwrap_list_as, AppError, Assessment, AssessmentStatus};

use crate::http::query_pairs;
use crate::ApiClient;

#[tracing::instrument(skip(client))]
pub async fn list_assessments(
    client: &ApiClient,
    status: Option<AssessmentStatus>,
) -> Result<Vec<Assessment>, AppError> {
    let query = query_pairs(&[("status", status.map(|s| s.as_str()))]);
    let value = client.get_json("/assessments", &query).await?;
    unwrap_list_as(&value, Some("assessments"))
}
