use shared_types::{
    unwrap_list_as, unwrap_object_as, AppError, CreateUserRequest, SetUserActiveRequest, User,
    UserRole, UserRow,
};

use crate::http::query_pairs;
use crate::ApiClient;

const RESOURCE: &str = "users";

#[tracing::instrument(skip(client))]
pub async fn list_users(client: &ApiClient, role: Option<UserRole>) -> Result<Vec<User>, AppError> {
    let query = query_pairs(&[("role", role.map(|r| r.as_str()))]);
    let value = client.get_json("/users", &query).await?;
    unwrap_list_as(&value, Some(RESOURCE))
}

/// Users mapped to table rows.
pub async fn list_user_rows(
    client: &ApiClient,
    role: Option<UserRole>,
) -> Result<Vec<UserRow>, AppError> {
    let users = list_users(client, role).await?;
    Ok(users.iter().map(UserRow::from).collect())
}

#[tracing::instrument(skip(client, req), fields(email = %req.email))]
pub async fn create_user(client: &ApiClient, req: &CreateUserRequest) -> Result<User, AppError> {
    let value = client.post_json("/users", req).await?;
    unwrap_object_as(&value, Some("user"))
}

#[tracing::instrument(skip(client))]
pub async fn set_user_active(client: &ApiClient, id: &str, active: bool) -> Result<(), AppError> {
    client
        .patch_json(&format!("/users/{id}/status"), &SetUserActiveRequest { active })
        .await?;
    Ok(())
}

#[tracing::instrument(skip(client))]
pub async fn delete_user(client: &ApiClient, id: &str) -> Result<(), AppError> {
    client.delete(&format!("/users/{id}")).await?;
    Ok(())
}
