use shared_types::{
    unwrap_object_as, AppError, ChangePasswordRequest, LoginRequest, LoginResponse,
    MessageResponse, RegisterFarmerRequest, Session,
};

use crate::ApiClient;

/// Sign in with an email or phone number and return the new session.
#[tracing::instrument(skip(client, req), fields(identifier = %req.identifier))]
pub async fn login(client: &ApiClient, req: &LoginRequest) -> Result<Session, AppError> {
    if req.identifier.trim().is_empty() || req.password.is_empty() {
        return Err(AppError::bad_request("Enter your email or phone and password"));
    }
    let value = client.post_json("/auth/login", req).await?;
    let login: LoginResponse = unwrap_object_as(&value, None)?;
    if login.token.is_empty() {
        return Err(AppError::unauthorized("Login response did not include a token"));
    }
    Ok(Session::from_login(login.token.clone(), &login.user))
}

/// Submit a completed farmer registration.
#[tracing::instrument(skip(client, req), fields(email = %req.email))]
pub async fn register_farmer(
    client: &ApiClient,
    req: &RegisterFarmerRequest,
) -> Result<MessageResponse, AppError> {
    let value = client.post_json("/auth/register", req).await?;
    Ok(unwrap_object_as(&value, None).unwrap_or_default())
}

#[tracing::instrument(skip(client, req))]
pub async fn change_password(
    client: &ApiClient,
    req: &ChangePasswordRequest,
) -> Result<MessageResponse, AppError> {
    let value = client.post_json("/auth/change-password", req).await?;
    Ok(unwrap_object_as(&value, None).unwrap_or_default())
}
