use axum::{http::StatusCode, routing::post, Json, Router};
use client::api::auth;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use shared_types::{AppErrorKind, ChangePasswordRequest, LoginRequest, UserRole};

use crate::common;

fn login_request(identifier: &str, password: &str) -> LoginRequest {
    LoginRequest {
        identifier: identifier.to_string(),
        password: password.to_string(),
    }
}

#[tokio::test]
async fn test_login_unwraps_nested_session() {
    let router = Router::new().route(
        "/auth/login",
        post(|| async {
            Json(json!({
                "success": true,
                "data": {
                    "token": "tok-123",
                    "user": {
                        "_id": "u-9",
                        "firstName": "Amina",
                        "lastName": "Uwase",
                        "email": "amina@example.com",
                        "role": "INSURER"
                    }
                }
            }))
        }),
    );
    let api = common::spawn_api(router).await;

    let session = auth::login(&api.client(), &login_request("amina@example.com", "secret123"))
        .await
        .unwrap();

    assert_eq!(session.token, "tok-123");
    assert_eq!(session.user_id, "u-9");
    assert_eq!(session.role, UserRole::Insurer);
    assert_eq!(session.display_name, "Amina Uwase");

    let sent = api.last_request();
    assert_eq!(sent.method, "POST");
    assert_eq!(sent.path, "/api/auth/login");
    assert_eq!(sent.body["identifier"], "amina@example.com");
    assert_eq!(sent.authorization, None);
}

#[tokio::test]
async fn test_login_surfaces_server_message() {
    let router = Router::new().route(
        "/auth/login",
        common::failing(StatusCode::UNAUTHORIZED, json!({"message": "Invalid credentials"})),
    );
    let api = common::spawn_api(router).await;

    let err = auth::login(&api.client(), &login_request("0788000000", "wrong-pass"))
        .await
        .unwrap_err();

    assert_eq!(err.kind, AppErrorKind::Unauthorized);
    assert_eq!(err.message, "Invalid credentials");
}

#[tokio::test]
async fn test_login_without_token_is_rejected() {
    let router = Router::new().route(
        "/auth/login",
        post(|| async { Json(json!({"user": {"id": "u-1"}, "token": ""})) }),
    );
    let api = common::spawn_api(router).await;

    let err = auth::login(&api.client(), &login_request("a@b.rw", "secret123"))
        .await
        .unwrap_err();
    assert_eq!(err.kind, AppErrorKind::Unauthorized);
}

#[tokio::test]
async fn test_login_blank_identifier_sends_nothing() {
    let api = common::spawn_api(Router::new().route(
        "/auth/login",
        post(|| async { Json(json!({})) }),
    ))
    .await;

    let err = auth::login(&api.client(), &login_request("  ", "secret123"))
        .await
        .unwrap_err();

    assert_eq!(err.kind, AppErrorKind::BadRequest);
    assert!(api.requests().is_empty());
}

#[tokio::test]
async fn test_change_password_sends_camel_case_body() {
    let router = Router::new().route(
        "/auth/change-password",
        post(|Json(_body): Json<Value>| async { Json(json!({"message": "Password changed"})) }),
    );
    let api = common::spawn_api(router).await;

    let req = ChangePasswordRequest {
        current_password: "old-secret".into(),
        new_password: "new-secret-1".into(),
    };
    let resp = auth::change_password(&api.client_with_token("tok"), &req)
        .await
        .unwrap();

    assert_eq!(resp.message, "Password changed");
    let sent = api.last_request();
    assert_eq!(sent.body, json!({"currentPassword": "old-secret", "newPassword": "new-secret-1"}));
    assert_eq!(sent.authorization.as_deref(), Some("Bearer tok"));
}
