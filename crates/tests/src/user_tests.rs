use axum::{
    routing::{delete, patch},
    Json, Router,
};
use client::api::users;
use pretty_assertions::assert_eq;
use serde_json::json;
use shared_types::UserRole;

use crate::common;

#[tokio::test]
async fn test_user_rows_from_nested_results() {
    let router = Router::new().route(
        "/users",
        common::get_json(json!({
            "data": {
                "results": [
                    {"_id": "1", "firstName": "A", "lastName": "B", "active": false},
                    {
                        "_id": "2",
                        "firstName": "Jean",
                        "lastName": "Habimana",
                        "role": "FARMER",
                        "farmerProfile": {"district": "Musanze"}
                    }
                ]
            }
        })),
    );
    let api = common::spawn_api(router).await;

    let rows = users::list_user_rows(&api.client_with_token("t"), None).await.unwrap();

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].id, "1");
    assert_eq!(rows[0].name, "A B");
    assert_eq!(rows[0].status, "inactive");
    assert_eq!(rows[1].status, "active");
    assert_eq!(rows[1].role, UserRole::Farmer);
    assert_eq!(rows[1].detail, "Musanze");
}

#[tokio::test]
async fn test_loosely_typed_users_all_survive() {
    let router = Router::new().route(
        "/users",
        common::get_json(json!({
            "data": {
                "results": [
                    {"_id": "1", "id": "1", "firstName": "A", "lastName": "B", "active": false},
                    {"_id": "2", "firstName": null, "lastName": "Uwase", "email": null, "role": "SUPERADMIN"},
                    {"_id": "3", "role": "ADMIN", "active": null}
                ]
            }
        })),
    );
    let api = common::spawn_api(router).await;

    let rows = users::list_user_rows(&api.client(), None).await.unwrap();

    let summary: Vec<(&str, &str, UserRole, &str)> = rows
        .iter()
        .map(|r| (r.id.as_str(), r.name.as_str(), r.role, r.status))
        .collect();
    assert_eq!(
        summary,
        vec![
            ("1", "A B", UserRole::Farmer, "inactive"),
            ("2", "Uwase", UserRole::Farmer, "active"),
            ("3", "Unknown user", UserRole::Admin, "active"),
        ]
    );
}

#[tokio::test]
async fn test_role_filter_goes_in_query() {
    let router = Router::new().route("/users", common::get_json(json!({"users": []})));
    let api = common::spawn_api(router).await;

    let found = users::list_users(&api.client(), Some(UserRole::Assessor)).await.unwrap();

    assert!(found.is_empty());
    assert_eq!(api.last_request().query.as_deref(), Some("role=ASSESSOR"));
}

#[tokio::test]
async fn test_every_request_carries_bearer_and_fresh_request_id() {
    let router = Router::new().route("/users", common::get_json(json!([])));
    let api = common::spawn_api(router).await;
    let client = api.client_with_token("abc.def");

    users::list_users(&client, None).await.unwrap();
    users::list_users(&client, None).await.unwrap();

    let sent = api.requests();
    assert_eq!(sent.len(), 2);
    for req in &sent {
        assert_eq!(req.authorization.as_deref(), Some("Bearer abc.def"));
        assert!(req.request_id.as_deref().is_some_and(|id| !id.is_empty()));
    }
    assert_ne!(sent[0].request_id, sent[1].request_id);
}

#[tokio::test]
async fn test_set_user_active_patches_status() {
    let router = Router::new().route(
        "/users/{id}/status",
        patch(|| async { Json(json!({"message": "updated"})) }),
    );
    let api = common::spawn_api(router).await;

    users::set_user_active(&api.client(), "u-7", false).await.unwrap();

    let sent = api.last_request();
    assert_eq!(sent.method, "PATCH");
    assert_eq!(sent.path, "/api/users/u-7/status");
    assert_eq!(sent.body, json!({"active": false}));
}

#[tokio::test]
async fn test_delete_user_accepts_empty_body() {
    let router = Router::new().route("/users/{id}", delete(|| async {}));
    let api = common::spawn_api(router).await;

    users::delete_user(&api.client(), "u-3").await.unwrap();

    assert_eq!(api.last_request().method, "DELETE");
}
