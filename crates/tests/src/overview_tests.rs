use axum::{http::StatusCode, Router};
use client::api::overview::load_overview;
use pretty_assertions::assert_eq;
use serde_json::json;
use shared_types::{Session, UserRole};

use crate::common;

fn session(role: UserRole) -> Session {
    Session {
        token: "tok".into(),
        user_id: "u-1".into(),
        email: "user@example.com".into(),
        phone: String::new(),
        role,
        display_name: "Test User".into(),
    }
}

fn values(cards: &[client::api::overview::OverviewStat]) -> Vec<(&str, &str)> {
    cards.iter().map(|c| (c.label, c.value.as_str())).collect()
}

#[tokio::test]
async fn test_farmer_overview_tolerates_failing_optional_fetches() {
    let router = Router::new()
        .route(
            "/policies",
            common::get_json(json!([
                {"id": "p1", "farmerId": "u-1", "status": "active"},
                {"id": "p2", "farmerId": "u-1", "status": "expired"}
            ])),
        )
        .route(
            "/claims",
            common::failing(StatusCode::INTERNAL_SERVER_ERROR, json!({"message": "boom"})),
        )
        .route(
            "/farms",
            common::get_json(json!([
                {"id": "f1", "farmerId": "u-1"},
                {"id": "f2", "farmerId": "u-2"}
            ])),
        );
    let api = common::spawn_api(router).await;

    let cards = load_overview(&api.client_with_token("tok"), &session(UserRole::Farmer))
        .await
        .unwrap();

    assert_eq!(
        values(&cards),
        vec![
            ("My farms", "1"),
            ("Active policies", "1"),
            ("Claims filed", "0"),
            ("Pending claims", "0"),
        ]
    );
}

#[tokio::test]
async fn test_primary_fetch_failure_fails_overview() {
    let router = Router::new()
        .route(
            "/policies",
            common::failing(StatusCode::FORBIDDEN, json!({"message": "Not allowed"})),
        )
        .route("/claims", common::get_json(json!([])))
        .route("/assessments", common::get_json(json!([])));
    let api = common::spawn_api(router).await;

    let err = load_overview(&api.client(), &session(UserRole::Insurer))
        .await
        .unwrap_err();

    assert_eq!(err.message, "Not allowed");
}

#[tokio::test]
async fn test_admin_overview_reads_stats() {
    let router = Router::new().route(
        "/admin/stats",
        common::get_json(json!({
            "success": true,
            "data": {
                "totalUsers": 40,
                "totalFarmers": 31,
                "activePolicies": 12,
                "pendingClaims": 3,
                "totalFarms": 28
            }
        })),
    );
    let api = common::spawn_api(router).await;

    let cards = load_overview(&api.client(), &session(UserRole::Admin)).await.unwrap();

    assert_eq!(
        values(&cards),
        vec![
            ("Total users", "40"),
            ("Farmers", "31"),
            ("Active policies", "12"),
            ("Pending claims", "3"),
            ("Registered farms", "28"),
        ]
    );
}

#[tokio::test]
async fn test_assessor_overview_counts_assignments() {
    let router = Router::new()
        .route(
            "/assessments",
            common::get_json(json!({"assessments": [
                {"id": "a1", "farmId": "f1", "status": "in_progress"},
                {"id": "a2", "farmId": "f2", "status": "completed"}
            ]})),
        )
        .route("/farms", common::get_json(json!({"farms": [{"id": "f1"}]})));
    let api = common::spawn_api(router).await;

    let cards = load_overview(&api.client(), &session(UserRole::Assessor)).await.unwrap();

    assert_eq!(
        values(&cards),
        vec![("Assigned", "2"), ("In progress", "1"), ("Completed", "1"), ("Farms", "1")]
    );
}
