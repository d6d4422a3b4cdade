use axum::{http::StatusCode, routing::post, Json, Router};
use client::api::policies;
use pretty_assertions::assert_eq;
use serde_json::json;
use shared_types::{AppErrorKind, IssuePolicyDraft, PolicyDraft, PolicyStatus};

use crate::common;

#[tokio::test]
async fn test_list_accepts_every_wrapper_shape() {
    let shapes = [
        json!([{"id": "p1", "status": "active"}]),
        json!({"policies": [{"id": "p1", "status": "active"}]}),
        json!({"data": {"items": [{"_id": "p1", "status": "active"}]}}),
        json!({"success": true, "records": [{"id": "p1", "status": "active"}]}),
    ];

    for shape in shapes {
        let api = common::spawn_api(Router::new().route("/policies", common::get_json(shape.clone()))).await;
        let found = policies::list_policies(&api.client(), None, None).await.unwrap();
        assert_eq!(found.len(), 1, "shape {shape}");
        assert_eq!(found[0].id, "p1");
        assert_eq!(found[0].status, PolicyStatus::Active);
    }
}

#[tokio::test]
async fn test_unknown_shape_is_empty_list() {
    let api = common::spawn_api(Router::new().route("/policies", common::get_json(json!({"ok": true})))).await;
    let found = policies::list_policies(&api.client(), None, None).await.unwrap();
    assert!(found.is_empty());
}

#[tokio::test]
async fn test_filters_go_in_query() {
    let api = common::spawn_api(Router::new().route("/policies", common::get_json(json!([])))).await;

    policies::list_policies(&api.client(), Some(PolicyStatus::Expired), Some("f-1"))
        .await
        .unwrap();

    assert_eq!(api.last_request().query.as_deref(), Some("status=expired&farmerId=f-1"));
}

#[tokio::test]
async fn test_not_found_message_surfaces() {
    let router = Router::new().route(
        "/policies",
        common::failing(StatusCode::NOT_FOUND, json!({"message": "Policy not found"})),
    );
    let api = common::spawn_api(router).await;

    let err = policies::list_policies(&api.client(), None, None).await.unwrap_err();

    assert_eq!(err.kind, AppErrorKind::NotFound);
    assert_eq!(err.friendly_message(), "Policy not found");
}

#[tokio::test]
async fn test_invalid_draft_never_posts() {
    let api = common::spawn_api(Router::new().route(
        "/policies",
        post(|| async { Json(json!({"id": "p-new"})) }),
    ))
    .await;

    let draft = PolicyDraft {
        farmer_id: "f-1".into(),
        crop_type: "maize".into(),
        coverage_amount: "abc".into(),
        premium: "100".into(),
        start_date: "2026-01-01".into(),
        end_date: "2026-12-31".into(),
        ..Default::default()
    };
    let err = policies::create_policy(&api.client(), draft).await.unwrap_err();

    assert!(err.field_errors.contains_key("coverage_amount"));
    assert!(api.requests().is_empty());
}

#[tokio::test]
async fn test_issue_from_assessment_posts_terms() {
    let router = Router::new().route(
        "/policies/from-assessment/{id}",
        post(|| async {
            Json(json!({"policy": {"_id": "p-5", "policyNumber": "POL-0005", "status": "active"}}))
        }),
    );
    let api = common::spawn_api(router).await;

    let req = IssuePolicyDraft {
        coverage_amount: "500000".into(),
        premium: "25,000".into(),
        start_date: "2026-03-01".into(),
        end_date: "2027-02-28".into(),
    }
    .into_request()
    .unwrap();
    let policy = policies::issue_from_assessment(&api.client(), "as-1", &req).await.unwrap();

    assert_eq!(policy.id, "p-5");
    assert_eq!(policy.reference(), "POL-0005");
    let sent = api.last_request();
    assert_eq!(sent.path, "/api/policies/from-assessment/as-1");
    assert_eq!(sent.body["coverageAmount"], json!(500000.0));
    assert_eq!(sent.body["startDate"], "2026-03-01");
}
