use axum::{extract::State, routing::patch, Json, Router};
use client::api::claims;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use shared_types::{ClaimDraft, ClaimStatus, LossEventType};
use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc,
};

use crate::common;

/// A `/claims` endpoint that counts POSTs and echoes a created claim.
fn counting_claims(hits: Arc<AtomicUsize>) -> Router {
    Router::new()
        .route(
            "/claims",
            axum::routing::post(|State(hits): State<Arc<AtomicUsize>>, Json(body): Json<Value>| async move {
                hits.fetch_add(1, Ordering::SeqCst);
                Json(json!({
                    "data": {
                        "claim": {
                            "_id": "c-1",
                            "policyId": body["policyId"],
                            "lossEventType": body["lossEventType"],
                            "status": "pending"
                        }
                    }
                }))
            }),
        )
        .with_state(hits)
}

fn valid_draft() -> ClaimDraft {
    ClaimDraft {
        policy_id: "p-1".into(),
        loss_event_type: "flood".into(),
        loss_description: "River burst its banks".into(),
        damage_photos: "https://img.example/1.jpg,\nhttps://img.example/2.jpg".into(),
        amount_claimed: "120,000".into(),
    }
}

#[tokio::test]
async fn test_claim_without_policy_never_reaches_api() {
    let hits = Arc::new(AtomicUsize::new(0));
    let api = common::spawn_api(counting_claims(hits.clone())).await;

    let draft = ClaimDraft {
        policy_id: "   ".into(),
        ..valid_draft()
    };
    let err = claims::create_claim(&api.client(), draft).await.unwrap_err();

    assert_eq!(err.message, "Please select a policy");
    assert!(err.field_errors.contains_key("policy_id"));
    assert_eq!(hits.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_valid_claim_is_posted_once() {
    let hits = Arc::new(AtomicUsize::new(0));
    let api = common::spawn_api(counting_claims(hits.clone())).await;

    let claim = claims::create_claim(&api.client_with_token("t"), valid_draft())
        .await
        .unwrap();

    assert_eq!(hits.load(Ordering::SeqCst), 1);
    assert_eq!(claim.id, "c-1");
    assert_eq!(claim.policy_id, "p-1");
    assert_eq!(claim.loss_event_type, Some(LossEventType::Flood));
    assert_eq!(claim.status, ClaimStatus::Pending);

    let sent = api.last_request();
    assert_eq!(
        sent.body,
        json!({
            "policyId": "p-1",
            "lossEventType": "flood",
            "lossDescription": "River burst its banks",
            "damagePhotos": ["https://img.example/1.jpg", "https://img.example/2.jpg"],
            "amountClaimed": 120000.0
        })
    );
}

#[tokio::test]
async fn test_list_claims_scoped_to_farmer() {
    let router = Router::new().route(
        "/claims",
        common::get_json(json!({"claims": [{"id": "c-1", "status": "approved"}]})),
    );
    let api = common::spawn_api(router).await;

    let found = claims::list_claims(&api.client(), Some(ClaimStatus::Approved), Some("f-2"))
        .await
        .unwrap();

    assert_eq!(found.len(), 1);
    assert!(found[0].status.is_final());
    assert_eq!(api.last_request().query.as_deref(), Some("status=approved&farmerId=f-2"));
}

#[tokio::test]
async fn test_claims_with_null_fields_still_load() {
    let router = Router::new().route(
        "/claims",
        common::get_json(json!({"claims": [
            {"_id": "c1", "damagePhotos": null, "lossDescription": null, "status": null},
            {"_id": "c2", "id": "c2", "policyId": "p-1", "status": "pending"}
        ]})),
    );
    let api = common::spawn_api(router).await;

    let found = claims::list_claims(&api.client(), None, None).await.unwrap();

    let ids: Vec<&str> = found.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, vec!["c1", "c2"]);
    assert!(found[0].damage_photos.is_empty());
    assert_eq!(found[0].status, ClaimStatus::default());
    assert_eq!(found[1].policy_id, "p-1");
}

#[tokio::test]
async fn test_status_update_omits_empty_note() {
    let router = Router::new().route(
        "/claims/{id}/status",
        patch(|| async { Json(json!({"message": "ok"})) }),
    );
    let api = common::spawn_api(router).await;

    claims::update_claim_status(&api.client(), "c-9", ClaimStatus::Processing, None)
        .await
        .unwrap();
    claims::update_claim_status(&api.client(), "c-9", ClaimStatus::Rejected, Some("Duplicate".into()))
        .await
        .unwrap();

    let sent = api.requests();
    assert_eq!(sent[0].path, "/api/claims/c-9/status");
    assert_eq!(sent[0].body, json!({"status": "processing"}));
    assert_eq!(sent[1].body, json!({"status": "rejected", "note": "Duplicate"}));
}
