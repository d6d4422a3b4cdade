use axum::{
    routing::{delete, post},
    Json, Router,
};
use client::api::farms;
use pretty_assertions::assert_eq;
use serde_json::json;
use shared_types::{total_area, FarmDraft};

use crate::common;

fn farm_list() -> serde_json::Value {
    json!({
        "data": [
            {"_id": "f-1", "farmerId": "u-1", "name": "Hillside", "size": 2.5, "location": "Musanze"},
            {"_id": "f-2", "farmerId": "u-2", "name": "Valley", "area": 4.0},
            {
                "_id": "f-3",
                "farmerId": "u-1",
                "name": "Lakeside",
                "area": 1.5,
                "location": {"province": "Western", "district": "Rubavu", "sector": "Gisenyi"}
            }
        ]
    })
}

#[tokio::test]
async fn test_farmer_sees_only_own_farms() {
    let api = common::spawn_api(Router::new().route("/farms", common::get_json(farm_list()))).await;

    let mine = farms::list_farms(&api.client(), Some("u-1")).await.unwrap();

    let names: Vec<&str> = mine.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, vec!["Hillside", "Lakeside"]);
    assert_eq!(total_area(&mine), 4.0);
    assert_eq!(mine[0].location_label(), "Musanze");
    assert_eq!(mine[1].location_label(), "Gisenyi, Rubavu, Western");
    // The endpoint has no owner filter; narrowing happens client-side.
    assert_eq!(api.last_request().query, None);
}

#[tokio::test]
async fn test_unscoped_list_keeps_everything() {
    let api = common::spawn_api(Router::new().route("/farms", common::get_json(farm_list()))).await;

    let all = farms::list_farms(&api.client(), None).await.unwrap();

    assert_eq!(all.len(), 3);
    assert_eq!(all[1].location_label(), "Not specified");
}

#[tokio::test]
async fn test_create_farm_posts_detailed_location() {
    let router = Router::new().route(
        "/farms",
        post(|| async { Json(json!({"farm": {"_id": "f-9", "name": "New Plot", "farmerId": "u-1"}})) }),
    );
    let api = common::spawn_api(router).await;

    let draft = FarmDraft {
        name: " New Plot ".into(),
        crop_type: "beans".into(),
        area: "3".into(),
        province: "Northern".into(),
        district: "Burera".into(),
        sector: String::new(),
    };
    let farm = farms::create_farm(&api.client(), "u-1", draft).await.unwrap();

    assert_eq!(farm.id, "f-9");
    assert_eq!(
        api.last_request().body,
        json!({
            "farmerId": "u-1",
            "name": "New Plot",
            "cropType": "beans",
            "area": 3.0,
            "location": {"province": "Northern", "district": "Burera", "sector": ""}
        })
    );
}

#[tokio::test]
async fn test_create_farm_validates_before_sending() {
    let api = common::spawn_api(Router::new().route("/farms", post(|| async { Json(json!({})) }))).await;

    let err = farms::create_farm(&api.client(), "u-1", FarmDraft::default())
        .await
        .unwrap_err();

    assert!(err.is_validation());
    assert!(api.requests().is_empty());
}

#[tokio::test]
async fn test_delete_farm_path() {
    let api = common::spawn_api(Router::new().route("/farms/{id}", delete(|| async {}))).await;

    farms::delete_farm(&api.client(), "f-3").await.unwrap();

    let sent = api.last_request();
    assert_eq!(sent.method, "DELETE");
    assert_eq!(sent.path, "/api/farms/f-3");
}
