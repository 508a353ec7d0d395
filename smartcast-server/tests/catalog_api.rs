mod common;

use axum::http::StatusCode;
use serde_json::{Value, json};
use smartcast_core::Catalog;

use common::{sample_server, server_with, test_config};

#[tokio::test]
async fn list_returns_every_sample_in_order() {
    let server = sample_server();

    let response = server.get("/api/videos").await;
    response.assert_status_ok();

    let body: Vec<Value> = response.json();
    let ids: Vec<&str> = body.iter().filter_map(|v| v["id"].as_str()).collect();
    assert_eq!(ids, vec!["1", "2", "3", "4", "5", "6"]);
    assert_eq!(body[0]["title"], "Big Buck Bunny");
}

#[tokio::test]
async fn get_by_id_returns_tears_of_steel() {
    let server = sample_server();

    let response = server.get("/api/videos/3").await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["id"], "3");
    assert_eq!(body["title"], "Tears of Steel");
    assert_eq!(body["duration"], json!(734));
    assert!(body["videoUrl"].as_str().is_some_and(|u| u.ends_with(".mp4")));
    assert!(body["thumbnailUrl"].is_string());
    assert!(body["uploadDate"].is_string());
    assert!(body["resolution"].is_string());
}

#[tokio::test]
async fn unknown_id_is_404_with_error_body() {
    let server = sample_server();

    let response = server.get("/api/videos/999").await;
    response.assert_status(StatusCode::NOT_FOUND);
    response.assert_json(&json!({ "error": "Video not found" }));
}

#[tokio::test]
async fn empty_catalog_lists_nothing() {
    let server = server_with(Catalog::empty(), test_config());

    let response = server.get("/api/videos").await;
    response.assert_status_ok();
    response.assert_json(&json!([]));

    server
        .get("/api/videos/1")
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn health_reports_catalog_size() {
    let server = sample_server();

    let response = server.get("/health").await;
    response.assert_status_ok();
    response.assert_json(&json!({ "status": "ok", "videos": 6 }));
}

#[tokio::test]
async fn writes_are_not_routed() {
    let server = sample_server();

    let response = server.post("/api/videos").expect_failure().await;
    response.assert_status(StatusCode::METHOD_NOT_ALLOWED);
}
