mod common;

use axum::{
    Router,
    routing::{get, post},
};
use axum_test::TestServer;
use linksnip::api::handlers::{list_links_handler, shorten_handler};
use serde_json::json;

fn server() -> TestServer {
    let app = Router::new()
        .route("/api/shorten", post(shorten_handler))
        .route("/api/links", get(list_links_handler))
        .with_state(common::test_state());

    TestServer::new(app).unwrap()
}

#[tokio::test]
async fn test_list_is_newest_first() {
    let server = server();

    for i in 0..3 {
        server
            .post("/api/shorten")
            .add_header("x-user-id", "1")
            .json(&json!({ "url": format!("https://example.com/{i}") }))
            .await;
    }

    let response = server.get("/api/links").add_header("x-user-id", "1").await;

    response.assert_status_ok();
    let body = response.json::<serde_json::Value>();
    let links = body["links"].as_array().unwrap();
    assert_eq!(links.len(), 3);
    assert_eq!(links[0]["target_url"], "https://example.com/2");
    assert_eq!(links[2]["target_url"], "https://example.com/0");
}

#[tokio::test]
async fn test_list_is_scoped_to_caller() {
    let server = server();

    server
        .post("/api/shorten")
        .add_header("x-user-id", "1")
        .json(&json!({ "url": "https://example.com/mine" }))
        .await;
    server
        .post("/api/shorten")
        .add_header("x-user-id", "2")
        .json(&json!({ "url": "https://example.com/theirs" }))
        .await;
    server
        .post("/api/shorten")
        .json(&json!({ "url": "https://example.com/nobodys" }))
        .await;

    let response = server.get("/api/links").add_header("x-user-id", "1").await;
    let body = response.json::<serde_json::Value>();
    let links = body["links"].as_array().unwrap();
    assert_eq!(links.len(), 1);
    assert_eq!(links[0]["target_url"], "https://example.com/mine");
}

#[tokio::test]
async fn test_anonymous_list_shows_anonymous_links_only() {
    let server = server();

    server
        .post("/api/shorten")
        .add_header("x-user-id", "1")
        .json(&json!({ "url": "https://example.com/mine" }))
        .await;
    server
        .post("/api/shorten")
        .json(&json!({ "url": "https://example.com/nobodys" }))
        .await;

    let response = server.get("/api/links").await;
    let body = response.json::<serde_json::Value>();
    let links = body["links"].as_array().unwrap();
    assert_eq!(links.len(), 1);
    assert_eq!(links[0]["target_url"], "https://example.com/nobodys");
}

#[tokio::test]
async fn test_list_respects_limit() {
    let server = server();

    for i in 0..5 {
        server
            .post("/api/shorten")
            .add_header("x-user-id", "1")
            .json(&json!({ "url": format!("https://example.com/{i}") }))
            .await;
    }

    let response = server
        .get("/api/links")
        .add_query_param("limit", "2")
        .add_header("x-user-id", "1")
        .await;

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["links"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_list_defaults_to_ten() {
    let server = server();

    for i in 0..12 {
        server
            .post("/api/shorten")
            .add_header("x-user-id", "1")
            .json(&json!({ "url": format!("https://example.com/{i}") }))
            .await;
    }

    let response = server.get("/api/links").add_header("x-user-id", "1").await;

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["links"].as_array().unwrap().len(), 10);
}
