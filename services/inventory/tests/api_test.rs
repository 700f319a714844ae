//! REST API 集成测试

mod support;

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use serde_json::{Value, json};
use tower::ServiceExt;

use beer_inventory::api::{AppState, beer_routes};
use beer_inventory::application::ServiceHandler;

use support::InMemoryBeerRepository;

fn app() -> Router {
    let handler = Arc::new(ServiceHandler::new(Arc::new(
        InMemoryBeerRepository::default(),
    )));
    beer_routes().with_state(AppState::new(handler))
}

fn brahma_json() -> Value {
    json!({
        "name": "Brahma",
        "brand": "Ambev",
        "type": "LAGER",
        "max": 50,
        "quantity": 10
    })
}

async fn send_json(app: &Router, method: &str, uri: &str, body: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    read_response(app.clone().oneshot(request).await.unwrap()).await
}

async fn send(app: &Router, method: &str, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    read_response(app.clone().oneshot(request).await.unwrap()).await
}

async fn read_response(response: axum::response::Response) -> (StatusCode, Value) {
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

#[tokio::test]
async fn test_create_beer_returns_created() {
    let app = app();

    let (status, body) = send_json(&app, "POST", "/api/v1/beers", brahma_json()).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["name"], "Brahma");
    assert_eq!(body["brand"], "Ambev");
    assert_eq!(body["type"], "LAGER");
    assert_eq!(body["max"], 50);
    assert_eq!(body["quantity"], 10);
    assert!(body["id"].is_string());
}

#[tokio::test]
async fn test_create_beer_blank_brand_returns_bad_request() {
    let app = app();
    let mut payload = brahma_json();
    payload["brand"] = json!("");

    let (status, body) = send_json(&app, "POST", "/api/v1/beers", payload).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["status"], 400);
    assert_eq!(body["title"], "Validation Error");
}

#[tokio::test]
async fn test_create_duplicate_beer_returns_conflict() {
    let app = app();
    send_json(&app, "POST", "/api/v1/beers", brahma_json()).await;

    let (status, body) = send_json(&app, "POST", "/api/v1/beers", brahma_json()).await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["status"], 409);
    assert!(body["detail"].as_str().unwrap().contains("Brahma"));
}

#[tokio::test]
async fn test_get_beer_by_name() {
    let app = app();
    send_json(&app, "POST", "/api/v1/beers", brahma_json()).await;

    let (status, body) = send(&app, "GET", "/api/v1/beers/Brahma").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Brahma");
    assert_eq!(body["type"], "LAGER");
}

#[tokio::test]
async fn test_get_unknown_beer_returns_not_found() {
    let app = app();

    let (status, body) = send(&app, "GET", "/api/v1/beers/Heineken").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["status"], 404);
}

#[tokio::test]
async fn test_list_beers() {
    let app = app();
    send_json(&app, "POST", "/api/v1/beers", brahma_json()).await;

    let (status, body) = send(&app, "GET", "/api/v1/beers").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 1);
    assert_eq!(body["items"][0]["name"], "Brahma");
}

#[tokio::test]
async fn test_list_beers_empty() {
    let app = app();

    let (status, body) = send(&app, "GET", "/api/v1/beers").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 0);
    assert_eq!(body["items"], json!([]));
}

#[tokio::test]
async fn test_delete_beer_returns_no_content() {
    let app = app();
    let (_, created) = send_json(&app, "POST", "/api/v1/beers", brahma_json()).await;
    let id = created["id"].as_str().unwrap().to_string();

    let (status, _) = send(&app, "DELETE", &format!("/api/v1/beers/{}", id)).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = send(&app, "GET", "/api/v1/beers/Brahma").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_unknown_beer_returns_not_found() {
    let app = app();

    let (status, _) = send(
        &app,
        "DELETE",
        "/api/v1/beers/0198c5b6-1111-7111-8111-abcdefabcdef",
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_malformed_id_returns_bad_request() {
    let app = app();

    let (status, body) = send(&app, "DELETE", "/api/v1/beers/not-a-uuid").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["title"], "Validation Error");
}

#[tokio::test]
async fn test_increment_stock() {
    let app = app();
    let (_, created) = send_json(&app, "POST", "/api/v1/beers", brahma_json()).await;
    let id = created["id"].as_str().unwrap().to_string();

    let (status, body) = send_json(
        &app,
        "PATCH",
        &format!("/api/v1/beers/{}/increment", id),
        json!({ "quantity": 10 }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["quantity"], 20);
    assert_eq!(body["max"], 50);
}

#[tokio::test]
async fn test_increment_over_capacity_returns_bad_request() {
    let app = app();
    let (_, created) = send_json(&app, "POST", "/api/v1/beers", brahma_json()).await;
    let id = created["id"].as_str().unwrap().to_string();

    let (status, body) = send_json(
        &app,
        "PATCH",
        &format!("/api/v1/beers/{}/increment", id),
        json!({ "quantity": 45 }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["status"], 400);
}

#[tokio::test]
async fn test_increment_unknown_beer_returns_not_found() {
    let app = app();

    let (status, _) = send_json(
        &app,
        "PATCH",
        "/api/v1/beers/0198c5b6-2222-7222-8222-abcdefabcdef/increment",
        json!({ "quantity": 10 }),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_decrement_to_empty_stock() {
    let app = app();
    let (_, created) = send_json(&app, "POST", "/api/v1/beers", brahma_json()).await;
    let id = created["id"].as_str().unwrap().to_string();

    let (status, body) = send_json(
        &app,
        "PATCH",
        &format!("/api/v1/beers/{}/decrement", id),
        json!({ "quantity": 10 }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["quantity"], 0);
}

#[tokio::test]
async fn test_decrement_below_zero_returns_bad_request() {
    let app = app();
    let (_, created) = send_json(&app, "POST", "/api/v1/beers", brahma_json()).await;
    let id = created["id"].as_str().unwrap().to_string();

    let (status, body) = send_json(
        &app,
        "PATCH",
        &format!("/api/v1/beers/{}/decrement", id),
        json!({ "quantity": 80 }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["title"], "Validation Error");
}
