//! Integration tests for the products API, driven through the full router
//! against a throwaway SQLite database.

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

static INIT: tokio::sync::OnceCell<()> = tokio::sync::OnceCell::const_new();

async fn setup() -> Router {
    INIT.get_or_init(|| async {
        let path = std::env::temp_dir().join(format!("catalog-test-{}.db", uuid::Uuid::new_v4()));
        backend::shared::data::db::initialize_database(Some(
            path.to_str().expect("temp path is not valid utf-8"),
        ))
        .await
        .expect("failed to initialize test database");
    })
    .await;
    backend::routes::app()
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let request = match body {
        Some(json_body) => Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json_body.to_string()))
            .unwrap(),
        None => Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    };
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, value)
}

async fn create_product(app: &Router, name: &str, price: f64) -> Value {
    let (status, body) = send(
        app,
        "POST",
        "/api/products",
        Some(json!({ "name": name, "price": price })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    body
}

#[tokio::test]
async fn health_reports_healthy() {
    let app = setup().await;
    let (status, body) = send(&app, "GET", "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert!(body["timestamp"].is_string());
    assert!(body["version"].is_string());
}

#[tokio::test]
async fn create_returns_created_record_with_id() {
    let app = setup().await;
    let body = create_product(&app, "Test Product", 29.99).await;
    assert_eq!(body["name"], "Test Product");
    assert_eq!(body["price"], 29.99);
    let id = body["id"].as_str().expect("id should be a string");
    uuid::Uuid::parse_str(id).expect("id should be a uuid");
}

#[tokio::test]
async fn created_product_appears_in_list() {
    let app = setup().await;
    let created = create_product(&app, "Listed Product", 12.5).await;

    let (status, body) = send(&app, "GET", "/api/products", None).await;
    assert_eq!(status, StatusCode::OK);
    let items = body.as_array().expect("list should be a JSON array");
    assert!(items.iter().any(|p| p["id"] == created["id"]));
}

#[tokio::test]
async fn create_rejects_missing_fields() {
    let app = setup().await;

    let (status, body) = send(
        &app,
        "POST",
        "/api/products",
        Some(json!({ "price": 29.99 })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["message"].is_string());

    let (status, _) = send(
        &app,
        "POST",
        "/api/products",
        Some(json!({ "name": "Test Product" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn create_rejects_invalid_values() {
    let app = setup().await;

    let (status, body) = send(
        &app,
        "POST",
        "/api/products",
        Some(json!({ "name": "   ", "price": 10.0 })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Name is required.");

    let (status, body) = send(
        &app,
        "POST",
        "/api/products",
        Some(json!({ "name": "Freebie", "price": 0.0 })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Price must be a positive number.");
}

#[tokio::test]
async fn get_unknown_or_malformed_id() {
    let app = setup().await;

    let uri = format!("/api/products/{}", uuid::Uuid::new_v4());
    let (status, _) = send(&app, "GET", &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, "GET", "/api/products/not-a-uuid", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn patch_merges_partial_updates() {
    let app = setup().await;
    let created = create_product(&app, "Patch Me", 5.0).await;
    let uri = format!("/api/products/{}", created["id"].as_str().unwrap());

    let (status, body) = send(&app, "PATCH", &uri, Some(json!({ "price": 7.25 }))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Patch Me");
    assert_eq!(body["price"], 7.25);

    let (status, body) = send(&app, "PATCH", &uri, Some(json!({ "name": "Patched" }))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Patched");
    assert_eq!(body["price"], 7.25);
}

#[tokio::test]
async fn patch_rejects_invalid_merge_and_unknown_id() {
    let app = setup().await;
    let created = create_product(&app, "Still Valid", 5.0).await;
    let uri = format!("/api/products/{}", created["id"].as_str().unwrap());

    let (status, body) = send(&app, "PATCH", &uri, Some(json!({ "price": -1.0 }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Price must be a positive number.");

    let unknown = format!("/api/products/{}", uuid::Uuid::new_v4());
    let (status, _) = send(&app, "PATCH", &unknown, Some(json!({ "price": 1.0 }))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_removes_the_record() {
    let app = setup().await;
    let created = create_product(&app, "Doomed", 3.0).await;
    let uri = format!("/api/products/{}", created["id"].as_str().unwrap());

    let (status, _) = send(&app, "DELETE", &uri, None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = send(&app, "GET", &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    // Deleting again reports the record as gone.
    let (status, _) = send(&app, "DELETE", &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
