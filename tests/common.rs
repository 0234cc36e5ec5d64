/// Common test utilities for Ecoleta integration tests
///
/// This file contains shared functions for all integration tests, including
/// test application setup and helpers for the requests most tests make.

use ecoleta::{
    config::Settings,
    create_app,
    db::init_pool,
    models::Point,
    run_migrations,
    AppState,
};
use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use std::sync::Arc;
use tower::Service;

/// Placeholder image configured for test apps
pub const TEST_PLACEHOLDER_IMAGE: &str = "https://example.com/placeholder.jpg";

/// Creates a test application backed by its own in-memory SQLite database
///
/// The database uses a unique shared-cache URI so every pooled connection
/// sees the migrated schema while tests stay isolated from each other.
pub fn create_test_app() -> Router {
    let database_url = format!("file:it_{}?mode=memory&cache=shared", uuid::Uuid::new_v4());
    let pool = init_pool(&database_url).unwrap();

    {
        let conn = &mut pool.get().unwrap();
        run_migrations(conn).unwrap();
    }

    create_app(AppState {
        pool: Arc::new(pool),
        settings: Arc::new(Settings {
            public_url: "http://localhost:3333".to_string(),
            placeholder_image: TEST_PLACEHOLDER_IMAGE.to_string(),
        }),
    })
}

/// Builds a create-point request body
pub fn point_body(name: &str, city: &str, uf: &str, items: &[i32]) -> Value {
    json!({
        "name": name,
        "email": "contato@coleta.org",
        "whatsapp": "81999998888",
        "latitude": -8.0476,
        "longitude": -34.877,
        "city": city,
        "uf": uf,
        "items": items,
    })
}

/// Sends a request and returns the status with the body parsed as JSON
pub async fn send(app: &mut Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.call(request).await.unwrap();
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = if body.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body).unwrap_or(Value::String(String::from_utf8_lossy(&body).to_string()))
    };
    (status, value)
}

/// Sends a GET request
pub async fn get(app: &mut Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .uri(uri)
        .method("GET")
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

/// Sends a POST request with a JSON body
pub async fn post_json(app: &mut Router, uri: &str, body: &Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .uri(uri)
        .method("POST")
        .header("Content-Type", "application/json")
        .body(Body::from(serde_json::to_string(body).unwrap()))
        .unwrap();
    send(app, request).await
}

/// Registers a point via the API and returns it
pub async fn create_point(app: &mut Router, name: &str, city: &str, uf: &str, items: &[i32]) -> Point {
    let (status, body) = post_json(app, "/points", &point_body(name, city, uf, items)).await;
    assert_eq!(status, StatusCode::OK, "create failed: {}", body);
    serde_json::from_value(body).unwrap()
}

/// Builds the search URI for the given filters
pub fn search_uri(city: Option<&str>, uf: Option<&str>, items: Option<&str>) -> String {
    let mut params: Vec<(&str, &str)> = Vec::new();
    if let Some(city) = city {
        params.push(("city", city));
    }
    if let Some(uf) = uf {
        params.push(("uf", uf));
    }
    if let Some(items) = items {
        params.push(("items", items));
    }
    format!("/points?{}", serde_html_form::to_string(&params).unwrap())
}
