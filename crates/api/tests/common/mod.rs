#![allow(dead_code)]

use std::net::{IpAddr, Ipv4Addr};
use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tower::ServiceExt;

use storefront_api::app::build_app;
use storefront_api::config::{CorsOrigins, LogFormat, ServerConfig};
use storefront_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:5173` as the only CORS origin and a 30-second
/// request timeout.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: IpAddr::V4(Ipv4Addr::LOCALHOST),
        port: 0,
        database_url: "postgres://localhost/storefront_test".to_string(),
        db_max_connections: 5,
        cors_origins: CorsOrigins::List(vec!["http://localhost:5173".parse().unwrap()]),
        request_timeout_secs: 30,
        log_format: LogFormat::Pretty,
    }
}

/// Build the full application router, with the production middleware
/// stack, over the given pool.
pub fn build_test_app(pool: PgPool) -> Router {
    build_app(AppState {
        pool,
        config: Arc::new(test_config()),
    })
}

/// A pool that never connects unless a query runs. For tests whose requests
/// are rejected before reaching the database.
pub fn lazy_pool() -> PgPool {
    PgPoolOptions::new()
        .acquire_timeout(Duration::from_secs(1))
        .connect_lazy("postgres://localhost:1/unreachable")
        .unwrap()
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn send(
    app: Router,
    method: Method,
    uri: &str,
    body: Option<serde_json::Value>,
) -> Response<Body> {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, None).await
}

pub async fn post_json(app: Router, uri: &str, json: serde_json::Value) -> Response<Body> {
    send(app, Method::POST, uri, Some(json)).await
}

pub async fn put_json(app: Router, uri: &str, json: serde_json::Value) -> Response<Body> {
    send(app, Method::PUT, uri, Some(json)).await
}

pub async fn delete_json(app: Router, uri: &str, json: serde_json::Value) -> Response<Body> {
    send(app, Method::DELETE, uri, Some(json)).await
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::DELETE, uri, None).await
}

/// Send raw bytes as a JSON body, for malformed-payload tests.
pub async fn post_raw(app: Router, uri: &str, raw: &'static str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(raw))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Create a product through the API and return its id.
pub async fn create_product(pool: &PgPool, json: serde_json::Value) -> i64 {
    let response = post_json(build_test_app(pool.clone()), "/api/v1/products", json).await;
    assert_eq!(response.status(), axum::http::StatusCode::CREATED);
    body_json(response).await["data"]["id"].as_i64().unwrap()
}

/// Create a category through the API and return its id.
pub async fn create_category(pool: &PgPool, name: &str) -> i64 {
    let response = post_json(
        build_test_app(pool.clone()),
        "/api/v1/categories",
        serde_json::json!({ "name": name }),
    )
    .await;
    assert_eq!(response.status(), axum::http::StatusCode::CREATED);
    body_json(response).await["data"]["id"].as_i64().unwrap()
}
