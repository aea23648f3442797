//! Integration tests for the health check endpoint and general HTTP behaviour.

mod common;

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use common::{body_json, get};
use sqlx::PgPool;
use tower::ServiceExt;

#[sqlx::test(migrations = "../../db/migrations")]
async fn health_check_returns_ok_with_json(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/health").await;

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["status"], "ok");
    assert!(json["version"].is_string());
    assert_eq!(json["db_healthy"], true);
    assert!(json["db_latency_ms"].is_number());
}

#[tokio::test]
async fn health_check_reports_unreachable_database() {
    let app = common::build_test_app(common::lazy_pool());
    let response = get(app, "/health").await;

    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    let json = body_json(response).await;
    assert_eq!(json["status"], "degraded");
    assert_eq!(json["db_healthy"], false);
}

#[tokio::test]
async fn unknown_route_returns_404() {
    let app = common::build_test_app(common::lazy_pool());
    let response = get(app, "/this-route-does-not-exist").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn response_contains_x_request_id_header() {
    let app = common::build_test_app(common::lazy_pool());
    let response = get(app, "/api/v1/products?id=abc").await;

    let request_id = response
        .headers()
        .get("x-request-id")
        .expect("Response must contain an x-request-id header");

    // The value should be a UUID (36 chars with hyphens).
    assert_eq!(request_id.to_str().unwrap().len(), 36);
}

#[tokio::test]
async fn cors_preflight_returns_correct_headers() {
    let app = common::build_test_app(common::lazy_pool());

    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/api/v1/products")
        .header("Origin", "http://localhost:5173")
        .header("Access-Control-Request-Method", "DELETE")
        .header("Access-Control-Request-Headers", "content-type")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let headers = response.headers();
    let allow_origin = headers
        .get("access-control-allow-origin")
        .expect("Missing Access-Control-Allow-Origin header")
        .to_str()
        .unwrap();
    assert_eq!(allow_origin, "http://localhost:5173");

    let allow_methods = headers
        .get("access-control-allow-methods")
        .expect("Missing Access-Control-Allow-Methods header")
        .to_str()
        .unwrap();
    assert!(
        allow_methods.contains("DELETE"),
        "Allow-Methods should contain DELETE, got: {allow_methods}"
    );
}

#[tokio::test]
async fn cors_response_exposes_request_id() {
    let app = common::build_test_app(common::lazy_pool());

    let request = Request::builder()
        .method(Method::GET)
        .uri("/api/v1/products?id=abc")
        .header("Origin", "http://localhost:5173")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    let exposed = response
        .headers()
        .get("access-control-expose-headers")
        .expect("Missing Access-Control-Expose-Headers header")
        .to_str()
        .unwrap();
    assert!(
        exposed.contains("x-request-id"),
        "Expose-Headers should contain x-request-id, got: {exposed}"
    );
    assert!(response.headers().contains_key("x-request-id"));
}
