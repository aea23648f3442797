//! Tests for `AppError` → HTTP response mapping.
//!
//! These tests verify that each `AppError` variant produces the correct HTTP
//! status code, envelope message, error code and detail. They do NOT need
//! an HTTP server -- they call `IntoResponse` directly on `AppError` values.

use axum::http::StatusCode;
use axum::response::IntoResponse;
use http_body_util::BodyExt;
use storefront_api::error::{AppError, OperationExt};
use storefront_core::error::CoreError;

/// Helper: convert an `AppError` into its status code and parsed JSON body.
async fn error_to_response(err: AppError) -> (StatusCode, serde_json::Value) {
    let response = err.into_response();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

// ---------------------------------------------------------------------------
// Test: CoreError::NotFound maps to 404 with the read envelope
// ---------------------------------------------------------------------------

#[tokio::test]
async fn not_found_error_returns_404_with_empty_data() {
    let err =
        AppError::Core(CoreError::not_found("Product", 42)).during("Error finding the product");

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["message"], "Product not found");
    assert_eq!(json["data"], serde_json::json!({}));
    assert_eq!(json["code"], "NOT_FOUND");
    assert_eq!(json["error"], "Product with id 42 not found");
}

// ---------------------------------------------------------------------------
// Test: operation message becomes the envelope message
// ---------------------------------------------------------------------------

#[tokio::test]
async fn operation_message_is_used_for_failures() {
    let err =
        AppError::BadRequest("invalid field value".into()).during("Error creating the product");

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["message"], "Error creating the product");
    assert_eq!(json["code"], "BAD_REQUEST");
    assert_eq!(json["error"], "invalid field value");
    assert!(json.get("data").is_none());
}

#[tokio::test]
async fn first_operation_message_wins() {
    let err = AppError::BadRequest("x".into())
        .during("Error importing the products")
        .during("Error creating the product");

    let (_, json) = error_to_response(err).await;

    assert_eq!(json["message"], "Error importing the products");
}

#[tokio::test]
async fn result_extension_tags_errors() {
    let result: Result<(), CoreError> = Err(CoreError::Validation("bad id".into()));
    let err = result.during("Error finding the product").unwrap_err();

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["message"], "Error finding the product");
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"], "bad id");
}

// ---------------------------------------------------------------------------
// Test: untagged errors fall back to the status reason
// ---------------------------------------------------------------------------

#[tokio::test]
async fn untagged_error_uses_status_reason() {
    let (status, json) = error_to_response(AppError::BadRequest("nope".into())).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["message"], "Bad Request");
}

// ---------------------------------------------------------------------------
// Test: remaining CoreError variants
// ---------------------------------------------------------------------------

#[tokio::test]
async fn conflict_error_returns_409() {
    let err = AppError::Core(CoreError::Conflict("duplicate slug".into()));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(json["code"], "CONFLICT");
    assert_eq!(json["error"], "duplicate slug");
}

#[tokio::test]
async fn not_implemented_error_returns_501() {
    let err = AppError::Core(CoreError::NotImplemented("checkout".into()))
        .during("Error processing the purchase");

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::NOT_IMPLEMENTED);
    assert_eq!(json["code"], "NOT_IMPLEMENTED");
    assert_eq!(json["message"], "Error processing the purchase");
}

// ---------------------------------------------------------------------------
// Test: internal errors are sanitized
// ---------------------------------------------------------------------------

#[tokio::test]
async fn internal_error_returns_500_and_sanitizes_message() {
    let err = AppError::InternalError("secret database credentials leaked".into());

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["code"], "INTERNAL_ERROR");
    assert_eq!(json["error"], "An internal error occurred");
}

// ---------------------------------------------------------------------------
// Test: sqlx errors
// ---------------------------------------------------------------------------

#[tokio::test]
async fn row_not_found_returns_404() {
    let err = AppError::Database(sqlx::Error::RowNotFound);

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["code"], "NOT_FOUND");
}

#[tokio::test]
async fn pool_timeout_is_sanitized_500() {
    let err = AppError::Database(sqlx::Error::PoolTimedOut).during("Error listing the products");

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["message"], "Error listing the products");
    assert_eq!(json["error"], "An internal error occurred");
}
