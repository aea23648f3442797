//! Shared response envelope types for API handlers.
//!
//! Successful responses use a `{ "message": ..., "data": ... }` envelope.
//! Failures are rendered by [`crate::error::AppError`] as
//! `{ "message": ..., "error": ..., "code": ... }`.

use serde::Serialize;

/// Standard `{ "message": &str, "data": T }` response envelope.
///
/// # Example
///
/// ```ignore
/// Ok(Json(Envelope::new("Product found", product)))
/// ```
#[derive(Debug, Serialize)]
pub struct Envelope<T: Serialize> {
    pub message: &'static str,
    pub data: T,
}

impl<T: Serialize> Envelope<T> {
    pub fn new(message: &'static str, data: T) -> Self {
        Self { message, data }
    }
}

/// Payload of bulk delete responses.
#[derive(Debug, Serialize)]
pub struct DeletedQuantity {
    pub deleted_quantity: u64,
}

/// Payload of bulk import responses.
#[derive(Debug, Serialize)]
pub struct ImportedQuantity {
    pub imported_quantity: u64,
}
