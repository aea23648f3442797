use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use storefront_core::error::CoreError;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce the `{ message, error, code }`
/// failure envelope.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `storefront_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// An internal error with a human-readable message, e.g. a handler panic.
    #[error("Internal error: {0}")]
    InternalError(String),

    /// Any of the above, raised while performing a named operation.
    ///
    /// `message` becomes the envelope's `message` field.
    #[error("{message}: {source}")]
    Operation {
        message: &'static str,
        source: Box<AppError>,
    },
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// Attach the operation message shown to clients.
    ///
    /// An error that already carries a message keeps it.
    pub fn during(self, message: &'static str) -> Self {
        match self {
            op @ AppError::Operation { .. } => op,
            other => AppError::Operation {
                message,
                source: Box::new(other),
            },
        }
    }
}

/// Extension for tagging a fallible result with an operation message.
pub trait OperationExt<T> {
    fn during(self, message: &'static str) -> AppResult<T>;
}

impl<T, E: Into<AppError>> OperationExt<T> for Result<T, E> {
    fn during(self, message: &'static str) -> AppResult<T> {
        self.map_err(|err| err.into().during(message))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (operation, error) = match self {
            AppError::Operation { message, source } => (Some(message), *source),
            other => (None, other),
        };

        let (status, code, detail) = error.classify();

        let body = match &error {
            // Not-found keeps the `{ message, data: {} }` read envelope.
            AppError::Core(CoreError::NotFound { entity, .. }) => json!({
                "message": format!("{entity} not found"),
                "data": {},
                "error": detail,
                "code": code,
            }),
            _ => json!({
                "message": operation
                    .unwrap_or_else(|| status.canonical_reason().unwrap_or("Error")),
                "error": detail,
                "code": code,
            }),
        };

        (status, axum::Json(body)).into_response()
    }
}

impl AppError {
    /// Map to an HTTP status, error code, and client-safe message.
    fn classify(&self) -> (StatusCode, &'static str, String) {
        match self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::NotFound {
                    entity,
                    field,
                    value,
                } => (
                    StatusCode::NOT_FOUND,
                    "NOT_FOUND",
                    format!("{entity} with {field} {value} not found"),
                ),
                CoreError::Validation(msg) => {
                    (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
                }
                CoreError::Conflict(msg) => (StatusCode::CONFLICT, "CONFLICT", msg.clone()),
                CoreError::NotImplemented(msg) => {
                    (StatusCode::NOT_IMPLEMENTED, "NOT_IMPLEMENTED", msg.clone())
                }
            },

            // --- Database errors ---
            AppError::Database(err) => classify_sqlx_error(err),

            // --- HTTP-specific errors ---
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                internal()
            }

            AppError::Operation { source, .. } => source.classify(),
        }
    }
}

fn internal() -> (StatusCode, &'static str, String) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "INTERNAL_ERROR",
        "An internal error occurred".to_string(),
    )
}

/// Classify a sqlx error into an HTTP status, error code, and message.
///
/// - `RowNotFound` maps to 404.
/// - Unique constraint violations (constraint name starting with `uq_`) map to 409.
/// - Foreign key violations map to 400.
/// - Everything else maps to 500 with a sanitized message.
fn classify_sqlx_error(err: &sqlx::Error) -> (StatusCode, &'static str, String) {
    match err {
        sqlx::Error::RowNotFound => (
            StatusCode::NOT_FOUND,
            "NOT_FOUND",
            "Resource not found".to_string(),
        ),
        sqlx::Error::Database(db_err) => {
            let constraint = db_err.constraint().unwrap_or("unknown");
            match db_err.code().as_deref() {
                // PostgreSQL unique constraint violation
                Some("23505") if constraint.starts_with("uq_") => {
                    return (
                        StatusCode::CONFLICT,
                        "CONFLICT",
                        format!("Duplicate value violates unique constraint: {constraint}"),
                    );
                }
                // PostgreSQL foreign key violation
                Some("23503") => {
                    return (
                        StatusCode::BAD_REQUEST,
                        "VALIDATION_ERROR",
                        format!("Referenced record does not exist: {constraint}"),
                    );
                }
                _ => {}
            }
            tracing::error!(error = %db_err, "Database error");
            internal()
        }
        other => {
            tracing::error!(error = %other, "Database error");
            internal()
        }
    }
}
