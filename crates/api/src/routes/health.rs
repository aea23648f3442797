//! Liveness endpoint, mounted at the root rather than under `/api/v1`.

use std::time::Instant;

use axum::extract::State;
use axum::http::StatusCode;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// `"ok"`, or `"degraded"` when the database is unreachable.
    pub status: &'static str,
    pub version: &'static str,
    pub db_healthy: bool,
    /// Round-trip time of the database probe.
    pub db_latency_ms: u128,
}

/// GET /health
///
/// Answers 503 while the database probe fails so load balancers can drain
/// the instance.
async fn health_check(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let started = Instant::now();
    let probe = storefront_db::health_check(&state.pool).await;
    let db_latency_ms = started.elapsed().as_millis();

    if let Err(err) = &probe {
        tracing::warn!(error = %err, "Database health probe failed");
    }

    let (status_code, status) = match probe {
        Ok(()) => (StatusCode::OK, "ok"),
        Err(_) => (StatusCode::SERVICE_UNAVAILABLE, "degraded"),
    };

    (
        status_code,
        Json(HealthResponse {
            status,
            version: env!("CARGO_PKG_VERSION"),
            db_healthy: status_code == StatusCode::OK,
            db_latency_ms,
        }),
    )
}

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
