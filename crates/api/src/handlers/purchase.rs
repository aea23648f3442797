//! Handler for `POST /products/buy`.
//!
//! Checkout is not offered yet: the request is validated and then always
//! answered with 501.

use axum::Json;
use serde::Deserialize;
use storefront_core::error::CoreError;
use storefront_core::types::DbId;
use validator::Validate;

use crate::error::{AppError, AppResult, OperationExt};
use crate::extract::ValidJson;
use crate::response::Envelope;

const PURCHASE_FAILED: &str = "Error processing the purchase";

/// Request body for a purchase.
#[derive(Debug, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct PurchaseRequest {
    /// Buyer's user id.
    #[serde(rename = "boughtBy")]
    pub bought_by: DbId,
    /// Product ids in the basket.
    #[validate(length(min = 1))]
    pub products: Vec<DbId>,
}

/// POST /api/v1/products/buy
pub async fn buy(
    body: Result<ValidJson<PurchaseRequest>, AppError>,
) -> AppResult<Json<Envelope<()>>> {
    let ValidJson(request) = body.during(PURCHASE_FAILED)?;
    tracing::info!(
        bought_by = request.bought_by,
        items = request.products.len(),
        "Purchase requested but not supported"
    );
    Err(AppError::Core(CoreError::NotImplemented(
        "Purchasing is not available yet".to_string(),
    ))
    .during(PURCHASE_FAILED))
}
