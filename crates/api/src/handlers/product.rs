//! Handlers for the `/products` resource.
//!
//! Reads go through a single `GET /products` endpoint whose query string
//! selects the lookup (see [`ProductLookup`]). Writes take their target ids
//! in the JSON body.

use std::collections::HashMap;

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Deserialize;
use storefront_core::error::CoreError;
use storefront_core::lookup::ProductLookup;
use storefront_core::types::DbId;
use storefront_db::models::product::{NewProduct, Product, UpdateProduct};
use storefront_db::repositories::ProductRepo;
use validator::Validate;

use crate::error::{AppError, AppResult, OperationExt};
use crate::extract::ValidJson;
use crate::response::{DeletedQuantity, Envelope, ImportedQuantity};
use crate::state::AppState;

const FOUND: &str = "Product found";
const FIND_FAILED: &str = "Error finding the product";
const LISTED: &str = "Products found";
const LIST_FAILED: &str = "Error listing the products";
const CREATED: &str = "Product created successfully";
const CREATE_FAILED: &str = "Error creating the product";
const UPDATED: &str = "Product updated successfully";
const UPDATE_FAILED: &str = "Error updating the product";
const DELETED: &str = "Product deleted successfully";
const DELETE_FAILED: &str = "Error deleting the product";
const BULK_DELETED: &str = "Products deleted successfully";
const BULK_DELETE_FAILED: &str = "Error deleting the products";
const IMPORTED: &str = "Products imported successfully";
const IMPORT_FAILED: &str = "Error importing the products";

/// Request body naming a single product.
#[derive(Debug, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct ProductIdBody {
    pub id: DbId,
}

/// Request body naming a set of products.
#[derive(Debug, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct ProductIdsBody {
    pub products: Vec<DbId>,
}

/// Request body for a bulk import.
#[derive(Debug, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct ImportBody {
    #[validate(length(min = 1), nested)]
    pub products: Vec<NewProduct>,
}

/// GET /api/v1/products
///
/// `?id=`, `?category=`, `?slug=` or `?made_in=` select one lookup, in that
/// priority order; anything else lists every product with its category
/// expanded.
pub async fn find(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> AppResult<Response> {
    let lookup = ProductLookup::from_query(&params).during(FIND_FAILED)?;
    tracing::debug!(lookup = lookup.kind(), "Dispatching product lookup");

    let response = match lookup {
        ProductLookup::ById(id) => {
            let product = ProductRepo::find_by_id(&state.pool, id)
                .await
                .during(FIND_FAILED)?
                .ok_or_else(|| AppError::Core(CoreError::not_found("Product", id)))?;
            Json(Envelope::new(FOUND, product)).into_response()
        }
        ProductLookup::BySlug(slug) => {
            let product = ProductRepo::find_by_slug(&state.pool, &slug)
                .await
                .during(FIND_FAILED)?
                .ok_or_else(|| {
                    AppError::Core(CoreError::NotFound {
                        entity: "Product",
                        field: "slug",
                        value: slug.clone(),
                    })
                })?;
            Json(Envelope::new(FOUND, product)).into_response()
        }
        ProductLookup::ByCategory(category_id) => {
            let products = ProductRepo::list_by_category(&state.pool, category_id)
                .await
                .during(FIND_FAILED)?;
            Json(Envelope::new(FOUND, products)).into_response()
        }
        ProductLookup::ByMadeIn(made_in) => {
            let products = ProductRepo::list_by_made_in(&state.pool, &made_in)
                .await
                .during(FIND_FAILED)?;
            Json(Envelope::new(FOUND, products)).into_response()
        }
        ProductLookup::All => {
            let products = ProductRepo::list_with_categories(&state.pool)
                .await
                .during(LIST_FAILED)?;
            Json(Envelope::new(LISTED, products)).into_response()
        }
    };
    Ok(response)
}

/// POST /api/v1/products
pub async fn create(
    State(state): State<AppState>,
    body: Result<ValidJson<NewProduct>, AppError>,
) -> AppResult<(StatusCode, Json<Envelope<Product>>)> {
    let ValidJson(input) = body.during(CREATE_FAILED)?;
    let product = ProductRepo::create(&state.pool, &input)
        .await
        .during(CREATE_FAILED)?;
    tracing::info!(product_id = product.id, "Product created");
    Ok((StatusCode::CREATED, Json(Envelope::new(CREATED, product))))
}

/// PUT /api/v1/products
///
/// Partial update of name, price, images, description, featured and stock.
pub async fn update(
    State(state): State<AppState>,
    body: Result<ValidJson<UpdateProduct>, AppError>,
) -> AppResult<Json<Envelope<Product>>> {
    let ValidJson(input) = body.during(UPDATE_FAILED)?;
    let product = ProductRepo::update(&state.pool, &input)
        .await
        .during(UPDATE_FAILED)?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Product", input.id)))?;
    Ok(Json(Envelope::new(UPDATED, product)))
}

/// DELETE /api/v1/products
pub async fn delete_one(
    State(state): State<AppState>,
    body: Result<ValidJson<ProductIdBody>, AppError>,
) -> AppResult<Json<Envelope<Product>>> {
    let ValidJson(ProductIdBody { id }) = body.during(DELETE_FAILED)?;
    let product = ProductRepo::delete(&state.pool, id)
        .await
        .during(DELETE_FAILED)?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Product", id)))?;
    tracing::info!(product_id = id, "Product deleted");
    Ok(Json(Envelope::new(DELETED, product)))
}

/// POST /api/v1/products/delete-many
///
/// Ids that do not exist are ignored; the count reflects rows removed.
pub async fn delete_many(
    State(state): State<AppState>,
    body: Result<ValidJson<ProductIdsBody>, AppError>,
) -> AppResult<Json<Envelope<DeletedQuantity>>> {
    let ValidJson(ProductIdsBody { products }) = body.during(BULK_DELETE_FAILED)?;
    let deleted_quantity = ProductRepo::delete_many(&state.pool, &products)
        .await
        .during(BULK_DELETE_FAILED)?;
    tracing::info!(requested = products.len(), deleted = deleted_quantity, "Products deleted");
    Ok(Json(Envelope::new(
        BULK_DELETED,
        DeletedQuantity { deleted_quantity },
    )))
}

/// DELETE /api/v1/products/all
///
/// Irreversibly removes every product.
pub async fn delete_all(
    State(state): State<AppState>,
) -> AppResult<Json<Envelope<DeletedQuantity>>> {
    let deleted_quantity = ProductRepo::delete_all(&state.pool)
        .await
        .during(BULK_DELETE_FAILED)?;
    tracing::warn!(deleted = deleted_quantity, "All products deleted");
    Ok(Json(Envelope::new(
        BULK_DELETED,
        DeletedQuantity { deleted_quantity },
    )))
}

/// POST /api/v1/products/import
///
/// Inserts the whole batch in one transaction; any invalid item rejects
/// the batch and nothing is stored.
pub async fn import(
    State(state): State<AppState>,
    body: Result<ValidJson<ImportBody>, AppError>,
) -> AppResult<(StatusCode, Json<Envelope<ImportedQuantity>>)> {
    let ValidJson(ImportBody { products }) = body.during(IMPORT_FAILED)?;
    let imported_quantity = ProductRepo::create_many(&state.pool, &products)
        .await
        .during(IMPORT_FAILED)?;
    tracing::info!(imported = imported_quantity, "Products imported");
    Ok((
        StatusCode::CREATED,
        Json(Envelope::new(IMPORTED, ImportedQuantity { imported_quantity })),
    ))
}
