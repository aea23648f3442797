pub mod category;
pub mod health;
pub mod product;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /products                    find (?id|category|slug|made_in), create, update, delete one
/// /products/delete-many        delete a set of products (POST)
/// /products/all                delete every product (DELETE)
/// /products/import             bulk import (POST)
/// /products/buy                purchase, not implemented (POST)
///
/// /categories                  list, create
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/products", product::router())
        .nest("/categories", category::router())
}
