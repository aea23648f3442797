//! Route definitions for the `/products` resource.

use axum::routing::{delete, get, post};
use axum::Router;

use crate::handlers::{product, purchase};
use crate::state::AppState;

/// Routes mounted at `/products`.
///
/// ```text
/// GET    /               -> find   (?id= | ?category= | ?slug= | ?made_in=)
/// POST   /               -> create
/// PUT    /               -> update      (body: id + fields)
/// DELETE /               -> delete_one  (body: id)
/// POST   /delete-many    -> delete_many (body: products)
/// DELETE /all            -> delete_all
/// POST   /import         -> import      (body: products)
/// POST   /buy            -> buy
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(product::find)
                .post(product::create)
                .put(product::update)
                .delete(product::delete_one),
        )
        .route("/delete-many", post(product::delete_many))
        .route("/all", delete(product::delete_all))
        .route("/import", post(product::import))
        .route("/buy", post(purchase::buy))
}
