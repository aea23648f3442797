//! Handlers for the `/categories` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use storefront_core::error::CoreError;
use storefront_db::models::category::{Category, CreateCategory};
use storefront_db::repositories::category_repo::SLUG_UNIQUE_CONSTRAINT;
use storefront_db::repositories::CategoryRepo;

use crate::error::{AppError, AppResult, OperationExt};
use crate::extract::ValidJson;
use crate::response::Envelope;
use crate::state::AppState;

/// GET /api/v1/categories
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Envelope<Vec<Category>>>> {
    let categories = CategoryRepo::list(&state.pool)
        .await
        .during("Error finding the categories")?;
    Ok(Json(Envelope::new("Categories found", categories)))
}

/// POST /api/v1/categories
///
/// Returns 409 if the given or derived slug is already taken.
pub async fn create(
    State(state): State<AppState>,
    body: Result<ValidJson<CreateCategory>, AppError>,
) -> AppResult<(StatusCode, Json<Envelope<Category>>)> {
    const CREATE_FAILED: &str = "Error creating the category";

    let ValidJson(input) = body.during(CREATE_FAILED)?;
    let category = CategoryRepo::create(&state.pool, &input)
        .await
        .map_err(|err| slug_conflict(err, &input))
        .during(CREATE_FAILED)?;
    tracing::info!(category_id = category.id, slug = %category.slug, "Category created");
    Ok((
        StatusCode::CREATED,
        Json(Envelope::new("Category created successfully", category)),
    ))
}

/// Turn a violation of the category slug constraint into a readable conflict.
fn slug_conflict(err: sqlx::Error, input: &CreateCategory) -> AppError {
    let taken = matches!(
        &err,
        sqlx::Error::Database(db_err) if db_err.constraint() == Some(SLUG_UNIQUE_CONSTRAINT)
    );
    if taken {
        AppError::Core(CoreError::Conflict(format!(
            "A category with slug '{}' already exists",
            input.resolved_slug()
        )))
    } else {
        AppError::Database(err)
    }
}
