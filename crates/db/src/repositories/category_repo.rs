//! Repository for the `categories` table.

use sqlx::PgPool;
use storefront_core::types::DbId;

use crate::models::category::{Category, CreateCategory};

const COLUMNS: &str = "id, name, slug, created_at";

/// Unique constraint on `categories.slug`.
pub const SLUG_UNIQUE_CONSTRAINT: &str = "uq_categories_slug";

/// Provides CRUD operations for categories.
pub struct CategoryRepo;

impl CategoryRepo {
    /// Insert a new category, deriving the slug from the name when omitted.
    ///
    /// A duplicate slug violates [`SLUG_UNIQUE_CONSTRAINT`].
    pub async fn create(pool: &PgPool, input: &CreateCategory) -> Result<Category, sqlx::Error> {
        let slug = input.resolved_slug();
        let query = format!(
            "INSERT INTO categories (name, slug) VALUES ($1, $2) RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Category>(&query)
            .bind(&input.name)
            .bind(slug)
            .fetch_one(pool)
            .await
    }

    /// Fetch every category whose id is in `ids`. Missing ids are skipped.
    pub async fn find_many(pool: &PgPool, ids: &[DbId]) -> Result<Vec<Category>, sqlx::Error> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        let query = format!("SELECT {COLUMNS} FROM categories WHERE id = ANY($1)");
        sqlx::query_as::<_, Category>(&query)
            .bind(ids)
            .fetch_all(pool)
            .await
    }

    /// List all categories ordered by name.
    pub async fn list(pool: &PgPool) -> Result<Vec<Category>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM categories ORDER BY name, id");
        sqlx::query_as::<_, Category>(&query).fetch_all(pool).await
    }
}
