//! Repository for the `products` table.

use std::collections::HashMap;

use sqlx::{PgConnection, PgPool};
use storefront_core::numeric_text::NumericText;
use storefront_core::types::DbId;

use crate::models::product::{NewProduct, Product, ProductWithCategory, UpdateProduct};
use crate::repositories::CategoryRepo;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, price, images, description, stock, featured, size, made_in, \
                       length, tall, upholstery, category_id, slug, created_at, updated_at";

/// Provides CRUD operations for products.
pub struct ProductRepo;

impl ProductRepo {
    /// Insert a new product, returning the created row.
    pub async fn create(pool: &PgPool, input: &NewProduct) -> Result<Product, sqlx::Error> {
        let mut conn = pool.acquire().await?;
        Self::insert(&mut *conn, input).await
    }

    /// Insert every product in one transaction. Either all rows are
    /// committed or none are. Returns the number of rows inserted.
    pub async fn create_many(pool: &PgPool, inputs: &[NewProduct]) -> Result<u64, sqlx::Error> {
        let mut tx = pool.begin().await?;
        for input in inputs {
            Self::insert(&mut *tx, input).await?;
        }
        tx.commit().await?;
        tracing::debug!(count = inputs.len(), "Bulk product insert committed");
        Ok(inputs.len() as u64)
    }

    /// Find a product by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Product>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM products WHERE id = $1");
        sqlx::query_as::<_, Product>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find the first product (lowest id) carrying `slug`.
    pub async fn find_by_slug(pool: &PgPool, slug: &str) -> Result<Option<Product>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM products WHERE slug = $1 ORDER BY id LIMIT 1");
        sqlx::query_as::<_, Product>(&query)
            .bind(slug)
            .fetch_optional(pool)
            .await
    }

    /// List products referencing a category, oldest first.
    pub async fn list_by_category(
        pool: &PgPool,
        category_id: DbId,
    ) -> Result<Vec<Product>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM products WHERE category_id = $1 ORDER BY id");
        sqlx::query_as::<_, Product>(&query)
            .bind(category_id)
            .fetch_all(pool)
            .await
    }

    /// List products with the given origin, oldest first.
    pub async fn list_by_made_in(
        pool: &PgPool,
        made_in: &str,
    ) -> Result<Vec<Product>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM products WHERE made_in = $1 ORDER BY id");
        sqlx::query_as::<_, Product>(&query)
            .bind(made_in)
            .fetch_all(pool)
            .await
    }

    /// List all products, oldest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Product>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM products ORDER BY id");
        sqlx::query_as::<_, Product>(&query).fetch_all(pool).await
    }

    /// List all products with their category expanded inline.
    pub async fn list_with_categories(
        pool: &PgPool,
    ) -> Result<Vec<ProductWithCategory>, sqlx::Error> {
        let products = Self::list(pool).await?;

        let mut category_ids: Vec<DbId> = products.iter().filter_map(|p| p.category_id).collect();
        category_ids.sort_unstable();
        category_ids.dedup();

        let categories: HashMap<DbId, _> = CategoryRepo::find_many(pool, &category_ids)
            .await?
            .into_iter()
            .map(|c| (c.id, c))
            .collect();

        Ok(products
            .into_iter()
            .map(|product| {
                let category = product
                    .category_id
                    .and_then(|id| categories.get(&id).cloned());
                ProductWithCategory { product, category }
            })
            .collect())
    }

    /// Update a product. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with `input.id` exists.
    pub async fn update(
        pool: &PgPool,
        input: &UpdateProduct,
    ) -> Result<Option<Product>, sqlx::Error> {
        let query = format!(
            "UPDATE products SET
                name = COALESCE($2, name),
                price = COALESCE($3, price),
                images = COALESCE($4, images),
                description = COALESCE($5, description),
                featured = COALESCE($6, featured),
                stock = COALESCE($7, stock)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Product>(&query)
            .bind(input.id)
            .bind(&input.name)
            .bind(input.price.as_ref().map(NumericText::to_stored))
            .bind(&input.images)
            .bind(&input.description)
            .bind(input.featured)
            .bind(input.stock.as_ref().map(NumericText::to_stored))
            .fetch_optional(pool)
            .await
    }

    /// Delete a product by ID, returning the removed row if it existed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<Option<Product>, sqlx::Error> {
        let query = format!("DELETE FROM products WHERE id = $1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, Product>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Delete every product whose id is in `ids`. Returns the number of rows removed.
    pub async fn delete_many(pool: &PgPool, ids: &[DbId]) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM products WHERE id = ANY($1)")
            .bind(ids)
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }

    /// Delete every product. Returns the number of rows removed.
    pub async fn delete_all(pool: &PgPool) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM products").execute(pool).await?;
        Ok(result.rows_affected())
    }

    /// Count all products.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM products")
            .fetch_one(pool)
            .await?;
        Ok(count)
    }

    async fn insert(conn: &mut PgConnection, input: &NewProduct) -> Result<Product, sqlx::Error> {
        let query = format!(
            "INSERT INTO products
                (name, price, images, description, stock, featured, size, made_in,
                 length, tall, upholstery, category_id, slug)
             VALUES ($1, $2, COALESCE($3, '{{}}'::TEXT[]), $4, $5, COALESCE($6, FALSE), $7, $8,
                     $9, $10, $11, $12, $13)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Product>(&query)
            .bind(&input.name)
            .bind(input.price.as_ref().map(NumericText::to_stored))
            .bind(&input.images)
            .bind(&input.description)
            .bind(input.stock.as_ref().map(NumericText::to_stored))
            .bind(input.featured)
            .bind(&input.size)
            .bind(&input.made_in)
            .bind(&input.length)
            .bind(&input.tall)
            .bind(&input.upholstery)
            .bind(input.category)
            .bind(input.resolved_slug())
            .fetch_one(conn)
            .await
    }
}
