//! Product entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use storefront_core::numeric_text::NumericText;
use storefront_core::slug::slugify;
use storefront_core::types::{DbId, Timestamp};
use validator::{Validate, ValidationError};

use super::category::Category;
use super::{validate_derived_slug, validate_slug_field};

/// A row from the `products` table.
///
/// `price` and `stock` are free text; see [`NumericText`] for how numeric
/// input is rendered.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Product {
    pub id: DbId,
    pub name: String,
    pub price: Option<String>,
    pub images: Vec<String>,
    pub description: Option<String>,
    pub stock: Option<String>,
    pub featured: bool,
    pub size: Option<String>,
    pub made_in: Option<String>,
    pub length: Option<String>,
    pub tall: Option<String>,
    pub upholstery: Option<String>,
    pub category_id: Option<DbId>,
    pub slug: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A product with its category reference expanded inline.
#[derive(Debug, Clone, Serialize)]
pub struct ProductWithCategory {
    #[serde(flatten)]
    pub product: Product,
    pub category: Option<Category>,
}

/// DTO for inserting a product, used by both single create and bulk import.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
#[validate(schema(function = "validate_new_product_slug"))]
pub struct NewProduct {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    pub price: Option<NumericText>,
    pub images: Option<Vec<String>>,
    #[validate(length(max = 200))]
    pub description: Option<String>,
    pub featured: Option<bool>,
    pub stock: Option<NumericText>,
    #[validate(length(max = 100))]
    pub size: Option<String>,
    #[validate(length(max = 100))]
    pub made_in: Option<String>,
    #[validate(length(max = 100))]
    pub length: Option<String>,
    #[validate(length(max = 100))]
    pub tall: Option<String>,
    #[validate(length(max = 100))]
    pub upholstery: Option<String>,
    /// Category id.
    pub category: Option<DbId>,
    #[validate(custom(function = "validate_slug_field"))]
    pub slug: Option<String>,
}

impl NewProduct {
    /// A product with only a name; every other field left unset.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            price: None,
            images: None,
            description: None,
            featured: None,
            stock: None,
            size: None,
            made_in: None,
            length: None,
            tall: None,
            upholstery: None,
            category: None,
            slug: None,
        }
    }

    /// The slug to store: the supplied one, or one derived from `name`.
    pub fn resolved_slug(&self) -> String {
        self.slug.clone().unwrap_or_else(|| slugify(&self.name))
    }
}

fn validate_new_product_slug(input: &NewProduct) -> Result<(), ValidationError> {
    validate_derived_slug(&input.name, input.slug.as_deref())
}

/// DTO for a partial product update.
///
/// Only these fields can change; absent fields keep their stored value.
/// Category, slug, origin and dimensions are not updatable.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct UpdateProduct {
    pub id: DbId,
    #[validate(length(min = 1, max = 100))]
    pub name: Option<String>,
    pub price: Option<NumericText>,
    pub images: Option<Vec<String>>,
    #[validate(length(max = 200))]
    pub description: Option<String>,
    pub featured: Option<bool>,
    pub stock: Option<NumericText>,
}
