//! Category entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use storefront_core::slug::slugify;
use storefront_core::types::{DbId, Timestamp};
use validator::{Validate, ValidationError};

use super::{validate_derived_slug, validate_slug_field};

/// A row from the `categories` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Category {
    pub id: DbId,
    pub name: String,
    pub slug: String,
    pub created_at: Timestamp,
}

/// DTO for creating a category. `slug` is derived from `name` when omitted.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
#[validate(schema(function = "validate_new_category_slug"))]
pub struct CreateCategory {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[validate(custom(function = "validate_slug_field"))]
    pub slug: Option<String>,
}

impl CreateCategory {
    /// The slug to store: the supplied one, or one derived from `name`.
    pub fn resolved_slug(&self) -> String {
        self.slug.clone().unwrap_or_else(|| slugify(&self.name))
    }
}

fn validate_new_category_slug(input: &CreateCategory) -> Result<(), ValidationError> {
    validate_derived_slug(&input.name, input.slug.as_deref())
}
