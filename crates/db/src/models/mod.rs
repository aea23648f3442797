//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - `Deserialize` + `Validate` DTOs for writes, rejecting unknown fields

pub mod category;
pub mod product;

use std::borrow::Cow;

use storefront_core::slug::{slugify, validate_slug};
use validator::ValidationError;

/// `validator` adapter for [`storefront_core::slug::validate_slug`].
pub(crate) fn validate_slug_field(slug: &str) -> Result<(), ValidationError> {
    validate_slug(slug).map_err(|err| {
        ValidationError::new("slug").with_message(Cow::Owned(err.to_string()))
    })
}

/// When no slug is supplied, the one derived from `name` must be valid.
pub(crate) fn validate_derived_slug(
    name: &str,
    slug: Option<&str>,
) -> Result<(), ValidationError> {
    if slug.is_some() {
        return Ok(());
    }
    validate_slug(&slugify(name)).map_err(|_| {
        ValidationError::new("slug").with_message(Cow::Owned(format!(
            "name '{name}' has no letters or digits to build a slug from; supply a slug"
        )))
    })
}
