//! Read dispatch for `GET /products`.
//!
//! The query string selects exactly one lookup. Keys are checked in the
//! fixed order of [`LOOKUP_PRIORITY`]; the first key present wins and all
//! other keys are ignored. A query with none of these keys lists every
//! product.

use std::collections::HashMap;

use crate::error::CoreError;
use crate::types::DbId;

/// The product lookup selected by a request's query string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProductLookup {
    /// `?id=`: a single product by primary key.
    ById(DbId),
    /// `?category=`: every product referencing the category.
    ByCategory(DbId),
    /// `?slug=`: the first product carrying the slug.
    BySlug(String),
    /// `?made_in=`: every product with the given origin.
    ByMadeIn(String),
    /// No recognised key.
    All,
}

type LookupParser = fn(&str) -> Result<ProductLookup, CoreError>;

/// Recognised query keys, highest priority first.
pub const LOOKUP_PRIORITY: [(&str, LookupParser); 4] = [
    ("id", parse_by_id),
    ("category", parse_by_category),
    ("slug", parse_by_slug),
    ("made_in", parse_by_made_in),
];

impl ProductLookup {
    /// Select the lookup for a decoded query string.
    ///
    /// Returns `CoreError::Validation` when the winning key carries a value
    /// of the wrong type (e.g. `?id=abc`).
    pub fn from_query(params: &HashMap<String, String>) -> Result<Self, CoreError> {
        for (key, parse) in LOOKUP_PRIORITY {
            if let Some(value) = params.get(key) {
                return parse(value);
            }
        }
        Ok(Self::All)
    }

    /// Short label used in logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::ById(_) => "id",
            Self::ByCategory(_) => "category",
            Self::BySlug(_) => "slug",
            Self::ByMadeIn(_) => "made_in",
            Self::All => "all",
        }
    }
}

fn parse_by_id(value: &str) -> Result<ProductLookup, CoreError> {
    parse_db_id("id", value).map(ProductLookup::ById)
}

fn parse_by_category(value: &str) -> Result<ProductLookup, CoreError> {
    parse_db_id("category", value).map(ProductLookup::ByCategory)
}

fn parse_by_slug(value: &str) -> Result<ProductLookup, CoreError> {
    Ok(ProductLookup::BySlug(value.trim().to_string()))
}

fn parse_by_made_in(value: &str) -> Result<ProductLookup, CoreError> {
    Ok(ProductLookup::ByMadeIn(value.trim().to_string()))
}

fn parse_db_id(key: &str, value: &str) -> Result<DbId, CoreError> {
    value.trim().parse::<DbId>().map_err(|_| {
        CoreError::Validation(format!("{key} must be an integer id, got '{value}'"))
    })
}
