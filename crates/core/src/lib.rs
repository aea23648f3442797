//! Storefront domain logic shared by the database and API crates.
//!
//! Everything here is pure: no I/O, no database access.

pub mod error;
pub mod lookup;
pub mod numeric_text;
pub mod slug;
pub mod types;
