//! Text storage for numeric catalog fields.
//!
//! `price` and `stock` are persisted as text. Clients may send either a
//! JSON number or a string; numbers are rendered in their shortest decimal
//! form (`100` → `"100"`, `12.5` → `"12.5"`, `100.0` → `"100"`) and
//! strings are stored verbatim. No numeric validation is applied.

use serde::{Deserialize, Serialize};
use serde_json::Number;

/// A JSON number or string destined for a text column.
///
/// Any other JSON type (bool, array, object, null) fails deserialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NumericText {
    Number(Number),
    Text(String),
}

impl NumericText {
    /// The exact text written to the database.
    pub fn to_stored(&self) -> String {
        match self {
            Self::Text(text) => text.clone(),
            Self::Number(number) => format_number(number),
        }
    }
}

impl From<i64> for NumericText {
    fn from(value: i64) -> Self {
        Self::Number(value.into())
    }
}

impl From<&str> for NumericText {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

fn format_number(number: &Number) -> String {
    if let Some(int) = number.as_i64() {
        return int.to_string();
    }
    if let Some(uint) = number.as_u64() {
        return uint.to_string();
    }
    // f64's Display drops a zero fraction ("100") and never uses exponents.
    number
        .as_f64()
        .map_or_else(|| number.to_string(), |float| float.to_string())
}
