use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// No row matched `field = value` for the given entity.
    #[error("Entity not found: {entity} with {field} {value}")]
    NotFound {
        entity: &'static str,
        field: &'static str,
        value: String,
    },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Not implemented: {0}")]
    NotImplemented(String),
}

impl CoreError {
    /// Not-found error for a lookup by primary key.
    pub fn not_found(entity: &'static str, id: DbId) -> Self {
        Self::NotFound {
            entity,
            field: "id",
            value: id.to_string(),
        }
    }
}
