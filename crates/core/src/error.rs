use crate::types::TodoId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// The referenced id has no backing record. The "notfound" wording is
    /// part of the wire contract.
    #[error("{entity} with {id} notfound")]
    NotFound { entity: &'static str, id: TodoId },

    #[error("Validation failed: {0}")]
    Validation(String),

    /// A persisted record violates a storage invariant (e.g. missing id).
    #[error("Integrity violation: {0}")]
    Integrity(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
