//! Domain-level error type shared by the db and api crates.

use crate::types::DbId;

/// Errors produced by domain logic.
///
/// The api crate maps each variant to an HTTP status code; nothing in this
/// crate knows about HTTP.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// An entity lookup found no row.
    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: DbId },

    /// Input failed a domain validation rule.
    #[error("Validation error: {0}")]
    Validation(String),

    /// The request conflicts with existing state.
    #[error("Conflict: {0}")]
    Conflict(String),

    /// The caller is not authenticated.
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// The caller is authenticated but not allowed to do this.
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// An unexpected internal failure.
    #[error("Internal error: {0}")]
    Internal(String),
}
