//! Domain error taxonomy shared by every crate in the workspace.

use crate::types::DbId;

/// Domain-level error type.
///
/// The API layer maps each variant onto an HTTP status code; nothing in
/// this crate knows about HTTP.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// A referenced entity does not exist.
    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: DbId },

    /// A referenced entity does not exist, looked up by a natural key
    /// rather than an id.
    #[error("{0} not found")]
    UnknownEntity(&'static str),

    /// Malformed or missing input.
    #[error("Validation error: {0}")]
    Validation(String),

    /// The requested action is incompatible with the entity's state.
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Missing or invalid credentials.
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Authenticated, but the caller's role does not permit the action.
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// An unexpected internal failure.
    #[error("Internal error: {0}")]
    Internal(String),
}
