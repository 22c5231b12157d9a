//! Cross-cutting error types for sampah.
//!
//! Transport failures (`ClientError`) and session failures (`AuthError`) live
//! in their own crates. Everything here is detected locally, before any
//! request is sent.

use thiserror::Error;

/// Errors raised by pure domain rules.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// Entity lookup returned no result.
    #[error("{entity_type} {id} not found")]
    NotFound { entity_type: String, id: String },

    /// A lifecycle transition was attempted that is not allowed.
    #[error("cannot move {entity_type} {id} from {from} to {to}")]
    InvalidTransition {
        entity_type: String,
        id: String,
        from: String,
        to: String,
    },

    /// User input failed validation.
    #[error("invalid input: {0}")]
    Validation(String),
}
