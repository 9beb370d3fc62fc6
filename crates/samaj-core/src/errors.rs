//! Cross-cutting error types for the census crates.
//!
//! Transport and configuration errors live in their own crates
//! (`ApiError`, `ConfigError`, `AuthError`); the CLI converges them with
//! `anyhow`. `CoreError` covers the rules the client checks before any
//! request is sent.

use thiserror::Error;

use crate::validation::FieldErrors;

/// Errors that can be raised by any census crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A status transition was attempted that is not allowed.
    #[error("Invalid state transition: {entity_type} {id} from {from} to {to}")]
    InvalidTransition {
        entity_type: String,
        id: String,
        from: String,
        to: String,
    },

    /// A form failed client-side validation.
    #[error(transparent)]
    Validation(#[from] FieldErrors),
}
