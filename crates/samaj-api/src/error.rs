//! API client error types.

use samaj_config::ConfigError;
use samaj_core::errors::CoreError;
use samaj_core::validation::FieldErrors;
use thiserror::Error;

/// Errors returned by [`crate::ApiClient`].
///
/// Every failed call is logged once by the request wrapper before it is
/// returned, so callers only need to present it.
#[derive(Debug, Error)]
pub enum ApiError {
    /// HTTP transport error (connect, timeout, body read).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Backend returned a non-success status code.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code returned by the backend.
        status: u16,
        /// Backend `message` field, or the raw response body.
        message: String,
    },

    /// Failed to parse a backend response.
    #[error("parse error: {0}")]
    Parse(String),

    /// The backend returned 429 Too Many Requests.
    #[error("rate limited; retry after {retry_after_secs}s")]
    RateLimited {
        /// Seconds the backend asked the client to wait.
        retry_after_secs: u64,
    },

    /// The payload failed client-side validation; nothing was sent.
    #[error(transparent)]
    Validation(#[from] FieldErrors),

    /// A workflow rule was violated before the request was sent.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// The API section of the configuration is unusable.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl ApiError {
    /// HTTP status of a backend rejection, if this is one.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            Self::RateLimited { .. } => Some(429),
            _ => None,
        }
    }

    /// Whether the backend rejected the session (401/403).
    #[must_use]
    pub const fn is_unauthorized(&self) -> bool {
        matches!(self.status(), Some(401 | 403))
    }
}
