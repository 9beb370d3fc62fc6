//! # samaj-api
//!
//! Typed client for the Panchal Samaj census REST backend.
//!
//! Every call goes through one request wrapper ([`ApiClient::request`]) that
//! attaches the JSON headers and the bearer token, checks the status code and
//! parses the body. Resource calls are grouped per backend resource:
//! - auth (login, profile, password)
//! - dashboard (global, per chokhla, per village)
//! - chokhlas and villages
//! - families and their members
//! - family requests (approve / reject)
//! - chanda collection
//! - polls
//!
//! Create and update calls run the shared form validator first and return
//! [`ApiError::Validation`] without touching the network when it fails.

pub mod auth;
pub mod chanda;
pub mod chokhla;
pub mod dashboard;
pub mod family;
pub mod poll;
pub mod query;
pub mod request;
pub mod village;

mod error;
mod http;

pub use error::ApiError;
pub use query::ListQuery;
pub use reqwest::Method;

use samaj_config::ApiConfig;

/// HTTP client bound to one backend and, optionally, one session token.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    /// Build a client from the `[api]` config section.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Config`] if the section is invalid and
    /// [`ApiError::Http`] if the underlying `reqwest::Client` fails to build.
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        config.validate()?;
        let http = reqwest::Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(config.timeout())
            .build()?;
        Ok(Self {
            http,
            base_url: config.base_url().to_string(),
            token: None,
        })
    }

    /// Attach the session token sent as `Authorization: Bearer <token>`.
    #[must_use]
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        let token = token.into();
        self.token = (!token.trim().is_empty()).then_some(token);
        self
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    #[must_use]
    pub const fn has_token(&self) -> bool {
        self.token.is_some()
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}

/// Percent-encode one path segment (an id interpolated into a route).
pub(crate) fn segment(id: &str) -> std::borrow::Cow<'_, str> {
    urlencoding::encode(id)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(base_url: &str) -> ApiConfig {
        ApiConfig {
            base_url: base_url.into(),
            ..ApiConfig::default()
        }
    }

    #[test]
    fn trailing_slash_is_trimmed() {
        let client = ApiClient::new(&config("https://census.example.org/")).unwrap();
        assert_eq!(client.base_url(), "https://census.example.org");
        assert_eq!(
            client.url("/api/chokhlas"),
            "https://census.example.org/api/chokhlas"
        );
    }

    #[test]
    fn invalid_base_url_is_rejected() {
        let err = ApiClient::new(&config("census.example.org")).unwrap_err();
        assert!(matches!(err, ApiError::Config(_)));
    }

    #[test]
    fn blank_token_is_ignored() {
        let client = ApiClient::new(&config("http://localhost:5000"))
            .unwrap()
            .with_token("  ");
        assert!(!client.has_token());

        let client = client.with_token("tok_1");
        assert!(client.has_token());
    }

    #[test]
    fn ids_are_encoded_as_single_segments() {
        assert_eq!(segment("abc-123"), "abc-123");
        assert_eq!(segment("a/b c"), "a%2Fb%20c");
    }
}
