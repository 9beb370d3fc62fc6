//! The request wrapper shared by every resource call.
//!
//! Centralizes header construction, status-code checks (429 with
//! `Retry-After`, non-success → [`ApiError::Api`]) and body parsing so the
//! resource modules stay focused on routes and payloads.

use reqwest::Method;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::{ApiClient, error::ApiError};

const JSON: &str = "application/json";

impl ApiClient {
    /// Send one request to `path` (relative to the base URL) and parse the
    /// JSON response into `T`.
    ///
    /// An empty body (`204 No Content`) parses as JSON `null`, so callers that
    /// expect nothing back use `()` or [`serde::de::IgnoredAny`]. Failures are
    /// logged here and returned unchanged; nothing is retried.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Http`] on transport failure, [`ApiError::Api`] or
    /// [`ApiError::RateLimited`] on a non-success status, and
    /// [`ApiError::Parse`] when the body does not match `T`.
    pub async fn request<T, B>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let url = self.url(path);
        tracing::debug!(%method, %url, "api request");
        let result = self.execute(method.clone(), &url, body).await;
        if let Err(error) = &result {
            tracing::error!(%method, %url, %error, "api request failed");
        }
        result
    }

    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.request::<T, ()>(Method::GET, path, None).await
    }

    async fn execute<T, B>(&self, method: Method, url: &str, body: Option<&B>) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let mut builder = self
            .http
            .request(method, url)
            .header(ACCEPT, JSON)
            .header(CONTENT_TYPE, JSON);
        if let Some(token) = &self.token {
            builder = builder.bearer_auth(token);
        }
        if let Some(body) = body {
            let bytes = serde_json::to_vec(body).map_err(|e| ApiError::Parse(e.to_string()))?;
            builder = builder.body(bytes);
        }

        let resp = check_response(builder.send().await?).await?;
        let bytes = resp.bytes().await?;
        parse_body(&bytes)
    }
}

/// Check an HTTP response for error statuses.
///
/// Returns the response unchanged on success. Handles:
/// - **429 Too Many Requests** → [`ApiError::RateLimited`] with `Retry-After`
///   parsing (falls back to 60 s if absent or unparseable).
/// - **Non-success status** → [`ApiError::Api`] carrying the backend's
///   `message` (or `error`) field, or the raw body when it is not JSON.
pub async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, ApiError> {
    if resp.status() == 429 {
        let retry_after = parse_retry_after(&resp);
        return Err(ApiError::RateLimited {
            retry_after_secs: retry_after,
        });
    }
    if !resp.status().is_success() {
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        return Err(ApiError::Api {
            status: status.as_u16(),
            message: error_message(&body)
                .unwrap_or_else(|| status.canonical_reason().unwrap_or("request failed").to_string()),
        });
    }
    Ok(resp)
}

fn parse_retry_after(resp: &reqwest::Response) -> u64 {
    resp.headers()
        .get(reqwest::header::RETRY_AFTER)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(60)
}

/// Extract a human message from an error body.
fn error_message(body: &str) -> Option<String> {
    let body = body.trim();
    if body.is_empty() {
        return None;
    }
    let from_json = serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|value| {
            ["message", "error"]
                .iter()
                .find_map(|key| value.get(key)?.as_str().map(str::to_string))
        });
    Some(from_json.unwrap_or_else(|| body.to_string()))
}

fn parse_body<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, ApiError> {
    let bytes = if bytes.iter().all(u8::is_ascii_whitespace) {
        b"null".as_slice()
    } else {
        bytes
    };
    serde_json::from_slice(bytes).map_err(|e| ApiError::Parse(e.to_string()))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use samaj_core::entities::Chokhla;

    use super::*;

    fn mock_response(status: u16, body: &'static str) -> reqwest::Response {
        reqwest::Response::from(
            ::http::Response::builder()
                .status(status)
                .body(body)
                .unwrap(),
        )
    }

    fn mock_response_with_retry_after(status: u16, value: &str) -> reqwest::Response {
        reqwest::Response::from(
            ::http::Response::builder()
                .status(status)
                .header("Retry-After", value)
                .body("")
                .unwrap(),
        )
    }

    #[test]
    fn parse_retry_after_from_header() {
        let resp = mock_response_with_retry_after(429, "120");
        assert_eq!(parse_retry_after(&resp), 120);
    }

    #[test]
    fn parse_retry_after_non_numeric() {
        let resp = mock_response_with_retry_after(429, "soon");
        assert_eq!(parse_retry_after(&resp), 60);
    }

    #[tokio::test]
    async fn rate_limited_default() {
        let err = check_response(mock_response(429, "")).await.unwrap_err();
        assert!(matches!(
            err,
            ApiError::RateLimited {
                retry_after_secs: 60
            }
        ));
    }

    #[tokio::test]
    async fn api_error_uses_backend_message() {
        let resp = mock_response(400, r#"{"success":false,"message":"Mobile already registered"}"#);
        let err = check_response(resp).await.unwrap_err();
        match err {
            ApiError::Api { status, message } => {
                assert_eq!(status, 400);
                assert_eq!(message, "Mobile already registered");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn api_error_falls_back_to_raw_body_then_reason() {
        let err = check_response(mock_response(502, "Bad gateway from proxy"))
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Api { status: 502, ref message } if message == "Bad gateway from proxy"));

        let err = check_response(mock_response(404, "")).await.unwrap_err();
        assert!(matches!(err, ApiError::Api { status: 404, ref message } if message == "Not Found"));
    }

    #[tokio::test]
    async fn success_passes_through() {
        assert!(check_response(mock_response(204, "")).await.is_ok());
    }

    #[test]
    fn error_message_prefers_message_then_error() {
        assert_eq!(error_message(r#"{"error":"Invalid token"}"#).as_deref(), Some("Invalid token"));
        assert_eq!(
            error_message(r#"{"message":"A","error":"B"}"#).as_deref(),
            Some("A")
        );
        assert_eq!(error_message("  "), None);
    }

    #[test]
    fn empty_body_parses_as_unit() {
        parse_body::<()>(b"").unwrap();
        parse_body::<serde::de::IgnoredAny>(b"\n").unwrap();
        parse_body::<serde::de::IgnoredAny>(br#"{"message":"Deleted"}"#).unwrap();
    }

    #[test]
    fn wrong_shape_is_a_parse_error() {
        let err = parse_body::<Chokhla>(b"[1,2,3]").unwrap_err();
        assert!(matches!(err, ApiError::Parse(_)));
    }
}
