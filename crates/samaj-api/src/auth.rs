//! Session endpoints under `/api/auth`.

use reqwest::Method;
use samaj_core::entities::{AuthUser, LoginResponse, PasswordChange, ProfileUpdate};
use samaj_core::validation::{validate_credentials, validate_password_change, validate_profile};
use serde::Serialize;
use serde::de::IgnoredAny;

use crate::{ApiClient, error::ApiError};

#[derive(Serialize)]
struct LoginBody<'a> {
    mobile: &'a str,
    password: &'a str,
}

impl ApiClient {
    /// Exchange mobile number and password for a session token.
    ///
    /// The returned client is unchanged; callers persist the token and build a
    /// new client with [`ApiClient::with_token`].
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Validation`] for a malformed mobile number or an
    /// empty password, otherwise any error from the request wrapper
    /// (`401` for wrong credentials).
    pub async fn login(&self, mobile: &str, password: &str) -> Result<LoginResponse, ApiError> {
        validate_credentials(mobile, password)?;
        let body = LoginBody {
            mobile: mobile.trim(),
            password,
        };
        self.request(Method::POST, "/api/auth/login", Some(&body))
            .await
    }

    /// Fetch the account behind the current token.
    ///
    /// # Errors
    ///
    /// Returns any error from the request wrapper.
    pub async fn me(&self) -> Result<AuthUser, ApiError> {
        self.get("/api/auth/me").await
    }

    /// Update name, mobile and email of the signed-in account.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Validation`] before sending when the form is
    /// invalid, otherwise any error from the request wrapper.
    pub async fn update_profile(&self, profile: &ProfileUpdate) -> Result<AuthUser, ApiError> {
        validate_profile(profile)?;
        self.request(Method::PUT, "/api/auth/profile", Some(profile))
            .await
    }

    /// # Errors
    ///
    /// Returns [`ApiError::Validation`] when the new password is too short or
    /// equals the current one, otherwise any error from the request wrapper.
    pub async fn change_password(&self, change: &PasswordChange) -> Result<(), ApiError> {
        validate_password_change(change)?;
        let _: IgnoredAny = self
            .request(Method::PUT, "/api/auth/change-password", Some(change))
            .await?;
        Ok(())
    }
}
