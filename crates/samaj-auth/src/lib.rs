//! # samaj-auth
//!
//! Session handling for the census client.
//!
//! Stores the bearer token issued at login (OS keychain with a file
//! fallback), decodes its claims for expiry and role display, and gates
//! command areas by role. The gate mirrors the web app's session-storage
//! route guard: it improves the experience but is not a security boundary,
//! the backend authorizes every call.

pub mod access;
pub mod claims;
pub mod error;
pub mod token_store;

pub use access::Area;
pub use claims::SessionClaims;
pub use error::AuthError;
pub use token_store::TokenStore;

use samaj_core::identity::AuthIdentity;

/// Resolve the identity behind `token`.
///
/// Readable claims naming a user and role win. Opaque tokens, or JWTs
/// without a role, fall back to the identity saved at login.
///
/// # Errors
///
/// Returns [`AuthError::TokenExpired`] when the token's `exp` has passed and
/// [`AuthError::NotAuthenticated`] when neither the claims nor the session
/// file name an identity.
pub fn identity_for_token(token: &str, store: &TokenStore) -> Result<AuthIdentity, AuthError> {
    match SessionClaims::decode(token) {
        Ok(claims) => {
            if claims.is_expired() {
                return Err(AuthError::TokenExpired);
            }
            if let Some(identity) = claims.to_identity() {
                return Ok(identity);
            }
        }
        Err(error) => tracing::debug!(%error, "token has no readable claims"),
    }
    store.load_identity().ok_or(AuthError::NotAuthenticated)
}
