//! Session token settings.

use serde::{Deserialize, Serialize};

fn default_keyring_service() -> String {
    "samaj-cli".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AuthConfig {
    /// Bearer token supplied directly (CI or scripted use). Takes the place
    /// of a stored login when set.
    #[serde(default)]
    pub token: String,

    /// OS keyring service name the login token is stored under.
    #[serde(default = "default_keyring_service")]
    pub keyring_service: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            token: String::new(),
            keyring_service: default_keyring_service(),
        }
    }
}

impl AuthConfig {
    #[must_use]
    pub fn has_token(&self) -> bool {
        !self.token.trim().is_empty()
    }
}
