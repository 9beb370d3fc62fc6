//! Backend API connection settings.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

fn default_base_url() -> String {
    "http://localhost:5000".to_string()
}

const fn default_timeout_secs() -> u64 {
    30
}

fn default_user_agent() -> String {
    format!("samaj/{}", env!("CARGO_PKG_VERSION"))
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiConfig {
    /// Backend base URL; resource paths (`/api/...`) are appended to it.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Whole-request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
        }
    }
}

impl ApiConfig {
    #[must_use]
    pub fn is_configured(&self) -> bool {
        !self.base_url.trim().is_empty()
    }

    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Base URL without a trailing slash.
    #[must_use]
    pub fn base_url(&self) -> &str {
        self.base_url.trim().trim_end_matches('/')
    }

    /// Check the values a client cannot work without.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NotConfigured`] when the base URL is empty and
    /// [`ConfigError::InvalidValue`] for a non-HTTP URL or a zero timeout.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.is_configured() {
            return Err(ConfigError::NotConfigured {
                section: "api".into(),
            });
        }
        let url = self.base_url();
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(ConfigError::InvalidValue {
                field: "api.base_url".into(),
                reason: format!("'{url}' must start with http:// or https://"),
            });
        }
        if self.timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "api.timeout_secs".into(),
                reason: "must be greater than zero".into(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_local_backend() {
        let config = ApiConfig::default();
        assert!(config.is_configured());
        assert_eq!(config.base_url(), "http://localhost:5000");
        assert_eq!(config.timeout(), Duration::from_secs(30));
        assert!(config.user_agent.starts_with("samaj/"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn trailing_slash_is_trimmed() {
        let config = ApiConfig {
            base_url: "https://census.panchalsamaj.org/ ".into(),
            ..ApiConfig::default()
        };
        assert_eq!(config.base_url(), "https://census.panchalsamaj.org");
    }

    #[test]
    fn rejects_bad_values() {
        let empty = ApiConfig {
            base_url: String::new(),
            ..ApiConfig::default()
        };
        assert!(matches!(
            empty.validate(),
            Err(ConfigError::NotConfigured { .. })
        ));

        let ftp = ApiConfig {
            base_url: "ftp://census".into(),
            ..ApiConfig::default()
        };
        assert!(matches!(
            ftp.validate(),
            Err(ConfigError::InvalidValue { field, .. }) if field == "api.base_url"
        ));

        let zero = ApiConfig {
            timeout_secs: 0,
            ..ApiConfig::default()
        };
        assert!(zero.validate().is_err());
    }
}
