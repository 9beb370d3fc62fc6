//! # samaj-config
//!
//! Layered configuration loading for the census client using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Explicit overrides (command-line flags)
//! 2. Environment variables (`SAMAJ_*` prefix, `__` as separator)
//! 3. Project-level `.samaj/config.toml`
//! 4. User-level `~/.config/samaj/config.toml`
//! 5. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `SAMAJ_API__BASE_URL` -> `api.base_url`,
//! `SAMAJ_AUTH__TOKEN` -> `auth.token`, etc. The `__` (double underscore)
//! separates nested config sections.
//!
//! # Usage
//!
//! ```no_run
//! use samaj_config::SamajConfig;
//!
//! let config = SamajConfig::load_with_dotenv().expect("config");
//! println!("backend: {}", config.api.base_url());
//! ```

mod api;
mod auth;
mod error;
mod general;

pub use api::ApiConfig;
pub use auth::AuthConfig;
pub use error::ConfigError;
pub use general::GeneralConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SamajConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub auth: AuthConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl SamajConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] if you need
    /// `.env` file loading.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Figment`] if a source cannot be parsed or a
    /// value has the wrong type.
    pub fn load() -> Result<Self, ConfigError> {
        Self::figment().extract().map_err(ConfigError::from)
    }

    /// Load configuration with `.env` file support.
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        Self::load_dotenv();
        Self::load()
    }

    /// Load configuration with explicit overrides on top of every other
    /// source. Keys are dotted paths (`api.base_url`).
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn load_with_overrides(overrides: &[(String, String)]) -> Result<Self, ConfigError> {
        let mut figment = Self::figment();
        for (key, value) in overrides {
            figment = figment.merge(Serialized::default(key, value));
        }
        figment.extract().map_err(ConfigError::from)
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment directly or add providers on
    /// top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(global_path));
        }

        let local_path = PathBuf::from(".samaj/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed("SAMAJ_").split("__"))
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("samaj").join("config.toml"))
    }

    /// Load `.env` from the current directory, silently doing nothing when
    /// there is none.
    pub fn load_dotenv() {
        let _ = dotenvy::dotenv();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_loads() {
        let config = SamajConfig::default();
        assert!(config.api.is_configured());
        assert!(!config.auth.has_token());
        assert_eq!(config.general.default_limit, 20);
    }

    #[test]
    fn figment_builds_without_files() {
        figment::Jail::expect_with(|_jail| {
            let config: SamajConfig = SamajConfig::figment().extract()?;
            assert_eq!(config.api.timeout_secs, 30);
            assert_eq!(config.general.default_format, "table");
            Ok(())
        });
    }
}
