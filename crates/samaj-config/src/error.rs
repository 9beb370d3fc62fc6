use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// A config file or `SAMAJ_*` variable could not be read into the schema.
    #[error("failed to load samaj config: {0}")]
    Figment(#[from] figment::Error),

    /// `section` is present but lacks the value the client needs.
    #[error("[{section}] is not configured; set it in config.toml or SAMAJ_{}__* variables", section.to_uppercase())]
    NotConfigured { section: String },

    #[error("invalid {field}: {reason}")]
    InvalidValue { field: String, reason: String },
}
