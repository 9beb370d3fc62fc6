use clap::ValueEnum;

/// Shared output mode across all commands.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Raw,
}

impl OutputFormat {
    /// Parse the `general.default_format` config value; unknown values fall
    /// back to a table.
    #[must_use]
    pub fn from_config(value: &str) -> Self {
        Self::from_str(value, true).unwrap_or(Self::Table)
    }
}

/// Global flags available before or after subcommands.
#[derive(Clone, Debug)]
pub struct GlobalFlags {
    pub format: OutputFormat,
    pub limit: Option<u32>,
    pub quiet: bool,
}

#[cfg(test)]
mod tests {
    use super::OutputFormat;

    #[test]
    fn config_format_is_case_insensitive() {
        assert_eq!(OutputFormat::from_config("JSON"), OutputFormat::Json);
        assert_eq!(OutputFormat::from_config("raw"), OutputFormat::Raw);
        assert_eq!(OutputFormat::from_config("yaml"), OutputFormat::Table);
    }
}
