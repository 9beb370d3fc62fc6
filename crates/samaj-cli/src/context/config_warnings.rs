use samaj_config::{ApiConfig, SamajConfig};

/// Emit warnings for likely mistyped env var keys that silently fell back to defaults.
pub fn warn_unconfigured(config: &SamajConfig) {
    for warning in collect_unconfigured_warnings(config, std::env::vars()) {
        tracing::warn!("{warning}");
    }
}

fn collect_unconfigured_warnings<I>(config: &SamajConfig, env: I) -> Vec<String>
where
    I: IntoIterator<Item = (String, String)>,
{
    let single_underscore = |section: &str| {
        let prefix = format!("SAMAJ_{section}_");
        let nested = format!("SAMAJ_{section}__");
        move |key: &String| key.starts_with(&prefix) && !key.starts_with(&nested)
    };
    let env_keys = env.into_iter().map(|(key, _)| key).collect::<Vec<_>>();

    let mut warnings = Vec::new();

    if config.api.base_url() == ApiConfig::default().base_url()
        && env_keys.iter().any(single_underscore("API"))
    {
        warnings.push(
            "API base URL is the default while SAMAJ_API_* env vars exist. Use double underscores (example: SAMAJ_API__BASE_URL)."
                .to_string(),
        );
    }

    if !config.auth.has_token() && env_keys.iter().any(single_underscore("AUTH")) {
        warnings.push(
            "No token configured while SAMAJ_AUTH_* env vars exist. Use double underscores (example: SAMAJ_AUTH__TOKEN)."
                .to_string(),
        );
    }

    warnings
}

#[cfg(test)]
mod tests {
    use samaj_config::{ApiConfig, SamajConfig};

    use super::collect_unconfigured_warnings;

    #[test]
    fn warns_for_single_underscore_keys() {
        let warnings = collect_unconfigured_warnings(
            &SamajConfig::default(),
            vec![
                ("SAMAJ_API_BASE_URL".to_string(), "https://census.example.org".to_string()),
                ("SAMAJ_AUTH_TOKEN".to_string(), "tok".to_string()),
            ],
        );
        assert_eq!(warnings.len(), 2);
    }

    #[test]
    fn silent_when_keys_are_nested_or_config_is_set() {
        let config = SamajConfig {
            api: ApiConfig {
                base_url: "https://census.example.org".to_string(),
                ..ApiConfig::default()
            },
            ..SamajConfig::default()
        };
        let warnings = collect_unconfigured_warnings(
            &config,
            vec![
                ("SAMAJ_API_BASE_URL".to_string(), "x".to_string()),
                ("SAMAJ_AUTH__TOKEN".to_string(), "tok".to_string()),
            ],
        );
        assert!(warnings.is_empty());
    }
}
