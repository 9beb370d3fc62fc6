use samaj_config::SamajConfig;

/// Load layered config, with `.env` support and command-line overrides on top.
pub fn load_config(base_url: Option<&str>) -> anyhow::Result<SamajConfig> {
    SamajConfig::load_dotenv();
    let config = SamajConfig::load_with_overrides(&overrides(base_url))?;
    config.api.validate()?;
    Ok(config)
}

fn overrides(base_url: Option<&str>) -> Vec<(String, String)> {
    base_url
        .map(str::trim)
        .filter(|url| !url.is_empty())
        .map(|url| vec![("api.base_url".to_string(), url.to_string())])
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::overrides;

    #[test]
    fn base_url_flag_becomes_dotted_override() {
        assert_eq!(
            overrides(Some(" https://census.example.org ")),
            vec![("api.base_url".to_string(), "https://census.example.org".to_string())]
        );
        assert!(overrides(Some("")).is_empty());
        assert!(overrides(None).is_empty());
    }
}
