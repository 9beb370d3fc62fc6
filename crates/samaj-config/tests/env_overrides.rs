use figment::Jail;
use samaj_config::SamajConfig;

#[test]
fn env_fills_nested_values() {
    Jail::expect_with(|jail| {
        jail.set_env("SAMAJ_API__BASE_URL", "https://census.example.org");
        jail.set_env("SAMAJ_AUTH__TOKEN", "tok-from-env");

        let config = SamajConfig::load().expect("config loads");
        assert_eq!(config.api.base_url(), "https://census.example.org");
        assert_eq!(config.auth.token, "tok-from-env");
        Ok(())
    });
}

#[test]
fn explicit_overrides_beat_env() {
    Jail::expect_with(|jail| {
        jail.set_env("SAMAJ_API__BASE_URL", "https://from-env.example.org");
        let overrides = vec![(
            "api.base_url".to_string(),
            "https://from-flag.example.org".to_string(),
        )];

        let config = SamajConfig::load_with_overrides(&overrides).expect("config loads");
        assert_eq!(config.api.base_url(), "https://from-flag.example.org");
        Ok(())
    });
}

#[test]
fn env_beats_project_toml() {
    Jail::expect_with(|jail| {
        std::fs::create_dir(jail.directory().join(".samaj")).expect("create .samaj");
        jail.create_file(
            ".samaj/config.toml",
            r#"
[api]
base_url = "https://from-toml.example.org"
timeout_secs = 5
"#,
        )?;
        jail.set_env("SAMAJ_API__BASE_URL", "https://from-env.example.org");

        let config = SamajConfig::load().expect("config loads");
        assert_eq!(config.api.base_url(), "https://from-env.example.org");
        assert_eq!(config.api.timeout_secs, 5);
        Ok(())
    });
}
