use figment::Jail;
use sp_config::SmartPasteConfig;

#[test]
fn prefixed_env_fills_nested_sections() {
    Jail::expect_with(|jail| {
        jail.set_env("SMARTPASTE_OPENAI__MODEL", "gpt-4o-mini");
        jail.set_env("SMARTPASTE_COMPONENT__ENDPOINT", "http://localhost:8787/api/extract");

        let config = SmartPasteConfig::load().expect("config loads");
        assert_eq!(config.openai.model, "gpt-4o-mini");
        assert_eq!(
            config.component.endpoint.as_deref(),
            Some("http://localhost:8787/api/extract")
        );
        Ok(())
    });
}

#[test]
fn conventional_openai_key_is_honoured() {
    Jail::expect_with(|jail| {
        jail.set_env("OPENAI_API_KEY", "sk-conventional");

        let config = SmartPasteConfig::load().expect("config loads");
        assert_eq!(config.openai.api_key, "sk-conventional");
        Ok(())
    });
}

#[test]
fn prefixed_key_beats_conventional_key() {
    Jail::expect_with(|jail| {
        jail.set_env("OPENAI_API_KEY", "sk-conventional");
        jail.set_env("SMARTPASTE_OPENAI__API_KEY", "sk-prefixed");

        let config = SmartPasteConfig::load().expect("config loads");
        assert_eq!(config.openai.api_key, "sk-prefixed");
        Ok(())
    });
}

#[test]
fn env_beats_project_file() {
    Jail::expect_with(|jail| {
        jail.create_dir(".smartpaste")?;
        jail.create_file(
            ".smartpaste/config.toml",
            r#"
[openai]
model = "from-file"
"#,
        )?;
        jail.set_env("SMARTPASTE_OPENAI__MODEL", "from-env");

        let config = SmartPasteConfig::load().expect("config loads");
        assert_eq!(config.openai.model, "from-env");
        Ok(())
    });
}
