//! Integration tests for TOML configuration loading.
//!
//! Uses figment::Jail for safe, sandboxed env var manipulation.

use figment::{
    Figment, Jail,
    providers::{Format, Serialized, Toml},
};
use sp_config::SmartPasteConfig;
use sp_core::{ErrorPresentation, NullPolicy};

#[test]
fn loads_openai_config_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[openai]
api_key = "sk-toml"
base_url = "http://localhost:11434/v1"
model = "llama3.1"
timeout_secs = 15
"#,
        )?;

        let config: SmartPasteConfig = Figment::from(Serialized::defaults(SmartPasteConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.openai.api_key, "sk-toml");
        assert_eq!(config.openai.model, "llama3.1");
        assert_eq!(config.openai.timeout_secs, 15);
        assert_eq!(
            config.openai.completions_url(),
            "http://localhost:11434/v1/chat/completions"
        );
        assert!(config.openai.is_configured());
        Ok(())
    });
}

#[test]
fn loads_component_config_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[component]
endpoint = "https://example.com/api/extract"
error_presentation = "inline"
null_values = "skip"
idle_label = "Paste from clipboard"
"#,
        )?;

        let config: SmartPasteConfig = Figment::from(Serialized::defaults(SmartPasteConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(
            config.component.endpoint.as_deref(),
            Some("https://example.com/api/extract")
        );
        assert_eq!(config.component.error_presentation, ErrorPresentation::Inline);
        assert_eq!(config.component.null_values, NullPolicy::Skip);
        assert_eq!(config.component.idle_label, "Paste from clipboard");
        assert_eq!(config.component.busy_label, "Smart Pasting…");
        Ok(())
    });
}

#[test]
fn project_local_file_is_picked_up() {
    Jail::expect_with(|jail| {
        jail.create_dir(".smartpaste")?;
        jail.create_file(
            ".smartpaste/config.toml",
            r#"
[server]
bind = "0.0.0.0:9000"
allow_origin = "https://shop.example.com"
"#,
        )?;

        let config: SmartPasteConfig = SmartPasteConfig::figment().extract()?;
        assert_eq!(config.server.bind, "0.0.0.0:9000");
        assert_eq!(config.server.allow_origin, "https://shop.example.com");
        assert_eq!(config.server.path, "/api/extract");
        Ok(())
    });
}

#[test]
fn rejects_unknown_error_presentation() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[component]
error_presentation = "popup"
"#,
        )?;

        let result: Result<SmartPasteConfig, _> =
            Figment::from(Serialized::defaults(SmartPasteConfig::default()))
                .merge(Toml::file("config.toml"))
                .extract();
        assert!(result.is_err());
        Ok(())
    });
}
