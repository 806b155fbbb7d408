//! # sp-config
//!
//! Layered configuration loading for smartpaste using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`SMARTPASTE_*` prefix, `__` as separator)
//! 2. The conventional `OPENAI_API_KEY` variable (fills `openai.api_key`)
//! 3. Project-level `.smartpaste/config.toml`
//! 4. User-level `~/.config/smartpaste/config.toml`
//! 5. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `SMARTPASTE_OPENAI__MODEL` -> `openai.model`,
//! `SMARTPASTE_COMPONENT__ENDPOINT` -> `component.endpoint`, etc.
//! The `__` (double underscore) separates nested config sections.
//!
//! # Usage
//!
//! ```no_run
//! use sp_config::SmartPasteConfig;
//!
//! let config = SmartPasteConfig::load_with_dotenv().expect("config");
//!
//! if config.openai.is_configured() {
//!     println!("model: {}", config.openai.model);
//! }
//! ```

mod component;
mod error;
mod openai;
mod server;

pub use component::ComponentConfig;
pub use error::ConfigError;
pub use openai::OpenAiConfig;
pub use server::ServerConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SmartPasteConfig {
    #[serde(default)]
    pub openai: OpenAiConfig,
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub component: ComponentConfig,
}

impl SmartPasteConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] if you need `.env` file loading.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Figment` if a source cannot be parsed or a value
    /// has the wrong type.
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

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment directly or add providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(global_path));
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(".smartpaste/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Provider-conventional key
        figment = figment.merge(
            Env::raw()
                .only(&["OPENAI_API_KEY"])
                .map(|_| "openai.api_key".into()),
        );

        // Layer 4: Environment variables (highest priority)
        figment.merge(Env::prefixed("SMARTPASTE_").split("__"))
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("smartpaste").join("config.toml"))
    }

    /// Load `.env` from the current directory or its ancestors. Silently does
    /// nothing if no `.env` is found.
    fn load_dotenv() {
        let _ = dotenvy::dotenv();
    }
}
