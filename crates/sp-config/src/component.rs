//! Paste component configuration.

use serde::{Deserialize, Serialize};
use sp_core::{ErrorPresentation, NullPolicy};

fn default_idle_label() -> String {
    String::from("Smart Paste")
}

fn default_busy_label() -> String {
    String::from("Smart Pasting…")
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ComponentConfig {
    /// Extraction endpoint URL. Unset means every click fails with
    /// `ApiNotConfiguredError`.
    #[serde(default)]
    pub endpoint: Option<String>,

    #[serde(default)]
    pub error_presentation: ErrorPresentation,

    /// How `null` values are written into text-like controls.
    #[serde(default)]
    pub null_values: NullPolicy,

    /// Trigger label while idle.
    #[serde(default = "default_idle_label")]
    pub idle_label: String,

    /// Trigger label while an action runs.
    #[serde(default = "default_busy_label")]
    pub busy_label: String,
}

impl Default for ComponentConfig {
    fn default() -> Self {
        Self {
            endpoint: None,
            error_presentation: ErrorPresentation::default(),
            null_values: NullPolicy::default(),
            idle_label: default_idle_label(),
            busy_label: default_busy_label(),
        }
    }
}

impl ComponentConfig {
    /// Same configuration pointed at `endpoint`.
    #[must_use]
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }
}
