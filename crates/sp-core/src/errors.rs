//! Error taxonomy reported by the paste component.
//!
//! Every variant is terminal for the current action and is surfaced to the
//! user. Crate-specific errors (`ExtractError`, `ConfigError`, ...) live in
//! their own crates and are folded into these at the component boundary.

use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "name", content = "message")]
pub enum PasteError {
    /// The trigger was activated outside of a form.
    #[serde(rename = "NoFormFoundError")]
    #[error("No form found.")]
    NoFormFound,

    /// No extraction endpoint has been configured.
    #[serde(rename = "ApiNotConfiguredError")]
    #[error("API has not been set")]
    ApiNotConfigured,

    /// Reading the clipboard failed (permission or availability).
    #[serde(rename = "ClipboardAccessError")]
    #[error("Clipboard access failed: {0}")]
    ClipboardAccess(String),

    /// The endpoint answered with a non-success status or an unusable body.
    #[serde(rename = "ExtractionFailedError")]
    #[error("Failed to extract data: {0}")]
    ExtractionFailed(String),

    /// Anything else raised during the cycle.
    #[serde(rename = "UnknownError")]
    #[error("Something went wrong: {0}")]
    Unknown(String),
}

impl PasteError {
    /// Name of the error as seen by page scripts.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::NoFormFound => "NoFormFoundError",
            Self::ApiNotConfigured => "ApiNotConfiguredError",
            Self::ClipboardAccess(_) => "ClipboardAccessError",
            Self::ExtractionFailed(_) => "ExtractionFailedError",
            Self::Unknown(_) => "UnknownError",
        }
    }
}
