//! Extraction error types.

use thiserror::Error;

/// Errors raised while asking the extraction service for a structured object.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The model API returned a non-success status code.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code returned by the API.
        status: u16,
        /// `error.message` from the body, or the raw body.
        message: String,
    },

    /// The completion could not be turned into a JSON object.
    #[error("parse error: {0}")]
    Parse(String),

    /// The model declined to answer.
    #[error("model refused: {0}")]
    Refused(String),

    /// Schema compilation or conformance failed.
    #[error(transparent)]
    Schema(#[from] sp_schema::SchemaError),

    /// Provider settings are missing or invalid.
    #[error(transparent)]
    Config(#[from] sp_config::ConfigError),
}
