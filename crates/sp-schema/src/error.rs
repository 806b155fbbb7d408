//! Schema validation error types.

use thiserror::Error;

/// Errors from schema building, validation, and the registry.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// Requested schema name was not found in the registry.
    #[error("Schema not found: {0}")]
    NotFound(String),

    /// JSON value did not pass schema validation.
    #[error("Validation failed: {errors:?}")]
    ValidationFailed {
        /// Individual error messages from the validator.
        errors: Vec<String>,
    },

    /// Schema generation or compilation error.
    #[error("Schema generation error: {0}")]
    Generation(String),

    /// The extraction service returned something other than a JSON object.
    #[error("Expected a JSON object, got {0}")]
    NotAnObject(&'static str),
}
