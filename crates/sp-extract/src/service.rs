//! The structured-extraction capability.

use async_trait::async_trait;
use serde_json::Value;

use crate::error::ExtractError;

/// Given a prompt and a JSON Schema, produce a JSON object for that schema or fail.
///
/// Implementations are not required to enforce the schema exactly; the
/// result is always passed through `ExtractionSchema::conform` afterwards.
#[async_trait]
pub trait StructuredExtractor: Send + Sync {
    async fn generate_object(&self, prompt: &str, schema: &Value) -> Result<Value, ExtractError>;
}
