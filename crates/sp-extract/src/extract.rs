//! Direct-call extraction entry point.

use sp_core::{ExtractedValues, FieldDescriptor};
use sp_schema::ExtractionSchema;

use crate::error::ExtractError;
use crate::prompt::build_prompt;
use crate::service::StructuredExtractor;

/// Extract values for `fields` from unstructured `text`.
///
/// Builds the schema and prompt, asks `service` once, and conforms the
/// answer. Service failures are returned unchanged; there is no retry.
///
/// # Errors
///
/// Returns whatever `service` fails with, or `ExtractError::Schema` when the
/// answer is not a JSON object or the conformed values still violate the
/// schema.
pub async fn extract_form_data(
    service: &dyn StructuredExtractor,
    text: &str,
    fields: &[FieldDescriptor],
) -> Result<ExtractedValues, ExtractError> {
    let schema = ExtractionSchema::build(fields)?;
    let prompt = build_prompt(text);

    tracing::debug!(fields = schema.len(), text_len = text.len(), "requesting extraction");
    let raw = service
        .generate_object(&prompt, &schema.to_json_schema())
        .await?;

    let values = schema.conform(&raw)?;
    let conformed = serde_json::to_value(&values)
        .map_err(|e| ExtractError::Parse(format!("extracted values: {e}")))?;
    schema.validate(&conformed)?;
    tracing::debug!(extracted = values.len(), "extraction complete");
    Ok(values)
}
