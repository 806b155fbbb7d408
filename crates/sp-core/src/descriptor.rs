//! Field descriptors and the endpoint request envelope.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Normalized description of one form field, used to build an extraction schema.
///
/// `kind` carries the DOM `type` of the element and travels as `type` on the wire.
/// `options` is present only for selection-capable fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct FieldDescriptor {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,
}

impl FieldDescriptor {
    /// Plain field of the given kind, without description or options.
    #[must_use]
    pub fn new(name: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: kind.into(),
            description: None,
            options: None,
        }
    }

    /// Selection field offering `options` in display order.
    #[must_use]
    pub fn select<I, S>(name: impl Into<String>, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            kind: String::from("select-one"),
            description: None,
            options: Some(options.into_iter().map(Into::into).collect()),
        }
    }

    /// Attach a human-readable hint.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Body of `POST <endpoint>`: the raw clipboard text plus the fields to fill.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ExtractionRequest {
    pub text: String,
    pub fields: Vec<FieldDescriptor>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn kind_travels_as_type() {
        let field = FieldDescriptor::new("email", "email");
        let json = serde_json::to_value(&field).unwrap();
        assert_eq!(json, serde_json::json!({"name": "email", "type": "email"}));
    }

    #[test]
    fn null_description_is_accepted() {
        let field: FieldDescriptor = serde_json::from_value(serde_json::json!({
            "name": "notes",
            "type": "textarea",
            "description": null
        }))
        .unwrap();
        assert_eq!(field.description, None);
        assert_eq!(field.options, None);
    }

    #[test]
    fn select_keeps_option_order() {
        let field = FieldDescriptor::select("plan", ["pro", "free", "team"]);
        assert_eq!(
            field.options.as_deref(),
            Some(&["pro".to_string(), "free".to_string(), "team".to_string()][..])
        );
        assert_eq!(field.kind, "select-one");
    }
}
