//! Per-field schema rules.
//!
//! Every rule is optional: a field the model cannot fill is simply absent.

use serde_json::{Value, json};
use sp_core::{FieldDescriptor, FormValue};

/// Typed validation rule for one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchemaRule {
    /// One of the exact option strings of a selection field.
    OneOf(Vec<String>),
    /// Any subset of the option strings of a multi-select.
    ManyOf(Vec<String>),
    /// A number; numeric strings are coerced.
    Number,
    Boolean,
    /// A string in email format.
    Email,
    /// A string in calendar-date format (`YYYY-MM-DD`).
    Date,
    /// Any string.
    Text,
}

impl SchemaRule {
    /// Map a descriptor to its rule. Options win over `kind`, except that a
    /// `select-multiple` keeps its list shape.
    #[must_use]
    pub fn for_field(field: &FieldDescriptor) -> Self {
        if let Some(options) = &field.options {
            return if field.kind == "select-multiple" {
                Self::ManyOf(options.clone())
            } else {
                Self::OneOf(options.clone())
            };
        }

        match field.kind.as_str() {
            "number" => Self::Number,
            "checkbox" => Self::Boolean,
            "email" => Self::Email,
            "date" => Self::Date,
            _ => Self::Text,
        }
    }

    /// JSON Schema node for this rule, without description.
    #[must_use]
    pub fn to_json(&self) -> Value {
        match self {
            // An empty option set admits nothing.
            Self::OneOf(options) if options.is_empty() => json!({ "not": {} }),
            Self::OneOf(options) => json!({ "type": "string", "enum": options }),
            Self::ManyOf(options) if options.is_empty() => json!({ "type": "array", "maxItems": 0 }),
            Self::ManyOf(options) => json!({
                "type": "array",
                "items": { "type": "string", "enum": options },
                "uniqueItems": true,
            }),
            Self::Number => json!({ "type": "number" }),
            Self::Boolean => json!({ "type": "boolean" }),
            Self::Email => json!({ "type": "string", "format": "email" }),
            Self::Date => json!({ "type": "string", "format": "date" }),
            Self::Text => json!({ "type": "string" }),
        }
    }

    /// Lenient pre-validation coercion: numeric strings for numbers, a lone
    /// string for a multi-select.
    fn coerce(&self, value: &Value) -> Option<Value> {
        match (self, value) {
            (Self::ManyOf(_), Value::String(_)) => Some(Value::Array(vec![value.clone()])),
            (Self::Number, Value::String(raw)) => raw
                .trim()
                .parse::<f64>()
                .ok()
                .and_then(serde_json::Number::from_f64)
                .map(Value::Number),
            _ => Some(value.clone()),
        }
    }
}

/// A rule plus the optional semantic hint passed to the extraction service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldRule {
    pub rule: SchemaRule,
    pub description: Option<String>,
}

impl FieldRule {
    #[must_use]
    pub fn for_field(field: &FieldDescriptor) -> Self {
        Self {
            rule: SchemaRule::for_field(field),
            description: field
                .description
                .as_ref()
                .filter(|d| !d.is_empty())
                .cloned(),
        }
    }

    /// JSON Schema node including the description.
    #[must_use]
    pub fn to_json(&self) -> Value {
        let mut node = self.rule.to_json();
        if let (Some(description), Some(object)) = (&self.description, node.as_object_mut()) {
            object.insert("description".into(), Value::String(description.clone()));
        }
        node
    }

    /// Coerce and validate one value returned by the extraction service.
    ///
    /// Returns `None` when the value does not satisfy the rule; callers drop
    /// such values instead of failing. `validator` must have been compiled
    /// from [`Self::to_json`].
    pub(crate) fn accept(&self, value: &Value, validator: &jsonschema::Validator) -> Option<FormValue> {
        let coerced = self.rule.coerce(value)?;
        if !validator.is_valid(&coerced) {
            return None;
        }
        FormValue::from_json(&coerced)
    }
}
