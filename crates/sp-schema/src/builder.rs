//! Composite object schema built from a list of field descriptors.

use std::collections::BTreeMap;

use serde_json::{Map, Value, json};
use sp_core::{ExtractedValues, FieldDescriptor};

use crate::error::SchemaError;
use crate::rule::FieldRule;

/// A field rule with its validator.
#[derive(Debug)]
struct CompiledRule {
    rule: FieldRule,
    validator: jsonschema::Validator,
}

/// Object schema with one optional property per field.
///
/// Rebuilt for every request and never persisted. When two descriptors share
/// a name, the later one wins. Validators are compiled once, in
/// [`build`](Self::build).
#[derive(Debug)]
pub struct ExtractionSchema {
    fields: BTreeMap<String, CompiledRule>,
    json: Value,
    object: jsonschema::Validator,
}

impl ExtractionSchema {
    /// Map every descriptor to its rule and compile the validators.
    ///
    /// # Errors
    ///
    /// Returns `SchemaError::Generation` if a rule fails to compile.
    pub fn build(fields: &[FieldDescriptor]) -> Result<Self, SchemaError> {
        let mut rules = BTreeMap::new();
        for field in fields {
            let rule = FieldRule::for_field(field);
            tracing::debug!(field = %field.name, kind = %field.kind, rule = ?rule.rule, "mapped field");
            if rules.insert(field.name.clone(), rule).is_some() {
                tracing::warn!(field = %field.name, "duplicate field name; later descriptor wins");
            }
        }

        let json = object_schema(&rules);
        let object = compile(&json)?;
        let fields: BTreeMap<String, CompiledRule> = rules
            .into_iter()
            .map(|(name, rule)| {
                let validator = compile(&rule.to_json())?;
                Ok((name, CompiledRule { rule, validator }))
            })
            .collect::<Result<_, SchemaError>>()?;

        Ok(Self {
            fields,
            json,
            object,
        })
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&FieldRule> {
        self.fields.get(name).map(|compiled| &compiled.rule)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// JSON Schema of the whole object. No property is required.
    #[must_use]
    pub fn to_json_schema(&self) -> Value {
        self.json.clone()
    }

    /// Validate a whole object against the schema, formats included.
    ///
    /// # Errors
    ///
    /// Returns `SchemaError::ValidationFailed` with the validator messages.
    pub fn validate(&self, instance: &Value) -> Result<(), SchemaError> {
        let errors: Vec<String> = self
            .object
            .iter_errors(instance)
            .map(|e| format!("{e}"))
            .collect();

        if errors.is_empty() {
            Ok(())
        } else {
            Err(SchemaError::ValidationFailed { errors })
        }
    }

    /// Turn raw service output into extracted values.
    ///
    /// Values are coerced and checked field by field. Unknown keys, `null`,
    /// and values that fail their rule are dropped, so the result always
    /// satisfies the schema.
    ///
    /// # Errors
    ///
    /// Returns `SchemaError::NotAnObject` if `output` is not a JSON object.
    pub fn conform(&self, output: &Value) -> Result<ExtractedValues, SchemaError> {
        let Value::Object(object) = output else {
            return Err(SchemaError::NotAnObject(json_kind(output)));
        };

        let mut values = ExtractedValues::new();
        for (name, raw) in object {
            let Some(compiled) = self.fields.get(name) else {
                tracing::debug!(field = %name, "dropping key not in schema");
                continue;
            };
            if raw.is_null() {
                continue;
            }

            match compiled.rule.accept(raw, &compiled.validator) {
                Some(value) => {
                    values.insert(name.clone(), value);
                }
                None => tracing::warn!(field = %name, %raw, "dropping value that fails its rule"),
            }
        }
        Ok(values)
    }
}

fn object_schema(rules: &BTreeMap<String, FieldRule>) -> Value {
    let properties: Map<String, Value> = rules
        .iter()
        .map(|(name, rule)| (name.clone(), rule.to_json()))
        .collect();

    json!({
        "type": "object",
        "properties": properties,
        "additionalProperties": false,
    })
}

fn compile(schema: &Value) -> Result<jsonschema::Validator, SchemaError> {
    jsonschema::options()
        .should_validate_formats(true)
        .build(schema)
        .map_err(|e| SchemaError::Generation(format!("{e}")))
}

const fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
