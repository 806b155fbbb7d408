//! Extracted values keyed by field name.

use std::collections::BTreeMap;
use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// One extracted value.
///
/// Numbers appear for `number` fields after coercion; everything else is a
/// string, a boolean, a list of strings, or `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum FormValue {
    Null,
    Bool(bool),
    Number(f64),
    Text(String),
    List(Vec<String>),
}

/// Result object of one extraction, keyed by field name.
pub type ExtractedValues = BTreeMap<String, FormValue>;

impl FormValue {
    /// Loose truthiness used for checkboxes.
    ///
    /// `null`, `false`, `0`, `NaN` and the empty string are falsy; lists are
    /// always truthy.
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Null => false,
            Self::Bool(b) => *b,
            Self::Number(n) => *n != 0.0 && !n.is_nan(),
            Self::Text(s) => !s.is_empty(),
            Self::List(_) => true,
        }
    }

    /// Convert a JSON value. Objects and mixed arrays have no form
    /// representation and yield `None`.
    #[must_use]
    pub fn from_json(value: &serde_json::Value) -> Option<Self> {
        match value {
            serde_json::Value::Null => Some(Self::Null),
            serde_json::Value::Bool(b) => Some(Self::Bool(*b)),
            serde_json::Value::Number(n) => n.as_f64().map(Self::Number),
            serde_json::Value::String(s) => Some(Self::Text(s.clone())),
            serde_json::Value::Array(items) => items
                .iter()
                .map(|item| item.as_str().map(str::to_string))
                .collect::<Option<Vec<_>>>()
                .map(Self::List),
            serde_json::Value::Object(_) => None,
        }
    }
}

/// Text form written into text-like controls: integral numbers lose their
/// fraction, lists are comma-joined, `null` renders as `null`.
impl fmt::Display for FormValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("null"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Number(n) if n.is_finite() && n.fract() == 0.0 && n.abs() < 1e15 => {
                #[allow(clippy::cast_possible_truncation)]
                let int = *n as i64;
                write!(f, "{int}")
            }
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
            Self::List(items) => f.write_str(&items.join(",")),
        }
    }
}

impl From<&str> for FormValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for FormValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<bool> for FormValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<f64> for FormValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn untagged_deserialization_picks_matching_variant() {
        let values: ExtractedValues = serde_json::from_value(serde_json::json!({
            "a": null,
            "b": true,
            "c": 42,
            "d": "hello",
            "e": ["x", "y"]
        }))
        .unwrap();

        assert_eq!(values["a"], FormValue::Null);
        assert_eq!(values["b"], FormValue::Bool(true));
        assert_eq!(values["c"], FormValue::Number(42.0));
        assert_eq!(values["d"], FormValue::Text("hello".into()));
        assert_eq!(values["e"], FormValue::List(vec!["x".into(), "y".into()]));
    }

    #[test]
    fn truthiness() {
        assert!(!FormValue::Null.is_truthy());
        assert!(!FormValue::Bool(false).is_truthy());
        assert!(!FormValue::Number(0.0).is_truthy());
        assert!(!FormValue::Number(f64::NAN).is_truthy());
        assert!(!FormValue::Text(String::new()).is_truthy());
        assert!(FormValue::Bool(true).is_truthy());
        assert!(FormValue::Number(-1.5).is_truthy());
        assert!(FormValue::Text("no".into()).is_truthy());
        assert!(FormValue::List(Vec::new()).is_truthy());
    }

    #[test]
    fn display_matches_form_text() {
        assert_eq!(FormValue::Number(42.0).to_string(), "42");
        assert_eq!(FormValue::Number(2.5).to_string(), "2.5");
        assert_eq!(FormValue::Bool(false).to_string(), "false");
        assert_eq!(FormValue::Null.to_string(), "null");
        assert_eq!(
            FormValue::List(vec!["a".into(), "b".into()]).to_string(),
            "a,b"
        );
    }

    #[test]
    fn from_json_rejects_objects_and_mixed_arrays() {
        assert_eq!(FormValue::from_json(&serde_json::json!({"x": 1})), None);
        assert_eq!(FormValue::from_json(&serde_json::json!(["a", 1])), None);
        assert_eq!(
            FormValue::from_json(&serde_json::json!(7)),
            Some(FormValue::Number(7.0))
        );
    }
}
