//! In-memory form controls.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::element::FormElement;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ControlTag {
    Input,
    Select,
    Textarea,
}

/// One input, select, or text area with its live state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Control {
    pub tag: ControlTag,
    #[serde(default)]
    pub name: String,
    /// The `type` attribute of an input.
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub input_type: Option<String>,
    /// Multi-select flag.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub multiple: bool,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub attributes: BTreeMap<String, String>,
    #[serde(default)]
    pub value: String,
    #[serde(default)]
    pub checked: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<String>,
    /// Selected option values of a multi-select.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub selected: Vec<String>,
}

impl Control {
    fn with_tag(tag: ControlTag, name: &str) -> Self {
        Self {
            tag,
            name: name.to_string(),
            input_type: None,
            multiple: false,
            attributes: BTreeMap::new(),
            value: String::new(),
            checked: false,
            options: Vec::new(),
            selected: Vec::new(),
        }
    }

    /// `<input name=.. type=..>`.
    #[must_use]
    pub fn input(name: &str, input_type: &str) -> Self {
        let mut control = Self::with_tag(ControlTag::Input, name);
        control.input_type = Some(input_type.to_string());
        control
    }

    /// `<select name=..>` with the given option values.
    #[must_use]
    pub fn select(name: &str, options: &[&str]) -> Self {
        let mut control = Self::with_tag(ControlTag::Select, name);
        control.options = options.iter().map(ToString::to_string).collect();
        control.value = control.options.first().cloned().unwrap_or_default();
        control
    }

    /// `<textarea name=..>`.
    #[must_use]
    pub fn textarea(name: &str) -> Self {
        Self::with_tag(ControlTag::Textarea, name)
    }

    #[must_use]
    pub fn multiple(mut self) -> Self {
        self.multiple = true;
        self.value.clear();
        self
    }

    #[must_use]
    pub fn with_attribute(mut self, name: &str, value: &str) -> Self {
        self.attributes.insert(name.to_string(), value.to_string());
        self
    }

    #[must_use]
    pub fn with_value(mut self, value: &str) -> Self {
        self.value = value.to_string();
        self
    }
}

impl FormElement for Control {
    fn name(&self) -> String {
        self.name.clone()
    }

    fn kind(&self) -> String {
        match self.tag {
            ControlTag::Input => self
                .input_type
                .as_deref()
                .map(|t| t.trim().to_ascii_lowercase())
                .filter(|t| !t.is_empty())
                .unwrap_or_else(|| String::from("text")),
            ControlTag::Select if self.multiple => String::from("select-multiple"),
            ControlTag::Select => String::from("select-one"),
            ControlTag::Textarea => String::from("textarea"),
        }
    }

    fn attribute(&self, name: &str) -> Option<String> {
        self.attributes.get(name).cloned()
    }

    fn options(&self) -> Option<Vec<String>> {
        matches!(self.tag, ControlTag::Select).then(|| self.options.clone())
    }

    fn set_checked(&mut self, checked: bool) {
        self.checked = checked;
    }

    /// Selects ignore values that match none of their options, as browsers do.
    fn set_value(&mut self, value: &str) {
        match self.tag {
            ControlTag::Select if self.multiple => {
                self.selected = self
                    .options
                    .iter()
                    .filter(|o| o.as_str() == value)
                    .cloned()
                    .collect();
            }
            ControlTag::Select => {
                self.value = if self.options.iter().any(|o| o == value) {
                    value.to_string()
                } else {
                    String::new()
                };
            }
            ControlTag::Input | ControlTag::Textarea => self.value = value.to_string(),
        }
    }

    fn set_selected(&mut self, values: &[String]) {
        if self.tag == ControlTag::Select && self.multiple {
            self.selected = self
                .options
                .iter()
                .filter(|o| values.contains(o))
                .cloned()
                .collect();
        } else {
            self.set_value(&values.join(","));
        }
    }
}

/// The controls of one form, in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Form {
    #[serde(default)]
    pub controls: Vec<Control>,
}

impl Form {
    #[must_use]
    pub const fn new(controls: Vec<Control>) -> Self {
        Self { controls }
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Control> {
        self.controls.iter().find(|c| c.name == name)
    }
}
