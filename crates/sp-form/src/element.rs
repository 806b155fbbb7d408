//! The form element seam.

/// Attribute carrying the human-readable hint for a field.
pub const DESCRIPTION_ATTRIBUTE: &str = "data-sp-description";

/// Input kinds never offered for extraction: non-data controls and sensitive ones.
pub const IGNORED_KINDS: [&str; 6] = ["button", "submit", "image", "reset", "file", "password"];

/// A form-participating element (input, select, or text area).
///
/// Accessors return owned values so DOM bindings can implement this directly.
pub trait FormElement {
    /// The `name` attribute; empty when unset.
    fn name(&self) -> String;

    /// The DOM `type` property: an input's type, `select-one` /
    /// `select-multiple` for selects, `textarea` for text areas. May be empty.
    fn kind(&self) -> String;

    fn attribute(&self, name: &str) -> Option<String>;

    /// Option values in display order for selection-capable elements, `None` otherwise.
    fn options(&self) -> Option<Vec<String>>;

    fn set_checked(&mut self, checked: bool);

    fn set_value(&mut self, value: &str);

    /// Select exactly `values` on a multi-select. Other elements receive the
    /// comma-joined text.
    fn set_selected(&mut self, values: &[String]) {
        self.set_value(&values.join(","));
    }

    fn is_checkbox(&self) -> bool {
        self.kind() == "checkbox"
    }
}
