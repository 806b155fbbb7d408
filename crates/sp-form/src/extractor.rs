//! Field extraction: form elements to field descriptors.

use sp_core::FieldDescriptor;

use crate::element::{DESCRIPTION_ATTRIBUTE, FormElement, IGNORED_KINDS};

/// Describe every extractable element of a form, in document order.
///
/// Elements with an empty name or an ignored kind are skipped. Selects carry
/// their option values; other elements never do.
pub fn extract_fields<E: FormElement>(elements: &[E]) -> Vec<FieldDescriptor> {
    elements
        .iter()
        .filter_map(|element| {
            let name = element.name();
            if name.is_empty() {
                return None;
            }
            let mut kind = element.kind();
            if kind.is_empty() {
                kind = String::from("text");
            }
            if IGNORED_KINDS.contains(&kind.as_str()) {
                tracing::trace!(%name, %kind, "skipping ignored field");
                return None;
            }

            Some(FieldDescriptor {
                name,
                kind,
                description: element
                    .attribute(DESCRIPTION_ATTRIBUTE)
                    .filter(|d| !d.is_empty()),
                options: element.options(),
            })
        })
        .collect()
}
