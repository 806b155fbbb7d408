//! Form synchronization: extracted values back into live elements.

use std::collections::HashSet;

use sp_core::{ExtractedValues, FieldDescriptor, FormValue, NullPolicy};

use crate::element::FormElement;

/// Write `values` into the elements named by `fields`.
///
/// Checkboxes take the truthiness of their value. Multi-selects given a list
/// select exactly those options. Everything else receives the value's text,
/// with `null` handled per `nulls`. Elements whose name is absent from
/// `values` are left alone. Applying the same map twice is a no-op.
pub fn synchronize<E: FormElement>(
    elements: &mut [E],
    fields: &[FieldDescriptor],
    values: &ExtractedValues,
    nulls: NullPolicy,
) {
    let described: HashSet<&str> = fields.iter().map(|f| f.name.as_str()).collect();

    for element in elements.iter_mut() {
        let name = element.name();
        if !described.contains(name.as_str()) {
            continue;
        }
        let Some(value) = values.get(&name) else {
            continue;
        };

        if element.is_checkbox() {
            element.set_checked(value.is_truthy());
            continue;
        }

        match value {
            FormValue::Null => match nulls {
                NullPolicy::Clear => element.set_value(""),
                NullPolicy::Skip => {}
                NullPolicy::Literal => element.set_value("null"),
            },
            FormValue::List(items) => element.set_selected(items),
            other => element.set_value(&other.to_string()),
        }
        tracing::trace!(%name, "field synchronized");
    }
}
