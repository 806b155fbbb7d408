//! # sp-form
//!
//! Reading fields out of a form and writing extracted values back in.
//!
//! The DOM is reached through the [`FormElement`] trait. [`Control`] and
//! [`Form`] are an in-memory implementation used by the CLI and tests.

mod control;
mod element;
mod extractor;
mod synchronizer;

pub use control::{Control, ControlTag, Form};
pub use element::{DESCRIPTION_ATTRIBUTE, FormElement, IGNORED_KINDS};
pub use extractor::extract_fields;
pub use synchronizer::synchronize;
