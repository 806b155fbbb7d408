//! # sp-core
//!
//! Core types and error taxonomy for smartpaste.
//!
//! This crate provides the types shared across all smartpaste crates:
//! - `FieldDescriptor` and the endpoint request envelope
//! - `FormValue` / `ExtractedValues`, the result of one extraction
//! - State and policy enums for the paste component
//! - The `PasteError` taxonomy reported to users

pub mod descriptor;
pub mod enums;
pub mod errors;
pub mod value;

pub use descriptor::{ExtractionRequest, FieldDescriptor};
pub use enums::{ErrorPresentation, ExecutionState, NullPolicy};
pub use errors::PasteError;
pub use value::{ExtractedValues, FormValue};
