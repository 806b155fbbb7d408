//! # sp-schema
//!
//! Schema building, validation, and registry for smartpaste.
//!
//! This crate provides:
//! - `SchemaRule` / `FieldRule`: the typed, optional rule derived from one `FieldDescriptor`
//! - `ExtractionSchema`: the composite object schema sent to the extraction service, plus
//!   the conformance step that coerces and filters what the service returns
//! - `SchemaRegistry`: JSON Schemas of the endpoint wire types, used to validate request bodies

mod builder;
mod error;
mod registry;
mod rule;

pub use builder::ExtractionSchema;
pub use error::SchemaError;
pub use registry::SchemaRegistry;
pub use rule::{FieldRule, SchemaRule};
