//! # sp-extract
//!
//! Turns raw text plus form field descriptors into extracted values.
//!
//! [`extract_form_data`] is the direct-call interface used by the endpoint
//! server and by in-process components. The model itself sits behind the
//! [`StructuredExtractor`] trait; [`OpenAiExtractor`] implements it for any
//! OpenAI-compatible chat completions API with JSON Schema response formats.

mod error;
mod extract;
mod openai;
mod prompt;
mod service;

pub use error::ExtractError;
pub use extract::extract_form_data;
pub use openai::OpenAiExtractor;
pub use prompt::build_prompt;
pub use service::StructuredExtractor;
