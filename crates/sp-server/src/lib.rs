//! # sp-server
//!
//! `POST <path>` endpoint answering `{text, fields}` with extracted values,
//! backed by any [`sp_extract::StructuredExtractor`].
//!
//! Bodies are checked against the `extraction_request` wire schema before
//! extraction. Every response carries CORS headers so page scripts on other
//! origins can call it.

mod error;
mod handler;
mod server;

pub use error::ServerError;
pub use handler::{Handler, Reply, Route};
pub use server::{ExtractionServer, ShutdownHandle};
