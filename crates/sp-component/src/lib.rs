//! # sp-component
//!
//! The smart paste trigger. [`SmartPaste`] owns the execution state of one
//! trigger bound to one form and runs a click through clipboard read, field
//! extraction, the endpoint call, and form synchronization.
//!
//! Platform pieces sit behind traits: [`Clipboard`], [`ExtractionEndpoint`],
//! and [`EventSink`].

mod clipboard;
mod component;
mod endpoint;
mod events;

pub use clipboard::{Clipboard, TextClipboard};
pub use component::{ClickOutcome, SmartPaste, TriggerView};
pub use endpoint::{ExtractionEndpoint, HttpEndpoint, LocalEndpoint};
pub use events::{EventLog, EventSink, PasteEvent};
