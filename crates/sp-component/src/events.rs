//! Notifications dispatched by the trigger.

use std::sync::Mutex;

use serde::Serialize;
use sp_core::{ExtractedValues, PasteError};

pub const EXTRACTED_EVENT: &str = "ai-paste-extracted";
pub const ERROR_EVENT: &str = "ai-paste-error";

/// A bubbling notification with its payload.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "detail")]
pub enum PasteEvent {
    #[serde(rename = "ai-paste-extracted")]
    Extracted(ExtractedValues),
    #[serde(rename = "ai-paste-error")]
    Error(PasteError),
}

impl PasteEvent {
    #[must_use]
    pub const fn event_name(&self) -> &'static str {
        match self {
            Self::Extracted(_) => EXTRACTED_EVENT,
            Self::Error(_) => ERROR_EVENT,
        }
    }
}

/// Receiver of trigger notifications (the surrounding page).
pub trait EventSink: Send + Sync {
    fn dispatch(&self, event: PasteEvent);
}

/// Sink that records every event in dispatch order.
#[derive(Debug, Default)]
pub struct EventLog {
    events: Mutex<Vec<PasteEvent>>,
}

impl EventLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of the events seen so far.
    #[must_use]
    pub fn events(&self) -> Vec<PasteEvent> {
        self.events
            .lock()
            .map(|events| events.clone())
            .unwrap_or_default()
    }
}

impl EventSink for EventLog {
    fn dispatch(&self, event: PasteEvent) {
        tracing::debug!(event = event.event_name(), "dispatching");
        if let Ok(mut events) = self.events.lock() {
            events.push(event);
        }
    }
}
