//! Clipboard access.

use async_trait::async_trait;
use sp_core::PasteError;

/// Source of the pasted text.
#[async_trait]
pub trait Clipboard: Send + Sync {
    /// Read the current clipboard text.
    ///
    /// # Errors
    ///
    /// Returns `PasteError::ClipboardAccess` when the clipboard is unavailable
    /// or permission is denied.
    async fn read_text(&self) -> Result<String, PasteError>;
}

/// A clipboard holding fixed text, or nothing at all.
#[derive(Debug, Clone, Default)]
pub struct TextClipboard {
    text: Option<String>,
}

impl TextClipboard {
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
        }
    }

    /// A clipboard whose reads always fail.
    #[must_use]
    pub const fn unavailable() -> Self {
        Self { text: None }
    }
}

#[async_trait]
impl Clipboard for TextClipboard {
    async fn read_text(&self) -> Result<String, PasteError> {
        self.text
            .clone()
            .ok_or_else(|| PasteError::ClipboardAccess("clipboard is unavailable".into()))
    }
}
