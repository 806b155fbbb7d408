//! Component state and policy enums.
//!
//! Policy enums use `snake_case` serialization so they can be set from config files.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// ExecutionState
// ---------------------------------------------------------------------------

/// Transient state of the paste component.
///
/// ```text
/// idle ──click──▶ executing ──ok────▶ idle
///                           └─fail──▶ error(message)
/// ```
///
/// `error` accepts a new click exactly like `idle`; every click resets it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ExecutionState {
    #[default]
    Idle,
    Executing,
    Error(String),
}

impl ExecutionState {
    #[must_use]
    pub const fn is_executing(&self) -> bool {
        matches!(self, Self::Executing)
    }
}

// ---------------------------------------------------------------------------
// ErrorPresentation
// ---------------------------------------------------------------------------

/// How the component surfaces a failed action.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum ErrorPresentation {
    /// Write the message into an inline error region next to the trigger.
    Inline,
    /// Dispatch an `ai-paste-error` event carrying the error.
    #[default]
    Event,
}

impl ErrorPresentation {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Inline => "inline",
            Self::Event => "event",
        }
    }
}

impl fmt::Display for ErrorPresentation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// NullPolicy
// ---------------------------------------------------------------------------

/// What the synchronizer writes into a text-like control when the extracted
/// value is `null`. Checkboxes ignore this and use truthiness.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum NullPolicy {
    /// Empty the control.
    #[default]
    Clear,
    /// Leave the control untouched.
    Skip,
    /// Write the literal text `null`.
    Literal,
}

impl NullPolicy {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Clear => "clear",
            Self::Skip => "skip",
            Self::Literal => "literal",
        }
    }
}

impl fmt::Display for NullPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
