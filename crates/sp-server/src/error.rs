//! Server error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServerError {
    /// The listening socket could not be opened.
    #[error("failed to bind {addr}: {message}")]
    Bind { addr: String, message: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The blocking accept loop panicked or was cancelled.
    #[error("server task failed: {0}")]
    Join(String),
}
