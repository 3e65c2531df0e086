//! Error types for todo core operations.
//!
//! Two tiers exist: input errors (a caller handed us a malformed payload)
//! and store errors (the backend failed or returned something unexpected).
//! "Not found" is not an error; stores report it as `None` or `false`.

use thiserror::Error;

/// Result type alias for todo operations.
pub type Result<T> = std::result::Result<T, TodoError>;

/// Core error type for todo operations.
#[derive(Debug, Error)]
pub enum TodoError {
    /// Invalid caller-supplied payload
    #[error("{0}")]
    InvalidInput(String),

    /// Storage backend error (generic)
    #[error("Storage error: {0}")]
    Storage(String),

    /// SQLite-specific storage error
    #[error("SQLite error: {source}")]
    Sqlite {
        #[from]
        source: rusqlite::Error,
    },

    /// I/O error
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

impl TodoError {
    /// Whether this error was caused by the caller's input rather than the store.
    pub fn is_input_error(&self) -> bool {
        matches!(self, TodoError::InvalidInput(_))
    }
}
