//! Error types for newsdigest.

use thiserror::Error;

/// Common error type for newsdigest.
#[derive(Error, Debug)]
pub enum DigestError {
    /// Database error.
    ///
    /// Generic storage error wrapping failures from sqlx. Storage errors
    /// are fatal to the current run.
    #[error("database error: {0}")]
    Database(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Feed fetch or parse error. Non-fatal: isolated to one feed URL.
    #[error("feed error: {0}")]
    Feed(String),

    /// Notifier delivery error. Non-fatal: isolated to one subscriber.
    #[error("notify error: {0}")]
    Notify(String),

    /// Validation error for configuration or input.
    #[error("validation error: {0}")]
    Validation(String),
}

// Conversion from sqlx errors
impl From<sqlx::Error> for DigestError {
    fn from(e: sqlx::Error) -> Self {
        DigestError::Database(e.to_string())
    }
}

/// Result type alias for newsdigest operations.
pub type Result<T> = std::result::Result<T, DigestError>;
