//! Error types for Depot.

use thiserror::Error;

/// Common error type for Depot.
#[derive(Error, Debug)]
pub enum DepotError {
    /// File extension is not in the configured allow-list.
    #[error("file type not allowed: {0}")]
    InvalidFileType(String),

    /// File exceeds the configured maximum size.
    ///
    /// Raised both for declared sizes (before the stream is consumed) and
    /// for the actual byte count measured after the blob is written.
    #[error("file size {size} exceeds maximum allowed size of {max} bytes")]
    FileTooLarge {
        /// Size that triggered the failure (declared or actual).
        size: u64,
        /// Configured maximum in bytes.
        max: u64,
    },

    /// Resource not found.
    #[error("{0} not found")]
    NotFound(String),

    /// A metadata record exists but its blob is missing from storage.
    ///
    /// This is an integrity violation and is reported distinctly from
    /// `NotFound` so that a broken reference can be told apart from an
    /// unknown id.
    #[error("blob missing from storage for file {0}")]
    BlobMissing(String),

    /// I/O error on durable storage (write, read or delete failure).
    #[error("storage I/O error: {0}")]
    Storage(#[from] std::io::Error),

    /// Database error.
    ///
    /// This is a generic database error that wraps errors from any database
    /// backend. Database errors from sqlx are automatically converted.
    #[error("database error: {0}")]
    Database(String),

    /// Validation error for user input.
    #[error("validation error: {0}")]
    Validation(String),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

// Conversion from sqlx errors
impl From<sqlx::Error> for DepotError {
    fn from(e: sqlx::Error) -> Self {
        DepotError::Database(e.to_string())
    }
}

/// Result type alias for Depot operations.
pub type Result<T> = std::result::Result<T, DepotError>;
