//! Error types for itembox.

use thiserror::Error;

/// Common error type for itembox.
#[derive(Error, Debug)]
pub enum ItemboxError {
    /// I/O error.
    ///
    /// Raised when copying an upload to disk or reading a stored file fails
    /// for any reason other than the file being absent.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Resource not found.
    #[error("{0} not found")]
    NotFound(String),

    /// A stored name that cannot be turned into a path inside the storage directory.
    #[error("invalid path: {0}")]
    InvalidPath(String),

    /// Validation error for user input.
    #[error("validation error: {0}")]
    Validation(String),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// Page template error.
    #[error("template error: {0}")]
    Template(#[from] tera::Error),
}

/// Result type alias for itembox operations.
pub type Result<T> = std::result::Result<T, ItemboxError>;
