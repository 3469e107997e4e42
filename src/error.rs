//! Error types for dictfill

use thiserror::Error;

/// Result type alias for dictfill operations
pub type Result<T> = std::result::Result<T, DictfillError>;

/// Error types for dictfill operations
#[derive(Error, Debug)]
pub enum DictfillError {
    /// Word list could not be opened or read
    #[error("Cannot open file '{path}': {reason}")]
    FileNotFound { path: String, reason: String },

    /// Invalid configuration provided
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// I/O error during file operations
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Cache file could not be read, parsed or written
    #[error("Cache error: {0}")]
    CacheError(String),

    /// Transport-level lookup failure (connect, timeout, body read)
    #[error("Lookup request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Lookup service answered with a non-success status
    #[error("Lookup service returned HTTP {0}")]
    Status(u16),

    /// Lookup response did not contain a usable definition
    #[error("No usable definition in response: {0}")]
    UnexpectedResponse(String),
}
