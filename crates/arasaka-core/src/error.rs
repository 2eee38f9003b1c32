//! Error types for arasaka-core
//!
//! Nothing in the portfolio is fatal. Storage errors are logged and the
//! session falls back to defaults; submit errors are shown as a transient
//! banner on the contact panel.

use thiserror::Error;

/// Errors from the persisted key-value backend
#[derive(Debug, Error)]
pub enum StorageError {
    /// I/O error while reading or writing the store
    #[error("I/O error: {0}")]
    Io(String),

    /// Stored data could not be encoded or decoded
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<std::io::Error> for StorageError {
    fn from(err: std::io::Error) -> Self {
        StorageError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for StorageError {
    fn from(err: serde_json::Error) -> Self {
        StorageError::Serialization(err.to_string())
    }
}

/// Errors from a contact form submission
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    /// One or more fields failed validation
    #[error("form has validation errors")]
    Invalid,

    /// A submission is already in flight
    #[error("a submission is already in progress")]
    Busy,

    /// The transmitter reported a failure
    #[error("transmission failed: {0}")]
    Transmission(String),
}

impl SubmitError {
    /// Create a new Transmission error
    pub fn transmission(message: impl Into<String>) -> Self {
        Self::Transmission(message.into())
    }
}
