//! Error types for blockhash core.

use thiserror::Error;

/// Errors that can occur while serializing or hashing a record.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// The payload has no canonical serialization.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The digest step itself failed.
    ///
    /// Reserved: neither supported algorithm can fail on serialized bytes.
    #[error("hash failure: {0}")]
    HashFailure(String),
}

impl CoreError {
    /// Short, stable name of the failure kind.
    pub fn kind(&self) -> &'static str {
        match self {
            CoreError::InvalidInput(_) => "invalid_input",
            CoreError::HashFailure(_) => "hash_failure",
        }
    }
}

impl From<serde_json::Error> for CoreError {
    fn from(e: serde_json::Error) -> Self {
        CoreError::InvalidInput(e.to_string())
    }
}

/// Result type for core operations.
pub type Result<T> = std::result::Result<T, CoreError>;
