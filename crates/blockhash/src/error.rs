//! Error types for blockhash.

use blockhash_core::{CoreError, Rejected};
use blockhash_io::IoError;
use thiserror::Error;

/// Errors that can occur across the blockhash crates.
#[derive(Debug, Error)]
pub enum Error {
    /// Serialization or hashing error.
    #[error("core error: {0}")]
    Core(#[from] CoreError),

    /// Byte store or hex codec error.
    #[error("io error: {0}")]
    Io(#[from] IoError),

    /// Input that is not valid JSON where JSON is required.
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl<T> From<Rejected<T>> for Error {
    fn from(rejected: Rejected<T>) -> Self {
        Error::Core(rejected.error)
    }
}

/// Result type for blockhash operations.
pub type Result<T> = std::result::Result<T, Error>;
