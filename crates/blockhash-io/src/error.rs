//! Error types for the io module.

use thiserror::Error;

/// Errors that can occur while moving bytes in and out of named resources.
#[derive(Debug, Error)]
pub enum IoError {
    /// Underlying filesystem error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// No resource with this name.
    #[error("resource not found: {0}")]
    NotFound(String),

    /// Resource name that would escape the store root.
    #[error("invalid resource name: {0}")]
    InvalidName(String),

    /// Text that is not valid lowercase/uppercase hex.
    #[error("invalid hex: {0}")]
    InvalidHex(#[from] hex::FromHexError),

    /// Decoding the encoded form did not reproduce the source bytes.
    #[error("round-trip mismatch for {name}: read {expected} bytes, decoded {actual}")]
    RoundTripMismatch {
        name: String,
        expected: usize,
        actual: usize,
    },

    /// In-memory store lock was poisoned by a panicking writer.
    #[error("store lock poisoned")]
    LockPoisoned,
}

/// Result type for io operations.
pub type Result<T> = std::result::Result<T, IoError>;
