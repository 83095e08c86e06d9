//! # blockhash
//!
//! Deterministic content hashing for records, delivered through a one-shot
//! completion handle.
//!
//! ## Overview
//!
//! - **Records**: an identifier, a salt, a payload, and a digest that starts
//!   empty and is written exactly once
//! - **Hasher**: serializes a record canonically, digests it (SHA-256 by
//!   default), and hands the record back through a [`CompletionHandle`]
//! - **Hex tools**: encode named resources to hex text and back
//!
//! ## Usage
//!
//! ```rust
//! use blockhash::{Hasher, Record};
//!
//! # async fn example() -> blockhash::Result<()> {
//! let record = Record::new("Test Block")?;
//! let hashed = Hasher::default().compute_hash(record).await?;
//!
//! assert_eq!(
//!     hashed.digest(),
//!     "7c4dee040eece512836f64c309080e33af51eea8b7a6e726731e37cbbdbe374a"
//! );
//! # Ok(())
//! # }
//! ```
//!
//! ## Re-exports
//!
//! - `blockhash::core` - Records, canonical encoding, digests, completion handles
//! - `blockhash::io` - Byte sources and sinks, hex codec

pub mod commands;
pub mod error;

// Re-export component crates
pub use blockhash_core as core;
pub use blockhash_io as io;

pub use error::{Error, Result};

// Re-export commonly used types
pub use blockhash_core::{
    hash_value, CompletionHandle, CoreError, Digest, DigestAlgorithm, Hasher, HasherConfig,
    Payload, Record, RecordBuilder, Rejected,
};
pub use blockhash_io::{codec, ByteSink, ByteSource, FsStore, IoError, MemoryStore};
