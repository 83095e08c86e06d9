//! # blockhash core
//!
//! Pure primitives for content hashing: records, canonical serialization,
//! digest algorithms, and the one-shot completion handle the hasher resolves.
//!
//! This crate does no I/O. Hashing is a pure function of a record's
//! canonical bytes.
//!
//! ## Key Types
//!
//! - [`Record`] - A unit of content plus its digest (empty until hashed)
//! - [`Hasher`] - Serializes, digests, and commits the digest to a record
//! - [`CompletionHandle`] - Resolves exactly once with the hashed record
//! - [`Digest`] - 32-byte digest, rendered as 64 lowercase hex characters
//!
//! ## Example
//!
//! ```rust
//! use blockhash_core::{Hasher, Record};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let record = Record::new("Blockchain Rock!")?;
//! let hashed = Hasher::default().compute_hash(record).await?;
//! assert_eq!(hashed.digest().len(), 64);
//! # Ok(())
//! # }
//! ```
//!
//! ## Canonicalization
//!
//! Records encode as compact JSON with a fixed field order. See [`canonical`].

pub mod canonical;
pub mod completion;
pub mod crypto;
pub mod error;
pub mod hasher;
pub mod record;
pub mod types;

pub use canonical::{canonical_bytes, canonical_json, canonical_value};
pub use completion::{completion, Completer, CompletionHandle, Outcome, Rejected};
pub use crypto::DigestAlgorithm;
pub use error::{CoreError, Result};
pub use hasher::{hash_value, Hasher, HasherConfig};
pub use record::{Payload, Record, RecordBuilder, DEFAULT_SALT, UNASSIGNED_IDENTIFIER};
pub use types::{is_digest_hex, Digest, DIGEST_HEX_LEN, DIGEST_LEN};
