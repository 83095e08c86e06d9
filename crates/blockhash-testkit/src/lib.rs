//! # blockhash testkit
//!
//! Testing utilities for blockhash.
//!
//! ## Overview
//!
//! This crate provides:
//!
//! - **Golden vectors**: Records with pinned canonical bytes and digests
//! - **Generators**: Proptest strategies for payloads and records
//! - **Fixtures**: Scratch directories and sample records
//!
//! ## Golden Vectors
//!
//! ```rust
//! use blockhash_testkit::vectors::{all_vectors, record_from_vector};
//! use blockhash_core::Hasher;
//!
//! let hasher = Hasher::default();
//! for vector in all_vectors() {
//!     let record = record_from_vector(&vector);
//!     let digest = hasher.digest_record(&record).unwrap();
//!     assert_eq!(digest.to_hex(), vector.expected_digest);
//! }
//! ```
//!
//! ## Property Testing
//!
//! ```rust,ignore
//! use proptest::prelude::*;
//! use blockhash_testkit::generators::{record_from_params, RecordParams};
//!
//! proptest! {
//!     #[test]
//!     fn canonical_bytes_are_deterministic(params: RecordParams) {
//!         let r1 = record_from_params(&params);
//!         let r2 = record_from_params(&params);
//!         prop_assert_eq!(r1.canonical_bytes().unwrap(), r2.canonical_bytes().unwrap());
//!     }
//! }
//! ```

pub mod fixtures;
pub mod generators;
pub mod vectors;

pub use fixtures::{sample_records, TestFixture};
pub use generators::{record_from_params, RecordParams};
pub use vectors::{all_vectors, record_from_vector, verify_all_vectors, GoldenVector};
