//! Hasher: serializes a record, digests it, and commits the digest.

use serde::Serialize;
use tracing::{debug, warn};

use crate::canonical::canonical_json;
use crate::completion::{completion, CompletionHandle};
use crate::crypto::DigestAlgorithm;
use crate::error::Result;
use crate::record::Record;
use crate::types::Digest;

/// Configuration for the Hasher.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HasherConfig {
    /// Which 256-bit hash function to use.
    pub algorithm: DigestAlgorithm,
}

/// Stateless record hasher.
///
/// Holds only configuration; hashing one record never affects another.
#[derive(Debug, Clone, Copy, Default)]
pub struct Hasher {
    config: HasherConfig,
}

impl Hasher {
    /// Create a hasher with the given configuration.
    pub fn new(config: HasherConfig) -> Self {
        Self { config }
    }

    /// Create a hasher for a specific algorithm.
    pub fn with_algorithm(algorithm: DigestAlgorithm) -> Self {
        Self::new(HasherConfig { algorithm })
    }

    /// Get the configuration.
    pub fn config(&self) -> &HasherConfig {
        &self.config
    }

    /// Hash a record and commit the digest to it.
    ///
    /// The record is moved in and handed back through the returned handle:
    /// with its digest set on success, or unchanged inside the rejection.
    ///
    /// The record must not already carry a digest. If it does, the existing
    /// digest becomes part of the hashed bytes and is then overwritten.
    pub fn compute_hash<P: Serialize>(&self, mut record: Record<P>) -> CompletionHandle<Record<P>> {
        let (completer, handle) = completion();

        if record.is_hashed() {
            warn!(
                identifier = record.identifier(),
                "hashing a record that already carries a digest"
            );
        }

        let bytes = match record.canonical_bytes() {
            Ok(bytes) => bytes,
            Err(e) => {
                debug!(identifier = record.identifier(), error = %e, "record serialization failed");
                completer.reject(e, record);
                return handle;
            }
        };

        match self.config.algorithm.digest(&bytes) {
            Ok(digest) => {
                debug!(
                    identifier = record.identifier(),
                    algorithm = %self.config.algorithm,
                    len = bytes.len(),
                    digest = %digest,
                    "record hashed"
                );
                record.set_digest(&digest);
                completer.resolve(record);
            }
            Err(e) => {
                warn!(identifier = record.identifier(), error = %e, "digest step failed");
                completer.reject(e, record);
            }
        }

        handle
    }

    /// Digest of a record's current state, without committing it.
    pub fn digest_record<P: Serialize>(&self, record: &Record<P>) -> Result<Digest> {
        let bytes = record.canonical_bytes()?;
        self.config.algorithm.digest(&bytes)
    }

    /// Digest of the canonical JSON form of any serializable value.
    pub fn hash_value<T: Serialize + ?Sized>(&self, value: &T) -> Result<Digest> {
        let bytes = canonical_json(value)?;
        self.config.algorithm.digest(&bytes)
    }
}

/// Digest a value's canonical JSON with the default algorithm (SHA-256).
pub fn hash_value<T: Serialize + ?Sized>(value: &T) -> Result<Digest> {
    Hasher::default().hash_value(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{Payload, RecordBuilder};
    use crate::types::is_digest_hex;
    use serde_json::json;

    const TEST_BLOCK_SHA256: &str =
        "7c4dee040eece512836f64c309080e33af51eea8b7a6e726731e37cbbdbe374a";

    #[tokio::test]
    async fn test_compute_hash_sets_digest() {
        let record = Record::new("Test Block").unwrap();
        assert_eq!(record.digest(), "");

        let hashed = Hasher::default().compute_hash(record).await.unwrap();
        assert_eq!(hashed.digest(), TEST_BLOCK_SHA256);
        assert!(hashed.is_hashed());
        assert!(is_digest_hex(hashed.digest()));
    }

    #[tokio::test]
    async fn test_compute_hash_preserves_fields() {
        let record = RecordBuilder::new("payload").identifier(5).salt(11).build().unwrap();
        let hashed = Hasher::default().compute_hash(record).await.unwrap();

        assert_eq!(hashed.identifier(), 5);
        assert_eq!(hashed.salt(), 11);
        assert_eq!(hashed.payload(), &Payload::Text("payload".into()));
    }

    #[tokio::test]
    async fn test_digest_is_over_pre_hash_state() {
        let record = Record::new("Test Block").unwrap();
        let hasher = Hasher::default();
        let expected = hasher.digest_record(&record).unwrap();

        let hashed = hasher.compute_hash(record).await.unwrap();
        assert_eq!(hashed.digest_bytes(), Some(expected));

        // Re-serializing now would include the digest itself.
        assert_ne!(hasher.digest_record(&hashed).unwrap(), expected);
    }

    #[tokio::test]
    async fn test_compute_hash_deterministic() {
        let hasher = Hasher::default();
        let a = hasher.compute_hash(Record::new("Blockchain Rock!").unwrap()).await.unwrap();
        let b = hasher.compute_hash(Record::new("Blockchain Rock!").unwrap()).await.unwrap();
        assert_eq!(a.digest(), b.digest());
    }

    #[tokio::test]
    async fn test_payload_sensitivity() {
        let hasher = Hasher::default();
        let a = Record::with_identifier(json!({ "id": 1, "body": "A" }), 0).unwrap();
        let b = Record::with_identifier(json!({ "id": 1, "body": "B" }), 0).unwrap();

        let a = hasher.compute_hash(a).await.unwrap();
        let b = hasher.compute_hash(b).await.unwrap();
        assert_ne!(a.digest(), b.digest());
    }

    #[tokio::test]
    async fn test_blake3_digest_differs() {
        let sha = Hasher::default()
            .compute_hash(Record::new("Test Block").unwrap())
            .await
            .unwrap();
        let b3 = Hasher::with_algorithm(DigestAlgorithm::Blake3)
            .compute_hash(Record::new("Test Block").unwrap())
            .await
            .unwrap();

        assert!(is_digest_hex(b3.digest()));
        assert_ne!(sha.digest(), b3.digest());
    }

    #[test]
    fn test_compute_hash_resolves_without_runtime() {
        let handle = Hasher::default().compute_hash(Record::new("sync").unwrap());
        let record = handle.wait().unwrap();
        assert!(record.is_hashed());
    }

    #[tokio::test]
    async fn test_settle_success_callback() {
        let mut seen = None;
        Hasher::default()
            .compute_hash(Record::new("Test Block").unwrap())
            .settle(|r| seen = Some(r.digest().to_string()), |_| panic!("unexpected failure"))
            .await;
        assert_eq!(seen.as_deref(), Some(TEST_BLOCK_SHA256));
    }

    #[test]
    fn test_hash_value_string() {
        let digest = hash_value("Blockchain Rock!").unwrap();
        assert_eq!(
            digest.to_hex(),
            "f9a8aa13efcf511cb7ac496943a3dd5c14de3a8188c36719aa4350f662957329"
        );
    }

    #[test]
    fn test_hash_value_key_order_irrelevant() {
        let a = hash_value(&json!({ "id": 1, "body": "x" })).unwrap();
        let b = hash_value(&json!({ "body": "x", "id": 1 })).unwrap();
        assert_eq!(a, b);
    }
}
