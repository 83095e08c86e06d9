//! Golden test vectors for deterministic verification.
//!
//! Each vector pins the SHA-256 digest of a record's canonical bytes. The
//! expected values were produced by hashing the same JSON text with an
//! independent SHA-256 implementation, so a change in field order, key
//! sorting, or string escaping shows up here first.

use blockhash_core::{Payload, Record, RecordBuilder};

/// A golden test vector.
#[derive(Debug, Clone)]
pub struct GoldenVector {
    /// Human-readable name for the vector.
    pub name: &'static str,
    /// Record identifier.
    pub identifier: u64,
    /// Record salt.
    pub salt: u64,
    /// Payload as JSON text (a JSON string becomes a text payload).
    pub payload_json: &'static str,
    /// Exact canonical bytes of the unhashed record.
    pub canonical: &'static str,
    /// Expected SHA-256 digest (hex).
    pub expected_digest: &'static str,
}

/// Get all golden test vectors.
pub fn all_vectors() -> Vec<GoldenVector> {
    vec![
        GoldenVector {
            name: "text block",
            identifier: 0,
            salt: 144445,
            payload_json: r#""Test Block""#,
            canonical: r#"{"id":0,"nonce":144445,"body":"Test Block","hash":""}"#,
            expected_digest: "7c4dee040eece512836f64c309080e33af51eea8b7a6e726731e37cbbdbe374a",
        },
        GoldenVector {
            name: "blockchain rock",
            identifier: 0,
            salt: 144445,
            payload_json: r#""Blockchain Rock!""#,
            canonical: r#"{"id":0,"nonce":144445,"body":"Blockchain Rock!","hash":""}"#,
            expected_digest: "4409084d6053f26acdf6b7902d82ee5def8afaa844a5b8bee29a38865daee85b",
        },
        GoldenVector {
            name: "structured body A",
            identifier: 0,
            salt: 144445,
            payload_json: r#"{"id":1,"body":"A"}"#,
            canonical: r#"{"id":0,"nonce":144445,"body":{"body":"A","id":1},"hash":""}"#,
            expected_digest: "0fd3f745c75e05c6f6ee0a9de853ecae16728bbea69aa853ff64f3960d7a51b0",
        },
        GoldenVector {
            name: "structured body B",
            identifier: 0,
            salt: 144445,
            payload_json: r#"{"id":1,"body":"B"}"#,
            canonical: r#"{"id":0,"nonce":144445,"body":{"body":"B","id":1},"hash":""}"#,
            expected_digest: "0cb0005137fb263d3656867c852ba7e30224a56befc9b4ec99aee87ab08d513f",
        },
        GoldenVector {
            name: "empty text with identifier",
            identifier: 7,
            salt: 144445,
            payload_json: r#""""#,
            canonical: r#"{"id":7,"nonce":144445,"body":"","hash":""}"#,
            expected_digest: "c3f40c2b485c2c7e2ff7034a808dac28fa177ec19097192d57801ce596e8cdfa",
        },
        GoldenVector {
            name: "escapes and non-ascii, zero salt",
            identifier: 1,
            salt: 0,
            payload_json: r#""héllo \"wörld\"\n""#,
            canonical: r#"{"id":1,"nonce":0,"body":"héllo \"wörld\"\n","hash":""}"#,
            expected_digest: "fc68dc5dad8f9c2434aebf2a84114df17ace3bd9a97473eb4593d36ed3c97b87",
        },
        GoldenVector {
            name: "array with nested object",
            identifier: 42,
            salt: 144445,
            payload_json: r#"[1,2,{"z":true,"a":null}]"#,
            canonical: r#"{"id":42,"nonce":144445,"body":[1,2,{"a":null,"z":true}],"hash":""}"#,
            expected_digest: "f285da8761a923955c6ca2c182f5e30744d4510ce76f4e5b7283673cacfb57ea",
        },
    ]
}

/// Build the unhashed record described by a vector.
pub fn record_from_vector(vector: &GoldenVector) -> Record {
    let payload: Payload = serde_json::from_str(vector.payload_json)
        .unwrap_or_else(|e| panic!("vector '{}' has invalid payload JSON: {}", vector.name, e));

    RecordBuilder::new(payload)
        .identifier(vector.identifier)
        .salt(vector.salt)
        .build()
        .unwrap_or_else(|e| panic!("vector '{}' does not build: {}", vector.name, e))
}

/// Check every vector against the current implementation.
///
/// Returns `(name, matches, actual_digest_hex)` per vector.
pub fn verify_all_vectors() -> Vec<(String, bool, String)> {
    let hasher = blockhash_core::Hasher::default();

    all_vectors()
        .iter()
        .map(|v| {
            let record = record_from_vector(v);
            let actual = hasher
                .digest_record(&record)
                .map(|d| d.to_hex())
                .unwrap_or_default();
            (v.name.to_string(), actual == v.expected_digest, actual)
        })
        .collect()
}
