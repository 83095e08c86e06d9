//! Golden vectors checked through the public facade.
//!
//! Every implementation must produce, for each vector:
//! - identical canonical bytes
//! - the pinned SHA-256 digest, as 64 lowercase hex characters

use blockhash::{codec, Hasher, Record};
use blockhash_testkit::{all_vectors, record_from_vector, verify_all_vectors};

#[test]
fn test_vectors_verify() {
    let results = verify_all_vectors();
    assert_eq!(results.len(), all_vectors().len());
    for (name, matches, actual) in results {
        assert!(matches, "vector '{}' mismatch: got {}", name, actual);
    }
}

#[tokio::test]
async fn test_vectors_via_compute_hash() {
    let hasher = Hasher::default();
    for vector in all_vectors() {
        let record = record_from_vector(&vector);
        assert_eq!(record.digest(), "");

        let hashed = hasher.compute_hash(record).await.unwrap();
        assert_eq!(hashed.digest(), vector.expected_digest, "vector '{}'", vector.name);
        assert_eq!(
            codec::encode(hashed.digest_bytes().unwrap().as_bytes()),
            vector.expected_digest
        );
    }
}

#[tokio::test]
async fn test_scenario_text_record_is_stable() {
    let hasher = Hasher::default();
    let first = hasher
        .compute_hash(Record::new("Blockchain Rock!").unwrap())
        .await
        .unwrap();
    let second = hasher
        .compute_hash(Record::new("Blockchain Rock!").unwrap())
        .await
        .unwrap();

    assert_eq!(first.digest().len(), 64);
    assert_eq!(first.digest(), second.digest());
    assert_eq!(
        first.digest(),
        "4409084d6053f26acdf6b7902d82ee5def8afaa844a5b8bee29a38865daee85b"
    );
}

#[tokio::test]
async fn test_scenario_structured_payloads_differ() {
    let hasher = Hasher::default();
    let a = Record::new(serde_json::json!({ "id": 1, "body": "A" })).unwrap();
    let b = Record::new(serde_json::json!({ "id": 1, "body": "B" })).unwrap();

    let a = hasher.compute_hash(a).await.unwrap();
    let b = hasher.compute_hash(b).await.unwrap();
    assert_ne!(a.digest(), b.digest());
}

#[test]
fn test_scenario_hex_codec() {
    assert_eq!(codec::encode(&[0x01, 0x02, 0xff]), "0102ff");
    assert_eq!(codec::decode("0102ff").unwrap(), vec![0x01, 0x02, 0xff]);
}
