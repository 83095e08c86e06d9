//! Test fixtures and helpers.
//!
//! Common setup code for integration tests.

use blockhash_core::{Record, RecordBuilder};
use blockhash_io::{ByteSink, FsStore};
use serde_json::json;
use tempfile::TempDir;

/// A scratch directory with a filesystem store rooted in it.
///
/// The directory is removed when the fixture is dropped.
pub struct TestFixture {
    pub dir: TempDir,
    pub store: FsStore,
}

impl TestFixture {
    /// Create a fixture over a fresh temporary directory.
    pub fn new() -> Self {
        let dir = TempDir::new().unwrap_or_else(|e| panic!("cannot create temp dir: {}", e));
        let store = FsStore::new(dir.path());
        Self { dir, store }
    }

    /// Write a resource into the fixture directory.
    pub fn put(&self, name: &str, bytes: &[u8]) -> &Self {
        self.store
            .write(name, bytes)
            .unwrap_or_else(|e| panic!("cannot write fixture resource {}: {}", name, e));
        self
    }

    /// Write a resource holding every byte value once.
    pub fn put_all_bytes(&self, name: &str) -> &Self {
        let bytes: Vec<u8> = (0u8..=255).collect();
        self.put(name, &bytes)
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// A text record and the two structured records used throughout the tests.
pub fn sample_records() -> Vec<Record> {
    let build = |r: blockhash_core::Result<Record>| {
        r.unwrap_or_else(|e| panic!("sample record must build: {}", e))
    };

    vec![
        build(Record::new("Blockchain Rock!")),
        build(RecordBuilder::new(json!({ "id": 1, "body": "A" })).build()),
        build(RecordBuilder::new(json!({ "id": 1, "body": "B" })).build()),
    ]
}
