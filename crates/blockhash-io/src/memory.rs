//! In-memory byte store.
//!
//! Primarily for tests. Same semantics as [`FsStore`](crate::fs::FsStore)
//! with nothing touching disk.

use std::collections::HashMap;
use std::sync::RwLock;

use crate::error::{IoError, Result};
use crate::traits::{ByteSink, ByteSource};

/// In-memory store. Thread-safe via RwLock.
#[derive(Debug, Default)]
pub struct MemoryStore {
    resources: RwLock<HashMap<String, Vec<u8>>>,
}

impl MemoryStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with one resource.
    pub fn with_resource(name: &str, bytes: impl Into<Vec<u8>>) -> Self {
        let store = Self::new();
        if let Ok(mut resources) = store.resources.write() {
            resources.insert(name.to_string(), bytes.into());
        }
        store
    }

    /// Number of stored resources.
    pub fn len(&self) -> Result<usize> {
        let resources = self.resources.read().map_err(|_| IoError::LockPoisoned)?;
        Ok(resources.len())
    }

    /// Whether the store holds no resources.
    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.len()? == 0)
    }
}

impl ByteSource for MemoryStore {
    fn read(&self, name: &str) -> Result<Vec<u8>> {
        let resources = self.resources.read().map_err(|_| IoError::LockPoisoned)?;
        resources
            .get(name)
            .cloned()
            .ok_or_else(|| IoError::NotFound(name.to_string()))
    }

    fn exists(&self, name: &str) -> Result<bool> {
        let resources = self.resources.read().map_err(|_| IoError::LockPoisoned)?;
        Ok(resources.contains_key(name))
    }
}

impl ByteSink for MemoryStore {
    fn write(&self, name: &str, bytes: &[u8]) -> Result<()> {
        let mut resources = self.resources.write().map_err(|_| IoError::LockPoisoned)?;
        resources.insert(name.to_string(), bytes.to_vec());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::ByteSourceExt;

    #[test]
    fn test_write_overwrites() {
        let store = MemoryStore::new();
        store.write("a", b"first").unwrap();
        store.write("a", b"second").unwrap();

        assert_eq!(store.read("a").unwrap(), b"second".to_vec());
        assert_eq!(store.len().unwrap(), 1);
    }

    #[test]
    fn test_missing_resource() {
        let store = MemoryStore::new();
        assert!(store.is_empty().unwrap());
        assert!(!store.exists("nope").unwrap());
        assert!(matches!(store.read("nope"), Err(IoError::NotFound(_))));
    }

    #[test]
    fn test_read_text() {
        let store = MemoryStore::with_resource("hello.txt", "hello");
        assert_eq!(store.read_text("hello.txt").unwrap(), "hello");

        store.write("bin", &[0xff, 0xfe]).unwrap();
        assert!(matches!(store.read_text("bin"), Err(IoError::Io(_))));
    }
}
