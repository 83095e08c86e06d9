//! Filesystem byte store rooted at a directory.

use std::fs;
use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};

use tracing::debug;

use crate::error::{IoError, Result};
use crate::traits::{ByteSink, ByteSource};

/// Reads and writes files relative to a root directory.
///
/// Names are relative paths; absolute paths and `..` components are rejected
/// so a name can never resolve outside the root.
#[derive(Debug, Clone)]
pub struct FsStore {
    root: PathBuf,
}

impl FsStore {
    /// Create a store rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Get the root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolve a resource name to a path under the root.
    pub fn resolve(&self, name: &str) -> Result<PathBuf> {
        let relative = Path::new(name);
        let escapes = relative
            .components()
            .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir));
        if name.is_empty() || escapes {
            return Err(IoError::InvalidName(name.to_string()));
        }
        Ok(self.root.join(relative))
    }
}

impl ByteSource for FsStore {
    fn read(&self, name: &str) -> Result<Vec<u8>> {
        let path = self.resolve(name)?;
        match fs::read(&path) {
            Ok(bytes) => {
                debug!(path = %path.display(), len = bytes.len(), "read resource");
                Ok(bytes)
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Err(IoError::NotFound(name.to_string())),
            Err(e) => Err(e.into()),
        }
    }

    fn exists(&self, name: &str) -> Result<bool> {
        Ok(self.resolve(name)?.is_file())
    }
}

impl ByteSink for FsStore {
    fn write(&self, name: &str, bytes: &[u8]) -> Result<()> {
        let path = self.resolve(name)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, bytes)?;
        debug!(path = %path.display(), len = bytes.len(), "wrote resource");
        Ok(())
    }
}
