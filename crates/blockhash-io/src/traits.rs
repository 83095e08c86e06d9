//! Byte source and sink traits: opaque bytes in, opaque bytes out.
//!
//! Implementations include a directory-rooted filesystem store and an
//! in-memory store for tests.

use crate::error::Result;

/// Something that can read a named resource into a byte buffer.
pub trait ByteSource: Send + Sync {
    /// Read the whole resource.
    fn read(&self, name: &str) -> Result<Vec<u8>>;

    /// Check whether a resource exists.
    fn exists(&self, name: &str) -> Result<bool>;
}

/// Something that can write a byte buffer to a named resource.
pub trait ByteSink: Send + Sync {
    /// Write the whole resource, replacing any previous content.
    fn write(&self, name: &str, bytes: &[u8]) -> Result<()>;
}

/// Convenience methods layered on top of a source.
pub trait ByteSourceExt: ByteSource {
    /// Read a resource and interpret it as UTF-8 text.
    fn read_text(&self, name: &str) -> Result<String> {
        let bytes = self.read(name)?;
        String::from_utf8(bytes).map_err(|e| {
            std::io::Error::new(std::io::ErrorKind::InvalidData, e.utf8_error()).into()
        })
    }
}

impl<T: ByteSource + ?Sized> ByteSourceExt for T {}
