//! # blockhash io
//!
//! The I/O edge of blockhash: named byte sources and sinks, and the hex text
//! codec. Nothing here knows about records or digests.
//!
//! ## Key Types
//!
//! - [`ByteSource`] / [`ByteSink`] - Read and write opaque bytes by name
//! - [`FsStore`] - Files under a root directory
//! - [`MemoryStore`] - In-memory resources for tests
//!
//! ## Usage
//!
//! ```rust
//! use blockhash_io::{codec, hex_roundtrip, ByteSink, ByteSource, MemoryStore};
//!
//! let store = MemoryStore::new();
//! store.write("in.bin", &[0x01, 0x02, 0xff]).unwrap();
//!
//! let report = hex_roundtrip(&store, &store, "in.bin", "out.bin").unwrap();
//! assert_eq!(report.hex, "0102ff");
//! assert_eq!(codec::decode(&report.hex).unwrap(), store.read("out.bin").unwrap());
//! ```

pub mod codec;
pub mod error;
pub mod fs;
pub mod memory;
pub mod traits;
pub mod transcode;

pub use error::{IoError, Result};
pub use fs::FsStore;
pub use memory::MemoryStore;
pub use traits::{ByteSink, ByteSource, ByteSourceExt};
pub use transcode::{decode_resource, encode_resource, hex_roundtrip, TranscodeReport};
