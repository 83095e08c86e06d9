//! Hex transcoding between named resources.
//!
//! Reads a resource, renders it as hex text, decodes the text again, and
//! writes the decoded bytes out. The decoded buffer must equal the source
//! buffer byte for byte.

use tracing::info;

use crate::codec;
use crate::error::{IoError, Result};
use crate::traits::{ByteSink, ByteSource, ByteSourceExt};

/// Summary of a completed round trip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranscodeReport {
    /// Resource that was read.
    pub source: String,
    /// Resource that was written.
    pub destination: String,
    /// Number of bytes read (and written).
    pub bytes: usize,
    /// The intermediate hex text.
    pub hex: String,
}

/// Read `name` and return its hex encoding.
pub fn encode_resource<S: ByteSource + ?Sized>(source: &S, name: &str) -> Result<String> {
    let bytes = source.read(name)?;
    Ok(codec::encode(&bytes))
}

/// Read hex text from `hex_name`, decode it, and write the bytes to `out_name`.
///
/// Returns the number of bytes written.
pub fn decode_resource<S, K>(source: &S, sink: &K, hex_name: &str, out_name: &str) -> Result<usize>
where
    S: ByteSource + ?Sized,
    K: ByteSink + ?Sized,
{
    let text = source.read_text(hex_name)?;
    let bytes = codec::decode(&text)?;
    sink.write(out_name, &bytes)?;
    Ok(bytes.len())
}

/// Read `from`, encode to hex, decode, verify, and write to `to`.
pub fn hex_roundtrip<S, K>(source: &S, sink: &K, from: &str, to: &str) -> Result<TranscodeReport>
where
    S: ByteSource + ?Sized,
    K: ByteSink + ?Sized,
{
    let original = source.read(from)?;
    let hex = codec::encode(&original);
    let decoded = codec::decode(&hex)?;

    if decoded != original {
        return Err(IoError::RoundTripMismatch {
            name: from.to_string(),
            expected: original.len(),
            actual: decoded.len(),
        });
    }

    sink.write(to, &decoded)?;
    info!(from, to, bytes = decoded.len(), "hex round trip complete");

    Ok(TranscodeReport {
        source: from.to_string(),
        destination: to.to_string(),
        bytes: decoded.len(),
        hex,
    })
}
