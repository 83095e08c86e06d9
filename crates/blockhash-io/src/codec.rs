//! Hex text codec.
//!
//! Lowercase, two characters per byte, no separators and no `0x` prefix.
//! `decode(&encode(b)) == b` for every buffer.

use crate::error::Result;

/// Encode bytes as lowercase hex.
pub fn encode(bytes: &[u8]) -> String {
    hex::encode(bytes)
}

/// Decode hex text back to bytes.
///
/// Leading and trailing ASCII whitespace is ignored, so text produced by a
/// line-oriented tool (trailing newline) decodes cleanly.
pub fn decode(text: &str) -> Result<Vec<u8>> {
    Ok(hex::decode(text.trim())?)
}
