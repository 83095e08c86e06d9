//! Command layer behind the `blockhash` binary.
//!
//! Each function takes its collaborators explicitly and returns what the CLI
//! prints, so the same paths are exercised by tests without a process.

use blockhash_core::{Digest, Hasher, Payload, Record, RecordBuilder};
use blockhash_io::{
    decode_resource, encode_resource, hex_roundtrip, ByteSink, ByteSource, TranscodeReport,
};
use serde_json::{json, Value};
use tracing::debug;

use crate::error::Result;

/// Options for building a record from the command line.
#[derive(Debug, Clone, Copy, Default)]
pub struct RecordOptions {
    /// Identifier to assign; the default identifier when `None`.
    pub identifier: Option<u64>,
    /// Salt override; the default salt when `None`.
    pub salt: Option<u64>,
}

/// Build a record from a payload and hash it.
pub async fn hash_record(
    hasher: &Hasher,
    payload: Payload,
    options: RecordOptions,
) -> Result<Record> {
    let mut builder = RecordBuilder::new(payload);
    if let Some(identifier) = options.identifier {
        builder = builder.identifier(identifier);
    }
    if let Some(salt) = options.salt {
        builder = builder.salt(salt);
    }

    let record = builder.build()?;
    Ok(hasher.compute_hash(record).await?)
}

/// Parse a structured payload from JSON text.
pub fn parse_structured(input: &str) -> Result<Payload> {
    let value: Value = serde_json::from_str(input)?;
    Ok(Payload::Structured(value))
}

/// Digest the canonical JSON of `input`.
///
/// Input that parses as JSON is hashed as that value; anything else is hashed
/// as a JSON string.
pub fn digest_input(hasher: &Hasher, input: &str) -> Result<Digest> {
    match serde_json::from_str::<Value>(input) {
        Ok(value) => Ok(hasher.hash_value(&value)?),
        Err(_) => {
            debug!("input is not JSON, hashing as a string");
            Ok(hasher.hash_value(input)?)
        }
    }
}

/// Render a hashed record as the two lines the CLI prints.
pub fn render_record(record: &Record) -> Result<Vec<String>> {
    Ok(vec![
        format!("Block Hash: {}", record.digest()),
        format!("Block: {}", serde_json::to_string(record)?),
    ])
}

/// Walk through value hashing and record hashing.
///
/// `unix_seconds` stamps the structured sample, as a string of whole seconds.
pub async fn demo(hasher: &Hasher, unix_seconds: u64) -> Result<Vec<String>> {
    let mut lines = Vec::new();

    lines.push(format!("Hashing values with {}", hasher.config().algorithm));
    let text = "Blockchain Rock!";
    let object = json!({
        "id": 1,
        "body": "With Object Works too",
        "time": unix_seconds.to_string(),
    });
    lines.push(format!("Digest: {}", hasher.hash_value(text)?));
    lines.push("*".repeat(36));
    lines.push(format!("Digest: {}", hasher.hash_value(&object)?));

    lines.push(String::new());
    lines.push("Hashing a record through its completion handle".to_string());
    let record = hasher.compute_hash(Record::new("Test Block")?).await?;
    lines.extend(render_record(&record)?);

    Ok(lines)
}

/// Print-ready hex of a resource.
pub fn hex_encode<S: ByteSource + ?Sized>(source: &S, name: &str) -> Result<String> {
    Ok(encode_resource(source, name)?)
}

/// Decode a hex text resource into a byte resource.
pub fn hex_decode<S, K>(source: &S, sink: &K, hex_name: &str, out_name: &str) -> Result<usize>
where
    S: ByteSource + ?Sized,
    K: ByteSink + ?Sized,
{
    Ok(decode_resource(source, sink, hex_name, out_name)?)
}

/// Encode a resource to hex and decode it back into another resource.
pub fn hex_copy<S, K>(source: &S, sink: &K, from: &str, to: &str) -> Result<TranscodeReport>
where
    S: ByteSource + ?Sized,
    K: ByteSink + ?Sized,
{
    Ok(hex_roundtrip(source, sink, from, to)?)
}
