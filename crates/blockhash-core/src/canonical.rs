//! Canonical JSON encoding for deterministic serialization.
//!
//! A record encodes as a compact JSON object with its fields in a fixed order:
//!
//! ```text
//! {"id":<identifier>,"nonce":<salt>,"body":<payload>,"hash":"<digest>"}
//! ```
//!
//! - Field order is part of the format and never changes
//! - The payload is lowered to a JSON value first; every object inside it has
//!   its keys sorted, so map-backed payloads encode identically on every run
//! - No insignificant whitespace
//!
//! The byte layout matches what a JavaScript `JSON.stringify` produces for the
//! same block, so digests are comparable across the two.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::Result;
use crate::record::Record;

/// Record field keys, in encoding order.
pub mod keys {
    pub const IDENTIFIER: &str = "id";
    pub const SALT: &str = "nonce";
    pub const PAYLOAD: &str = "body";
    pub const DIGEST: &str = "hash";
}

/// Borrowed view of a record in encoding order.
///
/// serde emits struct fields in declaration order, which pins the layout.
#[derive(Serialize)]
struct RecordView<'a> {
    id: u64,
    nonce: u64,
    body: &'a Value,
    hash: &'a str,
}

/// Encode a record (all four fields, current state) to canonical bytes.
pub fn canonical_bytes<P: Serialize>(record: &Record<P>) -> Result<Vec<u8>> {
    let body = canonical_value(record.payload())?;
    let view = RecordView {
        id: record.identifier(),
        nonce: record.salt(),
        body: &body,
        hash: record.digest(),
    };
    Ok(serde_json::to_vec(&view)?)
}

/// Encode any serializable value to canonical JSON bytes.
pub fn canonical_json<T: Serialize + ?Sized>(value: &T) -> Result<Vec<u8>> {
    let value = canonical_value(value)?;
    Ok(serde_json::to_vec(&value)?)
}

/// Lower a value to JSON with object keys sorted at every depth.
///
/// Fails with `InvalidInput` when the value has no JSON form (for example a
/// map whose keys are not strings).
pub fn canonical_value<T: Serialize + ?Sized>(value: &T) -> Result<Value> {
    let value = serde_json::to_value(value)?;
    Ok(sort_keys(value))
}

/// Rebuild objects with sorted keys.
///
/// `serde_json::Map` is already ordered unless `preserve_order` is enabled
/// somewhere in the dependency graph; inserting in sorted order covers both.
fn sort_keys(value: Value) -> Value {
    match value {
        Value::Object(map) => {
            let mut entries: Vec<(String, Value)> = map.into_iter().collect();
            entries.sort_by(|a, b| a.0.cmp(&b.0));

            let mut sorted = Map::with_capacity(entries.len());
            for (k, v) in entries {
                sorted.insert(k, sort_keys(v));
            }
            Value::Object(sorted)
        }
        Value::Array(items) => Value::Array(items.into_iter().map(sort_keys).collect()),
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{Payload, RecordBuilder};
    use serde_json::json;
    use std::collections::HashMap;

    #[test]
    fn test_record_field_order() {
        let record = Record::new("Test Block").unwrap();
        let bytes = canonical_bytes(&record).unwrap();
        assert_eq!(
            String::from_utf8(bytes).unwrap(),
            r#"{"id":0,"nonce":144445,"body":"Test Block","hash":""}"#
        );
    }

    #[test]
    fn test_record_identifier_and_salt() {
        let record = RecordBuilder::new("x").identifier(7).salt(3).build().unwrap();
        let bytes = canonical_bytes(&record).unwrap();
        assert_eq!(
            String::from_utf8(bytes).unwrap(),
            r#"{"id":7,"nonce":3,"body":"x","hash":""}"#
        );
    }

    #[test]
    fn test_structured_payload_keys_sorted() {
        let record = Record::new(Payload::from(json!({ "id": 1, "body": "A" }))).unwrap();
        let bytes = canonical_bytes(&record).unwrap();
        assert_eq!(
            String::from_utf8(bytes).unwrap(),
            r#"{"id":0,"nonce":144445,"body":{"body":"A","id":1},"hash":""}"#
        );
    }

    #[test]
    fn test_nested_keys_sorted() {
        let value = json!({ "z": [ { "y": "yes", "b": null } ], "a": { "x": 10, "c": true } });
        let bytes = canonical_json(&value).unwrap();
        assert_eq!(
            String::from_utf8(bytes).unwrap(),
            r#"{"a":{"c":true,"x":10},"z":[{"b":null,"y":"yes"}]}"#
        );
    }

    #[test]
    fn test_hashmap_payload_is_deterministic() {
        let mut map = HashMap::new();
        for i in 0..32 {
            map.insert(format!("key-{:02}", i), i);
        }
        let first = canonical_json(&map).unwrap();
        for _ in 0..8 {
            let rebuilt: HashMap<String, i32> = map.clone().into_iter().collect();
            assert_eq!(canonical_json(&rebuilt).unwrap(), first);
        }
    }

    #[test]
    fn test_non_string_keys_rejected() {
        let mut map = HashMap::new();
        map.insert((1u8, 2u8), "tuple key");
        let err = canonical_value(&map).unwrap_err();
        assert_eq!(err.kind(), "invalid_input");
    }

    #[test]
    fn test_string_value_encoding() {
        let bytes = canonical_json("Blockchain Rock!").unwrap();
        assert_eq!(bytes, br#""Blockchain Rock!""#.to_vec());
    }
}
