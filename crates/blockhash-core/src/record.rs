//! Record: the unit of content that gets hashed.
//!
//! A record carries three immutable fields fixed at construction (identifier,
//! salt, payload) and one derived field, the digest, which starts empty and is
//! written once by the [`Hasher`](crate::hasher::Hasher).

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::canonical::{canonical_bytes, canonical_value};
use crate::error::Result;
use crate::types::Digest;

/// Salt assigned to every record unless the builder overrides it.
pub const DEFAULT_SALT: u64 = 144445;

/// Identifier a record carries until its owner assigns one.
pub const UNASSIGNED_IDENTIFIER: u64 = 0;

/// Content carried by a record: plain text or a structured JSON value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Payload {
    /// A text payload, encoded as a JSON string.
    Text(String),
    /// Any JSON value (object, array, number, ...).
    Structured(Value),
}

impl Payload {
    /// Lower any serializable value to a structured payload.
    pub fn structured<T: Serialize + ?Sized>(value: &T) -> Result<Self> {
        Ok(Payload::Structured(canonical_value(value)?))
    }

    /// Get the text, if this is a text payload.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Payload::Text(s) => Some(s),
            Payload::Structured(_) => None,
        }
    }
}

impl From<&str> for Payload {
    fn from(s: &str) -> Self {
        Payload::Text(s.to_string())
    }
}

impl From<String> for Payload {
    fn from(s: String) -> Self {
        Payload::Text(s)
    }
}

impl From<Value> for Payload {
    fn from(v: Value) -> Self {
        Payload::Structured(v)
    }
}

/// A record of content plus its (eventual) digest.
///
/// The serde form uses the wire keys `id`, `nonce`, `body`, `hash`. A record
/// read back without a `hash` field starts unhashed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record<P = Payload> {
    /// Owner-assigned identifier (0 until set).
    #[serde(rename = "id")]
    identifier: u64,

    /// Nonce fixed at construction.
    #[serde(rename = "nonce")]
    salt: u64,

    /// The content being hashed.
    #[serde(rename = "body")]
    payload: P,

    /// Lowercase hex digest, empty until hashing completes.
    #[serde(rename = "hash", default)]
    digest: String,
}

impl Record<Payload> {
    /// Create a record with the default identifier and salt.
    pub fn new(payload: impl Into<Payload>) -> Result<Self> {
        RecordBuilder::new(payload).build()
    }

    /// Create a record with an explicit identifier.
    pub fn with_identifier(payload: impl Into<Payload>, identifier: u64) -> Result<Self> {
        RecordBuilder::new(payload).identifier(identifier).build()
    }
}

impl<P: Serialize> Record<P> {
    /// Create a record around any serializable payload type.
    ///
    /// Fails with `InvalidInput` if the payload has no canonical form.
    pub fn from_payload(payload: P) -> Result<Self> {
        RecordBuilder::from_payload(payload).build()
    }

    /// Canonical bytes of the record's current state, digest included.
    pub fn canonical_bytes(&self) -> Result<Vec<u8>> {
        canonical_bytes(self)
    }
}

impl<P> Record<P> {
    /// Get the identifier.
    pub fn identifier(&self) -> u64 {
        self.identifier
    }

    /// Get the salt.
    pub fn salt(&self) -> u64 {
        self.salt
    }

    /// Get the payload.
    pub fn payload(&self) -> &P {
        &self.payload
    }

    /// Get the digest (empty until hashed).
    pub fn digest(&self) -> &str {
        &self.digest
    }

    /// Whether hashing has completed for this record.
    pub fn is_hashed(&self) -> bool {
        !self.digest.is_empty()
    }

    /// Parse the stored digest back to bytes.
    pub fn digest_bytes(&self) -> Option<Digest> {
        Digest::from_hex(&self.digest).ok()
    }

    /// Consume the record, returning its payload.
    pub fn into_payload(self) -> P {
        self.payload
    }

    pub(crate) fn set_digest(&mut self, digest: &Digest) {
        self.digest = digest.to_hex();
    }
}

/// Builder for creating records.
pub struct RecordBuilder<P = Payload> {
    payload: P,
    identifier: u64,
    salt: u64,
}

impl RecordBuilder<Payload> {
    /// Start building a record from text or a JSON value.
    pub fn new(payload: impl Into<Payload>) -> Self {
        Self::from_payload(payload.into())
    }
}

impl<P: Serialize> RecordBuilder<P> {
    /// Start building a record around any serializable payload type.
    pub fn from_payload(payload: P) -> Self {
        Self {
            payload,
            identifier: UNASSIGNED_IDENTIFIER,
            salt: DEFAULT_SALT,
        }
    }

    /// Set the identifier.
    pub fn identifier(mut self, identifier: u64) -> Self {
        self.identifier = identifier;
        self
    }

    /// Override the salt.
    pub fn salt(mut self, salt: u64) -> Self {
        self.salt = salt;
        self
    }

    /// Validate the payload and build the record.
    pub fn build(self) -> Result<Record<P>> {
        canonical_value(&self.payload)?;

        Ok(Record {
            identifier: self.identifier,
            salt: self.salt,
            payload: self.payload,
            digest: String::new(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::collections::BTreeMap;
    use std::collections::HashMap;

    #[test]
    fn test_record_defaults() {
        let record = Record::new("Test Block").unwrap();
        assert_eq!(record.identifier(), UNASSIGNED_IDENTIFIER);
        assert_eq!(record.salt(), DEFAULT_SALT);
        assert_eq!(record.payload().as_text(), Some("Test Block"));
        assert_eq!(record.digest(), "");
        assert!(!record.is_hashed());
        assert_eq!(record.digest_bytes(), None);
    }

    #[test]
    fn test_record_with_identifier() {
        let record = Record::with_identifier("payload", 42).unwrap();
        assert_eq!(record.identifier(), 42);
        assert_eq!(record.salt(), DEFAULT_SALT);
    }

    #[test]
    fn test_record_builder() {
        let record = RecordBuilder::new(json!({ "id": 1, "body": "A" }))
            .identifier(9)
            .salt(1)
            .build()
            .unwrap();

        assert_eq!(record.identifier(), 9);
        assert_eq!(record.salt(), 1);
        assert_eq!(record.payload(), &Payload::Structured(json!({ "id": 1, "body": "A" })));
    }

    #[test]
    fn test_record_generic_payload() {
        let mut body = BTreeMap::new();
        body.insert("id", 1);
        let record = Record::from_payload(body).unwrap();
        assert_eq!(record.payload().get("id"), Some(&1));
    }

    #[test]
    fn test_record_rejects_unserializable_payload() {
        let mut body = HashMap::new();
        body.insert(vec![1u8], "bytes as key");
        let err = Record::from_payload(body).unwrap_err();
        assert_eq!(err.kind(), "invalid_input");
    }

    #[test]
    fn test_record_canonical_bytes_include_digest() {
        let mut record = Record::new("x").unwrap();
        let before = record.canonical_bytes().unwrap();

        record.set_digest(&Digest::from_bytes([0x11; 32]));
        let after = record.canonical_bytes().unwrap();

        assert_ne!(before, after);
        assert!(String::from_utf8(after).unwrap().contains(&"11".repeat(32)));
    }

    #[test]
    fn test_record_json_roundtrip_without_hash() {
        let record: Record = serde_json::from_str(r#"{"id":3,"nonce":5,"body":"hi"}"#).unwrap();
        assert_eq!(record.identifier(), 3);
        assert_eq!(record.salt(), 5);
        assert_eq!(record.payload(), &Payload::Text("hi".into()));
        assert!(!record.is_hashed());
    }

    #[test]
    fn test_payload_untagged_forms() {
        let text: Payload = serde_json::from_str(r#""plain""#).unwrap();
        assert_eq!(text, Payload::Text("plain".into()));

        let structured: Payload = serde_json::from_str(r#"{"a":[1,2]}"#).unwrap();
        assert_eq!(structured, Payload::Structured(json!({ "a": [1, 2] })));
    }

    #[test]
    fn test_payload_structured_helper() {
        #[derive(Serialize)]
        struct Body {
            id: u32,
            body: &'static str,
        }

        let payload = Payload::structured(&Body { id: 1, body: "A" }).unwrap();
        assert_eq!(payload, Payload::Structured(json!({ "id": 1, "body": "A" })));
    }
}
