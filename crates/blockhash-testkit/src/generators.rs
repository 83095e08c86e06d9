//! Proptest generators for property-based testing.

use proptest::prelude::*;
use serde_json::{Map, Value};

use blockhash_core::{Payload, Record, RecordBuilder};

/// Generate a text payload.
pub fn text_payload() -> impl Strategy<Value = Payload> {
    any::<String>().prop_map(Payload::Text)
}

/// Generate a JSON value without floats, up to a small depth.
pub fn json_value() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(Value::from),
        "[a-zA-Z0-9 ]{0,16}".prop_map(Value::String),
    ];

    leaf.prop_recursive(3, 32, 6, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..6).prop_map(Value::Array),
            prop::collection::btree_map("[a-z]{1,8}", inner, 0..6)
                .prop_map(|m| Value::Object(m.into_iter().collect::<Map<String, Value>>())),
        ]
    })
}

/// Generate a structured payload.
pub fn structured_payload() -> impl Strategy<Value = Payload> {
    json_value().prop_map(Payload::Structured)
}

/// Generate any payload.
pub fn payload() -> impl Strategy<Value = Payload> {
    prop_oneof![text_payload(), structured_payload()]
}

/// Parameters for generating a record.
#[derive(Debug, Clone)]
pub struct RecordParams {
    pub identifier: u64,
    pub salt: u64,
    pub payload: Payload,
}

impl Arbitrary for RecordParams {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        (any::<u64>(), any::<u64>(), payload())
            .prop_map(|(identifier, salt, payload)| RecordParams {
                identifier,
                salt,
                payload,
            })
            .boxed()
    }
}

/// Build an unhashed record from parameters.
pub fn record_from_params(params: &RecordParams) -> Record {
    RecordBuilder::new(params.payload.clone())
        .identifier(params.identifier)
        .salt(params.salt)
        .build()
        .unwrap_or_else(|e| panic!("generated payload must serialize: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use blockhash_core::{is_digest_hex, Hasher};

    proptest! {
        #[test]
        fn test_digest_deterministic(params: RecordParams) {
            let hasher = Hasher::default();
            let r1 = hasher.compute_hash(record_from_params(&params)).wait().unwrap();
            let r2 = hasher.compute_hash(record_from_params(&params)).wait().unwrap();

            prop_assert_eq!(r1.digest(), r2.digest());
        }

        #[test]
        fn test_digest_format(params: RecordParams) {
            let record = Hasher::default()
                .compute_hash(record_from_params(&params))
                .wait()
                .unwrap();

            prop_assert!(is_digest_hex(record.digest()));
        }

        #[test]
        fn test_digest_written_once(params: RecordParams) {
            let record = record_from_params(&params);
            prop_assert_eq!(record.digest(), "");

            let hashed = Hasher::default().compute_hash(record).wait().unwrap();
            prop_assert!(hashed.is_hashed());
            prop_assert_eq!(hashed.identifier(), params.identifier);
            prop_assert_eq!(hashed.salt(), params.salt);
            prop_assert_eq!(hashed.payload(), &params.payload);
        }

        #[test]
        fn test_digest_sensitive_to_payload(
            identifier in any::<u64>(),
            p1 in payload(),
            p2 in payload(),
        ) {
            // Text("x") and Structured(String("x")) share one canonical form.
            prop_assume!(serde_json::to_value(&p1).unwrap() != serde_json::to_value(&p2).unwrap());

            let hasher = Hasher::default();
            let r1 = RecordBuilder::new(p1).identifier(identifier).build().unwrap();
            let r2 = RecordBuilder::new(p2).identifier(identifier).build().unwrap();

            prop_assert_ne!(
                hasher.digest_record(&r1).unwrap(),
                hasher.digest_record(&r2).unwrap()
            );
        }
    }
}
