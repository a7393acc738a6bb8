//! Argument pairs to structured fields.

use levelbridge_ports::{FieldSet, UNKNOWN_VALUE};
use serde_json::Value;

/// Build a [`FieldSet`] from a flat `[key, value, key, value, ...]` sequence.
///
/// An odd trailing key gets [`UNKNOWN_VALUE`] as its value. Non-string keys
/// are keyed by their JSON text (`42` becomes `"42"`). Later duplicates win.
#[must_use]
pub fn field_set_from_args(args: &[Value]) -> FieldSet {
    let mut fields = FieldSet::new();
    for pair in args.chunks(2) {
        let (key, value) = match pair {
            [key, value] => (key, value.clone()),
            [key] => (key, Value::String(UNKNOWN_VALUE.to_string())),
            _ => continue,
        };
        fields.insert(field_key(key), value);
    }
    fields
}

fn field_key(key: &Value) -> Box<str> {
    match key {
        Value::String(text) => text.as_str().into(),
        other => other.to_string().into_boxed_str(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::json;

    fn expected(pairs: &[(&str, Value)]) -> FieldSet {
        pairs
            .iter()
            .map(|(key, value)| ((*key).into(), value.clone()))
            .collect()
    }

    #[test]
    fn even_sequence_maps_pairs() {
        let fields = field_set_from_args(&[json!("k1"), json!("v1"), json!("k2"), json!(2)]);
        assert_eq!(fields, expected(&[("k1", json!("v1")), ("k2", json!(2))]));
    }

    #[test]
    fn odd_sequence_pads_trailing_key() {
        let fields = field_set_from_args(&[json!("k1"), json!("v1"), json!("k2")]);
        assert_eq!(
            fields,
            expected(&[("k1", json!("v1")), ("k2", json!(UNKNOWN_VALUE))])
        );
    }

    #[test]
    fn empty_sequence_yields_no_fields() {
        assert!(field_set_from_args(&[]).is_empty());
    }

    #[test]
    fn non_string_keys_use_json_text() {
        let fields = field_set_from_args(&[
            json!(42),
            json!("answer"),
            json!(true),
            json!(1),
            Value::Null,
            json!("nothing"),
        ]);
        assert_eq!(
            fields,
            expected(&[
                ("42", json!("answer")),
                ("true", json!(1)),
                ("null", json!("nothing")),
            ])
        );
    }

    #[test]
    fn later_duplicates_overwrite() {
        let fields = field_set_from_args(&[json!("k"), json!(1), json!("k"), json!(2)]);
        assert_eq!(fields, expected(&[("k", json!(2))]));
    }

    proptest! {
        #[test]
        fn distinct_even_pairs_are_preserved(
            pairs in proptest::collection::btree_map("[a-z]{1,8}", any::<i64>(), 0..16)
        ) {
            let args: Vec<Value> = pairs
                .iter()
                .flat_map(|(key, value)| [json!(key), json!(value)])
                .collect();
            let fields = field_set_from_args(&args);
            prop_assert_eq!(fields.len(), pairs.len());
            for (key, value) in &pairs {
                let expected = json!(value);
                prop_assert_eq!(fields.get(key.as_str()), Some(&expected));
            }
        }

        #[test]
        fn odd_sequences_always_hold_the_sentinel(
            keys in proptest::collection::vec("[a-z]{1,8}", 1..16)
        ) {
            let mut args: Vec<Value> = keys.iter().map(|key| json!(key)).collect();
            if args.len() % 2 == 0 {
                args.push(json!("trailing"));
            }
            let fields = field_set_from_args(&args);
            let trailing = match args.last() {
                Some(Value::String(key)) => key.clone(),
                _ => String::new(),
            };
            let sentinel = json!(UNKNOWN_VALUE);
            prop_assert_eq!(fields.get(trailing.as_str()), Some(&sentinel));
        }
    }
}
