//! Property-based test generators using proptest.
//!
//! Provides strategies for generating random test data
//! that maintains required invariants.

use dotdb_codec::{Map, Value};
use proptest::prelude::*;

/// Strategy for generating a single key segment (no dots).
pub fn segment_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z][a-z0-9_]{0,7}").expect("Invalid regex")
}

/// Strategy for generating dot-path keys of one to four segments.
pub fn key_path_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(segment_strategy(), 1..=4).prop_map(|segments| segments.join("."))
}

/// Strategy for generating scalar values.
///
/// Numbers are multiples of 0.25 so they survive a text round trip
/// exactly.
pub fn leaf_value_strategy() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        (-1_000_000i32..1_000_000).prop_map(|n| Value::Number(f64::from(n) / 4.0)),
        prop::string::string_regex("[ -~]{0,16}")
            .expect("Invalid regex")
            .prop_map(Value::Text),
    ]
}

/// Strategy for generating arbitrary nested values.
pub fn value_strategy() -> impl Strategy<Value = Value> {
    leaf_value_strategy().prop_recursive(3, 32, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::Array),
            prop::collection::vec((segment_strategy(), inner), 0..4)
                .prop_map(|pairs| Value::Map(pairs.into_iter().collect())),
        ]
    })
}

/// Strategy for generating whole documents (a top-level mapping).
pub fn document_strategy() -> impl Strategy<Value = Map> {
    prop::collection::vec((segment_strategy(), value_strategy()), 0..6)
        .prop_map(|pairs| pairs.into_iter().collect())
}

/// A store operation for sequence testing.
#[derive(Debug, Clone)]
pub enum StoreOperation {
    /// Store a value at a key.
    Set {
        /// Dot-path key.
        key: String,
        /// Value to store.
        value: Value,
    },
    /// Remove a key.
    Delete {
        /// Dot-path key.
        key: String,
    },
    /// Read a key.
    Get {
        /// Dot-path key.
        key: String,
    },
}

/// Strategy for generating a single store operation.
///
/// Keys come from a small segment alphabet so operations collide often.
pub fn store_operation_strategy() -> impl Strategy<Value = StoreOperation> {
    let key = prop::collection::vec(prop::sample::select(vec!["a", "b", "c"]), 1..=3)
        .prop_map(|segments| segments.join("."));

    prop_oneof![
        3 => (key.clone(), value_strategy())
            .prop_map(|(key, value)| StoreOperation::Set { key, value }),
        1 => key.clone().prop_map(|key| StoreOperation::Delete { key }),
        2 => key.prop_map(|key| StoreOperation::Get { key }),
    ]
}

/// Strategy for generating operation sequences.
pub fn operation_sequence_strategy(
    min_ops: usize,
    max_ops: usize,
) -> impl Strategy<Value = Vec<StoreOperation>> {
    prop::collection::vec(store_operation_strategy(), min_ops..max_ops)
}

/// Configuration for property tests.
#[derive(Debug, Clone)]
pub struct PropTestConfig {
    /// Number of test cases to run.
    pub cases: u32,
    /// Maximum shrink iterations.
    pub max_shrink_iters: u32,
}

impl Default for PropTestConfig {
    fn default() -> Self {
        Self {
            cases: 256,
            max_shrink_iters: 1000,
        }
    }
}

impl PropTestConfig {
    /// Creates a configuration for quick tests.
    #[must_use]
    pub fn quick() -> Self {
        Self {
            cases: 32,
            max_shrink_iters: 100,
        }
    }

    /// Converts to proptest config.
    #[must_use]
    pub fn to_proptest_config(&self) -> ProptestConfig {
        ProptestConfig {
            cases: self.cases,
            max_shrink_iters: self.max_shrink_iters,
            ..ProptestConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dotdb_core::KeyPath;

    proptest! {
        #![proptest_config(PropTestConfig::quick().to_proptest_config())]

        #[test]
        fn segments_have_no_dots(segment in segment_strategy()) {
            prop_assert!(!segment.is_empty());
            prop_assert!(!segment.contains('.'));
        }

        #[test]
        fn keys_parse(key in key_path_strategy()) {
            let path = KeyPath::parse(&key).unwrap();
            prop_assert!((1..=4).contains(&path.depth()));
            prop_assert_eq!(path.to_string(), key);
        }

        #[test]
        fn leaf_numbers_are_finite(value in leaf_value_strategy()) {
            if let Value::Number(n) = value {
                prop_assert!(n.is_finite());
            }
        }
    }
}
