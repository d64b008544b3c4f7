//! Full-width → half-width normalization of arbitrary JSON trees.

use serde_json::{Map, Value};
use unicode_normalization::UnicodeNormalization;

/// NFKC-normalize a single string (全角 → 半角 for Latin letters, digits, punctuation).
pub fn zen_to_han(text: &str) -> String {
    text.nfkc().collect()
}

/// Walk the tree and normalize every string leaf.
/// Object keys and their order, array order, and non-string scalars are untouched.
pub fn normalize(value: Value) -> Value {
    match value {
        Value::Object(map) => Value::Object(
            map.into_iter()
                .map(|(k, v)| (k, normalize(v)))
                .collect::<Map<String, Value>>(),
        ),
        Value::Array(items) => Value::Array(items.into_iter().map(normalize).collect()),
        Value::String(s) => Value::String(zen_to_han(&s)),
        other => other,
    }
}
