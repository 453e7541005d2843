//! Alternating key-value lists.

use serde::Serialize;
use serde_json::{Map, Value};

/// Field that receives a trailing key with no value.
pub const IGNORED_FIELD: &str = "ignored";
/// Field that receives `[key, value]` pairs whose key is not a string.
pub const INVALID_FIELD: &str = "invalid";

/// Convert anything serializable into a field value.
///
/// Used by the logging macros. Values that fail to serialize are rendered
/// as a descriptive string instead of aborting the log call.
pub fn value<T: Serialize + ?Sized>(v: &T) -> Value {
    serde_json::to_value(v).unwrap_or_else(|e| Value::String(format!("<unserializable: {e}>")))
}

/// Pair up `keys_and_values` into an ordered field map.
///
/// Malformed input is recorded inside the map, never raised: a dangling
/// key goes to [`IGNORED_FIELD`], pairs with non-string keys are collected
/// under [`INVALID_FIELD`].
pub(crate) fn sweeten(keys_and_values: &[Value]) -> Map<String, Value> {
    let mut fields = Map::with_capacity(keys_and_values.len() / 2);
    let mut invalid = Vec::new();

    for pair in keys_and_values.chunks(2) {
        match pair {
            [Value::String(key), value] => {
                let _ = fields.insert(key.clone(), value.clone());
            }
            [key, value] => invalid.push(Value::Array(vec![key.clone(), value.clone()])),
            [dangling] => {
                let _ = fields.insert(IGNORED_FIELD.into(), dangling.clone());
            }
            _ => {}
        }
    }

    if !invalid.is_empty() {
        let _ = fields.insert(INVALID_FIELD.into(), Value::Array(invalid));
    }
    fields
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
