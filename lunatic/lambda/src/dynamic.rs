//! Helpers over dynamic [`Value`]s.

use lunatic_common::value::Value;

/// An accessor that reads `key` from object values. Missing fields and
/// non-object inputs give `None`.
pub fn pluck(key: impl Into<String>) -> impl Fn(&Value) -> Option<Value> {
    let key = key.into();
    move |value| value.get(&key).cloned()
}

/// Whether `value` holds nothing: an empty string, array or object.
/// Null is not considered empty, and neither are scalars or functions.
pub fn is_empty(value: &Value) -> bool {
    match value {
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
        Value::Null | Value::Bool(_) | Value::Number(_) | Value::Native(_) => false,
    }
}
