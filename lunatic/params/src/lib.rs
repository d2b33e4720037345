//! Decoding of string-valued plugin parameters into typed values.
//!
//! The host hands every parameter over as text. Each one is read, in order,
//! as a number, as a boolean literal, or as structured JSON (object, array or
//! null, decoded recursively); text that fits none of these stays a string.

pub mod number;
pub mod parameters;

pub use number::parse_number;
pub use parameters::Parameters;

use indexmap::IndexMap;
use lunatic_common::error::LunaticError;
use lunatic_common::span::Span;
use lunatic_common::value::Value;
use lunatic_transform::{PlainMap, Structure, transform_values, transform_values_to_plain_map};
use std::hash::Hash;
use tracing::trace;

/// Coerces a single parameter string.
pub fn coerce_str(raw: &str) -> Value {
    if let Some(n) = parse_number(raw) {
        return Value::Number(n);
    }
    if let Some(b) = parse_bool_literal(raw) {
        return Value::Bool(b);
    }
    if looks_structured(raw) {
        match serde_json::from_str::<Value>(raw) {
            Ok(parsed @ (Value::Object(_) | Value::Array(_) | Value::Null)) => {
                return coerce_value(&parsed);
            }
            Ok(_) => {}
            Err(e) => {
                trace!(error = %e, "parameter is not structured JSON, keeping text");
            }
        }
    }
    Value::String(raw.to_string())
}

/// Coerces every string reachable inside `value`.
pub fn coerce_value(value: &Value) -> Value {
    match value {
        Value::String(s) => coerce_str(s),
        Value::Array(items) => Value::Array(items.iter().map(coerce_value).collect()),
        Value::Object(map) => Value::Object(transform_values(coerce_value, map)),
        other => other.clone(),
    }
}

/// Decodes a whole parameter block, keeping its keys and their order.
pub fn decode_parameters<C>(raw: &C) -> PlainMap<C::Key, Value>
where
    C: Structure<Value = String>,
    C::Key: Hash + Eq,
{
    transform_values_to_plain_map(|text: &String| coerce_str(text), raw)
}

/// Reads a JSON object of raw parameters. String values are kept verbatim;
/// any other value is carried as its JSON text, the way the host stores
/// nested structures.
pub fn raw_parameters_from_json(text: &str) -> Result<PlainMap<String, String>, LunaticError> {
    let root: serde_json::Value = serde_json::from_str(text).map_err(|e| LunaticError::InputError {
        message: e.to_string(),
        span: Some(Span::from_line_column(text, e.line(), e.column())),
    })?;
    let serde_json::Value::Object(fields) = root else {
        return Err(LunaticError::InputError {
            message: "parameters must be a JSON object".into(),
            span: Some(Span::new(0, text.len())),
        });
    };
    let mut raw = IndexMap::with_capacity(fields.len());
    for (key, value) in fields {
        let text = match value {
            serde_json::Value::String(s) => s,
            other => other.to_string(),
        };
        raw.insert(key, text);
    }
    Ok(raw)
}

fn parse_bool_literal(raw: &str) -> Option<bool> {
    let s = raw.trim();
    if s.eq_ignore_ascii_case("true") {
        Some(true)
    } else if s.eq_ignore_ascii_case("false") {
        Some(false)
    } else {
        None
    }
}

fn looks_structured(raw: &str) -> bool {
    let s = raw.trim_start();
    s.starts_with('{') || s.starts_with('[') || s.trim_end() == "null"
}
