//! Typed access to a decoded parameter block.

use crate::decode_parameters;
use indexmap::IndexMap;
use lunatic_common::error::LunaticError;
use lunatic_common::value::Value;
use lunatic_transform::{PlainMap, Structure, filter_to_plain_map, filter_values};
use serde::Serialize;
use tracing::warn;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Parameters {
    entries: PlainMap<String, Value>,
}

impl Parameters {
    pub fn decode<C>(raw: &C) -> Self
    where
        C: Structure<Key = String, Value = String>,
    {
        Self {
            entries: decode_parameters(raw),
        }
    }

    pub fn from_entries(entries: PlainMap<String, Value>) -> Self {
        Self { entries }
    }

    pub fn get(&self, name: &str) -> Result<&Value, LunaticError> {
        self.entries
            .get(name)
            .ok_or_else(|| LunaticError::missing_parameter(name))
    }

    pub fn number(&self, name: &str) -> Result<f64, LunaticError> {
        let value = self.get(name)?;
        value
            .as_f64()
            .ok_or_else(|| LunaticError::parameter_kind(name, "number", value))
    }

    /// A number with no fractional part that fits in an `i64`.
    pub fn integer(&self, name: &str) -> Result<i64, LunaticError> {
        let n = self.number(name)?;
        if n.is_finite() && n.fract() == 0.0 && n.abs() < i64::MAX as f64 {
            Ok(n as i64)
        } else {
            Err(LunaticError::ParameterError {
                name: name.to_string(),
                message: format!("expected integer, found {n}"),
            })
        }
    }

    pub fn boolean(&self, name: &str) -> Result<bool, LunaticError> {
        let value = self.get(name)?;
        value
            .as_bool()
            .ok_or_else(|| LunaticError::parameter_kind(name, "boolean", value))
    }

    pub fn string(&self, name: &str) -> Result<&str, LunaticError> {
        let value = self.get(name)?;
        value
            .as_str()
            .ok_or_else(|| LunaticError::parameter_kind(name, "string", value))
    }

    pub fn array(&self, name: &str) -> Result<&[Value], LunaticError> {
        let value = self.get(name)?;
        value
            .as_array()
            .ok_or_else(|| LunaticError::parameter_kind(name, "array", value))
    }

    pub fn object(&self, name: &str) -> Result<&IndexMap<String, Value>, LunaticError> {
        let value = self.get(name)?;
        value
            .as_object()
            .ok_or_else(|| LunaticError::parameter_kind(name, "object", value))
    }

    pub fn number_or(&self, name: &str, default: f64) -> f64 {
        self.or_default(name, default, Self::number)
    }

    pub fn boolean_or(&self, name: &str, default: bool) -> bool {
        self.or_default(name, default, Self::boolean)
    }

    fn or_default<T>(
        &self,
        name: &str,
        default: T,
        read: impl Fn(&Self, &str) -> Result<T, LunaticError>,
    ) -> T {
        if !self.entries.contains_key(name) {
            return default;
        }
        read(self, name).unwrap_or_else(|e| {
            warn!(error = %e, "falling back to default");
            default
        })
    }

    /// The entries whose value satisfies `predicate`.
    pub fn filter(&self, predicate: impl FnMut(&Value) -> bool) -> Parameters {
        Parameters {
            entries: filter_values(predicate, &self.entries),
        }
    }

    /// Filters the fields of an optional object parameter. `None` when the
    /// parameter is unset or not an object.
    pub fn filter_block(
        &self,
        name: &str,
        predicate: impl FnMut(&Value) -> bool,
    ) -> Option<PlainMap<String, Value>> {
        filter_to_plain_map(predicate, self.entries.get(name).and_then(Value::as_object))
    }

    pub fn iter(&self) -> indexmap::map::Iter<'_, String, Value> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn into_entries(self) -> PlainMap<String, Value> {
        self.entries
    }
}
