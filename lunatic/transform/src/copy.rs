//! Deep copies and read-only views.

use lunatic_common::error::LunaticError;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::ops::Deref;
use tracing::debug;

/// Copies `value` through a JSON round trip, dropping every tie to the original.
///
/// Fails with `SerializationError` if anything inside cannot be represented,
/// such as a native function value. Non-finite numbers come back as null,
/// the same way the host's JSON encoder treats them.
pub fn deep_clone<T>(value: &T) -> Result<T, LunaticError>
where
    T: Serialize + DeserializeOwned,
{
    let json = serde_json::to_value(value).map_err(|e| {
        debug!(error = %e, "deep clone: value is not serializable");
        LunaticError::SerializationError {
            message: e.to_string(),
        }
    })?;
    serde_json::from_value(json).map_err(|e| LunaticError::SerializationError {
        message: format!("copy does not read back: {e}"),
    })
}

/// A value that can no longer be modified.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Frozen<T>(T);

impl<T> Deref for Frozen<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.0
    }
}

impl<T> AsRef<T> for Frozen<T> {
    fn as_ref(&self) -> &T {
        &self.0
    }
}

pub fn freeze<T>(value: T) -> Frozen<T> {
    Frozen(value)
}

/// Deep copy, then freeze.
pub fn freeze_clone<T>(value: &T) -> Result<Frozen<T>, LunaticError>
where
    T: Serialize + DeserializeOwned,
{
    deep_clone(value).map(freeze)
}
