//! Canonical JSON encoding shared by responses, the CLI and tests.

use std::collections::BTreeMap;
use std::iter::FromIterator;

use ::serde::{Deserialize, Serialize};
use efield_core::errors::{ErrorInfo, FieldError};
use serde_json::{Map, Value};

fn serde_error(code: &str, err: impl ToString) -> FieldError {
    FieldError::Serde(ErrorInfo::new(code, err.to_string()))
}

fn canonicalize(value: Value) -> Value {
    match value {
        Value::Object(map) => {
            let ordered = BTreeMap::from_iter(map.into_iter().map(|(k, v)| (k, canonicalize(v))));
            Value::Object(Map::from_iter(ordered))
        }
        Value::Array(values) => Value::Array(values.into_iter().map(canonicalize).collect()),
        other => other,
    }
}

/// Serializes a value into canonical JSON bytes with deterministic key
/// ordering.
pub fn to_canonical_json_bytes<T: Serialize>(value: &T) -> Result<Vec<u8>, FieldError> {
    let value = serde_json::to_value(value).map_err(|err| serde_error("json-encode", err))?;
    let canonical = canonicalize(value);
    let mut bytes = Vec::new();
    serde_json::to_writer(&mut bytes, &canonical).map_err(|err| serde_error("json-write", err))?;
    Ok(bytes)
}

/// Serializes a value into a canonical JSON string.
pub fn to_canonical_json_string<T: Serialize>(value: &T) -> Result<String, FieldError> {
    let bytes = to_canonical_json_bytes(value)?;
    String::from_utf8(bytes).map_err(|err| serde_error("json-utf8", err))
}

/// Restores a value from JSON bytes.
pub fn from_json_slice<T: for<'de> Deserialize<'de>>(data: &[u8]) -> Result<T, FieldError> {
    serde_json::from_slice(data).map_err(|err| serde_error("json-read", err))
}
