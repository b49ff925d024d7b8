//! Response-envelope unwrapping.
//!
//! The backend nests payloads inconsistently: `{data:{data:[..]}}` for paged
//! lists, `{data:[..]}` for plain lists, `{data:{..}}` for single records and
//! occasionally the bare value. These helpers peel `data` layers until the
//! payload is reached so call sites never guess the depth.

#[cfg(test)]
#[path = "envelope_test.rs"]
mod envelope_test;

use serde::de::DeserializeOwned;
use serde_json::Value;

/// Deepest `data` nesting observed in practice, plus headroom.
const MAX_DEPTH: usize = 4;

/// Extract a list payload. `null` at the payload position is an empty list.
///
/// # Errors
///
/// Returns the `serde_json` error when the payload is not an array of `T`.
pub fn unwrap_list<T: DeserializeOwned>(body: Value) -> Result<Vec<T>, serde_json::Error> {
    let mut current = body;
    for _ in 0..MAX_DEPTH {
        match current {
            Value::Array(_) => break,
            Value::Object(mut map) if map.contains_key("data") => {
                current = map.remove("data").unwrap_or(Value::Null);
            }
            other => {
                current = other;
                break;
            }
        }
    }
    if current.is_null() {
        return Ok(Vec::new());
    }
    serde_json::from_value(current)
}

/// Extract a single-record payload.
///
/// # Errors
///
/// Returns the `serde_json` error when the payload does not decode as `T`.
pub fn unwrap_item<T: DeserializeOwned>(body: Value) -> Result<T, serde_json::Error> {
    let mut current = body;
    for _ in 0..MAX_DEPTH {
        let inner_is_record = current
            .get("data")
            .is_some_and(Value::is_object);
        if !inner_is_record {
            break;
        }
        current = current
            .as_object_mut()
            .and_then(|map| map.remove("data"))
            .unwrap_or(Value::Null);
    }
    serde_json::from_value(current)
}

/// Human-readable error message carried by an error body, if any.
pub fn error_message(body: &Value) -> Option<String> {
    ["message", "error"]
        .into_iter()
        .find_map(|key| body.get(key).and_then(Value::as_str))
        .or_else(|| body.get("data").and_then(|d| d.get("message")).and_then(Value::as_str))
        .map(str::trim)
        .filter(|m| !m.is_empty())
        .map(str::to_owned)
}
