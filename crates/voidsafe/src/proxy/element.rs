//! Element reads and writes

use crate::error::{type_name, AccessError};
use crate::value::{Key, Value};

/// Resolve a possibly negative index against a sequence length.
///
/// # Errors
///
/// Returns `InvalidKey` if `key` is not an integer.
/// Returns `IndexOutOfBounds` if the index is out of range.
fn resolve_index(key: &Value, len: usize, container: &Value) -> Result<usize, AccessError> {
    let index = key.as_i64().ok_or_else(|| AccessError::InvalidKey {
        container: type_name(container),
        key_type: type_name(key),
    })?;

    let out_of_bounds = || AccessError::IndexOutOfBounds { index, len };
    let len_i = i64::try_from(len).map_err(|_| out_of_bounds())?;
    let resolved = if index < 0 { len_i + index } else { index };
    if resolved < 0 || resolved >= len_i {
        return Err(out_of_bounds());
    }
    usize::try_from(resolved).map_err(|_| out_of_bounds())
}

fn poisoned(container: &Value) -> AccessError {
    AccessError::Poisoned {
        type_name: type_name(container),
    }
}

fn map_key(key: &Value, container: &Value) -> Result<Key, AccessError> {
    Key::from_value(key).ok_or_else(|| AccessError::InvalidKey {
        container: type_name(container),
        key_type: type_name(key),
    })
}

/// Read element `key` from a non-sentinel target.
///
/// Supports lists, tuples, strings (by char), bytes, maps and host values.
///
/// # Errors
///
/// Returns `IndexOutOfBounds` if the index is out of range.
/// Returns `NoSuchKey` if the key doesn't exist in a map.
/// Returns `InvalidKey` if the key has the wrong type for the container.
/// Returns `WrongContainer` if the target doesn't support indexing.
pub(crate) fn read_element(target: &Value, key: &Value) -> Result<Value, AccessError> {
    match target {
        Value::List(items) => {
            let items = items.read().map_err(|_| poisoned(target))?;
            let idx = resolve_index(key, items.len(), target)?;
            Ok(items[idx].clone())
        }

        Value::Tuple(items) => {
            let idx = resolve_index(key, items.len(), target)?;
            Ok(items[idx].clone())
        }

        // String indexing (returns char)
        Value::String(s) => {
            let len = s.chars().count();
            let idx = resolve_index(key, len, target)?;
            s.chars()
                .nth(idx)
                .map(Value::Char)
                .ok_or(AccessError::IndexOutOfBounds {
                    index: idx as i64,
                    len,
                })
        }

        Value::Bytes(bytes) => {
            let idx = resolve_index(key, bytes.len(), target)?;
            Ok(Value::Int(i64::from(bytes[idx])))
        }

        Value::Map(map) => {
            let key = map_key(key, target)?;
            let map = map.read().map_err(|_| poisoned(target))?;
            map.get(&key)
                .cloned()
                .ok_or_else(|| AccessError::NoSuchKey {
                    key: key.to_string(),
                })
        }

        Value::Host(host) => host.element(key),

        _ => Err(AccessError::WrongContainer {
            type_name: type_name(target),
        }),
    }
}

/// Create or replace element `key` in `container`.
///
/// Maps insert or replace. Lists replace an in-range index (negative
/// allowed) or append when the index equals the length.
pub(crate) fn write_element(container: &Value, key: &Value, value: Value) -> Result<(), String> {
    match container {
        Value::Map(map) => {
            let key = map_key(key, container).map_err(|e| e.to_string())?;
            let mut map = map
                .write()
                .map_err(|_| "map lock is poisoned".to_string())?;
            map.insert(key, value);
            Ok(())
        }

        Value::List(items) => {
            let mut items = items
                .write()
                .map_err(|_| "list lock is poisoned".to_string())?;
            if key.as_i64() == i64::try_from(items.len()).ok() {
                items.push(value);
                return Ok(());
            }
            let idx = resolve_index(key, items.len(), container).map_err(|e| e.to_string())?;
            items[idx] = value;
            Ok(())
        }

        Value::Host(host) => host.set_element(key, value),

        other => Err(format!("{} does not support item assignment", type_name(other))),
    }
}
