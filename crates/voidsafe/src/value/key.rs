//! Map keys: the hashable subset of [`Value`]

use std::fmt;
use std::sync::Arc;

use super::Value;

/// A map key.
///
/// Only booleans, chars, integers, strings and byte strings can be keys.
/// Conversion from any other [`Value`] fails instead of panicking. `None`,
/// floats and tuples are not keys, so reading a map with one is absorbed as
/// `InvalidKey` and writing a map with one is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Key {
    /// Boolean key
    Bool(bool),
    /// Char key
    Char(char),
    /// Integer key
    Int(i64),
    /// String key
    String(Arc<String>),
    /// Byte string key
    Bytes(Arc<Vec<u8>>),
}

impl Key {
    /// Check if a value can be used as a key
    pub fn is_hashable(value: &Value) -> bool {
        Self::from_value(value).is_some()
    }

    /// Convert a value to a key, if it is hashable
    pub fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Bool(b) => Some(Key::Bool(*b)),
            Value::Char(c) => Some(Key::Char(*c)),
            Value::Int(n) => Some(Key::Int(*n)),
            Value::String(s) => Some(Key::String(Arc::clone(s))),
            Value::Bytes(b) => Some(Key::Bytes(Arc::clone(b))),
            _ => None,
        }
    }

    /// Convert the key back into a value
    pub fn to_value(&self) -> Value {
        match self {
            Key::Bool(b) => Value::Bool(*b),
            Key::Char(c) => Value::Char(*c),
            Key::Int(n) => Value::Int(*n),
            Key::String(s) => Value::String(Arc::clone(s)),
            Key::Bytes(b) => Value::Bytes(Arc::clone(b)),
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.to_value(), f)
    }
}

impl From<&str> for Key {
    fn from(s: &str) -> Self {
        Key::String(Arc::new(s.to_string()))
    }
}

impl From<String> for Key {
    fn from(s: String) -> Self {
        Key::String(Arc::new(s))
    }
}

impl From<i64> for Key {
    fn from(n: i64) -> Self {
        Key::Int(n)
    }
}

impl From<bool> for Key {
    fn from(b: bool) -> Self {
        Key::Bool(b)
    }
}

impl From<char> for Key {
    fn from(c: char) -> Self {
        Key::Char(c)
    }
}
