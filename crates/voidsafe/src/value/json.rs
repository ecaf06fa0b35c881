//! Conversion between [`Value`] and `serde_json::Value`

use serde_json::{Map, Number};

use super::*;

/// JSON `null` becomes [`Value::Null`]; arrays become lists and objects
/// become maps, both freshly shared.
impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(i) => Value::Int(i),
                None => n.as_f64().map_or(Value::Null, Value::Float),
            },
            serde_json::Value::String(s) => Value::string(s),
            serde_json::Value::Array(items) => {
                Value::list(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(entries) => Value::map(entries),
        }
    }
}

impl Value {
    /// Convert to JSON.
    ///
    /// Returns `None` for values JSON cannot express: `Undefined`, functions,
    /// host values, non-finite floats, non-string map keys, and containers
    /// whose lock is poisoned.
    pub fn to_json(&self) -> Option<serde_json::Value> {
        Some(match self {
            Value::Undefined | Value::Function(_) | Value::Host(_) => return None,
            Value::Null => serde_json::Value::Null,
            Value::Bool(b) => serde_json::Value::Bool(*b),
            Value::Int(n) => serde_json::Value::Number((*n).into()),
            Value::Float(n) => serde_json::Value::Number(Number::from_f64(*n)?),
            Value::Char(c) => serde_json::Value::String(c.to_string()),
            Value::String(s) => serde_json::Value::String(s.as_ref().clone()),
            Value::Bytes(b) => serde_json::Value::Array(
                b.iter().map(|byte| serde_json::Value::from(*byte)).collect(),
            ),
            Value::Tuple(items) => seq_to_json(items)?,
            Value::List(items) => seq_to_json(&items.read().ok()?)?,
            Value::Map(map) => {
                let map = map.read().ok()?;
                let mut out = Map::with_capacity(map.len());
                for (key, value) in map.iter() {
                    let Key::String(name) = key else {
                        return None;
                    };
                    out.insert(name.as_ref().clone(), value.to_json()?);
                }
                serde_json::Value::Object(out)
            }
            Value::Object(obj) => {
                let obj = obj.read().ok()?;
                let mut out = Map::with_capacity(obj.fields.len());
                for (name, value) in &obj.fields {
                    out.insert(name.clone(), value.to_json()?);
                }
                serde_json::Value::Object(out)
            }
        })
    }
}

fn seq_to_json(items: &[Value]) -> Option<serde_json::Value> {
    items
        .iter()
        .map(Value::to_json)
        .collect::<Option<Vec<_>>>()
        .map(serde_json::Value::Array)
}
