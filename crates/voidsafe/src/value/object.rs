//! Objects: values with named members

use indexmap::IndexMap;

use super::Value;

/// An instance with named fields.
///
/// Uses IndexMap to preserve field order for predictable iteration and
/// display.
#[derive(Debug, Clone, Default)]
pub struct Object {
    /// The object's type name (e.g., "User", "Response")
    pub type_name: String,

    /// The object's fields in insertion order
    pub fields: IndexMap<String, Value>,
}

impl Object {
    /// Create an object with no fields
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            fields: IndexMap::new(),
        }
    }

    /// Add a field (builder pattern)
    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    /// Get a field by name
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    /// Insert or replace a field, returning the previous value
    pub fn set(&mut self, name: impl Into<String>, value: Value) -> Option<Value> {
        self.fields.insert(name.into(), value)
    }

    /// Check whether a field exists
    pub fn has(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_preserves_order() {
        let obj = Object::new("Point")
            .with_field("y", 2i64)
            .with_field("x", 1i64);
        let names: Vec<_> = obj.fields.keys().cloned().collect();
        assert_eq!(names, vec!["y".to_string(), "x".to_string()]);
    }

    #[test]
    fn test_set_replaces() {
        let mut obj = Object::new("Point").with_field("x", 1i64);
        let previous = obj.set("x", Value::Int(5));
        assert_eq!(previous, Some(Value::Int(1)));
        assert_eq!(obj.get("x"), Some(&Value::Int(5)));
    }

    #[test]
    fn test_has() {
        let obj = Object::new("Empty");
        assert!(!obj.has("anything"));
    }
}
