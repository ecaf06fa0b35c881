//! Host values: user types that resolve their own members, elements and calls

use std::fmt;

use crate::error::AccessError;

use super::Value;

/// Interface for user types that want to be navigable through a
/// [`SafeProxy`](crate::SafeProxy).
///
/// Every method has a default that reports the operation as unsupported, so
/// an implementor only overrides what its type actually offers. Errors from
/// the read methods are absorbed into [`Value::Undefined`] by the proxy;
/// errors from the write methods surface from
/// [`coalesce_assign`](crate::coalesce_assign).
///
/// Writes take `&self`: host values are shared behind an `Arc`, so an
/// implementor that accepts writes uses interior mutability.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use voidsafe::{AccessError, Dynamic, Value, wrap};
///
/// #[derive(Debug)]
/// struct Celsius(f64);
///
/// impl Dynamic for Celsius {
///     fn type_name(&self) -> String {
///         "Celsius".to_string()
///     }
///
///     fn member(&self, name: &str) -> Result<Value, AccessError> {
///         match name {
///             "fahrenheit" => Ok(Value::Float(self.0 * 9.0 / 5.0 + 32.0)),
///             _ => Err(AccessError::no_such_member(name, "Celsius")),
///         }
///     }
/// }
///
/// let temp = Value::host(Arc::new(Celsius(100.0)));
/// assert_eq!(wrap(temp.clone()).member("fahrenheit").value(), Value::Float(212.0));
/// assert!(wrap(temp).member("kelvin").value().is_undefined());
/// ```
pub trait Dynamic: fmt::Debug + Send + Sync {
    /// Name used in diagnostics
    fn type_name(&self) -> String;

    /// Read a named member.
    fn member(&self, name: &str) -> Result<Value, AccessError> {
        Err(AccessError::no_such_member(name, self.type_name()))
    }

    /// Read an element by key or index.
    fn element(&self, _key: &Value) -> Result<Value, AccessError> {
        Err(AccessError::WrongContainer {
            type_name: self.type_name(),
        })
    }

    /// Invoke the value itself.
    fn call(&self, _args: &[Value]) -> Result<Value, AccessError> {
        Err(AccessError::NotCallable {
            type_name: self.type_name(),
        })
    }

    /// Create or replace a named member.
    fn set_member(&self, _name: &str, _value: Value) -> Result<(), String> {
        Err(format!("{} does not accept member writes", self.type_name()))
    }

    /// Create or replace an element.
    fn set_element(&self, _key: &Value, _value: Value) -> Result<(), String> {
        Err(format!("{} does not accept element writes", self.type_name()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct Opaque;

    impl Dynamic for Opaque {
        fn type_name(&self) -> String {
            "Opaque".to_string()
        }
    }

    #[test]
    fn test_defaults_report_unsupported() {
        let host = Opaque;
        assert!(matches!(
            host.member("x"),
            Err(AccessError::NoSuchMember { .. })
        ));
        assert!(matches!(
            host.element(&Value::Int(0)),
            Err(AccessError::WrongContainer { .. })
        ));
        assert!(matches!(host.call(&[]), Err(AccessError::NotCallable { .. })));
        assert!(host.set_member("x", Value::Null).is_err());
        assert!(host.set_element(&Value::Int(0), Value::Null).is_err());
    }
}
