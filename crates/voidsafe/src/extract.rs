//! Terminal extraction: turning a chain back into a plain value

use crate::proxy::SafeProxy;
use crate::value::Value;

/// Anything that resolves to a raw [`Value`]: plain values, anything
/// convertible into one, and proxies (which yield their target).
pub trait IntoTarget {
    /// Resolve to the raw value.
    fn into_target(self) -> Value;
}

impl<T: Into<Value>> IntoTarget for T {
    fn into_target(self) -> Value {
        self.into()
    }
}

impl IntoTarget for &Value {
    fn into_target(self) -> Value {
        self.clone()
    }
}

impl IntoTarget for SafeProxy {
    fn into_target(self) -> Value {
        SafeProxy::into_target(self)
    }
}

impl IntoTarget for &SafeProxy {
    fn into_target(self) -> Value {
        self.value()
    }
}

/// Return the value a chain resolved to.
///
/// Proxies yield their target exactly, sentinels included; anything else is
/// returned unchanged. No fallback is ever substituted.
///
/// ```
/// use voidsafe::{extract_value, wrap, Value};
///
/// let data = Value::map([("pi", 3.14)]);
/// assert_eq!(extract_value(wrap(&data).element("pi")), Value::Float(3.14));
/// assert_eq!(extract_value(wrap(&data).element("tau")), Value::Undefined);
/// assert_eq!(extract_value("plain"), Value::from("plain"));
/// ```
pub fn extract_value(x: impl IntoTarget) -> Value {
    x.into_target()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::proxy::wrap;

    #[test]
    fn test_extract_plain_value() {
        assert_eq!(extract_value(Value::Int(1)), Value::Int(1));
        assert_eq!(extract_value(&Value::Null), Value::Null);
    }

    #[test]
    fn test_extract_keeps_sentinels() {
        assert_eq!(extract_value(wrap(Value::Null)), Value::Null);
        assert_eq!(extract_value(&wrap(Value::Null).member("x")), Value::Undefined);
    }
}
