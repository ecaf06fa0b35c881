//! Coalescing operators: value-or-fallback and fallback assignment
//!
//! Three kinds decide when a value counts as missing:
//!
//! | kind                 | triggers on         |
//! |----------------------|---------------------|
//! | [`Coalesce::IfNdef`] | `Undefined`         |
//! | [`Coalesce::IfNone`] | `None`              |
//! | [`Coalesce::IfVoid`] | `None`, `Undefined` |
//!
//! The read form returns the fallback when triggered and the raw value
//! otherwise. The write form stores the fallback into the container a proxy
//! was read from, and never overwrites a value that does not trigger.

use crate::error::{Result, VoidSafeError};
use crate::extract::IntoTarget;
use crate::proxy::SafeProxy;
use crate::sentinel::{is_null, is_undefined, is_void};
use crate::value::Value;

/// When a coalescing operator substitutes its fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Coalesce {
    /// Only when the value is `Undefined`; `None` is kept
    IfNdef,
    /// Only when the value is `None`; `Undefined` is kept
    IfNone,
    /// When the value is either sentinel
    IfVoid,
}

impl Coalesce {
    /// Whether `value` is missing under this kind.
    pub fn triggers(self, value: &Value) -> bool {
        match self {
            Coalesce::IfNdef => is_undefined(value),
            Coalesce::IfNone => is_null(value),
            Coalesce::IfVoid => is_void(value),
        }
    }

    fn name(self) -> &'static str {
        match self {
            Coalesce::IfNdef => "ifndef",
            Coalesce::IfNone => "ifnone",
            Coalesce::IfVoid => "ifvoid",
        }
    }
}

impl std::fmt::Display for Coalesce {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Result of a coalescing assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssignOutcome {
    /// The fallback was written
    Assigned,
    /// The existing value did not trigger; nothing was written
    Unchanged,
}

/// Return `fallback` if `left` is missing under `kind`, else `left`'s raw
/// value unchanged.
///
/// ```
/// use voidsafe::{coalesce, wrap, Coalesce, Value};
///
/// let data = Value::map([("item", Value::Null)]);
///
/// // `None` is present, not undefined
/// assert_eq!(coalesce(Coalesce::IfNdef, wrap(&data).element("item"), "fb"), Value::Null);
/// assert_eq!(coalesce(Coalesce::IfVoid, wrap(&data).element("item"), "fb"), Value::from("fb"));
/// assert_eq!(coalesce(Coalesce::IfVoid, wrap(&data).element("gone"), "fb"), Value::from("fb"));
/// ```
pub fn coalesce(kind: Coalesce, left: impl IntoTarget, fallback: impl Into<Value>) -> Value {
    let fallback = fallback.into();
    coalesce_with(kind, left, move || fallback)
}

/// Like [`coalesce`], but the fallback is only produced when needed.
pub fn coalesce_with<F>(kind: Coalesce, left: impl IntoTarget, fallback: F) -> Value
where
    F: FnOnce() -> Value,
{
    let value = left.into_target();
    if kind.triggers(&value) {
        fallback()
    } else {
        value
    }
}

/// Write `fallback` to where `proxy`'s value was read from, if the value
/// currently stored there is missing under `kind`.
///
/// The current value is re-read from the container, not taken from the
/// proxy, so applying the same assignment twice writes at most once. Only
/// stored fields and keys count: a builtin method sharing the name of an
/// absent field does not stop the field from being created.
///
/// ```
/// use voidsafe::{coalesce_assign, wrap, AssignOutcome, Coalesce, Value};
///
/// let data = Value::map([("item", Value::Null)]);
/// let item = wrap(&data).element("item");
///
/// assert_eq!(coalesce_assign(Coalesce::IfVoid, &item, "B")?, AssignOutcome::Assigned);
/// assert_eq!(coalesce_assign(Coalesce::IfVoid, &item, "C")?, AssignOutcome::Unchanged);
/// assert_eq!(wrap(&data).element("item").value(), Value::from("B"));
/// # Ok::<(), voidsafe::VoidSafeError>(())
/// ```
///
/// # Errors
///
/// Returns `MissingWriteBack` if `proxy` was not produced by a member or
/// element access on a non-void value.
/// Returns `WriteRejected` if the container refuses the write.
pub fn coalesce_assign(
    kind: Coalesce,
    proxy: &SafeProxy,
    fallback: impl Into<Value>,
) -> Result<AssignOutcome> {
    let fallback = fallback.into();
    coalesce_assign_with(kind, proxy, move || fallback)
}

/// Like [`coalesce_assign`], but the fallback is only produced when it is
/// written.
///
/// # Errors
///
/// See [`coalesce_assign`].
pub fn coalesce_assign_with<F>(kind: Coalesce, proxy: &SafeProxy, fallback: F) -> Result<AssignOutcome>
where
    F: FnOnce() -> Value,
{
    let path = proxy.write_back().ok_or(VoidSafeError::MissingWriteBack {
        origin: proxy.origin().describe(),
    })?;

    let current = path
        .accessor
        .read_slot(&path.container)
        .unwrap_or(Value::Undefined);

    if !kind.triggers(&current) {
        tracing::debug!(%kind, target = %path, "coalescing assignment kept existing value");
        return Ok(AssignOutcome::Unchanged);
    }

    path.accessor
        .write(&path.container, fallback())
        .map_err(|reason| VoidSafeError::WriteRejected {
            target: path.to_string(),
            reason,
        })?;

    tracing::debug!(%kind, target = %path, "coalescing assignment wrote fallback");
    Ok(AssignOutcome::Assigned)
}

// ═══════════════════════════════════════════════════════════════════════
// Fluent Forms
// ═══════════════════════════════════════════════════════════════════════

impl SafeProxy {
    /// [`coalesce`] with this proxy as the left operand.
    pub fn coalesce(&self, kind: Coalesce, fallback: impl Into<Value>) -> Value {
        coalesce(kind, self, fallback)
    }

    /// [`coalesce_with`] with this proxy as the left operand.
    pub fn coalesce_with<F>(&self, kind: Coalesce, fallback: F) -> Value
    where
        F: FnOnce() -> Value,
    {
        coalesce_with(kind, self, fallback)
    }

    /// [`coalesce_assign`] through this proxy's write-back path.
    ///
    /// # Errors
    ///
    /// See [`coalesce_assign`].
    pub fn assign(&self, kind: Coalesce, fallback: impl Into<Value>) -> Result<AssignOutcome> {
        coalesce_assign(kind, self, fallback)
    }

    /// [`coalesce_assign_with`] through this proxy's write-back path.
    ///
    /// # Errors
    ///
    /// See [`coalesce_assign`].
    pub fn assign_with<F>(&self, kind: Coalesce, fallback: F) -> Result<AssignOutcome>
    where
        F: FnOnce() -> Value,
    {
        coalesce_assign_with(kind, self, fallback)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::proxy::wrap;
    use crate::value::Object;
    use std::cell::Cell;

    #[test]
    fn test_triggers_table() {
        let cases = [
            (Coalesce::IfNdef, Value::Undefined, true),
            (Coalesce::IfNdef, Value::Null, false),
            (Coalesce::IfNone, Value::Null, true),
            (Coalesce::IfNone, Value::Undefined, false),
            (Coalesce::IfVoid, Value::Null, true),
            (Coalesce::IfVoid, Value::Undefined, true),
            (Coalesce::IfVoid, Value::Int(0), false),
        ];
        for (kind, value, expected) in cases {
            assert_eq!(kind.triggers(&value), expected, "{} on {:?}", kind, value);
        }
    }

    #[test]
    fn test_plain_left_operand() {
        assert_eq!(coalesce(Coalesce::IfNone, Value::Null, 5i64), Value::Int(5));
        assert_eq!(coalesce(Coalesce::IfNone, "x", 5i64), Value::from("x"));
    }

    #[test]
    fn test_lazy_fallback_not_evaluated_when_present() {
        let calls = Cell::new(0);
        let produce = || {
            calls.set(calls.get() + 1);
            Value::from("fb")
        };
        assert_eq!(coalesce_with(Coalesce::IfVoid, 1i64, produce), Value::Int(1));
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_assign_creates_object_member() {
        let obj = Value::object(Object::new("Empty"));
        let slot = wrap(&obj).member("created");
        assert_eq!(slot.assign(Coalesce::IfNdef, 1i64).unwrap(), AssignOutcome::Assigned);
        assert_eq!(wrap(&obj).member("created").value(), Value::Int(1));
    }

    #[test]
    fn test_assign_never_overwrites_present_value() {
        let data = Value::map([("n", 7i64)]);
        let slot = wrap(&data).element("n");
        assert_eq!(
            slot.assign(Coalesce::IfVoid, "other type").unwrap(),
            AssignOutcome::Unchanged
        );
        assert_eq!(wrap(&data).element("n").value(), Value::Int(7));
    }

    #[test]
    fn test_assign_ifnone_skips_undefined() {
        let data = Value::map(Vec::<(&str, Value)>::new());
        let slot = wrap(&data).element("k");
        assert_eq!(slot.assign(Coalesce::IfNone, 1i64).unwrap(), AssignOutcome::Unchanged);
        assert!(wrap(&data).element("k").value().is_undefined());
    }

    #[test]
    fn test_assign_without_path_is_usage_error() {
        let root = wrap(Value::Null);
        let err = root.assign(Coalesce::IfVoid, 1i64).unwrap_err();
        assert!(matches!(
            err,
            VoidSafeError::MissingWriteBack {
                origin: "the root value"
            }
        ));
    }

    #[test]
    fn test_assign_creates_field_named_like_a_method() {
        let obj = Value::object(Object::new("User"));
        let slot = wrap(&obj).member("type_name");
        assert!(slot.target().is_callable());
        assert_eq!(slot.assign(Coalesce::IfNdef, "custom").unwrap(), AssignOutcome::Assigned);
        assert_eq!(wrap(&obj).member("type_name").value(), Value::from("custom"));
        assert_eq!(slot.assign(Coalesce::IfNdef, "again").unwrap(), AssignOutcome::Unchanged);
    }

    #[test]
    fn test_assign_rejected_by_tuple() {
        let data = Value::tuple(vec![Value::Null]);
        let err = wrap(&data)
            .element(0i64)
            .assign(Coalesce::IfVoid, 1i64)
            .unwrap_err();
        assert!(matches!(err, VoidSafeError::WriteRejected { .. }));
    }
}
