//! The safe proxy: total member, element and call access over a [`Value`]

mod call;
mod element;
mod member;

pub(crate) use element::{read_element, write_element};
pub(crate) use member::{read_member, read_member_slot, write_member};

use std::any::Any;
use std::fmt;
use std::panic::{catch_unwind, AssertUnwindSafe};

use crate::error::AccessError;
use crate::extract::IntoTarget;
use crate::path::{Path, Step};
use crate::sentinel::{self, Sentinel};
use crate::value::Value;

/// Which kind of access produced a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AccessKind {
    /// `proxy.member(name)`
    Member,
    /// `proxy.element(key)`
    Element,
}

/// The key half of a write-back path.
#[derive(Debug, Clone, PartialEq)]
pub enum Accessor {
    /// Named member
    Member(String),
    /// Element key or index
    Element(Value),
}

impl Accessor {
    /// The access kind this accessor performs
    pub fn kind(&self) -> AccessKind {
        match self {
            Accessor::Member(_) => AccessKind::Member,
            Accessor::Element(_) => AccessKind::Element,
        }
    }

    /// Read the accessor from `container`, falling back to builtin methods
    /// for member names
    pub(crate) fn read(&self, container: &Value) -> Result<Value, AccessError> {
        shielded(self, || match self {
            Accessor::Member(name) => read_member(container, name),
            Accessor::Element(key) => read_element(container, key),
        })
    }

    /// Read only what is stored in `container` at the accessor. Builtin
    /// methods are not storage, so they never count as a present value.
    pub(crate) fn read_slot(&self, container: &Value) -> Result<Value, AccessError> {
        shielded(self, || match self {
            Accessor::Member(name) => read_member_slot(container, name),
            Accessor::Element(key) => read_element(container, key),
        })
    }

    /// Write `value` into `container` at the accessor
    pub(crate) fn write(&self, container: &Value, value: Value) -> Result<(), String> {
        catch_unwind(AssertUnwindSafe(|| match self {
            Accessor::Member(name) => write_member(container, name, value),
            Accessor::Element(key) => write_element(container, key, value),
        }))
        .unwrap_or_else(|payload| Err(format!("write panicked: {}", panic_message(&*payload))))
    }
}

/// Element keys render shallowly: containers show their type only, so a
/// self-containing key cannot recurse.
impl fmt::Display for Accessor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Accessor::Member(name) => write!(f, ".{}", name),
            Accessor::Element(key) => match key {
                Value::Tuple(_)
                | Value::List(_)
                | Value::Map(_)
                | Value::Object(_)
                | Value::Function(_)
                | Value::Host(_) => write!(f, "[<{}>]", crate::error::type_name(key)),
                scalar => write!(f, "[{:?}]", scalar),
            },
        }
    }
}

/// Run user-reachable code, turning a panic into [`AccessError::Panicked`].
fn shielded<F>(during: &dyn fmt::Display, f: F) -> Result<Value, AccessError>
where
    F: FnOnce() -> Result<Value, AccessError>,
{
    catch_unwind(AssertUnwindSafe(f)).unwrap_or_else(|payload| {
        Err(AccessError::Panicked {
            during: during.to_string(),
            message: panic_message(&*payload),
        })
    })
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    payload
        .downcast_ref::<&str>()
        .map(|s| s.to_string())
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "non-string panic payload".to_string())
}

/// Where a proxy's value was read from: the immediate container and the
/// member or element used to reach it.
#[derive(Debug, Clone)]
pub struct WriteBack {
    /// Container handle (shares storage with the caller's container)
    pub container: Value,
    /// Member name or element key
    pub accessor: Accessor,
}

impl WriteBack {
    /// The access kind recorded in this path
    pub fn kind(&self) -> AccessKind {
        self.accessor.kind()
    }
}

impl fmt::Display for WriteBack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}",
            crate::error::type_name(&self.container),
            self.accessor
        )
    }
}

/// What produced a proxy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    /// [`wrap`] or [`SafeProxy::new`]
    Root,
    /// A member or element access
    Access(AccessKind),
    /// A call
    Call,
}

impl Origin {
    pub(crate) fn describe(self) -> &'static str {
        match self {
            Origin::Root => "the root value",
            Origin::Access(_) => "an access on a void value",
            Origin::Call => "a call result",
        }
    }
}

/// A wrapper that makes every member access, element access and call on its
/// target total.
///
/// Each access returns a new proxy. When the access cannot be satisfied
/// (missing member, missing key, index out of range, wrong container,
/// non-callable target, a callee error, or a poisoned lock) the new proxy
/// wraps [`Value::Undefined`] instead of failing. Accesses on a sentinel
/// target are never attempted and also yield `Undefined`, so once a chain
/// goes undefined it stays undefined.
///
/// Member and element accesses on a non-void target remember the container
/// and key they read from, even when the read failed. That is what lets
/// [`coalesce_assign`](crate::coalesce_assign) create a missing member or
/// element afterwards.
///
/// # Example
///
/// ```
/// use voidsafe::{Object, Value, wrap};
///
/// let user = Value::object(Object::new("User").with_field("name", "ada"));
///
/// assert_eq!(wrap(&user).member("name").member("upper").call(&[]).value(), Value::from("ADA"));
/// assert!(wrap(&user).member("email").member("upper").call(&[]).value().is_undefined());
/// ```
#[derive(Clone)]
pub struct SafeProxy {
    target: Value,
    write_back: Option<WriteBack>,
    origin: Origin,
    failure: Option<AccessError>,
}

/// Wrap a value (or unwrap-and-rewrap a proxy) as the root of a chain.
pub fn wrap(value: impl IntoTarget) -> SafeProxy {
    SafeProxy::new(value)
}

impl SafeProxy {
    /// Create a root proxy. Passing a proxy unwraps it first, so a proxy
    /// never wraps another proxy.
    pub fn new(value: impl IntoTarget) -> Self {
        Self {
            target: value.into_target(),
            write_back: None,
            origin: Origin::Root,
            failure: None,
        }
    }

    fn resolved(target: Value, write_back: Option<WriteBack>, origin: Origin) -> Self {
        Self {
            target,
            write_back,
            origin,
            failure: None,
        }
    }

    fn absorbed(
        access: &dyn fmt::Display,
        error: AccessError,
        write_back: Option<WriteBack>,
        origin: Origin,
    ) -> Self {
        tracing::trace!(%access, %error, "access absorbed into Undefined");
        Self {
            target: Value::Undefined,
            write_back,
            origin,
            failure: Some(error),
        }
    }

    /// Access a named member.
    pub fn member(&self, name: &str) -> SafeProxy {
        self.access(Accessor::Member(name.to_string()))
    }

    /// Access an element by key or index.
    pub fn element(&self, key: impl Into<Value>) -> SafeProxy {
        self.access(Accessor::Element(key.into()))
    }

    fn access(&self, accessor: Accessor) -> SafeProxy {
        let origin = Origin::Access(accessor.kind());

        if let Some(sentinel) = Sentinel::of(&self.target) {
            let error = AccessError::VoidTarget {
                sentinel: sentinel.label(),
                access: Some(accessor.clone()),
            };
            return Self::absorbed(&accessor, error, None, origin);
        }

        let result = accessor.read(&self.target);
        let write_back = WriteBack {
            container: self.target.clone(),
            accessor,
        };
        match result {
            Ok(value) => Self::resolved(value, Some(write_back), origin),
            Err(error) => Self::absorbed(&write_back, error, Some(write_back.clone()), origin),
        }
    }

    /// Invoke the target with `args`.
    ///
    /// Call results never carry a write-back path.
    pub fn call(&self, args: &[Value]) -> SafeProxy {
        if let Some(sentinel) = Sentinel::of(&self.target) {
            let error = AccessError::VoidTarget {
                sentinel: sentinel.label(),
                access: None,
            };
            return Self::absorbed(&"call", error, None, Origin::Call);
        }

        match shielded(&"call", || call::invoke(&self.target, args)) {
            Ok(value) => Self::resolved(value, None, Origin::Call),
            Err(error) => Self::absorbed(&"call", error, None, Origin::Call),
        }
    }

    /// Apply every step of a parsed [`Path`] in order.
    pub fn follow(&self, path: &Path) -> SafeProxy {
        path.steps()
            .iter()
            .fold(self.clone(), |proxy, step| match step {
                Step::Member(name) => proxy.member(name),
                Step::Element(key) => proxy.element(key.clone()),
                Step::Call(args) => proxy.call(args),
            })
    }

    /// The wrapped value, exactly as held (sentinels included).
    pub fn target(&self) -> &Value {
        &self.target
    }

    /// Consume the proxy and return the wrapped value.
    pub fn into_target(self) -> Value {
        self.target
    }

    /// A copy of the wrapped value. Extraction never substitutes a fallback.
    pub fn value(&self) -> Value {
        self.target.clone()
    }

    /// The container and key this value was read from, if any.
    pub fn write_back(&self) -> Option<&WriteBack> {
        self.write_back.as_ref()
    }

    /// True iff the wrapped value is `None` or `Undefined`.
    pub fn is_void(&self) -> bool {
        sentinel::is_void(&self.target)
    }

    /// True iff the wrapped value is `None`.
    pub fn is_null(&self) -> bool {
        sentinel::is_null(&self.target)
    }

    /// True iff the wrapped value is `Undefined`.
    pub fn is_undefined(&self) -> bool {
        sentinel::is_undefined(&self.target)
    }

    /// What produced this proxy.
    pub fn origin(&self) -> Origin {
        self.origin
    }

    /// Why the access that produced this proxy was absorbed, if it was.
    pub fn failure(&self) -> Option<&AccessError> {
        self.failure.as_ref()
    }
}

impl fmt::Debug for SafeProxy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "VoidSafe({:?})", self.target)
    }
}

impl fmt::Display for SafeProxy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "VoidSafe({})", self.target)
    }
}

/// Compares the wrapped value with a plain value.
impl PartialEq<Value> for SafeProxy {
    fn eq(&self, other: &Value) -> bool {
        self.target == *other
    }
}
