//! Dynamic value representation navigated by [`SafeProxy`](crate::SafeProxy)

mod callable;
mod display;
mod host;
mod impls;
#[cfg(feature = "json")]
mod json;
mod key;
mod object;

pub use callable::{NativeFn, NativeFnPtr};
pub use host::Dynamic;
pub use key::Key;
pub use object::Object;

use std::sync::{Arc, RwLock};

use indexmap::IndexMap;

/// A container shared between every handle that refers to it.
///
/// Cloning a [`Value`] that holds a `Shared` clones the handle, so writes made
/// through one handle are visible through all of them.
pub type Shared<T> = Arc<RwLock<T>>;

/// Insertion-ordered map storage.
pub type MapData = IndexMap<Key, Value>;

/// Runtime value that a [`SafeProxy`](crate::SafeProxy) can wrap.
///
/// Values are organized into three tiers:
/// - Tier 1: Sentinels and inline primitives
/// - Tier 2: Immutable heap values and shared mutable containers
/// - Tier 3: Callables and host-provided values
#[derive(Clone)]
pub enum Value {
    // ═══════════════════════════════════════════════════════════════════
    // Tier 1: Sentinels and Inline Primitives
    // ═══════════════════════════════════════════════════════════════════
    /// Explicit "no value"
    Null,

    /// A member, element or method that was requested but could not be
    /// resolved
    Undefined,

    /// Boolean: `true` or `false`
    Bool(bool),

    /// Unicode scalar value
    Char(char),

    /// 64-bit signed integer
    Int(i64),

    /// 64-bit floating point
    Float(f64),

    // ═══════════════════════════════════════════════════════════════════
    // Tier 2: Heap Values and Shared Containers
    // ═══════════════════════════════════════════════════════════════════
    /// Immutable string
    String(Arc<String>),

    /// Immutable byte string
    Bytes(Arc<Vec<u8>>),

    /// Immutable fixed-size sequence
    Tuple(Arc<Vec<Value>>),

    /// Growable sequence
    List(Shared<Vec<Value>>),

    /// Insertion-ordered keyed container
    Map(Shared<MapData>),

    /// Instance with named members
    Object(Shared<Object>),

    // ═══════════════════════════════════════════════════════════════════
    // Tier 3: Callables and Host Values
    // ═══════════════════════════════════════════════════════════════════
    /// Native function
    Function(NativeFn),

    /// User type exposing its own members, elements and calls
    Host(Arc<dyn Dynamic>),
}

pub(crate) fn shared<T>(inner: T) -> Shared<T> {
    Arc::new(RwLock::new(inner))
}
