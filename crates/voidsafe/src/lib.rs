//! # VoidSafe
//!
//! Void-safe navigation over dynamic values.
//!
//! Wrap any [`Value`] in a [`SafeProxy`] and chain member access, element
//! access and calls on it. No step of the chain can fail: whatever cannot be
//! resolved becomes [`Value::Undefined`], and every later step on it stays
//! `Undefined`. At the end of the chain, either extract the value, substitute
//! a fallback, or write a fallback back into the original container.
//!
//! ## Sentinels
//!
//! - [`Value::Null`]: explicitly empty (`None`)
//! - [`Value::Undefined`]: requested but never defined
//!
//! Both are "void" ([`is_void`]). Classification is by variant, never by
//! equality with user data.
//!
//! ## Coalescing
//!
//! - [`coalesce`] returns a fallback when the value is missing under a
//!   [`Coalesce`] kind (`IfNdef`, `IfNone`, `IfVoid`).
//! - [`coalesce_assign`] stores a fallback into the container the value was
//!   read from, only if the stored value is missing.
//!
//! ## Example
//!
//! ```
//! use voidsafe::{coalesce, coalesce_assign, wrap, Coalesce, Value};
//!
//! let container = Value::map([("item", Value::Null)]);
//!
//! assert_eq!(coalesce(Coalesce::IfVoid, wrap(&container).element("item"), "A"), Value::from("A"));
//!
//! coalesce_assign(Coalesce::IfVoid, &wrap(&container).element("item"), "B")?;
//! coalesce_assign(Coalesce::IfVoid, &wrap(&container).element("item"), "C")?;
//! assert_eq!(wrap(&container).element("item").value(), Value::from("B"));
//! # Ok::<(), voidsafe::VoidSafeError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod coalesce;
pub mod context;
pub mod error;
pub mod extract;
mod methods;
pub mod path;
pub mod proxy;
pub mod sentinel;
pub mod value;

// Re-export main types
pub use coalesce::{
    coalesce, coalesce_assign, coalesce_assign_with, coalesce_with, AssignOutcome, Coalesce,
};
pub use context::ParseContext;
pub use error::{AccessError, Result, VoidSafeError};
pub use extract::{extract_value, IntoTarget};
pub use path::{Path, Step};
pub use proxy::{wrap, AccessKind, Accessor, Origin, SafeProxy, WriteBack};
pub use sentinel::{is_null, is_undefined, is_void, Sentinel, SentinelSet, SENTINELS};
pub use value::{Dynamic, Key, MapData, NativeFn, NativeFnPtr, Object, Shared, Value};

/// The undefined sentinel
pub const UNDEFINED: Value = Value::Undefined;

/// The null sentinel
pub const NULL: Value = Value::Null;

/// VoidSafe version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_exists() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_sentinel_constants() {
        assert!(is_undefined(&UNDEFINED));
        assert!(is_null(&NULL));
    }
}
