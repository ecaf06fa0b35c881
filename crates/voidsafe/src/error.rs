//! Error types for void-safe navigation

use thiserror::Error;

use crate::proxy::Accessor;
use crate::value::Value;

/// Why an access could not be satisfied.
///
/// These never escape a [`SafeProxy`](crate::SafeProxy) chain as errors: the
/// proxy converts them into [`Value::Undefined`] and keeps the reason
/// available through [`SafeProxy::failure`](crate::SafeProxy::failure).
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AccessError {
    /// The target was a sentinel, so it was not probed
    #[error("cannot {} on {sentinel}", attempt(.access))]
    VoidTarget {
        /// Sentinel that was the target (`None` or `Undefined`)
        sentinel: &'static str,
        /// The attempted member or element access, `None` for a call
        access: Option<Accessor>,
    },

    /// Member not found on the target
    #[error("no member `{member}` on {type_name}")]
    NoSuchMember {
        /// Requested member name
        member: String,
        /// Type of the target
        type_name: String,
    },

    /// Key not present in a map
    #[error("key {key} not found")]
    NoSuchKey {
        /// Rendered key
        key: String,
    },

    /// Index outside of a sequence
    #[error("index {index} out of bounds for length {len}")]
    IndexOutOfBounds {
        /// Requested index (may be negative)
        index: i64,
        /// Sequence length
        len: usize,
    },

    /// Key value has the wrong type for the container
    #[error("{container} cannot be indexed by {key_type}")]
    InvalidKey {
        /// Container type
        container: String,
        /// Key type
        key_type: String,
    },

    /// Target does not support element access
    #[error("cannot index into {type_name}")]
    WrongContainer {
        /// Type of the target
        type_name: String,
    },

    /// Target is not callable
    #[error("expected function, found `{type_name}`")]
    NotCallable {
        /// Type of the target
        type_name: String,
    },

    /// Wrong number of arguments
    #[error("{name} expects {expected} argument(s), got {got}")]
    ArityMismatch {
        /// Function name
        name: String,
        /// Expected argument count
        expected: usize,
        /// Supplied argument count
        got: usize,
    },

    /// The callee returned an error
    #[error("call to {name} failed: {message}")]
    CallFailed {
        /// Function name
        name: String,
        /// Error reported by the callee
        message: String,
    },

    /// A shared container's lock was poisoned
    #[error("{type_name} is poisoned")]
    Poisoned {
        /// Container type
        type_name: String,
    },

    /// User code (a native function or a host value) panicked
    #[error("{during} panicked: {message}")]
    Panicked {
        /// The access or call that was running
        during: String,
        /// Panic payload, if it was a string
        message: String,
    },

    /// Failure reported by a host value
    #[error("{0}")]
    Host(String),
}

impl AccessError {
    /// Build a [`AccessError::NoSuchMember`]
    pub fn no_such_member(member: impl Into<String>, type_name: impl Into<String>) -> Self {
        AccessError::NoSuchMember {
            member: member.into(),
            type_name: type_name.into(),
        }
    }
}

fn attempt(access: &Option<Accessor>) -> String {
    match access {
        Some(accessor) => format!("access `{}`", accessor),
        None => "call".to_string(),
    }
}

/// Errors surfaced to the caller.
#[derive(Error, Debug)]
pub enum VoidSafeError {
    /// A coalescing assignment was applied to a proxy that does not know
    /// where its value came from (a root proxy, a call result, or an access
    /// on a sentinel)
    #[error("coalescing assignment requires a member or element access, got {origin}")]
    MissingWriteBack {
        /// What the proxy was produced by
        origin: &'static str,
    },

    /// The container refused the write
    #[error("cannot write {target}: {reason}")]
    WriteRejected {
        /// Rendered write target
        target: String,
        /// Reason given by the container
        reason: String,
    },

    /// Path expression uses a construct that is not a navigation step
    #[error("invalid path: {0}")]
    InvalidPath(String),

    /// Path expression nests deeper than allowed
    #[error("path nests deeper than {max} levels")]
    PathTooDeep {
        /// Configured maximum
        max: usize,
    },

    /// Path expression is not valid syntax
    #[error("path syntax error: {0}")]
    Syntax(#[from] syn::Error),
}

/// Result type alias for voidsafe operations
pub type Result<T> = std::result::Result<T, VoidSafeError>;

/// Get a human-readable type name for a value
pub fn type_name(value: &Value) -> String {
    match value {
        Value::Null => "None".to_string(),
        Value::Undefined => "Undefined".to_string(),
        Value::Bool(_) => "bool".to_string(),
        Value::Char(_) => "char".to_string(),
        Value::Int(_) => "int".to_string(),
        Value::Float(_) => "float".to_string(),
        Value::String(_) => "string".to_string(),
        Value::Bytes(_) => "bytes".to_string(),
        Value::Tuple(_) => "tuple".to_string(),
        Value::List(_) => "list".to_string(),
        Value::Map(_) => "map".to_string(),
        Value::Object(obj) => match obj.read() {
            Ok(obj) => obj.type_name.clone(),
            Err(_) => "object".to_string(),
        },
        Value::Function(_) => "function".to_string(),
        Value::Host(host) => host.type_name(),
    }
}
