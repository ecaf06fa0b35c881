//! Native callable values

use std::sync::Arc;

use super::Value;

/// Type alias for native function pointers to reduce complexity
pub type NativeFnPtr = Arc<dyn Fn(&[Value]) -> Result<Value, String> + Send + Sync>;

/// A native function that can be stored in a [`Value`] and invoked through
/// [`SafeProxy::call`](crate::SafeProxy::call).
#[derive(Clone)]
pub struct NativeFn {
    /// Function name (for display/debugging)
    pub name: String,

    /// Number of accepted arguments, `None` for variadic
    pub arity: Option<usize>,

    /// The actual function pointer
    pub func: NativeFnPtr,
}

impl NativeFn {
    /// Create a function with a fixed arity.
    pub fn new<F>(name: impl Into<String>, arity: usize, func: F) -> Self
    where
        F: Fn(&[Value]) -> Result<Value, String> + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            arity: Some(arity),
            func: Arc::new(func),
        }
    }

    /// Create a function accepting any number of arguments.
    pub fn variadic<F>(name: impl Into<String>, func: F) -> Self
    where
        F: Fn(&[Value]) -> Result<Value, String> + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            arity: None,
            func: Arc::new(func),
        }
    }

    /// Whether `count` arguments satisfy this function's arity.
    pub fn accepts(&self, count: usize) -> bool {
        self.arity.map_or(true, |arity| arity == count)
    }
}

impl std::fmt::Debug for NativeFn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "NativeFn({})", self.name)
    }
}
