//! Call dispatch

use crate::error::{type_name, AccessError};
use crate::value::{NativeFn, Value};

/// Invoke a non-sentinel target.
///
/// # Errors
///
/// Returns `NotCallable` if the target is not a function or host value.
/// Returns `ArityMismatch` if the argument count doesn't match.
/// Returns `CallFailed` if the function reports an error.
pub(crate) fn invoke(target: &Value, args: &[Value]) -> Result<Value, AccessError> {
    match target {
        Value::Function(f) => call_native(f, args),
        Value::Host(host) => host.call(args),
        other => Err(AccessError::NotCallable {
            type_name: type_name(other),
        }),
    }
}

fn call_native(func: &NativeFn, args: &[Value]) -> Result<Value, AccessError> {
    if let Some(expected) = func.arity.filter(|_| !func.accepts(args.len())) {
        return Err(AccessError::ArityMismatch {
            name: func.name.clone(),
            expected,
            got: args.len(),
        });
    }

    (func.func)(args).map_err(|message| AccessError::CallFailed {
        name: func.name.clone(),
        message,
    })
}
