//! Builtin methods reachable through member access
//!
//! A method is resolved by name against the receiver's type and returned as
//! a [`NativeFn`] bound to the receiver. Container methods read the
//! container when they are called, not when they are bound.

use crate::error::{type_name, AccessError};
use crate::value::{Key, MapData, NativeFn, Value};

type Method = fn(&Value, &[Value]) -> Result<Value, String>;

/// Bind method `name` to `receiver`.
///
/// # Errors
///
/// Returns `NoSuchMember` if the receiver's type has no such method.
pub(crate) fn bind(receiver: &Value, name: &str) -> Result<Value, AccessError> {
    let (arity, method) =
        lookup(receiver, name).ok_or_else(|| AccessError::no_such_member(name, type_name(receiver)))?;

    let bound = receiver.clone();
    Ok(Value::function(NativeFn::new(
        format!("{}.{}", type_name(receiver), name),
        arity,
        move |args| method(&bound, args),
    )))
}

fn lookup(receiver: &Value, name: &str) -> Option<(usize, Method)> {
    match receiver {
        Value::String(_) => string_method(name),
        Value::List(_) | Value::Tuple(_) => sequence_method(name),
        Value::Map(_) => map_method(name),
        Value::Object(_) => match name {
            "type_name" => Some((0, object_type_name as Method)),
            _ => None,
        },
        _ => None,
    }
}

// ═══════════════════════════════════════════════════════════════════════
// String Methods
// ═══════════════════════════════════════════════════════════════════════

fn string_method(name: &str) -> Option<(usize, Method)> {
    Some(match name {
        "len" => (0, str_len as Method),
        "is_empty" => (0, str_is_empty as Method),
        "upper" => (0, str_upper as Method),
        "lower" => (0, str_lower as Method),
        "trim" => (0, str_trim as Method),
        "contains" => (1, str_contains as Method),
        "starts_with" => (1, str_starts_with as Method),
        "ends_with" => (1, str_ends_with as Method),
        "split" => (1, str_split as Method),
        _ => return None,
    })
}

fn with_str(receiver: &Value, f: impl FnOnce(&str) -> Value) -> Result<Value, String> {
    receiver
        .as_str()
        .map(f)
        .ok_or_else(|| format!("expected string, got {}", type_name(receiver)))
}

fn str_arg<'a>(args: &'a [Value], method: &str) -> Result<&'a str, String> {
    args.first()
        .and_then(Value::as_str)
        .ok_or_else(|| format!("{} expects a string argument", method))
}

fn str_len(receiver: &Value, _args: &[Value]) -> Result<Value, String> {
    with_str(receiver, |s| Value::from(s.chars().count()))
}

fn str_is_empty(receiver: &Value, _args: &[Value]) -> Result<Value, String> {
    with_str(receiver, |s| Value::Bool(s.is_empty()))
}

fn str_upper(receiver: &Value, _args: &[Value]) -> Result<Value, String> {
    with_str(receiver, |s| Value::string(s.to_uppercase()))
}

fn str_lower(receiver: &Value, _args: &[Value]) -> Result<Value, String> {
    with_str(receiver, |s| Value::string(s.to_lowercase()))
}

fn str_trim(receiver: &Value, _args: &[Value]) -> Result<Value, String> {
    with_str(receiver, |s| Value::string(s.trim()))
}

fn str_contains(receiver: &Value, args: &[Value]) -> Result<Value, String> {
    match args.first() {
        Some(Value::String(needle)) => {
            with_str(receiver, |s| Value::Bool(s.contains(needle.as_str())))
        }
        Some(Value::Char(c)) => with_str(receiver, |s| Value::Bool(s.contains(*c))),
        _ => Err("contains expects a string or char argument".to_string()),
    }
}

fn str_starts_with(receiver: &Value, args: &[Value]) -> Result<Value, String> {
    let prefix = str_arg(args, "starts_with")?;
    with_str(receiver, |s| Value::Bool(s.starts_with(prefix)))
}

fn str_ends_with(receiver: &Value, args: &[Value]) -> Result<Value, String> {
    let suffix = str_arg(args, "ends_with")?;
    with_str(receiver, |s| Value::Bool(s.ends_with(suffix)))
}

fn str_split(receiver: &Value, args: &[Value]) -> Result<Value, String> {
    let sep = str_arg(args, "split")?;
    with_str(receiver, |s| Value::list(s.split(sep).map(Value::from).collect()))
}

// ═══════════════════════════════════════════════════════════════════════
// Sequence Methods (list and tuple)
// ═══════════════════════════════════════════════════════════════════════

fn sequence_method(name: &str) -> Option<(usize, Method)> {
    Some(match name {
        "len" => (0, seq_len as Method),
        "is_empty" => (0, seq_is_empty as Method),
        "first" => (0, seq_first as Method),
        "last" => (0, seq_last as Method),
        "contains" => (1, seq_contains as Method),
        _ => return None,
    })
}

fn items(receiver: &Value) -> Result<Vec<Value>, String> {
    receiver
        .to_vec()
        .ok_or_else(|| format!("cannot read {}", type_name(receiver)))
}

fn seq_len(receiver: &Value, _args: &[Value]) -> Result<Value, String> {
    items(receiver).map(|items| Value::from(items.len()))
}

fn seq_is_empty(receiver: &Value, _args: &[Value]) -> Result<Value, String> {
    items(receiver).map(|items| Value::Bool(items.is_empty()))
}

fn seq_first(receiver: &Value, _args: &[Value]) -> Result<Value, String> {
    items(receiver)?
        .into_iter()
        .next()
        .ok_or_else(|| "first on empty sequence".to_string())
}

fn seq_last(receiver: &Value, _args: &[Value]) -> Result<Value, String> {
    items(receiver)?
        .pop()
        .ok_or_else(|| "last on empty sequence".to_string())
}

fn seq_contains(receiver: &Value, args: &[Value]) -> Result<Value, String> {
    let needle = args.first().ok_or("contains expects one argument")?;
    items(receiver).map(|items| Value::Bool(items.iter().any(|item| item == needle)))
}

// ═══════════════════════════════════════════════════════════════════════
// Map Methods
// ═══════════════════════════════════════════════════════════════════════

fn map_method(name: &str) -> Option<(usize, Method)> {
    Some(match name {
        "len" => (0, map_len as Method),
        "is_empty" => (0, map_is_empty as Method),
        "keys" => (0, map_keys as Method),
        "values" => (0, map_values as Method),
        "get" => (1, map_get as Method),
        "contains_key" => (1, map_contains_key as Method),
        _ => return None,
    })
}

fn with_map(receiver: &Value, f: impl FnOnce(&MapData) -> Value) -> Result<Value, String> {
    match receiver {
        Value::Map(map) => map
            .read()
            .map(|map| f(&map))
            .map_err(|_| "map lock is poisoned".to_string()),
        other => Err(format!("expected map, got {}", type_name(other))),
    }
}

fn map_len(receiver: &Value, _args: &[Value]) -> Result<Value, String> {
    with_map(receiver, |map| Value::from(map.len()))
}

fn map_is_empty(receiver: &Value, _args: &[Value]) -> Result<Value, String> {
    with_map(receiver, |map| Value::Bool(map.is_empty()))
}

fn map_keys(receiver: &Value, _args: &[Value]) -> Result<Value, String> {
    with_map(receiver, |map| Value::list(map.keys().map(Key::to_value).collect()))
}

fn map_values(receiver: &Value, _args: &[Value]) -> Result<Value, String> {
    with_map(receiver, |map| Value::list(map.values().cloned().collect()))
}

/// Missing keys yield `None` rather than failing.
fn map_get(receiver: &Value, args: &[Value]) -> Result<Value, String> {
    let key = args.first().and_then(Key::from_value);
    with_map(receiver, |map| {
        key.and_then(|key| map.get(&key).cloned())
            .unwrap_or(Value::Null)
    })
}

fn map_contains_key(receiver: &Value, args: &[Value]) -> Result<Value, String> {
    let key = args.first().and_then(Key::from_value);
    with_map(receiver, |map| {
        Value::Bool(key.is_some_and(|key| map.contains_key(&key)))
    })
}

// ═══════════════════════════════════════════════════════════════════════
// Object Methods
// ═══════════════════════════════════════════════════════════════════════

fn object_type_name(receiver: &Value, _args: &[Value]) -> Result<Value, String> {
    Ok(Value::string(type_name(receiver)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Object;

    fn call(receiver: &Value, name: &str, args: &[Value]) -> Value {
        match bind(receiver, name).unwrap() {
            Value::Function(f) => (f.func)(args).unwrap(),
            other => panic!("Expected Function, got {:?}", other),
        }
    }

    #[test]
    fn test_string_methods() {
        let s = Value::from("  Cats  ");
        assert_eq!(call(&s, "trim", &[]), Value::from("Cats"));
        assert_eq!(call(&Value::from("cat"), "upper", &[]), Value::from("CAT"));
        assert_eq!(call(&Value::from("CAT"), "lower", &[]), Value::from("cat"));
        assert_eq!(call(&Value::from("héllo"), "len", &[]), Value::Int(5));
        assert_eq!(
            call(&Value::from("a,b"), "contains", &[Value::Char(',')]),
            Value::Bool(true)
        );
        assert_eq!(
            call(&Value::from("prefix"), "starts_with", &[Value::from("pre")]),
            Value::Bool(true)
        );
    }

    #[test]
    fn test_split_returns_list() {
        let parts = call(&Value::from("a,b,c"), "split", &[Value::from(",")]);
        assert_eq!(
            parts.to_vec(),
            Some(vec![Value::from("a"), Value::from("b"), Value::from("c")])
        );
    }

    #[test]
    fn test_sequence_methods() {
        let list = Value::list(vec![Value::Int(1), Value::Int(2)]);
        assert_eq!(call(&list, "len", &[]), Value::Int(2));
        assert_eq!(call(&list, "last", &[]), Value::Int(2));
        assert_eq!(call(&list, "contains", &[Value::Int(1)]), Value::Bool(true));
    }

    #[test]
    fn test_first_on_empty_fails() {
        let list = Value::list(vec![]);
        match bind(&list, "first").unwrap() {
            Value::Function(f) => assert!((f.func)(&[]).is_err()),
            _ => panic!("Expected Function"),
        }
    }

    #[test]
    fn test_map_get_missing_is_null() {
        let map = Value::map([("a", 1i64)]);
        assert_eq!(call(&map, "get", &[Value::from("a")]), Value::Int(1));
        assert_eq!(call(&map, "get", &[Value::from("b")]), Value::Null);
        assert_eq!(call(&map, "contains_key", &[Value::from("b")]), Value::Bool(false));
    }

    #[test]
    fn test_container_methods_read_at_call_time() {
        let list = Value::list(vec![]);
        let len = bind(&list, "len").unwrap();
        if let Value::List(items) = &list {
            items.write().unwrap().push(Value::Null);
        }
        match len {
            Value::Function(f) => assert_eq!((f.func)(&[]).unwrap(), Value::Int(1)),
            _ => panic!("Expected Function"),
        }
    }

    #[test]
    fn test_object_type_name() {
        let obj = Value::object(Object::new("User"));
        assert_eq!(call(&obj, "type_name", &[]), Value::from("User"));
    }

    #[test]
    fn test_unknown_method() {
        assert!(matches!(
            bind(&Value::Int(3), "upper"),
            Err(AccessError::NoSuchMember { .. })
        ));
    }
}
