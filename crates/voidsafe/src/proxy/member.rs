//! Member reads and writes

use crate::error::{type_name, AccessError};
use crate::methods;
use crate::value::{Key, Value};

/// Read member `name` from a non-sentinel target.
///
/// Object fields and string-keyed map entries shadow builtin methods of the
/// same name; every other value only offers its builtin methods.
///
/// # Errors
///
/// Returns `NoSuchMember` if neither a field nor a method matches.
/// Returns `Poisoned` if the object's lock is poisoned.
pub(crate) fn read_member(target: &Value, name: &str) -> Result<Value, AccessError> {
    match target {
        Value::Object(obj) => {
            let field = {
                let obj = obj.read().map_err(|_| AccessError::Poisoned {
                    type_name: "object".to_string(),
                })?;
                obj.get(name).cloned()
            };
            match field {
                Some(value) => Ok(value),
                None => methods::bind(target, name),
            }
        }

        Value::Map(map) => {
            let entry = {
                let map = map.read().map_err(|_| AccessError::Poisoned {
                    type_name: "map".to_string(),
                })?;
                map.get(&Key::from(name)).cloned()
            };
            match entry {
                Some(value) => Ok(value),
                None => methods::bind(target, name),
            }
        }

        Value::Host(host) => host.member(name),

        _ => methods::bind(target, name),
    }
}

/// Read what is stored under member `name`, ignoring builtin methods.
///
/// An object field or map key that is absent reads as `NoSuchMember` even
/// when a method of the same name exists, so a fallback assignment still
/// creates it. Hosts and other values read as in [`read_member`].
pub(crate) fn read_member_slot(target: &Value, name: &str) -> Result<Value, AccessError> {
    let stored = match target {
        Value::Object(obj) => obj
            .read()
            .map_err(|_| AccessError::Poisoned {
                type_name: "object".to_string(),
            })?
            .get(name)
            .cloned(),
        Value::Map(map) => map
            .read()
            .map_err(|_| AccessError::Poisoned {
                type_name: "map".to_string(),
            })?
            .get(&Key::from(name))
            .cloned(),
        _ => return read_member(target, name),
    };
    stored.ok_or_else(|| AccessError::no_such_member(name, type_name(target)))
}

/// Create or replace member `name` on `container`.
pub(crate) fn write_member(container: &Value, name: &str, value: Value) -> Result<(), String> {
    match container {
        Value::Object(obj) => {
            let mut obj = obj
                .write()
                .map_err(|_| "object lock is poisoned".to_string())?;
            obj.set(name, value);
            Ok(())
        }

        Value::Map(map) => {
            let mut map = map
                .write()
                .map_err(|_| "map lock is poisoned".to_string())?;
            map.insert(Key::from(name), value);
            Ok(())
        }

        Value::Host(host) => host.set_member(name, value),

        other => Err(format!("{} does not accept members", type_name(other))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Object;

    #[test]
    fn test_field_access() {
        let obj = Value::object(Object::new("Point").with_field("x", 10i64));
        assert_eq!(read_member(&obj, "x"), Ok(Value::Int(10)));
    }

    #[test]
    fn test_undefined_field() {
        let obj = Value::object(Object::new("Point"));
        assert!(matches!(
            read_member(&obj, "z"),
            Err(AccessError::NoSuchMember { .. })
        ));
    }

    #[test]
    fn test_field_shadows_method() {
        let obj = Value::object(Object::new("Named").with_field("type_name", "custom"));
        assert_eq!(read_member(&obj, "type_name"), Ok(Value::from("custom")));
    }

    #[test]
    fn test_method_on_string() {
        let member = read_member(&Value::from("abc"), "len").unwrap();
        assert!(member.is_callable());
    }

    #[test]
    fn test_write_creates_field() {
        let obj = Value::object(Object::new("Empty"));
        write_member(&obj, "created", Value::Int(1)).unwrap();
        assert_eq!(read_member(&obj, "created"), Ok(Value::Int(1)));
    }

    #[test]
    fn test_map_string_keys_are_members() {
        let map = Value::map([("fact", "cats sleep"), ("len", "shadowed")]);
        assert_eq!(read_member(&map, "fact"), Ok(Value::from("cats sleep")));
        assert_eq!(read_member(&map, "len"), Ok(Value::from("shadowed")));
        assert!(read_member(&map, "keys").unwrap().is_callable());
    }

    #[test]
    fn test_write_member_on_map_inserts_key() {
        let map = Value::map([("a", 1i64)]);
        write_member(&map, "b", Value::Int(2)).unwrap();
        assert_eq!(read_member(&map, "b"), Ok(Value::Int(2)));
    }

    #[test]
    fn test_slot_read_ignores_methods() {
        let obj = Value::object(Object::new("User"));
        assert!(read_member(&obj, "type_name").unwrap().is_callable());
        assert!(matches!(
            read_member_slot(&obj, "type_name"),
            Err(AccessError::NoSuchMember { .. })
        ));

        let map = Value::map([("fact", "x")]);
        assert!(matches!(
            read_member_slot(&map, "len"),
            Err(AccessError::NoSuchMember { .. })
        ));
        assert_eq!(read_member_slot(&map, "fact"), Ok(Value::from("x")));
    }

    #[test]
    fn test_write_rejected_on_list() {
        let list = Value::list(vec![]);
        let err = write_member(&list, "a", Value::Int(2)).unwrap_err();
        assert_eq!(err, "list does not accept members");
    }
}
