//! Display and Debug implementations for Value

use std::fmt;

use super::*;

fn write_seq(f: &mut fmt::Formatter<'_>, open: &str, items: &[Value], close: &str) -> fmt::Result {
    write!(f, "{}", open)?;
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{:?}", item)?;
    }
    write!(f, "{}", close)
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "None"),
            Value::Undefined => write!(f, "Undefined"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Char(c) => write!(f, "'{}'", c),
            Value::Int(n) => write!(f, "{}", n),
            Value::Float(n) => write!(f, "{:?}", n),

            Value::String(s) => write!(f, "{:?}", s.as_ref()),
            Value::Bytes(b) => write!(f, "b{:?}", b.as_ref()),

            Value::Tuple(items) => {
                if items.len() == 1 {
                    // Single-element tuple needs trailing comma
                    write_seq(f, "(", items, ",)")
                } else {
                    write_seq(f, "(", items, ")")
                }
            }

            Value::List(items) => match items.read() {
                Ok(items) => write_seq(f, "[", &items, "]"),
                Err(_) => write!(f, "[<poisoned>]"),
            },

            Value::Map(map) => match map.read() {
                Ok(map) => {
                    write!(f, "{{")?;
                    for (i, (k, v)) in map.iter().enumerate() {
                        if i > 0 {
                            write!(f, ", ")?;
                        }
                        write!(f, "{}: {:?}", k, v)?;
                    }
                    write!(f, "}}")
                }
                Err(_) => write!(f, "{{<poisoned>}}"),
            },

            Value::Object(obj) => match obj.read() {
                Ok(obj) => {
                    write!(f, "{} {{ ", obj.type_name)?;
                    for (i, (k, v)) in obj.fields.iter().enumerate() {
                        if i > 0 {
                            write!(f, ", ")?;
                        }
                        write!(f, "{}: {:?}", k, v)?;
                    }
                    write!(f, " }}")
                }
                Err(_) => write!(f, "<poisoned object>"),
            },

            Value::Function(func) => write!(f, "<fn {}>", func.name),
            Value::Host(host) => write!(f, "<{}>", host.type_name()),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::String(s) => write!(f, "{}", s.as_ref()), // No quotes for Display
            Value::Char(c) => write!(f, "{}", c),
            _ => fmt::Debug::fmt(self, f),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentinels_render_like_their_names() {
        assert_eq!(format!("{:?}", Value::Null), "None");
        assert_eq!(format!("{}", Value::Undefined), "Undefined");
    }

    #[test]
    fn test_string_display_is_unquoted() {
        let v = Value::string("hi");
        assert_eq!(format!("{}", v), "hi");
        assert_eq!(format!("{:?}", v), "\"hi\"");
    }

    #[test]
    fn test_collections() {
        let list = Value::list(vec![Value::Int(1), Value::Null]);
        assert_eq!(format!("{:?}", list), "[1, None]");

        let single = Value::tuple(vec![Value::Int(1)]);
        assert_eq!(format!("{:?}", single), "(1,)");

        let map = Value::map([("item", Value::Null)]);
        assert_eq!(format!("{:?}", map), "{\"item\": None}");
    }

    #[test]
    fn test_object() {
        let obj = Value::object(Object::new("Point").with_field("x", 1i64));
        assert_eq!(format!("{:?}", obj), "Point { x: 1 }");
    }

    #[test]
    fn test_float_keeps_decimal_point() {
        assert_eq!(format!("{:?}", Value::Float(3.0)), "3.0");
        assert_eq!(format!("{}", Value::Float(3.14)), "3.14");
    }
}
