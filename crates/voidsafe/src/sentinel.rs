//! Sentinel markers: `None` (explicitly empty) and `Undefined` (never defined)
//!
//! Classification is by variant, never by `PartialEq`, so a user value that
//! merely renders like a sentinel (`"None"`, `"Undefined"`, `false`, `0`) is
//! never mistaken for one.

use std::fmt;

use crate::value::Value;

/// One of the two sentinel markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sentinel {
    /// Explicit "no value" ([`Value::Null`])
    Null,
    /// Requested but unresolvable ([`Value::Undefined`])
    Undefined,
}

impl Sentinel {
    /// Classify a value, returning `None` for non-sentinels
    pub fn of(value: &Value) -> Option<Self> {
        match value {
            Value::Null => Some(Sentinel::Null),
            Value::Undefined => Some(Sentinel::Undefined),
            _ => None,
        }
    }

    /// The sentinel as a value
    pub fn value(self) -> Value {
        match self {
            Sentinel::Null => Value::Null,
            Sentinel::Undefined => Value::Undefined,
        }
    }

    pub(crate) fn label(self) -> &'static str {
        match self {
            Sentinel::Null => "None",
            Sentinel::Undefined => "Undefined",
        }
    }
}

impl fmt::Display for Sentinel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The immutable set of void markers.
#[derive(Debug, Clone, Copy)]
pub struct SentinelSet {
    members: [Sentinel; 2],
}

impl SentinelSet {
    /// Whether `value` is one of the members
    pub fn contains(&self, value: &Value) -> bool {
        Sentinel::of(value).is_some_and(|s| self.members.contains(&s))
    }

    /// Iterate over the members
    pub fn iter(&self) -> impl Iterator<Item = Sentinel> + '_ {
        self.members.iter().copied()
    }
}

/// Both void markers: `{None, Undefined}`.
pub const SENTINELS: SentinelSet = SentinelSet {
    members: [Sentinel::Null, Sentinel::Undefined],
};

/// True iff `value` is `None` or `Undefined`.
pub fn is_void(value: &Value) -> bool {
    SENTINELS.contains(value)
}

/// True iff `value` is `Undefined`.
pub fn is_undefined(value: &Value) -> bool {
    matches!(value, Value::Undefined)
}

/// True iff `value` is `None`.
pub fn is_null(value: &Value) -> bool {
    matches!(value, Value::Null)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_membership() {
        assert!(is_void(&Value::Null));
        assert!(is_void(&Value::Undefined));
        assert!(!is_void(&Value::string("x")));
    }

    #[test]
    fn test_identity_checks() {
        assert!(is_null(&Value::Null));
        assert!(!is_null(&Value::Undefined));
        assert!(is_undefined(&Value::Undefined));
        assert!(!is_undefined(&Value::Null));
    }

    #[test]
    fn test_lookalikes_are_not_sentinels() {
        for v in [
            Value::string("None"),
            Value::string("Undefined"),
            Value::string(""),
            Value::Bool(false),
            Value::Int(0),
            Value::tuple(vec![]),
        ] {
            assert!(!is_void(&v), "{:?} classified as void", v);
        }
    }

    #[test]
    fn test_set_iterates_both_members() {
        let members: Vec<_> = SENTINELS.iter().collect();
        assert_eq!(members, vec![Sentinel::Null, Sentinel::Undefined]);
    }

    #[test]
    fn test_sentinel_round_trip() {
        assert_eq!(Sentinel::of(&Sentinel::Null.value()), Some(Sentinel::Null));
        assert_eq!(Sentinel::of(&Value::Int(1)), None);
        assert_eq!(Sentinel::Undefined.to_string(), "Undefined");
    }
}
