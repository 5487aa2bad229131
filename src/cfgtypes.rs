//////////
// Imports
//////////

use indexmap::IndexMap;
use std::collections::HashMap;
use std::fmt;

/////////////////
// Implementation
/////////////////

/// The translated dictionary. Keys keep the order in which they were first declared.
pub type ConfigTable = IndexMap<String, Value>;

#[derive(Debug, Clone, PartialEq, Eq)]
/// The Rust representation of a scalar value of the configuration dialect.
pub enum Value {
    /// A run of decimal digits
    Int(i64),
    /// Single-quoted string (no escapes)
    Str(String),
    Bool(bool),
}
impl Value {
    /// Gets a reference to the underlying string
    pub fn str(&self) -> Option<&str> {
        if let Self::Str(s) = self {
            Some(s.as_str())
        } else {
            None
        }
    }

    pub fn i64(&self) -> Option<i64> {
        if let Self::Int(n) = *self {
            Some(n)
        } else {
            None
        }
    }

    pub fn bool(&self) -> Option<bool> {
        if let Self::Bool(b) = *self {
            Some(b)
        } else {
            None
        }
    }

    /// Human-readable name of the variant, used in debug output.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Int(_) => "integer",
            Self::Str(_) => "string",
            Self::Bool(_) => "boolean",
        }
    }
}
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(n) => write!(f, "{}", n),
            Self::Str(s) => write!(f, "'{}'", s),
            Self::Bool(b) => write!(f, "{}", b),
        }
    }
}
impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Self::Int(n)
    }
}
impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}
impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::Str(s.to_string())
    }
}
impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::Str(s)
    }
}

/// Named constants declared via `name := value`.
///
/// Entries are only ever added or overwritten, never removed. The table is owned by a
/// [`Translator`](crate::Translator) and outlives individual `parse` calls.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConstantTable {
    table: HashMap<String, Value>,
}
impl ConstantTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.table.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.table.contains_key(name)
    }

    /// Declares `name`, returning the value it replaced (if any).
    pub fn declare(&mut self, name: &str, value: Value) -> Option<Value> {
        self.table.insert(name.to_string(), value)
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.table.iter().map(|(k, v)| (k.as_str(), v))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors_match_variant() {
        let n = Value::from(42);
        let s = Value::from("localhost");
        let b = Value::from(true);

        assert_eq!(n.i64(), Some(42));
        assert_eq!(n.str(), None);
        assert_eq!(s.str(), Some("localhost"));
        assert_eq!(s.bool(), None);
        assert_eq!(b.bool(), Some(true));
        assert_eq!(b.i64(), None);
        assert_eq!(s.kind(), "string");
    }

    #[test]
    fn redeclaring_overwrites() {
        let mut consts = ConstantTable::new();
        assert!(consts.declare("port", Value::Int(80)).is_none());
        assert_eq!(consts.declare("port", Value::Int(8080)), Some(Value::Int(80)));
        assert_eq!(consts.get("port"), Some(&Value::Int(8080)));
        assert_eq!(consts.len(), 1);
        assert!(!consts.contains("host"));
    }
}
