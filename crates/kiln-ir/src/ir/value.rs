//! Instruction values
//!
//! Every instruction carries a [`Value`] stating how much the analyzer knows
//! about its result: nothing yet, "only at run time", or a compile-time literal.

use crate::types::{TypeId, TypeTable};
use std::fmt;

/// Analysis state of an instruction's result.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    /// Not analyzed yet
    #[default]
    Unknown,
    /// Only known when the generated program runs
    Runtime,
    /// Resolved at compile time
    Known(ConstValue),
}

impl Value {
    pub fn is_known(&self) -> bool {
        matches!(self, Value::Known(_))
    }

    pub fn is_runtime(&self) -> bool {
        matches!(self, Value::Runtime)
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, Value::Unknown)
    }

    /// The compile-time literal, if there is one
    pub fn as_known(&self) -> Option<&ConstValue> {
        match self {
            Value::Known(v) => Some(v),
            Value::Unknown | Value::Runtime => None,
        }
    }
}

/// A compile-time literal.
#[derive(Debug, Clone, PartialEq)]
pub enum ConstValue {
    Void,
    Undefined,
    Null,
    Bool(bool),
    Int(i128),
    Float(f64),
    Str(String),
    Type(TypeId),
    /// Reference to a function by name
    Fn(String),
    /// Enum tag
    Enum(String),
    /// Error value by name
    Error(String),
    Optional(Option<Box<ConstValue>>),
    Array(Vec<ConstValue>),
    Struct(Vec<(String, ConstValue)>),
}

impl ConstValue {
    pub fn as_int(&self) -> Option<i128> {
        match self {
            ConstValue::Int(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            ConstValue::Bool(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_type(&self) -> Option<TypeId> {
        match self {
            ConstValue::Type(id) => Some(*id),
            _ => None,
        }
    }

    /// Render this literal, resolving type handles through `types`.
    pub fn display<'a>(&'a self, types: &'a TypeTable) -> ConstDisplay<'a> {
        ConstDisplay { value: self, types }
    }
}

impl From<bool> for ConstValue {
    fn from(v: bool) -> Self {
        ConstValue::Bool(v)
    }
}

impl From<i128> for ConstValue {
    fn from(v: i128) -> Self {
        ConstValue::Int(v)
    }
}

impl From<f64> for ConstValue {
    fn from(v: f64) -> Self {
        ConstValue::Float(v)
    }
}

impl From<&str> for ConstValue {
    fn from(v: &str) -> Self {
        ConstValue::Str(v.to_string())
    }
}

impl From<TypeId> for ConstValue {
    fn from(id: TypeId) -> Self {
        ConstValue::Type(id)
    }
}

/// Display adapter returned by [`ConstValue::display`].
pub struct ConstDisplay<'a> {
    value: &'a ConstValue,
    types: &'a TypeTable,
}

impl fmt::Display for ConstDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.value {
            ConstValue::Void => write!(f, "{{}}"),
            ConstValue::Undefined => write!(f, "undefined"),
            ConstValue::Null => write!(f, "null"),
            ConstValue::Bool(b) => write!(f, "{}", b),
            ConstValue::Int(v) => write!(f, "{}", v),
            ConstValue::Float(v) => write!(f, "{:?}", v),
            ConstValue::Str(s) => write!(f, "\"{}\"", s.escape_default()),
            ConstValue::Type(id) => match self.types.name(*id) {
                Some(name) => write!(f, "{}", name.escape_debug()),
                None => write!(f, "{}", id),
            },
            ConstValue::Fn(name) => write!(f, "{}", name.escape_debug()),
            ConstValue::Enum(tag) => write!(f, ".{}", tag.escape_debug()),
            ConstValue::Error(name) => write!(f, "error.{}", name.escape_debug()),
            ConstValue::Optional(None) => write!(f, "null"),
            ConstValue::Optional(Some(inner)) => write!(f, "{}", inner.display(self.types)),
            ConstValue::Array(items) => {
                write!(f, "{{")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", item.display(self.types))?;
                }
                write!(f, "}}")
            }
            ConstValue::Struct(fields) => {
                write!(f, "{{")?;
                for (i, (name, value)) in fields.iter().enumerate() {
                    if i > 0 {
                        write!(f, ",")?;
                    }
                    write!(f, " .{} = {}", name.escape_debug(), value.display(self.types))?;
                }
                if !fields.is_empty() {
                    write!(f, " ")?;
                }
                write!(f, "}}")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(value: &ConstValue) -> String {
        let mut types = TypeTable::new();
        types.intern("u8");
        value.display(&types).to_string()
    }

    #[test]
    fn test_value_states() {
        assert!(Value::default().is_unknown());
        assert!(Value::Runtime.is_runtime());
        assert!(Value::Known(ConstValue::Int(1)).is_known());
        assert_eq!(Value::Runtime.as_known(), None);
        assert_eq!(
            Value::Known(ConstValue::Bool(true)).as_known(),
            Some(&ConstValue::Bool(true))
        );
    }

    #[test]
    fn test_scalar_display() {
        assert_eq!(render(&ConstValue::Int(-42)), "-42");
        assert_eq!(render(&ConstValue::Bool(false)), "false");
        assert_eq!(render(&ConstValue::Float(2.5)), "2.5");
        assert_eq!(render(&ConstValue::Float(1.0)), "1.0");
        assert_eq!(render(&ConstValue::Str("a\"b".into())), "\"a\\\"b\"");
        assert_eq!(render(&ConstValue::Void), "{}");
        assert_eq!(render(&ConstValue::Enum("Red".into())), ".Red");
        assert_eq!(render(&ConstValue::Error("OutOfMemory".into())), "error.OutOfMemory");
    }

    #[test]
    fn test_names_are_escaped() {
        assert_eq!(render(&ConstValue::Enum("A\nB".into())), ".A\\nB");
        assert_eq!(render(&ConstValue::Fn("f\tg".into())), "f\\tg");
        assert_eq!(render(&ConstValue::Error("Bad\r".into())), "error.Bad\\r");
        let st = ConstValue::Struct(vec![("x\ny".to_string(), ConstValue::Int(1))]);
        assert_eq!(render(&st), "{ .x\\ny = 1 }");
    }

    #[test]
    fn test_type_display_uses_table() {
        assert_eq!(render(&ConstValue::Type(TypeId::new(0))), "u8");
        assert_eq!(render(&ConstValue::Type(TypeId::new(7))), "type7");
    }

    #[test]
    fn test_aggregate_display() {
        let array = ConstValue::Array(vec![ConstValue::Int(1), ConstValue::Int(2)]);
        assert_eq!(render(&array), "{1, 2}");

        let st = ConstValue::Struct(vec![
            ("x".to_string(), ConstValue::Int(1)),
            ("y".to_string(), ConstValue::Null),
        ]);
        assert_eq!(render(&st), "{ .x = 1, .y = null }");
        assert_eq!(render(&ConstValue::Struct(vec![])), "{}");

        let opt = ConstValue::Optional(Some(Box::new(ConstValue::Int(3))));
        assert_eq!(render(&opt), "3");
        assert_eq!(render(&ConstValue::Optional(None)), "null");
    }
}
