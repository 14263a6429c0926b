use crate::tag::NodeTag;

/// A literal carried by the parse tree.
///
/// `Float`, `String` and `BitString` keep their textual form; the parser never converts a
/// numeric literal to binary before planning.
#[derive(PartialEq, Clone, Debug)]
pub enum Value {
    Integer(i64),
    Float(String),
    String(String),
    BitString(String),
    Null,
}

impl Value {
    pub fn tag(&self) -> NodeTag {
        match self {
            Value::Integer(_) => NodeTag::Integer,
            Value::Float(_) => NodeTag::Float,
            Value::String(_) => NodeTag::String,
            Value::BitString(_) => NodeTag::BitString,
            Value::Null => NodeTag::Null,
        }
    }

    pub fn text(&self) -> Option<&str> {
        match self {
            Value::Float(s) | Value::String(s) | Value::BitString(s) => Some(s),
            Value::Integer(_) | Value::Null => None,
        }
    }
}
