//! Typed values held by a [`Store`](super::Store)

use std::fmt;

/// The kind of a persisted value, doubling as its on-disk type tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ValueKind {
    Int = 0,
    Float = 1,
    String = 2,
    Raw = 3,
}

impl ValueKind {
    pub fn name(self) -> &'static str {
        match self {
            ValueKind::Int => "int",
            ValueKind::Float => "float",
            ValueKind::String => "string",
            ValueKind::Raw => "raw",
        }
    }
}

impl TryFrom<u8> for ValueKind {
    type Error = u8;

    fn try_from(tag: u8) -> std::result::Result<Self, Self::Error> {
        match tag {
            0 => Ok(ValueKind::Int),
            1 => Ok(ValueKind::Float),
            2 => Ok(ValueKind::String),
            3 => Ok(ValueKind::Raw),
            other => Err(other),
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A single stored value
///
/// `Null` is what lookups return for a missing key. It is never written to
/// a store by the setters and never encoded.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    Int(i32),
    Float(f32),
    String(String),
    Raw(Vec<u8>),
    #[default]
    Null,
}

impl Value {
    /// The persisted kind, or `None` for `Null`
    pub fn kind(&self) -> Option<ValueKind> {
        match self {
            Value::Int(_) => Some(ValueKind::Int),
            Value::Float(_) => Some(ValueKind::Float),
            Value::String(_) => Some(ValueKind::String),
            Value::Raw(_) => Some(ValueKind::Raw),
            Value::Null => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn as_int(&self) -> Option<i32> {
        match self {
            Value::Int(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f32> {
        match self {
            Value::Float(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(v) => Some(v.as_str()),
            _ => None,
        }
    }

    pub fn as_raw(&self) -> Option<&[u8]> {
        match self {
            Value::Raw(v) => Some(v.as_slice()),
            _ => None,
        }
    }

    /// Bytes this value occupies in the data region (0 for inline kinds)
    pub fn data_len(&self) -> usize {
        match self {
            Value::String(v) => v.len(),
            Value::Raw(v) => v.len(),
            _ => 0,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(v) => write!(f, "{}", v),
            Value::Float(v) => write!(f, "{}", v),
            Value::String(v) => write!(f, "{:?}", v),
            Value::Raw(v) => {
                write!(f, "{} bytes [", v.len())?;
                for (i, b) in v.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" ")?;
                    }
                    write!(f, "0x{:02X}", b)?;
                }
                f.write_str("]")
            }
            Value::Null => f.write_str("null"),
        }
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Int(v)
    }
}

impl From<f32> for Value {
    fn from(v: f32) -> Self {
        Value::Float(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::String(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.to_string())
    }
}

impl From<Vec<u8>> for Value {
    fn from(v: Vec<u8>) -> Self {
        Value::Raw(v)
    }
}
