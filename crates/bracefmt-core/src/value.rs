//! Substitutable argument values
//!
//! A [`Value`] is a closed tagged union over the kinds a placeholder can be
//! replaced with. Rendering is total over every kind; typed access fails with
//! [`FormatError::TypeMismatch`] instead of coercing.

use crate::error::{FormatError, Result};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt::{self, Write as _};

/// Kind tag of a [`Value`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Text,
    Integer,
    Float,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ValueKind::Text => "text",
            ValueKind::Integer => "integer",
            ValueKind::Float => "float",
        };
        f.write_str(name)
    }
}

/// One argument substituted into a template
///
/// Serializes untagged. Deserializes through the same rules as
/// `TryFrom<serde_json::Value>`: strings become `Text`, integral numbers
/// `Integer` (failing when they do not fit `i64`), every other number `Float`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    Text(String),
    Integer(i64),
    Float(f64),
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = serde_json::Value::deserialize(deserializer)?;
        Value::try_from(raw).map_err(serde::de::Error::custom)
    }
}

impl Value {
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Text(_) => ValueKind::Text,
            Value::Integer(_) => ValueKind::Integer,
            Value::Float(_) => ValueKind::Float,
        }
    }

    /// Canonical textual form
    pub fn render(&self) -> String {
        let mut out = String::new();
        self.render_into(&mut out);
        out
    }

    /// Append the canonical textual form to `out`
    pub fn render_into(&self, out: &mut String) {
        match self {
            Value::Text(s) => out.push_str(s),
            // Writing into a String cannot fail
            Value::Integer(i) => {
                let _ = write!(out, "{}", i);
            }
            Value::Float(f) => {
                let _ = write!(out, "{}", f);
            }
        }
    }

    pub fn as_text(&self) -> Result<&str> {
        match self {
            Value::Text(s) => Ok(s),
            other => Err(other.mismatch(ValueKind::Text)),
        }
    }

    pub fn as_integer(&self) -> Result<i64> {
        match self {
            Value::Integer(i) => Ok(*i),
            other => Err(other.mismatch(ValueKind::Integer)),
        }
    }

    pub fn as_float(&self) -> Result<f64> {
        match self {
            Value::Float(f) => Ok(*f),
            other => Err(other.mismatch(ValueKind::Float)),
        }
    }

    fn mismatch(&self, expected: ValueKind) -> FormatError {
        FormatError::TypeMismatch {
            expected,
            found: self.kind(),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Text(s) => f.write_str(s),
            Value::Integer(i) => write!(f, "{}", i),
            Value::Float(x) => write!(f, "{}", x),
        }
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Text(value)
    }
}

impl From<&String> for Value {
    fn from(value: &String) -> Self {
        Value::Text(value.clone())
    }
}

impl From<char> for Value {
    fn from(value: char) -> Self {
        Value::Text(value.to_string())
    }
}

macro_rules! integer_from {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Value::Integer(i64::from(value))
                }
            }
        )*
    };
}

integer_from!(i8, i16, i32, i64, u8, u16, u32);

impl TryFrom<u64> for Value {
    type Error = FormatError;

    fn try_from(value: u64) -> Result<Self> {
        i64::try_from(value)
            .map(Value::Integer)
            .map_err(|_| FormatError::IntegerOverflow(value.to_string()))
    }
}

impl TryFrom<usize> for Value {
    type Error = FormatError;

    fn try_from(value: usize) -> Result<Self> {
        i64::try_from(value)
            .map(Value::Integer)
            .map_err(|_| FormatError::IntegerOverflow(value.to_string()))
    }
}

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Value::Float(f64::from(value))
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl TryFrom<toml::Value> for Value {
    type Error = FormatError;

    fn try_from(value: toml::Value) -> Result<Self> {
        match value {
            toml::Value::String(s) => Ok(Value::Text(s)),
            toml::Value::Integer(i) => Ok(Value::Integer(i)),
            toml::Value::Float(f) => Ok(Value::Float(f)),
            toml::Value::Boolean(_) => Err(unsupported("boolean")),
            toml::Value::Datetime(_) => Err(unsupported("datetime")),
            toml::Value::Array(_) => Err(unsupported("array")),
            toml::Value::Table(_) => Err(unsupported("table")),
        }
    }
}

impl TryFrom<serde_json::Value> for Value {
    type Error = FormatError;

    fn try_from(value: serde_json::Value) -> Result<Self> {
        match value {
            serde_json::Value::String(s) => Ok(Value::Text(s)),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Ok(Value::Integer(i))
                } else if let Some(u) = n.as_u64() {
                    Value::try_from(u)
                } else {
                    n.as_f64()
                        .map(Value::Float)
                        .ok_or_else(|| unsupported("number"))
                }
            }
            serde_json::Value::Null => Err(unsupported("null")),
            serde_json::Value::Bool(_) => Err(unsupported("boolean")),
            serde_json::Value::Array(_) => Err(unsupported("array")),
            serde_json::Value::Object(_) => Err(unsupported("object")),
        }
    }
}

fn unsupported(kind: &str) -> FormatError {
    FormatError::UnsupportedValue(format!("{} values cannot be substituted", kind))
}
