use std::fmt;

use crate::{interpreter::value::core::Value, util::num::f64_to_i64_truncated};

/// A host-side value crossing the embedded function boundary.
///
/// Embedded functions never see [`Value`]; the evaluator unwraps every
/// argument into a `Native` before the call and wraps the returned `Native`
/// back afterwards.
#[derive(Debug, Clone, PartialEq)]
pub enum Native {
    /// An integer.
    Int(i64),
    /// A floating-point number. Only hosts produce these; they become
    /// integers on the way back in.
    Float(f64),
    /// A boolean.
    Bool(bool),
    /// Owned text.
    Text(String),
    /// No value.
    Null,
}

impl From<&Value> for Native {
    fn from(value: &Value) -> Self {
        match value {
            Value::Int(n) => Self::Int(*n),
            Value::Bool(b) => Self::Bool(*b),
            Value::Str(s) => Self::Text(s.to_string()),
            Value::Null => Self::Null,
        }
    }
}

impl From<Native> for Value {
    /// Wraps a host result.
    ///
    /// Numbers become integers (floats truncate toward zero), booleans and
    /// text keep their kind. Anything without a counterpart, which is `Null`
    /// itself and floats that are not finite or do not fit into an `i64`,
    /// becomes `Null`.
    ///
    /// # Example
    /// ```
    /// use sprig::interpreter::value::{core::Value, native::Native};
    ///
    /// assert_eq!(Value::from(Native::Float(-2.7)), Value::Int(-2));
    /// assert_eq!(Value::from(Native::Float(f64::NAN)), Value::Null);
    /// assert_eq!(Value::from(Native::Text("hi".into())), Value::from("hi"));
    /// ```
    fn from(native: Native) -> Self {
        match native {
            Native::Int(n) => Self::Int(n),
            Native::Float(x) => f64_to_i64_truncated(x).map_or(Self::Null, Self::Int),
            Native::Bool(b) => Self::Bool(b),
            Native::Text(s) => Self::from(s),
            Native::Null => Self::Null,
        }
    }
}

impl From<i64> for Native {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<f64> for Native {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<bool> for Native {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<String> for Native {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

impl From<&str> for Native {
    fn from(v: &str) -> Self {
        Self::Text(v.to_string())
    }
}

impl From<()> for Native {
    fn from((): ()) -> Self {
        Self::Null
    }
}

impl<T: Into<Self>> From<Option<T>> for Native {
    fn from(v: Option<T>) -> Self {
        v.map_or(Self::Null, Into::into)
    }
}

/// Host-facing rendering: text is written without quotes, which is what
/// `print` shows.
impl fmt::Display for Native {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(n) => write!(f, "{n}"),
            Self::Float(x) => write!(f, "{x}"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Text(s) => f.write_str(s),
            Self::Null => f.write_str("null"),
        }
    }
}
