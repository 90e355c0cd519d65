use std::{fmt, rc::Rc};

/// Represents a runtime value in the interpreter.
///
/// Values are immutable. Strings are reference counted, so cloning a value
/// never copies text. Equality is structural: two values are equal when they
/// have the same kind and the same payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// A 64 bit signed integer.
    Int(i64),
    /// A boolean value (`true` or `false`).
    Bool(bool),
    /// A string value.
    Str(Rc<str>),
    /// The absence of a value. Also the result of statements that produce
    /// nothing, such as assignments and function definitions.
    Null,
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Str(Rc::from(v))
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Str(Rc::from(v))
    }
}

impl Value {
    /// Tells whether `if` and `while` treat the value as true.
    ///
    /// Only `false` and `null` are falsy; every other value, including `0`
    /// and the empty string, is truthy.
    ///
    /// # Example
    /// ```
    /// use sprig::interpreter::value::core::Value;
    ///
    /// assert!(Value::Int(0).is_truthy());
    /// assert!(!Value::Null.is_truthy());
    /// assert!(!Value::Bool(false).is_truthy());
    /// ```
    #[must_use]
    pub const fn is_truthy(&self) -> bool {
        !matches!(self, Self::Bool(false) | Self::Null)
    }

    /// The name of the value's kind, as used in error messages.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Int(_) => "int",
            Self::Bool(_) => "bool",
            Self::Str(_) => "string",
            Self::Null => "null",
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(n) => write!(f, "{n}"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Str(s) => write!(f, "{s:?}"),
            Self::Null => write!(f, "null"),
        }
    }
}
