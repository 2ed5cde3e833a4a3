use std::rc::Rc;

use ordered_float::OrderedFloat;

use crate::{
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::function::Function},
    util::num::i64_to_f64_checked,
};

/// Represents a runtime value in the interpreter.
///
/// This enum models all the possible types that can appear in expressions,
/// declarations, and pending applications. Values are immutable once
/// constructed and compare structurally: arrays compare element-wise and
/// mixed-kind comparisons are simply unequal, never an error. The dispatcher
/// relies on this when matching literal parameter patterns, which is also why
/// reals are wrapped in [`OrderedFloat`] — the whole model is `Eq`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// An integer value (64 bit integer).
    Integer(i64),
    /// A numeric value (double precision floating-point).
    Real(OrderedFloat<f64>),
    /// A text value. Quotes are not part of the content.
    Text(String),
    /// An array of `Value` elements. Heterogeneous elements are permitted.
    Array(Rc<Vec<Self>>),
    /// A function-like value: fully or partially applied, resolved or
    /// symbolic. See [`Function`].
    Function(Rc<Function>),
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Real(OrderedFloat(v))
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Text(v.to_string())
    }
}

impl From<Vec<Self>> for Value {
    fn from(v: Vec<Self>) -> Self {
        Self::Array(Rc::new(v))
    }
}

impl From<Function> for Value {
    fn from(v: Function) -> Self {
        Self::Function(Rc::new(v))
    }
}

impl Value {
    /// Converts the value to an `f64`, or returns an error if not numeric.
    ///
    /// Accepts `Value::Real` and `Value::Integer`. For integers, conversion
    /// fails if the value is too large to be represented as `f64` exactly.
    ///
    /// # Returns
    /// - `Ok(f64)`: If the value is real or a safe integer.
    /// - `Err(RuntimeError::TypeError | LiteralTooLarge)`: If not numeric or
    ///   not representable.
    pub fn as_real(&self) -> EvalResult<f64> {
        match self {
            Self::Real(r) => Ok(r.into_inner()),
            Self::Integer(n) => i64_to_f64_checked(*n, RuntimeError::LiteralTooLarge),
            _ => Err(RuntimeError::TypeError { details: format!("expected a number, found {self}") }),
        }
    }

    /// Returns `true` if the value is [`Function`].
    #[must_use]
    pub const fn is_function(&self) -> bool {
        matches!(self, Self::Function(..))
    }
}

impl std::fmt::Display for Value {
    /// Renders the value in the language's own syntax: arrays are
    /// space-separated, text is verbatim without quotes, and pending
    /// functions show their name followed by the arguments given so far.
    ///
    /// # Examples
    /// ```
    /// use curria::interpreter::value::core::Value;
    ///
    /// let array = Value::from(vec![Value::from(1), Value::from(2)]);
    /// assert_eq!(array.to_string(), "[1 2]");
    /// ```
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Real(r) => write!(f, "{r}"),
            Self::Text(s) => write!(f, "{s}"),
            Self::Array(a) => {
                write!(f, "[")?;

                for (index, value) in a.iter().enumerate() {
                    if index > 0 {
                        write!(f, " ")?;
                    }

                    write!(f, "{value}")?;
                }

                write!(f, "]")
            },
            Self::Function(function) => write!(f, "{function}"),
        }
    }
}
