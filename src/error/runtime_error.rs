use thiserror::Error;

use crate::ast::BinaryOperator;

/// Represents all errors that can occur during evaluation.
///
/// Every error aborts the `evaluate` call that raised it; the caller keeps the
/// environment it passed in.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    /// An operator was applied to operands of the wrong kinds.
    #[error("Type error: cannot apply '{operator}' to {left} and {right}.")]
    TypeError {
        /// The operator being applied.
        operator: BinaryOperator,
        /// Kind name of the left operand.
        left:     &'static str,
        /// Kind name of the right operand.
        right:    &'static str,
    },
    /// Called a function that is not in the function table.
    #[error("Undefined function '{name}'.")]
    UndefinedFunction {
        /// The name of the function.
        name: String,
    },
    /// The wrong number of arguments was supplied to a function.
    #[error("Function '{name}' expects {expected} argument(s), but {found} were given.")]
    ArgumentsCount {
        /// The name of the function.
        name:     String,
        /// The declared arity.
        expected: usize,
        /// The number of arguments at the call site.
        found:    usize,
    },
    /// Attempted integer division by zero.
    #[error("Division by zero.")]
    DivisionByZero,
    /// Arithmetic left the 64 bit integer range.
    #[error("Integer overflow while computing '{operator}'.")]
    Overflow {
        /// The operator that overflowed.
        operator: BinaryOperator,
    },
}
