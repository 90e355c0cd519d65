/// Lexing and parsing errors.
///
/// Defines the errors raised before evaluation starts: unknown input found by
/// the lexer and source the parser cannot derive a statement from.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation, such as
/// operand type mismatches, calls to unknown functions or arity mismatches.
pub mod runtime_error;

pub use parse_error::{LexError, SyntaxError};
pub use runtime_error::EvalError;

/// Any failure of the lex, parse and evaluate pipeline.
///
/// Used by [`crate::run`] and the front end, which only needs to report the
/// failure and decide whether to continue.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The source contained text the lexer does not recognize.
    #[error(transparent)]
    Lex(#[from] LexError),
    /// The token stream is not a valid program.
    #[error(transparent)]
    Syntax(#[from] SyntaxError),
    /// Evaluation failed.
    #[error(transparent)]
    Eval(#[from] EvalError),
}
