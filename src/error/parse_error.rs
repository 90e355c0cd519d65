use thiserror::Error;

use crate::interpreter::lexer::Token;

/// An unknown character (or malformed literal) found in the token stream.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Error on line {line}: Unknown character '{text}'.")]
pub struct LexError {
    /// The offending source text.
    pub text: String,
    /// The source line where the text occurred.
    pub line: usize,
}

/// The parser could not derive a statement at some position.
///
/// Carries the token at which the failing statement starts; the parser does
/// not attempt recovery, so this is the first statement that failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Error on line {line}: Unexpected token '{token}'.")]
pub struct SyntaxError {
    /// The offending token.
    pub token: Token,
    /// The source line of the offending token.
    pub line:  usize,
}
