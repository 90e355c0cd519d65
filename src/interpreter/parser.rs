use tracing::debug;

use crate::{
    ast::Source,
    error::SyntaxError,
    interpreter::{lexer::Token, parser::statement::parse_toplevel_statement},
};

/// Binary operator parsing.
///
/// Contains the precedence levels for comparisons, additive, and
/// multiplicative operators.
pub mod binary;
/// Block parsing.
///
/// Parses brace-delimited statement lists used by `if`, `while` and `def`.
pub mod block;
/// Core parsing helpers and the entry point for expressions.
pub mod core;
/// Statement parsing.
///
/// Tries each statement production in a fixed order and backtracks between
/// them.
pub mod statement;
/// Unary and primary expressions.
///
/// Handles prefix signs, function calls, parenthesized groups, literals and
/// identifiers.
pub mod unary;
/// Parsing utilities.
///
/// Shared helpers for comma separated lists, identifiers and expected tokens.
pub mod utils;

/// Parses a full token stream into a [`Source`] node.
///
/// Top-level statements and function definitions are parsed until the tokens
/// run out. The first position at which no statement can be derived is
/// reported as a [`SyntaxError`]; there is no error recovery.
///
/// # Errors
/// Returns a `SyntaxError` carrying the token that starts the failing
/// statement.
///
/// # Example
/// ```
/// use sprig::{
///     ast::{BinaryOperator, Expr, Statement},
///     interpreter::{lexer::tokenize, parser::parse},
/// };
///
/// let source = parse(&tokenize("1 + 2 * 3;")).unwrap();
/// let expected = Expr::binary(BinaryOperator::Add,
///                             Expr::Int(1),
///                             Expr::binary(BinaryOperator::Multiply, Expr::Int(2), Expr::Int(3)));
///
/// assert_eq!(source.statements, vec![Statement::Expression(expected)]);
/// ```
pub fn parse(tokens: &[(Token, usize)]) -> Result<Source, SyntaxError> {
    let mut iter = tokens.iter().peekable();
    let mut statements = Vec::new();

    while let Some(&(token, line)) = iter.peek() {
        let Some(statement) = parse_toplevel_statement(&mut iter) else {
            return Err(SyntaxError { token: token.clone(),
                                     line:  *line, });
        };
        statements.push(statement);
    }

    debug!(count = statements.len(), "parsed source");
    Ok(Source { statements })
}
