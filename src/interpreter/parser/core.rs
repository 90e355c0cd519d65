use std::iter::Peekable;

use crate::{
    ast::Expr,
    interpreter::{lexer::Token, parser::binary::parse_comparison},
    util::stack::ensure_sufficient_stack,
};

/// Parses a full expression.
///
/// This is the entry point for expression parsing.
/// It begins at the lowest-precedence level, comparison, and recursively
/// descends through the precedence hierarchy.
///
/// Grammar: `expression := comparison`
///
/// Returns `None` when no expression starts at the current position. The
/// iterator may have advanced in that case; callers that need to try another
/// production go through [`attempt`].
///
/// Every parenthesized group re-enters here, so the native stack is grown on
/// demand for deeply nested input.
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>) -> Option<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    ensure_sufficient_stack(|| parse_comparison(tokens))
}

/// Runs `parse` on a copy of the token cursor and commits the copy only if
/// the production succeeds.
///
/// This is the parser's only backtracking mechanism: a failed attempt leaves
/// `tokens` exactly where it was, so the next alternative starts from the
/// same token.
pub fn attempt<'a, I, T>(tokens: &mut Peekable<I>,
                         parse: impl FnOnce(&mut Peekable<I>) -> Option<T>)
                         -> Option<T>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut cursor = tokens.clone();
    let result = parse(&mut cursor)?;
    *tokens = cursor;
    Some(result)
}
