use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        lexer::Token,
        parser::{
            core::{attempt, parse_expression},
            utils::{expect, parse_comma_separated},
        },
    },
    util::stack::ensure_sufficient_stack,
};

/// Parses a unary expression.
///
/// Supports prefix operators:
/// - `-`  (numeric negation)
/// - `+`  (numeric identity)
///
/// Unary operators bind tighter than `*` and are right-associative, so
/// `--x` is `-(-x)` and `-2 * 3` is `(-2) * 3`. There is no unary node in the
/// tree: `-e` becomes `0 - e` and `+e` becomes `0 + e`, which gives both the
/// same operand type checks as their binary forms.
///
/// Grammar:
/// ```text
///     unary := ("-" | "+") unary
///            | call
/// ```
pub(crate) fn parse_unary<'a, I>(tokens: &mut Peekable<I>) -> Option<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    ensure_sufficient_stack(|| {
        let op = match tokens.peek() {
            Some((Token::Minus, _)) => BinaryOperator::Subtract,
            Some((Token::Plus, _)) => BinaryOperator::Add,
            _ => return parse_call(tokens),
        };
        tokens.next();
        let operand = parse_unary(tokens)?;

        Some(Expr::binary(op, Expr::Int(0), operand))
    })
}

/// Parses a function call, falling back to a group or primary expression.
///
/// An identifier directly followed by `(` is tentatively parsed as a call.
/// If the argument list or the closing `)` does not parse, the identifier is
/// read as a plain variable instead; the dangling `(` then fails whatever
/// production encloses it.
///
/// Grammar:
/// ```text
///     call := identifier "(" (expression ("," expression)*)? ")"
///           | group
/// ```
fn parse_call<'a, I>(tokens: &mut Peekable<I>) -> Option<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    if let Some((Token::Ident(name), _)) = tokens.peek() {
        let name = name.clone();
        let arguments = attempt(tokens, |cursor| {
            cursor.next();
            expect(cursor, &Token::LParen)?;
            parse_comma_separated(cursor, parse_expression, &Token::RParen)
        });
        if let Some(arguments) = arguments {
            return Some(Expr::Call { name, arguments });
        }
    }
    parse_group(tokens)
}

/// Parses a parenthesized expression, or a primary expression when the
/// next token is not `(`.
///
/// Parentheses only group; they leave no node in the tree.
fn parse_group<'a, I>(tokens: &mut Peekable<I>) -> Option<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    if let Some((Token::LParen, _)) = tokens.peek() {
        tokens.next();
        let expr = parse_expression(tokens)?;
        expect(tokens, &Token::RParen)?;
        return Some(expr);
    }
    parse_primary(tokens)
}

/// Parses a primary (atomic) expression: a literal or a variable.
///
/// Grammar (simplified):
/// ```text
///     primary := integer | string | "true" | "false" | "null" | identifier
/// ```
pub(crate) fn parse_primary<'a, I>(tokens: &mut Peekable<I>) -> Option<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let expr = match tokens.next()? {
        (Token::Int(n), _) => Expr::Int(*n),
        (Token::Str(s), _) => Expr::Str(s.clone()),
        (Token::Bool(b), _) => Expr::Bool(*b),
        (Token::Null, _) => Expr::Null,
        (Token::Ident(name), _) => Expr::variable(name.as_str()),
        _ => return None,
    };
    Some(expr)
}
