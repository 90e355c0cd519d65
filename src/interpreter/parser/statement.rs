use std::iter::Peekable;

use crate::{
    ast::{FunctionDef, Statement},
    interpreter::{
        lexer::Token,
        parser::{
            block::parse_block,
            core::{attempt, parse_expression},
            utils::{expect, parse_comma_separated, parse_identifier},
        },
    },
    util::stack::ensure_sufficient_stack,
};

/// Parses a statement at the top level of a program.
///
/// Same as [`parse_statement`], with function definitions tried last.
pub fn parse_toplevel_statement<'a, I>(tokens: &mut Peekable<I>) -> Option<Statement>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    parse_statement(tokens).or_else(|| attempt(tokens, parse_function_definition))
}

/// Parses a single statement.
/// A statement may be one of:
/// - an expression followed by `;`,
/// - an assignment followed by `;`,
/// - an `if` statement,
/// - a `while` statement.
///
/// Parsing is attempted in that order on a fresh copy of the cursor; the
/// first construct that parses completely, including its terminator, is
/// returned. If none match, the cursor is left untouched and `None` is
/// returned.
pub fn parse_statement<'a, I>(tokens: &mut Peekable<I>) -> Option<Statement>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    ensure_sufficient_stack(|| {
        attempt(tokens, parse_expression_statement)
            .or_else(|| attempt(tokens, parse_assignment))
            .or_else(|| attempt(tokens, parse_if))
            .or_else(|| attempt(tokens, parse_while))
    })
}

/// Parses `<expression> ;`.
fn parse_expression_statement<'a, I>(tokens: &mut Peekable<I>) -> Option<Statement>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let expr = parse_expression(tokens)?;
    expect(tokens, &Token::Semicolon)?;
    Some(Statement::Expression(expr))
}

/// Parses `<identifier> = <expression> ;`.
fn parse_assignment<'a, I>(tokens: &mut Peekable<I>) -> Option<Statement>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let name = parse_identifier(tokens)?;
    expect(tokens, &Token::Equal)?;
    let value = parse_expression(tokens)?;
    expect(tokens, &Token::Semicolon)?;
    Some(Statement::Assignment { name, value })
}

/// Parses an `if` statement with an optional `else` block.
///
/// Syntax:
/// ```text
///     if (<condition>) { ... }
///     else if (<condition>) { ... }
///     else { ... }
/// ```
/// An `else if` is stored as an else block holding a single nested `if`.
fn parse_if<'a, I>(tokens: &mut Peekable<I>) -> Option<Statement>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    expect(tokens, &Token::If)?;
    expect(tokens, &Token::LParen)?;
    let condition = parse_expression(tokens)?;
    expect(tokens, &Token::RParen)?;
    let then_block = parse_block(tokens)?;

    let else_block = match tokens.peek() {
        Some((Token::Else, _)) => {
            tokens.next();
            match tokens.peek() {
                Some((Token::If, _)) => Some(vec![parse_if(tokens)?]),
                _ => Some(parse_block(tokens)?),
            }
        },
        _ => None,
    };

    Some(Statement::If { condition,
                         then_block,
                         else_block })
}

/// Parses `while (<condition>) { ... }`.
fn parse_while<'a, I>(tokens: &mut Peekable<I>) -> Option<Statement>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    expect(tokens, &Token::While)?;
    expect(tokens, &Token::LParen)?;
    let condition = parse_expression(tokens)?;
    expect(tokens, &Token::RParen)?;
    let body = parse_block(tokens)?;
    Some(Statement::While { condition, body })
}

/// Parses a function definition of the form
/// `def <name>(param1, param2, ...) { ... }`.
///
/// Only valid at the top level of a program.
fn parse_function_definition<'a, I>(tokens: &mut Peekable<I>) -> Option<Statement>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    expect(tokens, &Token::Def)?;
    let name = parse_identifier(tokens)?;
    expect(tokens, &Token::LParen)?;
    let params = parse_comma_separated(tokens, parse_identifier, &Token::RParen)?;
    let body = parse_block(tokens)?;
    Some(Statement::FuncDef(FunctionDef { name, params, body }))
}
