use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{lexer::Token, parser::unary::parse_unary},
};

/// Parses relational and equality operators.
///
/// This parser handles all comparison operators:
/// `<`, `>`, `<=`, `>=`, `==`, `!=`.
/// Comparisons are left-associative, so `a < b == c` parses as
/// `(a < b) == c`.
///
/// The rule is: `comparison := additive (comparison_op additive)*`
pub fn parse_comparison<'a, I>(tokens: &mut Peekable<I>) -> Option<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    parse_left_associative(tokens, parse_additive, is_comparison_op)
}

/// Parses addition and subtraction expressions.
///
/// The rule is: `additive := multiplicative (("+" | "-") multiplicative)*`
pub fn parse_additive<'a, I>(tokens: &mut Peekable<I>) -> Option<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    parse_left_associative(tokens, parse_multiplicative, |op| {
        matches!(op, BinaryOperator::Add | BinaryOperator::Subtract)
    })
}

/// Parses multiplication and division expressions.
///
/// The rule is: `multiplicative := unary (("*" | "/") unary)*`
pub fn parse_multiplicative<'a, I>(tokens: &mut Peekable<I>) -> Option<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    parse_left_associative(tokens, parse_unary, |op| {
        matches!(op, BinaryOperator::Multiply | BinaryOperator::Division)
    })
}

/// Folds `operand (op operand)*` into a left-leaning tree for the operators
/// accepted by `accepts`.
///
/// A missing right operand fails the whole expression: `1 +` is not an
/// expression.
fn parse_left_associative<'a, I>(tokens: &mut Peekable<I>,
                                 parse_operand: fn(&mut Peekable<I>) -> Option<Expr>,
                                 accepts: fn(BinaryOperator) -> bool)
                                 -> Option<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut left = parse_operand(tokens)?;
    loop {
        if let Some((token, _)) = tokens.peek()
           && let Some(op) = token_to_binary_operator(token)
           && accepts(op)
        {
            tokens.next();
            let right = parse_operand(tokens)?;
            left = Expr::binary(op, left, right);
            continue;
        }
        break;
    }
    Some(left)
}

/// Returns `true` for the six comparison operators.
const fn is_comparison_op(op: BinaryOperator) -> bool {
    matches!(op,
             BinaryOperator::IsEqual
             | BinaryOperator::IsNotEqual
             | BinaryOperator::IsLesser
             | BinaryOperator::IsLesserOrEqual
             | BinaryOperator::IsGreater
             | BinaryOperator::IsGreaterOrEqual)
}

/// Maps a token to its corresponding binary operator.
///
/// Returns `None` for all tokens that are not binary operators.
///
/// # Example
/// ```
/// use sprig::{
///     ast::BinaryOperator,
///     interpreter::{lexer::Token, parser::binary::token_to_binary_operator},
/// };
///
/// assert_eq!(token_to_binary_operator(&Token::LessEqual),
///            Some(BinaryOperator::IsLesserOrEqual));
/// assert_eq!(token_to_binary_operator(&Token::Equal), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(token: &Token) -> Option<BinaryOperator> {
    match token {
        Token::Plus => Some(BinaryOperator::Add),
        Token::Minus => Some(BinaryOperator::Subtract),
        Token::Star => Some(BinaryOperator::Multiply),
        Token::Slash => Some(BinaryOperator::Division),
        Token::EqualEqual => Some(BinaryOperator::IsEqual),
        Token::BangEqual => Some(BinaryOperator::IsNotEqual),
        Token::Less => Some(BinaryOperator::IsLesser),
        Token::LessEqual => Some(BinaryOperator::IsLesserOrEqual),
        Token::Greater => Some(BinaryOperator::IsGreater),
        Token::GreaterEqual => Some(BinaryOperator::IsGreaterOrEqual),
        _ => None,
    }
}
