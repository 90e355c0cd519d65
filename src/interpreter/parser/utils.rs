use std::iter::Peekable;

use crate::interpreter::lexer::Token;

/// Consumes the next token if it equals `expected`.
///
/// Returns `None`, without guarantees about the cursor, otherwise.
pub(in crate::interpreter::parser) fn expect<'a, I>(tokens: &mut Peekable<I>,
                                                    expected: &Token)
                                                    -> Option<()>
    where I: Iterator<Item = &'a (Token, usize)>
{
    match tokens.next() {
        Some((token, _)) if token == expected => Some(()),
        _ => None,
    }
}

/// Parses a comma-separated list of items until a closing token.
///
/// This utility is shared by function argument lists and parameter lists. It
/// repeatedly calls `parse_item` to parse one element, expecting either:
///
/// - a comma, to continue the list, or
/// - the specified closing token, to end it.
///
/// An immediately encountered closing token produces an empty list. A comma
/// directly before the closing token is rejected.
///
/// Grammar (simplified): `list := (item ("," item)*)? closing`
pub(in crate::interpreter::parser) fn parse_comma_separated<'a, I, T>(
    tokens: &mut Peekable<I>,
    parse_item: impl Fn(&mut Peekable<I>) -> Option<T>,
    closing: &Token)
    -> Option<Vec<T>>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut items = Vec::new();
    if let Some((tok, _)) = tokens.peek()
       && tok == closing
    {
        tokens.next();

        return Some(items);
    }
    loop {
        items.push(parse_item(tokens)?);
        match tokens.next() {
            Some((Token::Comma, _)) => {},
            Some((tok, _)) if tok == closing => break,
            _ => return None,
        }
    }
    Some(items)
}

/// Parses a plain identifier and returns its name.
pub(in crate::interpreter::parser) fn parse_identifier<'a, I>(tokens: &mut Peekable<I>)
                                                              -> Option<String>
    where I: Iterator<Item = &'a (Token, usize)>
{
    match tokens.next() {
        Some((Token::Ident(name), _)) => Some(name.clone()),
        _ => None,
    }
}
