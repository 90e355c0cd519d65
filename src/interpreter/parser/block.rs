use std::iter::Peekable;

use crate::{
    ast::Block,
    interpreter::{
        lexer::Token,
        parser::{statement::parse_statement, utils::expect},
    },
};

/// Parses a block delimited by braces.
///
/// A block consists of zero or more statements. Parsing continues until a
/// closing `}` token is encountered; running out of tokens first fails the
/// block. `{ }` is a valid, empty block.
///
/// Grammar: `block := "{" statement* "}"`
pub fn parse_block<'a, I>(tokens: &mut Peekable<I>) -> Option<Block>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    expect(tokens, &Token::LBrace)?;
    let mut statements = Vec::new();

    loop {
        match tokens.peek()? {
            (Token::RBrace, _) => {
                tokens.next();
                break;
            },
            _ => statements.push(parse_statement(tokens)?),
        }
    }

    Some(statements)
}
