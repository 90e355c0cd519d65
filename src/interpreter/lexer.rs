use logos::Logos;
use tracing::debug;

use crate::error::LexError;

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the language.
#[derive(Logos, Debug, PartialEq, Eq, Clone)]
#[logos(extras = LexerExtras)]
#[logos(skip r"[ \t\f\r]+")]
pub enum Token {
    /// Integer literal tokens, such as `42`.
    #[regex(r"[0-9]+", parse_integer)]
    Int(i64),
    /// String literal tokens, such as `"hello\n"`. The payload is unescaped.
    /// A literal may span lines; raw newlines are kept in the payload.
    #[regex(r#""([^"\\]|\\.)*""#, parse_string)]
    Str(String),
    /// Boolean literal tokens, `true` or `false`.
    #[token("true", |_| true)]
    #[token("false", |_| false)]
    Bool(bool),
    /// `null`
    #[token("null")]
    Null,
    /// `if`
    #[token("if")]
    If,
    /// `else`
    #[token("else")]
    Else,
    /// `while`
    #[token("while")]
    While,
    /// `def`
    #[token("def")]
    Def,
    /// `break`
    #[token("break")]
    Break,
    /// Identifier tokens; variable or function names such as `x` or `fib`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Ident(String),
    /// `// Comments.`
    #[token("//", line_comment)]
    LineComment,
    /// `/* Block comments. */`
    #[token("/*", block_comment)]
    BlockComment,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `=`
    #[token("=")]
    Equal,
    /// `==`
    #[token("==")]
    EqualEqual,
    /// `!=`
    #[token("!=")]
    BangEqual,
    /// `<`
    #[token("<")]
    Less,
    /// `<=`
    #[token("<=")]
    LessEqual,
    /// `>`
    #[token(">")]
    Greater,
    /// `>=`
    #[token(">=")]
    GreaterEqual,
    /// `!`
    #[token("!")]
    Bang,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `{`
    #[token("{")]
    LBrace,
    /// `}`
    #[token("}")]
    RBrace,
    /// `,`
    #[token(",")]
    Comma,
    /// `;`
    #[token(";")]
    Semicolon,
    /// Newlines only advance the line counter.
    #[token("\n", |lex| {
        lex.extras.line += 1;
        logos::Skip
    })]
    NewLine,
    /// Text that matched no rule. Never produced by logos itself; `tokenize`
    /// builds it from lexer errors.
    Unknown(String),
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number for error reporting.
#[derive(Debug)]
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line: usize,
}

impl Default for LexerExtras {
    fn default() -> Self {
        Self { line: 1 }
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Int(n) => write!(f, "{n}"),
            Self::Str(s) => write!(f, "{s:?}"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Ident(name) => write!(f, "{name}"),
            Self::Unknown(text) => write!(f, "{text}"),
            Self::Null => write!(f, "null"),
            Self::If => write!(f, "if"),
            Self::Else => write!(f, "else"),
            Self::While => write!(f, "while"),
            Self::Def => write!(f, "def"),
            Self::Break => write!(f, "break"),
            Self::LineComment => write!(f, "//"),
            Self::BlockComment => write!(f, "/*"),
            Self::Plus => write!(f, "+"),
            Self::Minus => write!(f, "-"),
            Self::Star => write!(f, "*"),
            Self::Slash => write!(f, "/"),
            Self::Equal => write!(f, "="),
            Self::EqualEqual => write!(f, "=="),
            Self::BangEqual => write!(f, "!="),
            Self::Less => write!(f, "<"),
            Self::LessEqual => write!(f, "<="),
            Self::Greater => write!(f, ">"),
            Self::GreaterEqual => write!(f, ">="),
            Self::Bang => write!(f, "!"),
            Self::LParen => write!(f, "("),
            Self::RParen => write!(f, ")"),
            Self::LBrace => write!(f, "{{"),
            Self::RBrace => write!(f, "}}"),
            Self::Comma => write!(f, ","),
            Self::Semicolon => write!(f, ";"),
            Self::NewLine => writeln!(f),
        }
    }
}

/// Converts source text into a flat list of `(token, line)` pairs.
///
/// Whitespace and comments produce no tokens. Characters that match no rule
/// become [`Token::Unknown`] and lexing continues past them, so callers decide
/// whether unknown input is fatal (see [`check_tokens`]).
///
/// # Example
/// ```
/// use sprig::interpreter::lexer::{Token, tokenize};
///
/// let tokens = tokenize("x = 1 + 2;");
/// let kinds: Vec<Token> = tokens.into_iter().map(|(token, _)| token).collect();
///
/// assert_eq!(kinds,
///            vec![Token::Ident("x".into()),
///                 Token::Equal,
///                 Token::Int(1),
///                 Token::Plus,
///                 Token::Int(2),
///                 Token::Semicolon]);
/// ```
#[must_use]
pub fn tokenize(source: &str) -> Vec<(Token, usize)> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer(source);

    while let Some(token) = lexer.next() {
        let line = lexer.extras.line;
        match token {
            Ok(tok) => {
                // A string is reported on the line it starts; the lines it
                // spans still count for the tokens after it.
                if matches!(tok, Token::Str(_)) {
                    lexer.extras.line += lexer.slice().matches('\n').count();
                }
                tokens.push((tok, line));
            },
            Err(()) => tokens.push((Token::Unknown(lexer.slice().to_string()), line)),
        }
    }

    debug!(count = tokens.len(), "tokenized source");
    tokens
}

/// Returns the first unknown token as a [`LexError`].
///
/// # Errors
/// Fails when any token in the list is [`Token::Unknown`].
pub fn check_tokens(tokens: &[(Token, usize)]) -> Result<(), LexError> {
    match tokens.iter().find(|(token, _)| matches!(token, Token::Unknown(_))) {
        Some((Token::Unknown(text), line)) => Err(LexError { text: text.clone(),
                                                             line: *line, }),
        _ => Ok(()),
    }
}

/// Parses an integer literal from the current token slice.
///
/// Returns `None` when the digits do not fit into an `i64`; the slice then
/// surfaces as an unknown token.
fn parse_integer(lex: &logos::Lexer<Token>) -> Option<i64> {
    lex.slice().parse().ok()
}

/// Strips the quotes of a string literal and resolves its escapes.
///
/// `\n`, `\t`, `\"` and `\\` are recognized; any other escape is kept as
/// written.
fn parse_string(lex: &logos::Lexer<Token>) -> String {
    let slice = lex.slice();
    let body = &slice[1..slice.len() - 1];
    let mut out = String::with_capacity(body.len());
    let mut chars = body.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some('"') => out.push('"'),
            Some('\\') => out.push('\\'),
            Some(other) => {
                out.push('\\');
                out.push(other);
            },
            None => out.push('\\'),
        }
    }
    out
}

/// Skips the rest of a `//` comment, leaving the newline for the line counter.
fn line_comment(lex: &mut logos::Lexer<Token>) -> logos::Skip {
    let rest = lex.remainder();
    let end = rest.find('\n').unwrap_or(rest.len());
    lex.bump(end);
    logos::Skip
}

/// Skips a `/* ... */` comment. An unterminated comment runs to the end of
/// the input.
fn block_comment(lex: &mut logos::Lexer<Token>) -> logos::Skip {
    let rest = lex.remainder();
    let end = rest.find("*/").map_or(rest.len(), |i| i + 2);
    lex.extras.line += rest[..end].matches('\n').count();
    lex.bump(end);
    logos::Skip
}
