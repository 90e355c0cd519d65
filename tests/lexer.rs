use pretty_assertions::assert_eq;
use sprig::{
    error::LexError,
    interpreter::lexer::{Token, check_tokens, tokenize},
};

fn kinds(source: &str) -> Vec<Token> {
    tokenize(source).into_iter().map(|(token, _)| token).collect()
}

#[test]
fn keywords_are_not_identifiers() {
    assert_eq!(kinds("if iffy else while def define break true false null nullable"),
               vec![Token::If,
                    Token::Ident("iffy".into()),
                    Token::Else,
                    Token::While,
                    Token::Def,
                    Token::Ident("define".into()),
                    Token::Break,
                    Token::Bool(true),
                    Token::Bool(false),
                    Token::Null,
                    Token::Ident("nullable".into())]);
}

#[test]
fn operators_take_the_longest_match() {
    assert_eq!(kinds("= == != ! < <= > >= + - * /"),
               vec![Token::Equal,
                    Token::EqualEqual,
                    Token::BangEqual,
                    Token::Bang,
                    Token::Less,
                    Token::LessEqual,
                    Token::Greater,
                    Token::GreaterEqual,
                    Token::Plus,
                    Token::Minus,
                    Token::Star,
                    Token::Slash]);
}

#[test]
fn delimiters() {
    assert_eq!(kinds("(){},;"),
               vec![Token::LParen,
                    Token::RParen,
                    Token::LBrace,
                    Token::RBrace,
                    Token::Comma,
                    Token::Semicolon]);
}

#[test]
fn identifiers_may_contain_digits_and_underscores() {
    assert_eq!(kinds("_tmp x1 snake_case"),
               vec![Token::Ident("_tmp".into()),
                    Token::Ident("x1".into()),
                    Token::Ident("snake_case".into())]);
}

#[test]
fn integers_and_adjacent_identifiers() {
    assert_eq!(kinds("42 007 1x"),
               vec![Token::Int(42), Token::Int(7), Token::Int(1), Token::Ident("x".into())]);
}

#[test]
fn string_escapes_are_resolved() {
    assert_eq!(kinds(r#""a\tb\n" "say \"hi\"" "back\\slash" "\q""#),
               vec![Token::Str("a\tb\n".into()),
                    Token::Str("say \"hi\"".into()),
                    Token::Str("back\\slash".into()),
                    Token::Str("\\q".into())]);
}

#[test]
fn empty_string_literal() {
    assert_eq!(kinds(r#""""#), vec![Token::Str(String::new())]);
}

#[test]
fn lines_are_tracked() {
    let lines: Vec<usize> = tokenize("a\nb\n\nc").into_iter().map(|(_, line)| line).collect();
    assert_eq!(lines, vec![1, 2, 4]);
}

#[test]
fn strings_may_span_lines() {
    let tokens = tokenize("s = \"one\ntwo\";\nt;");
    assert_eq!(tokens,
               vec![(Token::Ident("s".into()), 1),
                    (Token::Equal, 1),
                    (Token::Str("one\ntwo".into()), 1),
                    (Token::Semicolon, 2),
                    (Token::Ident("t".into()), 3),
                    (Token::Semicolon, 3)]);
}

#[test]
fn comments_produce_no_tokens() {
    let tokens = tokenize("1; // one\n/* two\n   lines */ 2;");
    assert_eq!(tokens,
               vec![(Token::Int(1), 1),
                    (Token::Semicolon, 1),
                    (Token::Int(2), 3),
                    (Token::Semicolon, 3)]);
}

#[test]
fn line_comment_at_end_of_input() {
    assert_eq!(kinds("x; // trailing"), vec![Token::Ident("x".into()), Token::Semicolon]);
}

#[test]
fn unterminated_block_comment_runs_to_end_of_input() {
    assert_eq!(kinds("1 /* 2; 3;"), vec![Token::Int(1)]);
}

#[test]
fn empty_source_has_no_tokens() {
    assert!(tokenize("").is_empty());
    assert!(tokenize("  \t\r\n  ").is_empty());
}

#[test]
fn unknown_characters_become_unknown_tokens() {
    let tokens = tokenize("x = 1 @ 2;\ny = $;");
    assert!(tokens.contains(&(Token::Unknown("@".into()), 1)));
    assert!(tokens.contains(&(Token::Unknown("$".into()), 2)));
    assert_eq!(tokens.last(), Some(&(Token::Semicolon, 2)));
}

#[test]
fn check_tokens_reports_the_first_unknown_token() {
    let tokens = tokenize("a = 1;\nb = 2 # 3;\nc = @;");
    assert_eq!(check_tokens(&tokens),
               Err(LexError { text: "#".into(),
                              line: 2, }));
}

#[test]
fn check_tokens_accepts_clean_input() {
    assert_eq!(check_tokens(&tokenize("def f(a) { a; }")), Ok(()));
}

#[test]
fn integer_literal_out_of_range_is_rejected() {
    let tokens = tokenize("99999999999999999999;");
    assert!(check_tokens(&tokens).is_err());
    assert_eq!(kinds("9223372036854775807;"),
               vec![Token::Int(i64::MAX), Token::Semicolon]);
}

#[test]
fn unterminated_string_is_rejected() {
    assert!(check_tokens(&tokenize("\"abc")).is_err());
}

#[test]
fn lex_error_message_names_the_line() {
    let error = check_tokens(&tokenize("\n\n@")).unwrap_err();
    assert_eq!(error.to_string(), "Error on line 3: Unknown character '@'.");
}
