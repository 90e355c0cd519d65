use pretty_assertions::assert_eq;
use sprig::{
    ast::{
        BinaryOperator::{
            Add, Division, IsEqual, IsGreater, IsLesser, IsLesserOrEqual, Multiply, Subtract,
        },
        Expr, FunctionDef, Source, Statement,
    },
    error::SyntaxError,
    interpreter::{
        lexer::{Token, tokenize},
        parser::parse,
    },
};

fn parse_source(source: &str) -> Source {
    parse(&tokenize(source)).unwrap_or_else(|e| panic!("failed to parse {source:?}: {e}"))
}

fn parse_expr(source: &str) -> Expr {
    match parse_source(source).statements.as_slice() {
        [Statement::Expression(expr)] => expr.clone(),
        other => panic!("expected one expression statement, got {other:?}"),
    }
}

fn syntax_error(source: &str) -> SyntaxError {
    match parse(&tokenize(source)) {
        Ok(ast) => panic!("{source:?} parsed as {ast:?}"),
        Err(e) => e,
    }
}

fn int(n: i64) -> Expr {
    Expr::Int(n)
}

fn var(name: &str) -> Expr {
    Expr::variable(name)
}

fn bin(op: sprig::ast::BinaryOperator, left: Expr, right: Expr) -> Expr {
    Expr::binary(op, left, right)
}

#[test]
fn multiplication_binds_tighter_than_addition() {
    assert_eq!(parse_expr("1 + 2 * 3;"),
               bin(Add, int(1), bin(Multiply, int(2), int(3))));
}

#[test]
fn parentheses_override_precedence() {
    assert_eq!(parse_expr("(1 + 2) * 3;"),
               bin(Multiply, bin(Add, int(1), int(2)), int(3)));
}

#[test]
fn binary_operators_are_left_associative() {
    assert_eq!(parse_expr("10 - 4 - 3;"),
               bin(Subtract, bin(Subtract, int(10), int(4)), int(3)));
    assert_eq!(parse_expr("8 / 4 / 2;"),
               bin(Division, bin(Division, int(8), int(4)), int(2)));
}

#[test]
fn comparisons_bind_loosest_and_chain_to_the_left() {
    assert_eq!(parse_expr("a + 1 < b * 2;"),
               bin(IsLesser,
                   bin(Add, var("a"), int(1)),
                   bin(Multiply, var("b"), int(2))));
    assert_eq!(parse_expr("a < b == c;"),
               bin(IsEqual, bin(IsLesser, var("a"), var("b")), var("c")));
}

#[test]
fn unary_minus_desugars_to_subtraction_from_zero() {
    assert_eq!(parse_expr("-2 * 3;"),
               bin(Multiply, bin(Subtract, int(0), int(2)), int(3)));
    assert_eq!(parse_expr("--x;"),
               bin(Subtract, int(0), bin(Subtract, int(0), var("x"))));
    assert_eq!(parse_expr("+x;"), bin(Add, int(0), var("x")));
}

#[test]
fn literals() {
    assert_eq!(parse_expr("true;"), Expr::Bool(true));
    assert_eq!(parse_expr("null;"), Expr::Null);
    assert_eq!(parse_expr(r#""hi";"#), Expr::Str("hi".into()));
}

#[test]
fn calls_with_zero_one_and_many_arguments() {
    assert_eq!(parse_expr("f();"), Expr::call("f", vec![]));
    assert_eq!(parse_expr("f(1);"), Expr::call("f", vec![int(1)]));
    assert_eq!(parse_expr("f(1, x + 2, g(y));"),
               Expr::call("f",
                          vec![int(1),
                               bin(Add, var("x"), int(2)),
                               Expr::call("g", vec![var("y")])]));
}

#[test]
fn calls_take_part_in_arithmetic() {
    assert_eq!(parse_expr("fib(n - 1) + fib(n - 2);"),
               bin(Add,
                   Expr::call("fib", vec![bin(Subtract, var("n"), int(1))]),
                   Expr::call("fib", vec![bin(Subtract, var("n"), int(2))])));
}

#[test]
fn assignment() {
    assert_eq!(parse_source("x = 1 + 2;").statements,
               vec![Statement::Assignment { name:  "x".into(),
                                            value: bin(Add, int(1), int(2)), }]);
}

#[test]
fn equality_is_not_assignment() {
    assert_eq!(parse_expr("x == 1;"), bin(IsEqual, var("x"), int(1)));
}

#[test]
fn if_with_and_without_else() {
    let source = parse_source("if (x > 1) { a = 1; } if (x) { 1; } else { 2; }");
    assert_eq!(source.statements,
               vec![Statement::If { condition:  bin(IsGreater, var("x"), int(1)),
                                    then_block: vec![Statement::Assignment { name:  "a".into(),
                                                                             value: int(1), }],
                                    else_block: None, },
                    Statement::If { condition:  var("x"),
                                    then_block: vec![Statement::Expression(int(1))],
                                    else_block: Some(vec![Statement::Expression(int(2))]), }]);
}

#[test]
fn else_if_nests_an_if_in_the_else_block() {
    let source = parse_source("if (a) { 1; } else if (b) { 2; } else { 3; }");
    let inner = Statement::If { condition:  var("b"),
                                then_block: vec![Statement::Expression(int(2))],
                                else_block: Some(vec![Statement::Expression(int(3))]), };
    assert_eq!(source.statements,
               vec![Statement::If { condition:  var("a"),
                                    then_block: vec![Statement::Expression(int(1))],
                                    else_block: Some(vec![inner]), }]);
}

#[test]
fn while_loop() {
    let source = parse_source("while (i <= 10) { i = i + 1; }");
    let step = Statement::Assignment { name:  "i".into(),
                                       value: bin(Add, var("i"), int(1)), };
    assert_eq!(source.statements,
               vec![Statement::While { condition: bin(IsLesserOrEqual, var("i"), int(10)),
                                       body:      vec![step], }]);
}

#[test]
fn function_definition() {
    let source = parse_source("def add(a, b) { a + b; } def nothing() { }");
    let add = FunctionDef { name:   "add".into(),
                            params: vec!["a".into(), "b".into()],
                            body:   vec![Statement::Expression(bin(Add, var("a"), var("b")))], };
    let nothing = FunctionDef { name:   "nothing".into(),
                                params: vec![],
                                body:   vec![], };
    assert_eq!(source.statements,
               vec![Statement::FuncDef(add), Statement::FuncDef(nothing)]);
}

#[test]
fn empty_blocks_are_valid() {
    let source = parse_source("if (x) { } else { } while (false) { }");
    assert_eq!(source.statements.len(), 2);
}

#[test]
fn empty_token_stream_is_an_empty_source() {
    assert_eq!(parse(&[]), Ok(Source::default()));
    assert_eq!(parse_source("// only a comment"), Source::default());
}

#[test]
fn missing_semicolon_is_a_syntax_error() {
    assert_eq!(syntax_error("1 + 2"),
               SyntaxError { token: Token::Int(1),
                             line:  1, });
}

#[test]
fn error_names_the_start_of_the_failing_statement() {
    assert_eq!(syntax_error("x = 1;\n\ny = ;"),
               SyntaxError { token: Token::Ident("y".into()),
                             line:  3, });
}

#[test]
fn dangling_operator_is_rejected() {
    assert_eq!(syntax_error("1 +;").token, Token::Int(1));
}

#[test]
fn trailing_comma_is_rejected() {
    syntax_error("f(1,);");
    syntax_error("def f(a,) { }");
}

#[test]
fn unclosed_call_falls_back_and_fails() {
    assert_eq!(syntax_error("f(1;").token, Token::Ident("f".into()));
}

#[test]
fn function_definitions_are_top_level_only() {
    assert_eq!(syntax_error("def f() { def g() { } }").token, Token::Def);
    assert_eq!(syntax_error("if (x) { def g() { } }").token, Token::If);
}

#[test]
fn reserved_tokens_have_no_statement() {
    assert_eq!(syntax_error("break;").token, Token::Break);
    assert_eq!(syntax_error("!x;").token, Token::Bang);
}

#[test]
fn bare_block_is_not_a_statement() {
    assert_eq!(syntax_error("{ 1; }").token, Token::LBrace);
}

#[test]
fn unterminated_block_is_rejected() {
    assert_eq!(syntax_error("while (x) { x = 1;").token, Token::While);
}

#[test]
fn syntax_error_message() {
    assert_eq!(syntax_error("x = = 1;").to_string(),
               "Error on line 1: Unexpected token 'x'.");
}

#[test]
fn printed_program_parses_back_to_the_same_tree() {
    let programs = ["x = 1 + 2 * (3 - -4);",
                    r#"greeting = "say \"hi\"\n\tand \\ leave";"#,
                    "def fib(n) { if (n < 2) { n; } else { fib(n - 1) + fib(n - 2); } } fib(10);",
                    "i = 0; while (i < 10) { if (i == 5) { print(i); } else if (i != 3) { } i = i + 1; }",
                    "a < b == c >= d; f(); g(1, null, true, false);",
                    "def f() { }"];

    for program in programs {
        let ast = parse_source(program);
        let printed = ast.to_string();
        let reparsed = parse_source(&printed);
        assert_eq!(reparsed, ast, "round trip of {program:?} through {printed:?}");
    }
}

#[test]
fn deeply_nested_parentheses_parse() {
    let depth = 10_000;
    let source = format!("{}1{};", "(".repeat(depth), ")".repeat(depth));
    let ast = parse_source(&source);

    assert!(matches!(ast.statements.as_slice(), [Statement::Expression(Expr::Int(1))]));
}

#[test]
fn deeply_nested_negation_parses() {
    let depth = 10_000;
    let ast = parse_source(&format!("{}1;", "-".repeat(depth)));
    let [Statement::Expression(root)] = ast.statements.as_slice() else {
        panic!("expected one expression statement");
    };

    let mut expr = root;
    let mut negations = 0;
    while let Expr::Binary { op: Subtract, left, right } = expr {
        assert_eq!(**left, int(0));
        negations += 1;
        expr = &**right;
    }
    assert_eq!(negations, depth);
    assert_eq!(*expr, int(1));
}

#[test]
fn unclosed_deep_nesting_is_a_syntax_error() {
    let source = format!("{}1;", "(".repeat(10_000));
    assert_eq!(syntax_error(&source).token, Token::LParen);
}
