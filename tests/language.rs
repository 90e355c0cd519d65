use std::{fs, path::Path};

use sprig::{
    interpreter::{environment::Environment, value::core::Value},
    run,
};
use walkdir::WalkDir;

/// What a script under `tests/scripts` declares in its first line.
enum Expectation {
    /// `// expect: <value>`, the displayed value of the last statement.
    Value(String),
    /// `// error: <message>`, the displayed error.
    Error(String),
}

fn expectation(content: &str) -> Option<Expectation> {
    let first = content.lines().next()?.trim();
    if let Some(value) = first.strip_prefix("// expect:") {
        return Some(Expectation::Value(value.trim().to_string()));
    }
    first.strip_prefix("// error:")
         .map(|message| Expectation::Error(message.trim().to_string()))
}

#[test]
fn scripts_produce_their_expected_results() {
    let mut count = 0;
    let root = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/scripts");

    for entry in
        WalkDir::new(&root).into_iter()
                           .filter_map(Result::ok)
                           .filter(|e| e.path().extension().is_some_and(|ext| ext == "sprig"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));
        let expected = expectation(&content).unwrap_or_else(|| {
                                                panic!("{path:?} has no expect or error header")
                                            });
        count += 1;

        match (run(&content, &Environment::with_prelude()), expected) {
            (Ok((value, _)), Expectation::Value(want)) => {
                assert_eq!(value.to_string(), want, "wrong result for {path:?}");
            },
            (Err(e), Expectation::Error(want)) => {
                assert_eq!(e.to_string(), want, "wrong error for {path:?}");
            },
            (Ok((value, _)), Expectation::Error(want)) => {
                panic!("{path:?} evaluated to {value} but should fail with: {want}")
            },
            (Err(e), Expectation::Value(want)) => {
                panic!("{path:?} failed with {e} but should evaluate to {want}")
            },
        }
    }

    assert!(count > 0, "No scripts found in {root:?}");
}

fn assert_value(src: &str, expected: Value) {
    match run(src, &Environment::with_prelude()) {
        Ok((value, _)) => assert_eq!(value, expected, "script: {src}"),
        Err(e) => panic!("Script failed: {e}"),
    }
}

fn assert_success(src: &str) {
    if let Err(e) = run(src, &Environment::with_prelude()) {
        panic!("Script failed: {e}");
    }
}

fn assert_failure(src: &str) {
    if run(src, &Environment::with_prelude()).is_ok() {
        panic!("Script succeeded but was expected to fail")
    }
}

#[test]
fn assignment_and_basic_arithmetic() {
    assert_value("x = 1 + 2; x == 3;", Value::Bool(true));
    assert_value("x = 7 * 9; x == 63;", Value::Bool(true));
    assert_value("x = 8 - 5; x == 3;", Value::Bool(true));
    assert_value("x = 10 / 2; x == 5;", Value::Bool(true));
}

#[test]
fn reassignment_uses_the_previous_value() {
    assert_value("x = 1; x = x + 1; x = x * 10; x;", Value::Int(20));
}

#[test]
fn whitespace_and_comments_are_insignificant() {
    assert_value("x=1;y=2;x+y;", Value::Int(3));
    assert_value("x\n=\n1\n;\n/* sum */ x // done\n;", Value::Int(1));
}

#[test]
fn nested_control_flow() {
    let src = "
        count = 0;
        i = 0;
        while (i < 10) {
            j = 0;
            while (j < i) {
                if (j == 2) { count = count + 1; }
                j = j + 1;
            }
            i = i + 1;
        }
        count;
    ";
    assert_value(src, Value::Int(7));
}

#[test]
fn functions_returning_strings_and_booleans() {
    assert_value(r#"def name() { "sprig"; } name() + "!";"#, Value::from("sprig!"));
    assert_value("def positive(n) { n > 0; } positive(3);", Value::Bool(true));
    assert_value("def nothing() { } nothing();", Value::Null);
}

#[test]
fn print_accepts_any_value() {
    assert_success(r#"print(1); print("two"); print(true); print(null);"#);
}

#[test]
fn invalid_scripts_fail() {
    assert_failure("x = ;");
    assert_failure("1 + ;");
    assert_failure("x = 1 $ 2;");
    assert_failure("if (true) { 1; ");
    assert_failure("def f() { 1; } f(1);");
    assert_failure("undefined();");
    assert_failure("\"a\" * 2;");
    assert_failure("break;");
}
