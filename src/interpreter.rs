/// The environment module holds the bindings visible to evaluation.
///
/// An environment has two namespaces, variables and functions, and is
/// persistent: binding a name produces a new environment and leaves the old one
/// intact.
///
/// # Responsibilities
/// - Stores variables and defined or embedded functions.
/// - Builds the fresh frame a defined function body runs in.
/// - Provides the default prelude with `print`.
pub mod environment;
/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator traverses the AST, evaluates expressions and statements and
/// threads the environment from each step to the next. It is the core
/// execution engine of the interpreter.
///
/// # Responsibilities
/// - Evaluates AST nodes, performing all supported operations.
/// - Handles variables, functions, and control flow.
/// - Reports runtime errors such as type mismatches or unknown functions.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer (tokenizer) reads the raw source text and produces a stream of
/// tokens, each corresponding to meaningful language elements such as numbers,
/// identifiers, operators, delimiters, and keywords. This is the first stage of
/// interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with their line.
/// - Handles integer and string literals, identifiers, and operators.
/// - Marks unknown input so it can be reported before parsing.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser processes the token stream produced by the lexer and constructs
/// an AST that represents the syntactic structure of expressions and
/// statements. Alternatives are tried in a fixed order by backtracking.
///
/// # Responsibilities
/// - Converts tokens into structured AST nodes (expressions, statements).
/// - Applies operator precedence and associativity.
/// - Reports the token at which no statement could be derived.
pub mod parser;
/// The value module defines the runtime data types for evaluation.
///
/// # Responsibilities
/// - Defines the `Value` enum and its truthiness rule.
/// - Defines `Native`, the host side of embedded function calls.
pub mod value;
