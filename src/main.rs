mod repl;

use std::{fs, io, path::PathBuf, process::ExitCode};

use clap::{Parser, ValueEnum};
use sprig::{
    Error,
    interpreter::{
        environment::Environment,
        evaluator::evaluate,
        lexer::{check_tokens, tokenize},
        parser::parse,
    },
};
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Environment variable holding the log filter, e.g. `SPRIG_LOG=debug`.
const LOG_ENV: &str = "SPRIG_LOG";

/// How far each input is taken through the pipeline.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Mode {
    /// Only tokenize, printing the tokens.
    Lex,
    /// Tokenize and parse, printing the syntax tree.
    Parse,
    /// Tokenize, parse and evaluate.
    Evaluate,
}

/// sprig is a small dynamically-typed scripting language.
///
/// Runs a script file, an inline script, or without either an interactive
/// session.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// The script file to run. Starts the REPL when omitted.
    file: Option<PathBuf>,

    /// Runs the given source instead of a file.
    #[arg(short, long, value_name = "SOURCE", conflicts_with = "file")]
    eval: Option<String>,

    /// Stops after lexing or parsing instead of evaluating.
    #[arg(short, long, value_enum, default_value_t = Mode::Evaluate)]
    mode: Mode,

    /// Prints the value of the last statement of a file or inline script.
    #[arg(short, long)]
    print_result: bool,
}

fn main() -> ExitCode {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry().with(fmt::layer().with_writer(io::stderr))
                                  .with(filter)
                                  .init();

    let args = Args::parse();
    let env = Environment::with_prelude();

    let script = match (args.eval, &args.file) {
        (Some(source), _) => source,
        (None, Some(path)) => match fs::read_to_string(path) {
            Ok(source) => source,
            Err(e) => {
                eprintln!("Failed to read the input file '{}': {e}", path.display());
                return ExitCode::FAILURE;
            },
        },
        (None, None) => return repl::run(args.mode, env),
    };

    info!(mode = ?args.mode, "running script");
    match process(&script, args.mode, &env, args.print_result) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        },
    }
}

/// Takes one input through the pipeline up to `mode` and prints what that
/// mode shows.
///
/// Returns the environment to continue with. Only evaluation produces a new
/// one; lexing and parsing hand back `env` unchanged.
fn process(source: &str,
           mode: Mode,
           env: &Environment,
           print_result: bool)
           -> Result<Environment, Error> {
    let tokens = tokenize(source);
    check_tokens(&tokens)?;
    if mode == Mode::Lex {
        for (token, line) in &tokens {
            println!("{line:>4}  {token:?}");
        }
        return Ok(env.clone());
    }

    let program = parse(&tokens)?;
    if mode == Mode::Parse {
        println!("{program:#?}");
        println!("{program}");
        return Ok(env.clone());
    }

    let (value, env) = evaluate(&program, env)?;
    if print_result {
        println!("{value}");
    }
    Ok(env)
}
