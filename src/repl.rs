//! Interactive session for sprig.

use std::{path::PathBuf, process::ExitCode};

use rustyline::{DefaultEditor, Result as RlResult, error::ReadlineError};
use sprig::interpreter::environment::{Environment, Function};
use tracing::debug;

use crate::{Mode, process};

const PROMPT: &str = "> ";
const HISTORY_FILE: &str = ".sprig_history";

/// Runs the REPL until the user quits, then reports how it ended.
pub fn run(mode: Mode, env: Environment) -> ExitCode {
    let result = Repl::new(mode, env).and_then(|mut repl| repl.run());
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        },
    }
}

/// REPL state
struct Repl {
    editor:       DefaultEditor,
    env:          Environment,
    mode:         Mode,
    history_path: Option<PathBuf>,
}

impl Repl {
    fn new(mode: Mode, env: Environment) -> RlResult<Self> {
        let mut editor = DefaultEditor::new()?;
        let history_path = home_dir().map(|home| home.join(HISTORY_FILE));

        if let Some(path) = &history_path
           && let Err(err) = editor.load_history(path)
        {
            debug!(%err, "no history loaded");
        }

        Ok(Self { editor,
                  env,
                  mode,
                  history_path })
    }

    fn run(&mut self) -> RlResult<()> {
        println!("sprig {}", env!("CARGO_PKG_VERSION"));
        println!("Type :help for help, :quit to exit.\n");

        loop {
            match self.editor.readline(PROMPT) {
                Ok(line) => {
                    let line = line.trim();
                    if line.is_empty() {
                        continue;
                    }
                    self.editor.add_history_entry(line)?;

                    if line.starts_with(':') {
                        if self.handle_command(line) {
                            break;
                        }
                        continue;
                    }
                    self.eval_input(line);
                },
                Err(ReadlineError::Interrupted) => {
                    println!("^C");
                },
                Err(ReadlineError::Eof) => break,
                Err(err) => return Err(err),
            }
        }

        if let Some(path) = &self.history_path
           && let Err(err) = self.editor.save_history(path)
        {
            debug!(%err, "history not saved");
        }
        Ok(())
    }

    /// Handles a `:` command. Returns `true` when the session should end.
    fn handle_command(&self, cmd: &str) -> bool {
        match cmd {
            ":quit" | ":q" => true,
            ":help" | ":h" => {
                print_help();
                false
            },
            ":env" => {
                self.print_env();
                false
            },
            _ => {
                println!("Unknown command: {cmd}");
                println!("Type :help for help.");
                false
            },
        }
    }

    /// Runs one line. A successful evaluation becomes the new environment;
    /// an error is reported and the previous environment stays.
    fn eval_input(&mut self, line: &str) {
        match process(line, self.mode, &self.env, true) {
            Ok(env) => self.env = env,
            Err(err) => eprintln!("{err}"),
        }
    }

    fn print_env(&self) {
        let mut variables: Vec<_> = self.env.variables().collect();
        variables.sort_by(|a, b| a.0.cmp(b.0));
        for (name, value) in variables {
            println!("  {name} = {value}");
        }

        let mut functions: Vec<_> = self.env.functions().collect();
        functions.sort_by(|a, b| a.0.cmp(b.0));
        for (name, function) in functions {
            let kind = match function {
                Function::Defined { .. } => "defined",
                Function::Embedded { .. } => "embedded",
            };
            println!("  {name}/{} ({kind})", function.arity());
        }
    }
}

fn print_help() {
    println!("Commands:");
    println!("  :help, :h   Show this help");
    println!("  :env        List variables and functions");
    println!("  :quit, :q   Exit the REPL");
    println!();
    println!("Every line is a program, for example:");
    println!("  x = 40 + 2;");
    println!("  def fib(n) {{ if (n < 2) {{ n; }} else {{ fib(n - 1) + fib(n - 2); }} }}");
    println!("  print(fib(10));");
}

fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME").or_else(|| std::env::var_os("USERPROFILE"))
                            .map(PathBuf::from)
}
