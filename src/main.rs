//! `thunk` — the CLI entry point for `thunklang`. Combines the lexer,
//! parser and evaluator (the `thunklang` lib crate) with the command-line
//! and REPL surfaces: flag parsing, batch-mode execution, and logger setup.

mod repl;

use std::collections::HashSet;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::error;

use thunklang::diagnostics;
use thunklang::error::ThunkResult;
use thunklang::interpreter::{interpret, InterpretResult};
use thunklang::parser::load_program;

/// A small call-by-need interpreter for a curried, lambda-calculus-style
/// language.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Run a source file once and exit (batch mode).
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Start an interactive REPL with a persistent environment.
    #[arg(short, long)]
    repl: bool,

    /// Dump lexed tokens and the parsed AST before evaluating.
    #[arg(short, long)]
    debug: bool,
}

fn main() -> ExitCode {
    let args = Cli::parse();

    let level = if args.debug { log::Level::Debug } else { log::Level::Info };
    simple_logger::init_with_level(level).expect("logger already initialized");

    match (&args.file, args.repl) {
        (Some(file), _) => match run_file(file, args.debug) {
            Ok(_) => ExitCode::SUCCESS,
            Err(e) => {
                match e.loc() {
                    Some(loc) => diagnostics::report_error(loc, e.message()),
                    None => error!("{e}"),
                }
                ExitCode::FAILURE
            }
        },
        (None, true) => {
            repl::run(args.debug);
            ExitCode::SUCCESS
        }
        (None, false) => {
            print_usage();
            ExitCode::SUCCESS
        }
    }
}

fn run_file(path: &PathBuf, debug: bool) -> ThunkResult<InterpretResult> {
    if debug {
        let tokens = thunklang::lexer::lex_file(&std::fs::canonicalize(path)?)?;
        diagnostics::debug(format!("tokens:\n{tokens:#?}"));
    }

    let mut loaded = HashSet::new();
    let program = load_program(path, &mut loaded)?;

    if debug {
        diagnostics::debug(format!("AST:\n{}", thunklang::ast::print_program(&program)));
    }

    let result = interpret(&program, None)?;
    diagnostics::debug(format!("last value: {}", result.last_value));
    Ok(result)
}

fn print_usage() {
    println!("usage: thunk [options]");
    println!();
    println!("options:");
    println!("  -f, --file <filepath>   Run a source file once and exit");
    println!("  -r, --repl              Start an interactive REPL");
    println!("  -d, --debug             Dump tokens and the parsed AST");
    println!("  -h, --help              Show this help message and exit");
}
