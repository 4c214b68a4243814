//! Interactive REPL: a read/evaluate/print loop with a persistent
//! environment, a command table, and a multi-line continuation buffer.
//! Lives in the binary rather than the library crate, since it's terminal
//! UI rather than interpreter semantics.

use std::collections::HashSet;
use std::io::{self, Write};

use thunklang::diagnostics;
use thunklang::env::{Env, EnvRef};
use thunklang::error::ThunkError;
use thunklang::interpreter::interpret;
use thunklang::parser::parse_repl_line;
use thunklang::repl_support::{needs_continuation, strip_continuation_marker};

/// Prints an error the same way `main.rs`'s batch mode does: through
/// `diagnostics::report_error` when a location is available, `eprintln!`
/// otherwise. The REPL always resumes afterwards with its environment
/// untouched.
fn report(e: &ThunkError) {
    match e.loc() {
        Some(loc) => diagnostics::report_error(loc, e.message()),
        None => eprintln!("{e}"),
    }
}

const HELP: &str = "\
:h, :help, :?        show this message
:q, :quit, :exit     leave the REPL
:c, :clear, :cls      clear the screen
:r, :reset           discard the current environment and start fresh
:e, :env             list bound names and their current values
:b, :builtins        list every native function and its signature
:d, :debug           toggle dumping tokens/AST before evaluating an entry
:force               toggle forcing thunks before `:env` prints them
:l, :load <path>      evaluate a file and merge its bindings in
a trailing ` continues an entry onto the next line";

pub fn run(debug: bool) {
    let mut env = Env::root();
    thunklang::builtins::install(&env);

    let mut debug = debug;
    let mut force_on_env = false;
    let mut buffer = String::new();

    println!("thunklang REPL -- :help for commands, :quit to leave");

    loop {
        print_prompt(&buffer);

        let mut line = String::new();
        if io::stdin().read_line(&mut line).unwrap_or(0) == 0 {
            println!();
            break;
        }

        if buffer.is_empty() {
            if let Some(cmd) = line.trim().strip_prefix(':') {
                match handle_command(cmd, &mut env, &mut debug, &mut force_on_env) {
                    Command::Continue => continue,
                    Command::Quit => break,
                }
            }
        }

        if needs_continuation(&line) {
            buffer.push_str(strip_continuation_marker(&line));
            buffer.push('\n');
            continue;
        }

        buffer.push_str(&line);
        let entry = std::mem::take(&mut buffer);
        evaluate_entry(&entry, &mut env, debug);
    }
}

enum Command {
    Continue,
    Quit,
}

fn handle_command(cmd: &str, env: &mut EnvRef, debug: &mut bool, force_on_env: &mut bool) -> Command {
    let mut parts = cmd.trim().splitn(2, char::is_whitespace);
    let name = parts.next().unwrap_or("");
    let rest = parts.next().unwrap_or("").trim();

    match name {
        "q" | "quit" | "exit" => return Command::Quit,
        "h" | "help" | "?" => println!("{HELP}"),
        "c" | "clear" | "cls" => print!("\x1B[2J\x1B[1;1H"),
        "r" | "reset" => {
            *env = Env::root();
            thunklang::builtins::install(&*env);
            println!("environment reset");
        }
        "d" | "debug" => {
            *debug = !*debug;
            println!("debug dumping {}", if *debug { "on" } else { "off" });
        }
        "force" => {
            *force_on_env = !*force_on_env;
            println!("forcing before :env dump {}", if *force_on_env { "on" } else { "off" });
        }
        "e" | "env" => {
            for (name, printable) in env.to_vector(*force_on_env) {
                println!("{name} = {printable}");
            }
        }
        "b" | "builtins" => {
            for (name, signature) in thunklang::builtins::signatures() {
                println!("{name} : {signature}");
            }
        }
        "l" | "load" => {
            if rest.is_empty() {
                eprintln!(":load requires a file path");
            } else {
                load_file(rest, env);
            }
        }
        other => eprintln!("unknown command ':{other}', try :help"),
    }
    Command::Continue
}

fn load_file(path: &str, env: &mut EnvRef) {
    let mut loaded = HashSet::new();
    let program = match thunklang::parser::load_program(std::path::Path::new(path), &mut loaded) {
        Ok(program) => program,
        Err(e) => {
            report(&e);
            return;
        }
    };

    match interpret(&program, Some(Env::child(&*env))) {
        Ok(result) => {
            for (name, thunk) in result.env.local_bindings() {
                env.bind(name, thunk);
            }
            println!("loaded '{path}'");
        }
        Err(e) => report(&e),
    }
}

fn evaluate_entry(source: &str, env: &mut EnvRef, debug: bool) {
    if source.trim().is_empty() {
        return;
    }

    let mut loaded = HashSet::new();
    let program = match parse_repl_line(source, &mut loaded) {
        Ok(program) => program,
        Err(e) => {
            report(&e);
            return;
        }
    };

    if debug {
        diagnostics::debug(format!("AST:\n{}", thunklang::ast::print_program(&program)));
    }

    match interpret(&program, Some(env.clone())) {
        Ok(result) => {
            *env = result.env;
            println!("{}", result.last_value);
            if result.result_options.side_effects {
                io::stdout().flush().ok();
            }
        }
        Err(e) => report(&e),
    }
}

/// The continuation prompt widens with unmatched `(` depth, and deepens by
/// one more level when the last entered line ends in `.` (inside a lambda
/// body). This is prompt-indentation bookkeeping, not language semantics, so
/// it stays here rather than in `repl_support`.
fn print_prompt(buffer: &str) {
    if buffer.is_empty() {
        print!("thunk> ");
    } else {
        let depth = prompt_depth(buffer);
        print!("{}", "  ".repeat(depth));
        print!("...> ");
    }
    io::stdout().flush().ok();
}

fn prompt_depth(buffer: &str) -> usize {
    let mut depth: i64 = 0;
    for c in buffer.chars() {
        match c {
            '(' => depth += 1,
            ')' => depth -= 1,
            _ => {}
        }
    }
    let ends_in_dot = buffer.trim_end().ends_with('.');
    (depth.max(0) as usize) + usize::from(ends_in_dot)
}
