use std::collections::HashSet;

use thunklang::env::EnvRef;
use thunklang::error::ThunkResult;
use thunklang::interpreter::{interpret, InterpretResult};
use thunklang::parser::parse_repl_line;
use thunklang::value::Value;

/// Lexes, parses and evaluates `source` against a fresh environment.
pub fn run(source: &str) -> ThunkResult<InterpretResult> {
    let mut loaded = HashSet::new();
    let program = parse_repl_line(source, &mut loaded)?;
    interpret(&program, None)
}

/// Like `run`, but against an already-seeded environment (for multi-entry
/// scenarios, mirroring how the REPL feeds each accepted entry back in).
pub fn run_in(source: &str, env: EnvRef) -> ThunkResult<InterpretResult> {
    let mut loaded = HashSet::new();
    let program = parse_repl_line(source, &mut loaded)?;
    interpret(&program, Some(env))
}

pub fn as_float(value: &Value) -> f64 {
    value.as_float().expect("expected a Float value")
}
