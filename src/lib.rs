//! `thunklang` — a call-by-need interpreter core for a small, curried,
//! lambda-calculus-style language. This crate exposes the lexer, parser,
//! evaluator and built-in registry as a library; the `thunk` binary
//! (`src/main.rs`) wires them into a CLI and REPL.

pub mod ast;
pub mod builtins;
pub mod diagnostics;
pub mod env;
pub mod error;
pub mod interpreter;
pub mod lexer;
pub mod loc;
pub mod parser;
pub mod repl_support;
pub mod thunk;
pub mod value;
