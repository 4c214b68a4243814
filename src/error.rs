//! Error types shared across the lexer, parser and evaluator.
//!
//! Each phase defines its own small error struct, and this module ties them
//! together into one `ThunkError` so that `main`/the REPL only need to match
//! on a single type at the boundary.

use std::fmt::{self, Display};
use std::io;

use crate::loc::Loc;

/// Failure during lexing: unexpected characters, unbalanced quotes, unreadable files.
#[derive(Debug)]
pub struct LexError {
    pub message: String,
    pub loc: Loc,
}

impl Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.loc, self.message)
    }
}

impl std::error::Error for LexError {}

/// Failure during parsing: grammar mismatches, malformed `use` directives.
#[derive(Debug)]
pub struct ParseError {
    pub message: String,
    pub loc: Loc,
}

impl Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.loc, self.message)
    }
}

impl std::error::Error for ParseError {}

impl ParseError {
    pub fn expected(what: &str, got: &str, loc: Loc) -> Self {
        ParseError {
            message: format!("syntax error: expected {what}, got {got}"),
            loc,
        }
    }
}

/// Failure during evaluation: unbound names, arity mismatches, builtin misuse.
#[derive(Debug)]
pub struct RuntimeError {
    pub message: String,
    pub loc: Loc,
}

impl Display for RuntimeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: runtime error: {}", self.loc, self.message)
    }
}

impl std::error::Error for RuntimeError {}

impl RuntimeError {
    pub fn new(message: impl Into<String>, loc: Loc) -> Self {
        RuntimeError {
            message: message.into(),
            loc,
        }
    }
}

/// The union of everything that can go wrong, propagated with `?` from the
/// lexer through to the top-level driver. In batch mode `main` turns an
/// `Err` into a nonzero exit; in REPL mode the outer loop catches it, prints
/// it, and resumes with the environment untouched.
#[derive(Debug)]
pub enum ThunkError {
    Io(io::Error),
    Lex(LexError),
    Parse(ParseError),
    Runtime(RuntimeError),
}

impl Display for ThunkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ThunkError::Io(e) => write!(f, "io error: {e}"),
            ThunkError::Lex(e) => write!(f, "{e}"),
            ThunkError::Parse(e) => write!(f, "{e}"),
            ThunkError::Runtime(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for ThunkError {}

impl ThunkError {
    /// The source location to blame, if this failure has one. `Io` failures
    /// (a missing file, a permission error) don't carry an AST/token
    /// position, so there is nothing to report beyond the message itself.
    pub fn loc(&self) -> Option<&Loc> {
        match self {
            ThunkError::Io(_) => None,
            ThunkError::Lex(e) => Some(&e.loc),
            ThunkError::Parse(e) => Some(&e.loc),
            ThunkError::Runtime(e) => Some(&e.loc),
        }
    }

    /// The error's message alone, without the `loc()` prefix `Display`
    /// includes — for callers (like `diagnostics::report_error`) that attach
    /// the location themselves.
    pub fn message(&self) -> String {
        match self {
            ThunkError::Io(e) => e.to_string(),
            ThunkError::Lex(e) => e.message.clone(),
            ThunkError::Parse(e) => e.message.clone(),
            ThunkError::Runtime(e) => e.message.clone(),
        }
    }
}

impl From<io::Error> for ThunkError {
    fn from(e: io::Error) -> Self {
        ThunkError::Io(e)
    }
}

impl From<LexError> for ThunkError {
    fn from(e: LexError) -> Self {
        ThunkError::Lex(e)
    }
}

impl From<ParseError> for ThunkError {
    fn from(e: ParseError) -> Self {
        ThunkError::Parse(e)
    }
}

impl From<RuntimeError> for ThunkError {
    fn from(e: RuntimeError) -> Self {
        ThunkError::Runtime(e)
    }
}

pub type ThunkResult<T> = Result<T, ThunkError>;
