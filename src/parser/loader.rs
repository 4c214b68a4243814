//! Resolves `use "path"` directives into spliced sub-programs.
//!
//! Already-loaded files are deduped by absolute path; the set of loaded
//! paths is threaded explicitly through every call rather than kept in a
//! `static`/`once_cell` global, so a resolver has no hidden process-wide
//! state to reset between independent runs.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::ast::{Node, Program};
use crate::error::{ParseError, ThunkError, ThunkResult};
use crate::lexer::Lexer;
use crate::loc::Loc;

use super::{Parser, RawNode};

/// Lexes and parses `path`, recursively resolving any `use` directives it
/// contains, and returns the fully spliced program. `loaded` is updated with
/// every absolute path visited so that re-`use`ing an already-loaded file (or
/// a cyclic chain of `use`s) is a no-op rather than an infinite loop.
pub fn load_program(path: &Path, loaded: &mut HashSet<PathBuf>) -> ThunkResult<Program> {
    let absolute = path.canonicalize().map_err(|e| {
        ThunkError::Io(std::io::Error::new(
            e.kind(),
            format!("could not open file '{}': {e}", path.display()),
        ))
    })?;

    if loaded.contains(&absolute) {
        return Ok(Vec::new());
    }
    loaded.insert(absolute.clone());

    let tokens = crate::lexer::lex_file(&absolute)?;
    let raw_nodes = Parser::new(&tokens).parse_program()?;
    resolve(raw_nodes, absolute.parent().unwrap_or(Path::new(".")), loaded)
}

/// Parses a single REPL line (no trailing file context) and resolves any
/// `use` directives relative to the current working directory.
pub fn parse_repl_line(source: &str, loaded: &mut HashSet<PathBuf>) -> ThunkResult<Program> {
    let tokens = Lexer::from_repl(source).lex()?;
    let raw_nodes = Parser::new(&tokens).parse_program()?;
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    resolve(raw_nodes, &cwd, loaded)
}

fn resolve(raw_nodes: Vec<RawNode>, base_dir: &Path, loaded: &mut HashSet<PathBuf>) -> ThunkResult<Program> {
    let mut program = Program::new();
    for node in raw_nodes {
        match node {
            RawNode::Expression(expr) => program.push(Node::Expression(expr)),
            RawNode::Def(def) => program.push(Node::Def(def)),
            RawNode::Use { path, loc } => {
                let included = resolve_use(&path, base_dir, &loc, loaded)?;
                program.extend(included);
            }
        }
    }
    Ok(program)
}

fn resolve_use(
    path: &str,
    base_dir: &Path,
    loc: &Loc,
    loaded: &mut HashSet<PathBuf>,
) -> ThunkResult<Program> {
    let candidate = Path::new(path);
    let resolved = if candidate.is_absolute() {
        candidate.to_path_buf()
    } else {
        base_dir.join(candidate)
    };

    if !resolved.exists() {
        return Err(ThunkError::Parse(ParseError {
            message: format!("syntax error: use target '{path}' does not exist"),
            loc: loc.clone(),
        }));
    }

    load_program(&resolved, loaded)
}
