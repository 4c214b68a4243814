//! Source locations attached to every token and AST node.

use std::fmt::{self, Display};
use std::rc::Rc;

/// A (file, row, column) triple. Rows and columns are 1-indexed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Loc {
    pub row: usize,
    pub col: usize,
    pub file: Rc<str>,
}

impl Loc {
    pub fn new(row: usize, col: usize, file: Rc<str>) -> Self {
        Self { row, col, file }
    }

    pub fn repl(row: usize, col: usize) -> Self {
        Self {
            row,
            col,
            file: Rc::from("<repl>"),
        }
    }
}

impl Display for Loc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.file, self.row, self.col)
    }
}
