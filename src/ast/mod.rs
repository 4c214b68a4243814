//! AST types, one file per node kind; `mod.rs` re-exports each node's own
//! file.

mod definition;
mod expression;
mod program;
mod types;

pub use definition::*;
pub use expression::*;
pub use program::*;
pub use types::*;
