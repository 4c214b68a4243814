use std::fmt::{self, Display};

use crate::ast::{ExprRef, Type};
use crate::loc::Loc;

/// A top-level named binding: `name : type = body`.
#[derive(Debug, Clone, PartialEq)]
pub struct Definition {
    pub name: String,
    pub declared_type: Type,
    pub body: ExprRef,
    pub loc: Loc,
}

impl Display for Definition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} = {}", self.name, self.declared_type, self.body)
    }
}
