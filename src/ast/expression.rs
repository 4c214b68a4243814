use std::fmt::{self, Display};
use std::rc::Rc;

use crate::ast::Type;
use crate::builtins::escape::escape;
use crate::loc::Loc;

/// Shared handle to an expression. Lambda bodies and application arguments
/// are kept behind `Rc` so a thunk can simply clone the `Rc` of whatever
/// expression it defers — both REPL-entered and file-loaded ASTs stay alive
/// for exactly as long as any thunk or closure still references them, with
/// no separate ownership mode to track.
pub type ExprRef = Rc<Expression>;

/// An expression node. Callees of `Apply` are always bare identifiers, never
/// arbitrary expressions.
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    Ident {
        name: String,
        loc: Loc,
    },
    StrLit {
        value: String,
        loc: Loc,
    },
    FloatLit {
        value: f64,
        loc: Loc,
    },
    Lambda {
        param: String,
        param_type: Type,
        body: ExprRef,
        loc: Loc,
    },
    Apply {
        callee: String,
        callee_loc: Loc,
        args: Vec<ExprRef>,
        loc: Loc,
    },
}

impl Expression {
    pub fn loc(&self) -> &Loc {
        match self {
            Expression::Ident { loc, .. }
            | Expression::StrLit { loc, .. }
            | Expression::FloatLit { loc, .. }
            | Expression::Lambda { loc, .. }
            | Expression::Apply { loc, .. } => loc,
        }
    }
}

/// Source-reproducing pretty-printer: formatting an `Expression` yields
/// concrete syntax that re-parses to a textually equivalent tree (modulo
/// whitespace), the same way the original's `Expression::print` walks
/// `IdenAstNode`/`StringAstNode`/`FloatAstNode`/`LambdaExpression`/
/// `FunctionApplication`.
impl Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expression::Ident { name, .. } => write!(f, "{name}"),
            Expression::StrLit { value, .. } => write!(f, "\"{}\"", escape(value)),
            Expression::FloatLit { value, .. } => write!(f, "{value}"),
            Expression::Lambda { param, param_type, body, .. } => {
                write!(f, "\\{param}: {param_type}.{body}")
            }
            Expression::Apply { callee, args, .. } => {
                write!(f, "({callee}")?;
                for arg in args {
                    write!(f, " {arg}")?;
                }
                write!(f, ")")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{Primitive, Type};

    #[test]
    fn prints_a_lambda_and_application_as_concrete_syntax() {
        let loc = Loc::repl(1, 1);
        let body = Rc::new(Expression::Apply {
            callee: "mul".into(),
            callee_loc: loc.clone(),
            args: vec![
                Rc::new(Expression::Ident { name: "x".into(), loc: loc.clone() }),
                Rc::new(Expression::Ident { name: "x".into(), loc: loc.clone() }),
            ],
            loc: loc.clone(),
        });
        let lambda = Expression::Lambda {
            param: "x".into(),
            param_type: Type::Primitive(Primitive::Float),
            body,
            loc: loc.clone(),
        };
        assert_eq!(lambda.to_string(), "\\x: Float.(mul x x)");
    }

    #[test]
    fn quotes_and_escapes_string_literals() {
        let lit = Expression::StrLit {
            value: "a\nb".into(),
            loc: Loc::repl(1, 1),
        };
        assert_eq!(lit.to_string(), "\"a\\nb\"");
    }
}
