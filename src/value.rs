//! Runtime values produced by evaluation.

use std::cell::RefCell;
use std::fmt::{self, Display};
use std::rc::Rc;

use crate::ast::ExprRef;
use crate::env::EnvRef;
use crate::error::ThunkResult;
use crate::loc::Loc;
use crate::thunk::ThunkRef;

/// A native function's declared parameter count, or variadic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    Fixed(usize),
    Variadic,
}

/// A mutable, heap-allocated list. `list_append`/`list_remove` mutate this in
/// place and hand back the same reference — observable aliasing.
pub type ListRef = Rc<RefCell<Vec<Value>>>;

pub type NativeImpl =
    Rc<dyn Fn(&[ThunkRef], &EnvRef, &Loc) -> ThunkResult<(Value, ResultOptions)>>;

#[derive(Clone)]
pub struct NativeFunction {
    pub arity: Arity,
    pub name: &'static str,
    pub signature: &'static str,
    pub call: NativeImpl,
}

impl fmt::Debug for NativeFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NativeFunction").field("name", &self.name).finish()
    }
}

/// Side effects accrued by evaluating a native function call. Aggregating a
/// sequence of these is a boolean OR.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResultOptions {
    pub side_effects: bool,
}

impl ResultOptions {
    pub fn merge(self, other: ResultOptions) -> ResultOptions {
        ResultOptions {
            side_effects: self.side_effects || other.side_effects,
        }
    }
}

#[derive(Clone)]
pub enum Value {
    FloatV(f64),
    StrV(String),
    ClosureV {
        param: String,
        body: ExprRef,
        env: EnvRef,
    },
    NativeV(Rc<NativeFunction>),
    ListV(ListRef),
}

impl Value {
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::FloatV(_) => "Float",
            Value::StrV(_) => "Str",
            Value::ClosureV { .. } => "closure",
            Value::NativeV(_) => "native function",
            Value::ListV(_) => "List",
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::FloatV(f) => Some(*f),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::StrV(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&ListRef> {
        match self {
            Value::ListV(l) => Some(l),
            _ => None,
        }
    }

    pub fn is_callable(&self) -> bool {
        matches!(self, Value::ClosureV { .. } | Value::NativeV(_))
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::FloatV(v) => write!(f, "{v}"),
            Value::StrV(s) => write!(f, "{s}"),
            Value::ClosureV { param, .. } => write!(f, "<closure: \\{param}. ...>"),
            Value::NativeV(native) => write!(f, "<native fn: {}>", native.name),
            Value::ListV(list) => {
                write!(f, "[")?;
                for (i, v) in list.borrow().iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{v}")?;
                }
                write!(f, "]")
            }
        }
    }
}
