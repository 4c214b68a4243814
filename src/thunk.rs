//! Call-by-need memoization cells.

use std::cell::RefCell;
use std::rc::Rc;

use crate::ast::ExprRef;
use crate::env::EnvRef;
use crate::error::{RuntimeError, ThunkResult};
use crate::loc::Loc;
use crate::value::Value;

enum ThunkState {
    /// Not yet forced: a suspended expression plus the environment it closes
    /// over, and the location to blame if forcing it fails.
    Pending { expr: ExprRef, env: EnvRef, origin: Loc },
    /// Bound (via `Env::bind`) before its body is known, used for the
    /// placeholder-then-`set` pattern that makes recursive `def`s safe.
    Empty { origin: Loc },
    /// Forced exactly once; every later `force()` returns this clone.
    Evaluated(Value),
}

pub struct Thunk {
    state: RefCell<ThunkState>,
}

pub type ThunkRef = Rc<Thunk>;

impl Thunk {
    pub fn pending(expr: ExprRef, env: EnvRef, origin: Loc) -> ThunkRef {
        Rc::new(Thunk {
            state: RefCell::new(ThunkState::Pending { expr, env, origin }),
        })
    }

    pub fn placeholder(origin: Loc) -> ThunkRef {
        Rc::new(Thunk {
            state: RefCell::new(ThunkState::Empty { origin }),
        })
    }

    pub fn ready(value: Value) -> ThunkRef {
        Rc::new(Thunk {
            state: RefCell::new(ThunkState::Evaluated(value)),
        })
    }

    /// Rebinds a previously placeholder'd (or pending) thunk to a new body,
    /// clearing any cached value. Used to tie the knot for recursive `def`s:
    /// the name is bound to a placeholder first, then `set` points it at the
    /// definition's own body, whose environment already contains the binding.
    pub fn set(&self, expr: ExprRef, env: EnvRef, origin: Loc) {
        *self.state.borrow_mut() = ThunkState::Pending { expr, env, origin };
    }

    /// Memoizing force: evaluates the suspended expression at most once.
    pub fn force(&self) -> ThunkResult<Value> {
        if let ThunkState::Evaluated(value) = &*self.state.borrow() {
            return Ok(value.clone());
        }

        let (expr, env) = match &*self.state.borrow() {
            ThunkState::Evaluated(_) => unreachable!(),
            ThunkState::Empty { origin } => {
                return Err(RuntimeError::new("forcing empty thunk", origin.clone()).into())
            }
            ThunkState::Pending { expr, env, .. } => (expr.clone(), env.clone()),
        };

        let value = crate::interpreter::eval_expr(&expr, &env)?;
        *self.state.borrow_mut() = ThunkState::Evaluated(value.clone());
        Ok(value)
    }

    /// `true` once this thunk has been forced and cached a value.
    pub fn is_evaluated(&self) -> bool {
        matches!(&*self.state.borrow(), ThunkState::Evaluated(_))
    }

    /// Printable form for environment dumps: the cached value if present,
    /// else a placeholder string, never forcing.
    pub fn peek(&self) -> String {
        match &*self.state.borrow() {
            ThunkState::Evaluated(v) => v.to_string(),
            _ => "<thunk: unevaluated>".to_string(),
        }
    }
}
