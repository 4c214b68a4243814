//! Evaluator: `eval_expr` dispatches per expression kind, and delegates
//! applications to the curried `apply` engine.

pub(crate) mod apply;

use std::cell::Cell;

use crate::ast::{ExprRef, Expression, Node, Program};
use crate::env::{Env, EnvRef};
use crate::error::{RuntimeError, ThunkResult};
use crate::thunk::Thunk;
use crate::value::{ResultOptions, Value};

thread_local! {
    /// Native calls may happen arbitrarily deep inside a forced thunk's
    /// evaluation, several `eval_expr` frames below the top-level driver
    /// loop, so there is no single call stack frame to thread an
    /// accumulator through. The interpreter is single-threaded, so a
    /// thread-local accumulator behaves just like a process-global one
    /// would, without needing `unsafe` `static mut` state.
    static EFFECTS: Cell<ResultOptions> = Cell::new(ResultOptions::default());
}

/// Folds a native call's reported effects into the run-wide accumulator.
pub(crate) fn record_effects(opts: ResultOptions) {
    EFFECTS.with(|cell| cell.set(cell.get().merge(opts)));
}

/// Drains and resets the accumulator; called once per `interpret` run so a
/// REPL's aggregated flags describe only the entry that was just evaluated.
fn take_effects() -> ResultOptions {
    EFFECTS.with(|cell| cell.replace(ResultOptions::default()))
}

pub fn eval_expr(expr: &ExprRef, env: &EnvRef) -> ThunkResult<Value> {
    match expr.as_ref() {
        Expression::Ident { name, loc } => {
            let thunk = env
                .lookup(name)
                .ok_or_else(|| RuntimeError::new(format!("undefined identifier {name}"), loc.clone()))?;
            thunk.force()
        }
        Expression::StrLit { value, .. } => Ok(Value::StrV(value.clone())),
        Expression::FloatLit { value, .. } => Ok(Value::FloatV(*value)),
        Expression::Lambda { param, body, .. } => Ok(Value::ClosureV {
            param: param.clone(),
            body: body.clone(),
            env: env.clone(),
        }),
        Expression::Apply {
            callee,
            callee_loc,
            args,
            loc,
        } => {
            let callee_thunk = env.lookup(callee).ok_or_else(|| {
                RuntimeError::new(format!("undefined function {callee}"), callee_loc.clone())
            })?;
            let fn_value = callee_thunk.force()?;

            let arg_thunks = args
                .iter()
                .map(|arg| Thunk::pending(arg.clone(), env.clone(), arg.loc().clone()))
                .collect();

            let (value, _opts) = apply::apply(fn_value, arg_thunks, env.clone(), loc.clone())?;
            Ok(value)
        }
    }
}

/// The driver's output: the (possibly freshly-created) environment, the last
/// produced value, and the side effects accrued across the whole run.
pub struct InterpretResult {
    pub env: EnvRef,
    pub last_value: Value,
    pub result_options: ResultOptions,
}

/// Evaluates `program` node by node. If `env` is `None`, a fresh root
/// environment is created and seeded with builtins. Every AST node lives
/// behind an `Rc` (see `ast::ExprRef`), so there is no distinction between a
/// REPL entry's body and a file-loaded definition's body — a def's body
/// thunk simply clones the same `Rc` either way.
pub fn interpret(program: &Program, env: Option<EnvRef>) -> ThunkResult<InterpretResult> {
    let env = match env {
        Some(env) => env,
        None => {
            let root = Env::root();
            crate::builtins::install(&root);
            root
        }
    };

    let mut last_value = Value::FloatV(0.0);

    for node in program {
        match node {
            Node::Expression(expr) => {
                last_value = eval_expr(expr, &env)?;
            }
            Node::Def(def) => {
                // Bind a placeholder first, then point it at the body, so a
                // recursive reference to `def.name` inside the body (under a
                // lambda) resolves to this same thunk.
                let placeholder = Thunk::placeholder(def.loc.clone());
                env.bind(def.name.clone(), placeholder.clone());
                placeholder.set(def.body.clone(), env.clone(), def.loc.clone());
                last_value = Value::StrV(def.name.clone());
            }
        }
    }

    Ok(InterpretResult {
        env,
        last_value,
        result_options: take_effects(),
    })
}
