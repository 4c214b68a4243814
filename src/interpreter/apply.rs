//! The curried application engine, unifying single-argument user closures,
//! fixed-arity and variadic native functions, partial application, and
//! "currying feedback" (an intermediate function value produced
//! mid-application becomes the new callee for the remaining args).

use crate::env::EnvRef;
use crate::error::{RuntimeError, ThunkResult};
use crate::loc::Loc;
use crate::thunk::{Thunk, ThunkRef};
use crate::value::{Arity, ResultOptions, Value};

use super::eval_expr;

pub fn apply(
    fn_value: Value,
    mut work: Vec<ThunkRef>,
    call_site_env: EnvRef,
    call_loc: Loc,
) -> ThunkResult<(Value, ResultOptions)> {
    let mut frames = vec![fn_value];
    let mut idx = 0usize;
    let mut options = ResultOptions::default();

    loop {
        let cur = frames.last().cloned().expect("frames never empty mid-loop");

        if idx >= work.len() {
            if let Value::NativeV(native) = &cur {
                if matches!(native.arity, Arity::Fixed(0) | Arity::Variadic) {
                    let (value, opts) = (native.call)(&[], &call_site_env, &call_loc)?;
                    super::record_effects(opts);
                    return Ok((value, options.merge(opts)));
                }
            }
            return Ok((cur, options));
        }

        let result = match &cur {
            Value::ClosureV { param, body, env } => {
                let arg = work[idx].clone();
                idx += 1;
                let child = crate::env::Env::child(env);
                child.bind(param.clone(), arg);
                eval_expr(body, &child)?
            }
            Value::NativeV(native) => {
                let slice = match native.arity {
                    Arity::Variadic => {
                        let slice = work[idx..].to_vec();
                        idx = work.len();
                        slice
                    }
                    Arity::Fixed(n) => {
                        if work.len() - idx < n {
                            return Err(RuntimeError::new(
                                format!(
                                    "native function {} expects {} argument(s), found {}",
                                    native.name,
                                    n,
                                    work.len() - idx
                                ),
                                call_loc,
                            )
                            .into());
                        }
                        let slice = work[idx..idx + n].to_vec();
                        idx += n;
                        slice
                    }
                };
                let (value, opts) = (native.call)(&slice, &call_site_env, &call_loc)?;
                super::record_effects(opts);
                options = options.merge(opts);
                value
            }
            _ => {
                return Err(RuntimeError::new("trying to apply non-function value", call_loc).into());
            }
        };

        if result.is_callable() {
            *frames.last_mut().expect("frames never empty mid-loop") = result;
            continue;
        }

        frames.pop();
        if frames.is_empty() {
            if idx == work.len() {
                return Ok((result, options));
            }
            return Err(RuntimeError::new(
                "too many arguments applied to non-function value",
                call_loc,
            )
            .into());
        }

        work.insert(idx, Thunk::ready(result));
    }
}
