//! Shared plumbing for defining native functions: each builtin is a small
//! closure wrapped in a `NativeFunction`, registered once into the root
//! environment as an already-`Evaluated` thunk.

use std::rc::Rc;

use crate::error::{RuntimeError, ThunkError};
use crate::loc::Loc;
use crate::value::{Arity, NativeFunction, Value};

pub fn native(
    name: &'static str,
    arity: Arity,
    signature: &'static str,
    call: crate::value::NativeImpl,
) -> Rc<NativeFunction> {
    Rc::new(NativeFunction {
        arity,
        name,
        signature,
        call,
    })
}

/// Builds the "wrong arguments provided to native function X" error the
/// original emits for every mismatched argument (see any `make_*` in
/// `builtin_module_core.cpp` / `builtin_module_list.cpp` / `builtin_module_io.cpp`).
pub fn type_error(name: &str, signature: &str, expected: &str, got: &Value, loc: &Loc) -> ThunkError {
    RuntimeError::new(
        format!(
            "wrong arguments provided to native function {name}\n{name} signature: {signature}\nexpected <{expected}> got {got}"
        ),
        loc.clone(),
    )
    .into()
}

pub fn expect_float(name: &str, signature: &str, value: &Value, loc: &Loc) -> Result<f64, ThunkError> {
    value
        .as_float()
        .ok_or_else(|| type_error(name, signature, "Float", value, loc))
}

pub fn expect_str<'a>(
    name: &str,
    signature: &str,
    value: &'a Value,
    loc: &Loc,
) -> Result<&'a str, ThunkError> {
    value
        .as_str()
        .ok_or_else(|| type_error(name, signature, "Str", value, loc))
}

pub fn expect_list<'a>(
    name: &str,
    signature: &str,
    value: &'a Value,
    loc: &Loc,
) -> Result<&'a crate::value::ListRef, ThunkError> {
    value
        .as_list()
        .ok_or_else(|| type_error(name, signature, "List", value, loc))
}
