//! Arithmetic/comparison, lazy conditional and scalar-parsing builtins.

use std::rc::Rc;

use crate::value::{Arity, NativeFunction, ResultOptions, Value};

use super::helpers::{expect_float, expect_str, native};

fn binop(
    name: &'static str,
    f: fn(f64, f64) -> f64,
) -> Rc<NativeFunction> {
    let signature = "Float -> Float -> Float";
    native(
        name,
        Arity::Fixed(2),
        signature,
        Rc::new(move |args, _env, loc| {
            let a = args[0].force()?;
            let b = args[1].force()?;
            let a = expect_float(name, signature, &a, loc)?;
            let b = expect_float(name, signature, &b, loc)?;
            Ok((Value::FloatV(f(a, b)), ResultOptions::default()))
        }),
    )
}

pub fn make_add() -> Rc<NativeFunction> {
    binop("add", |a, b| a + b)
}

pub fn make_sub() -> Rc<NativeFunction> {
    binop("sub", |a, b| a - b)
}

pub fn make_mul() -> Rc<NativeFunction> {
    binop("mul", |a, b| a * b)
}

pub fn make_cmp() -> Rc<NativeFunction> {
    let name = "cmp";
    let signature = "Float -> Float -> Float";
    native(
        name,
        Arity::Fixed(2),
        signature,
        Rc::new(move |args, _env, loc| {
            let a = args[0].force()?;
            let b = args[1].force()?;
            let a = expect_float(name, signature, &a, loc)?;
            let b = expect_float(name, signature, &b, loc)?;
            let result = if a < b {
                -1.0
            } else if a > b {
                1.0
            } else {
                0.0
            };
            Ok((Value::FloatV(result), ResultOptions::default()))
        }),
    )
}

/// Lazy three-way conditional: only the selected branch is forced. `0.0`
/// selects the second argument, anything else the third.
pub fn make_if_zero() -> Rc<NativeFunction> {
    let name = "if_zero";
    let signature = "Float -> Any -> Any -> Any";
    native(
        name,
        Arity::Fixed(3),
        signature,
        Rc::new(move |args, _env, loc| {
            let cond = args[0].force()?;
            let cond = expect_float(name, signature, &cond, loc)?;
            let branch = if cond == 0.0 {
                args[1].force()?
            } else {
                args[2].force()?
            };
            Ok((branch, ResultOptions::default()))
        }),
    )
}

pub fn make_parse_float() -> Rc<NativeFunction> {
    let name = "parse_float";
    let signature = "Str -> Float";
    native(
        name,
        Arity::Fixed(1),
        signature,
        Rc::new(move |args, _env, loc| {
            let arg = args[0].force()?;
            let s = expect_str(name, signature, &arg, loc)?;
            let value: f64 = s.trim().parse().map_err(|_| {
                crate::error::RuntimeError::new(
                    format!("{name} could not parse string \"{}\"", super::escape::escape(s)),
                    loc.clone(),
                )
            })?;
            if !value.is_finite() {
                return Err(crate::error::RuntimeError::new(
                    format!("{name} out of range for string \"{}\"", super::escape::escape(s)),
                    loc.clone(),
                )
                .into());
            }
            Ok((Value::FloatV(value), ResultOptions::default()))
        }),
    )
}

/// Variadic: prints every argument's printable form with no separator,
/// forcing them left-to-right, and reports a side effect.
pub fn make_print() -> Rc<NativeFunction> {
    native(
        "print",
        Arity::Variadic,
        "Any... -> Float",
        Rc::new(move |args, _env, _loc| {
            for arg in args {
                let value = arg.force()?;
                print!("{value}");
            }
            Ok((Value::FloatV(0.0), ResultOptions { side_effects: true }))
        }),
    )
}
