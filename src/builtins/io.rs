//! String/IO builtins: reading a file whole, splitting it into lines, and
//! splitting on an arbitrary delimiter.

use std::fs;
use std::rc::Rc;

use crate::error::RuntimeError;
use crate::value::{Arity, ListRef, NativeFunction, ResultOptions, Value};

use super::helpers::{expect_str, native};

pub fn make_slurp_file() -> Rc<NativeFunction> {
    let name = "slurp_file";
    let signature = "Str -> Str";
    native(
        name,
        Arity::Fixed(1),
        signature,
        Rc::new(move |args, _env, loc| {
            let arg0 = args[0].force()?;
            let path = expect_str(name, signature, &arg0, loc)?;
            let bytes = fs::read(path)
                .map_err(|e| RuntimeError::new(format!("could not open file {path}: {e}"), loc.clone()))?;
            let contents = String::from_utf8_lossy(&bytes).into_owned();
            Ok((Value::StrV(contents), ResultOptions::default()))
        }),
    )
}

/// Normalizes `\r\n` and lone `\r` to `\n`, then splits on `\n`.
pub fn make_lines() -> Rc<NativeFunction> {
    let name = "lines";
    let signature = "Str -> List<Str>";
    native(
        name,
        Arity::Fixed(1),
        signature,
        Rc::new(move |args, _env, loc| {
            let arg0 = args[0].force()?;
            let input = expect_str(name, signature, &arg0, loc)?;

            let mut normalized = String::with_capacity(input.len());
            let mut chars = input.chars().peekable();
            while let Some(c) = chars.next() {
                if c == '\r' {
                    if chars.peek() == Some(&'\n') {
                        chars.next();
                    }
                    normalized.push('\n');
                } else {
                    normalized.push(c);
                }
            }

            let elements = normalized
                .split('\n')
                .map(|line| Value::StrV(line.to_string()))
                .collect::<Vec<_>>();
            Ok((
                Value::ListV(ListRef::new(std::cell::RefCell::new(elements))),
                ResultOptions::default(),
            ))
        }),
    )
}

pub fn make_split() -> Rc<NativeFunction> {
    let name = "split";
    let signature = "Str -> Str -> List<Str>";
    native(
        name,
        Arity::Fixed(2),
        signature,
        Rc::new(move |args, _env, loc| {
            let arg0 = args[0].force()?;
            let input = expect_str(name, signature, &arg0, loc)?;
            let arg1 = args[1].force()?;
            let delim = expect_str(name, signature, &arg1, loc)?;

            if delim.is_empty() {
                return Err(
                    RuntimeError::new(format!("delimiter for {name} cannot be empty"), loc.clone()).into(),
                );
            }

            let elements = input
                .split(delim)
                .map(|part| Value::StrV(part.to_string()))
                .collect::<Vec<_>>();
            Ok((
                Value::ListV(ListRef::new(std::cell::RefCell::new(elements))),
                ResultOptions::default(),
            ))
        }),
    )
}
