//! List primitives. `list_append`/`list_remove` mutate the `List` value in
//! place and hand back the same reference — observable aliasing.

use std::rc::Rc;

use crate::error::RuntimeError;
use crate::value::{Arity, ListRef, NativeFunction, ResultOptions, Value};

use super::helpers::{expect_float, expect_list, native};

pub fn make_list() -> Rc<NativeFunction> {
    native(
        "list",
        Arity::Variadic,
        "Any... -> List",
        Rc::new(move |args, _env, _loc| {
            let mut elements = Vec::with_capacity(args.len());
            for arg in args {
                elements.push(arg.force()?);
            }
            Ok((
                Value::ListV(ListRef::new(std::cell::RefCell::new(elements))),
                ResultOptions::default(),
            ))
        }),
    )
}

pub fn make_list_size() -> Rc<NativeFunction> {
    let name = "list_size";
    let signature = "List -> Float";
    native(
        name,
        Arity::Fixed(1),
        signature,
        Rc::new(move |args, _env, loc| {
            let arg0 = args[0].force()?;
            let list = expect_list(name, signature, &arg0, loc)?;
            Ok((
                Value::FloatV(list.borrow().len() as f64),
                ResultOptions::default(),
            ))
        }),
    )
}

/// Truncates a `Float` index to `usize`, bounds-checked against `len`.
fn index_in_bounds(index: f64, len: usize, loc: &crate::loc::Loc) -> Result<usize, crate::error::ThunkError> {
    let truncated = index.trunc();
    if truncated < 0.0 || truncated as usize >= len {
        return Err(RuntimeError::new(
            format!("list index out of range, index is {truncated}"),
            loc.clone(),
        )
        .into());
    }
    Ok(truncated as usize)
}

pub fn make_list_get() -> Rc<NativeFunction> {
    let name = "list_get";
    let signature = "List -> Float -> Any";
    native(
        name,
        Arity::Fixed(2),
        signature,
        Rc::new(move |args, _env, loc| {
            let arg0 = args[0].force()?;
            let list = expect_list(name, signature, &arg0, loc)?;
            let arg1 = args[1].force()?;
            let index = expect_float(name, signature, &arg1, loc)?;
            let len = list.borrow().len();
            let i = index_in_bounds(index, len, loc)?;
            Ok((list.borrow()[i].clone(), ResultOptions::default()))
        }),
    )
}

pub fn make_list_remove() -> Rc<NativeFunction> {
    let name = "list_remove";
    let signature = "List -> Float -> Any";
    native(
        name,
        Arity::Fixed(2),
        signature,
        Rc::new(move |args, _env, loc| {
            let arg0 = args[0].force()?;
            let list = expect_list(name, signature, &arg0, loc)?;
            let arg1 = args[1].force()?;
            let index = expect_float(name, signature, &arg1, loc)?;
            let len = list.borrow().len();
            let i = index_in_bounds(index, len, loc)?;
            let removed = list.borrow_mut().remove(i);
            Ok((removed, ResultOptions::default()))
        }),
    )
}

pub fn make_list_append() -> Rc<NativeFunction> {
    let name = "list_append";
    let signature = "List -> Any -> List";
    native(
        name,
        Arity::Fixed(2),
        signature,
        Rc::new(move |args, _env, loc| {
            let arg0 = args[0].force()?;
            let list = expect_list(name, signature, &arg0, loc)?.clone();
            let value = args[1].force()?;
            list.borrow_mut().push(value);
            Ok((Value::ListV(list), ResultOptions::default()))
        }),
    )
}

pub fn make_sort() -> Rc<NativeFunction> {
    let name = "sort";
    let signature = "List<Float> -> List<Float>";
    native(
        name,
        Arity::Fixed(1),
        signature,
        Rc::new(move |args, _env, loc| {
            let arg0 = args[0].force()?;
            let list = expect_list(name, signature, &arg0, loc)?;
            let mut floats = Vec::with_capacity(list.borrow().len());
            for element in list.borrow().iter() {
                floats.push(expect_float(name, signature, element, loc)?);
            }
            floats.sort_by(|a, b| a.partial_cmp(b).expect("non-finite float in sort"));
            let sorted = floats.into_iter().map(Value::FloatV).collect::<Vec<_>>();
            Ok((
                Value::ListV(ListRef::new(std::cell::RefCell::new(sorted))),
                ResultOptions::default(),
            ))
        }),
    )
}

/// Shared by `zip` and `transpose`: both take a `List<List>` and truncate to
/// the shortest inner list, so both are implemented identically here.
fn zip_or_transpose(name: &'static str, args: &[crate::thunk::ThunkRef], loc: &crate::loc::Loc) -> crate::error::ThunkResult<(Value, ResultOptions)> {
    let signature = "List<List> -> List<List>";
    let arg0 = args[0].force()?;
    let outer = expect_list(name, signature, &arg0, loc)?;
    let outer = outer.borrow();

    let mut inners: Vec<std::cell::Ref<'_, Vec<Value>>> = Vec::with_capacity(outer.len());
    for element in outer.iter() {
        let inner = expect_list(name, signature, element, loc)?;
        inners.push(inner.borrow());
    }

    let min_len = inners.iter().map(|inner| inner.len()).min().unwrap_or(0);

    let mut rows = Vec::with_capacity(min_len);
    for i in 0..min_len {
        let row: Vec<Value> = inners.iter().map(|inner| inner[i].clone()).collect();
        rows.push(Value::ListV(ListRef::new(std::cell::RefCell::new(row))));
    }

    Ok((
        Value::ListV(ListRef::new(std::cell::RefCell::new(rows))),
        ResultOptions::default(),
    ))
}

pub fn make_zip() -> Rc<NativeFunction> {
    native(
        "zip",
        Arity::Fixed(1),
        "List<List> -> List<List>",
        Rc::new(|args, _env, loc| zip_or_transpose("zip", args, loc)),
    )
}

pub fn make_transpose() -> Rc<NativeFunction> {
    native(
        "transpose",
        Arity::Fixed(1),
        "List<List> -> List<List>",
        Rc::new(|args, _env, loc| zip_or_transpose("transpose", args, loc)),
    )
}
