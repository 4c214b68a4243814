//! Higher-order list builtins: `map` and `foldr` apply a callable
//! element-wise through the same curried application engine user code goes
//! through, one pre-cached argument thunk per element.

use std::rc::Rc;

use crate::interpreter::apply;
use crate::thunk::Thunk;
use crate::value::{Arity, ListRef, NativeFunction, ResultOptions, Value};

use super::helpers::{expect_list, native};

pub fn make_map() -> Rc<NativeFunction> {
    let name = "map";
    let signature = "(A -> B) -> List -> List";
    native(
        name,
        Arity::Fixed(2),
        signature,
        Rc::new(move |args, env, loc| {
            let f = args[0].force()?;
            let arg1 = args[1].force()?;
            let list = expect_list(name, signature, &arg1, loc)?;

            // Collect the elements and drop the borrow before applying `f`:
            // `f` is arbitrary user code and may itself mutate `list`
            // (e.g. via `list_append`), which would otherwise panic on a
            // still-live shared borrow.
            let elements: Vec<Value> = list.borrow().iter().cloned().collect();

            let mut mapped = Vec::with_capacity(elements.len());
            for element in elements {
                let element_thunk = Thunk::ready(element);
                let (value, _opts) = apply::apply(f.clone(), vec![element_thunk], env.clone(), loc.clone())?;
                mapped.push(value);
            }

            Ok((
                Value::ListV(ListRef::new(std::cell::RefCell::new(mapped))),
                ResultOptions::default(),
            ))
        }),
    )
}

pub fn make_foldr() -> Rc<NativeFunction> {
    let name = "foldr";
    let signature = "(A -> B -> B) -> B -> List -> B";
    native(
        name,
        Arity::Fixed(3),
        signature,
        Rc::new(move |args, env, loc| {
            let f = args[0].force()?;
            let init = args[1].force()?;
            let arg2 = args[2].force()?;
            let list = expect_list(name, signature, &arg2, loc)?;

            // Same reasoning as `map`: collect before applying `f`, since `f`
            // may mutate `list` during the fold.
            let elements: Vec<Value> = list.borrow().iter().rev().cloned().collect();

            let mut acc = init;
            for element in elements {
                let element_thunk = Thunk::ready(element);
                let acc_thunk = Thunk::ready(acc);
                let (value, _opts) = apply::apply(
                    f.clone(),
                    vec![element_thunk, acc_thunk],
                    env.clone(),
                    loc.clone(),
                )?;
                acc = value;
            }

            Ok((acc, ResultOptions::default()))
        }),
    )
}
