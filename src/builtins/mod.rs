//! The built-in registry: seeds a root `Env` with one already-`Evaluated`
//! thunk per native function.

pub mod escape;

mod core;
mod helpers;
mod higher_order;
mod io;
mod list;

use std::rc::Rc;

use once_cell::sync::Lazy;

use crate::env::EnvRef;
use crate::thunk::Thunk;
use crate::value::{NativeFunction, Value};

/// Every constructor, built once and reused across every fresh root
/// environment (a REPL `:reset`, or each `interpret()` call with no
/// pre-existing environment, rebuilds this table's `Rc`s rather than
/// re-running every factory function).
static BUILTIN_CTORS: Lazy<Vec<fn() -> Rc<NativeFunction>>> = Lazy::new(|| {
    vec![
        core::make_add,
        core::make_sub,
        core::make_mul,
        core::make_cmp,
        core::make_if_zero,
        core::make_parse_float,
        core::make_print,
        list::make_list,
        list::make_list_size,
        list::make_list_get,
        list::make_list_remove,
        list::make_list_append,
        list::make_sort,
        list::make_zip,
        list::make_transpose,
        higher_order::make_map,
        higher_order::make_foldr,
        io::make_slurp_file,
        io::make_lines,
        io::make_split,
    ]
});

fn bind(env: &EnvRef, native: Rc<NativeFunction>) {
    let name = native.name.to_string();
    env.bind(name, Thunk::ready(Value::NativeV(native)));
}

/// Installs every built-in into `env`'s own table. Called on every fresh
/// root environment (the first `interpret()` call with no pre-existing
/// environment, and a REPL `:reset`).
pub fn install(env: &EnvRef) {
    for make in BUILTIN_CTORS.iter() {
        bind(env, make());
    }
}

/// Names and call signatures of every built-in, consulted by the REPL's
/// `:builtins` command.
pub fn signatures() -> Vec<(&'static str, &'static str)> {
    BUILTIN_CTORS
        .iter()
        .map(|make| {
            let native = make();
            (native.name, native.signature)
        })
        .collect()
}
