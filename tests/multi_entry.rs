mod support;

use support::{as_float, run, run_in};

/// Mirrors how the REPL feeds each accepted entry's resulting environment
/// back in as the next entry's starting environment.
#[test]
fn definitions_persist_across_separately_evaluated_entries() {
    let first = run("base : Float = 10").expect("first entry should evaluate");
    let second = run_in("(add base 5)", first.env).expect("second entry should evaluate");
    assert_eq!(as_float(&second.last_value), 15.0);
}

#[test]
fn a_later_entry_can_shadow_an_earlier_definition() {
    let first = run("x : Float = 1").expect("first entry should evaluate");
    let second = run_in("x : Float = 2", first.env).expect("second entry should evaluate");
    let third = run_in("(add x 0)", second.env).expect("third entry should evaluate");
    assert_eq!(as_float(&third.last_value), 2.0);
}
