mod support;

use std::collections::HashSet;
use std::path::PathBuf;

use support::as_float;
use thunklang::interpreter::interpret;
use thunklang::parser::load_program;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

#[test]
fn use_splices_a_loaded_files_bindings_in() {
    let mut loaded = HashSet::new();
    let program = load_program(&fixture("use_main.tl"), &mut loaded).expect("should load");
    let result = interpret(&program, None).expect("program should evaluate");
    assert_eq!(as_float(&result.last_value), 25.0);
}

#[test]
fn a_cycle_of_use_directives_terminates() {
    let mut loaded = HashSet::new();
    let program = load_program(&fixture("cycle_a.tl"), &mut loaded).expect("should load");
    let result = interpret(&program, None).expect("program should evaluate");
    assert_eq!(as_float(&result.last_value), 1.0);

    let b_val = result.env.lookup("b_val").expect("b_val should still be bound");
    assert_eq!(as_float(&b_val.force().expect("b_val should force")), 2.0);
}

#[test]
fn reusing_the_same_loaded_set_skips_an_already_loaded_file() {
    let mut loaded = HashSet::new();
    let first = load_program(&fixture("use_helper.tl"), &mut loaded).expect("should load");
    assert_eq!(first.len(), 1);

    let second = load_program(&fixture("use_helper.tl"), &mut loaded).expect("should load");
    assert!(second.is_empty());
}
