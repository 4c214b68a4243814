mod support;

use support::run;

/// `v` is a single thunk; referencing it twice in `(add v v)` must force it
/// exactly once. `log` only grows when `v`'s body actually runs, so its
/// final length is an observable proxy for how many times `v` was forced.
#[test]
fn a_named_binding_is_forced_at_most_once() {
    let result = run(
        r#"
        log : List = (list)
        v : Float = (list_size (list_append log 1))
        (add v v)
        "#,
    )
    .expect("program should evaluate");

    let log = result.env.lookup("log").expect("log should be bound");
    let log_value = log.force().expect("log should force cleanly");
    match log_value {
        thunklang::value::Value::ListV(list) => assert_eq!(list.borrow().len(), 1),
        other => panic!("expected a List, got {other}"),
    }
}

#[test]
fn print_reports_a_side_effect() {
    let result = run(r#"(print "hi")"#).expect("program should evaluate");
    assert!(result.result_options.side_effects);
}

#[test]
fn a_program_with_no_print_reports_no_side_effects() {
    let result = run("(add 1 2)").expect("program should evaluate");
    assert!(!result.result_options.side_effects);
}

#[test]
fn side_effects_aggregate_across_a_closure_call() {
    // The `print` call happens deep inside a forced closure body, several
    // `eval_expr` frames below the top-level driver loop.
    let result = run(
        r#"
        noisy : Float -> Float = \x : Float . (print x)
        (noisy 1)
        "#,
    )
    .expect("program should evaluate");
    assert!(result.result_options.side_effects);
}
