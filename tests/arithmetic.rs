mod support;

use support::{as_float, run};

#[test]
fn squares_via_a_single_param_lambda() {
    let result = run(
        r#"
        sq : Float -> Float = \x : Float . (mul x x)
        (sq 5)
        "#,
    )
    .expect("program should evaluate");
    assert_eq!(as_float(&result.last_value), 25.0);
}

#[test]
fn k_combinator_discards_its_second_argument() {
    let result = run(
        r#"
        k : Float -> Float -> Float = \x : Float . \y : Float . x
        (k 7 9)
        "#,
    )
    .expect("program should evaluate");
    assert_eq!(as_float(&result.last_value), 7.0);
}

#[test]
fn recursive_definitions_see_themselves() {
    let result = run(
        r#"
        fact : Float -> Float = \n : Float . (if_zero n 1 (mul n (fact (sub n 1))))
        (fact 5)
        "#,
    )
    .expect("program should evaluate");
    assert_eq!(as_float(&result.last_value), 120.0);
}

#[test]
fn currying_feedback_reuses_a_partially_applied_closure() {
    let result = run(
        r#"
        add3 : Float -> Float -> Float -> Float = \a : Float . \b : Float . \c : Float . (add (add a b) c)
        partial : Float -> Float = (add3 1 2)
        (partial 10)
        "#,
    )
    .expect("program should evaluate");
    assert_eq!(as_float(&result.last_value), 13.0);
}

#[test]
fn if_zero_only_forces_the_taken_branch() {
    // `bogus` is never defined; if `if_zero` forced both branches eagerly
    // this would fail with an undefined-identifier runtime error instead of
    // returning 42.
    let result = run("(if_zero 1 bogus 42)").expect("program should evaluate");
    assert_eq!(as_float(&result.last_value), 42.0);
}

#[test]
fn undefined_identifiers_are_a_runtime_error() {
    let err = run("(add unknown_name 1)").expect_err("should fail to resolve unknown_name");
    assert!(err.to_string().contains("unknown_name"));
}
