mod support;

use support::{as_float, run};

#[test]
fn sort_orders_a_list_of_floats() {
    let result = run(
        r#"
        xs : List = (list 3 1 2)
        sorted : List = (sort xs)
        (list_get sorted 0)
        "#,
    )
    .expect("program should evaluate");
    assert_eq!(as_float(&result.last_value), 1.0);
}

#[test]
fn map_applies_a_closure_to_every_element() {
    let result = run(
        r#"
        doubled : List = (map (\x : Float . (mul x 2)) (list 1 2 3))
        (list_get doubled 2)
        "#,
    )
    .expect("program should evaluate");
    assert_eq!(as_float(&result.last_value), 6.0);
}

/// A mapped closure that mutates the very list `map` is iterating over must
/// not panic with an `already borrowed` `RefCell` error: the element borrow
/// is released before the closure (arbitrary user code) runs.
#[test]
fn map_over_a_list_whose_closure_mutates_that_same_list_does_not_panic() {
    let result = run(
        r#"
        xs : Any = (list 1 2 3)
        mapped : List = (map (\x : Any . (list_append xs x)) xs)
        (list_size xs)
        "#,
    )
    .expect("program should evaluate");
    assert_eq!(as_float(&result.last_value), 6.0);
}

/// Same hazard for `foldr`'s fold direction.
#[test]
fn foldr_over_a_list_whose_closure_mutates_that_same_list_does_not_panic() {
    let result = run(
        r#"
        xs : Any = (list 1 2 3)
        folded : Float = (foldr (\x : Any . \acc : Float . (list_size (list_append xs x))) 0 xs)
        (list_size xs)
        "#,
    )
    .expect("program should evaluate");
    assert_eq!(as_float(&result.last_value), 6.0);
}

#[test]
fn foldr_accumulates_right_to_left() {
    let result = run(
        r#"
        summed : Float = (foldr (\x : Float . \acc : Float . (add x acc)) 0 (list 1 2 3 4))
        summed
        "#,
    )
    .expect("program should evaluate");
    assert_eq!(as_float(&result.last_value), 10.0);
}

#[test]
fn list_append_mutates_and_returns_the_same_list() {
    let result = run(
        r#"
        xs : List = (list 1 2)
        ys : List = (list_append xs 3)
        (list_size xs)
        "#,
    )
    .expect("program should evaluate");
    assert_eq!(as_float(&result.last_value), 3.0);
}

#[test]
fn list_get_out_of_bounds_is_a_runtime_error() {
    let err = run(
        r#"
        xs : List = (list 1 2)
        (list_get xs 5)
        "#,
    )
    .expect_err("out-of-range index should fail");
    assert!(err.to_string().contains("out of range"));
}

#[test]
fn zip_and_transpose_truncate_to_the_shortest_inner_list() {
    let zip_result = run("(zip (list (list 1 2 3) (list 4 5)))").expect("zip should evaluate");
    match &zip_result.last_value {
        thunklang::value::Value::ListV(rows) => assert_eq!(rows.borrow().len(), 2),
        other => panic!("expected a List, got {other}"),
    }
}
