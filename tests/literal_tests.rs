use interval_eval::{compile, ExprError};
use pretty_assertions::assert_eq;

mod common;
use common::assert_ival;

#[test]
fn casts_constants() {
    let expr = compile("0").unwrap();
    assert_eq!(expr.text(), "interval(0)");
    let out = expr.eval().unwrap();
    assert_eq!((out.lo, out.hi), (0.0, 0.0));

    let expr = compile("1").unwrap();
    assert_eq!(expr.text(), "interval(1)");
    let out = expr.eval().unwrap();
    assert_eq!((out.lo, out.hi), (1.0, 1.0));
}

#[test]
fn casts_numbers() {
    let expr = compile("42").unwrap();
    assert_eq!(expr.text(), "interval(42)");
    assert_ival(expr.eval().unwrap(), 42.0, 42.0);

    let expr = compile("3.14").unwrap();
    assert_eq!(expr.text(), "interval(3.14)");
    assert_ival(expr.eval().unwrap(), 3.14, 3.14);

    let expr = compile("2e3").unwrap();
    assert_eq!(expr.text(), "interval(2000)");
    assert_ival(expr.eval().unwrap(), 2000.0, 2000.0);
}

#[test]
fn casts_arrays_as_intervals() {
    let expr = compile("[-2, 3]").unwrap();
    assert_eq!(expr.text(), "interval([-2, 3])");
    let out = expr.eval().unwrap();
    assert_eq!((out.lo, out.hi), (-2.0, 3.0));
}

#[test]
fn out_of_order_bounds_are_preserved() {
    // [1, -1] spells the empty interval; the endpoints are not reordered.
    let expr = compile("[1, -1]").unwrap();
    let out = expr.eval().unwrap();
    assert!(out.is_empty());
    assert_eq!((out.lo, out.hi), (1.0, -1.0));
}

#[test]
fn rejects_non_literal_array_elements() {
    match compile("[-a, 3]").unwrap_err() {
        ExprError::UnsupportedLiteral(_) => {}
        other => panic!("unexpected error: {:?}", other),
    }
    match compile("[sqrt(4), 3]").unwrap_err() {
        ExprError::UnsupportedLiteral(_) => {}
        other => panic!("unexpected error: {:?}", other),
    }
    match compile("[1 + 2, 3]").unwrap_err() {
        ExprError::UnsupportedLiteral(_) => {}
        other => panic!("unexpected error: {:?}", other),
    }
}

#[test]
fn rejects_wrong_bound_count() {
    match compile("[1, 2, 3]").unwrap_err() {
        ExprError::UnsupportedLiteral(_) => {}
        other => panic!("unexpected error: {:?}", other),
    }
    match compile("[1]").unwrap_err() {
        ExprError::UnsupportedLiteral(_) => {}
        other => panic!("unexpected error: {:?}", other),
    }
}

#[test]
fn signed_literal_bounds_are_fine() {
    let expr = compile("[-2, +3]").unwrap();
    let out = expr.eval().unwrap();
    assert_eq!((out.lo, out.hi), (-2.0, 3.0));
}
