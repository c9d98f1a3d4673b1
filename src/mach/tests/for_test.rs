use super::*;
use crate::lang::ErrorKind;

#[test]
fn test_upper_bound_exclusive() {
    let out = exec("for i in 1 to 10\nprint i\nnext");
    assert_eq!(out, "1\n2\n3\n4\n5\n6\n7\n8\n9\n");
}

#[test]
fn test_index_survives_loop() {
    let (mut r, _) = runtime("for i in 3 to 5\nnext");
    r.run().unwrap();
    assert_eq!(r.symbols().get("i"), Some(&Val::Int(5)));
}

#[test]
fn test_nested_loops() {
    let out = exec("for y in 1 to 3\nfor x in 8 to 10\nprint y,x\nnext\nnext");
    assert_eq!(out, "18\n19\n28\n29\n");
}

#[test]
fn test_breaking_out_of_loop_with_goto() {
    let out = exec("for y in 1 to 3\nprint y\ngoto Out\nnext\nOut");
    assert_eq!(out, "1\n");
}

#[test]
fn test_next_without_for() {
    let (mut r, _) = runtime("next");
    let err = r.run().unwrap_err();
    assert_eq!(err.kind(), &ErrorKind::CannotIterate);
    assert!(!r.running());
}

#[test]
fn test_empty_range_is_an_error() {
    let (mut r, _) = runtime("for i in 5 to 5\nnext");
    let err = r.run().unwrap_err();
    assert_eq!(err.kind(), &ErrorKind::BadRangeBound);
}

#[test]
fn test_clobbered_index_is_an_error() {
    let (mut r, _) = runtime("for i in 1 to 3\ni = \"gone\"\nnext");
    let err = r.run().unwrap_err();
    assert_eq!(err.kind(), &ErrorKind::BadIndex);
}
