mod common;
use common::*;
use cyclone::lang::ErrorKind;
use cyclone::mach::Val;

#[test]
fn test_input_one_name() {
    let (mut r, _) = runtime_with_inputs("input answer", &["42"]);
    r.run().unwrap();
    assert_eq!(r.symbols().get("answer"), Some(&Val::Int(42)));
}

#[test]
fn test_input_reads_one_line_per_name() {
    let (mut r, _) = runtime_with_inputs("input a, b, c", &["1", "2", "3"]);
    r.run().unwrap();
    assert_eq!(r.symbols().get("a"), Some(&Val::Int(1)));
    assert_eq!(r.symbols().get("b"), Some(&Val::Int(2)));
    assert_eq!(r.symbols().get("c"), Some(&Val::Int(3)));
}

#[test]
fn test_input_detects_negative_numbers() {
    let (mut r, _) = runtime_with_inputs("input n, x", &["-7", "-2.5"]);
    r.run().unwrap();
    assert_eq!(r.symbols().get("n"), Some(&Val::Int(-7)));
    assert_eq!(r.symbols().get("x"), Some(&Val::Float(-2.5)));
}

#[test]
fn test_input_keeps_odd_text_as_strings() {
    let (mut r, _) = runtime_with_inputs("input s, t", &["7 dwarves", ""]);
    r.run().unwrap();
    assert_eq!(r.symbols().get("s"), Some(&Val::Str("7 dwarves".into())));
    assert_eq!(r.symbols().get("t"), Some(&Val::Str("".into())));
}

#[test]
fn test_input_overwrites() {
    let (mut r, _) = runtime_with_inputs("n = \"old\"\ninput n", &["5"]);
    r.run().unwrap();
    assert_eq!(r.symbols().get("n"), Some(&Val::Int(5)));
}

#[test]
fn test_input_requires_identifiers() {
    let (mut r, _) = runtime_with_inputs("input 5", &["x"]);
    let err = r.run().unwrap_err();
    assert_eq!(
        err.kind(),
        &ErrorKind::UnexpectedToken("IDENTIFIER".into(), "5".into())
    );
}

#[test]
fn test_input_rejects_trailing_junk() {
    let (mut r, _) = runtime_with_inputs("input a b", &["1", "2"]);
    let err = r.run().unwrap_err();
    assert_eq!(
        err.kind(),
        &ErrorKind::UnexpectedToken("END OF LINE".into(), "b".into())
    );
}

#[test]
fn test_inputs_feed_arithmetic() {
    let out = exec_with_inputs("input a, b\nprint a ** b", &["2", "10"]);
    assert_eq!(out, "1024.0\n");
}
