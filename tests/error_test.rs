mod common;
use common::*;
use cyclone::lang::ErrorKind;

#[test]
fn test_errors_name_their_line() {
    let (mut r, _) = runtime("print 1\nprint 2\nprint nope");
    let err = r.run().unwrap_err();
    assert_eq!(err.line(), Some(2));
    assert!(err.token().is_some());
}

#[test]
fn test_error_display_includes_the_line() {
    let (mut r, _) = runtime("goto Nowhere");
    let err = r.run().unwrap_err();
    assert_eq!(err.to_string(), "UNKNOWN LABEL: Nowhere IN LINE 1");
}

#[test]
fn test_empty_lines_keep_line_numbers_honest() {
    let (mut r, _) = runtime("print 1\n\n\nprint nope");
    let err = r.run().unwrap_err();
    assert_eq!(err.line(), Some(3));
}

#[test]
fn test_error_inside_a_subroutine_names_that_line() {
    let (mut r, _) = runtime("gosub Sub\nend\nSub\nprint 1/0");
    let err = r.run().unwrap_err();
    assert!(matches!(err.kind(), ErrorKind::BadMath(_, _)));
    assert_eq!(err.line(), Some(3));
}

#[test]
fn test_output_before_the_error_is_kept() {
    let (mut r, output) = runtime("print 1\nprint 2\nboom [");
    assert!(r.run().is_err());
    assert_eq!(*output.borrow(), "1\n2\n");
}

#[test]
fn test_unexpected_token_reports_both_sides() {
    let (mut r, _) = runtime("a = 1 2");
    let err = r.run().unwrap_err();
    assert_eq!(
        err.kind(),
        &ErrorKind::UnexpectedToken("END OF LINE".into(), "2".into())
    );
}

#[test]
fn test_messages_read_well() {
    let cases: &[(&str, &str)] = &[
        ("return", "RETURN WITHOUT GOSUB IN LINE 1"),
        ("next", "NEXT WITHOUT FOR IN LINE 1"),
        ("print ghost", "UNINITIALIZED SYMBOL: ghost IN LINE 1"),
        ("n = 1\nn[0] = 2", "CANNOT SUBSCRIPT IN LINE 2"),
        ("s = \"abc\"\nprint s[9]", "SUBSCRIPT OUT OF RANGE IN LINE 2"),
    ];
    for (source, want) in cases {
        let (mut r, _) = runtime(source);
        let err = r.run().unwrap_err();
        assert_eq!(&err.to_string(), want, "{}", source);
    }
}

#[test]
fn test_for_rejects_non_integer_bounds() {
    let (mut r, _) = runtime("for i in 1.5 to 3\nnext");
    let err = r.run().unwrap_err();
    assert_eq!(err.kind(), &ErrorKind::BadRangeBound);
    let (mut r, _) = runtime("for i in 1 to \"many\"\nnext");
    assert!(r.run().is_err());
}

#[test]
fn test_mixed_math_errors() {
    let (mut r, _) = runtime("x = [] + 1");
    let err = r.run().unwrap_err();
    assert!(matches!(err.kind(), ErrorKind::BadMath(op, _) if op == "+"));
    let (mut r, _) = runtime("x = \"s\" - 1");
    assert!(r.run().is_err());
    let (mut r, _) = runtime("x = 1.5 & 2");
    assert!(r.run().is_err());
}
