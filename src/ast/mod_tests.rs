use super::*;

#[test]
fn tuple_defaults_are_immutable() {
    assert_eq!(DefaultKind::classify("()"), DefaultKind::Tuple);
    assert_eq!(DefaultKind::classify("(1, 2)"), DefaultKind::Tuple);
    assert!(!DefaultKind::Tuple.is_mutable());
}

#[test]
fn scalar_literals_are_immutable() {
    assert_eq!(DefaultKind::classify("None"), DefaultKind::Literal);
    assert_eq!(DefaultKind::classify("True"), DefaultKind::Literal);
    assert_eq!(DefaultKind::classify("False"), DefaultKind::Literal);
    assert_eq!(DefaultKind::classify("42"), DefaultKind::Literal);
    assert_eq!(DefaultKind::classify("3.14"), DefaultKind::Literal);
    assert_eq!(DefaultKind::classify(".5"), DefaultKind::Literal);
    assert!(!DefaultKind::Literal.is_mutable());
}

#[test]
fn string_literals_including_prefixes_are_immutable() {
    assert_eq!(DefaultKind::classify("'s'"), DefaultKind::Literal);
    assert_eq!(DefaultKind::classify("\"s\""), DefaultKind::Literal);
    assert_eq!(DefaultKind::classify("r'raw'"), DefaultKind::Literal);
    assert_eq!(DefaultKind::classify("b'bytes'"), DefaultKind::Literal);
    assert_eq!(DefaultKind::classify("rb'raw bytes'"), DefaultKind::Literal);
}

#[test]
fn everything_else_is_constructed() {
    // collection displays, calls, names, f-strings and unary expressions
    // all count as constructed defaults
    assert_eq!(DefaultKind::classify("[]"), DefaultKind::Constructed);
    assert_eq!(DefaultKind::classify("{}"), DefaultKind::Constructed);
    assert_eq!(DefaultKind::classify("list()"), DefaultKind::Constructed);
    assert_eq!(DefaultKind::classify("name"), DefaultKind::Constructed);
    assert_eq!(DefaultKind::classify("f'x{y}'"), DefaultKind::Constructed);
    assert_eq!(DefaultKind::classify("-1"), DefaultKind::Constructed);
    assert!(DefaultKind::Constructed.is_mutable());
}

#[test]
fn assign_target_exposes_checked_name() {
    assert_eq!(AssignTarget::Name("x".to_string()).name(), "x");
    assert_eq!(AssignTarget::Attribute("count".to_string()).name(), "count");
}
