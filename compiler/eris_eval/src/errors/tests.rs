use super::*;
use pretty_assertions::assert_eq;

#[test]
fn undefined_variable_has_correct_kind() {
    let err = undefined_variable("x");
    assert_eq!(
        err,
        EvalError::UndefinedVariable {
            name: "x".to_string()
        }
    );
    assert_eq!(err.to_string(), "variable \"x\" is not defined");
    assert_eq!(err.undefined_name(), Some("x"));
}

#[test]
fn wrong_arg_count_message() {
    let err = wrong_arg_count("len", 1, 3);
    assert_eq!(err.to_string(), "len: expected 1 argument(s), got 3");
    assert_eq!(err.undefined_name(), None);
}

#[test]
fn not_callable_message() {
    assert_eq!(
        not_callable("int").to_string(),
        "value of type int is not callable"
    );
}

#[test]
fn native_error_message() {
    let err = native_error("parse", "bad digit");
    assert_eq!(
        err,
        EvalError::Native {
            name: "parse".to_string(),
            message: "bad digit".to_string()
        }
    );
    assert_eq!(err.to_string(), "parse: bad digit");
}
