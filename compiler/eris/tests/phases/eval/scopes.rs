use eris::{EvalError, Session, Value};
use pretty_assertions::assert_eq;

#[test]
fn block_scopes_shadow_and_restore() {
    let mut session = Session::new();
    let globals = session.globals();
    let envs = session.environments_mut();
    envs.define(globals, "x", Value::int(1));

    // { let x = 2; x = 3; }
    let block = envs.child(globals);
    envs.define(block, "x", Value::int(2));
    envs.assign(block, "x", Value::int(3)).unwrap();
    assert_eq!(envs.lookup(block, "x"), Ok(Value::int(3)));

    // Leaving the block: the outer binding is untouched.
    assert_eq!(envs.lookup(globals, "x"), Ok(Value::int(1)));
}

#[test]
fn nested_assignment_updates_global() {
    let mut session = Session::new();
    let globals = session.globals();
    let envs = session.environments_mut();
    envs.define(globals, "total", Value::int(0));

    let mut scope = globals;
    for i in 1..=4 {
        scope = envs.child(scope);
        let current = envs.lookup(scope, "total").unwrap().as_number().unwrap();
        envs.assign(scope, "total", Value::int(current.int_val() + i)).unwrap();
    }

    assert_eq!(envs.depth(scope), 4);
    assert_eq!(envs.lookup(globals, "total"), Ok(Value::int(10)));
}

#[test]
fn assignment_to_undeclared_name_reports_and_creates_nothing() {
    let mut session = Session::new();
    let globals = session.globals();
    let envs = session.environments_mut();
    let inner = envs.child(globals);

    let err = envs.assign(inner, "y", Value::Null).unwrap_err();

    assert_eq!(err.undefined_name(), Some("y"));
    assert_eq!(err.to_string(), "variable \"y\" is not defined");
    assert!(!envs.contains(inner, "y"));
    assert!(matches!(
        envs.lookup(globals, "y"),
        Err(EvalError::UndefinedVariable { .. })
    ));
}

#[test]
fn globals_visible_from_every_scope() {
    fn answer(_: &[Value]) -> eris::EvalResult {
        Ok(Value::int(42))
    }

    let mut session = Session::new();
    session.register_native("answer", answer);
    let globals = session.globals();
    let envs = session.environments_mut();
    let deep = (0..8).fold(globals, |env, _| envs.child(env));

    let callee = envs.lookup(deep, "answer").unwrap();
    assert_eq!(callee.call_native(&[]), Ok(Value::int(42)));
}
