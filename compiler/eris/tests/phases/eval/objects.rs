use eris::{Environments, ExprId, ParamId, Session, Value};
use pretty_assertions::assert_eq;

#[test]
fn recursive_function_finds_itself() {
    let mut session = Session::new();
    let globals = session.globals();
    let envs = session.environments_mut();

    // fn fact(n) { ... fact(n - 1) ... }
    let fact = envs.closure(vec![ParamId::new(0)], ExprId::new(10), globals);
    envs.define(globals, "fact", fact.clone());

    // Calling: a fresh frame under the closure binds the parameter.
    let func = fact.as_function().unwrap();
    let call = envs.child(func.closure);
    envs.define(call, "n", Value::int(3));

    let inner = envs.lookup(call, "fact").unwrap();
    assert_eq!(inner, fact);
    assert_eq!(inner.as_function().unwrap().arity(), 1);
}

#[test]
fn closure_keeps_defining_scope_alive() {
    let mut session = Session::new();
    let globals = session.globals();
    let envs = session.environments_mut();

    // fn make() { let count = 0; fn inc() { count = count + 1; } return inc; }
    let make_call = envs.child(globals);
    envs.define(make_call, "count", Value::int(0));
    let inc = envs.closure(Vec::new(), ExprId::new(1), make_call);

    for _ in 0..3 {
        let closure = inc.as_function().unwrap().closure;
        let call = envs.child(closure);
        let count = envs.lookup(call, "count").unwrap().as_number().unwrap();
        envs.assign(call, "count", Value::int(count.int_val() + 1)).unwrap();
    }

    assert_eq!(envs.lookup(make_call, "count"), Ok(Value::int(3)));
    assert!(!envs.contains(globals, "count"));
}

#[test]
fn class_instances_share_methods_and_own_fields() {
    fn describe(_: &[Value]) -> eris::EvalResult {
        Ok(Value::Boolean(true))
    }

    let mut session = Session::new();
    let globals = session.globals();
    let envs = session.environments_mut();

    let point = envs.new_class(Some(globals));
    let class_env = point.members().unwrap();
    let method = envs.new_native("describe", describe);
    envs.define(class_env, "describe", method);
    envs.define(globals, "Point", point.clone());

    let a = envs.instantiate(class_env);
    let b = envs.instantiate(class_env);
    envs.define(a.members().unwrap(), "x", Value::int(1));
    envs.define(b.members().unwrap(), "x", Value::int(2));

    assert_eq!(envs.lookup(a.members().unwrap(), "x"), Ok(Value::int(1)));
    assert_eq!(envs.lookup(b.members().unwrap(), "x"), Ok(Value::int(2)));
    assert!(!envs.contains(class_env, "x"));

    let via_a = envs.lookup(a.members().unwrap(), "describe").unwrap();
    let via_b = envs.lookup(b.members().unwrap(), "describe").unwrap();
    assert_eq!(via_a, via_b);
    assert_eq!(via_a.call_native(&[a.clone()]), Ok(Value::Boolean(true)));

    // Instances also reach globals through the class frame.
    assert_eq!(envs.lookup(a.members().unwrap(), "Point"), Ok(point));
    assert_ne!(a.str(), b.str());
    assert!(a.str().starts_with("<object #"));
}

#[test]
fn arena_outlives_nothing_but_the_session() {
    let mut envs = Environments::with_capacity(16);
    let values: Vec<Value> = (0..10).map(|_| envs.new_object(None)).collect();
    assert_eq!(envs.len(), 11);
    for (i, v) in values.iter().enumerate() {
        assert_eq!(v.str(), format!("<object #{}>", i + 1));
    }
}
