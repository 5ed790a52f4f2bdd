//! Runtime values for the Eris interpreter.
//!
//! `Value` is a closed enum: one case per runtime kind, with display and
//! truthiness implemented by exhaustive matching. Object-like kinds (objects,
//! classes, strings, functions) refer to their member frame by [`EnvId`];
//! they never own environment storage.
//!
//! # Display
//!
//! | Kind | Text |
//! |------|------|
//! | `Null` | `none` |
//! | `Boolean` | `true` / `false` |
//! | `Number` | `42`, `2.5`, `3.0`, `inf` |
//! | `Object` / `Class` | `<object #N>` / `<class #N>` (member frame index) |
//! | `String` | raw text |
//! | `Function` | `<function>` |
//! | `NativeFunction` | `<native fn NAME>` |

mod composite;
mod number;

use std::fmt;

pub use composite::{check_arity, FunctionValue, NativeFn, NativeFunctionValue, StringValue};
pub use number::Number;

use crate::errors::not_callable;
use crate::{EnvId, EvalResult, ExprId, Heap, ParamId};

/// Runtime value.
#[derive(Clone, Debug)]
pub enum Value {
    /// Absence of a value.
    Null,
    Boolean(bool),
    Number(Number),
    /// Generic instance; members live in the referenced frame.
    Object(EnvId),
    /// A class value (not an instance); members live in the referenced frame.
    Class(EnvId),
    String(StringValue),
    /// User-defined function with its closure frame.
    Function(FunctionValue),
    /// Host-provided built-in.
    NativeFunction(NativeFunctionValue),
}

// Factory Methods

impl Value {
    /// Positive infinity as a value.
    pub const INFINITY: Value = Value::Number(Number::INFINITY);

    #[inline]
    pub fn int(n: i32) -> Self {
        Value::Number(Number::Int(n))
    }

    #[inline]
    pub fn double(d: f64) -> Self {
        Value::Number(Number::Double(d))
    }

    #[inline]
    pub fn boolean(b: bool) -> Self {
        Value::Boolean(b)
    }

    /// String value with the given member frame.
    ///
    /// Use [`Environments::new_string`](crate::Environments::new_string) to
    /// allocate a fresh member frame at the same time.
    #[inline]
    pub fn string(text: impl Into<Heap<str>>, members: EnvId) -> Self {
        Value::String(StringValue::new(text, members))
    }

    #[inline]
    pub fn object(members: EnvId) -> Self {
        Value::Object(members)
    }

    #[inline]
    pub fn class(members: EnvId) -> Self {
        Value::Class(members)
    }

    /// User-defined function closing over `closure`.
    #[inline]
    pub fn function(params: impl Into<Heap<[ParamId]>>, body: ExprId, closure: EnvId) -> Self {
        Value::Function(FunctionValue::new(params, body, closure))
    }

    #[inline]
    pub fn native(name: &'static str, func: NativeFn, members: EnvId) -> Self {
        Value::NativeFunction(NativeFunctionValue::new(name, func, members))
    }
}

// Value Methods

impl Value {
    /// Boolean interpretation when used as a condition.
    ///
    /// Only `Null` and `Boolean(false)` are falsy; numbers are truthy
    /// regardless of value.
    pub fn truthy(&self) -> bool {
        match self {
            Value::Null => false,
            Value::Boolean(b) => *b,
            Value::Number(_)
            | Value::Object(_)
            | Value::Class(_)
            | Value::String(_)
            | Value::Function(_)
            | Value::NativeFunction(_) => true,
        }
    }

    /// Display text. Deterministic and side-effect-free.
    pub fn str(&self) -> String {
        self.to_string()
    }

    /// Name of the value's kind, for error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "none",
            Value::Boolean(_) => "boolean",
            Value::Number(Number::Int(_)) => "int",
            Value::Number(Number::Double(_)) => "double",
            Value::Object(_) => "object",
            Value::Class(_) => "class",
            Value::String(_) => "string",
            Value::Function(_) => "function",
            Value::NativeFunction(_) => "native function",
        }
    }

    /// Member frame of object-like values. `None` for null, booleans and
    /// numbers.
    ///
    /// For user functions this is the closure frame itself, not a private
    /// frame: a `define` on it binds a variable in the defining scope. For a
    /// function declared at top level that is a new global, visible to every
    /// other function closing over the same scope.
    pub fn members(&self) -> Option<EnvId> {
        match self {
            Value::Object(env) | Value::Class(env) => Some(*env),
            Value::String(s) => Some(s.members),
            Value::Function(f) => Some(f.closure),
            Value::NativeFunction(n) => Some(n.members),
            Value::Null | Value::Boolean(_) | Value::Number(_) => None,
        }
    }

    #[inline]
    pub fn is_object(&self) -> bool {
        self.members().is_some()
    }

    #[inline]
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn as_number(&self) -> Option<Number> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s.as_str()),
            _ => None,
        }
    }

    pub fn as_function(&self) -> Option<&FunctionValue> {
        match self {
            Value::Function(f) => Some(f),
            _ => None,
        }
    }

    /// Invoke a native function value.
    ///
    /// Fails with `NotCallable` for every other kind; calling user functions
    /// is the evaluator's job.
    pub fn call_native(&self, args: &[Value]) -> EvalResult {
        match self {
            Value::NativeFunction(native) => native.call(args),
            other => Err(not_callable(other.type_name())),
        }
    }
}

// Trait Implementations

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("none"),
            Value::Boolean(b) => write!(f, "{b}"),
            Value::Number(n) => write!(f, "{n}"),
            Value::Object(env) => write!(f, "<object {env}>"),
            Value::Class(env) => write!(f, "<class {env}>"),
            Value::String(s) => f.write_str(s.as_str()),
            Value::Function(_) => f.write_str("<function>"),
            Value::NativeFunction(n) => write!(f, "<native fn {}>", n.name),
        }
    }
}

/// Equality: by content for scalars and strings, by identity (member
/// frame) for objects, classes and native functions, by parameters, body
/// and closure for user functions.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Boolean(a), Value::Boolean(b)) => a == b,
            (Value::Number(a), Value::Number(b)) => a == b,
            (Value::Object(a), Value::Object(b)) | (Value::Class(a), Value::Class(b)) => a == b,
            (Value::String(a), Value::String(b)) => a.text == b.text,
            (Value::Function(a), Value::Function(b)) => {
                a.body == b.body && a.closure == b.closure && a.params == b.params
            }
            (Value::NativeFunction(a), Value::NativeFunction(b)) => {
                a.name == b.name && a.members == b.members
            }
            _ => false,
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::int(n)
    }
}

impl From<f64> for Value {
    fn from(d: f64) -> Self {
        Value::double(d)
    }
}

impl From<Number> for Value {
    fn from(n: Number) -> Self {
        Value::Number(n)
    }
}
