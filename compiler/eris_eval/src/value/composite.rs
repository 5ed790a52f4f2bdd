//! Object-like value payloads: strings, user functions, native functions.
//!
//! Every payload here is an object in the language's sense: it carries a
//! member frame in the [`Environments`](crate::Environments) arena.

use std::fmt;

use crate::errors::wrong_arg_count;
use crate::{EnvId, EvalError, EvalResult, ExprId, Heap, ParamId, Value};

/// Host-provided built-in: ordered arguments in, one value (or error) out.
pub type NativeFn = fn(&[Value]) -> EvalResult;

// StringValue

/// String text plus the member frame that lets strings carry methods and
/// fields.
#[derive(Clone, Debug)]
pub struct StringValue {
    pub text: Heap<str>,
    pub members: EnvId,
}

impl StringValue {
    pub fn new(text: impl Into<Heap<str>>, members: EnvId) -> Self {
        StringValue {
            text: text.into(),
            members,
        }
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.text
    }
}

// FunctionValue

/// Source-defined function capturing its defining scope.
///
/// `params` and `body` are handles into the parser's AST; `closure` is the
/// frame free variables resolve against. The closure frame doubles as the
/// function's member frame.
#[derive(Clone, Debug)]
pub struct FunctionValue {
    pub params: Heap<[ParamId]>,
    pub body: ExprId,
    pub closure: EnvId,
}

impl FunctionValue {
    pub fn new(params: impl Into<Heap<[ParamId]>>, body: ExprId, closure: EnvId) -> Self {
        FunctionValue {
            params: params.into(),
            body,
            closure,
        }
    }

    #[inline]
    pub fn arity(&self) -> usize {
        self.params.len()
    }
}

// NativeFunctionValue

/// Built-in function bridged into the value space.
#[derive(Clone)]
pub struct NativeFunctionValue {
    pub name: &'static str,
    pub func: NativeFn,
    pub members: EnvId,
}

impl NativeFunctionValue {
    pub fn new(name: &'static str, func: NativeFn, members: EnvId) -> Self {
        NativeFunctionValue {
            name,
            func,
            members,
        }
    }

    /// Invoke the host function with the given arguments.
    #[inline]
    pub fn call(&self, args: &[Value]) -> EvalResult {
        tracing::trace!(name = self.name, argc = args.len(), "native call");
        (self.func)(args)
    }
}

impl fmt::Debug for NativeFunctionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NativeFunctionValue")
            .field("name", &self.name)
            .field("members", &self.members)
            .finish_non_exhaustive()
    }
}

/// Check a native function's argument count.
///
/// Native bodies call this first so arity failures share the error channel
/// with every other runtime failure.
pub fn check_arity(name: &str, args: &[Value], expected: usize) -> Result<(), EvalError> {
    if args.len() == expected {
        Ok(())
    } else {
        Err(wrong_arg_count(name, expected, args.len()))
    }
}
