//! Error types for the runtime core.
//!
//! Factory functions (e.g. [`undefined_variable`]) are the preferred way to
//! construct errors; they keep construction off the hot path.

use thiserror::Error;

use crate::Value;

/// Result of producing a value.
pub type EvalResult = Result<Value, EvalError>;

/// A runtime failure raised by the scope chain or a native function.
///
/// Each variant carries structured context so callers can branch on the
/// kind instead of parsing messages.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EvalError {
    /// `lookup`, `assign` or `resolve` found no frame binding `name`.
    #[error("variable \"{name}\" is not defined")]
    UndefinedVariable { name: String },

    /// A native function was called with the wrong number of arguments.
    #[error("{name}: expected {expected} argument(s), got {got}")]
    ArityMismatch {
        name: String,
        expected: usize,
        got: usize,
    },

    /// A call was attempted on a value that is not a native function.
    #[error("value of type {type_name} is not callable")]
    NotCallable { type_name: &'static str },

    /// A native function signalled failure.
    #[error("{name}: {message}")]
    Native { name: String, message: String },
}

impl EvalError {
    /// The variable name for `UndefinedVariable`, `None` otherwise.
    pub fn undefined_name(&self) -> Option<&str> {
        match self {
            EvalError::UndefinedVariable { name } => Some(name),
            _ => None,
        }
    }
}

/// Undefined variable.
#[cold]
pub fn undefined_variable(name: &str) -> EvalError {
    EvalError::UndefinedVariable {
        name: name.to_string(),
    }
}

/// Wrong number of arguments to a native function.
#[cold]
pub fn wrong_arg_count(name: &str, expected: usize, got: usize) -> EvalError {
    EvalError::ArityMismatch {
        name: name.to_string(),
        expected,
        got,
    }
}

/// Call on a non-callable value.
#[cold]
pub fn not_callable(type_name: &'static str) -> EvalError {
    EvalError::NotCallable { type_name }
}

/// Failure reported by a native function body.
#[cold]
pub fn native_error(name: &str, message: impl Into<String>) -> EvalError {
    EvalError::Native {
        name: name.to_string(),
        message: message.into(),
    }
}

#[cfg(test)]
mod tests;
