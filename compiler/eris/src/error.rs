//! Unified error type.

use thiserror::Error;

use eris_eval::EvalError;
use eris_lexer::{LexError, RuleError};

/// Any failure raised by the runtime core.
#[derive(Debug, Error)]
pub enum Error {
    /// No tokenizer rule matched.
    #[error("lex error: {0}")]
    Lex(#[from] LexError),

    /// Scope resolution or a native call failed.
    #[error(transparent)]
    Eval(#[from] EvalError),

    /// A host-authored rule pattern did not compile.
    #[error(transparent)]
    Rule(#[from] RuleError),
}

impl Error {
    /// Source line for lexical errors.
    pub fn line(&self) -> Option<usize> {
        match self {
            Error::Lex(err) => Some(err.line),
            Error::Eval(_) | Error::Rule(_) => None,
        }
    }
}
