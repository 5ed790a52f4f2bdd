//! Lexer error type.

use thiserror::Error;

/// No rule in the table matched the next character.
///
/// Fatal to tokenization: the caller must stop pulling tokens.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Error)]
#[error("{line}: unexpected token: \"{ch}\"")]
pub struct LexError {
    /// Line of the offending character (1-based).
    pub line: usize,
    /// The first unconsumed character.
    pub ch: char,
}

impl LexError {
    #[cold]
    pub fn unexpected(line: usize, ch: char) -> Self {
        LexError { line, ch }
    }
}
