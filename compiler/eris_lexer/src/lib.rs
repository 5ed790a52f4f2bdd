//! Eris Lexer - rule-table tokenizer for the Eris scripting language.
//!
//! The tokenizer turns one complete source text into a lazy stream of
//! [`Token`]s. It knows nothing about runtime values, so the parser and
//! external tooling can depend on it alone.
//!
//! # Architecture
//!
//! ```text
//! source → Tokenizer ─(RuleTable, first match wins)→ Token → parser
//! ```
//!
//! - [`RuleTable`]: ordered `(pattern, action)` rules. The default table
//!   skips whitespace and comments and recognizes numbers and strings.
//! - [`Tokenizer`]: cursor + line counter over the source; pulls one token
//!   per [`Tokenizer::next_token`] call.
//! - [`LexError`]: no rule matched the next character.
//!
//! # Usage
//!
//! ```text
//! let tokens = eris_lexer::tokenize("42 \"hi\"")?;
//! assert_eq!(tokens.len(), 3); // NUMBER, STRING, EOF
//! ```

mod lex_error;
mod rules;
mod token;
mod tokenizer;

pub use lex_error::LexError;
pub use rules::{Rule, RuleAction, RuleError, RuleTable, RuleTableBuilder};
pub use token::{Span, Token, TokenKind};
pub use tokenizer::Tokenizer;

/// Tokenize a whole source text with the default rule table.
///
/// The returned list always ends with a single [`TokenKind::Eof`] token.
pub fn tokenize(source: &str) -> Result<Vec<Token<'_>>, LexError> {
    Tokenizer::new(source).collect_all()
}

/// Tokenize a whole source text with a caller-supplied rule table.
///
/// The tokens borrow `source` only; `rules` may be dropped or mutated
/// as soon as this returns.
pub fn tokenize_with<'src>(
    source: &'src str,
    rules: &RuleTable,
) -> Result<Vec<Token<'src>>, LexError> {
    Tokenizer::with_rules(source, rules).collect_all()
}
