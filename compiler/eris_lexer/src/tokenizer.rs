//! Lazy tokenizer over a complete source text.
//!
//! The tokenizer keeps a byte cursor and a line counter. Each call to
//! [`Tokenizer::next_token`] tries the rule table against the unconsumed
//! suffix, advances past the winning match, and either returns a token or
//! (for `Skip` rules) keeps scanning.

use std::iter::FusedIterator;

use crate::rules::{RuleAction, RuleTable};
use crate::{LexError, Span, Token};

/// Count `\n` bytes in a matched lexeme.
#[inline]
fn count_newlines(lexeme: &str) -> usize {
    memchr::memchr_iter(b'\n', lexeme.as_bytes()).count()
}

/// Pulls tokens one at a time from a source text.
///
/// Initialized once from the complete source; there is no streaming input.
/// Also usable as an [`Iterator`] that yields every token before EOF.
#[derive(Clone, Debug)]
pub struct Tokenizer<'src, 'r> {
    source: &'src str,
    rules: &'r RuleTable,
    /// Byte offset of the first unconsumed character.
    cursor: usize,
    /// Current line (1-based).
    line: usize,
    /// Set once the iterator has yielded EOF or an error.
    finished: bool,
}

impl<'src> Tokenizer<'src, 'static> {
    /// Create a tokenizer using the default rule table.
    pub fn new(source: &'src str) -> Self {
        Self::with_rules(source, RuleTable::default_rules())
    }

}

impl<'src, 'r> Tokenizer<'src, 'r> {
    /// Create a tokenizer using a caller-supplied rule table.
    ///
    /// Tokens borrow only the source, never the table.
    pub fn with_rules(source: &'src str, rules: &'r RuleTable) -> Self {
        Tokenizer {
            source,
            rules,
            cursor: 0,
            line: 1,
            finished: false,
        }
    }

    /// Whether the cursor has consumed the whole source.
    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.cursor == self.source.len()
    }

    /// Whether unconsumed source remains.
    ///
    /// Remaining input may still be all whitespace or comments, in which
    /// case the next token is EOF.
    #[inline]
    pub fn has_more_tokens(&self) -> bool {
        self.cursor < self.source.len()
    }

    #[inline]
    pub fn line(&self) -> usize {
        self.line
    }

    #[inline]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    #[inline]
    pub fn source(&self) -> &'src str {
        self.source
    }

    /// Produce the next non-skipped token.
    ///
    /// Returns an EOF token (lexeme `<EOF>`) once the source is exhausted,
    /// and keeps returning it on further calls. Fails with [`LexError`]
    /// when no rule matches; the cursor does not move in that case, so
    /// repeated calls fail identically.
    pub fn next_token(&mut self) -> Result<Token<'src>, LexError> {
        loop {
            let rest = &self.source[self.cursor..];
            let Some(first) = rest.chars().next() else {
                return Ok(Token::eof(self.cursor, self.line));
            };

            let Some((rule, len)) = self.rules.first_match(rest) else {
                tracing::debug!(line = self.line, ch = %first, "no tokenizer rule matched");
                return Err(LexError::unexpected(self.line, first));
            };

            let start = self.cursor;
            let start_line = self.line;
            let lexeme = &rest[..len];
            self.cursor += len;
            self.line += count_newlines(lexeme);

            match rule.action() {
                RuleAction::Skip => {
                    tracing::trace!(start, len, "skipped");
                }
                RuleAction::Emit(kind) => {
                    tracing::trace!(%kind, lexeme, line = start_line, "token");
                    return Ok(Token::new(
                        kind,
                        lexeme,
                        Span::new(start, self.cursor),
                        start_line,
                    ));
                }
            }
        }
    }

    /// Drain the tokenizer, including the trailing EOF token.
    pub(crate) fn collect_all(mut self) -> Result<Vec<Token<'src>>, LexError> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token()?;
            let eof = token.is_eof();
            tokens.push(token);
            if eof {
                return Ok(tokens);
            }
        }
    }
}

impl<'src> Iterator for Tokenizer<'src, '_> {
    type Item = Result<Token<'src>, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        match self.next_token() {
            Ok(token) if token.is_eof() => {
                self.finished = true;
                None
            }
            Ok(token) => Some(Ok(token)),
            Err(err) => {
                self.finished = true;
                Some(Err(err))
            }
        }
    }
}

impl FusedIterator for Tokenizer<'_, '_> {}
