//! Token types produced by the tokenizer.

use std::fmt;

/// Byte range of a lexeme in the source text (end exclusive).
#[derive(Copy, Clone, Eq, PartialEq, Hash, Default)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    /// Span used for the synthetic EOF token at `pos`.
    #[inline]
    pub const fn empty(pos: usize) -> Self {
        Span { start: pos, end: pos }
    }

    #[inline]
    pub const fn new(start: usize, end: usize) -> Self {
        Span { start, end }
    }

    #[inline]
    pub const fn len(self) -> usize {
        self.end - self.start
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.start == self.end
    }
}

impl fmt::Debug for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

/// Classification of a lexeme.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum TokenKind {
    /// One or more decimal digits.
    Number,
    /// Double-quoted string, quotes included in the lexeme.
    String,
    /// End of input. Lexeme is always `<EOF>`.
    Eof,
    /// Kind introduced by a host-authored rule table.
    Custom(&'static str),
}

impl TokenKind {
    /// Upper-case display name (`NUMBER`, `STRING`, `EOF`, or the custom tag).
    pub fn name(self) -> &'static str {
        match self {
            TokenKind::Number => "NUMBER",
            TokenKind::String => "STRING",
            TokenKind::Eof => "EOF",
            TokenKind::Custom(name) => name,
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A classified lexeme.
///
/// Borrows its text from the source; holds no reference to the tokenizer
/// that produced it.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Token<'src> {
    pub kind: TokenKind,
    pub lexeme: &'src str,
    pub span: Span,
    /// Line on which the lexeme starts (1-based).
    pub line: usize,
}

impl<'src> Token<'src> {
    /// Lexeme of the EOF token.
    pub const EOF_LEXEME: &'static str = "<EOF>";

    #[inline]
    pub fn new(kind: TokenKind, lexeme: &'src str, span: Span, line: usize) -> Self {
        Token {
            kind,
            lexeme,
            span,
            line,
        }
    }

    /// The end-of-input token at byte offset `pos`.
    #[inline]
    pub fn eof(pos: usize, line: usize) -> Self {
        Token::new(TokenKind::Eof, Self::EOF_LEXEME, Span::empty(pos), line)
    }

    #[inline]
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:?}", self.kind, self.lexeme)
    }
}
