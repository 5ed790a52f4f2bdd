//! Ordered tokenizer rule tables.
//!
//! A rule table is a list of `(pattern, action)` pairs tried strictly in
//! order against the unconsumed input. The **first** rule whose pattern
//! matches a non-empty prefix wins; this is priority order, not longest
//! match.
//!
//! # Authoring Invariant
//!
//! Because the first match wins, a broad rule placed before a more specific
//! one silently shadows it. For example `[0-9]` listed before `[0-9]+` makes
//! the second rule unreachable and splits `42` into two tokens. Tables must be
//! written most-specific-first. This is not checked at runtime.

use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

use crate::TokenKind;

/// What happens to a lexeme matched by a rule.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum RuleAction {
    /// Discard the lexeme (whitespace, comments) and keep scanning.
    Skip,
    /// Produce a token of the given kind.
    Emit(TokenKind),
}

/// A rule pattern failed to compile.
#[derive(Clone, Debug, Error)]
#[error("invalid rule pattern `{pattern}`: {source}")]
pub struct RuleError {
    pub pattern: String,
    source: regex::Error,
}

/// A single tokenizer rule: a pattern anchored at the cursor plus an action.
#[derive(Clone, Debug)]
pub struct Rule {
    pattern: Box<str>,
    regex: Regex,
    action: RuleAction,
}

impl Rule {
    /// Compile a rule. The pattern is anchored at the current position
    /// automatically; a leading `^` is allowed but not required.
    pub fn new(pattern: &str, action: RuleAction) -> Result<Self, RuleError> {
        let regex = Regex::new(&format!("^(?:{pattern})")).map_err(|source| RuleError {
            pattern: pattern.to_owned(),
            source,
        })?;
        Ok(Rule {
            pattern: pattern.into(),
            regex,
            action,
        })
    }

    /// The pattern as authored (without the implicit anchor).
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn action(&self) -> RuleAction {
        self.action
    }

    /// Length in bytes of the prefix of `input` this rule matches.
    ///
    /// Empty matches count as no match.
    #[inline]
    pub fn match_len(&self, input: &str) -> Option<usize> {
        self.regex
            .find(input)
            .map(|m| m.end())
            .filter(|&len| len > 0)
    }
}

/// The default rule table, in priority order.
pub const DEFAULT_RULES: &[(&str, RuleAction)] = &[
    // ASCII whitespace only; other Unicode spaces are lexical errors
    (r"[ \t\n\r\x0B\x0C]+", RuleAction::Skip),
    // Single-line comments
    (r"//[^\n]*", RuleAction::Skip),
    // Multi-line comments (non-greedy, may span lines)
    (r"/\*[\s\S]*?\*/", RuleAction::Skip),
    // Numbers
    (r"[0-9]+", RuleAction::Emit(TokenKind::Number)),
    // Strings (no escapes, no embedded quotes)
    (r#""[^"]*""#, RuleAction::Emit(TokenKind::String)),
];

static DEFAULT_TABLE: LazyLock<RuleTable> = LazyLock::new(build_default_table);

#[expect(
    clippy::expect_used,
    reason = "default patterns are constants covered by tests"
)]
fn build_default_table() -> RuleTable {
    DEFAULT_RULES
        .iter()
        .fold(RuleTable::builder(), |b, &(pattern, action)| {
            b.rule(pattern, action)
        })
        .build()
        .expect("default tokenizer rules must compile")
}

/// An ordered list of tokenizer rules.
#[derive(Clone, Debug)]
pub struct RuleTable {
    rules: Vec<Rule>,
}

impl RuleTable {
    /// The shared default table, compiled once per process.
    pub fn default_rules() -> &'static RuleTable {
        &DEFAULT_TABLE
    }

    pub fn builder() -> RuleTableBuilder {
        RuleTableBuilder::default()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Rule> + '_ {
        self.rules.iter()
    }

    /// Find the first rule matching a non-empty prefix of `input`.
    ///
    /// Returns the winning rule and the matched length in bytes.
    pub fn first_match(&self, input: &str) -> Option<(&Rule, usize)> {
        self.rules
            .iter()
            .find_map(|rule| rule.match_len(input).map(|len| (rule, len)))
    }
}

impl Default for RuleTable {
    fn default() -> Self {
        RuleTable::default_rules().clone()
    }
}

/// Builder for [`RuleTable`]. Rules keep the order they are added in.
#[derive(Clone, Debug, Default)]
pub struct RuleTableBuilder {
    entries: Vec<(String, RuleAction)>,
}

impl RuleTableBuilder {
    #[must_use]
    pub fn rule(mut self, pattern: impl Into<String>, action: RuleAction) -> Self {
        self.entries.push((pattern.into(), action));
        self
    }

    /// Add a rule whose matches are discarded.
    #[must_use]
    pub fn skip(self, pattern: impl Into<String>) -> Self {
        self.rule(pattern, RuleAction::Skip)
    }

    /// Add a rule producing tokens of `kind`.
    #[must_use]
    pub fn token(self, pattern: impl Into<String>, kind: TokenKind) -> Self {
        self.rule(pattern, RuleAction::Emit(kind))
    }

    /// Compile every pattern. Fails on the first invalid one.
    pub fn build(self) -> Result<RuleTable, RuleError> {
        let rules = self
            .entries
            .iter()
            .map(|(pattern, action)| Rule::new(pattern, *action))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(RuleTable { rules })
    }
}
