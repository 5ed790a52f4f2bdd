//! Interpreter session: the arena, the tokenizer rules and the globals.

use eris_eval::{EnvId, Environments, NativeFn, Value};
use eris_lexer::{RuleTable, Token, TokenKind};

use crate::Error;

/// One interpreter instance.
///
/// Owns every scope frame; values created through the session stay valid
/// for as long as the session lives. Dropping it frees all frames at once.
#[derive(Clone, Debug, Default)]
pub struct Session {
    envs: Environments,
    rules: RuleTable,
}

impl Session {
    /// Session with the default tokenizer rules and an empty global frame.
    pub fn new() -> Self {
        Self::default()
    }

    /// Session tokenizing with a host-authored rule table.
    pub fn with_rules(rules: RuleTable) -> Self {
        Session {
            envs: Environments::new(),
            rules,
        }
    }

    /// The global frame.
    #[inline]
    pub fn globals(&self) -> EnvId {
        self.envs.root()
    }

    #[inline]
    pub fn environments(&self) -> &Environments {
        &self.envs
    }

    #[inline]
    pub fn environments_mut(&mut self) -> &mut Environments {
        &mut self.envs
    }

    #[inline]
    pub fn rules(&self) -> &RuleTable {
        &self.rules
    }

    /// Bind a host function under `name` in the global frame.
    ///
    /// Re-registering a name replaces the earlier binding.
    pub fn register_native(&mut self, name: &'static str, func: NativeFn) {
        let native = self.envs.new_native(name, func);
        let globals = self.globals();
        self.envs.define(globals, name, native);
        tracing::debug!(name, "registered native function");
    }

    /// Look up a global and invoke it as a native function.
    pub fn call(&self, name: &str, args: &[Value]) -> Result<Value, Error> {
        let callee = self.envs.get(self.globals(), name)?;
        Ok(callee.call_native(args)?)
    }

    /// Tokenize `source` with this session's rules.
    ///
    /// The result always ends with one EOF token. Tokens borrow `source`
    /// only, so the session stays free for [`literal`](Self::literal).
    pub fn tokenize<'src>(&self, source: &'src str) -> Result<Vec<Token<'src>>, Error> {
        Ok(eris_lexer::tokenize_with(source, &self.rules)?)
    }

    /// Runtime value of a literal token.
    ///
    /// Numbers that fit in `i32` become ints, larger ones doubles. Strings
    /// lose their quotes and get a fresh member frame. `None` for every
    /// other kind.
    pub fn literal(&mut self, token: &Token<'_>) -> Option<Value> {
        match token.kind {
            TokenKind::Number => match token.lexeme.parse::<i32>() {
                Ok(n) => Some(Value::int(n)),
                Err(_) => token.lexeme.parse::<f64>().ok().map(Value::double),
            },
            TokenKind::String => {
                let text = token
                    .lexeme
                    .strip_prefix('"')
                    .and_then(|rest| rest.strip_suffix('"'))
                    .unwrap_or(token.lexeme);
                Some(self.envs.new_string(text))
            }
            TokenKind::Eof | TokenKind::Custom(_) => None,
        }
    }
}
