//! Eris - runtime core of the Eris scripting language.
//!
//! Ties the standalone tokenizer ([`eris_lexer`]) to the value model and
//! scope arena ([`eris_eval`]) and adds what a host needs to drive them:
//!
//! - [`Session`]: owns the environment arena and the tokenizer rules, and
//!   binds native functions into the global frame.
//! - [`Error`]: one error type for every failure the core can raise.
//! - [`init_tracing`]: opt-in log output controlled by `RUST_LOG`.
//!
//! ```text
//! source ─► Session::tokenize ─► tokens ─► parser ─► evaluator
//!                                                      │
//!                                   Session::environments_mut ◄┘
//! ```

mod error;
mod session;

use std::sync::Once;

pub use error::Error;
pub use session::Session;

pub use eris_eval::{
    check_arity, errors, EnvId, Environments, EvalError, EvalResult, ExprId, FunctionValue, Heap,
    NativeFn, NativeFunctionValue, Number, ParamId, StringValue, Value,
};
pub use eris_lexer::{
    tokenize, tokenize_with, LexError, Rule, RuleAction, RuleError, RuleTable, RuleTableBuilder,
    Span, Token, TokenKind, Tokenizer,
};

static TRACING_INIT: Once = Once::new();

/// Initialize the tracing subscriber.
///
/// Does nothing unless `RUST_LOG` is set; the filter is read from it
/// (e.g. `RUST_LOG=eris_eval=trace`). Safe to call more than once.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}
