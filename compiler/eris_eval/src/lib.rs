//! Eris Eval - runtime value model and scope arena.
//!
//! This crate provides the data the tree-walking evaluator operates on:
//!
//! - [`Value`]: closed enum over every runtime kind (null, booleans,
//!   numbers, objects, classes, strings, user functions, native functions)
//!   with uniform display and truthiness.
//! - [`Environments`]: arena of scope frames. Frames are addressed by
//!   [`EnvId`] indices, so closures and objects share frames without owning
//!   them, and a function bound in the scope it captures is not an ownership
//!   cycle.
//! - [`EvalError`]: typed failures (`UndefinedVariable`, native-call errors).
//!
//! The parser's AST is external; functions refer to it through the opaque
//! [`ExprId`] / [`ParamId`] handles.

mod environment;
pub mod errors;
mod heap;
mod node_id;
mod value;

pub use environment::{EnvId, Environments};
pub use errors::{EvalError, EvalResult};
pub use heap::Heap;
pub use node_id::{ExprId, ParamId};
pub use value::{
    check_arity, FunctionValue, NativeFn, NativeFunctionValue, Number, StringValue, Value,
};
