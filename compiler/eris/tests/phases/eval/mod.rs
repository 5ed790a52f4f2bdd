//! Runtime phase tests.
//!
//! These drive `Environments` the way a tree-walking evaluator would:
//! entering blocks, calling functions and instantiating classes.
//!
//! - `scopes` - block scoping, shadowing and assignment
//! - `objects` - closures, classes and instances

mod objects;
mod scopes;
