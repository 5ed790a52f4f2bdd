//! Opaque handles into the parser's AST arena.
//!
//! The runtime core never inspects syntax. A user-defined function stores
//! the ids of its parameter nodes and body node; the evaluator resolves them
//! against its own arena.
//!
//! # Design
//! - Memory: 4 bytes per handle
//! - Equality: O(1) integer compare
//! - No lifetime tying values to the AST

use std::fmt;

/// Index of an expression node (a function body).
#[derive(Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct ExprId(u32);

impl ExprId {
    #[inline]
    pub const fn new(index: u32) -> Self {
        ExprId(index)
    }

    /// Get the index into the arena.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Debug for ExprId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ExprId({})", self.0)
    }
}

/// Index of a parameter node in a function signature.
#[derive(Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct ParamId(u32);

impl ParamId {
    #[inline]
    pub const fn new(index: u32) -> Self {
        ParamId(index)
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Debug for ParamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ParamId({})", self.0)
    }
}
