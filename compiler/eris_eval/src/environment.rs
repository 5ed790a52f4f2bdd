//! Scope frames for lexical scoping, closures and object members.
//!
//! All frames live in one [`Environments`] arena and are addressed by
//! [`EnvId`]. A frame holds its local bindings and an optional parent link.
//! Values (objects, classes, strings, functions) hold `EnvId`s, never owning
//! pointers, so every sharing pattern is representable, including a function
//! bound in the very frame it closes over. The arena owns everything and is
//! dropped wholesale with the interpreter session.
//!
//! # Resolution
//!
//! `resolve`, `lookup`, `assign` and `contains` walk the parent chain from
//! the starting frame toward the root, self first. Cost is linear in chain
//! depth; there is no slot caching. The self-before-parent order is what
//! implements shadowing.
//!
//! # Invariants
//! - Names within one frame are unique; `define` overwrites in place.
//! - `assign` never creates a binding.
//! - A parent always has a smaller index than its children, so chains are
//!   finite.
//! - An `EnvId` is only meaningful for the arena that created it.

use std::fmt;

use rustc_hash::FxHashMap;

use crate::errors::undefined_variable;
use crate::{EvalError, EvalResult, ExprId, Heap, NativeFn, ParamId, Value};

/// Index of a frame in an [`Environments`] arena.
#[derive(Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct EnvId(u32);

impl EnvId {
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl fmt::Debug for EnvId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EnvId({})", self.0)
    }
}

/// Identity token used when displaying object-like values.
impl fmt::Display for EnvId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A single scope frame.
#[derive(Clone, Debug, Default)]
struct Frame {
    /// Local bindings (`FxHashMap` for faster hashing of short names).
    record: FxHashMap<Box<str>, Value>,
    /// Enclosing frame, `None` for a root.
    parent: Option<EnvId>,
}

/// Arena of scope frames.
///
/// Created with one root frame (the global scope). Further roots can be
/// added with [`new_root`](Self::new_root).
#[derive(Clone, Debug)]
pub struct Environments {
    frames: Vec<Frame>,
}

impl Environments {
    /// The global frame every arena starts with.
    pub const ROOT: EnvId = EnvId(0);

    pub fn new() -> Self {
        Self::with_capacity(1)
    }

    /// Create an arena with room for `capacity` frames before reallocating.
    pub fn with_capacity(capacity: usize) -> Self {
        let mut frames = Vec::with_capacity(capacity.max(1));
        frames.push(Frame::default());
        Environments { frames }
    }

    #[inline]
    pub fn root(&self) -> EnvId {
        Self::ROOT
    }

    /// Number of frames allocated so far.
    #[inline]
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Always `false`: an arena holds at least its root frame.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    fn alloc(&mut self, parent: Option<EnvId>) -> EnvId {
        let Ok(index) = u32::try_from(self.frames.len()) else {
            panic!("environment arena exhausted");
        };
        self.frames.push(Frame {
            record: FxHashMap::default(),
            parent,
        });
        let id = EnvId(index);
        tracing::trace!(env = %id, parent = ?parent, "new frame");
        id
    }

    #[inline]
    fn frame(&self, env: EnvId) -> &Frame {
        &self.frames[env.index()]
    }

    #[inline]
    fn frame_mut(&mut self, env: EnvId) -> &mut Frame {
        &mut self.frames[env.index()]
    }

    // Frame Structure

    /// Allocate an additional frame with no parent.
    pub fn new_root(&mut self) -> EnvId {
        self.alloc(None)
    }

    /// Allocate a frame enclosed by `parent`.
    pub fn child(&mut self, parent: EnvId) -> EnvId {
        self.alloc(Some(parent))
    }

    #[inline]
    pub fn parent(&self, env: EnvId) -> Option<EnvId> {
        self.frame(env).parent
    }

    /// `env` followed by each enclosing frame up to its root.
    pub fn ancestors(&self, env: EnvId) -> impl Iterator<Item = EnvId> + '_ {
        std::iter::successors(Some(env), move |&e| self.parent(e))
    }

    /// Number of enclosing frames (0 for a root).
    pub fn depth(&self, env: EnvId) -> usize {
        self.ancestors(env).count() - 1
    }

    // Scope Operations

    /// Bind `name` in `env` itself, overwriting any local binding.
    ///
    /// Never touches ancestor frames, even if they bind `name`.
    pub fn define(&mut self, env: EnvId, name: &str, value: Value) {
        let record = &mut self.frame_mut(env).record;
        if let Some(slot) = record.get_mut(name) {
            *slot = value;
        } else {
            record.insert(name.into(), value);
        }
    }

    /// Nearest frame, starting at `env`, whose record binds `name`.
    pub fn resolve(&self, env: EnvId, name: &str) -> Result<EnvId, EvalError> {
        self.ancestors(env)
            .find(|&e| self.frame(e).record.contains_key(name))
            .ok_or_else(|| {
                tracing::debug!(env = %env, name, "unresolved variable");
                undefined_variable(name)
            })
    }

    /// Borrow the value bound to `name` in the nearest frame.
    pub fn get(&self, env: EnvId, name: &str) -> Result<&Value, EvalError> {
        let owner = self.resolve(env, name)?;
        self.frame(owner)
            .record
            .get(name)
            .ok_or_else(|| undefined_variable(name))
    }

    /// Value bound to `name` in the nearest frame.
    pub fn lookup(&self, env: EnvId, name: &str) -> EvalResult {
        self.get(env, name).cloned()
    }

    /// Overwrite the existing binding of `name` in the frame that owns it.
    ///
    /// Fails with `UndefinedVariable`, and creates nothing, when no frame in
    /// the chain binds `name`.
    pub fn assign(&mut self, env: EnvId, name: &str, value: Value) -> Result<(), EvalError> {
        let owner = self.resolve(env, name)?;
        match self.frame_mut(owner).record.get_mut(name) {
            Some(slot) => {
                *slot = value;
                Ok(())
            }
            None => Err(undefined_variable(name)),
        }
    }

    /// Whether `resolve` would succeed.
    pub fn contains(&self, env: EnvId, name: &str) -> bool {
        self.ancestors(env)
            .any(|e| self.frame(e).record.contains_key(name))
    }

    /// Binding of `name` in `env` only, ignoring ancestors.
    pub fn get_local(&self, env: EnvId, name: &str) -> Option<&Value> {
        self.frame(env).record.get(name)
    }

    /// Names bound directly in `env`, in no particular order.
    pub fn local_names(&self, env: EnvId) -> impl Iterator<Item = &str> + '_ {
        self.frame(env).record.keys().map(|k| &**k)
    }

    // Object Model

    /// New object whose member frame is enclosed by `parent`, if any.
    pub fn new_object(&mut self, parent: Option<EnvId>) -> Value {
        Value::object(self.alloc(parent))
    }

    /// New class whose member frame is enclosed by `parent`, if any.
    pub fn new_class(&mut self, parent: Option<EnvId>) -> Value {
        Value::class(self.alloc(parent))
    }

    /// New instance of the class whose member frame is `class`.
    ///
    /// The instance's member frame is a child of the class frame: class
    /// members resolve through the chain, and a `define` on the instance
    /// shadows them without touching the class.
    pub fn instantiate(&mut self, class: EnvId) -> Value {
        Value::object(self.child(class))
    }

    /// New string value with its own (root) member frame.
    pub fn new_string(&mut self, text: impl Into<Heap<str>>) -> Value {
        let members = self.alloc(None);
        Value::string(text, members)
    }

    /// New native function value with its own (root) member frame.
    pub fn new_native(&mut self, name: &'static str, func: NativeFn) -> Value {
        let members = self.alloc(None);
        Value::native(name, func, members)
    }

    /// New user-defined function capturing `closure`.
    ///
    /// Allocates nothing: the function shares the frame it closes over.
    pub fn closure(
        &self,
        params: impl Into<Heap<[ParamId]>>,
        body: ExprId,
        closure: EnvId,
    ) -> Value {
        debug_assert!(closure.index() < self.frames.len(), "foreign EnvId");
        Value::function(params, body, closure)
    }
}

impl Default for Environments {
    fn default() -> Self {
        Self::new()
    }
}
