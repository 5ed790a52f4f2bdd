//! Shared, immutable heap payloads for values.
//!
//! `Heap<T>` wraps `Rc<T>`. Values are single-threaded, so reference
//! counting is non-atomic and `Value` is `!Send`.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Deref;
use std::rc::Rc;

/// Reference-counted, immutable payload shared between value clones.
#[repr(transparent)]
pub struct Heap<T: ?Sized>(Rc<T>);

impl<T: ?Sized> Heap<T> {
    /// Whether both handles share one allocation.
    #[inline]
    pub fn ptr_eq(a: &Self, b: &Self) -> bool {
        Rc::ptr_eq(&a.0, &b.0)
    }
}

impl<T: ?Sized> Clone for Heap<T> {
    #[inline]
    fn clone(&self) -> Self {
        Heap(Rc::clone(&self.0))
    }
}

impl<T: ?Sized> Deref for Heap<T> {
    type Target = T;

    #[inline]
    fn deref(&self) -> &T {
        &self.0
    }
}

impl<T: ?Sized + fmt::Debug> fmt::Debug for Heap<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&*self.0, f)
    }
}

impl<T: ?Sized + PartialEq> PartialEq for Heap<T> {
    fn eq(&self, other: &Self) -> bool {
        *self.0 == *other.0
    }
}

impl<T: ?Sized + Eq> Eq for Heap<T> {}

impl<T: ?Sized + Hash> Hash for Heap<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.hash(state);
    }
}

impl From<&str> for Heap<str> {
    fn from(s: &str) -> Self {
        Heap(Rc::from(s))
    }
}

impl From<String> for Heap<str> {
    fn from(s: String) -> Self {
        Heap(Rc::from(s))
    }
}

impl<T> From<Vec<T>> for Heap<[T]> {
    fn from(items: Vec<T>) -> Self {
        Heap(Rc::from(items))
    }
}

impl<T: Clone> From<&[T]> for Heap<[T]> {
    fn from(items: &[T]) -> Self {
        Heap(Rc::from(items))
    }
}

#[cfg(test)]
mod tests;
