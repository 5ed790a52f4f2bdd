//! Numeric values.

use std::fmt;

/// A runtime number: 32-bit integer or 64-bit float.
///
/// Arithmetic lives in the evaluator; this type only exposes the coercions
/// it needs to pick a promotion rule for mixed operands.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Number {
    Int(i32),
    Double(f64),
}

impl Number {
    /// Positive infinity. Immutable for the whole process.
    pub const INFINITY: Number = Number::Double(f64::INFINITY);

    /// Integer view. Doubles truncate toward zero, saturating at the `i32`
    /// bounds; NaN becomes 0.
    #[inline]
    #[expect(
        clippy::cast_possible_truncation,
        reason = "truncation toward zero is the documented coercion"
    )]
    pub fn int_val(self) -> i32 {
        match self {
            Number::Int(n) => n,
            Number::Double(d) => d as i32,
        }
    }

    /// Float view. Integers widen exactly.
    #[inline]
    pub fn double_val(self) -> f64 {
        match self {
            Number::Int(n) => f64::from(n),
            Number::Double(d) => d,
        }
    }

    #[inline]
    pub fn is_int(self) -> bool {
        matches!(self, Number::Int(_))
    }
}

impl From<i32> for Number {
    fn from(n: i32) -> Self {
        Number::Int(n)
    }
}

impl From<f64> for Number {
    fn from(d: f64) -> Self {
        Number::Double(d)
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Int(n) => write!(f, "{n}"),
            // Debug keeps a fractional part on integral doubles (`3.0`).
            Number::Double(d) => write!(f, "{d:?}"),
        }
    }
}
