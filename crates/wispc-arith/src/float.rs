use crate::Float;
use std::cmp::Ordering;

/// `x * 10^p`, computed at the widest precision the host float offers.
pub fn adjust_exp10(x: Float, p: i32) -> Float {
    x * 10f64.powi(p)
}

/// A not-a-number value.
pub fn nan() -> Float {
    Float::NAN
}

/// A positive infinity value.
pub fn infinity() -> Float {
    Float::INFINITY
}

/// `true` iff `x` is neither infinite nor NaN.
pub fn finite(x: Float) -> bool {
    x.is_finite()
}

/// Partial order on host floats; `None` when either operand is NaN.
pub fn compare_float(a: Float, b: Float) -> Option<Ordering> {
    a.partial_cmp(&b)
}
