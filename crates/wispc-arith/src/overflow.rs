use crate::{Int, INT_WIDTH};
use std::cmp::Ordering;

/// Arithmetic left shift with wrap semantics. Negative `b` shifts right
/// instead; shift counts whose magnitude reaches the host width saturate to
/// zero (all bits shifted out).
pub fn shift_left(a: Int, b: i32) -> Int {
    if b < 0 {
        return shift_right(a, b.checked_neg().unwrap_or(i32::MAX));
    }
    if (b as u32) >= INT_WIDTH {
        return 0;
    }
    a.wrapping_shl(b as u32)
}

/// Arithmetic right shift (sign-propagating). Negative `b` shifts left
/// instead; shift counts whose magnitude reaches the host width saturate to
/// the sign-fill value (`-1` for negative `a`, `0` otherwise).
///
/// Rust guarantees `>>` on a signed integer is an arithmetic shift, so no
/// emulation is needed for platforms "lacking" it the way the algorithm this
/// is grounded on required.
pub fn shift_right(a: Int, b: i32) -> Int {
    if b < 0 {
        return shift_left(a, b.checked_neg().unwrap_or(i32::MAX));
    }
    if (b as u32) >= INT_WIDTH {
        return if a < 0 { -1 } else { 0 };
    }
    a >> b
}

/// `true` iff negating `a` would overflow the host integer (`a == Int::MIN`).
pub fn neg_overflows(a: Int) -> bool {
    a.checked_neg().is_none()
}

pub fn add_overflows(a: Int, b: Int) -> bool {
    a.checked_add(b).is_none()
}

pub fn sub_overflows(a: Int, b: Int) -> bool {
    a.checked_sub(b).is_none()
}

pub fn mul_overflows(a: Int, b: Int) -> bool {
    a.checked_mul(b).is_none()
}

/// `a / b` rounded toward negative infinity.
pub fn floored_div(a: Int, b: Int) -> Int {
    a.div_euclid(b)
}

/// The unique `r` with `0 <= r < |b|` satisfying
/// `a == floored_div(a, b) * b + r`.
pub fn floored_mod(a: Int, b: Int) -> Int {
    a.rem_euclid(b)
}

/// Total order on host integers.
pub fn compare_int(a: Int, b: Int) -> Ordering {
    a.cmp(&b)
}
