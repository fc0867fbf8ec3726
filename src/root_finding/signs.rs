//! Sign utilities for bracketing root-finding algorithms.
//! - `opposite_sign`    : `true` if values have strictly opposite signs
//! - `same_strict_sign` : `true` if both values are nonzero and share a sign

/// Returns `true` if `x` and `y` are nonzero with opposite signs.
#[inline]
pub(crate) fn opposite_sign(x: f64, y: f64) -> bool {
    (x < 0.0 && y > 0.0) || (x > 0.0 && y < 0.0)
}


/// Returns `true` if `x` and `y` are nonzero with the same sign,
/// i.e. `x * y > 0` without the overflow.
#[inline]
pub(crate) fn same_strict_sign(x: f64, y: f64) -> bool {
    (x < 0.0 && y < 0.0) || (x > 0.0 && y > 0.0)
}
