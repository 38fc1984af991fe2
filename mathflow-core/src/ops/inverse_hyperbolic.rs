//! Inverse hyperbolic functions, composed from the logarithm approximation.
//!
//! Each function is its textbook log identity with the order parameter
//! forwarded to the underlying [`log`] fit, so accuracy tracks the
//! logarithm's accuracy directly.

use super::log::log;
use crate::lane::Lane;

/// Approximation of `asinh(x) = ln(x + sqrt(x^2 + 1))`.
///
/// Evaluated on `|x|` and mirrored, which keeps the log argument at or
/// above one for every input.
#[inline(always)]
pub fn asinh<const ORDER: u32, L: Lane>(x: L) -> L {
    let ax = x.abs();
    let r = log::<ORDER, L>(ax + (ax * ax + L::splat(1.0)).sqrt());
    L::select(x.gt(L::splat(0.0)), r, -r)
}

/// Approximation of `acosh(x) = ln(x + sqrt(x^2 - 1))`, for `x >= 1`.
///
/// Inputs below one are outside the domain and produce an unspecified
/// value.
#[inline(always)]
pub fn acosh<const ORDER: u32, L: Lane>(x: L) -> L {
    log::<ORDER, L>(x + (x * x - L::splat(1.0)).sqrt())
}

/// Approximation of `atanh(x) = ln((1 + x)/(1 - x)) / 2`, for `|x| < 1`.
#[inline(always)]
pub fn atanh<const ORDER: u32, L: Lane>(x: L) -> L {
    let ax = x.abs();
    let r = L::splat(0.5) * log::<ORDER, L>((L::splat(1.0) + ax) / (L::splat(1.0) - ax));
    L::select(x.gt(L::splat(0.0)), r, -r)
}
