//! Hyperbolic sine and cosine, built on the exponential approximation.
//!
//! Both halves come from a single `e^x` evaluation: `sinh = (e^x - e^-x)/2`
//! and `cosh = (e^x + e^-x)/2`, with `e^-x` recovered by one division.

use super::pow::exp;
use crate::lane::Lane;

/// Approximation of `sinh(x)`.
#[inline(always)]
pub fn sinh<const ORDER: u32, L: Lane>(x: L) -> L {
    let e = exp::<ORDER, L>(x);
    let er = L::splat(0.5) / e;
    L::splat(0.5) * e - er
}

/// Approximation of `cosh(x)`.
#[inline(always)]
pub fn cosh<const ORDER: u32, L: Lane>(x: L) -> L {
    let e = exp::<ORDER, L>(x);
    let er = L::splat(0.5) / e;
    L::splat(0.5) * e + er
}

/// Simultaneous approximation of `(sinh(x), cosh(x))`.
///
/// Cheaper than two separate calls when both halves are needed, since the
/// shared `e^x` is evaluated once.
#[inline(always)]
pub fn sinh_cosh<const ORDER: u32, L: Lane>(x: L) -> (L, L) {
    let e = exp::<ORDER, L>(x);
    let er = L::splat(0.5) / e;
    let eh = L::splat(0.5) * e;
    (eh - er, eh + er)
}
