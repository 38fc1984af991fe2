//! Exponential approximations for bases e, 2, and 10.
//!
//! Range reduction splits `log2(base)*x` into an integer exponent, injected
//! directly into the result's IEEE-754 exponent field, and a fraction in
//! `[0, 1)` handled by a minimax fit of `2^f`.

use crate::lane::{BitLane, Lane};

/// Compile-time base tag for [`pow`].
pub trait PowBase {
    /// `log2` of the base.
    const LOG2_BASE: f64;
}

/// Base e.
pub struct BaseE;

/// Base 2.
pub struct Base2;

/// Base 10.
pub struct Base10;

impl PowBase for BaseE {
    const LOG2_BASE: f64 = core::f64::consts::LOG2_E;
}

impl PowBase for Base2 {
    const LOG2_BASE: f64 = 1.0;
}

impl PowBase for Base10 {
    const LOG2_BASE: f64 = core::f64::consts::LOG2_10;
}

/// Minimax fit of `2^x` on `[0, 1]`.
#[inline(always)]
pub(super) fn pow2_kernel<const ORDER: u32, L: Lane>(x: L) -> L {
    const {
        assert!(ORDER >= 3 && ORDER <= 6, "order must be in [3, 6]");
    };

    let x_sq = x * x;
    match ORDER {
        6 => {
            let x_5_6 = L::splat(0.00124359387839) + L::splat(0.000217187820427) * x;
            let x_3_4 = L::splat(0.0554833098983) + L::splat(0.00967911763840) * x;
            let x_1_2 = L::splat(0.693147003658) + L::splat(0.240229787107) * x;
            let x_3_4_5_6 = x_3_4 + x_5_6 * x_sq;
            let x_1_2_3_4_5_6 = x_1_2 + x_3_4_5_6 * x_sq;
            L::splat(1.0) + x_1_2_3_4_5_6 * x
        }
        5 => {
            let x_4_5 = L::splat(0.00899009909264) + L::splat(0.00187839071291) * x;
            let x_2_3 = L::splat(0.240156326598) + L::splat(0.0558229130202) * x;
            let x_2_3_4_5 = x_2_3 + x_4_5 * x_sq;
            let x_0_1 = L::splat(1.0) + L::splat(0.693152270576) * x;
            x_0_1 + x_2_3_4_5 * x_sq
        }
        4 => {
            let x_3_4 = L::splat(0.0520324008177) + L::splat(0.0135557244044) * x;
            let x_1_2 = L::splat(0.693032120001) + L::splat(0.241379754777) * x;
            let x_1_2_3_4 = x_1_2 + x_3_4 * x_sq;
            L::splat(1.0) + x_1_2_3_4 * x
        }
        _ => {
            let x_2_3 = L::splat(0.226307586882) + L::splat(0.0782680256330) * x;
            let x_0_1 = L::splat(1.0) + L::splat(0.695424387485) * x;
            x_0_1 + x_2_3 * x_sq
        }
    }
}

/// Approximation of `base^x`, with the base chosen at compile time.
///
/// The scaled input is clamped at the smallest normal exponent, so deep
/// underflow flushes to the bottom of the normal range rather than hitting
/// an out-of-range float-to-int conversion.
#[inline(always)]
pub fn pow<B: PowBase, const ORDER: u32, L: Lane>(x: L) -> L {
    const {
        assert!(ORDER >= 3 && ORDER <= 6, "order must be in [3, 6]");
    };

    let x = (L::splat(B::LOG2_BASE) * x).max(L::splat(L::MIN_EXP));
    let t = x.trunc();
    let l = L::select(x.lt(L::splat(0.0)), t - L::splat(1.0), t);
    let f = x - l;
    let v_bits = (l + L::splat(L::EXP_BIAS as f64))
        .trunc_int()
        .shl(L::MANTISSA_BITS);

    L::from_bits(v_bits) * pow2_kernel::<ORDER, L>(f)
}

/// Approximation of `e^x`.
#[inline(always)]
pub fn exp<const ORDER: u32, L: Lane>(x: L) -> L {
    pow::<BaseE, ORDER, L>(x)
}

/// Approximation of `2^x`.
#[inline(always)]
pub fn exp2<const ORDER: u32, L: Lane>(x: L) -> L {
    pow::<Base2, ORDER, L>(x)
}

/// Approximation of `10^x`.
#[inline(always)]
pub fn exp10<const ORDER: u32, L: Lane>(x: L) -> L {
    pow::<Base10, ORDER, L>(x)
}
