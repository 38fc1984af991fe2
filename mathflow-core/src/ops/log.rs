//! Logarithm approximations for bases e, 2, and 10.
//!
//! The exponent field is peeled off the input's bit pattern and added back
//! (scaled by `1/log2(base)`) to a minimax fit of `log2` of the remaining
//! mantissa in `[1, 2)`.

use super::pow::{Base10, Base2, BaseE, PowBase};
use crate::lane::{BitLane, Lane};

/// Minimax fit of `log2(x)` on `[1, 2]`.
#[inline(always)]
pub(super) fn log2_kernel<const ORDER: u32, L: Lane>(x: L) -> L {
    const {
        assert!(ORDER >= 3 && ORDER <= 6, "order must be in [3, 6]");
    };

    let x_sq = x * x;
    match ORDER {
        6 => {
            let x_5_6 = L::splat(0.276834061071) + L::splat(-0.0258400886535) * x;
            let x_3_4 = L::splat(3.30388341157) + L::splat(-1.27446900713) * x;
            let x_1_2 = L::splat(6.12708086513) + L::splat(-5.36371998242) * x;
            let x_3_4_5_6 = x_3_4 + x_5_6 * x_sq;
            let x_1_2_3_4_5_6 = x_1_2 + x_3_4_5_6 * x_sq;
            L::splat(-3.04376925958) + x_1_2_3_4_5_6 * x
        }
        5 => {
            let x_4_5 = L::splat(-0.419319345483) + L::splat(0.0451488402558) * x;
            let x_2_3 = L::splat(-3.56885211615) + L::splat(1.64139451414) * x;
            let x_0_1 = L::splat(-2.80534277658) + L::splat(5.10697088382) * x;
            x_0_1 + (x_2_3 + x_4_5 * x_sq) * x_sq
        }
        4 => {
            let x_3_4 = L::splat(0.649709537672) + L::splat(-0.0821303550902) * x;
            let x_1_2 = L::splat(4.08637809379) + L::splat(-2.13412984371) * x;
            let x_1_2_3_4 = x_1_2 + x_3_4 * x_sq;
            L::splat(-2.51982743265) + x_1_2_3_4 * x
        }
        _ => {
            let x_2_3 = L::splat(-1.05974531422) + L::splat(0.159220010975) * x;
            let x_0_1 = L::splat(-2.16417056258) + L::splat(3.06469586582) * x;
            x_0_1 + x_2_3 * x_sq
        }
    }
}

/// Approximation of the base-`B` logarithm of `x`, for `x > 0`.
///
/// Negative or zero inputs produce an unspecified finite value; callers own
/// domain compliance.
#[inline(always)]
pub fn log_base<B: PowBase, const ORDER: u32, L: Lane>(x: L) -> L {
    const {
        assert!(ORDER >= 3 && ORDER <= 6, "order must be in [3, 6]");
    };

    let v_bits = x.to_bits();
    let e_bits = v_bits.and(L::Bits::splat(L::EXP_MASK));
    let e = L::int_to_float(e_bits.shr(L::MANTISSA_BITS)) - L::splat(L::EXP_BIAS as f64);
    let mantissa = L::from_bits(v_bits.sub(e_bits).or(L::Bits::splat(L::ONE_BITS)));

    L::splat(1.0 / B::LOG2_BASE) * (e + log2_kernel::<ORDER, L>(mantissa))
}

/// Approximation of `ln(x)`.
#[inline(always)]
pub fn log<const ORDER: u32, L: Lane>(x: L) -> L {
    log_base::<BaseE, ORDER, L>(x)
}

/// Approximation of `log2(x)`.
#[inline(always)]
pub fn log2<const ORDER: u32, L: Lane>(x: L) -> L {
    log_base::<Base2, ORDER, L>(x)
}

/// Approximation of `log10(x)`.
#[inline(always)]
pub fn log10<const ORDER: u32, L: Lane>(x: L) -> L {
    log_base::<Base10, ORDER, L>(x)
}
