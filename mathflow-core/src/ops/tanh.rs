//! Hyperbolic tangent approximation.
//!
//! An odd polynomial `p(x)` close to `sinh`-like growth is normalised with
//! `p / sqrt(p^2 + 1)`, which clamps the tails to `[-1, 1]` without any
//! branch or range reduction.

use crate::lane::Lane;

/// Approximation of `tanh(x)`.
#[inline(always)]
pub fn tanh<const ORDER: u32, L: Lane>(x: L) -> L {
    const {
        assert!(
            ORDER % 2 == 1 && ORDER >= 3 && ORDER <= 11,
            "order must be an odd number in [3, 11]"
        );
    };

    let x_sq = x * x;
    let p = match ORDER {
        11 => {
            let y_9_11 = L::splat(2.63661358122e-6) + L::splat(3.33765558362e-8) * x_sq;
            let y_7_9_11 = L::splat(0.000199027336899) + y_9_11 * x_sq;
            let y_5_7_9_11 = L::splat(0.00833223857843) + y_7_9_11 * x_sq;
            let y_3_5_7_9_11 = L::splat(0.166667159320) + y_5_7_9_11 * x_sq;
            let y_1_3_5_7_9_11 = L::splat(1.0) + y_3_5_7_9_11 * x_sq;
            x * y_1_3_5_7_9_11
        }
        9 => {
            let y_7_9 = L::splat(0.000192218110330) + L::splat(3.54808622170e-6) * x_sq;
            let y_5_7_9 = L::splat(0.00834777254865) + y_7_9 * x_sq;
            let y_3_5_7_9 = L::splat(0.166658873283) + y_5_7_9 * x_sq;
            let y_1_3_5_7_9 = L::splat(1.0) + y_3_5_7_9 * x_sq;
            x * y_1_3_5_7_9
        }
        7 => {
            let y_5_7 = L::splat(0.00818199927912) + L::splat(0.000243153287690) * x_sq;
            let y_3_5_7 = L::splat(0.166769941467) + y_5_7 * x_sq;
            let y_1_3_5_7 = L::splat(1.0) + y_3_5_7 * x_sq;
            x * y_1_3_5_7
        }
        5 => {
            let y_3_5 = L::splat(0.165326984031) + L::splat(0.00970240200826) * x_sq;
            let y_1_3_5 = L::splat(1.0) + y_3_5 * x_sq;
            x * y_1_3_5
        }
        _ => {
            let y_1_3 = L::splat(1.0) + L::splat(0.183428244899) * x_sq;
            x * y_1_3
        }
    };

    p * (p * p + L::splat(1.0)).rsqrt()
}
