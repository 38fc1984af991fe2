//! Logistic sigmoid approximations.
//!
//! [`sigmoid`] normalises an odd polynomial with `p / sqrt(p^2 + 1)` and
//! rescales to `(0, 1)`, so it is exactly `0.5` at zero and symmetric about
//! that point. [`sigmoid_exp`] composes the exponential approximation as
//! `1 / (1 + e^-x)`, trading a division for better mid-range accuracy at
//! low orders.

use super::pow::exp;
use crate::lane::Lane;

/// Approximation of the logistic function `1 / (1 + e^-x)`.
#[inline(always)]
pub fn sigmoid<const ORDER: u32, L: Lane>(x: L) -> L {
    const {
        assert!(
            ORDER % 2 == 1 && ORDER >= 3 && ORDER <= 9,
            "order must be an odd number in [3, 9]"
        );
    };

    let x_sq = x * x;
    let p = match ORDER {
        9 => {
            let y_7_9 = L::splat(1.50024356624e-6) + L::splat(6.92468584642e-9) * x_sq;
            let y_5_7_9 = L::splat(0.000260923534301) + y_7_9 * x_sq;
            let y_3_5_7_9 = L::splat(0.0208320229264) + y_5_7_9 * x_sq;
            let y_1_3_5_7_9 = L::splat(0.5) + y_3_5_7_9 * x_sq;
            x * y_1_3_5_7_9
        }
        7 => {
            let y_5_7 = L::splat(0.000255174491559) + L::splat(1.90805380557e-6) * x_sq;
            let y_3_5_7 = L::splat(0.0208503675870) + y_5_7 * x_sq;
            let y_1_3_5_7 = L::splat(0.5) + y_3_5_7 * x_sq;
            x * y_1_3_5_7
        }
        5 => {
            let y_3_5 = L::splat(0.0206108521251) + L::splat(0.000307906311109) * x_sq;
            let y_1_3_5 = L::splat(0.5) + y_3_5 * x_sq;
            x * y_1_3_5
        }
        _ => {
            let y_1_3 = L::splat(0.5) + L::splat(0.0233402955195) * x_sq;
            x * y_1_3
        }
    };

    L::splat(0.5) * p * (p * p + L::splat(1.0)).rsqrt() + L::splat(0.5)
}

/// Logistic function built on the exponential approximation.
#[inline(always)]
pub fn sigmoid_exp<const ORDER: u32, L: Lane>(x: L) -> L {
    L::splat(1.0) / (L::splat(1.0) + exp::<ORDER, L>(-x))
}
