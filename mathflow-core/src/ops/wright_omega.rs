//! Wright Omega function approximation.
//!
//! Omega solves `w + ln(w) = x`. A three-piece initial estimate covers the
//! flat left tail, a polynomial mid section, and an asymptotic right tail,
//! then a configurable number of Newton-Raphson steps refine it against
//! the exponential approximation.

use super::log::log;
use super::pow::exp;
use crate::lane::Lane;

/// Mid-section fit of Omega on `[-3, e]`.
#[inline(always)]
fn omega_estimate<const ORDER: u32, L: Lane>(x: L) -> L {
    let x_sq = x * x;
    match ORDER {
        5 => {
            let y_4_5 = L::splat(-0.00156418794118294) + L::splat(-0.00151562297325209) * x;
            let y_2_3 = L::splat(0.0719291313363515) + L::splat(0.0216881206167543) * x;
            let y_0_1 = L::splat(0.569291529016010) + L::splat(0.290890537885083) * x;
            y_0_1 + (y_2_3 + y_4_5 * x_sq) * x_sq
        }
        _ => {
            let y_2_3 = L::splat(0.0534379648805832) + L::splat(-0.00251076420630778) * x;
            let y_0_1 = L::splat(0.616522951065868) + L::splat(0.388418422853809) * x;
            y_0_1 + y_2_3 * x_sq
        }
    }
}

/// Approximation of the Wright Omega function.
///
/// `NR_ITERS` Newton-Raphson refinement steps are applied to the piecewise
/// initial estimate; zero iterations returns the raw estimate. Reasonable
/// pairings: `POLY_ORDER = 3` with `LOG_ORDER = EXP_ORDER = 3` for up to
/// one iteration, and `LOG_ORDER = EXP_ORDER = 4` or `5` beyond that.
#[inline(always)]
pub fn wright_omega<
    const NR_ITERS: u32,
    const POLY_ORDER: u32,
    const LOG_ORDER: u32,
    const EXP_ORDER: u32,
    L: Lane,
>(
    x: L,
) -> L {
    const {
        assert!(
            POLY_ORDER == 3 || POLY_ORDER == 5,
            "poly order must be 3 or 5"
        );
        assert!(
            LOG_ORDER >= 3 && LOG_ORDER <= 6,
            "log order must be in [3, 6]"
        );
        assert!(
            EXP_ORDER >= 3 && EXP_ORDER <= 6,
            "exp order must be in [3, 6]"
        );
    };

    let one = L::splat(1.0);
    let mid = omega_estimate::<POLY_ORDER, L>(x);
    let tail = x - log::<LOG_ORDER, L>(x.max(one))
        + L::splat(0.32352057096397160124)
            * exp::<EXP_ORDER, L>(L::splat(-0.029614177658043381316) * x);

    let below_e = x.lt(L::splat(core::f64::consts::E));
    let est = L::select(below_e, mid, tail);
    let mut y = L::select(x.lt(L::splat(-3.0)), L::splat(0.0), est);

    for _ in 0..NR_ITERS {
        y = y - (y - exp::<EXP_ORDER, L>(x - y)) / (y + one);
    }
    y
}
