//! Dilogarithm approximation.
//!
//! The real line splits into six regions, each mapped by a standard
//! dilogarithm identity onto a kernel argument in `[0, 0.5]`. The region
//! logic is branchless: every candidate argument and log correction is
//! evaluated, then lane-wise selects pick the right one. Discarded
//! divisions may produce infinities but never reach the kernel.

use super::log::log;
use crate::lane::Lane;

/// Fit of `Li2(x)` on `[0, 0.5]`, as `x + x^2 p(x)`.
#[inline(always)]
fn li2_kernel<const ORDER: u32, L: Lane>(x: L) -> L {
    const {
        assert!(ORDER >= 1 && ORDER <= 5, "order must be in [1, 5]");
    };

    let p = match ORDER {
        5 => {
            let y_4_5 = L::splat(-0.0215564920455) + L::splat(0.0866107723749) * x;
            let y_2_3 = L::splat(0.0605611872456) + L::splat(0.0548936360521) * x;
            let y_2_to_5 = y_2_3 + (x * x) * y_4_5;
            let y_1_to_5 = L::splat(0.111201597317) + x * y_2_to_5;
            L::splat(0.249999319604) + x * y_1_to_5
        }
        4 => {
            let y_3_4 = L::splat(0.0061364702933) + L::splat(0.0880996841764) * x;
            let y_1_2 = L::splat(0.110629553447) + L::splat(0.0694538956374) * x;
            let y_1_to_4 = y_1_2 + (x * x) * y_3_4;
            L::splat(0.25000528309) + x * y_1_to_4
        }
        3 => {
            let y_2_3 = L::splat(0.0409100415028) + L::splat(0.0955877552282) * x;
            let y_0_1 = L::splat(0.24995701415) + L::splat(0.113572252162) * x;
            y_0_1 + (x * x) * y_2_3
        }
        2 => {
            let y_1_2 = L::splat(0.0994443271623) + L::splat(0.113975327489) * x;
            L::splat(0.250373055203) + x * y_1_2
        }
        _ => L::splat(0.246442143324) + L::splat(0.15792421172) * x,
    };

    x + (x * x) * p
}

/// Approximation of the dilogarithm `Li2(x)` over the full real line.
///
/// `ORDER` sizes the kernel fit and `LOG_ORDER` sizes the logarithm used
/// by the region identities.
#[inline(always)]
pub fn li2<const ORDER: u32, const LOG_ORDER: u32, L: Lane>(x: L) -> L {
    const {
        assert!(ORDER >= 1 && ORDER <= 5, "order must be in [1, 5]");
        assert!(LOG_ORDER >= 3 && LOG_ORDER <= 6, "log order must be in [3, 6]");
    };

    let one = L::splat(1.0);
    let pi_sq_6 = L::splat(core::f64::consts::PI * core::f64::consts::PI / 6.0);

    // The log fit returns a large negative finite value at zero, so the
    // corrections stay NaN-free even on region boundaries.
    let la = log::<LOG_ORDER, L>(x.abs());
    let lb = log::<LOG_ORDER, L>((one - x).abs());

    let below_m1 = x.lt(L::splat(-1.0));
    let below_0 = x.lt(L::splat(0.0));
    let below_h = x.lt(L::splat(0.5));
    let below_1 = x.lt(one);
    let below_2 = x.lt(L::splat(2.0));

    let y_top = L::select(below_2, one - one / x, one / x);
    let y_mid = L::select(below_h, x, L::select(below_1, one - x, y_top));
    let y_neg = L::select(below_m1, one / (one - x), x / (x - one));
    let y = L::select(below_0, y_neg, y_mid);

    let half = L::splat(0.5);
    let r_top = L::select(
        below_2,
        pi_sq_6 - la * lb + half * la * la,
        pi_sq_6 + pi_sq_6 - half * la * la,
    );
    let r_mid = L::select(
        below_h,
        L::splat(0.0),
        L::select(below_1, pi_sq_6 - la * lb, r_top),
    );
    let r_neg = L::select(
        below_m1,
        lb * (half * lb - la) - pi_sq_6,
        -(half * lb * lb),
    );
    let r = L::select(below_0, r_neg, r_mid);

    let s_top = L::select(below_2, one, -one);
    let s_mid = L::select(below_h, one, L::select(below_1, -one, s_top));
    let s_neg = L::select(below_m1, one, -one);
    let s = L::select(below_0, s_neg, s_mid);

    r + s * li2_kernel::<ORDER, L>(y)
}
