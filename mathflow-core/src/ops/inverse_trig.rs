//! Inverse trigonometric approximations.
//!
//! `asin` evaluates a kernel fit on `[0, 1/sqrt(2)]` and reflects through
//! `pi/2 - asin(sqrt(1 - x^2))` above the threshold. `acos` reuses the same
//! kernel through the half-angle identity
//! `acos(x) = 2 asin(sqrt((1 - x)/2))`. `atan` evaluates an odd kernel fit
//! on `[0, 1]` and folds larger magnitudes through `pi/2 - atan(1/x)`.

use crate::lane::Lane;
use core::f64::consts::{FRAC_1_SQRT_2, PI};

/// Kernel fit of `asin(x)` on `[0, 1/sqrt(2)]`.
#[inline(always)]
fn asin_kernel<const ORDER: u32, L: Lane>(x: L) -> L {
    const {
        assert!(ORDER >= 3 && ORDER <= 11, "order must be in [3, 11]");
    };

    let x_sq = x * x;
    match ORDER {
        11 => {
            let y_10_11 = L::splat(-7.8570177355488999282) + L::splat(2.4911046380177723769) * x;
            let y_8_9 = L::splat(-8.7527722722991097015) + L::splat(11.027490029915364644) * x;
            let y_6_7 = L::splat(-1.3541397019129590706) + L::splat(4.3623048430828985644) * x;
            let y_4_5 = L::splat(-0.031316768977302081312) + L::splat(0.34169372825309551889) * x;
            let y_2_3 = L::splat(-0.000047491279899706856284) + L::splat(0.16861521810527382859) * x;
            let y_8_to_11 = y_8_9 + x_sq * y_10_11;
            let y_4_to_7 = y_4_5 + x_sq * y_6_7;
            let y_4_to_11 = y_4_to_7 + (x_sq * x_sq) * y_8_to_11;
            let y_2_to_11 = y_2_3 + x_sq * y_4_to_11;
            x + x_sq * y_2_to_11
        }
        10 => {
            let y_9_10 = L::splat(-4.7928604989214971255) + L::splat(1.7203396621648587850) * x;
            let y_7_8 = L::splat(-3.9882416242478972990) + L::splat(5.9100541437570059955) * x;
            let y_5_6 = L::splat(-0.33522250091818628359) + L::splat(1.6520149306717599735) * x;
            let y_3_4 = L::splat(0.16219681678629885302) + L::splat(0.059321118077451009953) * x;
            let y_7_to_10 = y_7_8 + x_sq * y_9_10;
            let y_3_to_6 = y_3_4 + x_sq * y_5_6;
            let y_3_to_10 = y_3_to_6 + (x_sq * x_sq) * y_7_to_10;
            let y_2_to_10 = L::splat(0.00013025301412532343010) + x * y_3_to_10;
            x + x_sq * y_2_to_10
        }
        9 => {
            let y_8_9 = L::splat(-2.8729113246543627191) + L::splat(1.1910880616677141930) * x;
            let y_6_7 = L::splat(-1.7250043993765906691) + L::splat(3.0742940024198017746) * x;
            let y_4_5 = L::splat(-0.10358468520191396745) + L::splat(0.63814601829123507315) * x;
            let y_2_3 = L::splat(-0.00034869418257434217938) + L::splat(0.17639243703620430259) * x;
            let y_6_to_9 = y_6_7 + x_sq * y_8_9;
            let y_2_to_5 = y_2_3 + x_sq * y_4_5;
            x + x_sq * (y_2_to_5 + (x_sq * x_sq) * y_6_to_9)
        }
        8 => {
            let y_7_8 = L::splat(-1.68181413527251) + L::splat(0.833569228384441) * x;
            let y_5_6 = L::splat(-0.614138628435564) + L::splat(1.51390471735914) * x;
            let y_3_4 = L::splat(0.146440161696543) + L::splat(0.167766328527588) * x;
            let y_5_to_8 = y_5_6 + x_sq * y_7_8;
            let y_3_to_8 = y_3_4 + x_sq * y_5_to_8;
            let y_2_to_8 = L::splat(0.000914775210828589) + x * y_3_to_8;
            x + x_sq * y_2_to_8
        }
        7 => {
            let y_6_7 = L::splat(-0.993023225129115) + L::splat(0.604213345541030) * x;
            let y_4_5 = L::splat(-0.242568404368623) + L::splat(0.780715776826480) * x;
            let y_2_3 = L::splat(-0.00231743294930714) + L::splat(0.205916081200406) * x;
            x + x_sq * (y_2_3 + x_sq * (y_4_5 + x_sq * y_6_7))
        }
        6 => {
            let y_5_6 = L::splat(-0.516068582317285) + L::splat(0.437544978265334) * x;
            let y_3_4 = L::splat(0.0946375652126262) + L::splat(0.313911974469437) * x;
            let y_3_to_6 = y_3_4 + x_sq * y_5_6;
            let y_2_to_6 = L::splat(0.00577946556085762) + x * y_3_to_6;
            x + x_sq * y_2_to_6
        }
        5 => {
            let y_4_5 = L::splat(-0.304640601352515) + L::splat(0.353208342056560) * x;
            let y_2_3 = L::splat(-0.0132122795426018) + L::splat(0.278935718011026) * x;
            x + x_sq * (y_2_3 + x_sq * y_4_5)
        }
        4 => {
            let y_3_4 = L::splat(-0.00535062837316264) + L::splat(0.257252341545375) * x;
            let y_2_3_4 = L::splat(0.0317400592553864) + x * y_3_4;
            x + x_sq * y_2_3_4
        }
        _ => {
            let y_2_3 = L::splat(-0.0536922932754174) + L::splat(0.297373838424192) * x;
            x + x_sq * y_2_3
        }
    }
}

/// Approximation of `asin(x)` on `[-1, 1]`.
#[inline(always)]
pub fn asin<const ORDER: u32, L: Lane>(x: L) -> L {
    let ax = x.abs();
    let reflect = ax.gt(L::splat(FRAC_1_SQRT_2));
    let arg = L::select(reflect, (L::splat(1.0) - ax * ax).sqrt(), ax);
    let p = asin_kernel::<ORDER, L>(arg);
    let res = L::select(reflect, L::splat(0.5 * PI) - p, p);
    L::select(x.gt(L::splat(0.0)), res, -res)
}

/// Approximation of `acos(x)` on `[-1, 1]`, via the half-angle identity.
#[inline(always)]
pub fn acos<const ORDER: u32, L: Lane>(x: L) -> L {
    let ax = x.abs();
    let t = (L::splat(0.5) * (L::splat(1.0) - ax)).sqrt();
    let r = L::splat(2.0) * asin_kernel::<ORDER, L>(t);
    L::select(x.ge(L::splat(0.0)), r, L::splat(PI) - r)
}

/// Odd kernel fit of `atan(x)` on `[0, 1]`.
#[inline(always)]
fn atan_kernel<const ORDER: u32, L: Lane>(x: L) -> L {
    const {
        assert!(
            ORDER % 2 == 1 && ORDER >= 5 && ORDER <= 11,
            "order must be an odd number in [5, 11]"
        );
    };

    let x_sq = x * x;
    match ORDER {
        11 => {
            let y_9_11 = L::splat(0.0526473514659) + L::splat(-0.0117191357343) * x_sq;
            let y_7_9_11 = L::splat(-0.11642648197) + y_9_11 * x_sq;
            let y_5_7_9_11 = L::splat(0.193540376084) + y_7_9_11 * x_sq;
            let y_3_to_11 = L::splat(-0.33262282789) + y_5_7_9_11 * x_sq;
            let y_1_to_11 = L::splat(0.999977219082) + y_3_to_11 * x_sq;
            x * y_1_to_11
        }
        9 => {
            let y_7_9 = L::splat(-0.0851563508952) + L::splat(0.0208451141944) * x_sq;
            let y_5_7_9 = L::splat(0.180159294697) + y_7_9 * x_sq;
            let y_3_5_7_9 = L::splat(-0.330304785525) + y_5_7_9 * x_sq;
            let y_1_3_5_7_9 = L::splat(0.999866329467) + y_3_5_7_9 * x_sq;
            x * y_1_3_5_7_9
        }
        7 => {
            let y_5_7 = L::splat(0.146264463586) + L::splat(-0.0389865141585) * x_sq;
            let y_3_5_7 = L::splat(-0.321174969305) + y_5_7 * x_sq;
            let y_1_3_5_7 = L::splat(0.99921381257) + y_3_5_7 * x_sq;
            x * y_1_3_5_7
        }
        _ => {
            let y_3_5 = L::splat(-0.295743624207) + L::splat(0.0830676415592) * x_sq;
            let y_1_3_5 = L::splat(0.998074146046) + y_3_5 * x_sq;
            x * y_1_3_5
        }
    }
}

/// Full-range approximation of `atan(x)`.
#[inline(always)]
pub fn atan<const ORDER: u32, L: Lane>(x: L) -> L {
    let ax = x.abs();
    let invert = ax.gt(L::splat(1.0));
    let arg = L::select(invert, L::splat(1.0) / ax, ax);
    let p = atan_kernel::<ORDER, L>(arg);
    let res = L::select(invert, L::splat(0.5 * PI) - p, p);
    L::select(x.gt(L::splat(0.0)), res, -res)
}
