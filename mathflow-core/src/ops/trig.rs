//! Trigonometric approximations, in radians and in turns.
//!
//! Radian variants reduce into `[-pi, pi)` (or `[-pi/2, pi/2)` for `tan`)
//! with a truncate-based wrap; turns variants reduce into `[-0.5, 0.5)` with
//! a round-to-nearest. Kernels are odd minimax polynomials evaluated in
//! Horner form over `x` and `x*x`.

use crate::lane::Lane;
use core::f64::consts::PI;

/// Wraps `x` into `[-pi, pi)`.
#[inline(always)]
fn fast_mod_mpi_pi<L: Lane>(x: L) -> L {
    let pi = L::splat(PI);
    let two_pi = L::splat(2.0 * PI);
    let recip_two_pi = L::splat(1.0 / (2.0 * PI));

    let x = x + pi;
    let m = x - two_pi * (x * recip_two_pi).trunc();
    L::select(x.ge(L::splat(0.0)), m, m + two_pi) - pi
}

/// Wraps `x` into `[-pi/2, pi/2)`.
#[inline(always)]
fn fast_mod_mhalfpi_halfpi<L: Lane>(x: L) -> L {
    let half_pi = L::splat(0.5 * PI);
    let pi = L::splat(PI);
    let recip_pi = L::splat(1.0 / PI);

    let x = x + half_pi;
    let m = x - pi * (x * recip_pi).trunc();
    L::select(x.ge(L::splat(0.0)), m, m + pi) - half_pi
}

#[inline(always)]
fn sin_poly_9<L: Lane>(x: L, x_sq: L) -> L {
    let x_7_9 = L::splat(-2.49397084313e-6) + L::splat(2.00382818811e-8) * x_sq;
    let x_5_7_9 = L::splat(0.000173405228576) + x_7_9 * x_sq;
    let x_3_5_7_9 = L::splat(-0.00662075636230) + x_5_7_9 * x_sq;
    let x_1_3_5_7_9 = L::splat(0.101321159036) + x_3_5_7_9 * x_sq;
    x * x_1_3_5_7_9
}

#[inline(always)]
fn sin_poly_7<L: Lane>(x: L, x_sq: L) -> L {
    let x_5_7 = L::splat(0.000170965340046) + L::splat(-2.09843101304e-6) * x_sq;
    let x_3_5_7 = L::splat(-0.00661594021539) + x_5_7 * x_sq;
    let x_1_3_5_7 = L::splat(0.101319673615) + x_3_5_7 * x_sq;
    x * x_1_3_5_7
}

#[inline(always)]
fn sin_poly_5<L: Lane>(x: L, x_sq: L) -> L {
    let x_3_5 = L::splat(-0.00650096169550) + L::splat(0.000139899314103) * x_sq;
    let x_1_3_5 = L::splat(0.101256629587) + x_3_5 * x_sq;
    x * x_1_3_5
}

/// Polynomial approximation of `sin(x)` on `[-pi, pi]`.
#[inline(always)]
pub fn sin_mpi_pi<const ORDER: u32, L: Lane>(x: L) -> L {
    const {
        assert!(
            ORDER % 2 == 1 && ORDER >= 5 && ORDER <= 9,
            "order must be an odd number in [5, 9]"
        )
    };

    let x_sq = x * x;
    let x_poly = match ORDER {
        9 => sin_poly_9(x, x_sq),
        7 => sin_poly_7(x, x_sq),
        _ => sin_poly_5(x, x_sq),
    };
    (L::splat(PI * PI) - x_sq) * x_poly
}

/// Full-range approximation of `sin(x)`.
#[inline(always)]
pub fn sin<const ORDER: u32, L: Lane>(x: L) -> L {
    sin_mpi_pi::<ORDER, L>(fast_mod_mpi_pi(x))
}

/// Polynomial approximation of `cos(x)` on `[-pi, pi]`, via a range-shifted
/// `sin` kernel.
#[inline(always)]
pub fn cos_mpi_pi<const ORDER: u32, L: Lane>(x: L) -> L {
    const {
        assert!(
            ORDER % 2 == 1 && ORDER >= 5 && ORDER <= 9,
            "order must be an odd number in [5, 9]"
        )
    };

    let x = x.abs();
    let hpmx = L::splat(0.5 * PI) - x;
    let hpmx_sq = hpmx * hpmx;

    let x_poly = match ORDER {
        9 => sin_poly_9(hpmx, hpmx_sq),
        7 => sin_poly_7(hpmx, hpmx_sq),
        _ => sin_poly_5(hpmx, hpmx_sq),
    };
    (L::splat(PI * PI) - hpmx_sq) * x_poly
}

/// Full-range approximation of `cos(x)`.
#[inline(always)]
pub fn cos<const ORDER: u32, L: Lane>(x: L) -> L {
    cos_mpi_pi::<ORDER, L>(fast_mod_mpi_pi(x))
}

/// Polynomial approximation of `tan(x)` on `[-pi/4, pi/4]`.
#[inline(always)]
fn tan_mquarterpi_quarterpi<const ORDER: u32, L: Lane>(x: L) -> L {
    const {
        assert!(
            ORDER % 2 == 1 && ORDER >= 3 && ORDER <= 15,
            "order must be an odd number in [3, 15]"
        )
    };

    let x_sq = x * x;
    match ORDER {
        15 => {
            let x_q = x_sq * x_sq;
            let x_8 = x_q * x_q;
            let x_13_15 = L::splat(0.000292958045126) + L::splat(0.00427933470414) * x_sq;
            let x_9_11 = L::splat(0.0213477960960) + L::splat(0.0106702896251) * x_sq;
            let x_5_7 = L::splat(0.133327796402) + L::splat(0.0540469276103) * x_sq;
            let x_1_3 = L::splat(1.0) + L::splat(0.333333463757) * x_sq;
            let x_9_11_13_15 = x_9_11 + x_13_15 * x_q;
            let x_1_3_5_7 = x_1_3 + x_5_7 * x_q;
            let x_1_to_15 = x_1_3_5_7 + x_9_11_13_15 * x_8;
            x * x_1_to_15
        }
        13 => {
            let x_q = x_sq * x_sq;
            let x_6 = x_q * x_sq;
            let x_11_13 = L::splat(0.00343732283737) + L::splat(0.00921082294855) * x_sq;
            let x_7_9 = L::splat(0.0534743904687) + L::splat(0.0242183751709) * x_sq;
            let x_3_5 = L::splat(0.333331890901) + L::splat(0.133379954680) * x_sq;
            let x_7_9_11_13 = x_7_9 + x_11_13 * x_q;
            let x_1_3_5 = L::splat(1.0) + x_3_5 * x_sq;
            x * (x_1_3_5 + x_7_9_11_13 * x_6)
        }
        11 => {
            let x_q = x_sq * x_sq;
            let x_9_11 = L::splat(0.0126603694551) + L::splat(0.0203633469693) * x_sq;
            let x_5_7 = L::splat(0.132897195017) + L::splat(0.0570525279731) * x_sq;
            let x_1_3 = L::splat(1.0) + L::splat(0.333353019629) * x_sq;
            let x_5_7_9_11 = x_5_7 + x_9_11 * x_q;
            let x_1_to_11 = x_1_3 + x_5_7_9_11 * x_q;
            x * x_1_to_11
        }
        9 => {
            let x_7_9 = L::splat(0.0405232529373) + L::splat(0.0439292071029) * x_sq;
            let x_3_5 = L::splat(0.333131667276) + L::splat(0.136333765649) * x_sq;
            let x_3_5_7_9 = x_3_5 + x_7_9 * x_sq * x_sq;
            x * (L::splat(1.0) + x_3_5_7_9 * x_sq)
        }
        7 => {
            let x_5_7 = L::splat(0.116406244996) + L::splat(0.0944480566104) * x_sq;
            let x_1_3 = L::splat(1.0) + L::splat(0.335216153138) * x_sq;
            let x_1_3_5_7 = x_1_3 + x_5_7 * x_sq * x_sq;
            x * x_1_3_5_7
        }
        5 => {
            let x_3_5 = L::splat(0.317574684334) + L::splat(0.203265826702) * x_sq;
            let x_1_3_5 = L::splat(1.0) + x_3_5 * x_sq;
            x * x_1_3_5
        }
        _ => {
            let x_1_3 = L::splat(1.0) + L::splat(0.442959265447) * x_sq;
            x * x_1_3
        }
    }
}

/// Approximation of `tan(x)` on `[-pi/2, pi/2]`, via the tangent half-angle
/// formula.
///
/// Accuracy may suffer as `x` approaches the interval ends.
#[inline(always)]
pub fn tan_mhalfpi_halfpi<const ORDER: u32, L: Lane>(x: L) -> L {
    let h = tan_mquarterpi_quarterpi::<ORDER, L>(L::splat(0.5) * x);
    L::splat(2.0) * h / (L::splat(1.0) - h * h)
}

/// Full-range approximation of `tan(x)`.
///
/// Accuracy may suffer as `x` approaches values where the true tangent
/// diverges.
#[inline(always)]
pub fn tan<const ORDER: u32, L: Lane>(x: L) -> L {
    tan_mhalfpi_halfpi::<ORDER, L>(fast_mod_mhalfpi_halfpi(x))
}

/// Wraps `x` into `[-0.5, 0.5)` turns.
#[inline(always)]
fn fast_mod_mhalf_half<L: Lane>(x: L) -> L {
    x - x.round()
}

/// Polynomial approximation of `sin(2*pi*x)` on `[-0.5, 0.5]`.
///
/// The trailing `(x + 0.5)(x - 0.5)` factor pins exact zeros at the
/// reduction boundary.
#[inline(always)]
pub fn sin_turns_mhalf_half<const ORDER: u32, L: Lane>(x: L) -> L {
    const {
        assert!(
            ORDER % 2 == 1 && ORDER >= 5 && ORDER <= 11,
            "order must be an odd number in [5, 11]"
        )
    };

    let x_sq = x * x;
    let y = match ORDER {
        11 => {
            let x_q = x_sq * x_sq;
            let x_9_11 = L::splat(-14.0496638478) + L::splat(3.16160207407) * x_sq;
            let x_5_7 = L::splat(-67.0766273790) + L::splat(38.4958788775) * x_sq;
            let x_1_3 = L::splat(-25.1327411554) + L::splat(64.8358228565) * x_sq;
            let x_5_7_9_11 = x_5_7 + x_9_11 * x_q;
            let x_1_to_11 = x_1_3 + x_5_7_9_11 * x_q;
            x * x_1_to_11
        }
        9 => {
            let x_q = x_sq * x_sq;
            let x_7_9 = L::splat(38.0636285939) - L::splat(12.0736625515) * x_sq;
            let x_3_5 = L::splat(64.8346168010) - L::splat(67.0380336036) * x_sq;
            let x_3_5_7_9 = x_3_5 + x_7_9 * x_q;
            let x_1_3_5_7_9 = L::splat(-25.1327351251) + x_3_5_7_9 * x_sq;
            x * x_1_3_5_7_9
        }
        7 => {
            let x_q = x_sq * x_sq;
            let x_5_7 = L::splat(-66.0947787168) + L::splat(32.0267973181) * x_sq;
            let x_1_3 = L::splat(-25.1323666662) + L::splat(64.7874540567) * x_sq;
            let x_1_3_5_7 = x_1_3 + x_5_7 * x_q;
            x * x_1_3_5_7
        }
        _ => {
            let x_3_5 = L::splat(63.6615119634) + L::splat(-54.0847297225) * x_sq;
            let x_1_3_5 = L::splat(-25.1167285815) + x_3_5 * x_sq;
            x * x_1_3_5
        }
    };

    y * (x + L::splat(0.5)) * (x - L::splat(0.5))
}

/// Full-range approximation of `sin(2*pi*x)`.
#[inline(always)]
pub fn sin_turns<const ORDER: u32, L: Lane>(x: L) -> L {
    sin_turns_mhalf_half::<ORDER, L>(fast_mod_mhalf_half(x))
}

/// Polynomial approximation of `cos(2*pi*x)` on `[-0.5, 0.5]`.
#[inline(always)]
pub fn cos_turns_mhalf_half<const ORDER: u32, L: Lane>(x: L) -> L {
    sin_turns_mhalf_half::<ORDER, L>(L::splat(0.25) - x.abs())
}

/// Full-range approximation of `cos(2*pi*x)`.
#[inline(always)]
pub fn cos_turns<const ORDER: u32, L: Lane>(x: L) -> L {
    cos_turns_mhalf_half::<ORDER, L>(fast_mod_mhalf_half(x))
}
