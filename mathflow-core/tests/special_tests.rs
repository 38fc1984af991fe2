//! Accuracy tests for the dilogarithm and Wright Omega approximations.

mod common;

use common::max_abs_err_f64;
use mathflow_core::{li2, wright_omega};
use std::f64::consts::PI;

const N: usize = 20001;

/// Series-based dilogarithm reference, using the same region identities
/// with full-precision logs.
fn li2_ref(x: f64) -> f64 {
    fn series(y: f64) -> f64 {
        let mut sum = 0.0;
        let mut term = y;
        for k in 1..200 {
            sum += term / ((k * k) as f64);
            term *= y;
            if term.abs() < 1e-30 {
                break;
            }
        }
        sum
    }
    let pi_sq_6 = PI * PI / 6.0;
    // ln(x)*ln(x-1) is 0 * -inf at exactly 1; Li2(1) = pi^2/6.
    if x == 1.0 {
        return pi_sq_6;
    }
    if x < -1.0 {
        let lb = (1.0 - x).ln();
        -pi_sq_6 + lb * (0.5 * lb - (-x).ln()) + series(1.0 / (1.0 - x))
    } else if x < 0.0 {
        let lb = (1.0 - x).ln();
        -0.5 * lb * lb - series(x / (x - 1.0))
    } else if x < 0.5 {
        series(x)
    } else if x < 1.0 {
        pi_sq_6 - x.ln() * (1.0 - x).ln() - series(1.0 - x)
    } else if x < 2.0 {
        let la = x.ln();
        pi_sq_6 - la * (x - 1.0).ln() + 0.5 * la * la + series(1.0 - 1.0 / x)
    } else {
        let la = x.ln();
        PI * PI / 3.0 - 0.5 * la * la - series(1.0 / x)
    }
}

/// Converged Newton iteration for `w + ln(w) = x`.
fn omega_ref(x: f64) -> f64 {
    let mut y = if x > 1.0 { x } else { x.min(700.0).exp() };
    for _ in 0..200 {
        let d = (y - (x - y).exp()) / (y + 1.0);
        y -= d;
        if d.abs() < 1e-15 * y.abs().max(1.0) {
            break;
        }
    }
    y
}

#[test]
fn test_li2_bounds() {
    let e1 = max_abs_err_f64(|x| li2::<1, 3, f64>(x), li2_ref, -10.0, 10.0, N);
    let e2 = max_abs_err_f64(|x| li2::<2, 4, f64>(x), li2_ref, -10.0, 10.0, N);
    let e3 = max_abs_err_f64(|x| li2::<3, 5, f64>(x), li2_ref, -10.0, 10.0, N);
    let e4 = max_abs_err_f64(|x| li2::<4, 6, f64>(x), li2_ref, -10.0, 10.0, N);
    assert!(e1 < 5e-3, "li2<1,3> worst error {}", e1);
    assert!(e2 < 8e-4, "li2<2,4> worst error {}", e2);
    assert!(e3 < 1.5e-4, "li2<3,5> worst error {}", e3);
    assert!(e4 < 3e-5, "li2<4,6> worst error {}", e4);
}

#[test]
fn test_li2_known_values() {
    let pi_sq_6 = PI * PI / 6.0;
    assert_eq!(li2::<4, 6, f64>(0.0), 0.0, "li2(0) should be exactly 0");
    assert!(
        (li2::<4, 6, f64>(-1.0) + pi_sq_6 / 2.0).abs() < 1e-4,
        "li2(-1) should be ~-pi^2/12"
    );
    assert!(
        (li2::<4, 6, f64>(2.0) - PI * PI / 4.0).abs() < 1e-4,
        "li2(2) should be ~pi^2/4"
    );
}

#[test]
fn test_li2_region_boundaries_are_finite() {
    // Every boundary where a discarded division blows up.
    for &x in &[-1.0, 0.0, 0.5, 1.0, 2.0] {
        let v = li2::<4, 6, f64>(x);
        assert!(v.is_finite(), "li2({}) = {}", x, v);
        assert!((v - li2_ref(x)).abs() < 1e-4, "li2({}) = {}", x, v);
    }
}

#[test]
fn test_omega_bounds() {
    let e0 = max_abs_err_f64(
        |x| wright_omega::<0, 3, 3, 3, f64>(x),
        omega_ref,
        -10.0,
        30.0,
        N,
    );
    let e1 = max_abs_err_f64(
        |x| wright_omega::<1, 3, 3, 3, f64>(x),
        omega_ref,
        -10.0,
        30.0,
        N,
    );
    let e2 = max_abs_err_f64(
        |x| wright_omega::<2, 3, 4, 4, f64>(x),
        omega_ref,
        -10.0,
        30.0,
        N,
    );
    let e3 = max_abs_err_f64(
        |x| wright_omega::<3, 3, 5, 5, f64>(x),
        omega_ref,
        -10.0,
        30.0,
        N,
    );
    assert!(e0 < 0.15, "omega<0> worst error {}", e0);
    assert!(e1 < 1e-2, "omega<1> worst error {}", e1);
    assert!(e2 < 5e-5, "omega<2> worst error {}", e2);
    assert!(e3 < 5e-6, "omega<3> worst error {}", e3);
}

#[test]
fn test_omega_iterations_improve() {
    let x = 1.7;
    let want = omega_ref(x);
    let e0 = (wright_omega::<0, 3, 5, 5, f64>(x) - want).abs();
    let e2 = (wright_omega::<2, 3, 5, 5, f64>(x) - want).abs();
    assert!(e2 < e0, "refinement should improve: {} vs {}", e2, e0);
}

#[test]
fn test_omega_defining_equation() {
    // w + ln(w) should reproduce x once refined.
    for i in 0..100 {
        let x = 0.5 + 0.2 * (i as f64);
        let w = wright_omega::<3, 3, 5, 5, f64>(x);
        let resid = (w + w.ln() - x).abs();
        assert!(resid < 1e-4, "residual at {}: {}", x, resid);
    }
}

#[test]
fn test_omega_left_tail() {
    assert_eq!(
        wright_omega::<0, 3, 3, 3, f64>(-10.0),
        0.0,
        "left tail estimate is zero"
    );
    // Refined left tail stays near e^x.
    let w = wright_omega::<3, 3, 5, 5, f64>(-5.0);
    assert!((w - omega_ref(-5.0)).abs() < 1e-3, "omega(-5) = {}", w);
}
