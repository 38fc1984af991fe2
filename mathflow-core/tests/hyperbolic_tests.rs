//! Accuracy tests for tanh, sigmoid, and the hyperbolic family.

mod common;

use common::{max_abs_err_f64, max_rel_err_f64};
use mathflow_core::{
    acosh, asinh, atanh, cosh, sigmoid, sigmoid_exp, sinh, sinh_cosh, tanh,
};

const N: usize = 20001;

#[test]
fn test_tanh_bounds_f64() {
    let e11 = max_abs_err_f64(|x| tanh::<11, f64>(x), f64::tanh, -10.0, 10.0, N);
    let e9 = max_abs_err_f64(|x| tanh::<9, f64>(x), f64::tanh, -10.0, 10.0, N);
    let e7 = max_abs_err_f64(|x| tanh::<7, f64>(x), f64::tanh, -10.0, 10.0, N);
    let e5 = max_abs_err_f64(|x| tanh::<5, f64>(x), f64::tanh, -10.0, 10.0, N);
    let e3 = max_abs_err_f64(|x| tanh::<3, f64>(x), f64::tanh, -10.0, 10.0, N);
    assert!(e11 < 6e-7, "tanh<11> worst error {}", e11);
    assert!(e9 < 2e-6, "tanh<9> worst error {}", e9);
    assert!(e7 < 2.5e-5, "tanh<7> worst error {}", e7);
    assert!(e5 < 4e-4, "tanh<5> worst error {}", e5);
    assert!(e3 < 6e-3, "tanh<3> worst error {}", e3);
    assert!(
        e11 < e9 && e9 < e7 && e7 < e5 && e5 < e3,
        "higher order must not be worse"
    );
}

#[test]
fn test_tanh_saturates() {
    // The rsqrt normalisation pins the tails inside [-1, 1].
    for &x in &[20.0f64, 50.0, 200.0, 1e4] {
        let y = tanh::<9, f64>(x);
        assert!(y <= 1.0 && y > 0.999, "tanh({}) = {}", x, y);
        let y = tanh::<9, f64>(-x);
        assert!(y >= -1.0 && y < -0.999, "tanh(-{}) = {}", x, y);
    }
}

#[test]
fn test_sigmoid_bounds_f64() {
    let r = |x: f64| 1.0 / (1.0 + (-x).exp());
    let e9 = max_abs_err_f64(|x| sigmoid::<9, f64>(x), r, -20.0, 20.0, N);
    let e7 = max_abs_err_f64(|x| sigmoid::<7, f64>(x), r, -20.0, 20.0, N);
    let e5 = max_abs_err_f64(|x| sigmoid::<5, f64>(x), r, -20.0, 20.0, N);
    let e3 = max_abs_err_f64(|x| sigmoid::<3, f64>(x), r, -20.0, 20.0, N);
    assert!(e9 < 1.5e-6, "sigmoid<9> worst error {}", e9);
    assert!(e7 < 1.5e-5, "sigmoid<7> worst error {}", e7);
    assert!(e5 < 2e-4, "sigmoid<5> worst error {}", e5);
    assert!(e3 < 4e-3, "sigmoid<3> worst error {}", e3);
}

#[test]
fn test_sigmoid_midpoint_is_exact() {
    assert_eq!(sigmoid::<9, f64>(0.0), 0.5, "sigmoid(0) should be exactly 0.5");
    assert_eq!(sigmoid::<9, f32>(0.0), 0.5, "sigmoid(0) should be exactly 0.5");
}

#[test]
fn test_sigmoid_exp_bounds() {
    let r = |x: f64| 1.0 / (1.0 + (-x).exp());
    let e = max_abs_err_f64(|x| sigmoid_exp::<6, f64>(x), r, -20.0, 20.0, N);
    assert!(e < 1e-6, "sigmoid_exp<6> worst error {}", e);
}

#[test]
fn test_sinh_cosh_bounds() {
    let es = max_rel_err_f64(|x| sinh::<6, f64>(x), f64::sinh, 0.5, 10.0, N);
    let ec = max_rel_err_f64(|x| cosh::<6, f64>(x), f64::cosh, -10.0, 10.0, N);
    assert!(es < 3e-6, "sinh<6> worst relative error {}", es);
    assert!(ec < 3e-6, "cosh<6> worst relative error {}", ec);
}

#[test]
fn test_sinh_cosh_pair_matches_singles() {
    for i in 0..100 {
        let x = -5.0 + 0.1 * (i as f64);
        let (s, c) = sinh_cosh::<6, f64>(x);
        assert_eq!(s, sinh::<6, f64>(x), "sinh pair mismatch at {}", x);
        assert_eq!(c, cosh::<6, f64>(x), "cosh pair mismatch at {}", x);
    }
}

#[test]
fn test_cosh_identity() {
    // cosh^2 - sinh^2 = 1 up to approximation error.
    for i in 0..100 {
        let x = -4.0 + 0.08 * (i as f64);
        let (s, c) = sinh_cosh::<6, f64>(x);
        assert!((c * c - s * s - 1.0).abs() < 1e-4, "identity at {}", x);
    }
}

#[test]
fn test_asinh_bounds() {
    let e6 = max_abs_err_f64(|x| asinh::<6, f64>(x), f64::asinh, -10.0, 10.0, N);
    let e3 = max_abs_err_f64(|x| asinh::<3, f64>(x), f64::asinh, -10.0, 10.0, N);
    // asinh inherits the log<6> envelope, not the exp one.
    assert!(e6 < 4e-6, "asinh<6> worst error {}", e6);
    assert!(e3 < 4e-3, "asinh<3> worst error {}", e3);
}

#[test]
fn test_acosh_bounds() {
    let e6 = max_abs_err_f64(|x| acosh::<6, f64>(x), f64::acosh, 1.0, 10.0, N);
    assert!(e6 < 7e-6, "acosh<6> worst error {}", e6);
    assert_eq!(acosh::<6, f64>(1.0).is_finite(), true, "acosh(1) finite");
}

#[test]
fn test_atanh_bounds() {
    let e6 = max_abs_err_f64(|x| atanh::<6, f64>(x), f64::atanh, -0.9999, 0.9999, N);
    assert!(e6 < 5e-6, "atanh<6> worst error {}", e6);
}

#[test]
fn test_asinh_is_odd() {
    for i in 0..100 {
        let x = 0.1 * (i as f64) + 0.05;
        assert_eq!(
            asinh::<6, f64>(x),
            -asinh::<6, f64>(-x),
            "asinh odd symmetry at {}",
            x
        );
    }
}
