//! Accuracy tests for the inverse trigonometric approximations.

mod common;

use common::{max_abs_err_f32, max_abs_err_f64};
use mathflow_core::{acos, asin, atan};
use std::f64::consts::PI;

const N: usize = 20001;

#[test]
fn test_asin_bounds_f64() {
    let e11 = max_abs_err_f64(|x| asin::<11, f64>(x), f64::asin, -1.0, 1.0, N);
    let e9 = max_abs_err_f64(|x| asin::<9, f64>(x), f64::asin, -1.0, 1.0, N);
    let e7 = max_abs_err_f64(|x| asin::<7, f64>(x), f64::asin, -1.0, 1.0, N);
    let e5 = max_abs_err_f64(|x| asin::<5, f64>(x), f64::asin, -1.0, 1.0, N);
    let e3 = max_abs_err_f64(|x| asin::<3, f64>(x), f64::asin, -1.0, 1.0, N);
    assert!(e11 < 1e-6, "asin<11> worst error {}", e11);
    assert!(e9 < 6e-6, "asin<9> worst error {}", e9);
    assert!(e7 < 7e-5, "asin<7> worst error {}", e7);
    assert!(e5 < 7e-4, "asin<5> worst error {}", e5);
    assert!(e3 < 5e-3, "asin<3> worst error {}", e3);
}

#[test]
fn test_acos_bounds_f64() {
    let e11 = max_abs_err_f64(|x| acos::<11, f64>(x), f64::acos, -1.0, 1.0, N);
    let e7 = max_abs_err_f64(|x| acos::<7, f64>(x), f64::acos, -1.0, 1.0, N);
    let e3 = max_abs_err_f64(|x| acos::<3, f64>(x), f64::acos, -1.0, 1.0, N);
    assert!(e11 < 2e-6, "acos<11> worst error {}", e11);
    assert!(e7 < 2e-4, "acos<7> worst error {}", e7);
    assert!(e3 < 8e-3, "acos<3> worst error {}", e3);
}

#[test]
fn test_atan_bounds_f64() {
    let e11 = max_abs_err_f64(|x| atan::<11, f64>(x), f64::atan, -10.0, 10.0, N);
    let e9 = max_abs_err_f64(|x| atan::<9, f64>(x), f64::atan, -10.0, 10.0, N);
    let e7 = max_abs_err_f64(|x| atan::<7, f64>(x), f64::atan, -10.0, 10.0, N);
    let e5 = max_abs_err_f64(|x| atan::<5, f64>(x), f64::atan, -10.0, 10.0, N);
    assert!(e11 < 5e-6, "atan<11> worst error {}", e11);
    assert!(e9 < 3e-5, "atan<9> worst error {}", e9);
    assert!(e7 < 2e-4, "atan<7> worst error {}", e7);
    assert!(e5 < 2.5e-3, "atan<5> worst error {}", e5);
}

#[test]
fn test_asin_f32() {
    let e = max_abs_err_f32(|x| asin::<9, f32>(x), f64::asin, -1.0, 1.0, N);
    assert!(e < 5e-5, "asin<9> f32 worst error {}", e);
}

#[test]
fn test_asin_endpoints() {
    assert!(
        (asin::<11, f64>(1.0) - PI / 2.0).abs() < 1e-5,
        "asin(1) should be ~pi/2"
    );
    assert!(
        (asin::<11, f64>(-1.0) + PI / 2.0).abs() < 1e-5,
        "asin(-1) should be ~-pi/2"
    );
    assert_eq!(asin::<11, f64>(0.0), 0.0, "asin(0) should be exactly 0");
}

#[test]
fn test_acos_endpoints() {
    assert!(acos::<11, f64>(1.0).abs() < 1e-5, "acos(1) should be ~0");
    assert!(
        (acos::<11, f64>(-1.0) - PI).abs() < 1e-5,
        "acos(-1) should be ~pi"
    );
    assert!(
        (acos::<11, f64>(0.0) - PI / 2.0).abs() < 1e-5,
        "acos(0) should be ~pi/2"
    );
}

#[test]
fn test_atan_is_odd() {
    for i in 0..200 {
        let x = -8.0 + 0.08 * (i as f64);
        assert_eq!(
            atan::<9, f64>(x),
            -atan::<9, f64>(-x),
            "atan<9> odd symmetry at {}",
            x
        );
    }
}

#[test]
fn test_atan_large_argument() {
    assert!(
        (atan::<11, f64>(1e6) - PI / 2.0).abs() < 1e-4,
        "atan(1e6) should approach pi/2"
    );
}
