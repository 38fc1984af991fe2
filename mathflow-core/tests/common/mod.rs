//! Shared helpers for the accuracy and consistency tests.
#![allow(dead_code)]

/// Maximum absolute error of `f` against `reference` over `n` evenly
/// spaced points in `[a, b]`.
pub fn max_abs_err_f32(f: impl Fn(f32) -> f32, reference: impl Fn(f64) -> f64, a: f64, b: f64, n: usize) -> f64 {
    let mut max = 0.0f64;
    for i in 0..n {
        let x = (a + (b - a) * (i as f64) / ((n - 1) as f64)) as f32;
        let err = (f(x) as f64 - reference(x as f64)).abs();
        if err > max {
            max = err;
        }
    }
    max
}

pub fn max_abs_err_f64(f: impl Fn(f64) -> f64, reference: impl Fn(f64) -> f64, a: f64, b: f64, n: usize) -> f64 {
    let mut max = 0.0f64;
    for i in 0..n {
        let x = a + (b - a) * (i as f64) / ((n - 1) as f64);
        let err = (f(x) - reference(x)).abs();
        if err > max {
            max = err;
        }
    }
    max
}

/// Maximum relative error, guarding against tiny reference magnitudes.
pub fn max_rel_err_f32(f: impl Fn(f32) -> f32, reference: impl Fn(f64) -> f64, a: f64, b: f64, n: usize) -> f64 {
    let mut max = 0.0f64;
    for i in 0..n {
        let x = (a + (b - a) * (i as f64) / ((n - 1) as f64)) as f32;
        let r = reference(x as f64);
        if r.abs() < 1e-30 {
            continue;
        }
        let err = ((f(x) as f64 - r) / r).abs();
        if err > max {
            max = err;
        }
    }
    max
}

pub fn max_rel_err_f64(f: impl Fn(f64) -> f64, reference: impl Fn(f64) -> f64, a: f64, b: f64, n: usize) -> f64 {
    let mut max = 0.0f64;
    for i in 0..n {
        let x = a + (b - a) * (i as f64) / ((n - 1) as f64);
        let r = reference(x);
        if r.abs() < 1e-30 {
            continue;
        }
        let err = ((f(x) - r) / r).abs();
        if err > max {
            max = err;
        }
    }
    max
}

/// Distance in units of last place between two `f32` values, sign-aware.
pub fn ulp_dist_f32(a: f32, b: f32) -> i64 {
    fn ordered(x: f32) -> i64 {
        let i = x.to_bits() as i32 as i64;
        if i < 0 {
            (i32::MIN as i64) - i
        } else {
            i
        }
    }
    (ordered(a) - ordered(b)).abs()
}

/// Distance in units of last place between two `f64` values, sign-aware.
pub fn ulp_dist_f64(a: f64, b: f64) -> i64 {
    fn ordered(x: f64) -> i64 {
        let i = x.to_bits() as i64;
        if i < 0 {
            i64::MIN - i
        } else {
            i
        }
    }
    let (oa, ob) = (ordered(a), ordered(b));
    oa.saturating_sub(ob).saturating_abs()
}
