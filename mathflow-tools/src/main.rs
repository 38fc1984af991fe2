//! Accuracy report generator.
//!
//! Sweeps every approximation at every supported order against the
//! standard library (or a converged reference where std has none) and
//! prints a CSV of worst-case absolute, relative, and f32 ULP errors.
//! Useful for choosing an order for a given error budget.

use anyhow::Result;
use log::info;
use std::f64::consts::PI;

const POINTS: usize = 200_001;

struct Sweep {
    lo: f64,
    hi: f64,
}

impl Sweep {
    fn new(lo: f64, hi: f64) -> Self {
        Self { lo, hi }
    }

    fn max_abs_err(&self, f: impl Fn(f64) -> f64, reference: impl Fn(f64) -> f64) -> f64 {
        let mut max = 0.0f64;
        for i in 0..POINTS {
            let x = self.lo + (self.hi - self.lo) * (i as f64) / ((POINTS - 1) as f64);
            let err = (f(x) - reference(x)).abs();
            if err > max {
                max = err;
            }
        }
        max
    }

    fn max_rel_err(&self, f: impl Fn(f64) -> f64, reference: impl Fn(f64) -> f64) -> f64 {
        let mut max = 0.0f64;
        for i in 0..POINTS {
            let x = self.lo + (self.hi - self.lo) * (i as f64) / ((POINTS - 1) as f64);
            let r = reference(x);
            if r.abs() < 1e-300 {
                continue;
            }
            let err = ((f(x) - r) / r).abs();
            if err > max {
                max = err;
            }
        }
        max
    }

    fn max_ulp_err(&self, f: impl Fn(f32) -> f32, reference: impl Fn(f64) -> f64) -> i64 {
        let mut max = 0i64;
        for i in 0..POINTS {
            let x = (self.lo + (self.hi - self.lo) * (i as f64) / ((POINTS - 1) as f64)) as f32;
            let d = ulp_dist_f32(f(x), reference(x as f64) as f32);
            if d > max {
                max = d;
            }
        }
        max
    }
}

fn row(function: &str, order: &str, metric: &str, err: f64) {
    println!("{},{},{},{:.3e}", function, order, metric, err);
}

fn row_ulp(function: &str, order: &str, ulp: i64) {
    println!("{},{},ulp,{}", function, order, ulp);
}

/// Distance in units of last place between two `f32` values, sign-aware.
fn ulp_dist_f32(a: f32, b: f32) -> i64 {
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

/// Series-based dilogarithm reference using full-precision logs.
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

macro_rules! sweep_orders {
    ($name:literal, $sweep:expr, $reference:expr, abs, $func:ident, [$($order:literal),+]) => {
        $(
            let err = $sweep.max_abs_err(|x| mathflow_core::$func::<$order, f64>(x), $reference);
            row($name, stringify!($order), "abs", err);
        )+
    };
    ($name:literal, $sweep:expr, $reference:expr, rel, $func:ident, [$($order:literal),+]) => {
        $(
            let err = $sweep.max_rel_err(|x| mathflow_core::$func::<$order, f64>(x), $reference);
            row($name, stringify!($order), "rel", err);
        )+
    };
    ($name:literal, $sweep:expr, $reference:expr, ulp, $func:ident, [$($order:literal),+]) => {
        $(
            let err = $sweep.max_ulp_err(|x| mathflow_core::$func::<$order, f32>(x), $reference);
            row_ulp($name, stringify!($order), err);
        )+
    };
}

macro_rules! sweep_li2 {
    ($sweep:expr, [$(($poly:literal, $log:literal)),+]) => {
        $(
            let err = $sweep.max_abs_err(|x| mathflow_core::li2::<$poly, $log, f64>(x), li2_ref);
            row("li2", stringify!($poly), "abs", err);
            let err = $sweep.max_ulp_err(|x| mathflow_core::li2::<$poly, $log, f32>(x), li2_ref);
            row_ulp("li2", stringify!($poly), err);
        )+
    };
}

macro_rules! sweep_omega {
    ($sweep:expr, [$(($iters:literal, $poly:literal, $aux:literal)),+]) => {
        $(
            let err = $sweep.max_abs_err(
                |x| mathflow_core::wright_omega::<$iters, $poly, $aux, $aux, f64>(x),
                omega_ref,
            );
            row("wright_omega", stringify!($iters), "abs", err);
            let err = $sweep.max_ulp_err(
                |x| mathflow_core::wright_omega::<$iters, $poly, $aux, $aux, f32>(x),
                omega_ref,
            );
            row_ulp("wright_omega", stringify!($iters), err);
        )+
    };
}

fn main() -> Result<()> {
    env_logger::init();
    info!("sweeping {} points per function/order", POINTS);

    println!("function,order,metric,max_error");

    let angles = Sweep::new(-10.0, 10.0);
    sweep_orders!("sin", angles, f64::sin, abs, sin, [5, 7, 9]);
    sweep_orders!("sin", angles, f64::sin, ulp, sin, [5, 7, 9]);
    sweep_orders!("cos", angles, f64::cos, abs, cos, [5, 7, 9]);
    sweep_orders!("cos", angles, f64::cos, ulp, cos, [5, 7, 9]);

    let half_period = Sweep::new(-1.4, 1.4);
    sweep_orders!("tan", half_period, f64::tan, abs, tan, [3, 5, 7, 9, 11, 13, 15]);
    sweep_orders!("tan", half_period, f64::tan, ulp, tan, [3, 5, 7, 9, 11, 13, 15]);

    let phases = Sweep::new(-4.0, 4.0);
    sweep_orders!(
        "sin_turns",
        phases,
        |x: f64| (2.0 * PI * x).sin(),
        abs,
        sin_turns,
        [5, 7, 9, 11]
    );
    sweep_orders!(
        "sin_turns",
        phases,
        |x: f64| (2.0 * PI * x).sin(),
        ulp,
        sin_turns,
        [5, 7, 9, 11]
    );
    sweep_orders!(
        "cos_turns",
        phases,
        |x: f64| (2.0 * PI * x).cos(),
        abs,
        cos_turns,
        [5, 7, 9, 11]
    );
    sweep_orders!(
        "cos_turns",
        phases,
        |x: f64| (2.0 * PI * x).cos(),
        ulp,
        cos_turns,
        [5, 7, 9, 11]
    );

    let unit = Sweep::new(-1.0, 1.0);
    sweep_orders!("asin", unit, f64::asin, abs, asin, [3, 4, 5, 6, 7, 8, 9, 10, 11]);
    sweep_orders!("asin", unit, f64::asin, ulp, asin, [3, 4, 5, 6, 7, 8, 9, 10, 11]);
    sweep_orders!("acos", unit, f64::acos, abs, acos, [3, 4, 5, 6, 7, 8, 9, 10, 11]);
    sweep_orders!("acos", unit, f64::acos, ulp, acos, [3, 4, 5, 6, 7, 8, 9, 10, 11]);
    sweep_orders!("atan", angles, f64::atan, abs, atan, [5, 7, 9, 11]);
    sweep_orders!("atan", angles, f64::atan, ulp, atan, [5, 7, 9, 11]);

    let exp_range = Sweep::new(-10.0, 10.0);
    sweep_orders!("exp", exp_range, f64::exp, rel, exp, [3, 4, 5, 6]);
    sweep_orders!("exp", exp_range, f64::exp, ulp, exp, [3, 4, 5, 6]);
    sweep_orders!("exp2", exp_range, f64::exp2, rel, exp2, [3, 4, 5, 6]);
    sweep_orders!("exp2", exp_range, f64::exp2, ulp, exp2, [3, 4, 5, 6]);
    sweep_orders!(
        "exp10",
        Sweep::new(-6.0, 6.0),
        |x: f64| 10.0f64.powf(x),
        rel,
        exp10,
        [3, 4, 5, 6]
    );
    sweep_orders!(
        "exp10",
        Sweep::new(-6.0, 6.0),
        |x: f64| 10.0f64.powf(x),
        ulp,
        exp10,
        [3, 4, 5, 6]
    );

    let log_range = Sweep::new(1e-3, 10.0);
    sweep_orders!("log", log_range, f64::ln, abs, log, [3, 4, 5, 6]);
    sweep_orders!("log", log_range, f64::ln, ulp, log, [3, 4, 5, 6]);
    sweep_orders!("log2", log_range, f64::log2, abs, log2, [3, 4, 5, 6]);
    sweep_orders!("log2", log_range, f64::log2, ulp, log2, [3, 4, 5, 6]);
    sweep_orders!("log10", log_range, f64::log10, abs, log10, [3, 4, 5, 6]);
    sweep_orders!("log10", log_range, f64::log10, ulp, log10, [3, 4, 5, 6]);

    sweep_orders!("tanh", angles, f64::tanh, abs, tanh, [3, 5, 7, 9, 11]);
    sweep_orders!("tanh", angles, f64::tanh, ulp, tanh, [3, 5, 7, 9, 11]);
    let logistic = |x: f64| 1.0 / (1.0 + (-x).exp());
    let wide = Sweep::new(-20.0, 20.0);
    sweep_orders!("sigmoid", wide, logistic, abs, sigmoid, [3, 5, 7, 9]);
    sweep_orders!("sigmoid", wide, logistic, ulp, sigmoid, [3, 5, 7, 9]);
    sweep_orders!("sigmoid_exp", wide, logistic, abs, sigmoid_exp, [3, 4, 5, 6]);
    sweep_orders!("sigmoid_exp", wide, logistic, ulp, sigmoid_exp, [3, 4, 5, 6]);

    sweep_orders!("sinh", angles, f64::sinh, rel, sinh, [3, 4, 5, 6]);
    sweep_orders!("cosh", angles, f64::cosh, rel, cosh, [3, 4, 5, 6]);
    sweep_orders!("cosh", angles, f64::cosh, ulp, cosh, [3, 4, 5, 6]);
    sweep_orders!("asinh", angles, f64::asinh, abs, asinh, [3, 4, 5, 6]);
    sweep_orders!("asinh", angles, f64::asinh, ulp, asinh, [3, 4, 5, 6]);
    sweep_orders!(
        "acosh",
        Sweep::new(1.0, 10.0),
        f64::acosh,
        abs,
        acosh,
        [3, 4, 5, 6]
    );
    sweep_orders!(
        "atanh",
        Sweep::new(-0.9999, 0.9999),
        f64::atanh,
        abs,
        atanh,
        [3, 4, 5, 6]
    );

    let li2_range = Sweep::new(-10.0, 10.0);
    sweep_li2!(li2_range, [(1, 3), (2, 4), (3, 5), (4, 6)]);

    let omega_range = Sweep::new(-10.0, 30.0);
    sweep_omega!(omega_range, [(0, 3, 3), (1, 3, 3), (2, 3, 4), (3, 3, 5)]);

    info!("done");
    Ok(())
}
