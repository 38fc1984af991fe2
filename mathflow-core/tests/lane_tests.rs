//! Unit tests for the lane primitives every approximation is built on.

use mathflow_core::{Batch, BitLane, Lane};

#[test]
fn test_scalar_select_and_compare() {
    let m = Lane::lt(2.0f64, 3.0);
    assert!(m);
    assert_eq!(<f64 as Lane>::select(m, 1.0, -1.0), 1.0);
    assert_eq!(<f64 as Lane>::select(false, 1.0, -1.0), -1.0);
    assert!(Lane::ge(3.0f32, 3.0));
    assert!(!Lane::gt(3.0f32, 3.0));
}

#[test]
fn test_scalar_trunc_and_round() {
    assert_eq!(Lane::trunc(-2.7f64), -2.0);
    assert_eq!(Lane::trunc(2.7f32), 2.0);
    // Round is to nearest even, matching the SIMD rounding mode.
    assert_eq!(Lane::round(2.5f64), 2.0);
    assert_eq!(Lane::round(-2.5f64), -2.0);
    assert_eq!(Lane::round(3.5f64), 4.0);
}

#[test]
fn test_scalar_bit_splice_round_trip() {
    for &x in &[1.0f64, -0.375, 1234.5, 1e-300] {
        let bits = Lane::to_bits(x);
        assert_eq!(<f64 as Lane>::from_bits(bits), x);
    }
    let one = <f64 as Lane>::from_bits(<f64 as Lane>::ONE_BITS);
    assert_eq!(one, 1.0);
    let one = <f32 as Lane>::from_bits(<f32 as Lane>::ONE_BITS as i32);
    assert_eq!(one, 1.0);
}

#[test]
fn test_scalar_int_conversions() {
    assert_eq!(<f64 as Lane>::trunc_int(-2.7), -2);
    assert_eq!(<f32 as Lane>::trunc_int(200.9), 200);
    assert_eq!(<f64 as Lane>::int_to_float(-5), -5.0);
    assert_eq!(<f32 as Lane>::int_to_float(1_000_000), 1e6);
}

#[test]
fn test_batch_select_is_lanewise() {
    let a = Batch::<f32>::from_array([1.0, 4.0, 2.0, 8.0]);
    let b = Batch::<f32>::from_array([3.0, 3.0, 3.0, 3.0]);
    let m = Lane::lt(a, b);
    let r = <Batch<f32> as Lane>::select(m, a, b);
    assert_eq!(r.to_array(), [1.0, 3.0, 2.0, 3.0]);

    let a = Batch::<f64>::from_array([-1.0, 5.0]);
    let b = Batch::<f64>::from_array([0.0, 0.0]);
    let r = <Batch<f64> as Lane>::select(Lane::ge(a, b), a, b);
    assert_eq!(r.to_array(), [0.0, 5.0]);
}

#[test]
fn test_batch_trunc_and_round_negative() {
    let v = Batch::<f64>::from_array([-2.7, 2.7]);
    assert_eq!(Lane::trunc(v).to_array(), [-2.0, 2.0]);

    let v = Batch::<f32>::from_array([-0.5, -1.5, 0.5, 1.5]);
    assert_eq!(Lane::round(v).to_array(), [0.0, -2.0, 0.0, 2.0]);
}

#[test]
fn test_batch_bit_splice_round_trip() {
    let v = Batch::<f64>::from_array([1.5, -0.375]);
    let r = <Batch<f64> as Lane>::from_bits(Lane::to_bits(v));
    assert_eq!(r.to_array(), [1.5, -0.375]);
}

#[test]
fn test_batch_int_round_trip() {
    let v = Batch::<f64>::from_array([-42.9, 17.2]);
    let r = <Batch<f64> as Lane>::int_to_float(Lane::trunc_int(v));
    assert_eq!(r.to_array(), [-42.0, 17.0]);

    let v = Batch::<f32>::from_array([-42.9, 17.2, 0.0, 1e6]);
    let r = <Batch<f32> as Lane>::int_to_float(Lane::trunc_int(v));
    assert_eq!(r.to_array(), [-42.0, 17.0, 0.0, 1e6]);
}

#[test]
fn test_batch_exponent_splice() {
    // Biased exponent 1024 in the exponent field reads back as 2.0.
    let bits = <Batch<i64> as BitLane>::splat(1024).shl(52);
    let v = <Batch<f64> as Lane>::from_bits(bits);
    assert_eq!(v.to_array(), [2.0, 2.0]);

    let bits = <Batch<i32> as BitLane>::splat(128).shl(23);
    let v = <Batch<f32> as Lane>::from_bits(bits);
    assert_eq!(v.to_array(), [2.0, 2.0, 2.0, 2.0]);
}

#[test]
fn test_batch_min_max() {
    let a = Batch::<f32>::from_array([1.0, -4.0, 2.0, 8.0]);
    let b = Batch::<f32>::from_array([3.0, 3.0, -3.0, 3.0]);
    assert_eq!(Lane::min(a, b).to_array(), [1.0, -4.0, -3.0, 3.0]);
    assert_eq!(Lane::max(a, b).to_array(), [3.0, 3.0, 2.0, 8.0]);
}

#[test]
fn test_rsqrt_accuracy() {
    // f32 SIMD rsqrt is a hardware estimate plus one refinement step.
    for i in 1..200 {
        let x = 0.05 * (i as f32);
        let xs = [x, x * 2.0, x * 4.0, x * 0.5];
        let got = Lane::rsqrt(Batch::<f32>::from_array(xs)).to_array();
        for (lane, &v) in xs.iter().enumerate() {
            let want = 1.0 / v.sqrt();
            let rel = ((got[lane] - want) / want).abs();
            assert!(rel < 1e-5, "rsqrt lane {} at {}: {} vs {}", lane, v, got[lane], want);
        }
    }

    // Scalar and f64 paths are exact divides.
    assert_eq!(<f64 as Lane>::rsqrt(4.0), 0.5);
    let got = Lane::rsqrt(Batch::<f64>::from_array([4.0, 0.0625])).to_array();
    assert_eq!(got, [0.5, 4.0]);
}
