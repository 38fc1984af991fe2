//! The numeric lane abstraction.
//!
//! Every approximation in this crate is written once, generically, against
//! [`Lane`]: the set of elementwise primitives a scalar float or a SIMD batch
//! must provide. Scalars implement it directly (via `libm` for the handful of
//! operations `core` does not offer); [`crate::Batch`] implements it on top of
//! the platform backend. The per-element semantics are identical either way,
//! which is what lets the scalar and batch call forms agree lane-for-lane.

use core::ops::{Add, Div, Mul, Neg, Sub};

/// Integer companion to a [`Lane`]: the equal-width lanes a float's bit
/// pattern reinterprets into.
///
/// Arithmetic wraps; `shr` is a logical shift. Methods rather than operator
/// traits so the scalar impls can sit directly on `i32`/`i64` without newtype
/// wrappers.
pub trait BitLane: Copy {
    /// Broadcasts `v` (narrowed to the lane width) into every lane.
    fn splat(v: i64) -> Self;
    /// Lanewise bitwise AND.
    fn and(self, rhs: Self) -> Self;
    /// Lanewise bitwise OR.
    fn or(self, rhs: Self) -> Self;
    /// Lanewise wrapping add.
    fn add(self, rhs: Self) -> Self;
    /// Lanewise wrapping subtract.
    fn sub(self, rhs: Self) -> Self;
    /// Lanewise shift left.
    fn shl(self, count: u32) -> Self;
    /// Lanewise logical shift right.
    fn shr(self, count: u32) -> Self;
}

/// A scalar float or a fixed-width batch of floats.
///
/// The associated constants describe the IEEE-754 layout of the element type;
/// the exponential/logarithmic family splices bit patterns through them, so
/// they must match binary32/binary64 exactly.
pub trait Lane:
    Copy
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
{
    /// Equal-width integer lanes for bit-level manipulation.
    type Bits: BitLane;
    /// Per-lane comparison result, consumed only by [`Lane::select`].
    type Mask: Copy;

    /// Width of the mantissa field (23 for binary32, 52 for binary64).
    const MANTISSA_BITS: u32;
    /// Exponent bias (127 for binary32, 1023 for binary64).
    const EXP_BIAS: i64;
    /// Mask covering the exponent field.
    const EXP_MASK: i64;
    /// Bit pattern of 1.0 (exponent field forced to the bias).
    const ONE_BITS: i64;
    /// Smallest normal base-2 exponent, as a float clamp value.
    const MIN_EXP: f64;

    /// Broadcasts `v` (narrowed to the element type) into every lane.
    fn splat(v: f64) -> Self;
    /// Lanewise absolute value.
    fn abs(self) -> Self;
    /// Lanewise square root.
    fn sqrt(self) -> Self;
    /// Lanewise reciprocal square root.
    ///
    /// Scalars compute the exact `1/sqrt(x)`. Batch backends may use a
    /// hardware estimate plus one Newton-Raphson refinement, which lands
    /// within a few ULP of exact.
    fn rsqrt(self) -> Self;
    /// Lanewise minimum.
    fn min(self, rhs: Self) -> Self;
    /// Lanewise maximum.
    fn max(self, rhs: Self) -> Self;
    /// Lanewise truncation toward zero, staying in the float domain.
    fn trunc(self) -> Self;
    /// Lanewise round to nearest, staying in the float domain.
    fn round(self) -> Self;
    /// Lanewise `self < rhs`.
    fn lt(self, rhs: Self) -> Self::Mask;
    /// Lanewise `self <= rhs`.
    fn le(self, rhs: Self) -> Self::Mask;
    /// Lanewise `self > rhs`.
    fn gt(self, rhs: Self) -> Self::Mask;
    /// Lanewise `self >= rhs`.
    fn ge(self, rhs: Self) -> Self::Mask;
    /// Lanewise merge: `if_true` where the mask is set, `if_false` elsewhere.
    ///
    /// Branchless in the batch case; both arguments are always evaluated.
    fn select(mask: Self::Mask, if_true: Self, if_false: Self) -> Self;
    /// Reinterprets the lanes as their raw bit patterns.
    fn to_bits(self) -> Self::Bits;
    /// Reinterprets raw bit patterns as float lanes.
    fn from_bits(bits: Self::Bits) -> Self;
    /// Lanewise truncating float-to-int conversion.
    fn trunc_int(self) -> Self::Bits;
    /// Lanewise int-to-float conversion.
    fn int_to_float(bits: Self::Bits) -> Self;
}

impl BitLane for i32 {
    #[inline(always)]
    fn splat(v: i64) -> Self {
        v as i32
    }
    #[inline(always)]
    fn and(self, rhs: Self) -> Self {
        self & rhs
    }
    #[inline(always)]
    fn or(self, rhs: Self) -> Self {
        self | rhs
    }
    #[inline(always)]
    fn add(self, rhs: Self) -> Self {
        self.wrapping_add(rhs)
    }
    #[inline(always)]
    fn sub(self, rhs: Self) -> Self {
        self.wrapping_sub(rhs)
    }
    #[inline(always)]
    fn shl(self, count: u32) -> Self {
        self.wrapping_shl(count)
    }
    #[inline(always)]
    fn shr(self, count: u32) -> Self {
        ((self as u32).wrapping_shr(count)) as i32
    }
}

impl BitLane for i64 {
    #[inline(always)]
    fn splat(v: i64) -> Self {
        v
    }
    #[inline(always)]
    fn and(self, rhs: Self) -> Self {
        self & rhs
    }
    #[inline(always)]
    fn or(self, rhs: Self) -> Self {
        self | rhs
    }
    #[inline(always)]
    fn add(self, rhs: Self) -> Self {
        self.wrapping_add(rhs)
    }
    #[inline(always)]
    fn sub(self, rhs: Self) -> Self {
        self.wrapping_sub(rhs)
    }
    #[inline(always)]
    fn shl(self, count: u32) -> Self {
        self.wrapping_shl(count)
    }
    #[inline(always)]
    fn shr(self, count: u32) -> Self {
        ((self as u64).wrapping_shr(count)) as i64
    }
}

impl Lane for f32 {
    type Bits = i32;
    type Mask = bool;

    const MANTISSA_BITS: u32 = 23;
    const EXP_BIAS: i64 = 127;
    const EXP_MASK: i64 = 0x7f80_0000;
    const ONE_BITS: i64 = 0x3f80_0000;
    const MIN_EXP: f64 = -126.0;

    #[inline(always)]
    fn splat(v: f64) -> Self {
        v as f32
    }
    #[inline(always)]
    fn abs(self) -> Self {
        libm::fabsf(self)
    }
    #[inline(always)]
    fn sqrt(self) -> Self {
        libm::sqrtf(self)
    }
    #[inline(always)]
    fn rsqrt(self) -> Self {
        1.0 / libm::sqrtf(self)
    }
    #[inline(always)]
    fn min(self, rhs: Self) -> Self {
        libm::fminf(self, rhs)
    }
    #[inline(always)]
    fn max(self, rhs: Self) -> Self {
        libm::fmaxf(self, rhs)
    }
    #[inline(always)]
    fn trunc(self) -> Self {
        libm::truncf(self)
    }
    #[inline(always)]
    fn round(self) -> Self {
        libm::rintf(self)
    }
    #[inline(always)]
    fn lt(self, rhs: Self) -> bool {
        self < rhs
    }
    #[inline(always)]
    fn le(self, rhs: Self) -> bool {
        self <= rhs
    }
    #[inline(always)]
    fn gt(self, rhs: Self) -> bool {
        self > rhs
    }
    #[inline(always)]
    fn ge(self, rhs: Self) -> bool {
        self >= rhs
    }
    #[inline(always)]
    fn select(mask: bool, if_true: Self, if_false: Self) -> Self {
        if mask {
            if_true
        } else {
            if_false
        }
    }
    #[inline(always)]
    fn to_bits(self) -> i32 {
        self.to_bits() as i32
    }
    #[inline(always)]
    fn from_bits(bits: i32) -> Self {
        f32::from_bits(bits as u32)
    }
    #[inline(always)]
    fn trunc_int(self) -> i32 {
        self as i32
    }
    #[inline(always)]
    fn int_to_float(bits: i32) -> Self {
        bits as f32
    }
}

impl Lane for f64 {
    type Bits = i64;
    type Mask = bool;

    const MANTISSA_BITS: u32 = 52;
    const EXP_BIAS: i64 = 1023;
    const EXP_MASK: i64 = 0x7ff0_0000_0000_0000;
    const ONE_BITS: i64 = 0x3ff0_0000_0000_0000;
    const MIN_EXP: f64 = -1022.0;

    #[inline(always)]
    fn splat(v: f64) -> Self {
        v
    }
    #[inline(always)]
    fn abs(self) -> Self {
        libm::fabs(self)
    }
    #[inline(always)]
    fn sqrt(self) -> Self {
        libm::sqrt(self)
    }
    #[inline(always)]
    fn rsqrt(self) -> Self {
        1.0 / libm::sqrt(self)
    }
    #[inline(always)]
    fn min(self, rhs: Self) -> Self {
        libm::fmin(self, rhs)
    }
    #[inline(always)]
    fn max(self, rhs: Self) -> Self {
        libm::fmax(self, rhs)
    }
    #[inline(always)]
    fn trunc(self) -> Self {
        libm::trunc(self)
    }
    #[inline(always)]
    fn round(self) -> Self {
        libm::rint(self)
    }
    #[inline(always)]
    fn lt(self, rhs: Self) -> bool {
        self < rhs
    }
    #[inline(always)]
    fn le(self, rhs: Self) -> bool {
        self <= rhs
    }
    #[inline(always)]
    fn gt(self, rhs: Self) -> bool {
        self > rhs
    }
    #[inline(always)]
    fn ge(self, rhs: Self) -> bool {
        self >= rhs
    }
    #[inline(always)]
    fn select(mask: bool, if_true: Self, if_false: Self) -> Self {
        if mask {
            if_true
        } else {
            if_false
        }
    }
    #[inline(always)]
    fn to_bits(self) -> i64 {
        self.to_bits() as i64
    }
    #[inline(always)]
    fn from_bits(bits: i64) -> Self {
        f64::from_bits(bits as u64)
    }
    #[inline(always)]
    fn trunc_int(self) -> i64 {
        self as i64
    }
    #[inline(always)]
    fn int_to_float(bits: i64) -> Self {
        bits as f64
    }
}
