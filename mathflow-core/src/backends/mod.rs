//! Platform SIMD backends.
//!
//! Each backend exposes a `SimdVec<T>` register type and implements the
//! [`SimdFloat`]/[`SimdInt`] contracts for `f32`/`f64` and their equal-width
//! integer companions. [`crate::Batch`] selects a backend per target
//! architecture at compile time; the portable [`scalar`] backend covers
//! everything else with identical per-lane semantics.

pub mod scalar;

#[cfg(target_arch = "x86_64")]
pub mod x86;

#[cfg(target_arch = "aarch64")]
pub mod arm;

/// Packed-float operations a backend register must provide.
///
/// Comparison results are full-width lane masks (all ones / all zeros) in the
/// integer companion type, consumed only by [`SimdFloat::select`].
pub trait SimdFloat: Copy {
    /// Element type of the lanes.
    type Elem: Copy;
    /// Equal-width integer register for masks and bit manipulation.
    type Int: SimdInt;
    /// Number of lanes.
    const LANES: usize;

    /// Broadcasts `v` (narrowed to the element type) into every lane.
    fn splat(v: f64) -> Self;
    /// Loads `LANES` elements from `ptr`.
    ///
    /// # Safety
    /// `ptr` must be valid for reading `LANES` elements.
    unsafe fn load(ptr: *const Self::Elem) -> Self;
    /// Stores `LANES` elements to `ptr`.
    ///
    /// # Safety
    /// `ptr` must be valid for writing `LANES` elements.
    unsafe fn store(self, ptr: *mut Self::Elem);
    /// Lanewise addition.
    fn add(self, rhs: Self) -> Self;
    /// Lanewise subtraction.
    fn sub(self, rhs: Self) -> Self;
    /// Lanewise multiplication.
    fn mul(self, rhs: Self) -> Self;
    /// Lanewise division.
    fn div(self, rhs: Self) -> Self;
    /// Lanewise negation.
    fn neg(self) -> Self;
    /// Lanewise absolute value.
    fn abs(self) -> Self;
    /// Lanewise square root.
    fn sqrt(self) -> Self;
    /// Lanewise reciprocal square root.
    fn rsqrt(self) -> Self;
    /// Lanewise minimum.
    fn min(self, rhs: Self) -> Self;
    /// Lanewise maximum.
    fn max(self, rhs: Self) -> Self;
    /// Lanewise truncation toward zero.
    fn trunc(self) -> Self;
    /// Lanewise round to nearest.
    fn round(self) -> Self;
    /// Lanewise `self < rhs` mask.
    fn cmp_lt(self, rhs: Self) -> Self::Int;
    /// Lanewise `self <= rhs` mask.
    fn cmp_le(self, rhs: Self) -> Self::Int;
    /// Lanewise `self > rhs` mask.
    fn cmp_gt(self, rhs: Self) -> Self::Int;
    /// Lanewise `self >= rhs` mask.
    fn cmp_ge(self, rhs: Self) -> Self::Int;
    /// Lanewise merge by mask.
    fn select(mask: Self::Int, if_true: Self, if_false: Self) -> Self;
    /// Bit pattern of each lane.
    fn to_bits(self) -> Self::Int;
    /// Lanes built from raw bit patterns.
    fn from_bits(bits: Self::Int) -> Self;
    /// Lanewise truncating conversion to integer lanes.
    fn trunc_int(self) -> Self::Int;
    /// Lanewise conversion from integer lanes.
    fn int_to_float(bits: Self::Int) -> Self;
}

/// Packed-integer operations a backend register must provide.
pub trait SimdInt: Copy {
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
