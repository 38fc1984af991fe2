//! A fixed-width SIMD batch of values of type `T`.
//!
//! `Batch` wraps the platform backend register selected at compile time and
//! implements [`Lane`], so every approximation in [`crate::ops`] accepts a
//! batch exactly where it accepts a scalar.

use crate::backends::{SimdFloat, SimdInt};
use crate::lane::{BitLane, Lane};
use core::ops::{Add, Div, Mul, Neg, Sub};

#[cfg(target_arch = "x86_64")]
use crate::backends::x86 as backend;

#[cfg(target_arch = "aarch64")]
use crate::backends::arm as backend;

#[cfg(not(any(target_arch = "x86_64", target_arch = "aarch64")))]
use crate::backends::scalar as backend;

pub use backend::SimdVec;

/// A SIMD batch of values of type `T`.
///
/// Four lanes for 32-bit elements, two for 64-bit. Every operation applies
/// independently per lane.
#[derive(Copy, Clone)]
#[repr(transparent)]
pub struct Batch<T: Copy> {
    pub(crate) inner: backend::SimdVec<T>,
}

impl<T: Copy> Add for Batch<T>
where
    backend::SimdVec<T>: SimdFloat,
{
    type Output = Self;
    #[inline(always)]
    fn add(self, rhs: Self) -> Self {
        Self {
            inner: SimdFloat::add(self.inner, rhs.inner),
        }
    }
}

impl<T: Copy> Sub for Batch<T>
where
    backend::SimdVec<T>: SimdFloat,
{
    type Output = Self;
    #[inline(always)]
    fn sub(self, rhs: Self) -> Self {
        Self {
            inner: SimdFloat::sub(self.inner, rhs.inner),
        }
    }
}

impl<T: Copy> Mul for Batch<T>
where
    backend::SimdVec<T>: SimdFloat,
{
    type Output = Self;
    #[inline(always)]
    fn mul(self, rhs: Self) -> Self {
        Self {
            inner: SimdFloat::mul(self.inner, rhs.inner),
        }
    }
}

impl<T: Copy> Div for Batch<T>
where
    backend::SimdVec<T>: SimdFloat,
{
    type Output = Self;
    #[inline(always)]
    fn div(self, rhs: Self) -> Self {
        Self {
            inner: SimdFloat::div(self.inner, rhs.inner),
        }
    }
}

impl<T: Copy> Neg for Batch<T>
where
    backend::SimdVec<T>: SimdFloat,
{
    type Output = Self;
    #[inline(always)]
    fn neg(self) -> Self {
        Self {
            inner: SimdFloat::neg(self.inner),
        }
    }
}

macro_rules! impl_lane_for_batch {
    ($elem:ty, $int:ty, $lanes:expr) => {
        impl Batch<$elem> {
            /// Number of lanes.
            pub const LANES: usize = $lanes;

            /// Builds a batch from an array, one element per lane.
            #[inline(always)]
            #[must_use]
            pub fn from_array(arr: [$elem; $lanes]) -> Self {
                Self {
                    inner: unsafe { SimdFloat::load(arr.as_ptr()) },
                }
            }

            /// Returns the lanes as an array.
            #[inline(always)]
            pub fn to_array(self) -> [$elem; $lanes] {
                let mut out = [0.0 as $elem; $lanes];
                unsafe { SimdFloat::store(self.inner, out.as_mut_ptr()) };
                out
            }
        }

        impl Lane for Batch<$elem> {
            type Bits = Batch<$int>;
            type Mask = Batch<$int>;

            const MANTISSA_BITS: u32 = <$elem as Lane>::MANTISSA_BITS;
            const EXP_BIAS: i64 = <$elem as Lane>::EXP_BIAS;
            const EXP_MASK: i64 = <$elem as Lane>::EXP_MASK;
            const ONE_BITS: i64 = <$elem as Lane>::ONE_BITS;
            const MIN_EXP: f64 = <$elem as Lane>::MIN_EXP;

            #[inline(always)]
            fn splat(v: f64) -> Self {
                Self {
                    inner: <backend::SimdVec<$elem> as SimdFloat>::splat(v),
                }
            }
            #[inline(always)]
            fn abs(self) -> Self {
                Self {
                    inner: SimdFloat::abs(self.inner),
                }
            }
            #[inline(always)]
            fn sqrt(self) -> Self {
                Self {
                    inner: SimdFloat::sqrt(self.inner),
                }
            }
            #[inline(always)]
            fn rsqrt(self) -> Self {
                Self {
                    inner: SimdFloat::rsqrt(self.inner),
                }
            }
            #[inline(always)]
            fn min(self, rhs: Self) -> Self {
                Self {
                    inner: SimdFloat::min(self.inner, rhs.inner),
                }
            }
            #[inline(always)]
            fn max(self, rhs: Self) -> Self {
                Self {
                    inner: SimdFloat::max(self.inner, rhs.inner),
                }
            }
            #[inline(always)]
            fn trunc(self) -> Self {
                Self {
                    inner: SimdFloat::trunc(self.inner),
                }
            }
            #[inline(always)]
            fn round(self) -> Self {
                Self {
                    inner: SimdFloat::round(self.inner),
                }
            }
            #[inline(always)]
            fn lt(self, rhs: Self) -> Batch<$int> {
                Batch {
                    inner: SimdFloat::cmp_lt(self.inner, rhs.inner),
                }
            }
            #[inline(always)]
            fn le(self, rhs: Self) -> Batch<$int> {
                Batch {
                    inner: SimdFloat::cmp_le(self.inner, rhs.inner),
                }
            }
            #[inline(always)]
            fn gt(self, rhs: Self) -> Batch<$int> {
                Batch {
                    inner: SimdFloat::cmp_gt(self.inner, rhs.inner),
                }
            }
            #[inline(always)]
            fn ge(self, rhs: Self) -> Batch<$int> {
                Batch {
                    inner: SimdFloat::cmp_ge(self.inner, rhs.inner),
                }
            }
            #[inline(always)]
            fn select(mask: Batch<$int>, if_true: Self, if_false: Self) -> Self {
                Self {
                    inner: SimdFloat::select(mask.inner, if_true.inner, if_false.inner),
                }
            }
            #[inline(always)]
            fn to_bits(self) -> Batch<$int> {
                Batch {
                    inner: SimdFloat::to_bits(self.inner),
                }
            }
            #[inline(always)]
            fn from_bits(bits: Batch<$int>) -> Self {
                Self {
                    inner: SimdFloat::from_bits(bits.inner),
                }
            }
            #[inline(always)]
            fn trunc_int(self) -> Batch<$int> {
                Batch {
                    inner: SimdFloat::trunc_int(self.inner),
                }
            }
            #[inline(always)]
            fn int_to_float(bits: Batch<$int>) -> Self {
                Self {
                    inner: SimdFloat::int_to_float(bits.inner),
                }
            }
        }

        impl BitLane for Batch<$int> {
            #[inline(always)]
            fn splat(v: i64) -> Self {
                Self {
                    inner: <backend::SimdVec<$int> as SimdInt>::splat(v),
                }
            }
            #[inline(always)]
            fn and(self, rhs: Self) -> Self {
                Self {
                    inner: SimdInt::and(self.inner, rhs.inner),
                }
            }
            #[inline(always)]
            fn or(self, rhs: Self) -> Self {
                Self {
                    inner: SimdInt::or(self.inner, rhs.inner),
                }
            }
            #[inline(always)]
            fn add(self, rhs: Self) -> Self {
                Self {
                    inner: SimdInt::add(self.inner, rhs.inner),
                }
            }
            #[inline(always)]
            fn sub(self, rhs: Self) -> Self {
                Self {
                    inner: SimdInt::sub(self.inner, rhs.inner),
                }
            }
            #[inline(always)]
            fn shl(self, count: u32) -> Self {
                Self {
                    inner: SimdInt::shl(self.inner, count),
                }
            }
            #[inline(always)]
            fn shr(self, count: u32) -> Self {
                Self {
                    inner: SimdInt::shr(self.inner, count),
                }
            }
        }
    };
}

impl_lane_for_batch!(f32, i32, 4);
impl_lane_for_batch!(f64, i64, 2);
