//! SSE2 backend (4 `f32` lanes, 2 `f64` lanes).

use super::{SimdFloat, SimdInt};
use core::arch::x86_64::*;
use core::marker::PhantomData;

/// Raw 128-bit register, viewable as packed singles, doubles, or integers.
#[derive(Copy, Clone)]
#[repr(C)]
pub union Reg<T> {
    /// Packed single-precision view.
    pub f: __m128,
    /// Packed double-precision view.
    pub d: __m128d,
    /// Packed integer view.
    pub i: __m128i,
    _marker: PhantomData<T>,
}

/// Platform SIMD vector of `T`.
#[derive(Copy, Clone)]
#[repr(transparent)]
pub struct SimdVec<T: Copy>(pub(crate) Reg<T>);

impl SimdFloat for SimdVec<f32> {
    type Elem = f32;
    type Int = SimdVec<i32>;
    const LANES: usize = 4;

    #[inline(always)]
    fn splat(v: f64) -> Self {
        unsafe {
            Self(Reg {
                f: _mm_set1_ps(v as f32),
            })
        }
    }

    #[inline(always)]
    unsafe fn load(ptr: *const f32) -> Self {
        unsafe {
            Self(Reg {
                f: _mm_loadu_ps(ptr),
            })
        }
    }

    #[inline(always)]
    unsafe fn store(self, ptr: *mut f32) {
        unsafe { _mm_storeu_ps(ptr, self.0.f) }
    }

    #[inline(always)]
    fn add(self, rhs: Self) -> Self {
        unsafe {
            Self(Reg {
                f: _mm_add_ps(self.0.f, rhs.0.f),
            })
        }
    }

    #[inline(always)]
    fn sub(self, rhs: Self) -> Self {
        unsafe {
            Self(Reg {
                f: _mm_sub_ps(self.0.f, rhs.0.f),
            })
        }
    }

    #[inline(always)]
    fn mul(self, rhs: Self) -> Self {
        unsafe {
            Self(Reg {
                f: _mm_mul_ps(self.0.f, rhs.0.f),
            })
        }
    }

    #[inline(always)]
    fn div(self, rhs: Self) -> Self {
        unsafe {
            Self(Reg {
                f: _mm_div_ps(self.0.f, rhs.0.f),
            })
        }
    }

    #[inline(always)]
    fn neg(self) -> Self {
        unsafe {
            Self(Reg {
                f: _mm_xor_ps(self.0.f, _mm_set1_ps(-0.0)),
            })
        }
    }

    #[inline(always)]
    fn abs(self) -> Self {
        unsafe {
            Self(Reg {
                f: _mm_andnot_ps(_mm_set1_ps(-0.0), self.0.f),
            })
        }
    }

    #[inline(always)]
    fn sqrt(self) -> Self {
        unsafe {
            Self(Reg {
                f: _mm_sqrt_ps(self.0.f),
            })
        }
    }

    #[inline(always)]
    fn rsqrt(self) -> Self {
        unsafe {
            // Hardware estimate plus one Newton-Raphson step:
            // r <- -0.5 * r * (x*r*r - 3)
            let x = self.0.f;
            let r = _mm_rsqrt_ps(x);
            let xrr = _mm_mul_ps(_mm_mul_ps(x, r), r);
            let t = _mm_add_ps(xrr, _mm_set1_ps(-3.0));
            let rh = _mm_mul_ps(r, _mm_set1_ps(-0.5));
            Self(Reg {
                f: _mm_mul_ps(rh, t),
            })
        }
    }

    #[inline(always)]
    fn min(self, rhs: Self) -> Self {
        unsafe {
            Self(Reg {
                f: _mm_min_ps(self.0.f, rhs.0.f),
            })
        }
    }

    #[inline(always)]
    fn max(self, rhs: Self) -> Self {
        unsafe {
            Self(Reg {
                f: _mm_max_ps(self.0.f, rhs.0.f),
            })
        }
    }

    #[inline(always)]
    fn trunc(self) -> Self {
        unsafe {
            Self(Reg {
                f: _mm_cvtepi32_ps(_mm_cvttps_epi32(self.0.f)),
            })
        }
    }

    #[inline(always)]
    fn round(self) -> Self {
        unsafe {
            Self(Reg {
                f: _mm_cvtepi32_ps(_mm_cvtps_epi32(self.0.f)),
            })
        }
    }

    #[inline(always)]
    fn cmp_lt(self, rhs: Self) -> SimdVec<i32> {
        unsafe {
            SimdVec(Reg {
                i: _mm_castps_si128(_mm_cmplt_ps(self.0.f, rhs.0.f)),
            })
        }
    }

    #[inline(always)]
    fn cmp_le(self, rhs: Self) -> SimdVec<i32> {
        unsafe {
            SimdVec(Reg {
                i: _mm_castps_si128(_mm_cmple_ps(self.0.f, rhs.0.f)),
            })
        }
    }

    #[inline(always)]
    fn cmp_gt(self, rhs: Self) -> SimdVec<i32> {
        unsafe {
            SimdVec(Reg {
                i: _mm_castps_si128(_mm_cmpgt_ps(self.0.f, rhs.0.f)),
            })
        }
    }

    #[inline(always)]
    fn cmp_ge(self, rhs: Self) -> SimdVec<i32> {
        unsafe {
            SimdVec(Reg {
                i: _mm_castps_si128(_mm_cmpge_ps(self.0.f, rhs.0.f)),
            })
        }
    }

    #[inline(always)]
    fn select(mask: SimdVec<i32>, if_true: Self, if_false: Self) -> Self {
        unsafe {
            let t = _mm_castps_si128(if_true.0.f);
            let f = _mm_castps_si128(if_false.0.f);
            let merged = _mm_or_si128(_mm_and_si128(mask.0.i, t), _mm_andnot_si128(mask.0.i, f));
            Self(Reg {
                f: _mm_castsi128_ps(merged),
            })
        }
    }

    #[inline(always)]
    fn to_bits(self) -> SimdVec<i32> {
        unsafe {
            SimdVec(Reg {
                i: _mm_castps_si128(self.0.f),
            })
        }
    }

    #[inline(always)]
    fn from_bits(bits: SimdVec<i32>) -> Self {
        unsafe {
            Self(Reg {
                f: _mm_castsi128_ps(bits.0.i),
            })
        }
    }

    #[inline(always)]
    fn trunc_int(self) -> SimdVec<i32> {
        unsafe {
            SimdVec(Reg {
                i: _mm_cvttps_epi32(self.0.f),
            })
        }
    }

    #[inline(always)]
    fn int_to_float(bits: SimdVec<i32>) -> Self {
        unsafe {
            Self(Reg {
                f: _mm_cvtepi32_ps(bits.0.i),
            })
        }
    }
}

impl SimdFloat for SimdVec<f64> {
    type Elem = f64;
    type Int = SimdVec<i64>;
    const LANES: usize = 2;

    #[inline(always)]
    fn splat(v: f64) -> Self {
        unsafe { Self(Reg { d: _mm_set1_pd(v) }) }
    }

    #[inline(always)]
    unsafe fn load(ptr: *const f64) -> Self {
        unsafe {
            Self(Reg {
                d: _mm_loadu_pd(ptr),
            })
        }
    }

    #[inline(always)]
    unsafe fn store(self, ptr: *mut f64) {
        unsafe { _mm_storeu_pd(ptr, self.0.d) }
    }

    #[inline(always)]
    fn add(self, rhs: Self) -> Self {
        unsafe {
            Self(Reg {
                d: _mm_add_pd(self.0.d, rhs.0.d),
            })
        }
    }

    #[inline(always)]
    fn sub(self, rhs: Self) -> Self {
        unsafe {
            Self(Reg {
                d: _mm_sub_pd(self.0.d, rhs.0.d),
            })
        }
    }

    #[inline(always)]
    fn mul(self, rhs: Self) -> Self {
        unsafe {
            Self(Reg {
                d: _mm_mul_pd(self.0.d, rhs.0.d),
            })
        }
    }

    #[inline(always)]
    fn div(self, rhs: Self) -> Self {
        unsafe {
            Self(Reg {
                d: _mm_div_pd(self.0.d, rhs.0.d),
            })
        }
    }

    #[inline(always)]
    fn neg(self) -> Self {
        unsafe {
            Self(Reg {
                d: _mm_xor_pd(self.0.d, _mm_set1_pd(-0.0)),
            })
        }
    }

    #[inline(always)]
    fn abs(self) -> Self {
        unsafe {
            Self(Reg {
                d: _mm_andnot_pd(_mm_set1_pd(-0.0), self.0.d),
            })
        }
    }

    #[inline(always)]
    fn sqrt(self) -> Self {
        unsafe {
            Self(Reg {
                d: _mm_sqrt_pd(self.0.d),
            })
        }
    }

    #[inline(always)]
    fn rsqrt(self) -> Self {
        // No packed-double estimate instruction on SSE2; exact is cheap enough.
        unsafe {
            Self(Reg {
                d: _mm_div_pd(_mm_set1_pd(1.0), _mm_sqrt_pd(self.0.d)),
            })
        }
    }

    #[inline(always)]
    fn min(self, rhs: Self) -> Self {
        unsafe {
            Self(Reg {
                d: _mm_min_pd(self.0.d, rhs.0.d),
            })
        }
    }

    #[inline(always)]
    fn max(self, rhs: Self) -> Self {
        unsafe {
            Self(Reg {
                d: _mm_max_pd(self.0.d, rhs.0.d),
            })
        }
    }

    #[inline(always)]
    fn trunc(self) -> Self {
        unsafe {
            Self(Reg {
                d: _mm_cvtepi32_pd(_mm_cvttpd_epi32(self.0.d)),
            })
        }
    }

    #[inline(always)]
    fn round(self) -> Self {
        unsafe {
            Self(Reg {
                d: _mm_cvtepi32_pd(_mm_cvtpd_epi32(self.0.d)),
            })
        }
    }

    #[inline(always)]
    fn cmp_lt(self, rhs: Self) -> SimdVec<i64> {
        unsafe {
            SimdVec(Reg {
                i: _mm_castpd_si128(_mm_cmplt_pd(self.0.d, rhs.0.d)),
            })
        }
    }

    #[inline(always)]
    fn cmp_le(self, rhs: Self) -> SimdVec<i64> {
        unsafe {
            SimdVec(Reg {
                i: _mm_castpd_si128(_mm_cmple_pd(self.0.d, rhs.0.d)),
            })
        }
    }

    #[inline(always)]
    fn cmp_gt(self, rhs: Self) -> SimdVec<i64> {
        unsafe {
            SimdVec(Reg {
                i: _mm_castpd_si128(_mm_cmpgt_pd(self.0.d, rhs.0.d)),
            })
        }
    }

    #[inline(always)]
    fn cmp_ge(self, rhs: Self) -> SimdVec<i64> {
        unsafe {
            SimdVec(Reg {
                i: _mm_castpd_si128(_mm_cmpge_pd(self.0.d, rhs.0.d)),
            })
        }
    }

    #[inline(always)]
    fn select(mask: SimdVec<i64>, if_true: Self, if_false: Self) -> Self {
        unsafe {
            let t = _mm_castpd_si128(if_true.0.d);
            let f = _mm_castpd_si128(if_false.0.d);
            let merged = _mm_or_si128(_mm_and_si128(mask.0.i, t), _mm_andnot_si128(mask.0.i, f));
            Self(Reg {
                d: _mm_castsi128_pd(merged),
            })
        }
    }

    #[inline(always)]
    fn to_bits(self) -> SimdVec<i64> {
        unsafe {
            SimdVec(Reg {
                i: _mm_castpd_si128(self.0.d),
            })
        }
    }

    #[inline(always)]
    fn from_bits(bits: SimdVec<i64>) -> Self {
        unsafe {
            Self(Reg {
                d: _mm_castsi128_pd(bits.0.i),
            })
        }
    }

    #[inline(always)]
    fn trunc_int(self) -> SimdVec<i64> {
        unsafe {
            // Truncate through i32, then sign-extend the two low dwords.
            let t = _mm_cvttpd_epi32(self.0.d);
            let sign = _mm_srai_epi32::<31>(t);
            SimdVec(Reg {
                i: _mm_unpacklo_epi32(t, sign),
            })
        }
    }

    #[inline(always)]
    fn int_to_float(bits: SimdVec<i64>) -> Self {
        unsafe {
            // Low dwords carry the value for the exponent-sized range we use.
            let lo = _mm_shuffle_epi32::<0b00_00_10_00>(bits.0.i);
            Self(Reg {
                d: _mm_cvtepi32_pd(lo),
            })
        }
    }
}

impl SimdInt for SimdVec<i32> {
    #[inline(always)]
    fn splat(v: i64) -> Self {
        unsafe {
            Self(Reg {
                i: _mm_set1_epi32(v as i32),
            })
        }
    }

    #[inline(always)]
    fn and(self, rhs: Self) -> Self {
        unsafe {
            Self(Reg {
                i: _mm_and_si128(self.0.i, rhs.0.i),
            })
        }
    }

    #[inline(always)]
    fn or(self, rhs: Self) -> Self {
        unsafe {
            Self(Reg {
                i: _mm_or_si128(self.0.i, rhs.0.i),
            })
        }
    }

    #[inline(always)]
    fn add(self, rhs: Self) -> Self {
        unsafe {
            Self(Reg {
                i: _mm_add_epi32(self.0.i, rhs.0.i),
            })
        }
    }

    #[inline(always)]
    fn sub(self, rhs: Self) -> Self {
        unsafe {
            Self(Reg {
                i: _mm_sub_epi32(self.0.i, rhs.0.i),
            })
        }
    }

    #[inline(always)]
    fn shl(self, count: u32) -> Self {
        unsafe {
            Self(Reg {
                i: _mm_sll_epi32(self.0.i, _mm_cvtsi32_si128(count as i32)),
            })
        }
    }

    #[inline(always)]
    fn shr(self, count: u32) -> Self {
        unsafe {
            Self(Reg {
                i: _mm_srl_epi32(self.0.i, _mm_cvtsi32_si128(count as i32)),
            })
        }
    }
}

impl SimdInt for SimdVec<i64> {
    #[inline(always)]
    fn splat(v: i64) -> Self {
        unsafe {
            Self(Reg {
                i: _mm_set1_epi64x(v),
            })
        }
    }

    #[inline(always)]
    fn and(self, rhs: Self) -> Self {
        unsafe {
            Self(Reg {
                i: _mm_and_si128(self.0.i, rhs.0.i),
            })
        }
    }

    #[inline(always)]
    fn or(self, rhs: Self) -> Self {
        unsafe {
            Self(Reg {
                i: _mm_or_si128(self.0.i, rhs.0.i),
            })
        }
    }

    #[inline(always)]
    fn add(self, rhs: Self) -> Self {
        unsafe {
            Self(Reg {
                i: _mm_add_epi64(self.0.i, rhs.0.i),
            })
        }
    }

    #[inline(always)]
    fn sub(self, rhs: Self) -> Self {
        unsafe {
            Self(Reg {
                i: _mm_sub_epi64(self.0.i, rhs.0.i),
            })
        }
    }

    #[inline(always)]
    fn shl(self, count: u32) -> Self {
        unsafe {
            Self(Reg {
                i: _mm_sll_epi64(self.0.i, _mm_cvtsi32_si128(count as i32)),
            })
        }
    }

    #[inline(always)]
    fn shr(self, count: u32) -> Self {
        unsafe {
            Self(Reg {
                i: _mm_srl_epi64(self.0.i, _mm_cvtsi32_si128(count as i32)),
            })
        }
    }
}
