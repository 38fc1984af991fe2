//! NEON backend for aarch64 (4 `f32` lanes, 2 `f64` lanes).

use super::{SimdFloat, SimdInt};
use core::arch::aarch64::*;
use core::marker::PhantomData;

/// Raw 128-bit register, viewable as packed singles, doubles, or integers.
#[derive(Copy, Clone)]
#[repr(C)]
pub union Reg<T> {
    /// Packed single-precision view.
    pub f: float32x4_t,
    /// Packed double-precision view.
    pub d: float64x2_t,
    /// Packed 32-bit integer view.
    pub i: int32x4_t,
    /// Packed 64-bit integer view.
    pub l: int64x2_t,
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
                f: vdupq_n_f32(v as f32),
            })
        }
    }

    #[inline(always)]
    unsafe fn load(ptr: *const f32) -> Self {
        unsafe { Self(Reg { f: vld1q_f32(ptr) }) }
    }

    #[inline(always)]
    unsafe fn store(self, ptr: *mut f32) {
        unsafe { vst1q_f32(ptr, self.0.f) }
    }

    #[inline(always)]
    fn add(self, rhs: Self) -> Self {
        unsafe {
            Self(Reg {
                f: vaddq_f32(self.0.f, rhs.0.f),
            })
        }
    }

    #[inline(always)]
    fn sub(self, rhs: Self) -> Self {
        unsafe {
            Self(Reg {
                f: vsubq_f32(self.0.f, rhs.0.f),
            })
        }
    }

    #[inline(always)]
    fn mul(self, rhs: Self) -> Self {
        unsafe {
            Self(Reg {
                f: vmulq_f32(self.0.f, rhs.0.f),
            })
        }
    }

    #[inline(always)]
    fn div(self, rhs: Self) -> Self {
        unsafe {
            Self(Reg {
                f: vdivq_f32(self.0.f, rhs.0.f),
            })
        }
    }

    #[inline(always)]
    fn neg(self) -> Self {
        unsafe {
            Self(Reg {
                f: vnegq_f32(self.0.f),
            })
        }
    }

    #[inline(always)]
    fn abs(self) -> Self {
        unsafe {
            Self(Reg {
                f: vabsq_f32(self.0.f),
            })
        }
    }

    #[inline(always)]
    fn sqrt(self) -> Self {
        unsafe {
            Self(Reg {
                f: vsqrtq_f32(self.0.f),
            })
        }
    }

    #[inline(always)]
    fn rsqrt(self) -> Self {
        unsafe {
            // Hardware estimate, one vrsqrts step, then one Newton-Raphson
            // step in the same form as the x86 backend.
            let x = self.0.f;
            let mut r = vrsqrteq_f32(x);
            r = vmulq_f32(r, vrsqrtsq_f32(vmulq_f32(x, r), r));
            let xrr = vmulq_f32(vmulq_f32(x, r), r);
            let t = vaddq_f32(xrr, vdupq_n_f32(-3.0));
            let rh = vmulq_f32(r, vdupq_n_f32(-0.5));
            Self(Reg {
                f: vmulq_f32(rh, t),
            })
        }
    }

    #[inline(always)]
    fn min(self, rhs: Self) -> Self {
        unsafe {
            Self(Reg {
                f: vminq_f32(self.0.f, rhs.0.f),
            })
        }
    }

    #[inline(always)]
    fn max(self, rhs: Self) -> Self {
        unsafe {
            Self(Reg {
                f: vmaxq_f32(self.0.f, rhs.0.f),
            })
        }
    }

    #[inline(always)]
    fn trunc(self) -> Self {
        unsafe {
            Self(Reg {
                f: vcvtq_f32_s32(vcvtq_s32_f32(self.0.f)),
            })
        }
    }

    #[inline(always)]
    fn round(self) -> Self {
        unsafe {
            Self(Reg {
                f: vrndnq_f32(self.0.f),
            })
        }
    }

    #[inline(always)]
    fn cmp_lt(self, rhs: Self) -> SimdVec<i32> {
        unsafe {
            SimdVec(Reg {
                i: vreinterpretq_s32_u32(vcltq_f32(self.0.f, rhs.0.f)),
            })
        }
    }

    #[inline(always)]
    fn cmp_le(self, rhs: Self) -> SimdVec<i32> {
        unsafe {
            SimdVec(Reg {
                i: vreinterpretq_s32_u32(vcleq_f32(self.0.f, rhs.0.f)),
            })
        }
    }

    #[inline(always)]
    fn cmp_gt(self, rhs: Self) -> SimdVec<i32> {
        unsafe {
            SimdVec(Reg {
                i: vreinterpretq_s32_u32(vcgtq_f32(self.0.f, rhs.0.f)),
            })
        }
    }

    #[inline(always)]
    fn cmp_ge(self, rhs: Self) -> SimdVec<i32> {
        unsafe {
            SimdVec(Reg {
                i: vreinterpretq_s32_u32(vcgeq_f32(self.0.f, rhs.0.f)),
            })
        }
    }

    #[inline(always)]
    fn select(mask: SimdVec<i32>, if_true: Self, if_false: Self) -> Self {
        unsafe {
            Self(Reg {
                f: vbslq_f32(vreinterpretq_u32_s32(mask.0.i), if_true.0.f, if_false.0.f),
            })
        }
    }

    #[inline(always)]
    fn to_bits(self) -> SimdVec<i32> {
        unsafe {
            SimdVec(Reg {
                i: vreinterpretq_s32_f32(self.0.f),
            })
        }
    }

    #[inline(always)]
    fn from_bits(bits: SimdVec<i32>) -> Self {
        unsafe {
            Self(Reg {
                f: vreinterpretq_f32_s32(bits.0.i),
            })
        }
    }

    #[inline(always)]
    fn trunc_int(self) -> SimdVec<i32> {
        unsafe {
            SimdVec(Reg {
                i: vcvtq_s32_f32(self.0.f),
            })
        }
    }

    #[inline(always)]
    fn int_to_float(bits: SimdVec<i32>) -> Self {
        unsafe {
            Self(Reg {
                f: vcvtq_f32_s32(bits.0.i),
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
        unsafe { Self(Reg { d: vdupq_n_f64(v) }) }
    }

    #[inline(always)]
    unsafe fn load(ptr: *const f64) -> Self {
        unsafe { Self(Reg { d: vld1q_f64(ptr) }) }
    }

    #[inline(always)]
    unsafe fn store(self, ptr: *mut f64) {
        unsafe { vst1q_f64(ptr, self.0.d) }
    }

    #[inline(always)]
    fn add(self, rhs: Self) -> Self {
        unsafe {
            Self(Reg {
                d: vaddq_f64(self.0.d, rhs.0.d),
            })
        }
    }

    #[inline(always)]
    fn sub(self, rhs: Self) -> Self {
        unsafe {
            Self(Reg {
                d: vsubq_f64(self.0.d, rhs.0.d),
            })
        }
    }

    #[inline(always)]
    fn mul(self, rhs: Self) -> Self {
        unsafe {
            Self(Reg {
                d: vmulq_f64(self.0.d, rhs.0.d),
            })
        }
    }

    #[inline(always)]
    fn div(self, rhs: Self) -> Self {
        unsafe {
            Self(Reg {
                d: vdivq_f64(self.0.d, rhs.0.d),
            })
        }
    }

    #[inline(always)]
    fn neg(self) -> Self {
        unsafe {
            Self(Reg {
                d: vnegq_f64(self.0.d),
            })
        }
    }

    #[inline(always)]
    fn abs(self) -> Self {
        unsafe {
            Self(Reg {
                d: vabsq_f64(self.0.d),
            })
        }
    }

    #[inline(always)]
    fn sqrt(self) -> Self {
        unsafe {
            Self(Reg {
                d: vsqrtq_f64(self.0.d),
            })
        }
    }

    #[inline(always)]
    fn rsqrt(self) -> Self {
        unsafe {
            Self(Reg {
                d: vdivq_f64(vdupq_n_f64(1.0), vsqrtq_f64(self.0.d)),
            })
        }
    }

    #[inline(always)]
    fn min(self, rhs: Self) -> Self {
        unsafe {
            Self(Reg {
                d: vminq_f64(self.0.d, rhs.0.d),
            })
        }
    }

    #[inline(always)]
    fn max(self, rhs: Self) -> Self {
        unsafe {
            Self(Reg {
                d: vmaxq_f64(self.0.d, rhs.0.d),
            })
        }
    }

    #[inline(always)]
    fn trunc(self) -> Self {
        unsafe {
            Self(Reg {
                d: vcvtq_f64_s64(vcvtq_s64_f64(self.0.d)),
            })
        }
    }

    #[inline(always)]
    fn round(self) -> Self {
        unsafe {
            Self(Reg {
                d: vrndnq_f64(self.0.d),
            })
        }
    }

    #[inline(always)]
    fn cmp_lt(self, rhs: Self) -> SimdVec<i64> {
        unsafe {
            SimdVec(Reg {
                l: vreinterpretq_s64_u64(vcltq_f64(self.0.d, rhs.0.d)),
            })
        }
    }

    #[inline(always)]
    fn cmp_le(self, rhs: Self) -> SimdVec<i64> {
        unsafe {
            SimdVec(Reg {
                l: vreinterpretq_s64_u64(vcleq_f64(self.0.d, rhs.0.d)),
            })
        }
    }

    #[inline(always)]
    fn cmp_gt(self, rhs: Self) -> SimdVec<i64> {
        unsafe {
            SimdVec(Reg {
                l: vreinterpretq_s64_u64(vcgtq_f64(self.0.d, rhs.0.d)),
            })
        }
    }

    #[inline(always)]
    fn cmp_ge(self, rhs: Self) -> SimdVec<i64> {
        unsafe {
            SimdVec(Reg {
                l: vreinterpretq_s64_u64(vcgeq_f64(self.0.d, rhs.0.d)),
            })
        }
    }

    #[inline(always)]
    fn select(mask: SimdVec<i64>, if_true: Self, if_false: Self) -> Self {
        unsafe {
            Self(Reg {
                d: vbslq_f64(vreinterpretq_u64_s64(mask.0.l), if_true.0.d, if_false.0.d),
            })
        }
    }

    #[inline(always)]
    fn to_bits(self) -> SimdVec<i64> {
        unsafe {
            SimdVec(Reg {
                l: vreinterpretq_s64_f64(self.0.d),
            })
        }
    }

    #[inline(always)]
    fn from_bits(bits: SimdVec<i64>) -> Self {
        unsafe {
            Self(Reg {
                d: vreinterpretq_f64_s64(bits.0.l),
            })
        }
    }

    #[inline(always)]
    fn trunc_int(self) -> SimdVec<i64> {
        unsafe {
            SimdVec(Reg {
                l: vcvtq_s64_f64(self.0.d),
            })
        }
    }

    #[inline(always)]
    fn int_to_float(bits: SimdVec<i64>) -> Self {
        unsafe {
            Self(Reg {
                d: vcvtq_f64_s64(bits.0.l),
            })
        }
    }
}

impl SimdInt for SimdVec<i32> {
    #[inline(always)]
    fn splat(v: i64) -> Self {
        unsafe {
            Self(Reg {
                i: vdupq_n_s32(v as i32),
            })
        }
    }

    #[inline(always)]
    fn and(self, rhs: Self) -> Self {
        unsafe {
            Self(Reg {
                i: vandq_s32(self.0.i, rhs.0.i),
            })
        }
    }

    #[inline(always)]
    fn or(self, rhs: Self) -> Self {
        unsafe {
            Self(Reg {
                i: vorrq_s32(self.0.i, rhs.0.i),
            })
        }
    }

    #[inline(always)]
    fn add(self, rhs: Self) -> Self {
        unsafe {
            Self(Reg {
                i: vaddq_s32(self.0.i, rhs.0.i),
            })
        }
    }

    #[inline(always)]
    fn sub(self, rhs: Self) -> Self {
        unsafe {
            Self(Reg {
                i: vsubq_s32(self.0.i, rhs.0.i),
            })
        }
    }

    #[inline(always)]
    fn shl(self, count: u32) -> Self {
        unsafe {
            Self(Reg {
                i: vshlq_s32(self.0.i, vdupq_n_s32(count as i32)),
            })
        }
    }

    #[inline(always)]
    fn shr(self, count: u32) -> Self {
        unsafe {
            let u = vreinterpretq_u32_s32(self.0.i);
            Self(Reg {
                i: vreinterpretq_s32_u32(vshlq_u32(u, vdupq_n_s32(-(count as i32)))),
            })
        }
    }
}

impl SimdInt for SimdVec<i64> {
    #[inline(always)]
    fn splat(v: i64) -> Self {
        unsafe { Self(Reg { l: vdupq_n_s64(v) }) }
    }

    #[inline(always)]
    fn and(self, rhs: Self) -> Self {
        unsafe {
            Self(Reg {
                l: vandq_s64(self.0.l, rhs.0.l),
            })
        }
    }

    #[inline(always)]
    fn or(self, rhs: Self) -> Self {
        unsafe {
            Self(Reg {
                l: vorrq_s64(self.0.l, rhs.0.l),
            })
        }
    }

    #[inline(always)]
    fn add(self, rhs: Self) -> Self {
        unsafe {
            Self(Reg {
                l: vaddq_s64(self.0.l, rhs.0.l),
            })
        }
    }

    #[inline(always)]
    fn sub(self, rhs: Self) -> Self {
        unsafe {
            Self(Reg {
                l: vsubq_s64(self.0.l, rhs.0.l),
            })
        }
    }

    #[inline(always)]
    fn shl(self, count: u32) -> Self {
        unsafe {
            Self(Reg {
                l: vshlq_s64(self.0.l, vdupq_n_s64(count as i64)),
            })
        }
    }

    #[inline(always)]
    fn shr(self, count: u32) -> Self {
        unsafe {
            let u = vreinterpretq_u64_s64(self.0.l);
            Self(Reg {
                l: vreinterpretq_s64_u64(vshlq_u64(u, vdupq_n_s64(-(count as i64)))),
            })
        }
    }
}
