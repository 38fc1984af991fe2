//! Portable fallback backend (plain arrays, same lane counts as the SIMD
//! backends).

use super::{SimdFloat, SimdInt};
use core::marker::PhantomData;

/// Raw 128-bit register, viewable as packed singles, doubles, or integers.
#[derive(Copy, Clone)]
#[repr(C)]
pub union Reg<T> {
    /// Packed single-precision view.
    pub f: [f32; 4],
    /// Packed double-precision view.
    pub d: [f64; 2],
    /// Packed 32-bit integer view.
    pub i: [i32; 4],
    /// Packed 64-bit integer view.
    pub l: [i64; 2],
    _marker: PhantomData<T>,
}

/// Platform SIMD vector of `T`.
#[derive(Copy, Clone)]
#[repr(transparent)]
pub struct SimdVec<T: Copy>(pub(crate) Reg<T>);

macro_rules! impl_float_lanes {
    ($elem:ty, $ubits:ty, $lanes:expr, $field:ident, $int:ty, $ifield:ident,
     $fabs:path, $fsqrt:path, $ftrunc:path, $frint:path, $fmin:path, $fmax:path) => {
        impl SimdFloat for SimdVec<$elem> {
            type Elem = $elem;
            type Int = SimdVec<$int>;
            const LANES: usize = $lanes;

            #[inline(always)]
            fn splat(v: f64) -> Self {
                Self(Reg {
                    $field: [v as $elem; $lanes],
                })
            }

            #[inline(always)]
            unsafe fn load(ptr: *const $elem) -> Self {
                let mut out = [0.0 as $elem; $lanes];
                unsafe { core::ptr::copy_nonoverlapping(ptr, out.as_mut_ptr(), $lanes) };
                Self(Reg { $field: out })
            }

            #[inline(always)]
            unsafe fn store(self, ptr: *mut $elem) {
                let a = unsafe { self.0.$field };
                unsafe { core::ptr::copy_nonoverlapping(a.as_ptr(), ptr, $lanes) };
            }

            #[inline(always)]
            fn add(self, rhs: Self) -> Self {
                let (a, b) = unsafe { (self.0.$field, rhs.0.$field) };
                let mut out = a;
                for l in 0..$lanes {
                    out[l] = a[l] + b[l];
                }
                Self(Reg { $field: out })
            }

            #[inline(always)]
            fn sub(self, rhs: Self) -> Self {
                let (a, b) = unsafe { (self.0.$field, rhs.0.$field) };
                let mut out = a;
                for l in 0..$lanes {
                    out[l] = a[l] - b[l];
                }
                Self(Reg { $field: out })
            }

            #[inline(always)]
            fn mul(self, rhs: Self) -> Self {
                let (a, b) = unsafe { (self.0.$field, rhs.0.$field) };
                let mut out = a;
                for l in 0..$lanes {
                    out[l] = a[l] * b[l];
                }
                Self(Reg { $field: out })
            }

            #[inline(always)]
            fn div(self, rhs: Self) -> Self {
                let (a, b) = unsafe { (self.0.$field, rhs.0.$field) };
                let mut out = a;
                for l in 0..$lanes {
                    out[l] = a[l] / b[l];
                }
                Self(Reg { $field: out })
            }

            #[inline(always)]
            fn neg(self) -> Self {
                let a = unsafe { self.0.$field };
                let mut out = a;
                for l in 0..$lanes {
                    out[l] = -a[l];
                }
                Self(Reg { $field: out })
            }

            #[inline(always)]
            fn abs(self) -> Self {
                let a = unsafe { self.0.$field };
                let mut out = a;
                for l in 0..$lanes {
                    out[l] = $fabs(a[l]);
                }
                Self(Reg { $field: out })
            }

            #[inline(always)]
            fn sqrt(self) -> Self {
                let a = unsafe { self.0.$field };
                let mut out = a;
                for l in 0..$lanes {
                    out[l] = $fsqrt(a[l]);
                }
                Self(Reg { $field: out })
            }

            #[inline(always)]
            fn rsqrt(self) -> Self {
                let a = unsafe { self.0.$field };
                let mut out = a;
                for l in 0..$lanes {
                    out[l] = 1.0 / $fsqrt(a[l]);
                }
                Self(Reg { $field: out })
            }

            #[inline(always)]
            fn min(self, rhs: Self) -> Self {
                let (a, b) = unsafe { (self.0.$field, rhs.0.$field) };
                let mut out = a;
                for l in 0..$lanes {
                    out[l] = $fmin(a[l], b[l]);
                }
                Self(Reg { $field: out })
            }

            #[inline(always)]
            fn max(self, rhs: Self) -> Self {
                let (a, b) = unsafe { (self.0.$field, rhs.0.$field) };
                let mut out = a;
                for l in 0..$lanes {
                    out[l] = $fmax(a[l], b[l]);
                }
                Self(Reg { $field: out })
            }

            #[inline(always)]
            fn trunc(self) -> Self {
                let a = unsafe { self.0.$field };
                let mut out = a;
                for l in 0..$lanes {
                    out[l] = $ftrunc(a[l]);
                }
                Self(Reg { $field: out })
            }

            #[inline(always)]
            fn round(self) -> Self {
                let a = unsafe { self.0.$field };
                let mut out = a;
                for l in 0..$lanes {
                    out[l] = $frint(a[l]);
                }
                Self(Reg { $field: out })
            }

            #[inline(always)]
            fn cmp_lt(self, rhs: Self) -> SimdVec<$int> {
                let (a, b) = unsafe { (self.0.$field, rhs.0.$field) };
                let mut out = [0 as $int; $lanes];
                for l in 0..$lanes {
                    out[l] = if a[l] < b[l] { -1 } else { 0 };
                }
                SimdVec(Reg { $ifield: out })
            }

            #[inline(always)]
            fn cmp_le(self, rhs: Self) -> SimdVec<$int> {
                let (a, b) = unsafe { (self.0.$field, rhs.0.$field) };
                let mut out = [0 as $int; $lanes];
                for l in 0..$lanes {
                    out[l] = if a[l] <= b[l] { -1 } else { 0 };
                }
                SimdVec(Reg { $ifield: out })
            }

            #[inline(always)]
            fn cmp_gt(self, rhs: Self) -> SimdVec<$int> {
                let (a, b) = unsafe { (self.0.$field, rhs.0.$field) };
                let mut out = [0 as $int; $lanes];
                for l in 0..$lanes {
                    out[l] = if a[l] > b[l] { -1 } else { 0 };
                }
                SimdVec(Reg { $ifield: out })
            }

            #[inline(always)]
            fn cmp_ge(self, rhs: Self) -> SimdVec<$int> {
                let (a, b) = unsafe { (self.0.$field, rhs.0.$field) };
                let mut out = [0 as $int; $lanes];
                for l in 0..$lanes {
                    out[l] = if a[l] >= b[l] { -1 } else { 0 };
                }
                SimdVec(Reg { $ifield: out })
            }

            #[inline(always)]
            fn select(mask: SimdVec<$int>, if_true: Self, if_false: Self) -> Self {
                let m = unsafe { mask.0.$ifield };
                let (t, f) = unsafe { (if_true.0.$field, if_false.0.$field) };
                let mut out = t;
                for l in 0..$lanes {
                    out[l] = if m[l] != 0 { t[l] } else { f[l] };
                }
                Self(Reg { $field: out })
            }

            #[inline(always)]
            fn to_bits(self) -> SimdVec<$int> {
                let a = unsafe { self.0.$field };
                let mut out = [0 as $int; $lanes];
                for l in 0..$lanes {
                    out[l] = a[l].to_bits() as $int;
                }
                SimdVec(Reg { $ifield: out })
            }

            #[inline(always)]
            fn from_bits(bits: SimdVec<$int>) -> Self {
                let b = unsafe { bits.0.$ifield };
                let mut out = [0.0 as $elem; $lanes];
                for l in 0..$lanes {
                    out[l] = <$elem>::from_bits(b[l] as $ubits);
                }
                Self(Reg { $field: out })
            }

            #[inline(always)]
            fn trunc_int(self) -> SimdVec<$int> {
                let a = unsafe { self.0.$field };
                let mut out = [0 as $int; $lanes];
                for l in 0..$lanes {
                    out[l] = a[l] as $int;
                }
                SimdVec(Reg { $ifield: out })
            }

            #[inline(always)]
            fn int_to_float(bits: SimdVec<$int>) -> Self {
                let b = unsafe { bits.0.$ifield };
                let mut out = [0.0 as $elem; $lanes];
                for l in 0..$lanes {
                    out[l] = b[l] as $elem;
                }
                Self(Reg { $field: out })
            }
        }
    };
}

impl_float_lanes!(
    f32,
    u32,
    4,
    f,
    i32,
    i,
    libm::fabsf,
    libm::sqrtf,
    libm::truncf,
    libm::rintf,
    libm::fminf,
    libm::fmaxf
);
impl_float_lanes!(
    f64,
    u64,
    2,
    d,
    i64,
    l,
    libm::fabs,
    libm::sqrt,
    libm::trunc,
    libm::rint,
    libm::fmin,
    libm::fmax
);

macro_rules! impl_int_lanes {
    ($int:ty, $uint:ty, $lanes:expr, $ifield:ident) => {
        impl SimdInt for SimdVec<$int> {
            #[inline(always)]
            fn splat(v: i64) -> Self {
                Self(Reg {
                    $ifield: [v as $int; $lanes],
                })
            }

            #[inline(always)]
            fn and(self, rhs: Self) -> Self {
                let (a, b) = unsafe { (self.0.$ifield, rhs.0.$ifield) };
                let mut out = a;
                for l in 0..$lanes {
                    out[l] = a[l] & b[l];
                }
                Self(Reg { $ifield: out })
            }

            #[inline(always)]
            fn or(self, rhs: Self) -> Self {
                let (a, b) = unsafe { (self.0.$ifield, rhs.0.$ifield) };
                let mut out = a;
                for l in 0..$lanes {
                    out[l] = a[l] | b[l];
                }
                Self(Reg { $ifield: out })
            }

            #[inline(always)]
            fn add(self, rhs: Self) -> Self {
                let (a, b) = unsafe { (self.0.$ifield, rhs.0.$ifield) };
                let mut out = a;
                for l in 0..$lanes {
                    out[l] = a[l].wrapping_add(b[l]);
                }
                Self(Reg { $ifield: out })
            }

            #[inline(always)]
            fn sub(self, rhs: Self) -> Self {
                let (a, b) = unsafe { (self.0.$ifield, rhs.0.$ifield) };
                let mut out = a;
                for l in 0..$lanes {
                    out[l] = a[l].wrapping_sub(b[l]);
                }
                Self(Reg { $ifield: out })
            }

            #[inline(always)]
            fn shl(self, count: u32) -> Self {
                let a = unsafe { self.0.$ifield };
                let mut out = a;
                for l in 0..$lanes {
                    out[l] = a[l].wrapping_shl(count);
                }
                Self(Reg { $ifield: out })
            }

            #[inline(always)]
            fn shr(self, count: u32) -> Self {
                let a = unsafe { self.0.$ifield };
                let mut out = a;
                for l in 0..$lanes {
                    out[l] = ((a[l] as $uint).wrapping_shr(count)) as $int;
                }
                Self(Reg { $ifield: out })
            }
        }
    };
}

impl_int_lanes!(i32, u32, 4, i);
impl_int_lanes!(i64, u64, 2, l);
