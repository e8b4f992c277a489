#[cfg(target_arch = "x86")]
use std::arch::x86::*;

#[cfg(target_arch = "x86_64")]
use std::arch::x86_64::*;

use std::fmt;
use std::ops::{
    Add, AddAssign, BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Div,
    DivAssign, Mul, MulAssign, Neg, Rem, RemAssign, Sub, SubAssign,
};

use crate::simd::lane::LaneScalar;
use crate::simd::traits::{SimdVec, LANE_COUNT};

/// Magnitude from which every `f64` is integral (2^52).
const ROUND_MAGIC: f64 = 4_503_599_627_370_496.0;

/// 1.5 * 2^52: adding it to an integral value below 2^51 places the value,
/// in two's complement, in the low mantissa bits.
const CONVERT_MAGIC: f64 = 6_755_399_441_055_744.0;

/// A SIMD vector of 4 64-bit floating point values, held as two SSE2 halves.
#[derive(Copy, Clone)]
pub struct F64x4 {
    xy: __m128d,
    zw: __m128d,
}

/// Applies one `__m128d` operation to both halves.
macro_rules! halves {
    ($a:expr, |$h:ident| $body:expr) => {{
        let v: F64x4 = $a;
        let xy = {
            let $h = v.xy;
            unsafe { $body }
        };
        let zw = {
            let $h = v.zw;
            unsafe { $body }
        };
        F64x4 { xy, zw }
    }};
    ($a:expr, $b:expr, |$l:ident, $r:ident| $body:expr) => {{
        let (lhs, rhs): (F64x4, F64x4) = ($a, $b);
        let xy = {
            let ($l, $r) = (lhs.xy, rhs.xy);
            unsafe { $body }
        };
        let zw = {
            let ($l, $r) = (lhs.zw, rhs.zw);
            unsafe { $body }
        };
        F64x4 { xy, zw }
    }};
}

#[inline(always)]
unsafe fn sign_mask() -> __m128d {
    _mm_set1_pd(-0.0)
}

#[inline(always)]
unsafe fn canonicalize_nan(input: __m128d, result: __m128d) -> __m128d {
    let nan = _mm_cmpunord_pd(input, input);
    let qnan = _mm_castsi128_pd(_mm_set1_epi64x(f64::QNAN_BITS as i64));
    _mm_or_pd(_mm_andnot_pd(nan, result), _mm_and_pd(qnan, nan))
}

#[inline(always)]
unsafe fn round_half(h: __m128d) -> __m128d {
    let sign = _mm_and_pd(h, sign_mask());
    let abs = _mm_andnot_pd(sign_mask(), h);
    let magic = _mm_set1_pd(ROUND_MAGIC);

    let r = _mm_or_pd(_mm_sub_pd(_mm_add_pd(abs, magic), magic), sign);
    let small = _mm_cmplt_pd(abs, magic);
    let rounded = _mm_or_pd(_mm_andnot_pd(small, h), _mm_and_pd(r, small));
    canonicalize_nan(h, rounded)
}

#[inline(always)]
unsafe fn truncate_half(h: __m128d) -> __m128d {
    let sign = _mm_and_pd(h, sign_mask());
    let abs = _mm_andnot_pd(sign_mask(), h);
    let magic = _mm_set1_pd(ROUND_MAGIC);

    // Round the magnitude to nearest, then step back where that rounded up.
    let r = _mm_sub_pd(_mm_add_pd(abs, magic), magic);
    let overshoot = _mm_and_pd(_mm_cmpgt_pd(r, abs), _mm_set1_pd(1.0));
    let r = _mm_or_pd(_mm_sub_pd(r, overshoot), sign);

    let small = _mm_cmplt_pd(abs, magic);
    let truncated = _mm_or_pd(_mm_andnot_pd(small, h), _mm_and_pd(r, small));
    canonicalize_nan(h, truncated)
}

impl SimdVec for F64x4 {
    type Scalar = f64;

    #[inline(always)]
    fn new(x: f64, y: f64, z: f64, w: f64) -> Self {
        unsafe {
            Self {
                xy: _mm_setr_pd(x, y),
                zw: _mm_setr_pd(z, w),
            }
        }
    }

    #[inline(always)]
    fn splat(value: f64) -> Self {
        let h = unsafe { _mm_set1_pd(value) };
        Self { xy: h, zw: h }
    }

    #[inline(always)]
    fn splat_bits(bits: u64) -> Self {
        let h = unsafe { _mm_castsi128_pd(_mm_set1_epi64x(bits as i64)) };
        Self { xy: h, zw: h }
    }

    #[inline(always)]
    fn from_array(lanes: [f64; LANE_COUNT]) -> Self {
        unsafe {
            Self {
                xy: _mm_loadu_pd(lanes.as_ptr()),
                zw: _mm_loadu_pd(lanes.as_ptr().add(2)),
            }
        }
    }

    #[inline(always)]
    fn to_array(self) -> [f64; LANE_COUNT] {
        let mut lanes = [0.0f64; LANE_COUNT];
        unsafe {
            _mm_storeu_pd(lanes.as_mut_ptr(), self.xy);
            _mm_storeu_pd(lanes.as_mut_ptr().add(2), self.zw);
        }
        lanes
    }

    #[inline(always)]
    fn from_bits(bits: [u64; LANE_COUNT]) -> Self {
        unsafe {
            let ptr = bits.as_ptr() as *const __m128i;
            Self {
                xy: _mm_castsi128_pd(_mm_loadu_si128(ptr)),
                zw: _mm_castsi128_pd(_mm_loadu_si128(ptr.add(1))),
            }
        }
    }

    #[inline(always)]
    fn to_bits(self) -> [u64; LANE_COUNT] {
        let mut bits = [0u64; LANE_COUNT];
        unsafe {
            let ptr = bits.as_mut_ptr() as *mut __m128i;
            _mm_storeu_si128(ptr, _mm_castpd_si128(self.xy));
            _mm_storeu_si128(ptr.add(1), _mm_castpd_si128(self.zw));
        }
        bits
    }

    #[inline(always)]
    unsafe fn load(ptr: *const f64, count: usize) -> Self {
        assert!(!ptr.is_null(), "Pointer must not be null");
        assert!(
            (1..=LANE_COUNT).contains(&count),
            "Count must be in 1..={LANE_COUNT}"
        );

        let (xy, zw) = match count {
            4 => (_mm_loadu_pd(ptr), _mm_loadu_pd(ptr.add(2))),
            3 => (_mm_loadu_pd(ptr), _mm_load_sd(ptr.add(2))),
            2 => (_mm_loadu_pd(ptr), _mm_setzero_pd()),
            1 => (_mm_load_sd(ptr), _mm_setzero_pd()),
            _ => unreachable!("Count must be in 1..={}", LANE_COUNT),
        };

        Self { xy, zw }
    }

    #[inline(always)]
    unsafe fn store(self, ptr: *mut f64, count: usize) {
        assert!(!ptr.is_null(), "Pointer must not be null");
        assert!(
            (1..=LANE_COUNT).contains(&count),
            "Count must be in 1..={LANE_COUNT}"
        );

        match count {
            4 => {
                _mm_storeu_pd(ptr, self.xy);
                _mm_storeu_pd(ptr.add(2), self.zw);
            }
            3 => {
                _mm_storeu_pd(ptr, self.xy);
                _mm_store_sd(ptr.add(2), self.zw);
            }
            2 => _mm_storeu_pd(ptr, self.xy),
            1 => _mm_store_sd(ptr, self.xy),
            _ => unreachable!("Count must be in 1..={}", LANE_COUNT),
        }
    }

    #[inline(always)]
    fn splat_lane(self, index: usize) -> Self {
        let h = unsafe {
            match index {
                0 => _mm_unpacklo_pd(self.xy, self.xy),
                1 => _mm_unpackhi_pd(self.xy, self.xy),
                2 => _mm_unpacklo_pd(self.zw, self.zw),
                3 => _mm_unpackhi_pd(self.zw, self.zw),
                _ => panic!("Lane index must be < {LANE_COUNT}"),
            }
        };
        Self { xy: h, zw: h }
    }

    #[inline(always)]
    fn min(self, other: Self) -> Self {
        halves!(self, other, |a, b| _mm_min_pd(a, b))
    }

    #[inline(always)]
    fn max(self, other: Self) -> Self {
        halves!(self, other, |a, b| _mm_max_pd(a, b))
    }

    #[inline(always)]
    fn sqrt(self) -> Self {
        halves!(self, |h| _mm_sqrt_pd(h))
    }

    #[inline(always)]
    fn and_not(self, mask: Self) -> Self {
        halves!(self, mask, |a, m| _mm_andnot_pd(m, a))
    }

    #[inline(always)]
    fn cmp_eq(self, other: Self) -> Self {
        halves!(self, other, |a, b| _mm_cmpeq_pd(a, b))
    }

    #[inline(always)]
    fn cmp_ne(self, other: Self) -> Self {
        halves!(self, other, |a, b| _mm_cmpneq_pd(a, b))
    }

    #[inline(always)]
    fn cmp_lt(self, other: Self) -> Self {
        halves!(self, other, |a, b| _mm_cmplt_pd(a, b))
    }

    #[inline(always)]
    fn cmp_le(self, other: Self) -> Self {
        halves!(self, other, |a, b| _mm_cmple_pd(a, b))
    }

    #[inline(always)]
    fn cmp_gt(self, other: Self) -> Self {
        halves!(self, other, |a, b| _mm_cmpgt_pd(a, b))
    }

    #[inline(always)]
    fn cmp_ge(self, other: Self) -> Self {
        halves!(self, other, |a, b| _mm_cmpge_pd(a, b))
    }

    #[inline(always)]
    fn cmp_eq_bits(self, other: Self) -> Self {
        // SSE2 has no 64-bit compare: both 32-bit halves of a lane must match.
        halves!(self, other, |a, b| {
            let eq = _mm_cmpeq_epi32(_mm_castpd_si128(a), _mm_castpd_si128(b));
            let swapped = _mm_shuffle_epi32::<0b10_11_00_01>(eq);
            _mm_castsi128_pd(_mm_and_si128(eq, swapped))
        })
    }

    #[inline(always)]
    fn select(self, right: Self, control: Self) -> Self {
        let pick = |l: __m128d, r: __m128d, c: __m128d| unsafe {
            _mm_or_pd(_mm_andnot_pd(c, l), _mm_and_pd(r, c))
        };
        Self {
            xy: pick(self.xy, right.xy, control.xy),
            zw: pick(self.zw, right.zw, control.zw),
        }
    }

    #[inline(always)]
    fn move_mask(self) -> u32 {
        unsafe { (_mm_movemask_pd(self.xy) | (_mm_movemask_pd(self.zw) << 2)) as u32 }
    }

    #[inline(always)]
    fn int_add(self, other: Self) -> Self {
        halves!(self, other, |a, b| _mm_castsi128_pd(_mm_add_epi64(
            _mm_castpd_si128(a),
            _mm_castpd_si128(b)
        )))
    }

    #[inline(always)]
    fn int_sub(self, other: Self) -> Self {
        halves!(self, other, |a, b| _mm_castsi128_pd(_mm_sub_epi64(
            _mm_castpd_si128(a),
            _mm_castpd_si128(b)
        )))
    }

    #[inline(always)]
    fn shift_left(self, count: u32) -> Self {
        let count = unsafe { _mm_cvtsi32_si128(count as i32) };
        halves!(self, |h| _mm_castsi128_pd(_mm_sll_epi64(_mm_castpd_si128(h), count)))
    }

    #[inline(always)]
    fn shift_right(self, count: u32) -> Self {
        let count = unsafe { _mm_cvtsi32_si128(count as i32) };
        halves!(self, |h| _mm_castsi128_pd(_mm_srl_epi64(_mm_castpd_si128(h), count)))
    }

    #[inline(always)]
    fn int_from_float(self) -> Self {
        let magic = unsafe { _mm_set1_pd(CONVERT_MAGIC) };
        halves!(self, |h| {
            let shifted = _mm_castpd_si128(_mm_add_pd(h, magic));
            _mm_castsi128_pd(_mm_sub_epi64(shifted, _mm_castpd_si128(magic)))
        })
    }

    #[inline(always)]
    fn float_from_int(self) -> Self {
        let magic = unsafe { _mm_set1_pd(CONVERT_MAGIC) };
        halves!(self, |h| {
            let shifted = _mm_add_epi64(_mm_castpd_si128(h), _mm_castpd_si128(magic));
            _mm_sub_pd(_mm_castsi128_pd(shifted), magic)
        })
    }

    #[inline(always)]
    fn round(self) -> Self {
        halves!(self, |h| round_half(h))
    }

    #[inline(always)]
    fn truncate(self) -> Self {
        halves!(self, |h| truncate_half(h))
    }

    #[inline(always)]
    fn floor(self) -> Self {
        let t = self.truncate();
        halves!(t, self, |t, x| {
            let adjust = _mm_and_pd(_mm_cmpgt_pd(t, x), _mm_set1_pd(1.0));
            _mm_sub_pd(t, adjust)
        })
    }

    #[inline(always)]
    fn ceil(self) -> Self {
        let t = self.truncate();
        halves!(t, self, |t, x| {
            let adjust = _mm_and_pd(_mm_cmplt_pd(t, x), _mm_set1_pd(-1.0));
            _mm_sub_pd(t, adjust)
        })
    }
}

impl Default for F64x4 {
    #[inline(always)]
    fn default() -> Self {
        let h = unsafe { _mm_setzero_pd() };
        Self { xy: h, zw: h }
    }
}

impl fmt::Debug for F64x4 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [x, y, z, w] = self.to_array();
        f.debug_tuple("F64x4")
            .field(&x)
            .field(&y)
            .field(&z)
            .field(&w)
            .finish()
    }
}

impl From<[f64; LANE_COUNT]> for F64x4 {
    #[inline(always)]
    fn from(lanes: [f64; LANE_COUNT]) -> Self {
        Self::from_array(lanes)
    }
}

impl From<F64x4> for [f64; LANE_COUNT] {
    #[inline(always)]
    fn from(v: F64x4) -> Self {
        v.to_array()
    }
}

impl Add for F64x4 {
    type Output = Self;

    #[inline(always)]
    fn add(self, rhs: Self) -> Self::Output {
        halves!(self, rhs, |a, b| _mm_add_pd(a, b))
    }
}

impl AddAssign for F64x4 {
    #[inline(always)]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sub for F64x4 {
    type Output = Self;

    #[inline(always)]
    fn sub(self, rhs: Self) -> Self::Output {
        halves!(self, rhs, |a, b| _mm_sub_pd(a, b))
    }
}

impl SubAssign for F64x4 {
    #[inline(always)]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl Mul for F64x4 {
    type Output = Self;

    #[inline(always)]
    fn mul(self, rhs: Self) -> Self::Output {
        halves!(self, rhs, |a, b| _mm_mul_pd(a, b))
    }
}

impl MulAssign for F64x4 {
    #[inline(always)]
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl Div for F64x4 {
    type Output = Self;

    #[inline(always)]
    fn div(self, rhs: Self) -> Self::Output {
        halves!(self, rhs, |a, b| _mm_div_pd(a, b))
    }
}

impl DivAssign for F64x4 {
    #[inline(always)]
    fn div_assign(&mut self, rhs: Self) {
        *self = *self / rhs;
    }
}

impl Rem for F64x4 {
    type Output = Self;

    #[inline(always)]
    fn rem(self, rhs: Self) -> Self::Output {
        crate::arith::modulo(self, rhs)
    }
}

impl RemAssign for F64x4 {
    #[inline(always)]
    fn rem_assign(&mut self, rhs: Self) {
        *self = *self % rhs;
    }
}

impl Neg for F64x4 {
    type Output = Self;

    #[inline(always)]
    fn neg(self) -> Self::Output {
        halves!(self, |h| _mm_xor_pd(h, sign_mask()))
    }
}

impl BitAnd for F64x4 {
    type Output = Self;

    #[inline(always)]
    fn bitand(self, rhs: Self) -> Self::Output {
        halves!(self, rhs, |a, b| _mm_and_pd(a, b))
    }
}

impl BitAndAssign for F64x4 {
    #[inline(always)]
    fn bitand_assign(&mut self, rhs: Self) {
        *self = *self & rhs;
    }
}

impl BitOr for F64x4 {
    type Output = Self;

    #[inline(always)]
    fn bitor(self, rhs: Self) -> Self::Output {
        halves!(self, rhs, |a, b| _mm_or_pd(a, b))
    }
}

impl BitOrAssign for F64x4 {
    #[inline(always)]
    fn bitor_assign(&mut self, rhs: Self) {
        *self = *self | rhs;
    }
}

impl BitXor for F64x4 {
    type Output = Self;

    #[inline(always)]
    fn bitxor(self, rhs: Self) -> Self::Output {
        halves!(self, rhs, |a, b| _mm_xor_pd(a, b))
    }
}

impl BitXorAssign for F64x4 {
    #[inline(always)]
    fn bitxor_assign(&mut self, rhs: Self) {
        *self = *self ^ rhs;
    }
}
