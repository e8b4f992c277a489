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

/// Magnitude from which every `f32` is integral (2^23).
const ROUND_MAGIC: f32 = 8_388_608.0;

/// A SIMD vector of 4 32-bit floating point values
#[derive(Copy, Clone)]
#[repr(transparent)]
pub struct F32x4 {
    elements: __m128,
}

impl F32x4 {
    #[inline(always)]
    fn from_m128(elements: __m128) -> Self {
        Self { elements }
    }

    #[inline(always)]
    fn bits(self) -> __m128i {
        unsafe { _mm_castps_si128(self.elements) }
    }

    #[inline(always)]
    fn from_m128i(bits: __m128i) -> Self {
        Self::from_m128(unsafe { _mm_castsi128_ps(bits) })
    }

    #[inline(always)]
    fn sign_mask() -> __m128 {
        unsafe { _mm_set1_ps(-0.0) }
    }

    /// Replaces NaN lanes of `result` with the canonical quiet NaN, using
    /// `self` to decide which lanes were NaN on input.
    #[inline(always)]
    fn canonicalize_nan(self, result: Self) -> Self {
        unsafe {
            let nan = _mm_cmpunord_ps(self.elements, self.elements);
            result.select(Self::splat_bits(f32::QNAN_BITS), Self::from_m128(nan))
        }
    }
}

impl SimdVec for F32x4 {
    type Scalar = f32;

    #[inline(always)]
    fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self::from_m128(unsafe { _mm_setr_ps(x, y, z, w) })
    }

    #[inline(always)]
    fn splat(value: f32) -> Self {
        Self::from_m128(unsafe { _mm_set1_ps(value) })
    }

    #[inline(always)]
    fn splat_bits(bits: u32) -> Self {
        Self::from_m128i(unsafe { _mm_set1_epi32(bits as i32) })
    }

    #[inline(always)]
    fn from_array(lanes: [f32; LANE_COUNT]) -> Self {
        Self::from_m128(unsafe { _mm_loadu_ps(lanes.as_ptr()) })
    }

    #[inline(always)]
    fn to_array(self) -> [f32; LANE_COUNT] {
        let mut lanes = [0.0f32; LANE_COUNT];
        unsafe { _mm_storeu_ps(lanes.as_mut_ptr(), self.elements) };
        lanes
    }

    #[inline(always)]
    fn from_bits(bits: [u32; LANE_COUNT]) -> Self {
        Self::from_m128i(unsafe { _mm_loadu_si128(bits.as_ptr() as *const __m128i) })
    }

    #[inline(always)]
    fn to_bits(self) -> [u32; LANE_COUNT] {
        let mut bits = [0u32; LANE_COUNT];
        unsafe { _mm_storeu_si128(bits.as_mut_ptr() as *mut __m128i, self.bits()) };
        bits
    }

    #[inline(always)]
    unsafe fn load(ptr: *const f32, count: usize) -> Self {
        // Asserts that the pointer is not null and the count fits the vector.
        assert!(!ptr.is_null(), "Pointer must not be null");
        assert!(
            (1..=LANE_COUNT).contains(&count),
            "Count must be in 1..={LANE_COUNT}"
        );

        let elements = match count {
            4 => _mm_loadu_ps(ptr),
            3 => {
                let xy = _mm_unpacklo_ps(_mm_load_ss(ptr), _mm_load_ss(ptr.add(1)));
                _mm_movelh_ps(xy, _mm_load_ss(ptr.add(2)))
            }
            2 => _mm_unpacklo_ps(_mm_load_ss(ptr), _mm_load_ss(ptr.add(1))),
            1 => _mm_load_ss(ptr),
            _ => unreachable!("Count must be in 1..={}", LANE_COUNT),
        };

        Self { elements }
    }

    #[inline(always)]
    unsafe fn store(self, ptr: *mut f32, count: usize) {
        assert!(!ptr.is_null(), "Pointer must not be null");
        assert!(
            (1..=LANE_COUNT).contains(&count),
            "Count must be in 1..={LANE_COUNT}"
        );

        if count == LANE_COUNT {
            _mm_storeu_ps(ptr, self.elements);
            return;
        }

        _mm_store_ss(ptr, self.elements);
        if count > 1 {
            _mm_store_ss(ptr.add(1), self.splat_lane(1).elements);
        }
        if count > 2 {
            _mm_store_ss(ptr.add(2), self.splat_lane(2).elements);
        }
    }

    #[inline(always)]
    fn splat_lane(self, index: usize) -> Self {
        let e = self.elements;
        let elements = unsafe {
            match index {
                0 => _mm_shuffle_ps::<0x00>(e, e),
                1 => _mm_shuffle_ps::<0x55>(e, e),
                2 => _mm_shuffle_ps::<0xAA>(e, e),
                3 => _mm_shuffle_ps::<0xFF>(e, e),
                _ => panic!("Lane index must be < {LANE_COUNT}"),
            }
        };
        Self { elements }
    }

    #[inline(always)]
    fn min(self, other: Self) -> Self {
        Self::from_m128(unsafe { _mm_min_ps(self.elements, other.elements) })
    }

    #[inline(always)]
    fn max(self, other: Self) -> Self {
        Self::from_m128(unsafe { _mm_max_ps(self.elements, other.elements) })
    }

    #[inline(always)]
    fn sqrt(self) -> Self {
        Self::from_m128(unsafe { _mm_sqrt_ps(self.elements) })
    }

    #[inline(always)]
    fn and_not(self, mask: Self) -> Self {
        Self::from_m128(unsafe { _mm_andnot_ps(mask.elements, self.elements) })
    }

    #[inline(always)]
    fn cmp_eq(self, other: Self) -> Self {
        Self::from_m128(unsafe { _mm_cmpeq_ps(self.elements, other.elements) })
    }

    #[inline(always)]
    fn cmp_ne(self, other: Self) -> Self {
        Self::from_m128(unsafe { _mm_cmpneq_ps(self.elements, other.elements) })
    }

    #[inline(always)]
    fn cmp_lt(self, other: Self) -> Self {
        Self::from_m128(unsafe { _mm_cmplt_ps(self.elements, other.elements) })
    }

    #[inline(always)]
    fn cmp_le(self, other: Self) -> Self {
        Self::from_m128(unsafe { _mm_cmple_ps(self.elements, other.elements) })
    }

    #[inline(always)]
    fn cmp_gt(self, other: Self) -> Self {
        Self::from_m128(unsafe { _mm_cmpgt_ps(self.elements, other.elements) })
    }

    #[inline(always)]
    fn cmp_ge(self, other: Self) -> Self {
        Self::from_m128(unsafe { _mm_cmpge_ps(self.elements, other.elements) })
    }

    #[inline(always)]
    fn cmp_eq_bits(self, other: Self) -> Self {
        Self::from_m128i(unsafe { _mm_cmpeq_epi32(self.bits(), other.bits()) })
    }

    #[inline(always)]
    fn select(self, right: Self, control: Self) -> Self {
        unsafe {
            let left = _mm_andnot_ps(control.elements, self.elements);
            let right = _mm_and_ps(right.elements, control.elements);
            Self::from_m128(_mm_or_ps(left, right))
        }
    }

    #[inline(always)]
    fn move_mask(self) -> u32 {
        unsafe { _mm_movemask_ps(self.elements) as u32 }
    }

    #[inline(always)]
    fn int_add(self, other: Self) -> Self {
        Self::from_m128i(unsafe { _mm_add_epi32(self.bits(), other.bits()) })
    }

    #[inline(always)]
    fn int_sub(self, other: Self) -> Self {
        Self::from_m128i(unsafe { _mm_sub_epi32(self.bits(), other.bits()) })
    }

    #[inline(always)]
    fn shift_left(self, count: u32) -> Self {
        Self::from_m128i(unsafe { _mm_sll_epi32(self.bits(), _mm_cvtsi32_si128(count as i32)) })
    }

    #[inline(always)]
    fn shift_right(self, count: u32) -> Self {
        Self::from_m128i(unsafe { _mm_srl_epi32(self.bits(), _mm_cvtsi32_si128(count as i32)) })
    }

    #[inline(always)]
    fn int_from_float(self) -> Self {
        Self::from_m128i(unsafe { _mm_cvttps_epi32(self.elements) })
    }

    #[inline(always)]
    fn float_from_int(self) -> Self {
        Self::from_m128(unsafe { _mm_cvtepi32_ps(self.bits()) })
    }

    #[inline(always)]
    fn round(self) -> Self {
        let rounded = unsafe {
            let sign = _mm_and_ps(self.elements, Self::sign_mask());
            let abs = _mm_andnot_ps(Self::sign_mask(), self.elements);
            let magic = _mm_set1_ps(ROUND_MAGIC);

            // abs + 2^23 leaves no fraction bits, so the addition rounds half to even.
            let r = _mm_sub_ps(_mm_add_ps(abs, magic), magic);
            let r = _mm_or_ps(r, sign);

            let small = _mm_cmplt_ps(abs, magic);
            self.select(Self::from_m128(r), Self::from_m128(small))
        };
        self.canonicalize_nan(rounded)
    }

    #[inline(always)]
    fn truncate(self) -> Self {
        let truncated = unsafe {
            let sign = _mm_and_ps(self.elements, Self::sign_mask());
            let abs = _mm_andnot_ps(Self::sign_mask(), self.elements);
            let small = _mm_cmplt_ps(abs, _mm_set1_ps(ROUND_MAGIC));

            // cvttps is exact below 2^23; or-ing the sign back keeps -0.0 for (-1, 0).
            let t = _mm_cvtepi32_ps(_mm_cvttps_epi32(self.elements));
            let t = _mm_or_ps(t, sign);

            self.select(Self::from_m128(t), Self::from_m128(small))
        };
        self.canonicalize_nan(truncated)
    }

    #[inline(always)]
    fn floor(self) -> Self {
        let t = self.truncate();
        unsafe {
            let above = _mm_cmpgt_ps(t.elements, self.elements);
            let adjust = _mm_and_ps(above, _mm_set1_ps(1.0));
            Self::from_m128(_mm_sub_ps(t.elements, adjust))
        }
    }

    #[inline(always)]
    fn ceil(self) -> Self {
        let t = self.truncate();
        unsafe {
            // Subtracting -1.0 (not adding 1.0) keeps -0.0 intact when nothing is adjusted.
            let below = _mm_cmplt_ps(t.elements, self.elements);
            let adjust = _mm_and_ps(below, _mm_set1_ps(-1.0));
            Self::from_m128(_mm_sub_ps(t.elements, adjust))
        }
    }
}

impl Default for F32x4 {
    #[inline(always)]
    fn default() -> Self {
        Self::from_m128(unsafe { _mm_setzero_ps() })
    }
}

impl fmt::Debug for F32x4 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [x, y, z, w] = self.to_array();
        f.debug_tuple("F32x4")
            .field(&x)
            .field(&y)
            .field(&z)
            .field(&w)
            .finish()
    }
}

impl From<[f32; LANE_COUNT]> for F32x4 {
    #[inline(always)]
    fn from(lanes: [f32; LANE_COUNT]) -> Self {
        Self::from_array(lanes)
    }
}

impl From<F32x4> for [f32; LANE_COUNT] {
    #[inline(always)]
    fn from(v: F32x4) -> Self {
        v.to_array()
    }
}

/// Implementing the `Add` and `AddAssign` traits for F32x4
/// This allows for using the `+` operator and `+=` operator with F32x4 vectors.
impl Add for F32x4 {
    type Output = Self;

    #[inline(always)]
    fn add(self, rhs: Self) -> Self::Output {
        Self::from_m128(unsafe { _mm_add_ps(self.elements, rhs.elements) })
    }
}

impl AddAssign for F32x4 {
    #[inline(always)]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sub for F32x4 {
    type Output = Self;

    #[inline(always)]
    fn sub(self, rhs: Self) -> Self::Output {
        Self::from_m128(unsafe { _mm_sub_ps(self.elements, rhs.elements) })
    }
}

impl SubAssign for F32x4 {
    #[inline(always)]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl Mul for F32x4 {
    type Output = Self;

    #[inline(always)]
    fn mul(self, rhs: Self) -> Self::Output {
        Self::from_m128(unsafe { _mm_mul_ps(self.elements, rhs.elements) })
    }
}

impl MulAssign for F32x4 {
    #[inline(always)]
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl Div for F32x4 {
    type Output = Self;

    #[inline(always)]
    fn div(self, rhs: Self) -> Self::Output {
        Self::from_m128(unsafe { _mm_div_ps(self.elements, rhs.elements) })
    }
}

impl DivAssign for F32x4 {
    #[inline(always)]
    fn div_assign(&mut self, rhs: Self) {
        *self = *self / rhs;
    }
}

impl Rem for F32x4 {
    type Output = Self;

    #[inline(always)]
    fn rem(self, rhs: Self) -> Self::Output {
        crate::arith::modulo(self, rhs)
    }
}

impl RemAssign for F32x4 {
    #[inline(always)]
    fn rem_assign(&mut self, rhs: Self) {
        *self = *self % rhs;
    }
}

impl Neg for F32x4 {
    type Output = Self;

    #[inline(always)]
    fn neg(self) -> Self::Output {
        Self::from_m128(unsafe { _mm_xor_ps(self.elements, Self::sign_mask()) })
    }
}

impl BitAnd for F32x4 {
    type Output = Self;

    #[inline(always)]
    fn bitand(self, rhs: Self) -> Self::Output {
        Self::from_m128(unsafe { _mm_and_ps(self.elements, rhs.elements) })
    }
}

impl BitAndAssign for F32x4 {
    #[inline(always)]
    fn bitand_assign(&mut self, rhs: Self) {
        *self = *self & rhs;
    }
}

impl BitOr for F32x4 {
    type Output = Self;

    #[inline(always)]
    fn bitor(self, rhs: Self) -> Self::Output {
        Self::from_m128(unsafe { _mm_or_ps(self.elements, rhs.elements) })
    }
}

impl BitOrAssign for F32x4 {
    #[inline(always)]
    fn bitor_assign(&mut self, rhs: Self) {
        *self = *self | rhs;
    }
}

impl BitXor for F32x4 {
    type Output = Self;

    #[inline(always)]
    fn bitxor(self, rhs: Self) -> Self::Output {
        Self::from_m128(unsafe { _mm_xor_ps(self.elements, rhs.elements) })
    }
}

impl BitXorAssign for F32x4 {
    #[inline(always)]
    fn bitxor_assign(&mut self, rhs: Self) {
        *self = *self ^ rhs;
    }
}
