//! Portable scalar backend.
//!
//! Each vector is four lanes stored through their bit view and processed one
//! lane at a time with plain Rust arithmetic. This backend compiles on every
//! target. When no accelerated backend is available it is the one bound by
//! `build.rs`, and in every build it is the reference the active backend is
//! checked against.
//!
//! Lane semantics mirror the SSE2 instructions the accelerated backend uses
//! (`min`/`max` return the second operand on NaN, shifts by the lane width or
//! more yield zero, negation flips the sign bit), so the two stay bit-identical.

macro_rules! scalar_vector {
    ($name:ident, $scalar:ty, $bits:ty, $int:ty) => {
        use std::fmt;
        use std::ops::{
            Add, AddAssign, BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Div,
            DivAssign, Mul, MulAssign, Neg, Rem, RemAssign, Sub, SubAssign,
        };

        use crate::simd::lane::LaneScalar;
        use crate::simd::traits::{SimdVec, LANE_COUNT};

        #[doc = concat!("Four `", stringify!($scalar), "` lanes, stored as their `", stringify!($bits), "` bit patterns.")]
        #[derive(Copy, Clone, Default)]
        #[repr(C, align(16))]
        pub struct $name {
            lanes: [$bits; LANE_COUNT],
        }

        impl $name {
            #[inline(always)]
            fn floats(self) -> [$scalar; LANE_COUNT] {
                self.lanes.map(<$scalar>::from_bits)
            }

            #[inline(always)]
            fn from_floats(lanes: [$scalar; LANE_COUNT]) -> Self {
                Self {
                    lanes: lanes.map(<$scalar>::to_bits),
                }
            }

            #[inline(always)]
            fn map(self, f: impl Fn($scalar) -> $scalar) -> Self {
                Self::from_floats(self.floats().map(f))
            }

            #[inline(always)]
            fn zip(self, other: Self, f: impl Fn($scalar, $scalar) -> $scalar) -> Self {
                let a = self.floats();
                let b = other.floats();
                Self::from_floats(std::array::from_fn(|i| f(a[i], b[i])))
            }

            #[inline(always)]
            fn map_bits(self, f: impl Fn($bits) -> $bits) -> Self {
                Self {
                    lanes: self.lanes.map(f),
                }
            }

            #[inline(always)]
            fn zip_bits(self, other: Self, f: impl Fn($bits, $bits) -> $bits) -> Self {
                Self {
                    lanes: std::array::from_fn(|i| f(self.lanes[i], other.lanes[i])),
                }
            }

            #[inline(always)]
            fn compare(self, other: Self, f: impl Fn($scalar, $scalar) -> bool) -> Self {
                let a = self.floats();
                let b = other.floats();
                Self {
                    lanes: std::array::from_fn(|i| if f(a[i], b[i]) { <$bits>::MAX } else { 0 }),
                }
            }

            // Rounding primitives share one NaN rule: the canonical quiet NaN.
            #[inline(always)]
            fn round_with(self, f: impl Fn($scalar) -> $scalar) -> Self {
                self.map(|x| if x.is_nan() { <$scalar>::qnan() } else { f(x) })
            }
        }

        impl SimdVec for $name {
            type Scalar = $scalar;

            #[inline(always)]
            fn new(x: $scalar, y: $scalar, z: $scalar, w: $scalar) -> Self {
                Self::from_floats([x, y, z, w])
            }

            #[inline(always)]
            fn splat(value: $scalar) -> Self {
                Self::from_floats([value; LANE_COUNT])
            }

            #[inline(always)]
            fn splat_bits(bits: $bits) -> Self {
                Self {
                    lanes: [bits; LANE_COUNT],
                }
            }

            #[inline(always)]
            fn from_array(lanes: [$scalar; LANE_COUNT]) -> Self {
                Self::from_floats(lanes)
            }

            #[inline(always)]
            fn to_array(self) -> [$scalar; LANE_COUNT] {
                self.floats()
            }

            #[inline(always)]
            fn from_bits(bits: [$bits; LANE_COUNT]) -> Self {
                Self { lanes: bits }
            }

            #[inline(always)]
            fn to_bits(self) -> [$bits; LANE_COUNT] {
                self.lanes
            }

            #[inline(always)]
            unsafe fn load(ptr: *const $scalar, count: usize) -> Self {
                assert!(!ptr.is_null(), "Pointer must not be null");
                assert!(
                    (1..=LANE_COUNT).contains(&count),
                    "Count must be in 1..={LANE_COUNT}"
                );

                let mut lanes = [0; LANE_COUNT];
                for (i, lane) in lanes.iter_mut().enumerate().take(count) {
                    *lane = ptr.add(i).read().to_bits();
                }

                Self { lanes }
            }

            #[inline(always)]
            unsafe fn store(self, ptr: *mut $scalar, count: usize) {
                assert!(!ptr.is_null(), "Pointer must not be null");
                assert!(
                    (1..=LANE_COUNT).contains(&count),
                    "Count must be in 1..={LANE_COUNT}"
                );

                for (i, lane) in self.lanes.iter().enumerate().take(count) {
                    ptr.add(i).write(<$scalar>::from_bits(*lane));
                }
            }

            #[inline(always)]
            fn lane(self, index: usize) -> $scalar {
                assert!(index < LANE_COUNT, "Lane index must be < {LANE_COUNT}");
                <$scalar>::from_bits(self.lanes[index])
            }

            #[inline(always)]
            fn with_lane(self, index: usize, value: $scalar) -> Self {
                assert!(index < LANE_COUNT, "Lane index must be < {LANE_COUNT}");
                let mut lanes = self.lanes;
                lanes[index] = value.to_bits();
                Self { lanes }
            }

            #[inline(always)]
            fn splat_lane(self, index: usize) -> Self {
                assert!(index < LANE_COUNT, "Lane index must be < {LANE_COUNT}");
                Self::splat_bits(self.lanes[index])
            }

            #[inline(always)]
            fn min(self, other: Self) -> Self {
                self.zip(other, |a, b| if a < b { a } else { b })
            }

            #[inline(always)]
            fn max(self, other: Self) -> Self {
                self.zip(other, |a, b| if a > b { a } else { b })
            }

            #[inline(always)]
            fn sqrt(self) -> Self {
                self.map(<$scalar>::sqrt)
            }

            #[inline(always)]
            fn and_not(self, mask: Self) -> Self {
                self.zip_bits(mask, |a, m| a & !m)
            }

            #[inline(always)]
            fn cmp_eq(self, other: Self) -> Self {
                self.compare(other, |a, b| a == b)
            }

            #[inline(always)]
            fn cmp_ne(self, other: Self) -> Self {
                self.compare(other, |a, b| a != b)
            }

            #[inline(always)]
            fn cmp_lt(self, other: Self) -> Self {
                self.compare(other, |a, b| a < b)
            }

            #[inline(always)]
            fn cmp_le(self, other: Self) -> Self {
                self.compare(other, |a, b| a <= b)
            }

            #[inline(always)]
            fn cmp_gt(self, other: Self) -> Self {
                self.compare(other, |a, b| a > b)
            }

            #[inline(always)]
            fn cmp_ge(self, other: Self) -> Self {
                self.compare(other, |a, b| a >= b)
            }

            #[inline(always)]
            fn cmp_eq_bits(self, other: Self) -> Self {
                self.zip_bits(other, |a, b| if a == b { <$bits>::MAX } else { 0 })
            }

            #[inline(always)]
            fn select(self, right: Self, control: Self) -> Self {
                Self {
                    lanes: std::array::from_fn(|i| {
                        (self.lanes[i] & !control.lanes[i]) | (right.lanes[i] & control.lanes[i])
                    }),
                }
            }

            #[inline(always)]
            fn move_mask(self) -> u32 {
                self.lanes
                    .iter()
                    .enumerate()
                    .map(|(i, lane)| ((lane >> (<$bits>::BITS - 1)) as u32) << i)
                    .sum()
            }

            #[inline(always)]
            fn int_add(self, other: Self) -> Self {
                self.zip_bits(other, <$bits>::wrapping_add)
            }

            #[inline(always)]
            fn int_sub(self, other: Self) -> Self {
                self.zip_bits(other, <$bits>::wrapping_sub)
            }

            #[inline(always)]
            fn shift_left(self, count: u32) -> Self {
                self.map_bits(|b| b.checked_shl(count).unwrap_or(0))
            }

            #[inline(always)]
            fn shift_right(self, count: u32) -> Self {
                self.map_bits(|b| b.checked_shr(count).unwrap_or(0))
            }

            #[inline(always)]
            fn int_from_float(self) -> Self {
                Self {
                    lanes: self.floats().map(|x| (x as $int) as $bits),
                }
            }

            #[inline(always)]
            fn float_from_int(self) -> Self {
                Self::from_floats(self.lanes.map(|b| (b as $int) as $scalar))
            }

            #[inline(always)]
            fn round(self) -> Self {
                self.round_with(<$scalar>::round_ties_even)
            }

            #[inline(always)]
            fn truncate(self) -> Self {
                self.round_with(<$scalar>::trunc)
            }

            #[inline(always)]
            fn floor(self) -> Self {
                self.round_with(<$scalar>::floor)
            }

            #[inline(always)]
            fn ceil(self) -> Self {
                self.round_with(<$scalar>::ceil)
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                let [x, y, z, w] = self.floats();
                f.debug_tuple(stringify!($name))
                    .field(&x)
                    .field(&y)
                    .field(&z)
                    .field(&w)
                    .finish()
            }
        }

        impl From<[$scalar; LANE_COUNT]> for $name {
            #[inline(always)]
            fn from(lanes: [$scalar; LANE_COUNT]) -> Self {
                Self::from_floats(lanes)
            }
        }

        impl From<$name> for [$scalar; LANE_COUNT] {
            #[inline(always)]
            fn from(v: $name) -> Self {
                v.floats()
            }
        }

        impl Add for $name {
            type Output = Self;

            #[inline(always)]
            fn add(self, rhs: Self) -> Self::Output {
                self.zip(rhs, |a, b| a + b)
            }
        }

        impl Sub for $name {
            type Output = Self;

            #[inline(always)]
            fn sub(self, rhs: Self) -> Self::Output {
                self.zip(rhs, |a, b| a - b)
            }
        }

        impl Mul for $name {
            type Output = Self;

            #[inline(always)]
            fn mul(self, rhs: Self) -> Self::Output {
                self.zip(rhs, |a, b| a * b)
            }
        }

        impl Div for $name {
            type Output = Self;

            #[inline(always)]
            fn div(self, rhs: Self) -> Self::Output {
                self.zip(rhs, |a, b| a / b)
            }
        }

        impl Rem for $name {
            type Output = Self;

            /// `self - rhs * truncate(self / rhs)`, not IEEE remainder.
            #[inline(always)]
            fn rem(self, rhs: Self) -> Self::Output {
                crate::arith::modulo(self, rhs)
            }
        }

        impl Neg for $name {
            type Output = Self;

            #[inline(always)]
            fn neg(self) -> Self::Output {
                self.map_bits(|b| b ^ <$scalar as LaneScalar>::SIGN_MASK)
            }
        }

        impl BitAnd for $name {
            type Output = Self;

            #[inline(always)]
            fn bitand(self, rhs: Self) -> Self::Output {
                self.zip_bits(rhs, |a, b| a & b)
            }
        }

        impl BitOr for $name {
            type Output = Self;

            #[inline(always)]
            fn bitor(self, rhs: Self) -> Self::Output {
                self.zip_bits(rhs, |a, b| a | b)
            }
        }

        impl BitXor for $name {
            type Output = Self;

            #[inline(always)]
            fn bitxor(self, rhs: Self) -> Self::Output {
                self.zip_bits(rhs, |a, b| a ^ b)
            }
        }

        impl AddAssign for $name {
            #[inline(always)]
            fn add_assign(&mut self, rhs: Self) {
                *self = *self + rhs;
            }
        }

        impl SubAssign for $name {
            #[inline(always)]
            fn sub_assign(&mut self, rhs: Self) {
                *self = *self - rhs;
            }
        }

        impl MulAssign for $name {
            #[inline(always)]
            fn mul_assign(&mut self, rhs: Self) {
                *self = *self * rhs;
            }
        }

        impl DivAssign for $name {
            #[inline(always)]
            fn div_assign(&mut self, rhs: Self) {
                *self = *self / rhs;
            }
        }

        impl RemAssign for $name {
            #[inline(always)]
            fn rem_assign(&mut self, rhs: Self) {
                *self = *self % rhs;
            }
        }

        impl BitAndAssign for $name {
            #[inline(always)]
            fn bitand_assign(&mut self, rhs: Self) {
                *self = *self & rhs;
            }
        }

        impl BitOrAssign for $name {
            #[inline(always)]
            fn bitor_assign(&mut self, rhs: Self) {
                *self = *self | rhs;
            }
        }

        impl BitXorAssign for $name {
            #[inline(always)]
            fn bitxor_assign(&mut self, rhs: Self) {
                *self = *self ^ rhs;
            }
        }
    };
}

pub mod f32x4;
pub mod f64x4;

pub use f32x4::F32x4;
pub use f64x4::F64x4;
