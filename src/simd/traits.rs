use std::fmt::Debug;
use std::ops::{Add, BitAnd, BitOr, BitXor, Div, Mul, Neg, Sub};

use crate::simd::lane::LaneScalar;

/// Number of lanes in every vector shape of this crate.
pub const LANE_COUNT: usize = 4;

/// Shorthand for the bit-view type of a vector's lanes.
pub type LaneBits<V> = <<V as SimdVec>::Scalar as LaneScalar>::Bits;

/// Register-level primitive set a backend provides for one 4-lane vector shape.
///
/// Every public operation of the crate is written once on top of these
/// primitives. Each primitive is either exact IEEE-754 arithmetic or a pure
/// bit operation, so two backends implementing it produce bit-identical
/// lanes for the same inputs.
///
/// Lanes are numbered 0..3 and called x, y, z, w.
pub trait SimdVec:
    Copy
    + Debug
    + Default
    + Send
    + Sync
    + 'static
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
    + BitAnd<Output = Self>
    + BitOr<Output = Self>
    + BitXor<Output = Self>
{
    type Scalar: LaneScalar;

    fn new(x: Self::Scalar, y: Self::Scalar, z: Self::Scalar, w: Self::Scalar) -> Self;

    fn splat(value: Self::Scalar) -> Self;

    fn splat_bits(bits: LaneBits<Self>) -> Self;

    fn from_array(lanes: [Self::Scalar; LANE_COUNT]) -> Self;

    fn to_array(self) -> [Self::Scalar; LANE_COUNT];

    fn from_bits(bits: [LaneBits<Self>; LANE_COUNT]) -> Self;

    fn to_bits(self) -> [LaneBits<Self>; LANE_COUNT];

    /// Splats a constant from the `f64` constant table.
    #[inline(always)]
    fn constant(value: f64) -> Self {
        Self::splat(Self::Scalar::lit(value))
    }

    #[inline(always)]
    fn zero() -> Self {
        Self::constant(0.0)
    }

    /// Reads `count` contiguous scalars and zero-fills the remaining lanes.
    ///
    /// # Safety
    ///
    /// `ptr` must be valid for reads of `count` scalars. `count` must be in
    /// `1..=4`. A null pointer is a contract violation and panics.
    unsafe fn load(ptr: *const Self::Scalar, count: usize) -> Self;

    /// Writes the first `count` lanes.
    ///
    /// # Safety
    ///
    /// `ptr` must be valid for writes of `count` scalars. `count` must be in
    /// `1..=4`. A null pointer is a contract violation and panics.
    unsafe fn store(self, ptr: *mut Self::Scalar, count: usize);

    /// Extracts one lane. Panics if `index >= 4`.
    #[inline(always)]
    fn lane(self, index: usize) -> Self::Scalar {
        assert!(index < LANE_COUNT, "Lane index must be < {LANE_COUNT}");
        self.to_array()[index]
    }

    /// Returns a copy with one lane replaced. Panics if `index >= 4`.
    #[inline(always)]
    fn with_lane(self, index: usize, value: Self::Scalar) -> Self {
        assert!(index < LANE_COUNT, "Lane index must be < {LANE_COUNT}");
        let mut lanes = self.to_array();
        lanes[index] = value;
        Self::from_array(lanes)
    }

    /// Broadcasts one lane to all four. Panics if `index >= 4`.
    fn splat_lane(self, index: usize) -> Self;

    /// Reorders lanes; every index must already be known to be `< 4`.
    #[inline(always)]
    fn swizzle(self, indices: [usize; LANE_COUNT]) -> Self {
        let lanes = self.to_bits();
        Self::from_bits(indices.map(|i| lanes[i]))
    }

    /// Merges lanes of two vectors; indices `0..4` pick from `self`, `4..8`
    /// from `other`. Every index must already be known to be `< 8`.
    #[inline(always)]
    fn permute(self, other: Self, indices: [usize; LANE_COUNT]) -> Self {
        let a = self.to_bits();
        let b = other.to_bits();
        Self::from_bits(indices.map(|i| if i < LANE_COUNT { a[i] } else { b[i - LANE_COUNT] }))
    }

    /// `self < other ? self : other`, lane-wise (the second operand wins on NaN).
    fn min(self, other: Self) -> Self;

    /// `self > other ? self : other`, lane-wise (the second operand wins on NaN).
    fn max(self, other: Self) -> Self;

    fn sqrt(self) -> Self;

    /// `self & !mask` on the bit view.
    fn and_not(self, mask: Self) -> Self;

    fn cmp_eq(self, other: Self) -> Self;

    /// Unordered-or-not-equal: true for NaN lanes.
    fn cmp_ne(self, other: Self) -> Self;

    fn cmp_lt(self, other: Self) -> Self;

    fn cmp_le(self, other: Self) -> Self;

    fn cmp_gt(self, other: Self) -> Self;

    fn cmp_ge(self, other: Self) -> Self;

    /// Integer equality of the bit view.
    fn cmp_eq_bits(self, other: Self) -> Self;

    /// Lane-wise blend: `right` where `control` is all ones, `self` elsewhere.
    /// Mixed control bits blend bit by bit.
    fn select(self, right: Self, control: Self) -> Self;

    /// Packs the sign bit of each lane into bits 0..3.
    fn move_mask(self) -> u32;

    /// Wrapping integer addition on the bit view.
    fn int_add(self, other: Self) -> Self;

    /// Wrapping integer subtraction on the bit view.
    fn int_sub(self, other: Self) -> Self;

    /// Logical left shift of every lane's bit view.
    fn shift_left(self, count: u32) -> Self;

    /// Logical right shift of every lane's bit view.
    fn shift_right(self, count: u32) -> Self;

    /// Converts integral float lanes to two's-complement integers in the bit view.
    ///
    /// Exact for magnitudes below 2^31 (`f32`) or 2^51 (`f64`); other lanes are
    /// backend-defined.
    fn int_from_float(self) -> Self;

    /// Inverse of [`SimdVec::int_from_float`] over the same range.
    fn float_from_int(self) -> Self;

    /// Round half to even.
    fn round(self) -> Self;

    /// Round toward zero.
    fn truncate(self) -> Self;

    fn floor(self) -> Self;

    fn ceil(self) -> Self;
}
