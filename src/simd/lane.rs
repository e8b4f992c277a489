//! Scalar lane types and their IEEE-754 layout.
//!
//! Both lane-vector shapes store four scalars that can be viewed either as
//! floating-point values or as unsigned integers of the same width. The
//! [`LaneScalar`] trait ties a float type to its bit type and records the
//! layout constants the bit-manipulating kernels (exponent injection in
//! `exp2`, exponent extraction in `log2`, sign masking in `abs`) need.

use std::fmt::Debug;

use num::{Float, PrimInt, Unsigned};

/// A floating-point type usable as a vector lane (`f32` or `f64`).
pub trait LaneScalar: Float + Debug + Default + Send + Sync + 'static {
    /// Unsigned integer with the same width, used for the bit view.
    type Bits: PrimInt + Unsigned + Debug + Default + Send + Sync + 'static;

    /// Width of one lane in bits.
    const BITS: u32;
    /// Number of explicit mantissa (fraction) bits.
    const MANTISSA_BITS: u32;
    /// Exponent bias of the IEEE encoding.
    const EXPONENT_BIAS: i32;
    /// Unbiased exponent of the smallest normal value.
    const MIN_EXPONENT: i32;
    /// Unbiased exponent of the largest finite value.
    const MAX_EXPONENT: i32;
    /// Exponent of the smallest positive subnormal value.
    const MIN_SUBNORMAL_EXPONENT: i32;

    const SIGN_MASK: Self::Bits;
    const ABS_MASK: Self::Bits;
    /// Exponent field with every bit set, which is also the bit pattern of +∞.
    const INFINITY_BITS: Self::Bits;
    const MANTISSA_MASK: Self::Bits;
    /// Canonical positive quiet NaN.
    const QNAN_BITS: Self::Bits;
    /// Canonical negative quiet NaN, returned by `log*` for negative input.
    const NEG_QNAN_BITS: Self::Bits;
    const ONE_BITS: Self::Bits;
    const ALL_ONES: Self::Bits;

    /// Magnitude at and above which every value is already integral.
    const INTEGRAL_THRESHOLD: Self;

    fn to_lane_bits(self) -> Self::Bits;
    fn from_lane_bits(bits: Self::Bits) -> Self;

    /// Converts an `f64` literal from the constant table to the lane type.
    fn lit(value: f64) -> Self;

    /// Two's-complement encoding of a small signed integer in the bit view.
    fn int_bits(value: i32) -> Self::Bits;

    /// Canonical quiet NaN as a value.
    #[inline(always)]
    fn qnan() -> Self {
        Self::from_lane_bits(Self::QNAN_BITS)
    }
}

impl LaneScalar for f32 {
    type Bits = u32;

    const BITS: u32 = 32;
    const MANTISSA_BITS: u32 = 23;
    const EXPONENT_BIAS: i32 = 127;
    const MIN_EXPONENT: i32 = -126;
    const MAX_EXPONENT: i32 = 127;
    const MIN_SUBNORMAL_EXPONENT: i32 = -149;

    const SIGN_MASK: u32 = 0x8000_0000;
    const ABS_MASK: u32 = 0x7FFF_FFFF;
    const INFINITY_BITS: u32 = 0x7F80_0000;
    const MANTISSA_MASK: u32 = 0x007F_FFFF;
    const QNAN_BITS: u32 = 0x7FC0_0000;
    const NEG_QNAN_BITS: u32 = 0xFFC0_0000;
    const ONE_BITS: u32 = 0x3F80_0000;
    const ALL_ONES: u32 = u32::MAX;

    const INTEGRAL_THRESHOLD: f32 = 8_388_608.0; // 2^23

    #[inline(always)]
    fn to_lane_bits(self) -> u32 {
        self.to_bits()
    }

    #[inline(always)]
    fn from_lane_bits(bits: u32) -> f32 {
        f32::from_bits(bits)
    }

    #[inline(always)]
    fn lit(value: f64) -> f32 {
        value as f32
    }

    #[inline(always)]
    fn int_bits(value: i32) -> u32 {
        value as u32
    }
}

impl LaneScalar for f64 {
    type Bits = u64;

    const BITS: u32 = 64;
    const MANTISSA_BITS: u32 = 52;
    const EXPONENT_BIAS: i32 = 1023;
    const MIN_EXPONENT: i32 = -1022;
    const MAX_EXPONENT: i32 = 1023;
    const MIN_SUBNORMAL_EXPONENT: i32 = -1074;

    const SIGN_MASK: u64 = 0x8000_0000_0000_0000;
    const ABS_MASK: u64 = 0x7FFF_FFFF_FFFF_FFFF;
    const INFINITY_BITS: u64 = 0x7FF0_0000_0000_0000;
    const MANTISSA_MASK: u64 = 0x000F_FFFF_FFFF_FFFF;
    const QNAN_BITS: u64 = 0x7FF8_0000_0000_0000;
    const NEG_QNAN_BITS: u64 = 0xFFF8_0000_0000_0000;
    const ONE_BITS: u64 = 0x3FF0_0000_0000_0000;
    const ALL_ONES: u64 = u64::MAX;

    const INTEGRAL_THRESHOLD: f64 = 4_503_599_627_370_496.0; // 2^52

    #[inline(always)]
    fn to_lane_bits(self) -> u64 {
        self.to_bits()
    }

    #[inline(always)]
    fn from_lane_bits(bits: u64) -> f64 {
        f64::from_bits(bits)
    }

    #[inline(always)]
    fn lit(value: f64) -> f64 {
        value
    }

    #[inline(always)]
    fn int_bits(value: i32) -> u64 {
        value as i64 as u64
    }
}
