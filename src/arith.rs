//! Elementwise arithmetic, bitwise operations, and lane shuffles.
//!
//! Every function is lane-for-lane IEEE-754 arithmetic in the lane type, with
//! the evaluation order fixed here so both backends round identically.
//! `multiply_add` and `negative_multiply_subtract` round twice: the product
//! is rounded before the addition, and no fused multiply-add is emitted.

use crate::consts::ONE;
use crate::error::{self, enforce, Result};
use crate::simd::lane::LaneScalar;
use crate::simd::traits::{LaneBits, SimdVec, LANE_COUNT};

#[inline(always)]
pub fn add<V: SimdVec>(a: V, b: V) -> V {
    a + b
}

#[inline(always)]
pub fn subtract<V: SimdVec>(a: V, b: V) -> V {
    a - b
}

#[inline(always)]
pub fn multiply<V: SimdVec>(a: V, b: V) -> V {
    a * b
}

#[inline(always)]
pub fn divide<V: SimdVec>(a: V, b: V) -> V {
    a / b
}

/// `a - b * truncate(a / b)`.
///
/// This is the truncated modulo (sign follows `a` for finite quotients), not
/// the IEEE remainder. A zero divisor yields NaN.
#[inline(always)]
pub fn modulo<V: SimdVec>(a: V, b: V) -> V {
    let quotient = (a / b).truncate();
    a - b * quotient
}

/// `ml * mr + add`, rounded after the multiply and after the add.
#[inline(always)]
pub fn multiply_add<V: SimdVec>(ml: V, mr: V, add: V) -> V {
    ml * mr + add
}

/// `sl - ml * mr`, rounded after the multiply and after the subtract.
#[inline(always)]
pub fn negative_multiply_subtract<V: SimdVec>(ml: V, mr: V, sl: V) -> V {
    sl - ml * mr
}

/// Flips the sign bit of every lane (NaN payloads are kept).
#[inline(always)]
pub fn negate<V: SimdVec>(v: V) -> V {
    -v
}

/// `1 / v`; zero lanes give a signed infinity.
#[inline(always)]
pub fn reciprocal<V: SimdVec>(v: V) -> V {
    V::constant(ONE) / v
}

/// Multiplies every lane by the scalar `s`.
#[inline(always)]
pub fn scale<V: SimdVec>(v: V, s: V::Scalar) -> V {
    v * V::splat(s)
}

#[inline(always)]
pub fn and_int<V: SimdVec>(a: V, b: V) -> V {
    a & b
}

/// `a & !b` on the integer view.
#[inline(always)]
pub fn and_not_int<V: SimdVec>(a: V, b: V) -> V {
    a.and_not(b)
}

#[inline(always)]
pub fn or_int<V: SimdVec>(a: V, b: V) -> V {
    a | b
}

/// `!(a | b)` on the integer view.
#[inline(always)]
pub fn nor_int<V: SimdVec>(a: V, b: V) -> V {
    (a | b) ^ V::splat_bits(<V::Scalar as LaneScalar>::ALL_ONES)
}

#[inline(always)]
pub fn xor_int<V: SimdVec>(a: V, b: V) -> V {
    a ^ b
}

#[inline(always)]
pub fn min<V: SimdVec>(a: V, b: V) -> V {
    a.min(b)
}

#[inline(always)]
pub fn max<V: SimdVec>(a: V, b: V) -> V {
    a.max(b)
}

#[inline(always)]
pub fn sqrt<V: SimdVec>(v: V) -> V {
    v.sqrt()
}

/// `1 / sqrt(v)`, with both steps correctly rounded.
#[inline(always)]
pub fn reciprocal_sqrt<V: SimdVec>(v: V) -> V {
    V::constant(ONE) / v.sqrt()
}

fn check_indices(indices: [usize; LANE_COUNT], bound: usize) -> Result<()> {
    match indices.iter().find(|&&i| i >= bound) {
        Some(&index) => Err(error::index_out_of_range(index, bound)),
        None => Ok(()),
    }
}

/// Reorders the lanes of `v`: lane k of the result is lane `indices[k]` of `v`.
pub fn try_swizzle<V: SimdVec>(v: V, indices: [usize; LANE_COUNT]) -> Result<V> {
    check_indices(indices, LANE_COUNT)?;
    Ok(v.swizzle(indices))
}

/// Panicking form of [`try_swizzle`]; every index must be below 4.
#[inline]
#[track_caller]
pub fn swizzle<V: SimdVec>(v: V, indices: [usize; LANE_COUNT]) -> V {
    enforce(try_swizzle(v, indices))
}

/// Merges two vectors: indices 0..3 pick lanes of `a`, 4..7 lanes of `b`.
pub fn try_permute<V: SimdVec>(a: V, b: V, indices: [usize; LANE_COUNT]) -> Result<V> {
    check_indices(indices, 2 * LANE_COUNT)?;
    Ok(a.permute(b, indices))
}

/// Panicking form of [`try_permute`]; every index must be below 8.
#[inline]
#[track_caller]
pub fn permute<V: SimdVec>(a: V, b: V, indices: [usize; LANE_COUNT]) -> V {
    enforce(try_permute(a, b, indices))
}

/// Per lane, `right` where `control` is all ones and `left` where it is zero.
///
/// This is a bitwise blend: a control lane with mixed bits mixes the operands
/// bit by bit.
#[inline(always)]
pub fn select<V: SimdVec>(left: V, right: V, control: V) -> V {
    left.select(right, control)
}

/// Builds a [`select`] control from per-lane choices: `0` keeps `left`, `1`
/// takes `right`.
pub fn try_select_control<V: SimdVec>(choices: [usize; LANE_COUNT]) -> Result<V> {
    check_indices(choices, 2)?;
    let all_ones = <V::Scalar as LaneScalar>::ALL_ONES;
    let zero: LaneBits<V> = Default::default();
    Ok(V::from_bits(
        choices.map(|c| if c == 1 { all_ones } else { zero }),
    ))
}

/// Panicking form of [`try_select_control`].
#[inline]
#[track_caller]
pub fn select_control<V: SimdVec>(choices: [usize; LANE_COUNT]) -> V {
    enforce(try_select_control(choices))
}
