//! Construction, lane access, and memory transfer for lane vectors.
//!
//! These entry points work for both shapes:
//!
//! ```
//! use quadlane::{vector, F32x4, F64x4};
//!
//! let v: F32x4 = vector::set(1.0, 2.0, 3.0, 4.0);
//! assert_eq!(vector::get_z(vector::set_z(v, 9.0)), 9.0);
//!
//! let data = [0.5f64, 1.5];
//! let w: F64x4 = vector::load2(&data);
//! assert_eq!(vector::get_w(w), 0.0);
//! ```

use crate::error::{self, enforce, Result};
use crate::simd::lane::LaneScalar;
use crate::simd::traits::{LaneBits, SimdVec, LANE_COUNT};

/// Builds a vector from explicit lanes.
#[inline(always)]
pub fn set<V: SimdVec>(x: V::Scalar, y: V::Scalar, z: V::Scalar, w: V::Scalar) -> V {
    V::new(x, y, z, w)
}

/// Broadcasts one scalar to every lane.
#[inline(always)]
pub fn splat<V: SimdVec>(value: V::Scalar) -> V {
    V::splat(value)
}

#[inline(always)]
pub fn set_x<V: SimdVec>(v: V, x: V::Scalar) -> V {
    v.with_lane(0, x)
}

#[inline(always)]
pub fn set_y<V: SimdVec>(v: V, y: V::Scalar) -> V {
    v.with_lane(1, y)
}

#[inline(always)]
pub fn set_z<V: SimdVec>(v: V, z: V::Scalar) -> V {
    v.with_lane(2, z)
}

#[inline(always)]
pub fn set_w<V: SimdVec>(v: V, w: V::Scalar) -> V {
    v.with_lane(3, w)
}

#[inline(always)]
pub fn get_x<V: SimdVec>(v: V) -> V::Scalar {
    v.lane(0)
}

#[inline(always)]
pub fn get_y<V: SimdVec>(v: V) -> V::Scalar {
    v.lane(1)
}

#[inline(always)]
pub fn get_z<V: SimdVec>(v: V) -> V::Scalar {
    v.lane(2)
}

#[inline(always)]
pub fn get_w<V: SimdVec>(v: V) -> V::Scalar {
    v.lane(3)
}

fn check_count(count: usize) -> Result<()> {
    if (1..=LANE_COUNT).contains(&count) {
        Ok(())
    } else {
        Err(error::index_out_of_range(count, LANE_COUNT + 1))
    }
}

/// Reads the first `count` scalars of `src` and zero-fills the other lanes.
///
/// Fails if `count` is not in `1..=4` or `src` is shorter than `count`.
pub fn try_load<V: SimdVec>(src: &[V::Scalar], count: usize) -> Result<V> {
    check_count(count)?;
    if src.len() < count {
        return Err(error::buffer_too_small(count, src.len()));
    }
    // SAFETY: `src` holds at least `count` initialized scalars.
    Ok(unsafe { V::load(src.as_ptr(), count) })
}

/// Writes the first `count` lanes of `v` into `dst`, leaving the rest of
/// `dst` untouched.
pub fn try_store<V: SimdVec>(v: V, dst: &mut [V::Scalar], count: usize) -> Result<()> {
    check_count(count)?;
    if dst.len() < count {
        return Err(error::buffer_too_small(count, dst.len()));
    }
    // SAFETY: `dst` has room for at least `count` scalars.
    unsafe { v.store(dst.as_mut_ptr(), count) };
    Ok(())
}

/// Loads lane x; y, z and w are zero. Panics if `src` is empty.
#[inline]
#[track_caller]
pub fn load1<V: SimdVec>(src: &[V::Scalar]) -> V {
    enforce(try_load(src, 1))
}

#[inline]
#[track_caller]
pub fn load2<V: SimdVec>(src: &[V::Scalar]) -> V {
    enforce(try_load(src, 2))
}

#[inline]
#[track_caller]
pub fn load3<V: SimdVec>(src: &[V::Scalar]) -> V {
    enforce(try_load(src, 3))
}

#[inline]
#[track_caller]
pub fn load4<V: SimdVec>(src: &[V::Scalar]) -> V {
    enforce(try_load(src, 4))
}

/// Stores lane x. Panics if `dst` is empty.
#[inline]
#[track_caller]
pub fn store1<V: SimdVec>(v: V, dst: &mut [V::Scalar]) {
    enforce(try_store(v, dst, 1))
}

#[inline]
#[track_caller]
pub fn store2<V: SimdVec>(v: V, dst: &mut [V::Scalar]) {
    enforce(try_store(v, dst, 2))
}

#[inline]
#[track_caller]
pub fn store3<V: SimdVec>(v: V, dst: &mut [V::Scalar]) {
    enforce(try_store(v, dst, 3))
}

#[inline]
#[track_caller]
pub fn store4<V: SimdVec>(v: V, dst: &mut [V::Scalar]) {
    enforce(try_store(v, dst, 4))
}

#[inline(always)]
pub fn zero<V: SimdVec>() -> V {
    V::zero()
}

#[inline(always)]
pub fn splat_one<V: SimdVec>() -> V {
    V::constant(crate::consts::ONE)
}

#[inline(always)]
pub fn splat_infinity<V: SimdVec>() -> V {
    V::splat_bits(<V::Scalar as LaneScalar>::INFINITY_BITS)
}

/// Canonical quiet NaN in every lane.
#[inline(always)]
pub fn splat_qnan<V: SimdVec>() -> V {
    V::splat_bits(<V::Scalar as LaneScalar>::QNAN_BITS)
}

/// Machine epsilon of the lane type in every lane.
#[inline(always)]
pub fn splat_epsilon<V: SimdVec>() -> V {
    V::splat(<V::Scalar as num::Float>::epsilon())
}

/// Only the sign bit set in every lane (`-0.0`).
#[inline(always)]
pub fn splat_sign_mask<V: SimdVec>() -> V {
    V::splat_bits(<V::Scalar as LaneScalar>::SIGN_MASK)
}

#[inline(always)]
pub fn splat_x<V: SimdVec>(v: V) -> V {
    v.splat_lane(0)
}

#[inline(always)]
pub fn splat_y<V: SimdVec>(v: V) -> V {
    v.splat_lane(1)
}

#[inline(always)]
pub fn splat_z<V: SimdVec>(v: V) -> V {
    v.splat_lane(2)
}

#[inline(always)]
pub fn splat_w<V: SimdVec>(v: V) -> V {
    v.splat_lane(3)
}

/// The unsigned-integer view of the same lanes.
#[inline(always)]
pub fn to_bits<V: SimdVec>(v: V) -> [LaneBits<V>; LANE_COUNT] {
    v.to_bits()
}

#[inline(always)]
pub fn from_bits<V: SimdVec>(bits: [LaneBits<V>; LANE_COUNT]) -> V {
    V::from_bits(bits)
}
