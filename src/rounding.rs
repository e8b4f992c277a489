//! Rounding, clamping, and classification.

use crate::compare::mask_any;
use crate::consts::ONE;
use crate::error::{self, enforce, Result};
use crate::simd::lane::LaneScalar;
use crate::simd::traits::{SimdVec, LANE_COUNT};

/// Round half to even.
///
/// NaN lanes become the canonical quiet NaN. Magnitudes at or above 2^23
/// (`f32`) or 2^52 (`f64`) are already integral and pass through.
#[inline(always)]
pub fn round<V: SimdVec>(v: V) -> V {
    v.round()
}

/// Round toward zero, keeping the sign of zero (`truncate(-0.5) == -0.0`).
#[inline(always)]
pub fn truncate<V: SimdVec>(v: V) -> V {
    v.truncate()
}

#[inline(always)]
pub fn floor<V: SimdVec>(v: V) -> V {
    v.floor()
}

#[inline(always)]
pub fn ceiling<V: SimdVec>(v: V) -> V {
    v.ceil()
}

/// Clamps every lane to `[min, max]`.
///
/// Fails with [`KernelError::InvertedRange`](crate::KernelError::InvertedRange)
/// for the first lane where `min <= max` does not hold (including NaN bounds).
/// A NaN lane of `v` stays NaN.
pub fn try_clamp<V: SimdVec>(v: V, min: V, max: V) -> Result<V> {
    let ordered = min.cmp_le(max).move_mask();
    if let Some(lane) = (0..LANE_COUNT).find(|lane| ordered & (1 << lane) == 0) {
        return Err(error::inverted_range(lane));
    }
    Ok(min.max(max.min(v)))
}

/// Panicking form of [`try_clamp`].
#[inline]
#[track_caller]
pub fn clamp<V: SimdVec>(v: V, min: V, max: V) -> V {
    enforce(try_clamp(v, min, max))
}

/// Clamps every lane to `[0, 1]`.
#[inline(always)]
pub fn saturate<V: SimdVec>(v: V) -> V {
    V::zero().max(V::constant(ONE).min(v))
}

/// Clears the sign bit, so `abs(-0.0) == 0.0` and NaN payloads survive.
#[inline(always)]
pub fn abs<V: SimdVec>(v: V) -> V {
    v & V::splat_bits(<V::Scalar as LaneScalar>::ABS_MASK)
}

/// Lanes whose magnitude bits equal the infinity pattern exactly.
#[inline(always)]
pub fn is_infinite_each<V: SimdVec>(v: V) -> V {
    abs(v).cmp_eq_bits(V::splat_bits(<V::Scalar as LaneScalar>::INFINITY_BITS))
}

/// `true` if lane x or y is ±∞.
#[inline(always)]
pub fn is_infinite2<V: SimdVec>(v: V) -> bool {
    mask_any(is_infinite_each(v), 2)
}

#[inline(always)]
pub fn is_infinite3<V: SimdVec>(v: V) -> bool {
    mask_any(is_infinite_each(v), 3)
}

#[inline(always)]
pub fn is_infinite4<V: SimdVec>(v: V) -> bool {
    mask_any(is_infinite_each(v), 4)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{F32x4, F64x4, KernelError};

    #[test]
    fn clamp_reports_first_inverted_lane() {
        let v = F32x4::splat(0.5);
        let min = F32x4::new(0.0, 2.0, 0.0, 5.0);
        let max = F32x4::new(1.0, 1.0, 1.0, 1.0);
        assert_eq!(
            try_clamp(v, min, max).unwrap_err(),
            KernelError::InvertedRange { lane: 1 }
        );
    }

    #[test]
    fn clamp_rejects_nan_bounds() {
        let v = F64x4::splat(0.5);
        let min = F64x4::new(0.0, 0.0, f64::NAN, 0.0);
        assert!(try_clamp(v, min, F64x4::splat(1.0)).is_err());
    }

    #[test]
    #[should_panic(expected = "Inverted range")]
    fn clamp_panics_on_inverted_range() {
        clamp(F32x4::zero(), F32x4::splat(1.0), F32x4::splat(-1.0));
    }

    #[test]
    fn saturate_keeps_nan() {
        let v = saturate(F32x4::new(-3.0, 0.25, 7.0, f32::NAN)).to_array();
        assert_eq!(&v[..3], &[0.0, 0.25, 1.0]);
        assert!(v[3].is_nan());
    }

    #[test]
    fn abs_handles_extremes() {
        let v = abs(F64x4::new(-0.0, f64::MIN, f64::NEG_INFINITY, -1e-310));
        assert_eq!(v.to_bits()[0], 0);
        assert_eq!(v.to_array()[1..], [f64::MAX, f64::INFINITY, 1e-310]);
    }
}
