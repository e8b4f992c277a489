//! Lane comparisons and their reductions.
//!
//! Each predicate comes in four forms. `name_each` returns a per-lane mask
//! (all ones where the predicate holds, all zeros elsewhere). `name2`,
//! `name3` and `name4` return `true` iff the predicate holds in every one of
//! the first 2, 3 or 4 lanes; the remaining lanes are ignored.
//!
//! Floating comparisons follow IEEE-754: NaN lanes are unordered, so they
//! fail every predicate except `not_equal`. The `_int` forms compare the
//! integer view instead, which tells `-0.0` from `+0.0` and matches NaNs with
//! identical payloads.

use crate::rounding::abs;
use crate::simd::lane::LaneScalar;
use crate::simd::traits::{SimdVec, LANE_COUNT};

/// Bits of the first `lanes` lanes of a move mask; counts above
/// [`LANE_COUNT`] select every lane.
#[inline(always)]
fn lane_bits(lanes: usize) -> u32 {
    (1u32 << lanes.min(LANE_COUNT)) - 1
}

/// `true` iff every one of the first `lanes` lanes of `mask` is set.
///
/// `lanes` above 4 counts as 4. With `lanes == 0` no lane participates and
/// the result is `true`.
#[inline(always)]
pub fn mask_all<V: SimdVec>(mask: V, lanes: usize) -> bool {
    let bits = lane_bits(lanes);
    mask.move_mask() & bits == bits
}

/// `true` iff at least one of the first `lanes` lanes of `mask` is set.
///
/// `lanes` above 4 counts as 4. With `lanes == 0` the result is `false`.
#[inline(always)]
pub fn mask_any<V: SimdVec>(mask: V, lanes: usize) -> bool {
    mask.move_mask() & lane_bits(lanes) != 0
}

macro_rules! predicate {
    (
        $(#[$meta:meta])*
        $each:ident, $two:ident, $three:ident, $four:ident, $reduce:ident,
        |$($arg:ident),+| $mask:expr
    ) => {
        $(#[$meta])*
        #[inline(always)]
        pub fn $each<V: SimdVec>($($arg: V),+) -> V {
            $mask
        }

        #[doc = concat!("[`", stringify!($each), "`] reduced over lanes x and y.")]
        #[inline(always)]
        pub fn $two<V: SimdVec>($($arg: V),+) -> bool {
            $reduce($each($($arg),+), 2)
        }

        #[doc = concat!("[`", stringify!($each), "`] reduced over lanes x, y and z.")]
        #[inline(always)]
        pub fn $three<V: SimdVec>($($arg: V),+) -> bool {
            $reduce($each($($arg),+), 3)
        }

        #[doc = concat!("[`", stringify!($each), "`] reduced over all four lanes.")]
        #[inline(always)]
        pub fn $four<V: SimdVec>($($arg: V),+) -> bool {
            $reduce($each($($arg),+), 4)
        }
    };
}

predicate! {
    /// `a == b` per lane.
    equal_each, equal2, equal3, equal4, mask_all,
    |a, b| a.cmp_eq(b)
}

predicate! {
    /// `a != b` per lane (true for NaN lanes).
    not_equal_each, not_equal2, not_equal3, not_equal4, mask_all,
    |a, b| a.cmp_ne(b)
}

predicate! {
    /// Bit-exact equality of the integer view.
    equal_int_each, equal_int2, equal_int3, equal_int4, mask_all,
    |a, b| a.cmp_eq_bits(b)
}

predicate! {
    /// Bit-exact inequality of the integer view.
    not_equal_int_each, not_equal_int2, not_equal_int3, not_equal_int4, mask_all,
    |a, b| V::splat_bits(<V::Scalar as LaneScalar>::ALL_ONES).and_not(a.cmp_eq_bits(b))
}

predicate! {
    /// `|a - b| <= epsilon` per lane.
    near_equal_each, near_equal2, near_equal3, near_equal4, mask_all,
    |a, b, epsilon| abs(a - b).cmp_le(epsilon)
}

predicate! {
    greater_each, greater2, greater3, greater4, mask_all,
    |a, b| a.cmp_gt(b)
}

predicate! {
    greater_or_equal_each, greater_or_equal2, greater_or_equal3, greater_or_equal4, mask_all,
    |a, b| a.cmp_ge(b)
}

predicate! {
    less_each, less2, less3, less4, mask_all,
    |a, b| a.cmp_lt(b)
}

predicate! {
    less_or_equal_each, less_or_equal2, less_or_equal3, less_or_equal4, mask_all,
    |a, b| a.cmp_le(b)
}

predicate! {
    /// `-bounds <= v <= bounds` per lane.
    in_bounds_each, in_bounds2, in_bounds3, in_bounds4, mask_all,
    |v, bounds| v.cmp_le(bounds) & (-bounds).cmp_le(v)
}

predicate! {
    /// NaN lanes. The reductions are true if any participating lane is NaN.
    is_nan_each, is_nan2, is_nan3, is_nan4, mask_any,
    |v| v.cmp_ne(v)
}
