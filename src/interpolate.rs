//! Linear, Hermite, Catmull-Rom and barycentric interpolation.
//!
//! Every curve has a scalar-parameter form and a `_v` form taking the
//! parameter per lane. The scalar forms splat the parameter and call the `_v`
//! form, so for a uniform parameter the two agree bit for bit.

use crate::consts::{HALF, ONE, TWO};
use crate::simd::lane::LaneScalar;
use crate::simd::traits::SimdVec;

/// `start + t * (end - start)`, exact at `t == 0` and `t == 1`.
#[inline]
pub fn lerp_v<V: SimdVec>(start: V, end: V, t: V) -> V {
    let result = start + t * (end - start);
    let result = result.select(start, t.cmp_eq(V::zero()));
    result.select(end, t.cmp_eq(V::constant(ONE)))
}

#[inline]
pub fn lerp<V: SimdVec>(start: V, end: V, t: V::Scalar) -> V {
    lerp_v(start, end, V::splat(t))
}

/// Cubic Hermite interpolation where lane k of `t` drives basis function k.
///
/// The basis vector is `t²·(-3, -2, 3, -1) + t³·(2, 1, -2, 1) + t·(0, 1, 0, 0)
/// + (1, 0, 0, 0)`; lane x weights `p0`, y weights `t0`, z weights `p1` and
/// w weights `t1`. With the same `t` in every lane this is the standard basis
/// `(2t³ - 3t² + 1, t³ - 2t² + t, -2t³ + 3t², t³ - t²)`.
pub fn hermite_v<V: SimdVec>(p0: V, t0: V, p1: V, t1: V, t: V) -> V {
    let t2 = t * t;
    let t3 = t * t2;

    let all_ones = <V::Scalar as LaneScalar>::ALL_ONES;
    let zero = Default::default();
    let y_only = V::from_bits([zero, all_ones, zero, zero]);

    let basis = t2 * V::new(lit(-3.0), lit(-2.0), lit(3.0), lit(-1.0))
        + t3 * V::new(lit(2.0), lit(1.0), lit(-2.0), lit(1.0));
    let basis = basis + (t & y_only);
    let basis = basis + V::new(lit(1.0), lit(0.0), lit(0.0), lit(0.0));

    let result = p0 * basis.splat_lane(0);
    let result = result + t0 * basis.splat_lane(1);
    let result = result + p1 * basis.splat_lane(2);
    result + t1 * basis.splat_lane(3)
}

/// Cubic Hermite interpolation between `p0` and `p1` with tangents `t0`, `t1`.
#[inline]
pub fn hermite<V: SimdVec>(p0: V, t0: V, p1: V, t1: V, t: V::Scalar) -> V {
    hermite_v(p0, t0, p1, t1, V::splat(t))
}

/// Catmull-Rom spline through `p1` (t = 0) and `p2` (t = 1), each lane with
/// its own parameter.
pub fn catmull_rom_v<V: SimdVec>(p0: V, p1: V, p2: V, p3: V, t: V) -> V {
    let half = V::constant(HALF);
    let two = V::constant(TWO);
    let three = V::constant(3.0);
    let four = V::constant(4.0);
    let five = V::constant(5.0);

    let t2 = t * t;
    let t3 = t * t2;

    let b0 = half * ((two * t2 - t3) - t);
    let b1 = half * ((three * t3 - five * t2) + two);
    let b2 = half * ((four * t2 - three * t3) + t);
    let b3 = half * (t3 - t2);

    ((p0 * b0 + p1 * b1) + p2 * b2) + p3 * b3
}

#[inline]
pub fn catmull_rom<V: SimdVec>(p0: V, p1: V, p2: V, p3: V, t: V::Scalar) -> V {
    catmull_rom_v(p0, p1, p2, p3, V::splat(t))
}

/// `p0 + f * (p1 - p0) + g * (p2 - p0)` with per-lane weights.
#[inline]
pub fn barycentric_v<V: SimdVec>(p0: V, p1: V, p2: V, f: V, g: V) -> V {
    (p0 + (p1 - p0) * f) + (p2 - p0) * g
}

#[inline]
pub fn barycentric<V: SimdVec>(p0: V, p1: V, p2: V, f: V::Scalar, g: V::Scalar) -> V {
    barycentric_v(p0, p1, p2, V::splat(f), V::splat(g))
}

#[inline(always)]
fn lit<S: LaneScalar>(value: f64) -> S {
    S::lit(value)
}
