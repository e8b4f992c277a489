//! Dot and cross products, lengths, normalization, reflection, refraction.
//!
//! Functions suffixed 2, 3 or 4 treat only the first N lanes as the vector.
//! Scalar results (dot products, lengths, `cross2`) are splatted to all four
//! lanes. `normalize*`, `reflect*` and `refract*` apply their formula to all
//! four lanes with the N-lane dot product, so trailing lanes carry values but
//! are not part of the result's meaning.

use crate::compare::mask_all;
use crate::consts::ONE;
use crate::simd::lane::LaneScalar;
use crate::simd::traits::SimdVec;

/// Sum of the first `lanes` lane products, added left to right.
#[inline(always)]
fn dot<V: SimdVec>(a: V, b: V, lanes: usize) -> V {
    let products = a * b;
    let mut sum = products.splat_lane(0) + products.splat_lane(1);
    if lanes > 2 {
        sum = sum + products.splat_lane(2);
    }
    if lanes > 3 {
        sum = sum + products.splat_lane(3);
    }
    sum
}

#[inline(always)]
pub fn dot2<V: SimdVec>(a: V, b: V) -> V {
    dot(a, b, 2)
}

#[inline(always)]
pub fn dot3<V: SimdVec>(a: V, b: V) -> V {
    dot(a, b, 3)
}

#[inline(always)]
pub fn dot4<V: SimdVec>(a: V, b: V) -> V {
    dot(a, b, 4)
}

/// The 2D cross product `a.x * b.y - a.y * b.x`, splatted.
#[inline(always)]
pub fn cross2<V: SimdVec>(a: V, b: V) -> V {
    let products = a * b.swizzle([1, 0, 1, 0]);
    products.splat_lane(0) - products.splat_lane(1)
}

/// The 3D cross product of the xyz lanes. Lane w of the result is `+0.0`.
#[inline(always)]
pub fn cross3<V: SimdVec>(a: V, b: V) -> V {
    let yzx = [1, 2, 0, 3];
    let zxy = [2, 0, 1, 3];
    let result = a.swizzle(yzx) * b.swizzle(zxy) - a.swizzle(zxy) * b.swizzle(yzx);

    let all_ones = <V::Scalar as LaneScalar>::ALL_ONES;
    let zero = Default::default();
    result & V::from_bits([all_ones, all_ones, all_ones, zero])
}

/// The 4D cross product: a vector orthogonal to `a`, `b` and `c`.
///
/// The sign convention gives `cross4(x, y, z) == -w` for the unit axes.
pub fn cross4<V: SimdVec>(a: V, b: V, c: V) -> V {
    // b.zwyz * c.wzwy - b.wzwy * c.zwyz, weighted by a.yxxx
    let minor = b.swizzle([2, 3, 1, 2]) * c.swizzle([3, 2, 3, 1])
        - b.swizzle([3, 2, 3, 1]) * c.swizzle([2, 3, 1, 2]);
    let mut result = minor * a.swizzle([1, 0, 0, 0]);

    // b.ywxz * c.wxwx - b.wxwx * c.ywxz, weighted by a.zzyy
    let minor = b.swizzle([1, 3, 0, 2]) * c.swizzle([3, 0, 3, 0])
        - b.swizzle([3, 0, 3, 0]) * c.swizzle([1, 3, 0, 2]);
    result = result - minor * a.swizzle([2, 2, 1, 1]);

    // b.yzxy * c.zxyx - b.zxyx * c.yzxy, weighted by a.wwwz
    let minor = b.swizzle([1, 2, 0, 1]) * c.swizzle([2, 0, 1, 0])
        - b.swizzle([2, 0, 1, 0]) * c.swizzle([1, 2, 0, 1]);
    result + minor * a.swizzle([3, 3, 3, 2])
}

#[inline(always)]
pub fn length_squared2<V: SimdVec>(v: V) -> V {
    dot(v, v, 2)
}

#[inline(always)]
pub fn length_squared3<V: SimdVec>(v: V) -> V {
    dot(v, v, 3)
}

#[inline(always)]
pub fn length_squared4<V: SimdVec>(v: V) -> V {
    dot(v, v, 4)
}

#[inline(always)]
pub fn length2<V: SimdVec>(v: V) -> V {
    dot(v, v, 2).sqrt()
}

#[inline(always)]
pub fn length3<V: SimdVec>(v: V) -> V {
    dot(v, v, 3).sqrt()
}

#[inline(always)]
pub fn length4<V: SimdVec>(v: V) -> V {
    dot(v, v, 4).sqrt()
}

fn normalize<V: SimdVec>(v: V, lanes: usize) -> V {
    let length_squared = dot(v, v, lanes);
    let length = length_squared.sqrt();
    let quotient = v / length;

    // Infinite length: finite lanes collapse to a zero of their own sign.
    let infinity = V::splat_bits(<V::Scalar as LaneScalar>::INFINITY_BITS);
    let sign = v & V::splat_bits(<V::Scalar as LaneScalar>::SIGN_MASK);
    let finite_lanes = crate::rounding::abs(v).cmp_lt(infinity);
    let overflowed = quotient.select(sign, finite_lanes);
    let result = quotient.select(overflowed, length_squared.cmp_eq(infinity));

    // Zero length: the zero vector. A NaN length keeps the NaN quotient.
    result & length.cmp_ne(V::zero())
}

/// `v / length2(v)`; the zero vector stays zero.
#[inline(always)]
pub fn normalize2<V: SimdVec>(v: V) -> V {
    normalize(v, 2)
}

/// `v / length3(v)`; the zero vector stays zero.
#[inline(always)]
pub fn normalize3<V: SimdVec>(v: V) -> V {
    normalize(v, 3)
}

/// `v / length4(v)`; the zero vector stays zero.
#[inline(always)]
pub fn normalize4<V: SimdVec>(v: V) -> V {
    normalize(v, 4)
}

#[inline(always)]
fn reflect<V: SimdVec>(incident: V, normal: V, lanes: usize) -> V {
    let d = dot(incident, normal, lanes);
    incident - (d + d) * normal
}

/// `incident - 2 * dot2(incident, normal) * normal`.
#[inline(always)]
pub fn reflect2<V: SimdVec>(incident: V, normal: V) -> V {
    reflect(incident, normal, 2)
}

#[inline(always)]
pub fn reflect3<V: SimdVec>(incident: V, normal: V) -> V {
    reflect(incident, normal, 3)
}

#[inline(always)]
pub fn reflect4<V: SimdVec>(incident: V, normal: V) -> V {
    reflect(incident, normal, 4)
}

fn refract<V: SimdVec>(incident: V, normal: V, eta: V, lanes: usize) -> V {
    let one = V::constant(ONE);
    let d = dot(incident, normal, lanes);

    // k = 1 - eta^2 * (1 - d^2)
    let k = one - d * d;
    let k = k * eta;
    let k = one - k * eta;

    // Total internal reflection only when no participating lane transmits.
    if mask_all(k.cmp_lt(V::zero()), lanes) {
        return V::zero();
    }

    let scale = eta * d + k.sqrt();
    eta * incident - normal * scale
}

/// Refraction through a surface with unit `normal` and relative index `eta`.
///
/// Returns the zero vector on total internal reflection.
#[inline]
pub fn refract2<V: SimdVec>(incident: V, normal: V, eta: V::Scalar) -> V {
    refract(incident, normal, V::splat(eta), 2)
}

#[inline]
pub fn refract3<V: SimdVec>(incident: V, normal: V, eta: V::Scalar) -> V {
    refract(incident, normal, V::splat(eta), 3)
}

#[inline]
pub fn refract4<V: SimdVec>(incident: V, normal: V, eta: V::Scalar) -> V {
    refract(incident, normal, V::splat(eta), 4)
}

/// [`refract2`] with a per-lane refraction index.
#[inline]
pub fn refract2_v<V: SimdVec>(incident: V, normal: V, eta: V) -> V {
    refract(incident, normal, eta, 2)
}

#[inline]
pub fn refract3_v<V: SimdVec>(incident: V, normal: V, eta: V) -> V {
    refract(incident, normal, eta, 3)
}

#[inline]
pub fn refract4_v<V: SimdVec>(incident: V, normal: V, eta: V) -> V {
    refract(incident, normal, eta, 4)
}
