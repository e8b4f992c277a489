//! Polynomial approximations of the elementary functions.
//!
//! Each function reduces its argument to a small interval, evaluates a fixed
//! minimax polynomial from [`consts`](crate::consts) with Horner's method,
//! and then handles NaN, ±∞ and zero inputs with explicit lane selects. Only
//! [`SimdVec`] primitives are used, so every backend computes the same bits.
//!
//! # Accuracy
//!
//! The coefficient sets are fitted for `f32`; `f64` lanes use the same
//! polynomials and get at least the same accuracy.
//!
//! | Function | Domain | Max error |
//! |---|---|---|
//! | `sin`, `cos` | `[-4π, 4π]` | 1e-6 absolute |
//! | `tan` | `[-4π, 4π]`, `|cos x| > 0.1` | 1e-5 relative (absolute below 1) |
//! | `asin`, `acos`, `atan` | whole domain | 1e-6 absolute |
//! | `exp2` | normal results | 1e-6 relative |
//! | `log2` | positive finite | 1e-6 absolute below 1, relative above |
//! | `sinh`, `cosh` | `[-5, 5]` | 2e-6 absolute below 1, relative above |
//! | `tanh` | whole domain | 2e-6 absolute |
//!
//! Results of magnitude above 1 carry at least half an ulp of rounding, so
//! the `log2` bound becomes relative there. `sinh` is the difference of two
//! exponentials: near zero its error stays within the absolute bound but is
//! large relative to the tiny result (about 5% at `1e-7` in `f32`).
//! `pow` is the one function evaluated with the platform math library
//! ([`num::Float::powf`]) lane by lane.

use num::Float;

use crate::consts::{
    ARC_COEFFICIENTS, ATAN_COEFFICIENTS, COS_COEFFICIENTS, EXP2_COEFFICIENTS, HALF, HALF_PI,
    LN_2, LOG10_2, LOG2_10, LOG2_COEFFICIENTS, LOG2_E, NEG_PI, ONE, PI, RECIPROCAL_TWO_PI,
    SIN_COEFFICIENTS, TWO_PI,
};
use crate::compare::mask_any;
use crate::rounding::{abs, is_infinite_each};
use crate::simd::lane::LaneScalar;
use crate::simd::traits::{LaneBits, SimdVec, LANE_COUNT};

/// Evaluates `c[0] + x * (c[1] + x * (c[2] + ...))`.
#[inline(always)]
fn horner<V: SimdVec, const N: usize>(x: V, coefficients: &[f64; N]) -> V {
    let mut result = V::constant(coefficients[N - 1]);
    for &c in coefficients[..N - 1].iter().rev() {
        result = result * x + V::constant(c);
    }
    result
}

#[inline(always)]
fn bits<V: SimdVec>(value: LaneBits<V>) -> V {
    V::splat_bits(value)
}

#[inline(always)]
fn int<V: SimdVec>(value: i32) -> V {
    V::splat_bits(<V::Scalar as LaneScalar>::int_bits(value))
}

#[inline(always)]
fn sign_mask<V: SimdVec>() -> V {
    bits(<V::Scalar as LaneScalar>::SIGN_MASK)
}

#[inline(always)]
fn infinity<V: SimdVec>() -> V {
    bits(<V::Scalar as LaneScalar>::INFINITY_BITS)
}

#[inline(always)]
fn qnan<V: SimdVec>() -> V {
    bits(<V::Scalar as LaneScalar>::QNAN_BITS)
}

#[inline(always)]
fn is_nan<V: SimdVec>(v: V) -> V {
    v.cmp_ne(v)
}

/// Moves lanes outside `[-π, π)` back by one turn.
#[inline(always)]
fn wrap_angles<V: SimdVec>(v: V) -> V {
    let two_pi = V::constant(TWO_PI);
    let v = v.select(v - two_pi, v.cmp_ge(V::constant(PI)));
    v.select(v + two_pi, v.cmp_lt(V::constant(NEG_PI)))
}

#[inline(always)]
fn out_of_range<V: SimdVec>(v: V) -> V {
    v.cmp_ge(V::constant(PI)) | v.cmp_lt(V::constant(NEG_PI))
}

#[inline(always)]
fn reduce_turns<V: SimdVec>(v: V) -> V {
    let turns = (v * V::constant(RECIPROCAL_TWO_PI)).round();
    wrap_angles(v - turns * V::constant(TWO_PI))
}

/// [`reduce_turns`] computed on `v / 2`, for lanes where `turns * 2π` could
/// round past the largest finite value.
#[inline(always)]
fn reduce_turns_halved<V: SimdVec>(v: V) -> V {
    let turns = (v * V::constant(RECIPROCAL_TWO_PI)).round();
    let half = v * V::constant(HALF) - turns * V::constant(PI);
    wrap_angles(half + half)
}

/// Reduces every lane to `[-π, π)` as `v - round(v / 2π) * 2π`.
///
/// Lanes that land exactly on the upper bound after rounding are wrapped to
/// the lower one. NaN and ±∞ give NaN.
///
/// For large `|v|` the rounded product `round(v / 2π) * 2π` is only accurate
/// to about one ulp of `v`, so the leftover is reduced again until every lane
/// is in range. Each pass shrinks the leftover by roughly the mantissa width;
/// `f32::MAX` needs a handful of passes, `f64::MAX` about twenty. The result
/// is always in range, but for `|v|` beyond `2^MANTISSA_BITS` it no longer
/// tracks the exact remainder.
#[inline]
pub fn mod_angles<V: SimdVec>(v: V) -> V {
    let max_exponent = <V::Scalar as LaneScalar>::MAX_EXPONENT;
    let huge = abs(v).cmp_ge(V::constant(2f64.powi(max_exponent - 1)));

    let mut reduced = reduce_turns(v);
    if mask_any(huge, LANE_COUNT) {
        reduced = reduced.select(reduce_turns_halved(v), huge);
    }
    while mask_any(out_of_range(reduced), LANE_COUNT) {
        reduced = reduce_turns(reduced);
    }
    reduced
}

/// Adds two angles and wraps the sum into `[-π, π)`.
///
/// Sums of in-range angles only need one turn of correction; other finite
/// inputs go through the full [`mod_angles`] reduction.
#[inline]
pub fn add_angles<V: SimdVec>(a: V, b: V) -> V {
    wrap_sum(a + b)
}

/// Subtracts two angles and wraps the difference into `[-π, π)`.
#[inline]
pub fn subtract_angles<V: SimdVec>(a: V, b: V) -> V {
    wrap_sum(a - b)
}

#[inline(always)]
fn wrap_sum<V: SimdVec>(v: V) -> V {
    let wrapped = wrap_angles(v);
    let outside = out_of_range(wrapped);
    if mask_any(outside, LANE_COUNT) {
        wrapped.select(mod_angles(v), outside)
    } else {
        wrapped
    }
}

/// Reduces to `[-π/2, π/2]` and returns the reduced angle with the cosine's
/// sign (`+1` or `-1`) for the quadrant.
#[inline(always)]
fn reduce_half_turn<V: SimdVec>(v: V) -> (V, V) {
    let x = mod_angles(v);

    // Reflect through ±π, with the sign of x, when |x| > π/2.
    let sign = x & sign_mask::<V>();
    let reflected = (V::constant(PI) | sign) - x;
    let direct = abs(x).cmp_le(V::constant(HALF_PI));

    let x = reflected.select(x, direct);
    let cos_sign = V::constant(-ONE).select(V::constant(ONE), direct);
    (x, cos_sign)
}

#[inline(always)]
fn sin_reduced<V: SimdVec>(x: V, x2: V) -> V {
    horner(x2, &SIN_COEFFICIENTS) * x
}

#[inline(always)]
fn cos_reduced<V: SimdVec>(x2: V, sign: V) -> V {
    horner(x2, &COS_COEFFICIENTS) * sign
}

pub fn sin<V: SimdVec>(v: V) -> V {
    let (x, _) = reduce_half_turn(v);
    sin_reduced(x, x * x)
}

pub fn cos<V: SimdVec>(v: V) -> V {
    let (x, sign) = reduce_half_turn(v);
    cos_reduced(x * x, sign)
}

/// Sine and cosine from one shared argument reduction.
pub fn sin_cos<V: SimdVec>(v: V) -> (V, V) {
    let (x, sign) = reduce_half_turn(v);
    let x2 = x * x;
    (sin_reduced(x, x2), cos_reduced(x2, sign))
}

/// `sin(v) / cos(v)`, so poles give large finite values or ±∞.
pub fn tan<V: SimdVec>(v: V) -> V {
    let (sin, cos) = sin_cos(v);
    sin / cos
}

/// Arccosine in `[0, π]`; NaN for `|v| > 1` or NaN input.
pub fn acos<V: SimdVec>(v: V) -> V {
    let one = V::constant(ONE);
    let x = abs(v);

    // acos(|v|) = p(|v|) * sqrt(1 - |v|); the clamp keeps sqrt real at |v| = 1.
    let root = V::zero().max(one - x).sqrt();
    let t = horner(x, &ARC_COEFFICIENTS) * root;

    let nonnegative = v.cmp_ge(V::zero());
    let result = (V::constant(PI) - t).select(t, nonnegative);
    qnan::<V>().select(result, x.cmp_le(one))
}

/// Arcsine in `[-π/2, π/2]`; NaN for `|v| > 1` or NaN input.
pub fn asin<V: SimdVec>(v: V) -> V {
    V::constant(HALF_PI) - acos(v)
}

/// Arctangent in `[-π/2, π/2]`.
pub fn atan<V: SimdVec>(v: V) -> V {
    let one = V::constant(ONE);
    let inside = abs(v).cmp_le(one);

    // Outside [-1, 1] use atan(v) = ±π/2 - atan(1/v).
    let sign = V::constant(-ONE).select(one, v.cmp_gt(one));
    let sign = sign.select(V::zero(), inside);
    let x = (one / v).select(v, inside);

    let x2 = x * x;
    let result = horner(x2, &ATAN_COEFFICIENTS) * x;
    let folded = sign * V::constant(HALF_PI) - result;
    folded.select(result, sign.cmp_eq(V::zero()))
}

/// Angle of the point `(x, y)` in `[-π, π]`, following C `atan2`:
///
/// - `y = ±0`: `±0` for `x > 0` or `x = +0`, `±π` for `x < 0` or `x = -0`
/// - `x = ±0`, `y ≠ 0`: `±π/2` with the sign of `y`
/// - `y = ±∞`: `±π/2` for finite `x`, `±π/4` for `x = +∞`, `±3π/4` for `x = -∞`
/// - `x = ±∞`, finite `y`: `±0` or `±π` with the sign of `y`
/// - NaN in either input: NaN
pub fn atan2<V: SimdVec>(y: V, x: V) -> V {
    let zero = V::zero();
    let y_sign = y & sign_mask::<V>();
    let x_positive = (x & sign_mask::<V>()).cmp_eq_bits(zero);

    let pi = V::constant(PI) | y_sign;
    let half_pi = V::constant(HALF_PI) | y_sign;
    let quarter_pi = V::constant(0.25 * PI) | y_sign;
    let three_quarter_pi = V::constant(0.75 * PI) | y_sign;

    // Generic case: atan(y / x), shifted by ±π in the left half-plane.
    let offset = pi.select(sign_mask(), x_positive);
    let result = atan(y / x) + offset;

    let result = result.select(half_pi, x.cmp_eq(zero));
    let result = result.select(pi.select(y_sign, x_positive), y.cmp_eq(zero));

    let corner = three_quarter_pi.select(quarter_pi, x_positive);
    let vertical = half_pi.select(corner, is_infinite_each(x));
    let result = result.select(vertical, is_infinite_each(y));

    result.select(qnan(), is_nan(x) | is_nan(y))
}

/// `2^v`.
///
/// The integer part of `v` is written straight into the exponent field and
/// divided by a polynomial for `2^-fraction`. Results that would be
/// subnormal are built `-MIN_EXPONENT` binades higher and then multiplied by
/// the smallest normal value. `v >= MAX_EXPONENT + 1` gives `+∞`,
/// `v < MIN_SUBNORMAL_EXPONENT - 1` gives `+0`, NaN gives the canonical NaN.
pub fn exp2<V: SimdVec>(v: V) -> V {
    let mantissa_bits = <V::Scalar as LaneScalar>::MANTISSA_BITS;
    let bias = <V::Scalar as LaneScalar>::EXPONENT_BIAS;
    let min_exponent = <V::Scalar as LaneScalar>::MIN_EXPONENT;
    let max_exponent = <V::Scalar as LaneScalar>::MAX_EXPONENT;
    let min_subnormal = <V::Scalar as LaneScalar>::MIN_SUBNORMAL_EXPONENT;

    let integer = v.truncate();
    let fraction = v - integer;
    let poly = horner(fraction, &EXP2_COEFFICIENTS);

    // Keep the integer conversion in range; out-of-range lanes are replaced below.
    let clamped = integer
        .max(V::constant(f64::from(min_subnormal - 2)))
        .min(V::constant(f64::from(max_exponent + 2)));
    let n = clamped.int_from_float();

    let normal = n.int_add(int(bias)).shift_left(mantissa_bits) / poly;
    let subnormal = n.int_add(int(bias - min_exponent)).shift_left(mantissa_bits) / poly
        * V::splat(<V::Scalar as Float>::min_positive_value());

    let result = normal.select(subnormal, integer.cmp_lt(V::constant(f64::from(min_exponent))));
    let result = result.select(infinity(), v.cmp_ge(V::constant(f64::from(max_exponent + 1))));
    let result = result.select(V::zero(), v.cmp_lt(V::constant(f64::from(min_subnormal - 1))));
    result.select(qnan(), is_nan(v))
}

/// `e^v`, as `exp2(v * log2(e))`.
#[inline]
pub fn exp_e<V: SimdVec>(v: V) -> V {
    exp2(v * V::constant(LOG2_E))
}

/// `10^v`, as `exp2(v * log2(10))`.
#[inline]
pub fn exp10<V: SimdVec>(v: V) -> V {
    exp2(v * V::constant(LOG2_10))
}

/// `(e^v - e^-v) / 2`, with the halving folded into the exponent.
pub fn sinh<V: SimdVec>(v: V) -> V {
    let one = V::constant(ONE);
    let scaled = v * V::constant(LOG2_E);
    exp2(scaled - one) - exp2(-scaled - one)
}

/// `(e^v + e^-v) / 2`, with the halving folded into the exponent.
pub fn cosh<V: SimdVec>(v: V) -> V {
    let one = V::constant(ONE);
    let scaled = v * V::constant(LOG2_E);
    exp2(scaled - one) + exp2(-scaled - one)
}

/// `1 - 2 / (e^2v + 1)`, which saturates to ±1 instead of overflowing.
pub fn tanh<V: SimdVec>(v: V) -> V {
    let one = V::constant(ONE);
    let half = V::constant(HALF);
    let e = exp2(v * V::constant(2.0 * LOG2_E));
    one - one / (e * half + half)
}

/// Polynomial part of `log2` without special-case handling.
#[inline(always)]
fn log2_approx<V: SimdVec>(v: V) -> V {
    let mantissa_bits = <V::Scalar as LaneScalar>::MANTISSA_BITS;
    let exponent_field = infinity::<V>();

    // Subnormals: scaling by 2^MANTISSA_BITS moves the leading set bit into
    // the implicit-one position; the exponent is corrected afterwards.
    let subnormal = (v & exponent_field).cmp_eq_bits(V::zero());
    let scale = V::constant((1u64 << mantissa_bits) as f64);
    let normalized = v.select(v * scale, subnormal);

    let biased = (normalized & exponent_field).shift_right(mantissa_bits);
    let exponent = biased.int_sub(int(<V::Scalar as LaneScalar>::EXPONENT_BIAS));
    let exponent = exponent.int_sub(int::<V>(mantissa_bits as i32) & subnormal);

    // y = mantissa - 1 in [0, 1)
    let mantissa = (normalized & bits::<V>(<V::Scalar as LaneScalar>::MANTISSA_MASK))
        | bits::<V>(<V::Scalar as LaneScalar>::ONE_BITS);
    let y = mantissa - V::constant(ONE);

    horner(y, &LOG2_COEFFICIENTS) * y + exponent.float_from_int()
}

/// Applies the logarithm special cases to `approx`, an approximation of
/// `log_b(v)` for positive finite `v`.
#[inline(always)]
fn log_special_cases<V: SimdVec>(v: V, approx: V) -> V {
    let zero = V::zero();
    let result = approx.select(infinity(), v.cmp_eq(infinity()));
    let result = result.select(-infinity::<V>(), v.cmp_eq(zero));
    let result = result.select(bits(<V::Scalar as LaneScalar>::NEG_QNAN_BITS), v.cmp_lt(zero));
    result.select(qnan(), is_nan(v))
}

/// Base-2 logarithm.
///
/// `+∞` gives `+∞`, `±0` gives `-∞`, negative input gives the negative
/// canonical NaN and NaN gives the canonical NaN.
pub fn log2<V: SimdVec>(v: V) -> V {
    log_special_cases(v, log2_approx(v))
}

/// Base-10 logarithm, `log2(v) * log10(2)`, with the special cases of [`log2`].
pub fn log10<V: SimdVec>(v: V) -> V {
    log_special_cases(v, log2_approx(v) * V::constant(LOG10_2))
}

/// Natural logarithm, `log2(v) * ln(2)`, with the special cases of [`log2`].
pub fn log_e<V: SimdVec>(v: V) -> V {
    log_special_cases(v, log2_approx(v) * V::constant(LN_2))
}

/// `base^power` lane by lane through the platform `powf`.
pub fn pow<V: SimdVec>(base: V, power: V) -> V {
    let b = base.to_array();
    let p = power.to_array();
    V::from_array(std::array::from_fn::<_, LANE_COUNT, _>(|i| b[i].powf(p[i])))
}
