//! Lane comparisons and their 2/3/4-lane reductions.

use quadlane::compare::*;
use quadlane::simd::traits::SimdVec;
use quadlane::{F32x4, F64x4};

#[test]
fn test_equal_reductions_follow_lane_count() {
    let a = F32x4::new(1.0, 2.0, 3.0, 4.0);
    let b = F32x4::new(1.0, 2.0, 5.0, 4.0);

    assert!(equal2(a, b));
    assert!(!equal3(a, b));
    assert!(!equal4(a, b));
    assert_eq!(equal_each(a, b).move_mask(), 0b1011);
}

#[test]
fn test_not_equal_requires_every_lane() {
    let a = F64x4::new(1.0, 2.0, 3.0, 4.0);
    let b = F64x4::new(0.0, 0.0, 3.0, 0.0);

    assert!(not_equal2(a, b));
    assert!(!not_equal3(a, b));
    assert!(!not_equal4(a, b));
    assert!(not_equal4(a, -a));
}

#[test]
fn test_nan_lanes_are_unordered() {
    let nan = F32x4::new(f32::NAN, 1.0, 1.0, 1.0);
    let one = F32x4::splat(1.0);

    assert!(!equal4(nan, nan));
    assert_eq!(not_equal_each(nan, one).move_mask(), 0b0001);
    assert!(!greater_or_equal2(nan, one));
    assert!(!less_or_equal2(nan, one));
    // Identical payloads compare equal on the integer view.
    assert!(equal_int4(nan, nan));
}

#[test]
fn test_integer_view_distinguishes_signed_zero() {
    let pos = F64x4::zero();
    let neg = F64x4::splat(-0.0);

    assert!(equal4(pos, neg));
    assert!(!equal_int2(pos, neg));
    assert!(not_equal_int4(pos, neg));
    assert!(!not_equal_int4(pos, pos.with_lane(3, -0.0)));
}

#[test]
fn test_near_equal_uses_epsilon_per_lane() {
    let a = F32x4::new(1.0, 2.0, 3.0, 4.0);
    let b = F32x4::new(1.05, 1.95, 3.5, 4.0);
    let epsilon = F32x4::new(0.1, 0.1, 0.1, 0.0);

    assert!(near_equal2(a, b, epsilon));
    assert!(!near_equal3(a, b, epsilon));
    assert_eq!(near_equal_each(a, b, epsilon).move_mask(), 0b1011);
}

#[test]
fn test_ordering_predicates() {
    let a = F64x4::new(2.0, 2.0, 2.0, 0.0);
    let b = F64x4::new(1.0, 1.0, 2.0, 5.0);

    assert!(greater2(a, b));
    assert!(!greater3(a, b));
    assert!(greater_or_equal3(a, b));
    assert!(!greater_or_equal4(a, b));
    assert!(less_or_equal4(b.with_lane(3, -1.0), a));
    assert!(less2(b, a));
    assert_eq!(less_each(a, b).move_mask(), 0b1000);
}

#[test]
fn test_in_bounds() {
    let bounds = F32x4::new(1.0, 2.0, 3.0, 0.5);
    let v = F32x4::new(-1.0, 2.0, -2.5, 0.75);

    assert!(in_bounds3(v, bounds));
    assert!(!in_bounds4(v, bounds));
    assert_eq!(in_bounds_each(v, bounds).move_mask(), 0b0111);
    assert!(!in_bounds2(F32x4::new(f32::NAN, 0.0, 0.0, 0.0), bounds));
}

#[test]
fn test_is_nan_reductions_use_any_lane() {
    let v = F64x4::new(0.0, f64::NAN, 1.0, f64::INFINITY);

    assert!(is_nan2(v));
    assert!(is_nan4(v));
    assert!(!is_nan2(v.with_lane(1, 3.0)));
    assert!(is_nan4(F64x4::splat(3.0).with_lane(3, f64::NAN)));
    assert!(!is_nan3(F64x4::splat(3.0).with_lane(3, f64::NAN)));
    assert_eq!(is_nan_each(v).move_mask(), 0b0010);
}

#[test]
fn test_mask_helpers_combine_each_forms() {
    let a = F32x4::new(1.0, 5.0, 3.0, 9.0);
    let low = F32x4::splat(0.0);
    let high = F32x4::splat(4.0);

    let inside = greater_each(a, low) & less_each(a, high);
    assert!(!mask_all(inside, 2));
    assert!(mask_any(inside, 2));
    assert!(mask_all(inside, 1));
    assert!(!mask_any(greater_each(low, a), 4));
}

#[test]
fn test_mask_helpers_lane_count_limits() {
    let all = equal_each(F32x4::splat(1.0), F32x4::splat(1.0));
    let none = F32x4::splat(0.0).cmp_lt(F32x4::splat(0.0));

    assert!(mask_all(none, 0));
    assert!(!mask_any(all, 0));

    for lanes in [5, 32, 64, usize::MAX] {
        assert!(mask_all(all, lanes));
        assert!(mask_any(all, lanes));
        assert!(!mask_all(none, lanes));
        assert!(!mask_any(none, lanes));
    }
    assert!(!mask_all(all.with_lane(3, 0.0), 100));
}
