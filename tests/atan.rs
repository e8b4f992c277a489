//! Precision comparison for arctangent and the two-argument arctangent.

use std::f32::consts::{FRAC_PI_2, FRAC_PI_4, PI};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use quadlane::simd::traits::SimdVec;
use quadlane::{transcendental, F32x4, F64x4, SimdMath};

const MAX_ERROR: f64 = 1e-6;

#[test]
fn test_arctangent_precision_comparison() {
    let test_cases = vec![
        vec![0.0f32, 0.1, 0.5, 1.0],
        vec![-0.1f32, -0.5, -1.0, -0.999],
        vec![1.001f32, 2.0, 10.0, 1e6],
        vec![-1.001f32, -2.0, -10.0, -1e6],
        vec![f32::MAX, f32::INFINITY, f32::NEG_INFINITY, 1e-30],
    ];

    for (i, test_case) in test_cases.iter().enumerate() {
        println!("Testing case {}: {:?}", i + 1, test_case);
        let results = test_case.atan();

        for (&x, &simd_val) in test_case.iter().zip(&results) {
            let expected = f64::from(x).atan();
            let error = (f64::from(simd_val) - expected).abs();
            println!("  Input: {x:e}, Reference: {expected:.8}, SIMD: {simd_val:.8}, Abs Error: {error:.2e}");
            assert!(error <= MAX_ERROR, "atan({x}): error {error:.2e}");
        }
    }
}

#[test]
fn test_arctangent_random_inputs() {
    let mut rng = StdRng::seed_from_u64(12345);
    let inputs: Vec<f32> = (0..20_000)
        .map(|i| {
            if i % 2 == 0 {
                rng.random_range(-2.0..2.0)
            } else {
                rng.random_range(-1e4..1e4)
            }
        })
        .collect();
    let results = inputs.atan();

    let mut max_error = 0.0f64;
    for (&x, &got) in inputs.iter().zip(&results) {
        let error = (f64::from(got) - f64::from(x).atan()).abs();
        max_error = max_error.max(error);
        assert!(error <= MAX_ERROR, "atan({x}) = {got}, error {error:.2e}");
    }
    println!("Max abs error: {max_error:.2e}");

    let wide = transcendental::atan(F64x4::new(-3.5, -0.25, 0.75, 40.0)).to_array();
    for (got, x) in wide.iter().zip([-3.5f64, -0.25, 0.75, 40.0]) {
        assert!((got - x.atan()).abs() <= MAX_ERROR, "atan({x}) = {got}");
    }
}

#[test]
fn test_arctangent_nan() {
    assert!(transcendental::atan(F32x4::splat(f32::NAN)).to_array()[0].is_nan());
}

#[test]
fn test_atan2_random_quadrants() {
    let mut rng = StdRng::seed_from_u64(12345);

    let mut max_error = 0.0f64;
    for _ in 0..5_000 {
        let y: [f32; 4] = std::array::from_fn(|_| rng.random_range(-100.0..100.0));
        let x: [f32; 4] = std::array::from_fn(|_| rng.random_range(-100.0..100.0));
        let result = transcendental::atan2(F32x4::from(y), F32x4::from(x)).to_array();

        for i in 0..4 {
            let expected = f64::from(y[i]).atan2(f64::from(x[i]));
            let error = (f64::from(result[i]) - expected).abs();
            max_error = max_error.max(error);
            assert!(error <= MAX_ERROR, "atan2({}, {}) = {}, expected {expected}", y[i], x[i], result[i]);
        }
    }
    println!("Max abs error: {max_error:.2e}");
}

#[test]
fn test_atan2_special_values_follow_c() {
    let inf = f32::INFINITY;
    let cases: [(f32, f32, f32); 20] = [
        (0.0, 1.0, 0.0),
        (-0.0, 1.0, -0.0),
        (0.0, 0.0, 0.0),
        (-0.0, 0.0, -0.0),
        (0.0, -0.0, PI),
        (-0.0, -0.0, -PI),
        (0.0, -1.0, PI),
        (-0.0, -1.0, -PI),
        (1.0, 0.0, FRAC_PI_2),
        (-1.0, -0.0, -FRAC_PI_2),
        (inf, 5.0, FRAC_PI_2),
        (-inf, -5.0, -FRAC_PI_2),
        (inf, inf, FRAC_PI_4),
        (-inf, inf, -FRAC_PI_4),
        (inf, -inf, 3.0 * FRAC_PI_4),
        (-inf, -inf, -3.0 * FRAC_PI_4),
        (1.0, inf, 0.0),
        (-1.0, inf, -0.0),
        (1.0, -inf, PI),
        (-1.0, -inf, -PI),
    ];

    for chunk in cases.chunks(4) {
        let y: [f32; 4] = std::array::from_fn(|i| chunk[i].0);
        let x: [f32; 4] = std::array::from_fn(|i| chunk[i].1);
        let result = transcendental::atan2(F32x4::from(y), F32x4::from(x)).to_array();

        for (i, &(yi, xi, expected)) in chunk.iter().enumerate() {
            println!("  atan2({yi}, {xi}) = {} (expected {expected})", result[i]);
            assert!((result[i] - expected).abs() <= 1e-6, "atan2({yi}, {xi}) = {}", result[i]);
            assert_eq!(
                result[i].is_sign_negative(),
                expected.is_sign_negative(),
                "atan2({yi}, {xi}) has the wrong sign"
            );
            assert!((result[i] - yi.atan2(xi)).abs() <= 1e-6, "atan2({yi}, {xi}) differs from std");
        }
    }
}

#[test]
fn test_atan2_nan_inputs() {
    let y = F64x4::new(f64::NAN, 1.0, f64::NAN, f64::INFINITY);
    let x = F64x4::new(1.0, f64::NAN, f64::NAN, f64::NAN);
    for lane in transcendental::atan2(y, x).to_array() {
        assert!(lane.is_nan());
    }
}
