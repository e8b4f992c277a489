//! Precision comparison between the polynomial sine/cosine and the platform
//! scalar functions.

use std::f32::consts::{FRAC_PI_2, PI, TAU};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use quadlane::simd::traits::SimdVec;
use quadlane::{transcendental, F32x4, F64x4, SimdMath};

/// Documented maximum absolute error on `[-4π, 4π]`.
const MAX_ERROR: f64 = 1e-6;

#[test]
fn test_sine_precision_comparison() {
    let test_cases = vec![
        // Small angles near zero
        vec![0.0f32, 0.1, 0.2, 0.3],
        // Around π/2
        vec![1.4f32, 1.5, FRAC_PI_2, 1.6],
        // Around π
        vec![3.0f32, 3.1, PI, 3.2],
        // Around 2π
        vec![6.0f32, 6.2, TAU, 6.3],
        // Negative values and quadrant boundaries
        vec![-0.5f32, -1.0, -FRAC_PI_2, -PI],
        // Up to 4π
        vec![10.0f32, 11.0, 12.0, 4.0 * PI],
        vec![-10.0f32, -5.0, -12.5, -4.0 * PI],
    ];

    for (i, test_case) in test_cases.iter().enumerate() {
        println!("Testing case {}: {:?}", i + 1, test_case);

        let scalar_results: Vec<f32> = test_case.iter().map(|x| x.sin()).collect();
        let simd_results = test_case.sin();
        assert_eq!(scalar_results.len(), simd_results.len());

        for (j, (&scalar_val, &simd_val)) in scalar_results.iter().zip(&simd_results).enumerate() {
            let input_val = test_case[j];
            let absolute_error = (scalar_val - simd_val).abs();
            println!(
                "  Input: {input_val:.6}, Scalar: {scalar_val:.8}, SIMD: {simd_val:.8}, Abs Error: {absolute_error:.2e}"
            );
            assert!(
                f64::from(absolute_error) <= MAX_ERROR,
                "sin({input_val}): scalar={scalar_val}, simd={simd_val}, abs_error={absolute_error:.2e}"
            );
        }
    }
}

#[test]
fn test_boundary_angles() {
    let v = transcendental::sin(F32x4::new(0.0, FRAC_PI_2, PI, -FRAC_PI_2)).to_array();
    let expected = [0.0f32, 1.0, 0.0, -1.0];
    for (got, want) in v.iter().zip(expected) {
        assert!((got - want).abs() <= 1e-6, "{v:?}");
    }
    assert_eq!(v[0].to_bits(), 0, "sin(+0) must be +0");

    let c = transcendental::cos(F64x4::new(0.0, std::f64::consts::FRAC_PI_2, std::f64::consts::PI, 0.0));
    let [c0, c1, c2, _] = c.to_array();
    assert!((c0 - 1.0).abs() <= 1e-6);
    assert!(c1.abs() <= 1e-6);
    assert!((c2 + 1.0).abs() <= 1e-6);
}

#[test]
fn test_sine_cosine_random_inputs_narrow() {
    let mut rng = StdRng::seed_from_u64(12345);
    let inputs: Vec<f32> = (0..20_000).map(|_| rng.random_range(-4.0 * PI..4.0 * PI)).collect();

    let sines = inputs.sin();
    let cosines = inputs.cos();

    let mut max_sin_error = 0.0f64;
    let mut max_cos_error = 0.0f64;
    for (i, &x) in inputs.iter().enumerate() {
        let sin_error = (f64::from(sines[i]) - f64::from(x).sin()).abs();
        let cos_error = (f64::from(cosines[i]) - f64::from(x).cos()).abs();
        max_sin_error = max_sin_error.max(sin_error);
        max_cos_error = max_cos_error.max(cos_error);
        assert!(sin_error <= MAX_ERROR, "sin({x}) = {}, error {sin_error:.2e}", sines[i]);
        assert!(cos_error <= MAX_ERROR, "cos({x}) = {}, error {cos_error:.2e}", cosines[i]);
    }
    println!("Max abs error over [-4π, 4π]: sin {max_sin_error:.2e}, cos {max_cos_error:.2e}");
}

#[test]
fn test_sine_cosine_random_inputs_wide() {
    let mut rng = StdRng::seed_from_u64(12345);

    for _ in 0..5_000 {
        let lanes: [f64; 4] = std::array::from_fn(|_| rng.random_range(-4.0 * std::f64::consts::PI..4.0 * std::f64::consts::PI));
        let (sin, cos) = transcendental::sin_cos(F64x4::from(lanes));

        for (i, &x) in lanes.iter().enumerate() {
            let sin_error = (sin.to_array()[i] - x.sin()).abs();
            let cos_error = (cos.to_array()[i] - x.cos()).abs();
            assert!(sin_error <= MAX_ERROR, "sin({x}): error {sin_error:.2e}");
            assert!(cos_error <= MAX_ERROR, "cos({x}): error {cos_error:.2e}");
        }
    }
}

#[test]
fn test_sin_cos_matches_separate_calls() {
    let mut rng = StdRng::seed_from_u64(12345);

    for _ in 0..1_000 {
        let lanes: [f32; 4] = std::array::from_fn(|_| rng.random_range(-100.0..100.0));
        let v = F32x4::from(lanes);
        let (sin, cos) = transcendental::sin_cos(v);
        assert_eq!(sin.to_bits(), transcendental::sin(v).to_bits());
        assert_eq!(cos.to_bits(), transcendental::cos(v).to_bits());
    }
}

#[test]
fn test_sine_special_values() {
    let v = transcendental::sin(F32x4::new(f32::NAN, f32::INFINITY, f32::NEG_INFINITY, -0.0)).to_array();
    assert!(v[0].is_nan());
    assert!(v[1].is_nan());
    assert!(v[2].is_nan());
    assert_eq!(v[3], 0.0);

    let c = transcendental::cos(F64x4::splat(f64::INFINITY)).to_array();
    assert!(c.iter().all(|x| x.is_nan()));
}
