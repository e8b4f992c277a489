//! Precision comparison for arcsine and arccosine.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use quadlane::simd::traits::SimdVec;
use quadlane::{transcendental, F32x4, F64x4, SimdMath};

/// Documented maximum absolute error over `[-1, 1]`.
const MAX_ERROR: f64 = 1e-6;

#[test]
fn test_arcsine_precision_comparison() {
    let test_cases = vec![
        vec![0.0f32, 0.1, 0.2, 0.5],
        vec![0.7f32, 0.9, 0.99, 1.0],
        vec![-0.1f32, -0.5, -0.999, -1.0],
        vec![1e-6f32, -1e-6, 0.707_106_8, -0.707_106_8],
    ];

    for (i, test_case) in test_cases.iter().enumerate() {
        println!("Testing case {}: {:?}", i + 1, test_case);
        let asin = test_case.asin();
        let acos = test_case.acos();

        for (j, &x) in test_case.iter().enumerate() {
            let asin_error = (f64::from(asin[j]) - f64::from(x).asin()).abs();
            let acos_error = (f64::from(acos[j]) - f64::from(x).acos()).abs();
            println!(
                "  Input: {x:.6}, asin: {:.8} (err {asin_error:.2e}), acos: {:.8} (err {acos_error:.2e})",
                asin[j], acos[j]
            );
            assert!(asin_error <= MAX_ERROR, "asin({x}): error {asin_error:.2e}");
            assert!(acos_error <= MAX_ERROR, "acos({x}): error {acos_error:.2e}");
        }
    }
}

#[test]
fn test_arcsine_random_inputs() {
    let mut rng = StdRng::seed_from_u64(12345);
    let inputs: Vec<f32> = (0..20_000).map(|_| rng.random_range(-1.0..=1.0)).collect();
    let asin = inputs.asin();
    let acos = inputs.acos();

    let (mut max_asin, mut max_acos) = (0.0f64, 0.0f64);
    for (j, &x) in inputs.iter().enumerate() {
        let asin_error = (f64::from(asin[j]) - f64::from(x).asin()).abs();
        let acos_error = (f64::from(acos[j]) - f64::from(x).acos()).abs();
        max_asin = max_asin.max(asin_error);
        max_acos = max_acos.max(acos_error);
        assert!(asin_error <= MAX_ERROR, "asin({x}) = {}, error {asin_error:.2e}", asin[j]);
        assert!(acos_error <= MAX_ERROR, "acos({x}) = {}, error {acos_error:.2e}", acos[j]);
    }
    println!("Max abs error: asin {max_asin:.2e}, acos {max_acos:.2e}");
}

#[test]
fn test_arcsine_wide_lanes() {
    let mut rng = StdRng::seed_from_u64(12345);

    for _ in 0..5_000 {
        let lanes: [f64; 4] = std::array::from_fn(|_| rng.random_range(-1.0..=1.0));
        let v = F64x4::from(lanes);
        let asin = transcendental::asin(v).to_array();
        let acos = transcendental::acos(v).to_array();
        for (i, &x) in lanes.iter().enumerate() {
            assert!((asin[i] - x.asin()).abs() <= MAX_ERROR, "asin({x}) = {}", asin[i]);
            assert!((acos[i] - x.acos()).abs() <= MAX_ERROR, "acos({x}) = {}", acos[i]);
        }
    }
}

#[test]
fn test_arccosine_endpoints() {
    let v = transcendental::acos(F32x4::new(1.0, -1.0, 0.0, 0.5)).to_array();
    assert_eq!(v[0], 0.0);
    assert_eq!(v[1], std::f32::consts::PI);
    assert!((v[2] - std::f32::consts::FRAC_PI_2).abs() <= 1e-6);
    assert!((v[3] - std::f32::consts::FRAC_PI_3).abs() <= 1e-6);
}

#[test]
fn test_out_of_domain_gives_canonical_nan() {
    let v = F32x4::new(1.000_001, -2.0, f32::INFINITY, f32::NAN);
    for lane in transcendental::acos(v).to_bits() {
        assert_eq!(lane, 0x7FC0_0000);
    }
    for lane in transcendental::asin(v).to_array() {
        assert!(lane.is_nan());
    }

    let wide = transcendental::acos(F64x4::new(-1.5, 3.0, f64::NEG_INFINITY, f64::NAN));
    for lane in wide.to_bits() {
        assert_eq!(lane, 0x7FF8_0000_0000_0000);
    }
}
