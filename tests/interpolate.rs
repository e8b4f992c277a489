//! Linear, Hermite, Catmull-Rom and barycentric interpolation.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use quadlane::interpolate::*;
use quadlane::simd::traits::SimdVec;
use quadlane::{F32x4, F64x4};

#[test]
fn test_lerp_hits_endpoints_exactly() {
    let mut rng = StdRng::seed_from_u64(12345);

    for _ in 0..1_000 {
        let a: [f32; 4] = std::array::from_fn(|_| rng.random_range(-1e30..1e30));
        let b: [f32; 4] = std::array::from_fn(|_| rng.random_range(-1e-3..1e-3));
        let (start, end) = (F32x4::from(a), F32x4::from(b));

        assert_eq!(lerp(start, end, 0.0).to_array(), a);
        assert_eq!(lerp(start, end, 1.0).to_array(), b);
        assert_eq!(lerp(end, start, 1.0).to_array(), a);
    }
}

#[test]
fn test_lerp_per_lane_parameter() {
    let start = F64x4::new(0.0, 10.0, -4.0, 1.0);
    let end = F64x4::new(8.0, 20.0, 4.0, 3.0);
    let t = F64x4::new(0.25, 0.5, 1.0, 0.0);

    assert_eq!(lerp_v(start, end, t).to_array(), [2.0, 15.0, 4.0, 1.0]);
    assert_eq!(
        lerp(start, end, 0.75).to_array(),
        lerp_v(start, end, F64x4::splat(0.75)).to_array()
    );
}

fn hermite_basis(t: f64) -> [f64; 4] {
    let (t2, t3) = (t * t, t * t * t);
    [
        2.0 * t3 - 3.0 * t2 + 1.0,
        t3 - 2.0 * t2 + t,
        -2.0 * t3 + 3.0 * t2,
        t3 - t2,
    ]
}

#[test]
fn test_hermite_matches_standard_basis() {
    let p0 = F64x4::new(0.0, 1.0, 2.0, 3.0);
    let t0 = F64x4::new(1.0, 0.0, -1.0, 0.5);
    let p1 = F64x4::new(4.0, -1.0, 2.5, 0.0);
    let t1 = F64x4::new(0.0, 2.0, 1.0, -0.5);

    for step in 0..=10 {
        let t = step as f64 / 10.0;
        let [b0, b1, b2, b3] = hermite_basis(t);
        let result = hermite(p0, t0, p1, t1, t).to_array();

        for lane in 0..4 {
            let expected = p0.to_array()[lane] * b0
                + t0.to_array()[lane] * b1
                + p1.to_array()[lane] * b2
                + t1.to_array()[lane] * b3;
            let error = (result[lane] - expected).abs();
            println!("  t: {t:.1}, lane {lane}: expected {expected:.12}, got {:.12}", result[lane]);
            assert!(error < 1e-12, "hermite error {error:.2e} at t = {t}, lane {lane}");
        }
    }

    assert_eq!(hermite(p0, t0, p1, t1, 0.0).to_array(), p0.to_array());
    assert_eq!(hermite(p0, t0, p1, t1, 1.0).to_array(), p1.to_array());
}

#[test]
fn test_hermite_per_lane_drives_one_basis_each() {
    let p0 = F64x4::new(1.0, 2.0, 3.0, 4.0);
    let t0 = F64x4::new(-1.0, 0.5, 2.0, 0.0);
    let p1 = F64x4::new(5.0, 6.0, 7.0, 8.0);
    let t1 = F64x4::new(0.25, -2.0, 1.0, 3.0);
    let ts = [0.2, 0.4, 0.6, 0.8];

    let b0 = hermite_basis(ts[0])[0];
    let b1 = hermite_basis(ts[1])[1];
    let b2 = hermite_basis(ts[2])[2];
    let b3 = hermite_basis(ts[3])[3];

    let result = hermite_v(p0, t0, p1, t1, F64x4::from(ts)).to_array();
    for lane in 0..4 {
        let expected = p0.to_array()[lane] * b0
            + t0.to_array()[lane] * b1
            + p1.to_array()[lane] * b2
            + t1.to_array()[lane] * b3;
        assert!((result[lane] - expected).abs() < 1e-12, "lane {lane}: {result:?}");
    }
}

#[test]
fn test_hermite_forms_agree_for_uniform_t() {
    let p0 = F32x4::new(0.5, 1.5, -2.0, 3.0);
    let t0 = F32x4::splat(1.0);
    let p1 = F32x4::new(1.0, -1.0, 0.0, 2.0);
    let t1 = F32x4::splat(-0.5);

    for t in [0.0f32, 0.1, 0.33, 0.5, 0.9, 1.0] {
        assert_eq!(
            hermite(p0, t0, p1, t1, t).to_array(),
            hermite_v(p0, t0, p1, t1, F32x4::splat(t)).to_array()
        );
    }
}

#[test]
fn test_catmull_rom() {
    let p0 = F64x4::new(0.0, 0.0, 0.0, 0.0);
    let p1 = F64x4::new(1.0, 2.0, 3.0, 4.0);
    let p2 = F64x4::new(2.0, 4.0, 6.0, 8.0);
    let p3 = F64x4::new(3.0, 6.0, 9.0, 12.0);

    assert_eq!(catmull_rom(p0, p1, p2, p3, 0.0).to_array(), p1.to_array());
    assert_eq!(catmull_rom(p0, p1, p2, p3, 1.0).to_array(), p2.to_array());

    // Collinear, evenly spaced points give a straight line.
    let mid = catmull_rom(p0, p1, p2, p3, 0.5).to_array();
    for (lane, value) in mid.iter().enumerate() {
        let expected = 1.5 * (lane + 1) as f64;
        assert!((value - expected).abs() < 1e-12, "lane {lane}: {value}");
    }

    let t = F64x4::new(0.0, 1.0, 0.5, 0.25);
    let per_lane = catmull_rom_v(p0, p1, p2, p3, t).to_array();
    assert_eq!(per_lane[0], 1.0);
    assert_eq!(per_lane[1], 4.0);
    assert!((per_lane[2] - 4.5).abs() < 1e-12);
    assert!((per_lane[3] - 5.0).abs() < 1e-12);
}

#[test]
fn test_barycentric() {
    let p0 = F64x4::new(0.0, 0.0, 0.0, 1.0);
    let p1 = F64x4::new(4.0, 0.0, 0.0, 1.0);
    let p2 = F64x4::new(0.0, 8.0, 0.0, 1.0);

    assert_eq!(barycentric(p0, p1, p2, 0.0, 0.0).to_array(), p0.to_array());
    assert_eq!(barycentric(p0, p1, p2, 1.0, 0.0).to_array(), p1.to_array());
    assert_eq!(barycentric(p0, p1, p2, 0.0, 1.0).to_array(), p2.to_array());
    assert_eq!(barycentric(p0, p1, p2, 0.25, 0.5).to_array(), [1.0, 4.0, 0.0, 1.0]);

    let f = F64x4::new(1.0, 0.0, 0.5, 0.0);
    let g = F64x4::new(0.0, 1.0, 0.5, 0.0);
    assert_eq!(barycentric_v(p0, p1, p2, f, g).to_array(), [4.0, 8.0, 0.0, 1.0]);
}
