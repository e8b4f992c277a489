//! Portable 4-lane vector math.
//!
//! `F32x4` and `F64x4` hold four lanes (x, y, z, w) of `f32` or `f64`. The
//! register-level backend behind them is chosen once at build time: SSE2 on
//! x86 / x86_64 targets that have it, the portable scalar backend everywhere
//! else (or when the `force-scalar` feature is on). Every operation in
//! [`arith`], [`compare`], [`geometry`], [`interpolate`], [`rounding`],
//! [`transcendental`] and [`vector`] is written once over [`SimdVec`], so the
//! two backends produce the same bits.
//!
//! ```
//! use quadlane::{geometry, transcendental, F32x4, SimdVec};
//!
//! let x = F32x4::new(1.0, 0.0, 0.0, 0.0);
//! let y = F32x4::new(0.0, 1.0, 0.0, 0.0);
//! assert_eq!(geometry::cross3(x, y).to_array(), [0.0, 0.0, 1.0, 0.0]);
//!
//! let s = transcendental::sin(F32x4::splat(std::f32::consts::FRAC_PI_2));
//! assert!((s.lane(0) - 1.0).abs() < 1e-6);
//! ```

pub mod arith;
pub mod compare;
pub mod consts;
pub mod error;
pub mod geometry;
pub mod interpolate;
pub mod rounding;
pub mod simd;
pub mod transcendental;
pub mod vector;

pub use error::{KernelError, Result};
pub use simd::lane::LaneScalar;
pub use simd::slice::SimdMath;
pub use simd::traits::{SimdVec, LANE_COUNT};
pub use simd::{Backend, F32x4, F64x4, BACKEND};
