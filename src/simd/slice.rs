//! Slice kernels built on the lane vectors.
//!
//! [`SimdMath`] runs one of the crate's vector kernels over a whole `[f32]`
//! or `[f64]`, four lanes at a time:
//!
//! ```
//! use quadlane::simd::slice::SimdMath;
//!
//! let angles = vec![0.0f32, std::f32::consts::FRAC_PI_2, std::f32::consts::PI];
//! let sines = angles.sin();
//! assert!((sines[1] - 1.0).abs() < 1e-6);
//! ```
//!
//! # Work splitting
//!
//! | Input length | Strategy |
//! |---|---|
//! | `< PARALLEL_THRESHOLD` | one thread, full 4-lane blocks then a zero-filled partial block |
//! | `>= PARALLEL_THRESHOLD` | rayon `par_chunks_mut` with chunks of `PARALLEL_CHUNK_SIZE` elements |
//!
//! Chunk sizes are multiples of the lane count, so only the last chunk of
//! the slice ever carries a partial block. Results are identical for both
//! strategies.

use rayon::prelude::*;

use crate::simd::traits::{SimdVec, LANE_COUNT};
use crate::simd::{F32x4, F64x4};
use crate::{arith, rounding, transcendental};

/// Input length from which [`par_map`] splits work across the rayon pool.
pub const PARALLEL_THRESHOLD: usize = 1 << 18;

/// Elements per rayon task (a multiple of [`LANE_COUNT`]).
pub const PARALLEL_CHUNK_SIZE: usize = 1 << 14;

/// Applies `kernel` to `input` block by block, writing into `output`.
#[inline(always)]
fn map_into<V, F>(input: &[V::Scalar], output: &mut [V::Scalar], kernel: &F)
where
    V: SimdVec,
    F: Fn(V) -> V,
{
    debug_assert_eq!(input.len(), output.len());

    let mut src = input.chunks_exact(LANE_COUNT);
    let mut dst = output.chunks_exact_mut(LANE_COUNT);

    for (a, c) in (&mut src).zip(&mut dst) {
        // SAFETY: both chunks hold exactly LANE_COUNT scalars.
        unsafe {
            let v = V::load(a.as_ptr(), LANE_COUNT);
            kernel(v).store(c.as_mut_ptr(), LANE_COUNT);
        }
    }

    let rest = src.remainder();
    if !rest.is_empty() {
        let tail = dst.into_remainder();
        // SAFETY: `rest` and `tail` have the same length, between 1 and 3.
        unsafe {
            let v = V::load(rest.as_ptr(), rest.len());
            kernel(v).store(tail.as_mut_ptr(), rest.len());
        }
    }
}

/// Applies a vector kernel to every element of `input` on the calling thread.
///
/// The last partial block is loaded with zero fill; only its valid lanes are
/// written back.
pub fn map<V, F>(input: &[V::Scalar], kernel: F) -> Vec<V::Scalar>
where
    V: SimdVec,
    F: Fn(V) -> V,
{
    let mut output = vec![V::Scalar::default(); input.len()];
    map_into(input, &mut output, &kernel);
    output
}

/// Like [`map`], but splits inputs of at least [`PARALLEL_THRESHOLD`]
/// elements across the rayon thread pool.
pub fn par_map<V, F>(input: &[V::Scalar], kernel: F) -> Vec<V::Scalar>
where
    V: SimdVec,
    F: Fn(V) -> V + Sync,
{
    if input.len() < PARALLEL_THRESHOLD {
        return map(input, kernel);
    }

    let chunk_size = ((PARALLEL_CHUNK_SIZE / LANE_COUNT) * LANE_COUNT).max(LANE_COUNT);
    log::debug!(
        "par_map: {} elements in {} chunks of {}",
        input.len(),
        input.len().div_ceil(chunk_size),
        chunk_size
    );

    let mut output = vec![V::Scalar::default(); input.len()];
    output
        .par_chunks_mut(chunk_size)
        .zip(input.par_chunks(chunk_size))
        .for_each(|(c_chunk, a_chunk)| map_into(a_chunk, c_chunk, &kernel));
    output
}

/// Elementwise math over scalar slices using the bound backend's vectors.
///
/// Every method returns a new `Vec` of the same length; an empty slice gives
/// an empty `Vec`. Accuracy matches the underlying vector kernels.
pub trait SimdMath {
    type Output;

    fn abs(&self) -> Self::Output;

    fn sqrt(&self) -> Self::Output;

    fn floor(&self) -> Self::Output;

    fn ceil(&self) -> Self::Output;

    /// Round half to even.
    fn round(&self) -> Self::Output;

    fn trunc(&self) -> Self::Output;

    fn sin(&self) -> Self::Output;

    fn cos(&self) -> Self::Output;

    fn tan(&self) -> Self::Output;

    fn asin(&self) -> Self::Output;

    fn acos(&self) -> Self::Output;

    fn atan(&self) -> Self::Output;

    /// `e^x`.
    fn exp(&self) -> Self::Output;

    fn exp2(&self) -> Self::Output;

    /// Natural logarithm.
    fn ln(&self) -> Self::Output;

    fn log2(&self) -> Self::Output;

    fn log10(&self) -> Self::Output;

    fn sinh(&self) -> Self::Output;

    fn cosh(&self) -> Self::Output;

    fn tanh(&self) -> Self::Output;
}

macro_rules! impl_simd_math {
    ($scalar:ty, $vector:ty) => {
        impl SimdMath for [$scalar] {
            type Output = Vec<$scalar>;

            #[inline]
            fn abs(&self) -> Self::Output {
                par_map(self, rounding::abs::<$vector>)
            }

            #[inline]
            fn sqrt(&self) -> Self::Output {
                par_map(self, arith::sqrt::<$vector>)
            }

            #[inline]
            fn floor(&self) -> Self::Output {
                par_map(self, rounding::floor::<$vector>)
            }

            #[inline]
            fn ceil(&self) -> Self::Output {
                par_map(self, rounding::ceiling::<$vector>)
            }

            #[inline]
            fn round(&self) -> Self::Output {
                par_map(self, rounding::round::<$vector>)
            }

            #[inline]
            fn trunc(&self) -> Self::Output {
                par_map(self, rounding::truncate::<$vector>)
            }

            #[inline]
            fn sin(&self) -> Self::Output {
                par_map(self, transcendental::sin::<$vector>)
            }

            #[inline]
            fn cos(&self) -> Self::Output {
                par_map(self, transcendental::cos::<$vector>)
            }

            #[inline]
            fn tan(&self) -> Self::Output {
                par_map(self, transcendental::tan::<$vector>)
            }

            #[inline]
            fn asin(&self) -> Self::Output {
                par_map(self, transcendental::asin::<$vector>)
            }

            #[inline]
            fn acos(&self) -> Self::Output {
                par_map(self, transcendental::acos::<$vector>)
            }

            #[inline]
            fn atan(&self) -> Self::Output {
                par_map(self, transcendental::atan::<$vector>)
            }

            #[inline]
            fn exp(&self) -> Self::Output {
                par_map(self, transcendental::exp_e::<$vector>)
            }

            #[inline]
            fn exp2(&self) -> Self::Output {
                par_map(self, transcendental::exp2::<$vector>)
            }

            #[inline]
            fn ln(&self) -> Self::Output {
                par_map(self, transcendental::log_e::<$vector>)
            }

            #[inline]
            fn log2(&self) -> Self::Output {
                par_map(self, transcendental::log2::<$vector>)
            }

            #[inline]
            fn log10(&self) -> Self::Output {
                par_map(self, transcendental::log10::<$vector>)
            }

            #[inline]
            fn sinh(&self) -> Self::Output {
                par_map(self, transcendental::sinh::<$vector>)
            }

            #[inline]
            fn cosh(&self) -> Self::Output {
                par_map(self, transcendental::cosh::<$vector>)
            }

            #[inline]
            fn tanh(&self) -> Self::Output {
                par_map(self, transcendental::tanh::<$vector>)
            }
        }
    };
}

impl_simd_math!(f32, F32x4);
impl_simd_math!(f64, F64x4);
