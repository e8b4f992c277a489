//! SSE2 implementations for 128-bit vector operations.
//!
//! This module binds the lane vectors to Intel's Streaming SIMD Extensions 2,
//! which every x86_64 processor provides and which `build.rs` detects from the
//! target's feature list on 32-bit x86.
//!
//! # Available Types
//!
//! - [`F32x4`]: one `__m128` holding four `f32` lanes
//! - [`F64x4`]: two `__m128d` registers, `xy` (lanes 0-1) and `zw` (lanes 2-3)
//!
//! # Instruction Set
//!
//! Only SSE2 instructions are used. In particular rounding is done with the
//! add-and-subtract-2^mantissa trick instead of SSE4.1 `roundps`, and `f64`
//! lane conversions go through the 1.5 * 2^52 magic constant because SSE2 has
//! no packed 64-bit integer conversion. Every result is bit-identical to the
//! scalar backend.
//!
//! # Conditional Compilation
//!
//! This module is only compiled when `build.rs` emits the `sse` cfg flag.

#![allow(unused_unsafe)]

pub mod f32x4;

pub mod f64x4;

pub use f32x4::F32x4;
pub use f64x4::F64x4;
