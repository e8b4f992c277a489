//! Lane-vector backends and the build-time binding between them.
//!
//! `build.rs` emits exactly one of two cfg flags:
//!
//! - `sse`: x86 / x86_64 targets with SSE2, bound to [`sse`]
//! - `fallback`: every other target (or `--features force-scalar`), bound to [`scalar`]
//!
//! The bound backend's `F32x4` / `F64x4` are re-exported here and at the
//! crate root. The scalar backend is compiled in every build so the active
//! backend can be checked against it.

use std::fmt;

pub mod lane;

pub mod traits;

pub mod scalar;

#[cfg(sse)]
pub mod sse;

pub mod slice;

#[cfg(sse)]
pub use sse::{F32x4, F64x4};

#[cfg(not(sse))]
pub use scalar::{F32x4, F64x4};

/// Backend implementations that can be bound at build time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Backend {
    /// Portable per-lane Rust arithmetic.
    Scalar,
    /// 128-bit SSE2 registers (`F64x4` as an `xy`/`zw` pair).
    Sse2,
}

impl Backend {
    /// Short lowercase name, the same spelling `QUADLANE_BACKEND` accepts.
    pub const fn name(self) -> &'static str {
        match self {
            Backend::Scalar => "scalar",
            Backend::Sse2 => "sse",
        }
    }

    /// Whether the backend uses hardware vector registers.
    pub const fn is_accelerated(self) -> bool {
        matches!(self, Backend::Sse2)
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The backend bound to [`F32x4`] and [`F64x4`] in this build.
#[cfg(sse)]
pub const BACKEND: Backend = Backend::Sse2;

/// The backend bound to [`F32x4`] and [`F64x4`] in this build.
#[cfg(not(sse))]
pub const BACKEND: Backend = Backend::Scalar;

/// Logs the bound backend at `info` level.
pub fn log_backend() {
    log::info!(
        "quadlane backend: {} (accelerated: {})",
        BACKEND,
        BACKEND.is_accelerated()
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backend_names_round_trip_through_display() {
        assert_eq!(Backend::Scalar.to_string(), "scalar");
        assert_eq!(Backend::Sse2.to_string(), "sse");
        assert!(!Backend::Scalar.is_accelerated());
    }

    #[cfg(sse)]
    #[test]
    fn sse_cfg_binds_sse_backend() {
        assert_eq!(BACKEND, Backend::Sse2);
    }

    #[cfg(fallback)]
    #[test]
    fn fallback_cfg_binds_scalar_backend() {
        assert_eq!(BACKEND, Backend::Scalar);
    }
}
