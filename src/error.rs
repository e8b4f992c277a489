//! Error types for quadlane operations.
//!
//! Numeric edge cases (division by zero, zero-length normalization,
//! out-of-domain logarithms) are never errors: every kernel is total and
//! returns a defined value. The only failures are caller contract violations.
//! The panicking entry points (`load4`, `swizzle`, `clamp`, ...) log them and
//! abort the call; the `try_*` variants hand them back as [`KernelError`].

use std::fmt;

/// Contract violations detected by the public entry points.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KernelError {
    /// A caller buffer holds fewer scalars than the operation reads or writes.
    BufferTooSmall {
        /// Number of scalars the operation needs.
        required: usize,
        /// Length of the buffer that was passed.
        actual: usize,
    },
    /// A lane, swizzle or permute index is outside its valid range.
    IndexOutOfRange {
        /// The offending index.
        index: usize,
        /// Exclusive upper bound for the index.
        bound: usize,
    },
    /// A clamp range has `min > max` (or an unordered bound) in some lane.
    InvertedRange {
        /// First lane where the range is inverted.
        lane: usize,
    },
}

impl fmt::Display for KernelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KernelError::BufferTooSmall { required, actual } => write!(
                f,
                "Buffer too small: {} scalars required, {} available",
                required, actual
            ),
            KernelError::IndexOutOfRange { index, bound } => {
                write!(f, "Index out of range: {} is not below {}", index, bound)
            }
            KernelError::InvertedRange { lane } => {
                write!(f, "Inverted range: min > max in lane {}", lane)
            }
        }
    }
}

impl std::error::Error for KernelError {}

/// Result type alias for quadlane operations.
pub type Result<T> = std::result::Result<T, KernelError>;

/// Creates a buffer-length error.
pub fn buffer_too_small(required: usize, actual: usize) -> KernelError {
    KernelError::BufferTooSmall { required, actual }
}

/// Creates an index error.
pub fn index_out_of_range(index: usize, bound: usize) -> KernelError {
    KernelError::IndexOutOfRange { index, bound }
}

/// Creates an inverted clamp range error.
pub fn inverted_range(lane: usize) -> KernelError {
    KernelError::InvertedRange { lane }
}

/// Reports a contract violation and aborts the call.
#[cold]
#[track_caller]
pub(crate) fn violation(error: KernelError) -> ! {
    log::error!("contract violation: {error}");
    panic!("{error}")
}

/// Unwraps the result of a checked entry point, treating an error as a
/// contract violation.
#[inline(always)]
#[track_caller]
pub(crate) fn enforce<T>(result: Result<T>) -> T {
    match result {
        Ok(value) => value,
        Err(error) => violation(error),
    }
}
