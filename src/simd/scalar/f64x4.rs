//! Scalar `f64` lane vector.

scalar_vector!(F64x4, f64, u64, i64);
