//! Scalar `f32` lane vector.

scalar_vector!(F32x4, f32, u32, i32);
