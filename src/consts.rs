//! Process-wide constant table.
//!
//! Values are stored once as `f64` and converted to the lane type when a
//! kernel splats them (see [`SimdVec::constant`](crate::SimdVec::constant)),
//! so `f32` kernels use the correctly rounded `f32` of each entry. Bit-pattern
//! constants (sign mask, infinity, quiet NaN) live on
//! [`LaneScalar`](crate::LaneScalar) because they depend on the lane width.

pub const ONE: f64 = 1.0;
pub const HALF: f64 = 0.5;
pub const TWO: f64 = 2.0;

pub const PI: f64 = std::f64::consts::PI;
pub const NEG_PI: f64 = -PI;
pub const TWO_PI: f64 = std::f64::consts::TAU;
pub const HALF_PI: f64 = std::f64::consts::FRAC_PI_2;
pub const RECIPROCAL_TWO_PI: f64 = 0.5 * std::f64::consts::FRAC_1_PI;

pub const LOG2_E: f64 = std::f64::consts::LOG2_E;
pub const LOG2_10: f64 = std::f64::consts::LOG2_10;
pub const LN_2: f64 = std::f64::consts::LN_2;
pub const LOG10_2: f64 = std::f64::consts::LOG10_2;

/// sin(x) / x as a polynomial in x², for |x| <= π/2.
pub const SIN_COEFFICIENTS: [f64; 6] = [
    1.0,
    -0.166_666_67,
    0.008_333_331,
    -0.000_198_408_74,
    2.752_556_2e-6,
    -2.388_985_9e-8,
];

/// cos(x) as a polynomial in x², for |x| <= π/2.
pub const COS_COEFFICIENTS: [f64; 6] = [
    1.0,
    -0.5,
    0.041_666_638,
    -0.001_388_837_8,
    2.476_049_5e-5,
    -2.605_161_5e-7,
];

/// acos(x) / sqrt(1 - x) as a polynomial in x, for 0 <= x <= 1.
pub const ARC_COEFFICIENTS: [f64; 8] = [
    1.570_796_305_0,
    -0.214_598_801_6,
    0.088_978_987_4,
    -0.050_174_304_6,
    0.030_891_881_0,
    -0.017_088_125_6,
    0.006_670_090_1,
    -0.001_262_491_1,
];

/// atan(x) / x as a polynomial in x², for |x| <= 1.
pub const ATAN_COEFFICIENTS: [f64; 9] = [
    1.0,
    -0.333_331_452_8,
    0.199_935_508_5,
    -0.142_088_994_4,
    0.106_562_639_3,
    -0.075_289_640_0,
    0.042_909_613_8,
    -0.016_165_736_7,
    0.002_866_225_7,
];

/// 2^-y as a polynomial in y, for -1 < y < 1.
pub const EXP2_COEFFICIENTS: [f64; 8] = [
    1.0,
    -0.693_147_180_800_171_9,
    0.240_226_652_860_003_28,
    -0.055_504_117_960_707_54,
    0.009_616_962_676_970_032,
    -0.001_333_269_965_555_402_3,
    0.000_156_363_508_699_003_6,
    -1.542_962_971_304_995_8e-5,
];

/// log2(1 + y) / y as a polynomial in y, for 0 <= y < 1.
pub const LOG2_COEFFICIENTS: [f64; 8] = [
    1.442_693,
    -0.721_242,
    0.479_384,
    -0.350_295,
    0.248_590,
    -0.145_700,
    0.057_148,
    -0.010_578,
];
