//! Oracle numerics for floating-point conformance checking
//!
//! This crate provides the numeric core used to judge accelerator kernel
//! outputs against higher-precision references:
//! - Bit-level views of f32 values (decomposition, classification)
//! - ULP distance and ULP magnitude, with subnormal flushing
//! - Stepping to adjacent representable values (f32 and f16)
//! - Correctly-rounded acceptance against an f64 reference
//! - Linear and biased sample-range generation for test sweeps
//! - Tolerance-driven batch validation with serializable reports
//!
//! All functions are pure and synchronous; fallible operations return
//! [`fpcheck_common::FpCheckError`] through the crate's `Result` alias.

pub mod bits;
pub mod f16;
pub mod next;
pub mod range;
pub mod round;
pub mod tolerance;
pub mod ulp;

pub use bits::{classify_f32, decompose_f32, F32Fields, FloatClass};
pub use f16::{flush_f16, next_after_f16, ulp_distance_f16};
pub use next::next_after_f32;
pub use range::{
    biased_range, biased_range_f32, boundary_values_f32, linear_range, linear_range_f32,
};
pub use round::correctly_rounded_f32;
pub use tolerance::{AccuracyReport, AccuracyValidator, FailureDetail, Tolerance, ToleranceConfig};
pub use ulp::{ulp_distance_f32, ulp_distance_f32_with, ulp_magnitude_f32, UlpDistance};

pub use fpcheck_common::{Direction, FlushMode};
