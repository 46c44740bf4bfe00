//! Named boundary values of the f32 and f16 encodings.
//!
//! The standard library covers the normal-range extremes (`f32::MAX`,
//! `f32::MIN_POSITIVE`); the subnormal extremes are spelled out here by bit
//! pattern so tests and the CLI never depend on decimal literals rounding
//! the right way.

use half::f16;

/// Smallest positive subnormal f32 (bit pattern `0x0000_0001`).
pub const F32_SUBNORMAL_MIN_POSITIVE: f32 = f32::from_bits(0x0000_0001);

/// Largest positive subnormal f32 (bit pattern `0x007f_ffff`).
pub const F32_SUBNORMAL_MAX_POSITIVE: f32 = f32::from_bits(0x007f_ffff);

/// Smallest positive subnormal f16 (bit pattern `0x0001`).
pub const F16_SUBNORMAL_MIN_POSITIVE: f16 = f16::from_bits(0x0001);

/// Largest positive subnormal f16 (bit pattern `0x03ff`).
pub const F16_SUBNORMAL_MAX_POSITIVE: f16 = f16::from_bits(0x03ff);

/// Smallest positive normal f16 (bit pattern `0x0400`).
pub const F16_MIN_POSITIVE: f16 = f16::from_bits(0x0400);
