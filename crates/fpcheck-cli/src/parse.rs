//! Value-argument parsing.
//!
//! Accepts ordinary decimal literals (including `inf`, `-inf`, and `nan`,
//! which the standard float parser understands) plus exact bit patterns
//! written as `0xXXXXXXXX`, the only way to name a specific NaN payload or
//! distinguish `-0.0` unambiguously on a command line.

use anyhow::{Context, Result};

/// Parse an f32 argument: decimal literal, named special, or a `0x` bit
/// pattern of exactly the f32 encoding.
pub fn parse_f32(input: &str) -> Result<f32> {
    let s = input.trim();
    if let Some(hex) = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        let bits = u32::from_str_radix(hex, 16)
            .with_context(|| format!("invalid f32 bit pattern '{s}'"))?;
        return Ok(f32::from_bits(bits));
    }
    s.parse::<f32>().with_context(|| format!("could not parse '{s}' as an f32 value"))
}

/// Parse an f64 argument, with `0x` bit patterns covering the f64 encoding.
pub fn parse_f64(input: &str) -> Result<f64> {
    let s = input.trim();
    if let Some(hex) = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        let bits = u64::from_str_radix(hex, 16)
            .with_context(|| format!("invalid f64 bit pattern '{s}'"))?;
        return Ok(f64::from_bits(bits));
    }
    s.parse::<f64>().with_context(|| format!("could not parse '{s}' as an f64 value"))
}
