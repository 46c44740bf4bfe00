//! Sample-range generation for numeric test sweeps.
//!
//! Ranges are computed in f64 and optionally quantized to f32; every sample
//! is guaranteed to lie in the closed `[min, max]` interval, with the first
//! and last samples exactly on the endpoints.

use fpcheck_common::{consts, FpCheckError, Result};

fn check_range_params(min: f64, max: f64, steps: usize) -> Result<()> {
    if steps == 0 {
        return Err(FpCheckError::InvalidStepCount { steps });
    }
    if !min.is_finite() || !max.is_finite() || min > max {
        return Err(FpCheckError::InvalidRange { min, max });
    }
    Ok(())
}

// Endpoint-exact interpolation: t=0 gives exactly a, t=1 exactly b.
fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a * (1.0 - t) + b * t
}

/// Evenly spaced samples across `[min, max]`.
///
/// A single step yields `[min]`; otherwise the samples interpolate from
/// `min` to `max` inclusive.
pub fn linear_range(min: f64, max: f64, steps: usize) -> Result<Vec<f64>> {
    check_range_params(min, max, steps)?;
    if steps == 1 {
        return Ok(vec![min]);
    }
    let last = (steps - 1) as f64;
    Ok((0..steps)
        .map(|i| lerp(min, max, i as f64 / last).clamp(min, max))
        .collect())
}

/// Samples across `[min, max]` skewed quadratically toward `min`.
///
/// The normalized parameter is squared before interpolating, so sample
/// density is highest near `min` and falls off toward `max`.
pub fn biased_range(min: f64, max: f64, steps: usize) -> Result<Vec<f64>> {
    check_range_params(min, max, steps)?;
    if steps == 1 {
        return Ok(vec![min]);
    }
    let last = (steps - 1) as f64;
    Ok((0..steps)
        .map(|i| {
            let t = i as f64 / last;
            lerp(min, max, t * t).clamp(min, max)
        })
        .collect())
}

/// [`linear_range`] with each sample quantized to f32.
pub fn linear_range_f32(min: f32, max: f32, steps: usize) -> Result<Vec<f32>> {
    let samples = linear_range(f64::from(min), f64::from(max), steps)?;
    Ok(samples.into_iter().map(|s| (s as f32).clamp(min, max)).collect())
}

/// [`biased_range`] with each sample quantized to f32.
pub fn biased_range_f32(min: f32, max: f32, steps: usize) -> Result<Vec<f32>> {
    let samples = biased_range(f64::from(min), f64::from(max), steps)?;
    Ok(samples.into_iter().map(|s| (s as f32).clamp(min, max)).collect())
}

/// Canonical boundary values of the f32 encoding, in ascending order.
///
/// The sweep used to seed edge-case oracles: infinities, normal-range
/// extremes, ±1, subnormal extremes of both signs, and both zeros.
pub fn boundary_values_f32() -> Vec<f32> {
    vec![
        f32::NEG_INFINITY,
        f32::MIN,
        -1.0,
        -f32::MIN_POSITIVE,
        -consts::F32_SUBNORMAL_MAX_POSITIVE,
        -consts::F32_SUBNORMAL_MIN_POSITIVE,
        -0.0,
        0.0,
        consts::F32_SUBNORMAL_MIN_POSITIVE,
        consts::F32_SUBNORMAL_MAX_POSITIVE,
        f32::MIN_POSITIVE,
        1.0,
        f32::MAX,
        f32::INFINITY,
    ]
}
