//! Acceptance tolerances and batch accuracy validation.

use fpcheck_common::{FlushMode, FpCheckError, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::round::correctly_rounded_f32;
use crate::ulp::{ulp_distance_f32_with, UlpDistance};

/// Acceptance criterion for a candidate value against an f64 reference.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Tolerance {
    /// Candidate equals the reference quantized to f32 (after flushing).
    Exact,
    /// Candidate within the given number of representable steps of the
    /// quantized reference.
    Ulp(u64),
    /// Absolute difference no larger than the bound.
    Absolute(f64),
    /// Candidate is one of the representable values bracketing the
    /// reference.
    CorrectlyRounded,
}

/// A tolerance plus the subnormal policy it is evaluated under.
///
/// Under [`FlushMode::FlushToZero`] the correctly-rounded criterion accepts
/// both flushed and unflushed results, since flushing hardware is permitted
/// either behaviour for a subnormal outcome.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ToleranceConfig {
    pub tolerance: Tolerance,
    pub flush: FlushMode,
}

impl Default for ToleranceConfig {
    fn default() -> Self {
        Self { tolerance: Tolerance::CorrectlyRounded, flush: FlushMode::Retain }
    }
}

impl ToleranceConfig {
    /// Config with the given tolerance and subnormals retained.
    pub fn new(tolerance: Tolerance) -> Self {
        Self { tolerance, ..Self::default() }
    }

    /// Replace the subnormal policy.
    pub fn with_flush(mut self, flush: FlushMode) -> Self {
        self.flush = flush;
        self
    }

    /// True when `candidate` is acceptable for `reference` under this
    /// configuration.
    pub fn accepts(&self, candidate: f32, reference: f64) -> bool {
        match self.tolerance {
            Tolerance::Exact => {
                if reference.is_nan() {
                    return candidate.is_nan();
                }
                let quantized = self.flush.apply_f32(reference as f32);
                self.flush.apply_f32(candidate) == quantized
            }
            Tolerance::Ulp(limit) => {
                if reference.is_nan() {
                    return candidate.is_nan();
                }
                let quantized = reference as f32;
                if quantized.is_infinite() {
                    return candidate == quantized;
                }
                ulp_distance_f32_with(candidate, quantized, self.flush).within(limit)
            }
            Tolerance::Absolute(bound) => {
                if reference.is_nan() {
                    return candidate.is_nan();
                }
                if f64::from(candidate) == reference {
                    return true;
                }
                (f64::from(candidate) - reference).abs() <= bound
            }
            Tolerance::CorrectlyRounded => {
                let (accept_flushed, accept_unflushed) = match self.flush {
                    FlushMode::Retain => (false, true),
                    FlushMode::FlushToZero => (true, true),
                };
                correctly_rounded_f32(candidate, reference, accept_flushed, accept_unflushed)
            }
        }
    }
}

/// Detail of the first failing element in a batch validation.
#[derive(Debug, Clone, Serialize)]
pub struct FailureDetail {
    pub index: usize,
    pub candidate: f32,
    /// Exact bit pattern of the candidate, for NaN/zero-sign triage.
    pub candidate_bits: String,
    pub reference: f64,
    /// Representable-step distance to the quantized reference, if finite.
    pub ulp_distance: Option<u64>,
    pub absolute_error: f64,
}

/// Outcome of validating a candidate slice against references.
#[derive(Debug, Clone, Serialize)]
pub struct AccuracyReport {
    pub total: usize,
    pub failures: usize,
    /// Largest finite representable-step distance observed.
    pub max_ulp_distance: Option<u64>,
    pub max_absolute_error: f64,
    pub mean_absolute_error: f64,
    pub first_failure: Option<FailureDetail>,
    pub passed: bool,
}

/// Batch validator applying one tolerance configuration across a slice of
/// candidate outputs.
#[derive(Debug, Clone, Default)]
pub struct AccuracyValidator {
    config: ToleranceConfig,
}

impl AccuracyValidator {
    pub fn new(config: ToleranceConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ToleranceConfig {
        &self.config
    }

    /// Validate `candidates` element-wise against `references`.
    ///
    /// Slices must be the same length. Error statistics are accumulated
    /// over elements where both sides are finite; every failure is logged
    /// at debug level, and the first is captured in the report.
    pub fn validate(&self, candidates: &[f32], references: &[f64]) -> Result<AccuracyReport> {
        if candidates.len() != references.len() {
            return Err(FpCheckError::LengthMismatch {
                candidates: candidates.len(),
                references: references.len(),
            });
        }

        let mut failures = 0usize;
        let mut first_failure = None;
        let mut max_ulp: Option<u64> = None;
        let mut max_abs = 0.0f64;
        let mut abs_sum = 0.0f64;
        let mut abs_count = 0usize;

        for (i, (&candidate, &reference)) in candidates.iter().zip(references).enumerate() {
            let ulp = ulp_distance_f32_with(candidate, reference as f32, self.config.flush);
            if let UlpDistance::Finite(d) = ulp {
                max_ulp = Some(max_ulp.map_or(d, |m| m.max(d)));
            }
            let abs_err = (f64::from(candidate) - reference).abs();
            if abs_err.is_finite() {
                max_abs = max_abs.max(abs_err);
                abs_sum += abs_err;
                abs_count += 1;
            }

            if !self.config.accepts(candidate, reference) {
                failures += 1;
                debug!(
                    "tolerance check failed at index {}: candidate {:e} ({:#010x}) vs reference {:e}",
                    i,
                    candidate,
                    candidate.to_bits(),
                    reference
                );
                if first_failure.is_none() {
                    first_failure = Some(FailureDetail {
                        index: i,
                        candidate,
                        candidate_bits: format!("{:#010x}", candidate.to_bits()),
                        reference,
                        ulp_distance: ulp.finite(),
                        absolute_error: abs_err,
                    });
                }
            }
        }

        let mean_abs = if abs_count > 0 { abs_sum / abs_count as f64 } else { 0.0 };
        Ok(AccuracyReport {
            total: candidates.len(),
            failures,
            max_ulp_distance: max_ulp,
            max_absolute_error: max_abs,
            mean_absolute_error: mean_abs,
            first_failure,
            passed: failures == 0,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_accepts_the_quantized_reference() {
        let config = ToleranceConfig::new(Tolerance::Exact);
        assert!(config.accepts(0.1f64 as f32, 0.1));
        assert!(!config.accepts(0.1f64 as f32 + f32::EPSILON, 0.1));
    }

    #[test]
    fn exact_matches_nan_to_nan() {
        let config = ToleranceConfig::new(Tolerance::Exact);
        assert!(config.accepts(f32::NAN, f64::NAN));
        assert!(!config.accepts(1.0, f64::NAN));
    }

    #[test]
    fn ulp_zero_is_exact_quantization() {
        let config = ToleranceConfig::new(Tolerance::Ulp(0));
        assert!(config.accepts(0.5, 0.5));
        assert!(!config.accepts(0.5 + f32::EPSILON, 0.5));
    }

    #[test]
    fn ulp_limit_admits_nearby_values() {
        let config = ToleranceConfig::new(Tolerance::Ulp(2));
        let reference = 1.0f64;
        let two_up = f32::from_bits(1.0f32.to_bits() + 2);
        let three_up = f32::from_bits(1.0f32.to_bits() + 3);
        assert!(config.accepts(two_up, reference));
        assert!(!config.accepts(three_up, reference));
    }

    #[test]
    fn ulp_handles_infinite_reference() {
        let config = ToleranceConfig::new(Tolerance::Ulp(4));
        assert!(config.accepts(f32::INFINITY, f64::INFINITY));
        assert!(!config.accepts(f32::MAX, f64::INFINITY));
    }

    #[test]
    fn absolute_bound_is_inclusive() {
        let config = ToleranceConfig::new(Tolerance::Absolute(0.5));
        assert!(config.accepts(1.5, 1.0));
        assert!(!config.accepts(1.6, 1.0));
    }

    #[test]
    fn absolute_accepts_equal_infinities() {
        let config = ToleranceConfig::new(Tolerance::Absolute(0.0));
        assert!(config.accepts(f32::INFINITY, f64::INFINITY));
        assert!(!config.accepts(f32::INFINITY, f64::NEG_INFINITY));
    }

    #[test]
    fn correctly_rounded_under_flush_accepts_either_form() {
        let sub = fpcheck_common::consts::F32_SUBNORMAL_MIN_POSITIVE;
        let config =
            ToleranceConfig::new(Tolerance::CorrectlyRounded).with_flush(FlushMode::FlushToZero);
        assert!(config.accepts(0.0, f64::from(sub)));
        assert!(config.accepts(sub, f64::from(sub)));
    }

    #[test]
    fn validate_passes_identical_slices() {
        let validator = AccuracyValidator::new(ToleranceConfig::new(Tolerance::Ulp(0)));
        let candidates = [0.0f32, 1.0, -2.5, 100.0];
        let references: Vec<f64> = candidates.iter().map(|&c| f64::from(c)).collect();
        let report = validator.validate(&candidates, &references).unwrap();
        assert!(report.passed);
        assert_eq!(report.failures, 0);
        assert_eq!(report.max_ulp_distance, Some(0));
        assert_eq!(report.max_absolute_error, 0.0);
    }

    #[test]
    fn validate_reports_the_first_failure() {
        let validator = AccuracyValidator::new(ToleranceConfig::new(Tolerance::Exact));
        let report = validator.validate(&[1.0, 2.5, 3.0], &[1.0, 2.0, 4.0]).unwrap();
        assert!(!report.passed);
        assert_eq!(report.failures, 2);
        let first = report.first_failure.unwrap();
        assert_eq!(first.index, 1);
        assert_eq!(first.candidate, 2.5);
        assert_eq!(first.absolute_error, 0.5);
    }

    #[test]
    fn validate_rejects_mismatched_lengths() {
        let validator = AccuracyValidator::default();
        assert!(matches!(
            validator.validate(&[1.0], &[1.0, 2.0]),
            Err(FpCheckError::LengthMismatch { candidates: 1, references: 2 })
        ));
    }

    #[test]
    fn validate_empty_slices_pass_vacuously() {
        let validator = AccuracyValidator::default();
        let report = validator.validate(&[], &[]).unwrap();
        assert!(report.passed);
        assert_eq!(report.total, 0);
        assert!(report.first_failure.is_none());
    }

    #[test]
    fn report_serializes_with_bit_pattern() {
        let validator = AccuracyValidator::new(ToleranceConfig::new(Tolerance::Exact));
        let report = validator.validate(&[2.0], &[1.0]).unwrap();
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["failures"], 1);
        assert_eq!(json["first_failure"]["candidate_bits"], "0x40000000");
    }
}
