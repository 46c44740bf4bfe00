//! Error types shared across the fpcheck crates.

use thiserror::Error;

/// Errors produced by the fpcheck libraries.
#[derive(Debug, Error)]
pub enum FpCheckError {
    #[error("invalid sample range: min {min} must not exceed max {max}, and both must be finite")]
    InvalidRange { min: f64, max: f64 },

    #[error("invalid step count: {steps} (must be strictly positive)")]
    InvalidStepCount { steps: usize },

    #[error("length mismatch: {candidates} candidate values vs {references} reference values")]
    LengthMismatch { candidates: usize, references: usize },
}

/// Convenience result alias.
pub type Result<T> = std::result::Result<T, FpCheckError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_range_display_names_both_endpoints() {
        let e = FpCheckError::InvalidRange { min: 2.0, max: 1.0 };
        let msg = e.to_string();
        assert!(msg.contains('2') && msg.contains('1'), "unexpected message: {msg}");
    }

    #[test]
    fn length_mismatch_display_names_both_lengths() {
        let e = FpCheckError::LengthMismatch { candidates: 3, references: 4 };
        assert!(e.to_string().contains("3 candidate"));
    }
}
