//! One-off tolerance check of a candidate value against a reference.

use anyhow::Result;
use clap::Args;
use console::style;
use fpcheck_math::{AccuracyValidator, Tolerance, ToleranceConfig};
use serde_json::json;

use crate::config::{CliConfig, OutputFormat};
use crate::parse::{parse_f32, parse_f64};

/// Check command arguments
#[derive(Args)]
pub struct CheckCommand {
    /// Candidate value produced by the implementation under test
    #[arg(value_name = "CANDIDATE")]
    pub candidate: String,

    /// Higher-precision reference value
    #[arg(value_name = "REFERENCE")]
    pub reference: String,

    /// Accept candidates within N representable steps
    #[arg(long, value_name = "N", conflicts_with_all = ["abs", "rounded"])]
    pub ulp: Option<u64>,

    /// Accept candidates within an absolute error bound
    #[arg(long, value_name = "BOUND", conflicts_with_all = ["ulp", "rounded"])]
    pub abs: Option<f64>,

    /// Accept either representable value bracketing the reference
    #[arg(long, default_value_t = false, conflicts_with_all = ["ulp", "abs"])]
    pub rounded: bool,

    /// Output format as JSON
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

impl CheckCommand {
    fn tolerance(&self) -> Tolerance {
        if let Some(n) = self.ulp {
            Tolerance::Ulp(n)
        } else if let Some(bound) = self.abs {
            Tolerance::Absolute(bound)
        } else if self.rounded {
            Tolerance::CorrectlyRounded
        } else {
            Tolerance::Exact
        }
    }

    pub fn execute(&self, config: &CliConfig) -> Result<()> {
        let candidate = parse_f32(&self.candidate)?;
        let reference = parse_f64(&self.reference)?;
        let tolerance_config =
            ToleranceConfig::new(self.tolerance()).with_flush(config.checks.flush);

        let validator = AccuracyValidator::new(tolerance_config);
        let report = validator.validate(&[candidate], &[reference])?;

        if self.json || config.checks.output == OutputFormat::Json {
            let output = json!({
                "candidate": format!("{candidate:e}"),
                "candidate_bits": format!("{:#010x}", candidate.to_bits()),
                "reference": format!("{reference:e}"),
                "tolerance": tolerance_config.tolerance,
                "flush": tolerance_config.flush,
                "ulp_distance": report.max_ulp_distance,
                "absolute_error": report.max_absolute_error,
                "passed": report.passed,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        } else {
            let verdict = if report.passed {
                style("PASS").green().bold()
            } else {
                style("FAIL").red().bold()
            };
            println!(
                "{verdict}  candidate {candidate:e} ({:#010x}) vs reference {reference:e}",
                candidate.to_bits()
            );
            match report.max_ulp_distance {
                Some(d) => println!("  ulp distance:    {d}"),
                None => println!("  ulp distance:    infinite"),
            }
            println!("  absolute error:  {:e}", report.max_absolute_error);
        }

        if !report.passed {
            std::process::exit(crate::exit::EXIT_CHECK_FAIL);
        }
        Ok(())
    }
}
