//! Sample-range generation.

use anyhow::Result;
use clap::Args;
use fpcheck_math::{biased_range, biased_range_f32, linear_range, linear_range_f32};
use serde_json::json;

use crate::config::{CliConfig, OutputFormat};
use crate::parse::{parse_f32, parse_f64};

/// Range command arguments
#[derive(Args)]
pub struct RangeCommand {
    /// Range minimum
    #[arg(value_name = "MIN")]
    pub min: String,

    /// Range maximum
    #[arg(value_name = "MAX")]
    pub max: String,

    /// Number of samples
    #[arg(value_name = "STEPS")]
    pub steps: usize,

    /// Skew samples quadratically toward the minimum
    #[arg(long, default_value_t = false)]
    pub biased: bool,

    /// Quantize samples to f32
    #[arg(long = "f32", default_value_t = false)]
    pub quantize: bool,

    /// Output format as JSON
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

impl RangeCommand {
    pub fn execute(&self, config: &CliConfig) -> Result<()> {
        let samples: Vec<f64> = if self.quantize {
            let min = parse_f32(&self.min)?;
            let max = parse_f32(&self.max)?;
            let samples = if self.biased {
                biased_range_f32(min, max, self.steps)?
            } else {
                linear_range_f32(min, max, self.steps)?
            };
            samples.into_iter().map(f64::from).collect()
        } else {
            let min = parse_f64(&self.min)?;
            let max = parse_f64(&self.max)?;
            if self.biased {
                biased_range(min, max, self.steps)?
            } else {
                linear_range(min, max, self.steps)?
            }
        };

        if self.json || config.checks.output == OutputFormat::Json {
            let output = json!({
                "biased": self.biased,
                "quantized": self.quantize,
                "samples": samples,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        } else {
            for s in samples {
                println!("{s:e}");
            }
        }
        Ok(())
    }
}
