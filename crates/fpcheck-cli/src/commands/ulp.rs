//! ULP distance between two values.

use anyhow::Result;
use clap::Args;
use fpcheck_math::{ulp_distance_f32_with, FlushMode};
use serde_json::json;

use crate::config::{CliConfig, OutputFormat};
use crate::parse::parse_f32;

/// Ulp command arguments
#[derive(Args)]
pub struct UlpCommand {
    /// First value (decimal, inf, nan, or 0xXXXXXXXX)
    #[arg(value_name = "A")]
    pub a: String,

    /// Second value
    #[arg(value_name = "B")]
    pub b: String,

    /// Keep subnormals distinct instead of collapsing them onto zero
    #[arg(long, default_value_t = false)]
    pub retain_subnormals: bool,

    /// Output format as JSON
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

impl UlpCommand {
    pub fn execute(&self, config: &CliConfig) -> Result<()> {
        let a = parse_f32(&self.a)?;
        let b = parse_f32(&self.b)?;
        let flush = if self.retain_subnormals { FlushMode::Retain } else { FlushMode::FlushToZero };
        let distance = ulp_distance_f32_with(a, b, flush);

        if self.json || config.checks.output == OutputFormat::Json {
            let output = json!({
                "a": { "value": format!("{a:e}"), "bits": format!("{:#010x}", a.to_bits()) },
                "b": { "value": format!("{b:e}"), "bits": format!("{:#010x}", b.to_bits()) },
                "flush": flush,
                "ulp_distance": distance.finite(),
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        } else {
            println!("{distance}");
        }
        Ok(())
    }
}
