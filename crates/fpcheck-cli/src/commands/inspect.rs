//! Bit-level value inspection for diagnostics and test triage.

use anyhow::Result;
use clap::Args;
use console::style;
use fpcheck_math::{decompose_f32, next_after_f32, ulp_magnitude_f32, Direction, FlushMode};
use serde_json::json;
use tracing::debug;

use crate::config::{CliConfig, OutputFormat};
use crate::parse::parse_f32;

/// Inspect command arguments
#[derive(Args)]
pub struct InspectCommand {
    /// Value to inspect (decimal, inf, nan, or 0xXXXXXXXX)
    #[arg(value_name = "VALUE")]
    pub value: String,

    /// Output format as JSON
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

impl InspectCommand {
    pub fn execute(&self, config: &CliConfig) -> Result<()> {
        let value = parse_f32(&self.value)?;
        debug!("inspecting bit pattern {:#010x}", value.to_bits());

        let fields = decompose_f32(value);
        let next_up = next_after_f32(value, Direction::Up, FlushMode::Retain);
        let next_down = next_after_f32(value, Direction::Down, FlushMode::Retain);
        let next_up_flushed = next_after_f32(value, Direction::Up, FlushMode::FlushToZero);
        let next_down_flushed = next_after_f32(value, Direction::Down, FlushMode::FlushToZero);
        let ulp = ulp_magnitude_f32(value, config.checks.flush);

        if self.json || config.checks.output == OutputFormat::Json {
            let output = json!({
                "input": self.value,
                "value": format!("{value:e}"),
                "bits": format!("{:#010x}", value.to_bits()),
                "fields": serde_json::to_value(fields)?,
                "ulp_magnitude": format!("{ulp:e}"),
                "next": {
                    "up": format!("{next_up:e}"),
                    "down": format!("{next_down:e}"),
                    "up_flushed": format!("{next_up_flushed:e}"),
                    "down_flushed": format!("{next_down_flushed:e}"),
                },
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
            return Ok(());
        }

        println!("{}", style(format!("{value:e}")).bold());
        println!("  bits:       {:#010x}", value.to_bits());
        println!("  class:      {:?}", fields.class);
        println!("  sign:       {}", if fields.sign { "-" } else { "+" });
        println!("  exponent:   {} (biased)", fields.biased_exponent);
        println!("  mantissa:   {:#08x}", fields.mantissa);
        println!("  ulp:        {ulp:e}");
        println!("  next up:    {next_up:e}  (flushed: {next_up_flushed:e})");
        println!("  next down:  {next_down:e}  (flushed: {next_down_flushed:e})");
        Ok(())
    }
}
