//! CLI configuration: optional `fpcheck.toml` merged with command-line
//! overrides through a builder.

use anyhow::{Context, Result};
use fpcheck_common::FlushMode;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Output format for command results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Logging section.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error).
    pub level: String,
    /// Log format (pretty, compact, json).
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: "info".to_string(), format: "compact".to_string() }
    }
}

/// Defaults applied to checking commands.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CheckConfig {
    /// Subnormal policy used when a command does not specify one.
    pub flush: FlushMode,
    /// Output format used when `--json` is not given.
    pub output: OutputFormat,
}

/// Complete CLI configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    pub logging: LoggingConfig,
    pub checks: CheckConfig,
}

impl CliConfig {
    /// Default configuration file path.
    pub fn default_config_path() -> PathBuf {
        PathBuf::from("fpcheck.toml")
    }
}

/// Builder merging a configuration file with CLI overrides.
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    base: CliConfig,
    log_level: Option<String>,
    flush: Option<FlushMode>,
}

impl ConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the base configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        let base: CliConfig = toml::from_str(&text)
            .with_context(|| format!("invalid config file {}", path.display()))?;
        Ok(Self { base, ..Self::default() })
    }

    pub fn log_level(mut self, level: Option<String>) -> Self {
        self.log_level = level;
        self
    }

    pub fn flush(mut self, flush: Option<FlushMode>) -> Self {
        self.flush = flush;
        self
    }

    pub fn build(self) -> CliConfig {
        let mut config = self.base;
        if let Some(level) = self.log_level {
            config.logging.level = level;
        }
        if let Some(flush) = self.flush {
            config.checks.flush = flush;
        }
        config
    }
}
