//! fpcheck CLI application
//!
//! Command-line front end for the fpcheck oracle numerics: bit-level value
//! inspection, ULP distance, sample-range generation, and one-off tolerance
//! checks with CI-friendly exit codes.

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{generate, Shell};
use fpcheck_common::FlushMode;
use std::io;
use tracing::error;

mod commands;
mod config;
mod exit;
mod parse;

use commands::{CheckCommand, InspectCommand, RangeCommand, UlpCommand};
use config::{CliConfig, ConfigBuilder};

/// fpcheck - floating-point conformance checking toolkit
#[derive(Parser)]
#[command(name = "fpcheck")]
#[command(about = "Floating-point conformance checking toolkit")]
#[command(long_about = r#"
fpcheck judges floating-point values produced by an implementation under
test against higher-precision references: exact, ULP-bounded, absolute, and
correctly-rounded acceptance, plus the sample-range generators used to
drive numeric sweeps.

Examples:
  # Decompose a value into its encoding fields
  fpcheck inspect 0x7fc00000

  # Representable steps between two values
  fpcheck ulp 1.0 1.0000002

  # 16 samples skewed toward the low end of [0, 1]
  fpcheck range 0 1 16 --biased

  # Is the candidate correctly rounded for the reference?
  fpcheck check 0.1 0.1 --rounded
"#)]
#[command(version)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, value_name = "PATH", global = true)]
    config: Option<std::path::PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, value_name = "LEVEL", global = true)]
    log_level: Option<String>,

    /// Subnormal handling for checks
    #[arg(long, value_enum, value_name = "MODE", global = true)]
    flush: Option<FlushArg>,

    /// Generate shell completions
    #[arg(long, value_name = "SHELL")]
    completions: Option<Shell>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Inspect the bit-level structure of a value
    Inspect(InspectCommand),

    /// Measure the ULP distance between two values
    Ulp(UlpCommand),

    /// Generate a linear or biased sample range
    Range(RangeCommand),

    /// Check a candidate value against a reference
    Check(CheckCommand),
}

/// Subnormal policy as a CLI flag.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum FlushArg {
    /// Keep subnormal values distinct
    Retain,
    /// Treat subnormals as zero
    Flush,
}

impl From<FlushArg> for FlushMode {
    fn from(arg: FlushArg) -> Self {
        match arg {
            FlushArg::Retain => FlushMode::Retain,
            FlushArg::Flush => FlushMode::FlushToZero,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(shell) = cli.completions {
        generate_completions(shell);
        return Ok(());
    }

    let config = load_configuration(&cli);
    setup_logging(&config)?;

    let result = match cli.command {
        Some(Commands::Inspect(cmd)) => cmd.execute(&config),
        Some(Commands::Ulp(cmd)) => cmd.execute(&config),
        Some(Commands::Range(cmd)) => cmd.execute(&config),
        Some(Commands::Check(cmd)) => cmd.execute(&config),
        None => {
            let mut cmd = Cli::command();
            cmd.print_help()?;
            Ok(())
        }
    };

    if let Err(e) = result {
        error!("Command failed: {}", e);

        let mut source = e.source();
        while let Some(err) = source {
            error!("  Caused by: {}", err);
            source = err.source();
        }

        std::process::exit(exit::EXIT_GENERIC_FAIL);
    }

    Ok(())
}

/// Load configuration from file and merge with CLI arguments.
fn load_configuration(cli: &Cli) -> CliConfig {
    let config_path =
        cli.config.clone().unwrap_or_else(CliConfig::default_config_path);

    let builder = match ConfigBuilder::from_file(&config_path) {
        Ok(builder) => builder,
        // an explicitly named file must exist; the implicit default may not
        Err(e) if cli.config.is_some() => {
            eprintln!("Failed to load config: {e:#}");
            std::process::exit(exit::EXIT_GENERIC_FAIL);
        }
        Err(_) => ConfigBuilder::new(),
    };

    builder
        .log_level(cli.log_level.clone())
        .flush(cli.flush.map(FlushMode::from))
        .build()
}

/// Setup logging based on configuration.
fn setup_logging(config: &CliConfig) -> Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.logging.level));

    let subscriber = tracing_subscriber::fmt().with_env_filter(filter).with_target(false);

    match config.logging.format.as_str() {
        "json" => {
            subscriber.json().init();
        }
        "pretty" => {
            subscriber.pretty().init();
        }
        _ => {
            subscriber.compact().init();
        }
    }

    Ok(())
}

/// Generate shell completions.
fn generate_completions(shell: Shell) {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, &mut io::stdout());
}
