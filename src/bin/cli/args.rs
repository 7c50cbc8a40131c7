//! CLI argument structures and configuration enums.

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use skald_rs::MetricKind;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Overlap detection across parallel translation corpora
#[derive(Parser)]
#[command(name = "skald")]
#[command(version = VERSION)]
#[command(about = "Skald - overlap detection across parallel translation corpora")]
#[command(long_about = "
Compare verse-aligned translations of the same document and flag translation
pairs whose verse similarity is a statistical outlier, surfacing potential
unacknowledged copying.

Common Usage:

  # Compare three translations against a canonical reference list
  skald analyze --vref vref.txt eng-kjv.txt eng-web.txt eng-net.txt

  # Character-sequence metric, Genesis and Exodus only
  skald analyze --vref vref.txt --metric sequence -b GEN,EXO *.txt

  # Lower the outlier threshold and keep the detail log next to the data
  skald analyze --vref vref.txt -s 1.5 -o overlaps.log *.txt

  # Write a starter configuration file
  skald init-config
")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Top-level subcommands.
#[derive(Subcommand)]
pub enum Commands {
    /// Compare aligned translations and report outlier pairs
    Analyze(Box<AnalyzeArgs>),

    /// Print default configuration in YAML format
    #[command(name = "print-default-config")]
    PrintDefaultConfig,

    /// Initialize a configuration file with defaults
    #[command(name = "init-config")]
    InitConfig(InitConfigArgs),

    /// Validate a skald configuration file
    #[command(name = "validate-config")]
    ValidateConfig(ValidateConfigArgs),
}

/// Output format for the final summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SummaryFormat {
    /// Human-readable ranked report
    Text,
    /// Machine-readable JSON
    Json,
}

/// Arguments for the analyze command.
#[derive(Args)]
pub struct AnalyzeArgs {
    /// Translation files, one verse per line, aligned to the reference list
    #[arg(required = true)]
    pub paths: Vec<PathBuf>,

    /// Canonical verse reference list (one reference per line)
    #[arg(long)]
    pub vref: PathBuf,

    /// Metric to use for similarity computation
    #[arg(long, value_enum)]
    pub metric: Option<MetricKind>,

    /// Comma-separated books (USFM abbreviations) to compare
    #[arg(short, long)]
    pub books: Option<String>,

    /// Output file for the detail log
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Scale factor for the outlier threshold (standard deviations)
    #[arg(short, long)]
    pub scale_factor: Option<f64>,

    /// Configuration file; command-line flags override its values
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Summary output format
    #[arg(long, value_enum, default_value = "text")]
    pub format: SummaryFormat,

    /// Suppress the progress bar and run header
    #[arg(short, long)]
    pub quiet: bool,
}

/// Arguments for init-config.
#[derive(Args)]
pub struct InitConfigArgs {
    /// Where to write the configuration file
    #[arg(default_value = "skald.yml")]
    pub path: PathBuf,

    /// Overwrite an existing file
    #[arg(long)]
    pub force: bool,
}

/// Arguments for validate-config.
#[derive(Args)]
pub struct ValidateConfigArgs {
    /// Configuration file to validate
    pub path: PathBuf,
}
