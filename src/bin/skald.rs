//! Skald CLI - overlap detection across parallel translation corpora.
//!
//! Compares verse-aligned translations pairwise and reports translation
//! pairs whose similarity is a statistical outlier at a given verse.

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;

use cli::{Cli, Commands};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Analyze(args) => cli::analyze_command(*args)?,
        Commands::PrintDefaultConfig => cli::print_default_config()?,
        Commands::InitConfig(args) => cli::init_config(&args)?,
        Commands::ValidateConfig(args) => cli::validate_config(&args)?,
    }

    Ok(())
}
