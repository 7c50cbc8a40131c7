//! Command implementations for the skald CLI.

use anyhow::Context;

use skald_rs::core::config::SkaldConfig;
use skald_rs::core::pipeline::AnalysisPipeline;
use skald_rs::io::vref::AlignedCorpus;

use super::args::{AnalyzeArgs, InitConfigArgs, SummaryFormat, ValidateConfigArgs};
use super::output;

/// Run a full corpus comparison.
pub fn analyze_command(args: AnalyzeArgs) -> anyhow::Result<()> {
    let mut config = match &args.config {
        Some(path) => SkaldConfig::from_yaml_file(path)
            .with_context(|| format!("loading configuration from {}", path.display()))?,
        None => SkaldConfig::default(),
    };

    // command-line flags override file values
    if let Some(metric) = args.metric {
        config.metric = metric;
    }
    if let Some(books) = &args.books {
        config.books = Some(books.split(',').map(|b| b.trim().to_string()).collect());
    }
    if let Some(output) = &args.output {
        config.output_path = output.clone();
    }
    if let Some(scale_factor) = args.scale_factor {
        config.scale_factor = scale_factor;
    }

    let pipeline = AnalysisPipeline::new(config)?;

    if !args.quiet {
        output::print_run_header(pipeline.config(), &args.paths);
    }

    let corpus = AlignedCorpus::load(&args.vref, &args.paths)?;

    let progress = if args.quiet {
        None
    } else {
        Some(output::progress_callback(corpus.len()))
    };
    let summary = pipeline.run(&corpus, progress)?;

    match args.format {
        SummaryFormat::Text => println!("{}", summary.render_text()),
        SummaryFormat::Json => println!("{}", serde_json::to_string_pretty(&summary)?),
    }
    if !args.quiet {
        output::print_log_location(&pipeline.config().output_path);
    }

    Ok(())
}

/// Print the default configuration as YAML.
pub fn print_default_config() -> anyhow::Result<()> {
    print!("{}", SkaldConfig::default().to_yaml_string()?);
    Ok(())
}

/// Write a starter configuration file.
pub fn init_config(args: &InitConfigArgs) -> anyhow::Result<()> {
    if args.path.exists() && !args.force {
        anyhow::bail!(
            "{} already exists; pass --force to overwrite",
            args.path.display()
        );
    }
    let yaml = SkaldConfig::default().to_yaml_string()?;
    std::fs::write(&args.path, yaml)
        .with_context(|| format!("writing {}", args.path.display()))?;
    println!("Wrote configuration to {}", args.path.display());
    Ok(())
}

/// Load and validate a configuration file.
pub fn validate_config(args: &ValidateConfigArgs) -> anyhow::Result<()> {
    let config = SkaldConfig::from_yaml_file(&args.path)?;
    config.validate()?;
    println!("Configuration {} is valid.", args.path.display());
    Ok(())
}
