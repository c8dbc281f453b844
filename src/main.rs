//! Command-line entry point: writes the deck and prints a two-line summary.

use anyhow::{Context, Result};
use clap::Parser;
use govdeck::config::DeckConfig;
use govdeck::deck;
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Generate the MCP Governance presentation
#[derive(Parser, Debug)]
#[command(
    name = "govdeck",
    about = "Generate the MCP Governance overview deck (.pptx)",
    version
)]
struct Cli {
    /// Output file (overrides the configuration file)
    #[arg(short, long, value_name = "PATH")]
    output: Option<PathBuf>,

    /// YAML configuration file
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Reopen the written file and check its slide count
    #[arg(long)]
    verify: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    // RUST_LOG wins over -v
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut config = match &cli.config {
        Some(path) => DeckConfig::load(path)
            .with_context(|| format!("loading configuration from {}", path.display()))?,
        None => DeckConfig::default(),
    };
    if let Some(output) = cli.output {
        config = config.with_output(output);
    }
    debug!(?config, "configuration");

    let report = deck::generate(&config)
        .with_context(|| format!("writing {}", config.output.display()))?;

    if cli.verify {
        deck::verify(&report.output, deck::SLIDE_COUNT)
            .with_context(|| format!("verifying {}", report.output.display()))?;
    }

    for line in report.summary_lines() {
        println!("{}", line);
    }
    Ok(())
}
