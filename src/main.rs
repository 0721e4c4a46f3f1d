use anyhow::{bail, Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing::info;
use translation_generator::config::Config;
use translation_generator::generator::Generator;

/// Generate typed translation modules from `;`-delimited tables
#[derive(Parser)]
#[command(name = "translation-generator")]
#[command(version, about)]
struct Cli {
    /// Directory holding the tables and the `mod.rs` anchor file
    data_root: PathBuf,

    /// Write generated modules under this directory instead of next to each table
    #[arg(long)]
    out: Option<PathBuf>,

    /// Stop at the first table that fails to generate
    #[arg(long)]
    fail_fast: bool,

    /// Print the generation report as JSON
    #[arg(long)]
    report: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load .env file (ignored when absent)
    let _ = dotenvy::dotenv();

    // Logs go to stderr so the JSON report stays parseable
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("translation_generator=info".parse()?),
        )
        .with_writer(std::io::stderr)
        .init();

    // Command-line flags override the environment
    let mut config = Config::from_env(&cli.data_root)?;
    if let Some(out) = cli.out {
        config.output_root = Some(out);
    }
    config.fail_fast |= cli.fail_fast;

    info!("Generating translations from {}", config.data_root.display());
    let report = Generator::new(config).run()?;

    if cli.report {
        let json = serde_json::to_string_pretty(&report).context("Failed to serialize report")?;
        println!("{}", json);
    }

    if report.has_failures() {
        bail!(
            "{} of {} tables failed to generate",
            report.failures.len(),
            report.failures.len() + report.tables.len()
        );
    }

    info!("Translation files generated successfully.");
    Ok(())
}
