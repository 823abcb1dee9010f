use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use std::path::PathBuf;
use tracing::info;

/// Generate the synthetic product catalog and ad index for the demo services
#[derive(Parser)]
#[command(name = "gen-fixtures")]
#[command(about = "Writes products.json and ads.json into OUTPUT_DIR", long_about = None)]
struct Cli {
    /// Directory to write the fixture files into (must exist)
    output_dir: PathBuf,
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let generated = fixtures::generate_to_dir(&cli.output_dir).with_context(|| {
        format!("Failed to write fixtures to {}", cli.output_dir.display())
    })?;

    println!(
        "{} Wrote {} products to {}",
        "✓".green(),
        generated.catalog.products.len(),
        cli.output_dir.join(fixtures::PRODUCTS_FILE).display()
    );
    println!(
        "{} Wrote {} ad categories to {}",
        "✓".green(),
        generated.ads.len(),
        cli.output_dir.join(fixtures::ADS_FILE).display()
    );
    info!("Fixture generation complete");

    Ok(())
}
