//! dirscan - Bulk directory metadata scanner
//!
//! Entry point for the CLI application.

use anyhow::{Context, Result};
use clap::Parser;
use dirscan::config::{CliArgs, ScanConfig};
use dirscan::{db, report, walker};
use std::process::ExitCode;
use tracing::{error, warn};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{:#}", e);
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    // Parse CLI arguments
    let args = CliArgs::parse();

    // Setup logging
    setup_logging(args.verbose)?;

    // Validate and create config before any store is touched
    let config = ScanConfig::from_args(args).context("Invalid configuration")?;

    if config.show_summary {
        report::print_header(&config);
    }

    // Initialize the store, then hand it to the walker
    let conn = db::open_store(&config.database, &config.profile)
        .context("Failed to initialize database")?;

    let stats = walker::scan(&conn, &config).context("Scan failed")?;

    // Errors gathered under the collect policy; the scan itself committed
    for err in &stats.errors {
        warn!("{err}");
    }

    if config.show_summary {
        report::print_summary(&stats, &config.database.display().to_string());
    }

    println!("Directory scan completed successfully");

    Ok(())
}

fn setup_logging(verbose: bool) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new("dirscan=debug,warn")
    } else {
        EnvFilter::new("dirscan=info,warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    Ok(())
}
