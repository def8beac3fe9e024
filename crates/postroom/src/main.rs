//! Postroom - Entry Point
//!
//! Binary entry point for the messaging module wiring check. Loads the
//! configuration, runs the wiring pass, and prints what was composed:
//! driver, enabled bridges, resolved providers, and container totals.
//! Operators use it to verify a deployment's configuration before the
//! host application boots.

// Force-link postroom-providers to ensure linkme registrations are included
extern crate postroom_providers;

use clap::Parser;
use postroom_infrastructure::config::ConfigLoader;
use postroom_infrastructure::logging::init_logging;
use postroom_infrastructure::wiring::{list_available_providers, wire_messaging};

/// Command line interface for the Postroom wiring check
#[derive(Parser, Debug)]
#[command(name = "postroom")]
#[command(about = "Postroom - Private messaging module wiring check")]
#[command(version)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<std::path::PathBuf>,

    /// List the bridges and service providers compiled into this binary
    #[arg(long)]
    pub list_providers: bool,
}

/// Run the wiring check
///
/// Exits non-zero when the configuration does not compose: unknown
/// bridges, retired drivers, unresolvable providers, or the mandatory
/// user directory bridge left disabled.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    if cli.list_providers {
        print!("{}", list_available_providers());
        return Ok(());
    }

    let mut loader = ConfigLoader::new();
    if let Some(path) = &cli.config {
        loader = loader.with_config_path(path);
    }
    let config = loader.load()?;
    init_logging(config.logging.clone())?;

    let module = wire_messaging(config)?;
    print!("{}", module.report());
    Ok(())
}
