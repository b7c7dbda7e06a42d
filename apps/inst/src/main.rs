//! inst - bootstrap installer for the ioBroker automation platform
//!
//! Copies the installer package into the installation directory, then
//! creates or merges the root package.json there.

mod cli;
mod error;
mod logging;

use crate::cli::Cli;
use crate::error::CliError;
use crate::logging::init_tracing;
use clap::Parser;
use inst_config::InstallPaths;
use inst_install::Installer;
use std::io::Write;
use std::process;
use tracing::{error, info};

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.json, cli.debug);

    if let Err(e) = run(cli) {
        error!("Installation failed: {}", e);
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    info!("Starting inst v{}", env!("CARGO_PKG_VERSION"));

    let paths = resolve_paths(&cli)?;
    let report = Installer::new(paths).run()?;

    if cli.json {
        let rendered = serde_json::to_string_pretty(&report).map_err(CliError::Report)?;
        writeln!(std::io::stdout(), "{rendered}")?;
    }

    Ok(())
}

/// Derive paths from the process, letting explicit flags win
fn resolve_paths(cli: &Cli) -> Result<InstallPaths, CliError> {
    if let (Some(source_root), Some(target_dir)) = (&cli.source_root, &cli.target_dir) {
        return Ok(InstallPaths::new(source_root, target_dir));
    }
    let discovered = InstallPaths::discover().map_err(CliError::Config)?;
    Ok(discovered.with_overrides(cli.source_root.clone(), cli.target_dir.clone()))
}
