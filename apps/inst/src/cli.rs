//! Command line interface definition

use clap::Parser;
use std::path::PathBuf;

/// inst - bootstrap installer for the ioBroker automation platform
///
/// Copies the installer package into the current directory and writes the
/// root package.json. Run without arguments for a normal installation.
#[derive(Parser, Debug)]
#[command(name = "inst")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Bootstrap installer for the ioBroker automation platform")]
#[command(long_about = None)]
pub struct Cli {
    /// Package root to copy from (defaults to the parent of the executable's directory)
    #[arg(long, value_name = "DIR")]
    pub source_root: Option<PathBuf>,

    /// Installation directory (defaults to the current directory)
    #[arg(long, value_name = "DIR")]
    pub target_dir: Option<PathBuf>,

    /// Print the installation report as JSON
    #[arg(long)]
    pub json: bool,

    /// Enable debug logging on stderr
    #[arg(long)]
    pub debug: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_arguments() {
        let cli = Cli::parse_from(["inst"]);
        assert!(cli.source_root.is_none());
        assert!(cli.target_dir.is_none());
        assert!(!cli.json);
        assert!(!cli.debug);
    }

    #[test]
    fn test_path_overrides() {
        let cli = Cli::parse_from(["inst", "--source-root", "/pkg", "--target-dir", "/opt/iobroker"]);
        assert_eq!(cli.source_root, Some(PathBuf::from("/pkg")));
        assert_eq!(cli.target_dir, Some(PathBuf::from("/opt/iobroker")));
    }
}
