//! Command-line interface for tictoe.

use clap::Parser;
use std::path::PathBuf;

/// Two-player tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "tictoe")]
#[command(about = "Two-player tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (defaults are used if it is missing)
    #[arg(short, long, default_value = "tictoe.toml")]
    pub config: PathBuf,

    /// Write logs here instead of the configured log file
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["tictoe"]);
        assert_eq!(cli.config, PathBuf::from("tictoe.toml"));
        assert!(cli.log_file.is_none());
    }

    #[test]
    fn test_overrides() {
        let cli = Cli::parse_from(["tictoe", "-c", "alt.toml", "--log-file", "/tmp/t.log"]);
        assert_eq!(cli.config, PathBuf::from("alt.toml"));
        assert_eq!(cli.log_file, Some(PathBuf::from("/tmp/t.log")));
    }
}
