//! CLI interface and argument parsing
//!
//! This module provides the command-line interface for Hemodash using clap.

pub mod commands;

use clap::{Parser, Subcommand};

/// Hemodash - Blood Transfusion Network Dashboard
#[derive(Parser, Debug)]
#[command(name = "hemodash")]
#[command(version, about, long_about = None)]
#[command(author = "Hemodash Contributors")]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "hemodash.toml", env = "HEMODASH_CONFIG")]
    pub config: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "HEMODASH_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fetch one snapshot and print the dashboard view model as JSON
    Snapshot(commands::snapshot::SnapshotArgs),

    /// Fetch snapshots on an interval until interrupted
    Watch(commands::watch::WatchArgs),

    /// Validate configuration file
    ValidateConfig(commands::validate::ValidateArgs),

    /// Initialize a new configuration file
    Init(commands::init::InitArgs),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_snapshot() {
        let cli = Cli::parse_from(["hemodash", "snapshot"]);
        assert_eq!(cli.config, "hemodash.toml");
        assert!(matches!(cli.command, Commands::Snapshot(_)));
    }

    #[test]
    fn test_cli_parse_with_config() {
        let cli = Cli::parse_from(["hemodash", "--config", "custom.toml", "snapshot"]);
        assert_eq!(cli.config, "custom.toml");
    }

    #[test]
    fn test_cli_parse_with_log_level() {
        let cli = Cli::parse_from(["hemodash", "--log-level", "debug", "snapshot"]);
        assert_eq!(cli.log_level, Some("debug".to_string()));
    }

    #[test]
    fn test_cli_parse_watch() {
        let cli = Cli::parse_from(["hemodash", "watch", "--interval-secs", "5"]);
        match cli.command {
            Commands::Watch(args) => assert_eq!(args.interval_secs, 5),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_cli_parse_validate_config() {
        let cli = Cli::parse_from(["hemodash", "validate-config"]);
        assert!(matches!(cli.command, Commands::ValidateConfig(_)));
    }

    #[test]
    fn test_cli_parse_init() {
        let cli = Cli::parse_from(["hemodash", "init"]);
        assert!(matches!(cli.command, Commands::Init(_)));
    }
}
