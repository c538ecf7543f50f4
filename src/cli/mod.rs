//! CLI interface and argument parsing
//!
//! This module provides the command-line interface for the sales ETL using clap.

pub mod commands;

use clap::{Parser, Subcommand};

/// Sales ETL - extract sales data and load dimension tables
#[derive(Parser, Debug)]
#[command(name = "sales-etl")]
#[command(version, about, long_about = None)]
#[command(author = "Sales ETL Contributors")]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "sales-etl.toml", env = "SALES_ETL_CONFIG")]
    pub config: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "SALES_ETL_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run one extraction: read every source, load dimensions into PostgreSQL
    Run(commands::run::RunArgs),

    /// Validate configuration file
    ValidateConfig(commands::validate::ValidateArgs),

    /// Initialize a new configuration file
    Init(commands::init::InitArgs),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_run() {
        let cli = Cli::parse_from(["sales-etl", "run"]);
        assert_eq!(cli.config, "sales-etl.toml");
        assert!(matches!(cli.command, Commands::Run(_)));
    }

    #[test]
    fn test_cli_parse_run_flags() {
        let cli = Cli::parse_from(["sales-etl", "run", "--dry-run", "--yes"]);
        match cli.command {
            Commands::Run(args) => {
                assert!(args.dry_run);
                assert!(args.yes);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_cli_parse_with_config() {
        let cli = Cli::parse_from(["sales-etl", "--config", "custom.toml", "run"]);
        assert_eq!(cli.config, "custom.toml");
    }

    #[test]
    fn test_cli_parse_with_log_level() {
        let cli = Cli::parse_from(["sales-etl", "--log-level", "debug", "run"]);
        assert_eq!(cli.log_level, Some("debug".to_string()));
    }

    #[test]
    fn test_cli_parse_validate_config() {
        let cli = Cli::parse_from(["sales-etl", "validate-config"]);
        assert!(matches!(cli.command, Commands::ValidateConfig(_)));
    }

    #[test]
    fn test_cli_parse_init() {
        let cli = Cli::parse_from(["sales-etl", "init", "--output", "etl.toml", "--force"]);
        match cli.command {
            Commands::Init(args) => {
                assert_eq!(args.output, "etl.toml");
                assert!(args.force);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
