//! Validate config command implementation
//!
//! This module implements the `validate-config` command for validating
//! the sales ETL configuration file.

use crate::adapters::postgresql::redact_connection_string;
use crate::config::{load_config, SourceConfig};
use clap::Args;
use secrecy::ExposeSecret;

/// Arguments for the validate-config command
#[derive(Args, Debug)]
pub struct ValidateArgs {}

impl ValidateArgs {
    /// Execute the validate-config command
    ///
    /// `load_config` validates as part of loading, so any failure here is a
    /// configuration error.
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!(config_path = %config_path, "Validating configuration");

        println!("🔍 Validating configuration file: {config_path}");
        println!();

        let config = match load_config(config_path) {
            Ok(c) => c,
            Err(e) => {
                println!("❌ Configuration validation failed");
                println!("   Error: {e}");
                println!();
                return Ok(2);
            }
        };

        println!("✅ Configuration is valid");
        println!();
        println!("Configuration Summary:");
        println!("  Log Level: {}", config.application.log_level);
        println!("  Dry Run: {}", config.application.dry_run);

        if config.sources.is_empty() {
            println!("  Sources: none (a run will stop immediately)");
        } else {
            println!("  Sources:");
            for source in &config.sources {
                match source {
                    SourceConfig::Csv(csv) => {
                        println!("    - {} (csv, enriched): {}", csv.name, csv.directory)
                    }
                    SourceConfig::Json(json) => println!("    - {} (json): {}", json.name, json.path),
                    SourceConfig::Api(api) => println!(
                        "    - {} (api): {}{}",
                        api.name,
                        api.url,
                        if api.token.is_some() { " [token]" } else { "" }
                    ),
                }
            }
        }

        println!(
            "  PostgreSQL Connection: {}",
            redact_connection_string(config.postgresql.connection_string.expose_secret().as_str())
        );
        println!("  Max Connections: {}", config.postgresql.max_connections);
        println!(
            "  File Logging: {}",
            if config.logging.local_enabled {
                format!("{} ({})", config.logging.local_path, config.logging.local_rotation)
            } else {
                "disabled".to_string()
            }
        );
        println!();

        Ok(0)
    }
}
