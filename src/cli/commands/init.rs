//! Init command implementation
//!
//! This module implements the `init` command for generating a sample
//! configuration file.

use clap::Args;
use std::fs;
use std::path::Path;

/// Arguments for the init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Path where to create the configuration file
    #[arg(short, long, default_value = "sales-etl.toml")]
    pub output: String,

    /// Include explanatory comments for every setting
    #[arg(long)]
    pub with_examples: bool,

    /// Overwrite existing file
    #[arg(long)]
    pub force: bool,
}

impl InitArgs {
    /// Execute the init command
    pub async fn execute(&self) -> anyhow::Result<i32> {
        tracing::info!(output = %self.output, "Initializing configuration file");

        println!("📝 Initializing sales ETL configuration");
        println!();

        if Path::new(&self.output).exists() && !self.force {
            println!("❌ Configuration file already exists: {}", self.output);
            println!("   Use --force to overwrite");
            return Ok(2);
        }

        let config_content = if self.with_examples {
            Self::generate_config_with_examples()
        } else {
            Self::generate_minimal_config()
        };

        match fs::write(&self.output, config_content) {
            Ok(_) => {
                println!("✅ Configuration file created: {}", self.output);
                println!();
                println!("Next steps:");
                println!("  1. Edit {} with your sources", self.output);
                println!("  2. Set DW_CONNECTION_STRING in your environment or a .env file");
                println!("  3. Validate configuration: sales-etl validate-config");
                println!("  4. Try a dry run: sales-etl run --dry-run");
                println!();
                Ok(0)
            }
            Err(e) => {
                println!("❌ Failed to write configuration file");
                println!("   Error: {}", e);
                Ok(5)
            }
        }
    }

    fn generate_minimal_config() -> String {
        r#"# Sales ETL Configuration File

[application]
log_level = "info"
dry_run = false

[[sources]]
type = "csv"
name = "store-export"
directory = "data/csv"

[[sources]]
type = "json"
name = "legacy-sales"
path = "data/sales.json"

[postgresql]
connection_string = "${DW_CONNECTION_STRING}"
max_connections = 10
connection_timeout_seconds = 30
statement_timeout_seconds = 60

[logging]
local_enabled = true
local_path = "logs"
local_rotation = "daily"
"#
        .to_string()
    }

    fn generate_config_with_examples() -> String {
        r#"# Sales ETL Configuration File
#
# Extracts sales facts from every configured source and loads the customer,
# product and order dimensions produced by the CSV source into PostgreSQL.

# ============================================================================
# Application Settings
# ============================================================================
[application]
# Log level (trace, debug, info, warn, error)
log_level = "info"

# Dry run mode (extract and report, don't write to PostgreSQL)
dry_run = false

# ============================================================================
# Sources (processed in the order listed)
# ============================================================================

# CSV directory: customers.csv, products.csv, orders.csv, order_details.csv.
# This is the only source that yields dimensions; at most one may be configured.
[[sources]]
type = "csv"
name = "store-export"
directory = "data/csv"
# delimiter = ","
# customers_file = "customers.csv"
# products_file = "products.csv"
# orders_file = "orders.csv"
# order_details_file = "order_details.csv"

# JSON file holding an array of sales records
[[sources]]
type = "json"
name = "legacy-sales"
path = "data/sales.json"

# HTTP endpoint returning an array of sales records
# [[sources]]
# type = "api"
# name = "pos"
# url = "https://pos.example.com/api/sales"
# token = "${POS_API_TOKEN}"
# timeout_seconds = 30

# ============================================================================
# PostgreSQL Warehouse
# ============================================================================
[postgresql]
# Connection string format: postgresql://[user[:password]@][host][:port][/dbname]
connection_string = "${DW_CONNECTION_STRING}"

# Connection pool settings
max_connections = 10                # Maximum connections in pool (1-100)
connection_timeout_seconds = 30     # Timeout for acquiring connection
statement_timeout_seconds = 60      # Timeout for SQL statement execution

# ============================================================================
# Logging Configuration
# ============================================================================
[logging]
# Enable local JSON file logging
local_enabled = true

# Local log directory
local_path = "logs"

# Log rotation (daily or hourly)
local_rotation = "daily"
"#
        .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_generate_minimal_config() {
        let config = InitArgs::generate_minimal_config();
        assert!(config.contains("[application]"));
        assert!(config.contains("[[sources]]"));
        assert!(config.contains("[postgresql]"));
    }

    #[test]
    fn test_generated_configs_parse() {
        for content in [
            InitArgs::generate_minimal_config(),
            InitArgs::generate_config_with_examples(),
        ] {
            let config: crate::config::EtlConfig = toml::from_str(&content).unwrap();
            assert!(!content.contains("max_size"));
            assert_eq!(config.sources.len(), 2);
            assert!(config.sources[0].is_enriched());
            assert!(!config.sources[1].is_enriched());
        }
    }

    #[tokio::test]
    async fn test_init_refuses_to_overwrite_without_force() {
        let dir = TempDir::new().unwrap();
        let output = dir.path().join("sales-etl.toml");
        fs::write(&output, "# existing").unwrap();

        let args = InitArgs {
            output: output.to_string_lossy().to_string(),
            with_examples: false,
            force: false,
        };
        assert_eq!(args.execute().await.unwrap(), 2);
        assert_eq!(fs::read_to_string(&output).unwrap(), "# existing");

        let args = InitArgs { force: true, ..args };
        assert_eq!(args.execute().await.unwrap(), 0);
        assert!(fs::read_to_string(&output).unwrap().contains("[postgresql]"));
    }
}
