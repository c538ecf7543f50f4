//! Run command implementation
//!
//! This module implements the `run` command: one extraction run from the
//! configured sources into the PostgreSQL dimension tables.

use crate::adapters::sources::create_sources;
use crate::adapters::warehouse::create_dimension_loaders;
use crate::config::{load_config, EtlConfig};
use crate::core::extraction::{ExtractionOrchestrator, LoadStatus, RunReport, SourceStatus};
use clap::Args;
use secrecy::ExposeSecret;

/// Arguments for the run command
#[derive(Args, Debug)]
pub struct RunArgs {
    /// Skip confirmation prompt
    #[arg(short, long)]
    pub yes: bool,

    /// Dry run mode - extract and report without writing to PostgreSQL
    #[arg(long)]
    pub dry_run: bool,
}

impl RunArgs {
    /// Execute the run command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!("Starting run command");

        let mut config = match load_config(config_path) {
            Ok(c) => c,
            Err(e) => {
                tracing::error!(error = %e, "Failed to load configuration");
                eprintln!("Configuration error: {e}");
                return Ok(2);
            }
        };

        if self.dry_run {
            tracing::info!("Enabling dry-run mode from CLI");
            config.application.dry_run = true;
        }

        if config.application.dry_run {
            tracing::info!("Dry run mode enabled - no data will be written");
            println!("🔍 DRY RUN MODE - No data will be written to the warehouse");
            println!();
        }

        if !self.yes && !config.application.dry_run && !confirm(&config)? {
            println!("Run cancelled.");
            return Ok(0);
        }

        let sources = match create_sources(&config) {
            Ok(s) => s,
            Err(e) => {
                tracing::error!(error = %e, "Failed to create sources");
                eprintln!("Failed to create sources: {e}");
                return Ok(2);
            }
        };

        let loaders = match create_dimension_loaders(&config).await {
            Ok(l) => l,
            Err(e) => {
                tracing::error!(error = %e, "Failed to create dimension loaders");
                eprintln!("Failed to initialize warehouse: {e}");
                return Ok(4);
            }
        };

        let orchestrator = match ExtractionOrchestrator::new(sources, loaders) {
            Ok(o) => o,
            Err(e) => {
                tracing::error!(error = %e, "Failed to create extraction orchestrator");
                eprintln!("Configuration error: {e}");
                return Ok(2);
            }
        };

        println!("🚀 Starting extraction...");
        println!();

        let report = orchestrator.execute_extraction().await;
        report.log_summary();
        print_report(&report);

        Ok(report.outcome().exit_code())
    }
}

fn confirm(config: &EtlConfig) -> anyhow::Result<bool> {
    use std::io::{self, Write};

    println!("Run Configuration:");
    for source in &config.sources {
        println!("  Source: {}", source.name());
    }
    println!(
        "  Warehouse: {}",
        crate::adapters::postgresql::redact_connection_string(
            config.postgresql.connection_string.expose_secret().as_str()
        )
    );
    println!();
    print!("Proceed with run? [y/N]: ");
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;

    Ok(input.trim().eq_ignore_ascii_case("y"))
}

fn print_report(report: &RunReport) {
    println!();
    println!("📊 Run Summary ({}):", report.run_id);
    for source in &report.sources {
        match &source.status {
            SourceStatus::Extracted { facts } => {
                println!("  ✅ {} ({}): {} facts", source.name, source.kind, facts)
            }
            SourceStatus::Enriched(counts) => println!(
                "  ✅ {} ({}): {} facts, {} customers, {} products, {} orders",
                source.name,
                source.kind,
                counts.sales,
                counts.customers,
                counts.products,
                counts.orders
            ),
            SourceStatus::Failed { error } => {
                println!("  ❌ {} ({}): {}", source.name, source.kind, error)
            }
        }
    }
    println!("  Total Facts: {}", report.total_facts);

    for entry in &report.dimensions {
        match &entry.status {
            LoadStatus::Loaded { records, written } => println!(
                "  Dimension {}: {} records, {} written",
                entry.dimension, records, written
            ),
            LoadStatus::Failed { records, error } => println!(
                "  Dimension {}: failed after receiving {} records: {}",
                entry.dimension, records, error
            ),
            LoadStatus::Skipped => println!("  Dimension {}: skipped", entry.dimension),
        }
    }
    println!("  Duration: {:.2}s", report.duration.as_secs_f64());
    println!();

    for warning in &report.warnings {
        println!("⚠️  {warning}");
    }

    if let Some(failure) = &report.failure {
        println!("❌ Run aborted during {}: {}", failure.stage, failure.error);
    }

    println!("Outcome: {}", report.outcome());
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_args_defaults() {
        let args = RunArgs {
            yes: false,
            dry_run: false,
        };

        assert!(!args.yes);
        assert!(!args.dry_run);
    }

    #[tokio::test]
    async fn test_missing_config_is_configuration_error() {
        let args = RunArgs {
            yes: true,
            dry_run: true,
        };

        let code = args
            .execute("/nonexistent/sales-etl.toml")
            .await
            .unwrap();
        assert_eq!(code, 2);
    }
}
