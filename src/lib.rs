// Sales ETL - Sales Extraction and Dimension Loading Tool
// Copyright (c) 2025 Sales ETL Contributors
// Licensed under the MIT License

//! # Sales ETL
//!
//! Sales ETL extracts sales records from heterogeneous sources and loads the
//! customer, product and order dimensions into a PostgreSQL warehouse.
//!
//! ## Overview
//!
//! This library provides the core functionality for:
//! - **Extracting** sales facts from CSV directories, JSON files and HTTP APIs
//! - **Enriching** a run with dimension records from the CSV source
//! - **Loading** customers, products and orders into PostgreSQL, in that order
//! - **Reporting** every run as a structured [`core::extraction::RunReport`]
//!
//! ## Architecture
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`core`] - Run orchestration and reporting
//! - [`adapters`] - External integrations (sources, PostgreSQL)
//! - [`domain`] - Records, bundles and error types
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging and observability
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use sales_etl::adapters::sources::create_sources;
//! use sales_etl::adapters::warehouse::create_dimension_loaders;
//! use sales_etl::config::load_config;
//! use sales_etl::core::extraction::ExtractionOrchestrator;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = load_config("sales-etl.toml")?;
//!
//!     let orchestrator = ExtractionOrchestrator::new(
//!         create_sources(&config)?,
//!         create_dimension_loaders(&config).await?,
//!     )?;
//!
//!     let report = orchestrator.execute_extraction().await;
//!     println!("{}: {} facts", report.outcome(), report.total_facts);
//!     Ok(())
//! }
//! ```
//!
//! ## Custom Sources
//!
//! Anything implementing [`adapters::sources::FactSource`] can take part in a
//! run. Register it as [`adapters::sources::Source::Plain`]; sources that also
//! implement [`adapters::sources::DimensionalSource`] can be registered as
//! `Source::Enriched` instead.
//!
//! ```rust,no_run
//! use async_trait::async_trait;
//! use sales_etl::adapters::sources::{FactSource, Source};
//! use sales_etl::domain::{Result, SalesRecord};
//!
//! struct Fixed(Vec<SalesRecord>);
//!
//! #[async_trait]
//! impl FactSource for Fixed {
//!     fn name(&self) -> &str {
//!         "fixed"
//!     }
//!
//!     async fn extract(&self) -> Result<Vec<SalesRecord>> {
//!         Ok(self.0.clone())
//!     }
//! }
//!
//! let source = Source::plain(Fixed(Vec::new()));
//! ```
//!
//! ## Error Handling
//!
//! Fallible operations return [`domain::Result`], backed by [`domain::EtlError`].
//! A run itself never fails; its outcome is part of the report.

pub mod adapters;
pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod logging;
