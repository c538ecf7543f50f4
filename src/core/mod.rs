//! Core business logic for the sales ETL.
//!
//! # Modules
//!
//! - [`extraction`] - Run orchestration and reporting
//!
//! # Extraction Workflow
//!
//! 1. **Extract**: Visit every registered source in order. Plain sources yield
//!    sales facts; a failing plain source contributes nothing.
//! 2. **Bundle**: The enriched source yields customers, products and orders
//!    alongside its facts.
//! 3. **Load**: If a bundle was produced, load customers, then products, then
//!    orders into the warehouse.
//! 4. **Report**: Return a [`RunReport`](extraction::RunReport) with per-source and
//!    per-dimension detail. Facts are aggregated but not persisted.
//!
//! # Example
//!
//! ```rust,no_run
//! use sales_etl::adapters::sources::create_sources;
//! use sales_etl::adapters::warehouse::create_dimension_loaders;
//! use sales_etl::config::load_config;
//! use sales_etl::core::extraction::ExtractionOrchestrator;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config("sales-etl.toml")?;
//!
//! let sources = create_sources(&config)?;
//! let loaders = create_dimension_loaders(&config).await?;
//! let orchestrator = ExtractionOrchestrator::new(sources, loaders)?;
//!
//! let report = orchestrator.execute_extraction().await;
//!
//! println!("Outcome: {}", report.outcome());
//! println!("Facts: {}", report.total_facts);
//! # Ok(())
//! # }
//! ```

pub mod extraction;
