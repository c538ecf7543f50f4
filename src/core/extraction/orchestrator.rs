//! Extraction orchestrator - drives one run from sources to dimension loaders
//!
//! Sources are processed strictly in registration order. Plain sources are
//! isolated: a failure is logged and the source contributes nothing. The
//! single enriched source yields a bundle whose dimensions are loaded in
//! customer, product, order order once every source has run. Failures outside
//! that isolation, panics included, end the run early and are recorded in the
//! [`RunReport`].

use crate::adapters::sources::{FactSource, Source, SourceKind};
use crate::adapters::warehouse::{DimensionLoader, DimensionLoaders};
use crate::core::extraction::report::{LoadStatus, RunFailure, RunReport, SourceReport};
use crate::domain::{Dimension, EtlError, ExtractionBundle, Result, SalesRecord};
use crate::{log_dimension_loaded, log_error_with_context, log_source_extracted};
use futures::FutureExt;
use std::any::Any;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use std::time::Instant;
use tracing::Instrument;

/// Extraction orchestrator
pub struct ExtractionOrchestrator {
    sources: Vec<Source>,
    loaders: DimensionLoaders,
}

impl ExtractionOrchestrator {
    /// Create a new orchestrator
    ///
    /// # Errors
    ///
    /// Returns a configuration error if more than one enriched source is registered.
    pub fn new(sources: Vec<Source>, loaders: DimensionLoaders) -> Result<Self> {
        let enriched: Vec<&str> = sources
            .iter()
            .filter(|s| s.is_enriched())
            .map(Source::name)
            .collect();

        if enriched.len() > 1 {
            return Err(EtlError::Configuration(format!(
                "At most one enriched source may be registered, found {}: {}",
                enriched.len(),
                enriched.join(", ")
            )));
        }

        Ok(Self { sources, loaders })
    }

    /// Registered sources in processing order
    pub fn sources(&self) -> &[Source] {
        &self.sources
    }

    /// Execute one extraction run
    ///
    /// Never fails: every outcome, including aborted runs, is described by
    /// the returned report.
    pub async fn execute_extraction(&self) -> RunReport {
        let start_time = Instant::now();
        let mut report = RunReport::new();
        let span = tracing::info_span!("extraction_run", run_id = %report.run_id);

        async {
            tracing::info!(sources = self.sources.len(), "Starting extraction run");

            if self.sources.is_empty() {
                tracing::error!("No extraction sources registered, nothing to extract");
                report.mark_no_sources();
                return;
            }

            if let Err(failure) = self.extract_and_load(&mut report).await {
                tracing::error!(
                    stage = %failure.stage,
                    error = %failure.error,
                    "Extraction run aborted, remaining stages skipped"
                );
                report.set_failure(failure);
                return;
            }

            tracing::info!(
                total_facts = report.total_facts,
                dimensions_loaded = report.dimensions_loaded(),
                "Extraction run complete; fact records are not persisted by this version"
            );
            report.completed = true;
        }
        .instrument(span)
        .await;

        report.with_duration(start_time.elapsed())
    }

    async fn extract_and_load(
        &self,
        report: &mut RunReport,
    ) -> std::result::Result<(), RunFailure> {
        let mut facts: Vec<SalesRecord> = Vec::new();
        let mut bundle: Option<ExtractionBundle> = None;

        for source in &self.sources {
            match source {
                Source::Enriched(enriched) => {
                    tracing::info!(source = %enriched.name(), "Extracting with dimensions");

                    let extraction = AssertUnwindSafe(enriched.extract_with_dimensions())
                        .catch_unwind()
                        .await
                        .unwrap_or_else(|payload| Err(panic_error(payload)));

                    let mut extracted = match extraction {
                        Ok(extracted) => extracted,
                        Err(e) => {
                            log_error_with_context!(&e, "Enriched extraction failed");
                            report.record_source(SourceReport::failed(
                                enriched.name(),
                                SourceKind::Enriched,
                                e.to_string(),
                            ));
                            return Err(RunFailure::extraction(enriched.name(), e));
                        }
                    };

                    let counts = extracted.counts();
                    tracing::info!(
                        source = %enriched.name(),
                        customers = counts.customers,
                        products = counts.products,
                        orders = counts.orders,
                        sales = counts.sales,
                        "Extracted dimension bundle"
                    );
                    report.record_source(SourceReport::enriched(enriched.name(), counts));
                    report.bundle = Some(counts);

                    facts.append(&mut extracted.sales);
                    bundle = Some(extracted);
                }
                Source::Plain(plain) => {
                    let extracted = extract_from_source(plain.clone(), report).await;
                    facts.extend(extracted);
                }
            }
        }

        report.total_facts = facts.len();
        tracing::info!(total_facts = facts.len(), "Fact extraction finished");

        let Some(bundle) = bundle else {
            let warning = "No dimension bundle produced, skipping dimension loading";
            tracing::warn!("{}", warning);
            report.add_warning(warning);
            return Ok(());
        };

        report.begin_loading();
        load_dimension(
            Dimension::Customer,
            &*self.loaders.customers,
            &bundle.customers,
            report,
        )
        .await?;
        load_dimension(
            Dimension::Product,
            &*self.loaders.products,
            &bundle.products,
            report,
        )
        .await?;
        load_dimension(
            Dimension::Order,
            &*self.loaders.orders,
            &bundle.orders,
            report,
        )
        .await?;

        Ok(())
    }
}

/// Extract from a plain source, recovering from any failure
///
/// The extraction runs as its own task so a panicking source is contained
/// the same way as one returning an error.
async fn extract_from_source(
    source: Arc<dyn FactSource>,
    report: &mut RunReport,
) -> Vec<SalesRecord> {
    let name = source.name().to_string();
    let handle = tokio::spawn(async move { source.extract().await }.in_current_span());

    let outcome = match handle.await {
        Ok(result) => result.map_err(|e| e.to_string()),
        Err(join_error) => Err(format!("Extraction task failed: {}", join_error)),
    };

    match outcome {
        Ok(records) => {
            log_source_extracted!(name, records.len());
            report.record_source(SourceReport::extracted(name, records.len()));
            records
        }
        Err(error) => {
            tracing::error!(
                source = %name,
                error = %error,
                "Source extraction failed, continuing without its records"
            );
            report.record_source(SourceReport::failed(name, SourceKind::Plain, error));
            Vec::new()
        }
    }
}

/// Turn a caught panic into an error carrying its message
fn panic_error(payload: Box<dyn Any + Send>) -> EtlError {
    let message = payload
        .downcast_ref::<&str>()
        .map(|s| s.to_string())
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "unknown panic payload".to_string());

    EtlError::Other(format!("panicked: {message}"))
}

async fn load_dimension<R>(
    dimension: Dimension,
    loader: &dyn DimensionLoader<R>,
    records: &[R],
    report: &mut RunReport,
) -> std::result::Result<(), RunFailure>
where
    R: Send + Sync,
{
    tracing::info!(dimension = %dimension, records = records.len(), "Loading dimension");

    let result = AssertUnwindSafe(loader.load(records))
        .catch_unwind()
        .await
        .unwrap_or_else(|payload| Err(panic_error(payload)));

    match result {
        Ok(written) => {
            log_dimension_loaded!(dimension, records.len(), written);
            report.set_load_status(
                dimension,
                LoadStatus::Loaded {
                    records: records.len(),
                    written,
                },
            );
            Ok(())
        }
        Err(e) => {
            log_error_with_context!(&e, "Dimension load failed");
            report.set_load_status(
                dimension,
                LoadStatus::Failed {
                    records: records.len(),
                    error: e.to_string(),
                },
            );
            Err(RunFailure::loading(dimension, e))
        }
    }
}
