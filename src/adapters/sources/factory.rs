//! Source factory
//!
//! Builds the registered source list from configuration. The CSV source is
//! the enriched variant; all others are plain.

use super::csv_dir::CsvSource;
use super::http_api::HttpApiSource;
use super::json_file::JsonFileSource;
use super::traits::Source;
use crate::config::schema::{EtlConfig, SourceConfig};
use crate::domain::Result;

/// Create the sources named in the configuration, in configuration order
///
/// # Errors
///
/// Returns an error if a source cannot be constructed
pub fn create_sources(config: &EtlConfig) -> Result<Vec<Source>> {
    let mut sources = Vec::with_capacity(config.sources.len());

    for source_config in &config.sources {
        let source = match source_config {
            SourceConfig::Csv(c) => Source::enriched(CsvSource::new(c.clone())),
            SourceConfig::Json(c) => Source::plain(JsonFileSource::new(c.clone())),
            SourceConfig::Api(c) => Source::plain(HttpApiSource::new(c.clone())?),
        };

        tracing::info!(
            source = %source.name(),
            kind = %source.kind(),
            "Registered source"
        );
        sources.push(source);
    }

    Ok(sources)
}
