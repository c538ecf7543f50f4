//! Source contracts
//!
//! A source either yields only sales facts ([`FactSource`]) or, for the
//! enriched variant, a full [`ExtractionBundle`] ([`DimensionalSource`]).
//! The variant is fixed when the source is registered, as a [`Source`] tag.

use crate::domain::{ExtractionBundle, Result, SalesRecord};
use async_trait::async_trait;
use std::fmt;
use std::sync::Arc;

/// A source of sales facts
#[async_trait]
pub trait FactSource: Send + Sync {
    /// Name used in logs and reports
    fn name(&self) -> &str;

    /// Extract all sales records from the source
    ///
    /// # Errors
    ///
    /// Returns a source-specific error if the data cannot be read or parsed.
    async fn extract(&self) -> Result<Vec<SalesRecord>>;
}

/// A source that also yields customer, product and order dimensions
#[async_trait]
pub trait DimensionalSource: FactSource {
    /// Extract dimensions and facts in one pass
    ///
    /// # Errors
    ///
    /// Returns a source-specific error if any part of the bundle cannot be produced.
    async fn extract_with_dimensions(&self) -> Result<ExtractionBundle>;
}

/// A registered source, tagged with its capability
#[derive(Clone)]
pub enum Source {
    /// Yields sales facts only
    Plain(Arc<dyn FactSource>),
    /// Yields a dimension bundle alongside its facts
    Enriched(Arc<dyn DimensionalSource>),
}

impl Source {
    /// Tag a facts-only source
    pub fn plain(source: impl FactSource + 'static) -> Self {
        Source::Plain(Arc::new(source))
    }

    /// Tag an enriched source
    pub fn enriched(source: impl DimensionalSource + 'static) -> Self {
        Source::Enriched(Arc::new(source))
    }

    pub fn name(&self) -> &str {
        match self {
            Source::Plain(s) => s.name(),
            Source::Enriched(s) => s.name(),
        }
    }

    pub fn kind(&self) -> SourceKind {
        match self {
            Source::Plain(_) => SourceKind::Plain,
            Source::Enriched(_) => SourceKind::Enriched,
        }
    }

    pub fn is_enriched(&self) -> bool {
        matches!(self, Source::Enriched(_))
    }
}

impl fmt::Debug for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Source")
            .field("name", &self.name())
            .field("kind", &self.kind())
            .finish()
    }
}

/// Capability tag of a registered source
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    Plain,
    Enriched,
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceKind::Plain => write!(f, "plain"),
            SourceKind::Enriched => write!(f, "enriched"),
        }
    }
}
