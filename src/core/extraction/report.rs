//! Run report
//!
//! The orchestrator never returns an error; everything a caller may want to
//! know about a run ends up here.

use crate::adapters::sources::SourceKind;
use crate::domain::{BundleCounts, Dimension};
use std::fmt;
use std::time::Duration;
use uuid::Uuid;

/// Overall result of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// Every source extracted and, if a bundle was produced, every dimension loaded
    Succeeded,
    /// The run completed but at least one plain source failed and contributed nothing
    Partial,
    /// A failure outside per-source isolation ended the run early
    Aborted,
    /// No sources were registered, so nothing ran
    NoSources,
}

impl RunOutcome {
    /// Process exit code for this outcome
    pub fn exit_code(&self) -> i32 {
        match self {
            RunOutcome::Succeeded => 0,
            RunOutcome::Partial => 1,
            RunOutcome::NoSources => 3,
            RunOutcome::Aborted => 5,
        }
    }
}

impl fmt::Display for RunOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RunOutcome::Succeeded => write!(f, "succeeded"),
            RunOutcome::Partial => write!(f, "partial"),
            RunOutcome::Aborted => write!(f, "aborted"),
            RunOutcome::NoSources => write!(f, "no sources"),
        }
    }
}

/// What a single source contributed
#[derive(Debug, Clone, PartialEq)]
pub enum SourceStatus {
    /// Plain source returned facts
    Extracted { facts: usize },
    /// Enriched source returned a bundle
    Enriched(BundleCounts),
    /// Extraction failed; the source contributed nothing
    Failed { error: String },
}

/// Per-source entry of a run report
#[derive(Debug, Clone)]
pub struct SourceReport {
    pub name: String,
    pub kind: SourceKind,
    pub status: SourceStatus,
}

impl SourceReport {
    pub fn extracted(name: impl Into<String>, facts: usize) -> Self {
        Self {
            name: name.into(),
            kind: SourceKind::Plain,
            status: SourceStatus::Extracted { facts },
        }
    }

    pub fn enriched(name: impl Into<String>, counts: BundleCounts) -> Self {
        Self {
            name: name.into(),
            kind: SourceKind::Enriched,
            status: SourceStatus::Enriched(counts),
        }
    }

    pub fn failed(name: impl Into<String>, kind: SourceKind, error: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind,
            status: SourceStatus::Failed {
                error: error.into(),
            },
        }
    }

    /// Number of facts this source added to the run
    pub fn facts(&self) -> usize {
        match &self.status {
            SourceStatus::Extracted { facts } => *facts,
            SourceStatus::Enriched(counts) => counts.sales,
            SourceStatus::Failed { .. } => 0,
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self.status, SourceStatus::Failed { .. })
    }
}

/// State of one dimension load
#[derive(Debug, Clone, PartialEq)]
pub enum LoadStatus {
    /// Loader completed
    Loaded { records: usize, written: usize },
    /// Loader failed; later dimensions were skipped
    Failed { records: usize, error: String },
    /// Never attempted because an earlier load failed
    Skipped,
}

/// Per-dimension entry of a run report
#[derive(Debug, Clone, PartialEq)]
pub struct DimensionLoadReport {
    pub dimension: Dimension,
    pub status: LoadStatus,
}

/// Stage where a run-level failure happened
#[derive(Debug, Clone, PartialEq)]
pub enum RunStage {
    Extraction { source: String },
    Loading { dimension: Dimension },
}

impl fmt::Display for RunStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RunStage::Extraction { source } => write!(f, "extraction ({source})"),
            RunStage::Loading { dimension } => write!(f, "loading ({dimension})"),
        }
    }
}

/// Failure that ended a run early
#[derive(Debug, Clone, PartialEq)]
pub struct RunFailure {
    pub stage: RunStage,
    pub error: String,
}

impl RunFailure {
    pub fn extraction(source: impl Into<String>, error: impl fmt::Display) -> Self {
        Self {
            stage: RunStage::Extraction {
                source: source.into(),
            },
            error: error.to_string(),
        }
    }

    pub fn loading(dimension: Dimension, error: impl fmt::Display) -> Self {
        Self {
            stage: RunStage::Loading { dimension },
            error: error.to_string(),
        }
    }
}

/// Summary of one extraction run
#[derive(Debug, Clone)]
pub struct RunReport {
    /// Identifier attached to every log event of the run
    pub run_id: Uuid,

    /// Sources in the order they were processed
    pub sources: Vec<SourceReport>,

    /// Size of the aggregated fact sequence
    pub total_facts: usize,

    /// Counts of the bundle, if an enriched source produced one
    pub bundle: Option<BundleCounts>,

    /// Dimension loads, in load order; empty when loading never started
    pub dimensions: Vec<DimensionLoadReport>,

    /// Non-fatal conditions worth surfacing
    pub warnings: Vec<String>,

    /// Run-level failure, if any
    pub failure: Option<RunFailure>,

    /// Whether the run reached its completion event
    pub completed: bool,

    /// Duration of the run
    pub duration: Duration,

    no_sources: bool,
}

impl RunReport {
    /// Create an empty report with a fresh run id
    pub fn new() -> Self {
        Self {
            run_id: Uuid::new_v4(),
            sources: Vec::new(),
            total_facts: 0,
            bundle: None,
            dimensions: Vec::new(),
            warnings: Vec::new(),
            failure: None,
            completed: false,
            duration: Duration::from_secs(0),
            no_sources: false,
        }
    }

    pub fn outcome(&self) -> RunOutcome {
        if self.no_sources {
            RunOutcome::NoSources
        } else if self.failure.is_some() {
            RunOutcome::Aborted
        } else if self.sources.iter().any(SourceReport::is_failed) {
            RunOutcome::Partial
        } else {
            RunOutcome::Succeeded
        }
    }

    /// True only if all three dimensions were loaded
    pub fn dimensions_loaded(&self) -> bool {
        self.dimensions.len() == Dimension::LOAD_ORDER.len()
            && self
                .dimensions
                .iter()
                .all(|d| matches!(d.status, LoadStatus::Loaded { .. }))
    }

    pub fn failed_sources(&self) -> impl Iterator<Item = &SourceReport> {
        self.sources.iter().filter(|s| s.is_failed())
    }

    pub fn dimension(&self, dimension: Dimension) -> Option<&DimensionLoadReport> {
        self.dimensions.iter().find(|d| d.dimension == dimension)
    }

    pub(crate) fn mark_no_sources(&mut self) {
        self.no_sources = true;
    }

    pub(crate) fn record_source(&mut self, source: SourceReport) {
        self.sources.push(source);
    }

    pub(crate) fn add_warning(&mut self, warning: impl Into<String>) {
        self.warnings.push(warning.into());
    }

    /// Mark every dimension as pending (skipped until its loader reports)
    pub(crate) fn begin_loading(&mut self) {
        self.dimensions = Dimension::LOAD_ORDER
            .iter()
            .map(|&dimension| DimensionLoadReport {
                dimension,
                status: LoadStatus::Skipped,
            })
            .collect();
    }

    pub(crate) fn set_load_status(&mut self, dimension: Dimension, status: LoadStatus) {
        if let Some(entry) = self.dimensions.iter_mut().find(|d| d.dimension == dimension) {
            entry.status = status;
        }
    }

    pub(crate) fn set_failure(&mut self, failure: RunFailure) {
        self.failure = Some(failure);
    }

    /// Set the duration
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// Log the report
    pub fn log_summary(&self) {
        tracing::info!(
            run_id = %self.run_id,
            outcome = %self.outcome(),
            sources = self.sources.len(),
            failed_sources = self.failed_sources().count(),
            total_facts = self.total_facts,
            dimensions_loaded = self.dimensions_loaded(),
            duration_ms = self.duration.as_millis() as u64,
            "Extraction run summary"
        );

        for source in self.failed_sources() {
            if let SourceStatus::Failed { error } = &source.status {
                tracing::warn!(source = %source.name, error = %error, "Source contributed no records");
            }
        }

        if let Some(failure) = &self.failure {
            tracing::error!(
                stage = %failure.stage,
                error = %failure.error,
                "Run ended early"
            );
        }
    }
}

impl Default for RunReport {
    fn default() -> Self {
        Self::new()
    }
}
