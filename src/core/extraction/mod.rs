//! Extraction runs
//!
//! - [`ExtractionOrchestrator`] drives a run across sources and dimension loaders
//! - [`RunReport`] describes what a run did, including partial and aborted runs

pub mod orchestrator;
pub mod report;

pub use orchestrator::ExtractionOrchestrator;
pub use report::{
    DimensionLoadReport, LoadStatus, RunFailure, RunOutcome, RunReport, RunStage, SourceReport,
    SourceStatus,
};
