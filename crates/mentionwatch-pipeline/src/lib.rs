//! Pipeline orchestration: one `run_once` call per schedule tick.
//!
//! Sequences fetch fan-out, median reconciliation, optional on-chain
//! reporting, and summary assembly. Only configuration problems fail a
//! run; everything downstream degrades in place and shows up in the
//! summary's data or outcome tag instead.

pub mod error;
pub mod report;
pub mod run;

pub use error::PipelineError;
pub use report::{report_mentions, ReportOutcome};
pub use run::run_once;
