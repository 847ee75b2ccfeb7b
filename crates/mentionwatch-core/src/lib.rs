//! Shared configuration and domain types for the mentionwatch workspace.
//!
//! Holds the workflow config schema (YAML), secrets resolution, and the
//! observation/summary value types passed between the collector, the
//! aggregation step, and the ledger reporter.

pub mod config;
pub mod error;
pub mod secrets;
pub mod types;

pub use config::{load_workflow_config, ApiKind, EvmConfig, SearchConfig, WorkflowConfig};
pub use error::ConfigError;
pub use secrets::Secrets;
pub use types::{Observation, ObservationSet, RunSummary, TermMentions};
