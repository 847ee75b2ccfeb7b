//! Domain value types flowing through one pipeline run.
//!
//! Everything here is created fresh per run and discarded at run end; no
//! cross-run state lives in these types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One term's mention count from one fetch execution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Observation {
    pub term: String,
    pub count: u64,
    pub observed_at: DateTime<Utc>,
}

/// A full set of per-term observations.
///
/// Serves double duty: each executor produces one as its sample, and the
/// aggregation step returns one as the agreed-upon canonical result. The
/// two are distinguished by provenance, not by shape — aggregation must
/// accept and return the same type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObservationSet {
    /// Sum of all per-term counts.
    pub total_count: u64,
    /// Observations in configured term order, regardless of fetch
    /// completion order, so same-index entries align across executors.
    pub observations: Vec<Observation>,
    pub collected_at: DateTime<Utc>,
}

/// Per-term entry in the run summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TermMentions {
    pub term: String,
    pub count: u64,
}

/// Terminal output of one pipeline run.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunSummary {
    pub total_mentions: u64,
    pub terms: Vec<TermMentions>,
    /// RFC 3339 timestamp of the canonical result.
    pub timestamp: String,
    /// Outcome tag of the reporting step: `disabled`, `network-not-found`,
    /// `write-failed`, or a comma-joined list of write references.
    pub reporting_outcome: String,
}
