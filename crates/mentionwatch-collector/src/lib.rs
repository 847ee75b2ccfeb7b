//! Mention collection: fetch one observation set per executor and reduce
//! the samples to a single canonical result.
//!
//! The fetcher is deterministic given identical network responses and
//! degrades per-term failures to a zero count rather than aborting.
//! Aggregation is a pure per-index median — executor fan-out and quorum
//! policy live with the caller.

pub mod aggregate;
pub mod error;
pub mod fetch;
pub mod source;

pub use aggregate::aggregate_samples;
pub use error::CollectorError;
pub use fetch::MentionFetcher;
pub use source::{resolve_source, ActiveSource};
