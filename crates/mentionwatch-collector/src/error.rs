use thiserror::Error;

/// Errors raised by the collector.
///
/// Per-term fetch failures never surface here — they degrade to a zero
/// count inside the fetcher. These variants cover construction problems
/// and misuse of the aggregation function.
#[derive(Debug, Error)]
pub enum CollectorError {
    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    /// The configured API endpoint is not a valid URL.
    #[error("invalid API endpoint '{endpoint}': {reason}")]
    InvalidEndpoint { endpoint: String, reason: String },

    /// Aggregation was invoked with no samples.
    #[error("no observation sets to aggregate")]
    NoSamples,
}
