//! The mention fetcher: one `ObservationSet` per executor.
//!
//! Each executor runs the same fetch independently; the per-executor
//! samples are reconciled later by [`crate::aggregate_samples`]. The
//! fetcher never retries — the search provider's call budget allows at
//! most one request per logical query, so idempotent retry is the caller's
//! concern.

use std::time::Duration;

use chrono::{SecondsFormat, Utc};
use reqwest::{Client, Url};
use serde::Deserialize;

use mentionwatch_core::{Observation, ObservationSet, SearchConfig};

use crate::error::CollectorError;
use crate::source::ActiveSource;

/// Hard cap on live-source terms: the execution environment budgets five
/// HTTP calls per run and the X API needs one call per term. More terms
/// would require batching through a proxy API.
const MAX_LIVE_TERMS: usize = 5;

/// Page size requested from the X recent-search endpoint.
const TWITTER_MAX_RESULTS: u32 = 100;

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Brand keyword driving the top tier of the mock count formula.
const BRAND_KEYWORD: &str = "chainlink";

#[derive(Debug, Deserialize)]
struct TwitterSearchResponse {
    #[serde(default)]
    meta: Option<TwitterMeta>,
}

#[derive(Debug, Deserialize)]
struct TwitterMeta {
    #[serde(default)]
    result_count: Option<u64>,
}

/// Fetches per-term mention counts from the configured search backend.
///
/// Holds only an immutable HTTP client and the parsed endpoint, so one
/// fetcher can be shared by any number of concurrent executors.
#[derive(Debug)]
pub struct MentionFetcher {
    client: Client,
    endpoint: Url,
}

impl MentionFetcher {
    /// Build a fetcher for the configured endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`CollectorError::InvalidEndpoint`] if `search.apiEndpoint`
    /// is not a valid URL, or [`CollectorError::Http`] if the underlying
    /// `reqwest::Client` cannot be constructed.
    pub fn new(search: &SearchConfig) -> Result<Self, CollectorError> {
        let endpoint =
            Url::parse(&search.api_endpoint).map_err(|e| CollectorError::InvalidEndpoint {
                endpoint: search.api_endpoint.clone(),
                reason: e.to_string(),
            })?;

        let client = Client::builder()
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .connect_timeout(Duration::from_secs(10))
            .user_agent("mentionwatch/0.1 (mention-collection)")
            .build()?;

        Ok(Self { client, endpoint })
    }

    /// Perform one fetch execution and return its observation set.
    ///
    /// Infallible by design: per-term problems (network error, non-success
    /// status, missing response field) degrade to a zero count for that
    /// term. Partial data beats no data.
    pub async fn fetch(&self, search: &SearchConfig, source: &ActiveSource) -> ObservationSet {
        match source {
            ActiveSource::Mock => self.fetch_mock(search).await,
            ActiveSource::Twitter { bearer_token } => {
                self.fetch_twitter(search, bearer_token).await
            }
        }
    }

    /// Mock path: one descriptive request (its outcome is irrelevant to
    /// correctness), then counts synthesized purely from each term's text
    /// so re-fetches of the same config are identical.
    async fn fetch_mock(&self, search: &SearchConfig) -> ObservationSet {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut()
            .append_pair("terms", &search.terms.join(","))
            .append_pair("minutes", &search.window_minutes.to_string());

        match self.client.get(url).send().await {
            Ok(response) => {
                tracing::debug!(status = %response.status(), "mock search request sent");
            }
            Err(e) => {
                tracing::debug!(error = %e, "mock search request failed; counts are synthetic anyway");
            }
        }

        let observed_at = Utc::now();
        let observations: Vec<Observation> = search
            .terms
            .iter()
            .map(|term| Observation {
                term: term.clone(),
                count: mock_count(term),
                observed_at,
            })
            .collect();

        let total_count = observations.iter().map(|o| o.count).sum();
        ObservationSet {
            total_count,
            observations,
            collected_at: observed_at,
        }
    }

    /// Live path: one authenticated recent-search call per term, capped at
    /// [`MAX_LIVE_TERMS`]. Retweets are excluded so reshares don't inflate
    /// the count.
    async fn fetch_twitter(&self, search: &SearchConfig, bearer_token: &str) -> ObservationSet {
        if search.terms.len() > MAX_LIVE_TERMS {
            tracing::warn!(
                configured = search.terms.len(),
                cap = MAX_LIVE_TERMS,
                "term list exceeds live call budget; truncating to the first {MAX_LIVE_TERMS}"
            );
        }
        let terms = &search.terms[..search.terms.len().min(MAX_LIVE_TERMS)];

        let observed_at = Utc::now();
        let start_time = (observed_at - chrono::Duration::minutes(i64::from(search.window_minutes)))
            .to_rfc3339_opts(SecondsFormat::Secs, true);

        let mut observations = Vec::with_capacity(terms.len());
        for term in terms {
            let count = self.count_for_term(term, &start_time, bearer_token).await;
            observations.push(Observation {
                term: term.clone(),
                count,
                observed_at,
            });
        }

        let total_count = observations.iter().map(|o| o.count).sum();
        ObservationSet {
            total_count,
            observations,
            collected_at: observed_at,
        }
    }

    /// One recent-search call for one term. Any failure along the way
    /// yields a zero count and a warning; the run continues.
    async fn count_for_term(&self, term: &str, start_time: &str, bearer_token: &str) -> u64 {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut()
            .append_pair("query", &format!("{term} -is:retweet"))
            .append_pair("start_time", start_time)
            .append_pair("max_results", &TWITTER_MAX_RESULTS.to_string());

        let response = match self.client.get(url).bearer_auth(bearer_token).send().await {
            Ok(r) => r,
            Err(e) => {
                tracing::warn!(term, error = %e, "search request failed; counting 0 mentions");
                return 0;
            }
        };

        let response = match response.error_for_status() {
            Ok(r) => r,
            Err(e) => {
                tracing::warn!(term, error = %e, "search returned non-success status; counting 0 mentions");
                return 0;
            }
        };

        match response.json::<TwitterSearchResponse>().await {
            Ok(body) => body.meta.and_then(|m| m.result_count).unwrap_or(0),
            Err(e) => {
                tracing::warn!(term, error = %e, "search response missing result count; counting 0 mentions");
                0
            }
        }
    }
}

/// Synthetic mention count for the mock source: a pure function of the
/// term text. Brand terms score highest, cashtag-style terms next, plain
/// terms lowest, with a small length-derived perturbation so distinct
/// terms rarely collide.
fn mock_count(term: &str) -> u64 {
    let base = if term.to_lowercase().contains(BRAND_KEYWORD) {
        150
    } else if term.contains('$') {
        75
    } else {
        50
    };
    let variance = (term.len() as u64 * 7) % 20;
    base + variance
}
