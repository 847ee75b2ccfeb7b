//! Active-source resolution: decide once per run whether the fetcher talks
//! to the live API or synthesizes mock data.

use mentionwatch_core::{ApiKind, SearchConfig, Secrets};

/// The search backend a run actually uses, resolved once at run start so
/// no credential checks are scattered through the fetch path.
#[derive(Clone, PartialEq, Eq)]
pub enum ActiveSource {
    Mock,
    Twitter { bearer_token: String },
}

impl std::fmt::Debug for ActiveSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ActiveSource::Mock => write!(f, "Mock"),
            ActiveSource::Twitter { .. } => write!(f, "Twitter {{ bearer_token: [redacted] }}"),
        }
    }
}

/// Resolve the active source from config and secrets.
///
/// An inline config token takes precedence over the `TWITTER_BEARER_TOKEN`
/// secret. A `twitter` config with no token anywhere degrades to the mock
/// source with a warning — missing credentials never fail a run.
#[must_use]
pub fn resolve_source(search: &SearchConfig, secrets: &Secrets) -> ActiveSource {
    match search.api_type {
        ApiKind::Mock => ActiveSource::Mock,
        ApiKind::Twitter => {
            let token = search
                .bearer_token
                .clone()
                .or_else(|| secrets.twitter_bearer_token.clone());
            match token {
                Some(bearer_token) => ActiveSource::Twitter { bearer_token },
                None => {
                    tracing::warn!("no X API bearer token found, falling back to mock data");
                    ActiveSource::Mock
                }
            }
        }
    }
}
