//! Secret resolution, decoupled from the process environment for testing.

use std::env::VarError;

/// Secrets consumed by a pipeline run.
///
/// Only one secret is recognized: the X API bearer token, used when
/// `search.apiType` is `twitter` and no inline token is configured.
#[derive(Clone, Default)]
pub struct Secrets {
    pub twitter_bearer_token: Option<String>,
}

impl Secrets {
    /// Read secrets from the process environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key))
    }

    /// Build secrets using the provided env-var lookup function, so tests
    /// can supply a plain map instead of mutating the process environment.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Result<String, VarError>,
    {
        Self {
            twitter_bearer_token: lookup("TWITTER_BEARER_TOKEN").ok(),
        }
    }
}

impl std::fmt::Debug for Secrets {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Secrets")
            .field(
                "twitter_bearer_token",
                &self.twitter_bearer_token.as_ref().map(|_| "[redacted]"),
            )
            .finish()
    }
}
