//! The single pipeline entry point.

use chrono::Utc;
use futures::future::join_all;

use mentionwatch_collector::{aggregate_samples, resolve_source, MentionFetcher};
use mentionwatch_core::{ObservationSet, RunSummary, Secrets, TermMentions, WorkflowConfig};
use mentionwatch_ledger::LedgerWriter;

use crate::error::PipelineError;
use crate::report::report_mentions;

/// Execute one pipeline run: collect, reconcile, optionally report, and
/// summarize.
///
/// `executors` is the number of independent fetch executions to reconcile;
/// it is clamped to at least one. Each executor runs the identical fetch
/// concurrently with no shared mutable state, and the median reduction is
/// the only synchronization point. Host-level quorum and timeout policy
/// stay outside this function.
///
/// # Errors
///
/// Returns [`PipelineError`] only for configuration-class problems (schema
/// validation, malformed endpoint URL). Missing credentials, per-term
/// fetch failures, and reporting skips all degrade into the returned
/// [`RunSummary`].
pub async fn run_once<W: LedgerWriter>(
    config: &WorkflowConfig,
    secrets: &Secrets,
    executors: usize,
    writer: &W,
) -> Result<RunSummary, PipelineError> {
    config.validate()?;

    tracing::info!(
        terms = ?config.search.terms,
        window_minutes = config.search.window_minutes,
        api_type = %config.search.api_type,
        "starting mention check"
    );

    // Resolved exactly once; the fetch path never looks at credentials.
    let source = resolve_source(&config.search, secrets);
    let fetcher = MentionFetcher::new(&config.search)?;

    let executor_count = executors.max(1);
    let samples: Vec<ObservationSet> = join_all(
        (0..executor_count).map(|_| fetcher.fetch(&config.search, &source)),
    )
    .await;

    let canonical = aggregate_samples(&samples, Utc::now())?;

    for obs in &canonical.observations {
        tracing::info!(term = %obs.term, count = obs.count, "canonical mention count");
    }
    tracing::info!(total = canonical.total_count, "mention check complete");

    let outcome = report_mentions(config.evm.as_ref(), &canonical, writer);

    Ok(RunSummary {
        total_mentions: canonical.total_count,
        terms: canonical
            .observations
            .iter()
            .map(|o| TermMentions {
                term: o.term.clone(),
                count: o.count,
            })
            .collect(),
        timestamp: canonical.collected_at.to_rfc3339(),
        reporting_outcome: outcome.tag(),
    })
}
