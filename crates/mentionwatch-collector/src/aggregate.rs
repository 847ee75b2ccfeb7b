//! Median reduction of independent observation samples.
//!
//! Each executor fetches the same terms against the same window, but the
//! backend is nondeterministic (pagination, caching, rate limits), so the
//! samples disagree. The per-index median tolerates a minority of stale,
//! rate-limited, or manipulated samples without letting any single outlier
//! pull the agreed value — this is the pipeline's only defense against an
//! unreliable executor, so it must be an exact median, not a mean.

use chrono::{DateTime, Utc};

use mentionwatch_core::{Observation, ObservationSet};

use crate::error::CollectorError;

/// Reduce one sample per executor to the canonical observation set.
///
/// For each term index the canonical count is the statistical median of
/// that index's counts across all samples. Even sample counts use the
/// lower median (the left of the two middle values) so the result is
/// always a count some executor actually observed. `total_count` is
/// recomputed from the canonical per-term counts — summing medians, never
/// taking a median of sums, which would smooth twice.
///
/// Term order follows the first sample; all samples carry the configured
/// term order, so same-index entries refer to the same term. The caller
/// supplies `collected_at` so the canonical timestamp does not favor
/// whichever executor finished first.
///
/// A single sample is returned unchanged apart from the timestamps.
///
/// # Errors
///
/// Returns [`CollectorError::NoSamples`] if `samples` is empty.
pub fn aggregate_samples(
    samples: &[ObservationSet],
    collected_at: DateTime<Utc>,
) -> Result<ObservationSet, CollectorError> {
    let first = samples.first().ok_or(CollectorError::NoSamples)?;

    let observations: Vec<Observation> = first
        .observations
        .iter()
        .enumerate()
        .map(|(i, obs)| {
            let mut counts: Vec<u64> = samples
                .iter()
                .filter_map(|s| s.observations.get(i))
                .map(|o| o.count)
                .collect();
            Observation {
                term: obs.term.clone(),
                count: median(&mut counts),
                observed_at: collected_at,
            }
        })
        .collect();

    let total_count = observations.iter().map(|o| o.count).sum();
    Ok(ObservationSet {
        total_count,
        observations,
        collected_at,
    })
}

/// Lower median: sort and take the middle element, preferring the left of
/// the two middle values when the count is even.
fn median(counts: &mut [u64]) -> u64 {
    debug_assert!(!counts.is_empty());
    counts.sort_unstable();
    counts[(counts.len() - 1) / 2]
}
