use thiserror::Error;

use mentionwatch_collector::CollectorError;
use mentionwatch_core::ConfigError;

/// Errors that abort a pipeline run.
///
/// Both variants are configuration-class problems surfaced before any
/// observation is collected; per-term and reporting failures never reach
/// here.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Collector(#[from] CollectorError),
}
