//! Scheduled execution of the pipeline.
//!
//! Registers one cron job from `config.schedule` and keeps the scheduler
//! alive until the process receives a shutdown signal. Secrets are
//! re-read on every tick so a rotated token takes effect without a
//! restart.

use std::sync::Arc;

use tokio_cron_scheduler::{Job, JobScheduler};

use mentionwatch_core::{Secrets, WorkflowConfig};
use mentionwatch_ledger::SimulatedLedger;

/// Run the pipeline on the configured cron schedule until ctrl-c/SIGTERM.
///
/// # Errors
///
/// Returns an error if the scheduler cannot be built or the cron spec in
/// `config.schedule` is invalid. Individual run failures are logged, not
/// propagated — the schedule keeps ticking.
pub async fn run_scheduled(config: WorkflowConfig, executors: usize) -> anyhow::Result<()> {
    let scheduler = JobScheduler::new().await?;
    let cron = config.schedule.clone();
    let config = Arc::new(config);

    let job_config = Arc::clone(&config);
    let job = Job::new_async(cron.as_str(), move |_uuid, _lock| {
        let config = Arc::clone(&job_config);
        Box::pin(async move {
            let secrets = Secrets::from_env();
            match mentionwatch_pipeline::run_once(&config, &secrets, executors, &SimulatedLedger)
                .await
            {
                Ok(summary) => match serde_json::to_string(&summary) {
                    Ok(json) => tracing::info!(summary = %json, "scheduled run complete"),
                    Err(e) => tracing::error!(error = %e, "failed to serialize run summary"),
                },
                Err(e) => tracing::error!(error = %e, "scheduled run failed"),
            }
        })
    })?;

    scheduler.add(job).await?;
    scheduler.start().await?;
    tracing::info!(cron = %cron, "scheduler started");

    shutdown_signal().await;
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to listen for ctrl-c");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("received shutdown signal, stopping scheduler");
}
