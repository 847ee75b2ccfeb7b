mod schedule;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use mentionwatch_core::{load_workflow_config, Secrets};
use mentionwatch_ledger::SimulatedLedger;

#[derive(Debug, Parser)]
#[command(name = "mentionwatch")]
#[command(about = "Consensus-aggregated mention tracking and on-chain reporting")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Execute one pipeline run and print the summary as JSON.
    RunOnce {
        /// Path to the workflow config file.
        #[arg(long, default_value = "config/mentionwatch.yaml")]
        config: PathBuf,
        /// Number of independent fetch executions to reconcile by median.
        #[arg(long, default_value_t = 3)]
        executors: usize,
    },
    /// Run the pipeline on the configured cron schedule until interrupted.
    Schedule {
        #[arg(long, default_value = "config/mentionwatch.yaml")]
        config: PathBuf,
        #[arg(long, default_value_t = 3)]
        executors: usize,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let cli = Cli::parse();
    match cli.command {
        Commands::RunOnce { config, executors } => {
            let config = load_workflow_config(&config)?;
            let secrets = Secrets::from_env();
            let summary =
                mentionwatch_pipeline::run_once(&config, &secrets, executors, &SimulatedLedger)
                    .await?;
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
        Commands::Schedule { config, executors } => {
            let config = load_workflow_config(&config)?;
            schedule::run_scheduled(config, executors).await?;
        }
    }

    Ok(())
}
