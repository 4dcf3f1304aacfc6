//! Beacon CLI - aggregate project snapshots from the command line.
//!
//! The reference consumer of the engine: reads a snapshot JSON file,
//! runs one aggregation (or a polling loop for `watch`), and prints the
//! result. The engine itself holds no timer and no file handling; both
//! live here.

use anyhow::{Context, Result};
use beacon_engine::{Engine, EngineConfig, JsonFileSource, PreviousStatus, ProjectStatus};
use beacon_metrics::StrategyKind;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "beacon")]
#[command(about = "Project progress aggregation and insights", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Aggregate a snapshot once and print the status as JSON
    Status {
        /// Path to a snapshot JSON file
        snapshot: PathBuf,
        /// Progress strategy to run
        #[arg(long, default_value_t = StrategyKind::Blended)]
        strategy: StrategyKind,
        /// Include the synthesized timeline in the output
        #[arg(long)]
        timeline: bool,
    },
    /// Print the generated insights, human readable
    Insights {
        /// Path to a snapshot JSON file
        snapshot: PathBuf,
    },
    /// Print the chronological event log
    Timeline {
        /// Path to a snapshot JSON file
        snapshot: PathBuf,
    },
    /// Re-aggregate on a fixed cadence and print progress deltas
    Watch {
        /// Path to a snapshot JSON file (re-read every tick)
        snapshot: PathBuf,
        /// Seconds between aggregations
        #[arg(long, default_value = "10")]
        interval: u64,
        /// Progress strategy to run
        #[arg(long, default_value_t = StrategyKind::Blended)]
        strategy: StrategyKind,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Status {
            snapshot,
            strategy,
            timeline,
        } => {
            let engine = Engine::new(EngineConfig {
                strategy,
                include_timeline: timeline,
            });
            let status = aggregate_file(&engine, &snapshot, None).await?;
            println!("{}", serde_json::to_string_pretty(&status)?);
        }
        Commands::Insights { snapshot } => {
            let status = aggregate_file(&Engine::default(), &snapshot, None).await?;
            println!("Insights ({})", status.insights.len());
            for insight in &status.insights {
                println!("  [{:?}] {}", insight.priority, insight.title);
                println!("      {}", insight.message);
                println!("      action: {}", insight.action);
            }
        }
        Commands::Timeline { snapshot } => {
            let engine = Engine::new(EngineConfig {
                strategy: StrategyKind::Blended,
                include_timeline: true,
            });
            let status = aggregate_file(&engine, &snapshot, None).await?;
            let events = status.timeline.unwrap_or_default();
            println!("Timeline ({} events)", events.len());
            for event in events {
                println!(
                    "  {} | {:<18} | {:<9} | {}",
                    event.timestamp.format("%Y-%m-%d %H:%M"),
                    event.kind,
                    event.status,
                    event.label,
                );
            }
        }
        Commands::Watch {
            snapshot,
            interval,
            strategy,
        } => {
            let engine = Engine::new(EngineConfig {
                strategy,
                include_timeline: false,
            });
            watch(&engine, &snapshot, interval).await?;
        }
    }

    Ok(())
}

/// Load a snapshot file and aggregate it once.
async fn aggregate_file(
    engine: &Engine,
    path: &Path,
    previous: Option<&PreviousStatus>,
) -> Result<ProjectStatus> {
    let source = JsonFileSource::new(path);
    let snapshot = source
        .load()
        .await
        .with_context(|| format!("failed to load snapshot from {}", path.display()))?;
    let status = engine
        .aggregate(&snapshot, previous)
        .context("snapshot failed validation")?;
    Ok(status)
}

/// The external-scheduler loop: the engine stays stateless while this
/// caller carries the previous metrics from tick to tick.
async fn watch(engine: &Engine, path: &Path, interval_secs: u64) -> Result<()> {
    info!(
        path = %path.display(),
        interval_secs,
        "watching snapshot; press Ctrl-C to stop"
    );

    let mut previous: Option<PreviousStatus> = None;
    let mut ticker = tokio::time::interval(std::time::Duration::from_secs(interval_secs.max(1)));

    loop {
        ticker.tick().await;

        let status = match aggregate_file(engine, path, previous.as_ref()).await {
            Ok(status) => status,
            Err(err) => {
                // Keep polling; a half-written file on one tick is not fatal.
                warn!(error = %err, "aggregation failed this tick");
                continue;
            }
        };

        let delta = match status.progress_delta {
            Some(delta) if delta != 0 => format!(" ({delta:+}%)"),
            _ => String::new(),
        };
        println!(
            "progress {}%{} | tasks {}/{} | risk {} | overdue {} | velocity {:.1}/day",
            status.metrics.overall_progress,
            delta,
            status.metrics.completed_tasks,
            status.metrics.total_tasks,
            status.metrics.risk_level,
            status.metrics.overdue_items,
            status.metrics.velocity,
        );

        previous = Some(PreviousStatus::from_status(&status));
    }
}
