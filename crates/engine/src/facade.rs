//! The aggregation engine.

use beacon_core::{ProjectSnapshot, Time, ValidationError};
use beacon_insights::generate_insights;
use beacon_metrics::{compute_metrics, StrategyKind};
use beacon_timeline::build_timeline;
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::status::{PreviousStatus, ProjectStatus};

/// Engine configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EngineConfig {
    /// Which overall-progress formula to run
    #[serde(default)]
    pub strategy: StrategyKind,

    /// Whether to synthesize the timeline on every aggregation.
    /// Dashboards that only show the header metrics leave this off.
    #[serde(default)]
    pub include_timeline: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            strategy: StrategyKind::default(),
            include_timeline: false,
        }
    }
}

/// The aggregation facade.
///
/// Stateless between calls: aggregating the same snapshot twice yields
/// identical output, and concurrent calls on different snapshots need no
/// coordination. The only cross-call state, the previous metrics used
/// for deltas, is owned by the caller and passed in explicitly.
#[derive(Debug, Clone, Default)]
pub struct Engine {
    config: EngineConfig,
}

impl Engine {
    /// Create an engine with the given configuration.
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    /// The active configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Aggregate against the current wall clock.
    ///
    /// Refuses snapshots whose references do not resolve; every other
    /// irregularity degrades metric-by-metric instead of failing.
    pub fn aggregate(
        &self,
        snapshot: &ProjectSnapshot,
        previous: Option<&PreviousStatus>,
    ) -> Result<ProjectStatus, ValidationError> {
        self.aggregate_at(snapshot, Utc::now(), previous)
    }

    /// Aggregate against an explicit instant.
    ///
    /// This is the deterministic entry point: every time-sensitive metric
    /// (overdue counts, velocity, deadline statuses) is evaluated against
    /// `now`, so a pinned clock gives byte-identical output.
    pub fn aggregate_at(
        &self,
        snapshot: &ProjectSnapshot,
        now: Time,
        previous: Option<&PreviousStatus>,
    ) -> Result<ProjectStatus, ValidationError> {
        snapshot.validate()?;

        let strategy = self.config.strategy.strategy();
        tracing::debug!(
            booking = %snapshot.booking_id,
            strategy = strategy.name(),
            milestones = snapshot.milestones.len(),
            tasks = snapshot.task_count(),
            "aggregating project snapshot"
        );

        let metrics = compute_metrics(snapshot, now, strategy);
        let insights = generate_insights(&metrics, previous.map(|p| &p.metrics), snapshot, now);
        let progress_delta = previous
            .map(|p| metrics.overall_progress as i32 - p.metrics.overall_progress as i32);
        let timeline = self
            .config
            .include_timeline
            .then(|| build_timeline(snapshot, now));

        Ok(ProjectStatus {
            booking_id: snapshot.booking_id.clone(),
            metrics,
            progress_delta,
            insights,
            timeline,
            generated_at: now,
        })
    }
}
