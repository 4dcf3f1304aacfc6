//! Metric calculators.
//!
//! Each module computes one derived metric as a pure function of a
//! [`ProjectSnapshot`] and an explicit `now`. Nothing here performs I/O or
//! holds state; calling any function twice with the same inputs yields the
//! same output. Metrics with insufficient inputs (no milestones, no
//! estimates, no approvals) resolve to their documented defaults instead
//! of failing.

#![warn(missing_docs)]

pub mod hours;
pub mod overdue;
pub mod progress;
pub mod risk;
pub mod satisfaction;
pub mod velocity;

use beacon_core::{ProjectSnapshot, Time};
use serde::{Deserialize, Serialize};

pub use hours::{efficiency, hours_summary, HoursSummary};
pub use overdue::{first_overdue_title, next_deadline, overdue_count};
pub use progress::{
    task_completion, BlendedWithTaskCredit, MilestoneRatio, ProgressStrategy, StrategyKind,
};
pub use risk::{risk_level, RiskLevel};
pub use satisfaction::client_satisfaction;
pub use velocity::velocity;

/// Round a percentage half-up and clamp it to `[0, 100]`.
pub(crate) fn round_clamped_pct(value: f64) -> u8 {
    value.round().clamp(0.0, 100.0) as u8
}

/// Every derived metric for one snapshot, computed at one instant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricSet {
    /// Overall progress percentage per the configured strategy
    pub overall_progress: u8,

    /// Percentage of completed tasks across every milestone
    pub task_completion: u8,

    /// Milestones with completed status
    pub completed_milestones: usize,

    /// All milestones in the snapshot
    pub total_milestones: usize,

    /// Tasks with completed status, across all milestones
    pub completed_tasks: usize,

    /// All tasks across all milestones
    pub total_tasks: usize,

    /// Milestones and tasks past their deadline and still open
    pub overdue_items: usize,

    /// Budgeted hours across milestones and tasks
    pub estimated_hours: f64,

    /// Logged hours (time entries, or stored actuals as fallback)
    pub actual_hours: f64,

    /// Percent of budget consumed; above 100 means over budget
    pub efficiency: u32,

    /// Tasks completed per day over the trailing week
    pub velocity: f64,

    /// Coarse health signal
    pub risk_level: RiskLevel,

    /// Earliest deadline among non-completed milestones
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_deadline: Option<Time>,

    /// Percentage of client approvals that were positive
    pub client_satisfaction: u8,
}

/// Compute the full metric set for a snapshot at `now`.
pub fn compute_metrics(
    snapshot: &ProjectSnapshot,
    now: Time,
    strategy: &dyn ProgressStrategy,
) -> MetricSet {
    let hours = hours_summary(snapshot);
    let overdue_items = overdue_count(snapshot, now);
    let efficiency = efficiency(snapshot);
    let overall_progress = strategy.overall_progress(snapshot);

    MetricSet {
        overall_progress,
        task_completion: progress::task_completion(snapshot),
        completed_milestones: snapshot
            .milestones
            .iter()
            .filter(|m| m.status.is_completed())
            .count(),
        total_milestones: snapshot.milestones.len(),
        completed_tasks: snapshot.tasks().filter(|t| t.status.is_completed()).count(),
        total_tasks: snapshot.task_count(),
        overdue_items,
        estimated_hours: hours.estimated,
        actual_hours: hours.actual,
        efficiency,
        velocity: velocity(snapshot, now),
        risk_level: risk_level(
            overdue_items,
            efficiency,
            overall_progress,
            snapshot.milestones.len(),
        ),
        next_deadline: next_deadline(snapshot),
        client_satisfaction: client_satisfaction(snapshot),
    }
}
