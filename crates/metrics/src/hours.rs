//! Hour budgets and efficiency.

use beacon_core::ProjectSnapshot;
use serde::{Deserialize, Serialize};

/// Total budgeted and logged hours for one snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HoursSummary {
    /// Budgeted hours across milestones and tasks
    pub estimated: f64,

    /// Logged hours
    pub actual: f64,
}

/// Sum the hour budgets and logged time for a snapshot.
///
/// Estimates are taken from milestones and tasks alike; both levels are
/// independent line items. Actual hours prefer the time-entry log; when
/// the booking has no time entries at all, the stored `actual_hours`
/// fields stand in. Negative values clamp to zero at the point of
/// summation.
pub fn hours_summary(snapshot: &ProjectSnapshot) -> HoursSummary {
    let estimated = snapshot
        .milestones
        .iter()
        .map(|m| m.estimated_hours.max(0.0))
        .sum::<f64>()
        + snapshot
            .tasks()
            .map(|t| t.estimated_hours.max(0.0))
            .sum::<f64>();

    let actual = if snapshot.time_entries.is_empty() {
        snapshot
            .milestones
            .iter()
            .map(|m| m.actual_hours.max(0.0))
            .sum::<f64>()
            + snapshot.tasks().map(|t| t.actual_hours.max(0.0)).sum::<f64>()
    } else {
        snapshot
            .time_entries
            .iter()
            .map(|e| e.billable_duration())
            .sum()
    };

    HoursSummary { estimated, actual }
}

/// Percent of the hour budget consumed. Above 100 means over budget.
///
/// Zero when no hours were budgeted, regardless of how much was logged.
pub fn efficiency(snapshot: &ProjectSnapshot) -> u32 {
    let hours = hours_summary(snapshot);
    if hours.estimated <= 0.0 {
        if hours.actual > 0.0 {
            tracing::debug!(
                actual = hours.actual,
                "hours logged without a budget; efficiency degrades to 0"
            );
        }
        return 0;
    }
    (100.0 * hours.actual / hours.estimated).round().max(0.0) as u32
}
