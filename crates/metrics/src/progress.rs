//! Overall progress calculators.
//!
//! Two formulas for the headline number were historically in use: a pure
//! milestone ratio and a blended variant that grants partial credit for
//! in-flight milestones. Both are kept behind [`ProgressStrategy`] so the
//! facade can select one by configuration and both stay independently
//! testable.

use beacon_core::ProjectSnapshot;
use serde::{Deserialize, Serialize};

use crate::round_clamped_pct;

/// Strategy for deriving the headline progress percentage.
pub trait ProgressStrategy: Send + Sync {
    /// Short identifier for logs and config files.
    fn name(&self) -> &'static str;

    /// Overall progress in `[0, 100]`.
    fn overall_progress(&self, snapshot: &ProjectSnapshot) -> u8;
}

/// Progress as the plain ratio of completed milestones.
#[derive(Debug, Clone, Copy, Default)]
pub struct MilestoneRatio;

impl ProgressStrategy for MilestoneRatio {
    fn name(&self) -> &'static str {
        "milestone-ratio"
    }

    fn overall_progress(&self, snapshot: &ProjectSnapshot) -> u8 {
        let total = snapshot.milestones.len();
        if total == 0 {
            return 0;
        }
        let completed = snapshot
            .milestones
            .iter()
            .filter(|m| m.status.is_completed())
            .count();
        round_clamped_pct(100.0 * completed as f64 / total as f64)
    }
}

/// Progress with partial credit for milestones still in flight.
///
/// A completed milestone contributes its full share (`100 / N`). An open
/// milestone contributes up to half a share, scaled by how many of its own
/// tasks are done. Cancelled milestones contribute nothing but stay in the
/// denominator. Completion is judged by status alone; the stored
/// `progress_percentage` is never consulted.
#[derive(Debug, Clone, Copy, Default)]
pub struct BlendedWithTaskCredit;

impl ProgressStrategy for BlendedWithTaskCredit {
    fn name(&self) -> &'static str {
        "blended"
    }

    fn overall_progress(&self, snapshot: &ProjectSnapshot) -> u8 {
        let total = snapshot.milestones.len();
        if total == 0 {
            return 0;
        }

        let share = 100.0 / total as f64;
        let mut progress = 0.0;
        for milestone in &snapshot.milestones {
            if milestone.status.is_completed() {
                progress += share;
            } else if !milestone.status.is_terminal() {
                if let Some(ratio) = milestone.task_completion_ratio() {
                    progress += ratio * share * 0.5;
                }
            }
        }

        round_clamped_pct(progress)
    }
}

/// Which [`ProgressStrategy`] the facade should run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StrategyKind {
    /// [`MilestoneRatio`]
    MilestoneRatio,
    /// [`BlendedWithTaskCredit`] (the default)
    #[default]
    Blended,
}

impl StrategyKind {
    /// The strategy instance this kind names.
    pub fn strategy(self) -> &'static dyn ProgressStrategy {
        match self {
            StrategyKind::MilestoneRatio => &MilestoneRatio,
            StrategyKind::Blended => &BlendedWithTaskCredit,
        }
    }
}

impl std::fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.strategy().name())
    }
}

impl std::str::FromStr for StrategyKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "milestone-ratio" => Ok(StrategyKind::MilestoneRatio),
            "blended" => Ok(StrategyKind::Blended),
            other => Err(format!(
                "unknown progress strategy '{other}' (expected 'milestone-ratio' or 'blended')"
            )),
        }
    }
}

/// Percentage of completed tasks across every milestone.
pub fn task_completion(snapshot: &ProjectSnapshot) -> u8 {
    let total = snapshot.task_count();
    if total == 0 {
        return 0;
    }
    let completed = snapshot.tasks().filter(|t| t.status.is_completed()).count();
    round_clamped_pct(100.0 * completed as f64 / total as f64)
}
