//! Coarse project health signal.

use serde::{Deserialize, Serialize};

/// Risk level derived from overdue items, efficiency, and progress.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    /// On track
    #[default]
    Low,
    /// Slipping on budget or pace
    Medium,
    /// At least one deadline already missed
    High,
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            RiskLevel::Low => "low",
            RiskLevel::Medium => "medium",
            RiskLevel::High => "high",
        };
        f.write_str(s)
    }
}

/// Derive the risk level. Overdue items always dominate.
///
/// The low-progress signal only applies once the project has milestones
/// at all; an empty snapshot carries no risk signal and reads as low.
pub fn risk_level(
    overdue_items: usize,
    efficiency: u32,
    overall_progress: u8,
    milestone_count: usize,
) -> RiskLevel {
    if overdue_items > 0 {
        return RiskLevel::High;
    }
    if efficiency > 120 || (milestone_count > 0 && overall_progress < 30) {
        return RiskLevel::Medium;
    }
    RiskLevel::Low
}
