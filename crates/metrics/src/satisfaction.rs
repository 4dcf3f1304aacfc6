//! Client satisfaction from approval history.

use beacon_core::{ApprovalStatus, ProjectSnapshot};

use crate::round_clamped_pct;

/// Percentage of approvals that were positive, across all milestones.
///
/// Every recorded decision counts, not just the latest per milestone; a
/// milestone that was rejected twice before being approved drags the
/// number down. Zero when no approvals exist yet.
pub fn client_satisfaction(snapshot: &ProjectSnapshot) -> u8 {
    let mut approved = 0usize;
    let mut rejected = 0usize;
    for approval in snapshot.approvals() {
        match approval.status {
            ApprovalStatus::Approved => approved += 1,
            ApprovalStatus::Rejected => rejected += 1,
        }
    }

    let total = approved + rejected;
    if total == 0 {
        return 0;
    }
    round_clamped_pct(100.0 * approved as f64 / total as f64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{milestone, test_now};
    use beacon_core::{
        Approval, ApprovalId, BookingId, MilestoneId, ProjectSnapshot, UserId, WorkStatus,
    };
    use std::collections::BTreeMap;

    fn approval(id: &str, milestone_id: &str, status: ApprovalStatus) -> Approval {
        Approval {
            id: ApprovalId::new(id),
            milestone_id: MilestoneId::new(milestone_id),
            status,
            notes: None,
            created_at: test_now(),
            approved_by: UserId::new("client-1"),
        }
    }

    fn snapshot_with_approvals(approvals: Vec<Approval>) -> ProjectSnapshot {
        let mut by_milestone: BTreeMap<MilestoneId, Vec<Approval>> = BTreeMap::new();
        for a in approvals {
            by_milestone.entry(a.milestone_id.clone()).or_default().push(a);
        }
        ProjectSnapshot::new(
            BookingId::new("b-1"),
            vec![
                milestone("ms-1", WorkStatus::InProgress, Vec::new()),
                milestone("ms-2", WorkStatus::InProgress, Vec::new()),
            ],
            Vec::new(),
            BTreeMap::new(),
            by_milestone,
        )
        .unwrap()
    }

    #[test]
    fn seven_of_ten_approvals_reads_seventy() {
        let mut approvals = Vec::new();
        for i in 0..7 {
            approvals.push(approval(&format!("a-{i}"), "ms-1", ApprovalStatus::Approved));
        }
        for i in 7..10 {
            approvals.push(approval(&format!("a-{i}"), "ms-2", ApprovalStatus::Rejected));
        }

        let snap = snapshot_with_approvals(approvals);
        assert_eq!(client_satisfaction(&snap), 70);
    }

    #[test]
    fn no_approvals_reads_zero() {
        let snap = snapshot_with_approvals(Vec::new());
        assert_eq!(client_satisfaction(&snap), 0);
    }

    #[test]
    fn all_rejected_reads_zero() {
        let snap = snapshot_with_approvals(vec![
            approval("a-1", "ms-1", ApprovalStatus::Rejected),
            approval("a-2", "ms-1", ApprovalStatus::Rejected),
        ]);
        assert_eq!(client_satisfaction(&snap), 0);
    }
}
