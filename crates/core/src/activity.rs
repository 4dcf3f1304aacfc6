//! Activity records attached to milestones and tasks: logged time,
//! discussion, and client sign-off.

use serde::{Deserialize, Serialize};

use crate::id::{ApprovalId, CommentId, MilestoneId, TaskId, TimeEntryId, UserId};
use crate::Time;

/// Hours logged against exactly one task or one milestone, never both.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimeEntry {
    /// Unique identifier
    pub id: TimeEntryId,

    /// Owning task, mutually exclusive with `milestone_id`
    #[serde(default)]
    pub task_id: Option<TaskId>,

    /// Owning milestone, mutually exclusive with `task_id`
    #[serde(default)]
    pub milestone_id: Option<MilestoneId>,

    /// Logged duration in hours
    #[serde(default)]
    pub duration: f64,

    /// When the entry was logged
    pub created_at: Time,

    /// Who logged the time
    pub user_id: UserId,
}

impl TimeEntry {
    /// Duration usable for aggregation: negative values clamp to zero
    /// rather than subtracting from the total.
    pub fn billable_duration(&self) -> f64 {
        self.duration.max(0.0)
    }
}

/// A discussion entry on a milestone. Immutable once created.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Comment {
    /// Unique identifier
    pub id: CommentId,

    /// Milestone the comment was left on
    pub milestone_id: MilestoneId,

    /// Display name of the author
    pub author: String,

    /// Comment body
    pub content: String,

    /// When the comment was posted
    pub created_at: Time,
}

/// A client decision on a milestone. A milestone may collect many
/// approvals over time; the latest is the one with the greatest
/// `created_at`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Approval {
    /// Unique identifier
    pub id: ApprovalId,

    /// Milestone the decision applies to
    pub milestone_id: MilestoneId,

    /// Approved or rejected
    pub status: ApprovalStatus,

    /// Optional reviewer notes
    #[serde(default)]
    pub notes: Option<String>,

    /// When the decision was made
    pub created_at: Time,

    /// Who made the decision
    pub approved_by: UserId,
}

/// Outcome of a client review.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApprovalStatus {
    /// Client signed off
    Approved,
    /// Client sent the milestone back
    Rejected,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn negative_duration_clamps_to_zero() {
        let entry = TimeEntry {
            id: TimeEntryId::new("te-1"),
            task_id: Some(TaskId::new("t-1")),
            milestone_id: None,
            duration: -2.5,
            created_at: Utc::now(),
            user_id: UserId::new("u-1"),
        };
        assert_eq!(entry.billable_duration(), 0.0);
    }

    #[test]
    fn approval_status_deserializes_lowercase() {
        let status: ApprovalStatus = serde_json::from_str(r#""approved""#).unwrap();
        assert_eq!(status, ApprovalStatus::Approved);

        let status: ApprovalStatus = serde_json::from_str(r#""rejected""#).unwrap();
        assert_eq!(status, ApprovalStatus::Rejected);
    }
}
