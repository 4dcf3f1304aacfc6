//! Milestone model - a weighted phase of a project containing tasks.

use serde::{Deserialize, Serialize};

use crate::de;
use crate::id::MilestoneId;
use crate::task::Task;
use crate::Time;

/// A milestone is a phase of the booked project with its own tasks,
/// deadline, and hour budget.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Milestone {
    /// Unique identifier
    pub id: MilestoneId,

    /// Milestone title
    pub title: String,

    /// Current status
    #[serde(default)]
    pub status: WorkStatus,

    /// Progress percentage as stored by the datastore (0-100).
    ///
    /// Advisory only: the engine recomputes progress from statuses and
    /// never trusts this to be 100 on completed milestones.
    #[serde(default)]
    pub progress_percentage: f64,

    /// Deadline, if one was agreed. Malformed values degrade to `None`.
    #[serde(
        default,
        deserialize_with = "de::option_lenient",
        serialize_with = "de::option_rfc3339"
    )]
    pub due_date: Option<Time>,

    /// Relative weight of this milestone within the project (> 0).
    #[serde(default = "default_weight")]
    pub weight: f64,

    /// Budgeted hours
    #[serde(default)]
    pub estimated_hours: f64,

    /// Hours logged directly against the milestone
    #[serde(default)]
    pub actual_hours: f64,

    /// Creation timestamp
    pub created_at: Time,

    /// Completion timestamp, set when the milestone was closed out
    #[serde(
        default,
        deserialize_with = "de::option_lenient",
        serialize_with = "de::option_rfc3339"
    )]
    pub completed_at: Option<Time>,

    /// Tasks belonging to this milestone, in display order
    #[serde(default)]
    pub tasks: Vec<Task>,
}

fn default_weight() -> f64 {
    1.0
}

impl Milestone {
    /// Number of completed tasks in this milestone.
    pub fn completed_task_count(&self) -> usize {
        self.tasks.iter().filter(|t| t.status.is_completed()).count()
    }

    /// Fraction of this milestone's tasks that are complete.
    ///
    /// `None` when the milestone has no tasks at all.
    pub fn task_completion_ratio(&self) -> Option<f64> {
        if self.tasks.is_empty() {
            return None;
        }
        Some(self.completed_task_count() as f64 / self.tasks.len() as f64)
    }

    /// Whether the milestone's deadline has passed without completion.
    pub fn is_overdue(&self, now: Time) -> bool {
        match self.due_date {
            Some(due) => due < now && !self.status.is_terminal(),
            None => false,
        }
    }
}

/// Status shared by milestones and tasks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkStatus {
    /// Not yet started
    #[default]
    Pending,
    /// Actively being worked
    InProgress,
    /// Finished
    Completed,
    /// Abandoned, will not be delivered
    Cancelled,
    /// Paused by either party
    OnHold,
}

impl WorkStatus {
    /// Whether the item is finished.
    pub fn is_completed(self) -> bool {
        matches!(self, WorkStatus::Completed)
    }

    /// Whether the item left the active lifecycle (completed or cancelled).
    ///
    /// Terminal items never count as overdue.
    pub fn is_terminal(self) -> bool {
        matches!(self, WorkStatus::Completed | WorkStatus::Cancelled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};

    fn bare_milestone() -> Milestone {
        Milestone {
            id: MilestoneId::new("ms-1"),
            title: "Design".to_string(),
            status: WorkStatus::Pending,
            progress_percentage: 0.0,
            due_date: None,
            weight: 1.0,
            estimated_hours: 0.0,
            actual_hours: 0.0,
            created_at: Utc::now(),
            completed_at: None,
            tasks: Vec::new(),
        }
    }

    #[test]
    fn status_deserializes_snake_case() {
        let status: WorkStatus = serde_json::from_str(r#""in_progress""#).unwrap();
        assert_eq!(status, WorkStatus::InProgress);

        let status: WorkStatus = serde_json::from_str(r#""on_hold""#).unwrap();
        assert_eq!(status, WorkStatus::OnHold);
    }

    #[test]
    fn weight_defaults_to_one() {
        let json = r#"{
            "id": "ms-1",
            "title": "Design",
            "created_at": "2024-03-01T00:00:00Z"
        }"#;
        let milestone: Milestone = serde_json::from_str(json).unwrap();
        assert_eq!(milestone.weight, 1.0);
        assert_eq!(milestone.status, WorkStatus::Pending);
        assert!(milestone.tasks.is_empty());
    }

    #[test]
    fn malformed_due_date_degrades_to_none() {
        let json = r#"{
            "id": "ms-1",
            "title": "Design",
            "due_date": "soonish",
            "created_at": "2024-03-01T00:00:00Z"
        }"#;
        let milestone: Milestone = serde_json::from_str(json).unwrap();
        assert!(milestone.due_date.is_none());
    }

    #[test]
    fn overdue_requires_open_status_and_past_deadline() {
        let now = Utc::now();
        let mut milestone = bare_milestone();

        milestone.due_date = Some(now - Duration::days(1));
        assert!(milestone.is_overdue(now));

        milestone.status = WorkStatus::Completed;
        assert!(!milestone.is_overdue(now));

        milestone.status = WorkStatus::Cancelled;
        assert!(!milestone.is_overdue(now));

        milestone.status = WorkStatus::Pending;
        milestone.due_date = Some(now + Duration::days(1));
        assert!(!milestone.is_overdue(now));

        milestone.due_date = None;
        assert!(!milestone.is_overdue(now));
    }

    #[test]
    fn task_completion_ratio_is_none_without_tasks() {
        let milestone = bare_milestone();
        assert!(milestone.task_completion_ratio().is_none());
    }
}
