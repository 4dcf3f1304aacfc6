//! Task model - the atomic unit of work inside a milestone.

use serde::{Deserialize, Serialize};

use crate::de;
use crate::id::{MilestoneId, TaskId};
use crate::milestone::WorkStatus;
use crate::Time;

/// A task belongs to exactly one milestone.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    /// Unique identifier
    pub id: TaskId,

    /// Owning milestone
    pub milestone_id: MilestoneId,

    /// Task title
    pub title: String,

    /// Current status
    #[serde(default)]
    pub status: WorkStatus,

    /// Progress percentage as stored by the datastore (0-100)
    #[serde(default)]
    pub progress_percentage: f64,

    /// Priority assigned by the provider
    #[serde(default)]
    pub priority: TaskPriority,

    /// Deadline, if one was agreed. Malformed values degrade to `None`.
    #[serde(
        default,
        deserialize_with = "de::option_lenient",
        serialize_with = "de::option_rfc3339"
    )]
    pub due_date: Option<Time>,

    /// Budgeted hours
    #[serde(default)]
    pub estimated_hours: f64,

    /// Hours logged directly against the task
    #[serde(default)]
    pub actual_hours: f64,

    /// Completion timestamp, set when the task was finished
    #[serde(
        default,
        deserialize_with = "de::option_lenient",
        serialize_with = "de::option_rfc3339"
    )]
    pub completed_at: Option<Time>,

    /// Creation timestamp
    pub created_at: Time,
}

impl Task {
    /// Whether the task's deadline has passed without completion.
    pub fn is_overdue(&self, now: Time) -> bool {
        match self.due_date {
            Some(due) => due < now && !self.status.is_terminal(),
            None => false,
        }
    }

    /// Whether the task completed inside the window `(now - window, now]`.
    pub fn completed_within(&self, now: Time, window: chrono::Duration) -> bool {
        if !self.status.is_completed() {
            return false;
        }
        match self.completed_at {
            Some(done) => done > now - window && done <= now,
            None => false,
        }
    }
}

/// Task priority.
///
/// The datastore historically stored both `normal` and `medium` for the
/// middle tier; both spellings deserialize to [`TaskPriority::Normal`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskPriority {
    /// Can slip without consequence
    Low,
    /// Default priority
    #[default]
    #[serde(alias = "medium")]
    Normal,
    /// Needs attention this week
    High,
    /// Needs attention today
    Urgent,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};

    fn bare_task(status: WorkStatus) -> Task {
        Task {
            id: TaskId::new("t-1"),
            milestone_id: MilestoneId::new("ms-1"),
            title: "Wireframes".to_string(),
            status,
            progress_percentage: 0.0,
            priority: TaskPriority::Normal,
            due_date: None,
            estimated_hours: 0.0,
            actual_hours: 0.0,
            completed_at: None,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn medium_aliases_to_normal_priority() {
        let priority: TaskPriority = serde_json::from_str(r#""medium""#).unwrap();
        assert_eq!(priority, TaskPriority::Normal);

        let priority: TaskPriority = serde_json::from_str(r#""normal""#).unwrap();
        assert_eq!(priority, TaskPriority::Normal);
    }

    #[test]
    fn priority_ordering_tracks_urgency() {
        assert!(TaskPriority::Low < TaskPriority::Normal);
        assert!(TaskPriority::Normal < TaskPriority::High);
        assert!(TaskPriority::High < TaskPriority::Urgent);
    }

    #[test]
    fn completed_within_requires_completed_status_and_timestamp() {
        let now = Utc::now();
        let window = Duration::days(7);

        let mut task = bare_task(WorkStatus::Completed);
        task.completed_at = Some(now - Duration::days(2));
        assert!(task.completed_within(now, window));

        // Too old
        task.completed_at = Some(now - Duration::days(8));
        assert!(!task.completed_within(now, window));

        // Completed status but no timestamp
        task.completed_at = None;
        assert!(!task.completed_within(now, window));

        // Timestamp but not completed
        let mut task = bare_task(WorkStatus::InProgress);
        task.completed_at = Some(now - Duration::days(1));
        assert!(!task.completed_within(now, window));
    }

    #[test]
    fn task_overdue_mirrors_milestone_rules() {
        let now = Utc::now();
        let mut task = bare_task(WorkStatus::Pending);
        task.due_date = Some(now - Duration::hours(1));
        assert!(task.is_overdue(now));

        task.status = WorkStatus::Cancelled;
        assert!(!task.is_overdue(now));
    }
}
