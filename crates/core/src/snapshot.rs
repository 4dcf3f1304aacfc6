//! Point-in-time view of all entities for one booking.

use std::collections::{BTreeMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::activity::{Approval, Comment, TimeEntry};
use crate::id::{BookingId, MilestoneId, TaskId};
use crate::milestone::Milestone;
use crate::task::Task;

/// Errors raised while assembling a [`ProjectSnapshot`].
///
/// These are the only fatal errors in the pipeline: a snapshot whose
/// references do not resolve is refused outright rather than aggregated
/// on a guess. Everything downstream degrades instead of failing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// A task is nested under one milestone but claims another as owner.
    #[error("task {task} is nested under milestone {parent} but references {referenced}")]
    TaskMilestoneMismatch {
        /// The offending task
        task: TaskId,
        /// The milestone the task is nested under
        parent: MilestoneId,
        /// The milestone the task references
        referenced: MilestoneId,
    },

    /// A time entry names neither a task nor a milestone as its owner.
    #[error("time entry {entry} is owned by neither a task nor a milestone")]
    UnownedTimeEntry {
        /// The offending entry id (raw string)
        entry: String,
    },

    /// A time entry names both a task and a milestone as its owner.
    #[error("time entry {entry} is owned by both a task and a milestone")]
    AmbiguouslyOwnedTimeEntry {
        /// The offending entry id (raw string)
        entry: String,
    },

    /// A time entry references a task that is not in the snapshot.
    #[error("time entry {entry} references unknown task {task}")]
    UnknownTask {
        /// The offending entry id (raw string)
        entry: String,
        /// The missing task
        task: TaskId,
    },

    /// A time entry references a milestone that is not in the snapshot.
    #[error("time entry {entry} references unknown milestone {milestone}")]
    UnknownMilestone {
        /// The offending entry id (raw string)
        entry: String,
        /// The missing milestone
        milestone: MilestoneId,
    },
}

/// An immutable point-in-time view of all entities for one booking.
///
/// Milestones arrive in display order with their tasks nested; time
/// entries are flat; comments and approvals are grouped per milestone.
/// `BTreeMap` keeps the grouped collections in a stable order so that
/// serializing the same snapshot twice is byte-identical.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectSnapshot {
    /// The booking every entity in this snapshot belongs to
    pub booking_id: BookingId,

    /// Ordered milestones with nested tasks
    #[serde(default)]
    pub milestones: Vec<Milestone>,

    /// All time entries for the booking
    #[serde(default)]
    pub time_entries: Vec<TimeEntry>,

    /// Comments grouped by milestone
    #[serde(default)]
    pub comments_by_milestone: BTreeMap<MilestoneId, Vec<Comment>>,

    /// Approvals grouped by milestone
    #[serde(default)]
    pub approvals_by_milestone: BTreeMap<MilestoneId, Vec<Approval>>,
}

impl ProjectSnapshot {
    /// Assemble and validate a snapshot.
    pub fn new(
        booking_id: BookingId,
        milestones: Vec<Milestone>,
        time_entries: Vec<TimeEntry>,
        comments_by_milestone: BTreeMap<MilestoneId, Vec<Comment>>,
        approvals_by_milestone: BTreeMap<MilestoneId, Vec<Approval>>,
    ) -> Result<Self, ValidationError> {
        let snapshot = Self {
            booking_id,
            milestones,
            time_entries,
            comments_by_milestone,
            approvals_by_milestone,
        };
        snapshot.validate()?;
        Ok(snapshot)
    }

    /// Re-check referential integrity.
    ///
    /// Deserialization bypasses [`ProjectSnapshot::new`], so consumers that
    /// accept snapshots off the wire call this before aggregating.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let milestone_ids: HashSet<&MilestoneId> =
            self.milestones.iter().map(|m| &m.id).collect();
        let task_ids: HashSet<&TaskId> = self.tasks().map(|t| &t.id).collect();

        for milestone in &self.milestones {
            for task in &milestone.tasks {
                if task.milestone_id != milestone.id {
                    return Err(ValidationError::TaskMilestoneMismatch {
                        task: task.id.clone(),
                        parent: milestone.id.clone(),
                        referenced: task.milestone_id.clone(),
                    });
                }
            }
        }

        for entry in &self.time_entries {
            match (&entry.task_id, &entry.milestone_id) {
                (None, None) => {
                    return Err(ValidationError::UnownedTimeEntry {
                        entry: entry.id.to_string(),
                    });
                }
                (Some(_), Some(_)) => {
                    return Err(ValidationError::AmbiguouslyOwnedTimeEntry {
                        entry: entry.id.to_string(),
                    });
                }
                (Some(task_id), None) => {
                    if !task_ids.contains(task_id) {
                        return Err(ValidationError::UnknownTask {
                            entry: entry.id.to_string(),
                            task: task_id.clone(),
                        });
                    }
                }
                (None, Some(milestone_id)) => {
                    if !milestone_ids.contains(milestone_id) {
                        return Err(ValidationError::UnknownMilestone {
                            entry: entry.id.to_string(),
                            milestone: milestone_id.clone(),
                        });
                    }
                }
            }
        }

        Ok(())
    }

    /// Iterate every task across all milestones, in milestone order.
    pub fn tasks(&self) -> impl Iterator<Item = &Task> {
        self.milestones.iter().flat_map(|m| m.tasks.iter())
    }

    /// Total number of tasks across all milestones.
    pub fn task_count(&self) -> usize {
        self.milestones.iter().map(|m| m.tasks.len()).sum()
    }

    /// Iterate every approval across all milestones.
    pub fn approvals(&self) -> impl Iterator<Item = &Approval> {
        self.approvals_by_milestone.values().flatten()
    }

    /// Iterate every comment across all milestones.
    pub fn comments(&self) -> impl Iterator<Item = &Comment> {
        self.comments_by_milestone.values().flatten()
    }

    /// Look up a milestone by id.
    pub fn find_milestone(&self, id: &MilestoneId) -> Option<&Milestone> {
        self.milestones.iter().find(|m| &m.id == id)
    }

    /// Look up a task by id across all milestones.
    pub fn find_task(&self, id: &TaskId) -> Option<&Task> {
        self.tasks().find(|t| &t.id == id)
    }
}
