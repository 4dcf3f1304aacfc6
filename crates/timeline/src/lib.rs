//! Timeline event synthesis.
//!
//! Converts the raw entity graph into a flat, chronologically ordered
//! sequence of typed events for visualization. Events are synthesized,
//! not stored: every invocation derives them from the snapshot again.
//! An entity missing its timestamp yields no event; dates are never
//! fabricated.

#![warn(missing_docs)]

use beacon_core::{ApprovalStatus, ProjectSnapshot, Time};
use serde::{Deserialize, Serialize};

/// The kind of occurrence an event records.
///
/// Variant order is the tie-break precedence: when two events share a
/// timestamp, the kind declared earlier sorts first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimelineEventKind {
    /// A milestone was created
    MilestoneStart,
    /// A task was finished
    TaskComplete,
    /// A comment was posted
    Comment,
    /// A client decision was recorded
    Approval,
    /// A milestone was closed out
    MilestoneComplete,
    /// A milestone deadline
    Deadline,
}

impl std::fmt::Display for TimelineEventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            TimelineEventKind::MilestoneStart => "milestone_start",
            TimelineEventKind::TaskComplete => "task_complete",
            TimelineEventKind::Comment => "comment",
            TimelineEventKind::Approval => "approval",
            TimelineEventKind::MilestoneComplete => "milestone_complete",
            TimelineEventKind::Deadline => "deadline",
        };
        f.write_str(s)
    }
}

/// Display status attached to an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimelineEventStatus {
    /// The occurrence already happened (informational)
    Completed,
    /// A deadline still ahead
    Pending,
    /// A deadline already missed
    Overdue,
    /// Client signed off
    Approved,
    /// Client sent it back
    Rejected,
}

impl std::fmt::Display for TimelineEventStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            TimelineEventStatus::Completed => "completed",
            TimelineEventStatus::Pending => "pending",
            TimelineEventStatus::Overdue => "overdue",
            TimelineEventStatus::Approved => "approved",
            TimelineEventStatus::Rejected => "rejected",
        };
        f.write_str(s)
    }
}

/// One synthesized occurrence on the project timeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineEvent {
    /// What happened
    pub kind: TimelineEventKind,

    /// When it happened (or when the deadline falls)
    pub timestamp: Time,

    /// Id of the entity the event concerns, as a raw string
    pub entity_id: String,

    /// Human-readable label, usually the entity title
    pub label: String,

    /// Display status
    pub status: TimelineEventStatus,
}

/// Synthesize the full timeline for a snapshot.
///
/// Events sort ascending by timestamp; ties break by kind precedence and
/// then by entity id, so the output is a total order and identical runs
/// produce identical sequences.
pub fn build_timeline(snapshot: &ProjectSnapshot, now: Time) -> Vec<TimelineEvent> {
    let mut events = Vec::new();

    for milestone in &snapshot.milestones {
        events.push(TimelineEvent {
            kind: TimelineEventKind::MilestoneStart,
            timestamp: milestone.created_at,
            entity_id: milestone.id.to_string(),
            label: milestone.title.clone(),
            status: TimelineEventStatus::Completed,
        });

        if milestone.status.is_completed() {
            if let Some(done) = milestone.completed_at {
                events.push(TimelineEvent {
                    kind: TimelineEventKind::MilestoneComplete,
                    timestamp: done,
                    entity_id: milestone.id.to_string(),
                    label: milestone.title.clone(),
                    status: TimelineEventStatus::Completed,
                });
            }
        }

        if let Some(due) = milestone.due_date {
            let status = if now > due && !milestone.status.is_completed() {
                TimelineEventStatus::Overdue
            } else {
                TimelineEventStatus::Pending
            };
            events.push(TimelineEvent {
                kind: TimelineEventKind::Deadline,
                timestamp: due,
                entity_id: milestone.id.to_string(),
                label: milestone.title.clone(),
                status,
            });
        }

        for task in &milestone.tasks {
            if task.status.is_completed() {
                if let Some(done) = task.completed_at {
                    events.push(TimelineEvent {
                        kind: TimelineEventKind::TaskComplete,
                        timestamp: done,
                        entity_id: task.id.to_string(),
                        label: task.title.clone(),
                        status: TimelineEventStatus::Completed,
                    });
                }
            }
        }
    }

    for comment in snapshot.comments() {
        events.push(TimelineEvent {
            kind: TimelineEventKind::Comment,
            timestamp: comment.created_at,
            entity_id: comment.id.to_string(),
            label: format!("Comment from {}", comment.author),
            status: TimelineEventStatus::Completed,
        });
    }

    for approval in snapshot.approvals() {
        let status = match approval.status {
            ApprovalStatus::Approved => TimelineEventStatus::Approved,
            ApprovalStatus::Rejected => TimelineEventStatus::Rejected,
        };
        events.push(TimelineEvent {
            kind: TimelineEventKind::Approval,
            timestamp: approval.created_at,
            entity_id: approval.id.to_string(),
            label: format!("Review by {}", approval.approved_by),
            status,
        });
    }

    events.sort_by(|a, b| {
        a.timestamp
            .cmp(&b.timestamp)
            .then(a.kind.cmp(&b.kind))
            .then_with(|| a.entity_id.cmp(&b.entity_id))
    });
    events
}
