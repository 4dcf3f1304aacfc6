//! Beacon core data models.
//!
//! This crate defines the entity types the aggregation engine reads:
//! milestones, tasks, time entries, comments, approvals, and the
//! [`ProjectSnapshot`] that bundles them for one booking. The engine never
//! mutates these values; it consumes an immutable snapshot and is
//! re-invoked whenever the snapshot changes.

#![warn(missing_docs)]

// Core identities
mod id;

// Entities
mod activity;
mod milestone;
mod task;

// Snapshot assembly and validation
mod snapshot;

// Serde helpers
pub mod de;

// Re-exports
pub use id::*;

pub use activity::{Approval, ApprovalStatus, Comment, TimeEntry};
pub use milestone::{Milestone, WorkStatus};
pub use snapshot::{ProjectSnapshot, ValidationError};
pub use task::{Task, TaskPriority};

/// Timestamp type
pub type Time = chrono::DateTime<chrono::Utc>;
