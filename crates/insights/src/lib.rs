//! Insight generation.
//!
//! A small rule engine that turns the current metrics (and optionally the
//! previous metrics) into human-readable observations with a suggested
//! next action. Rules evaluate independently; one invocation may emit
//! zero, one, or many insights. Repeats are never suppressed here:
//! deduplication and dismissal belong to the presentation layer, which
//! owns its own set of suppressed insights.
//!
//! Payment reminders are deliberately absent. `payment_status` lives on
//! the booking aggregate, outside this engine; payment insights are an
//! external trigger the caller merges in if it wants them.

#![warn(missing_docs)]

mod rules;

use serde::{Deserialize, Serialize};

pub use rules::generate_insights;

/// Which rule produced an insight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InsightKind {
    /// Progress-band observation; exactly one per invocation
    Progress,
    /// Deadlines already missed
    Overdue,
    /// Unusually fast or slow task throughput
    Velocity,
    /// Progress gained since the previous aggregation
    Momentum,
}

/// How urgently the caller should surface an insight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InsightPriority {
    /// Informational
    Low,
    /// Worth showing
    Normal,
    /// Needs attention soon
    High,
    /// Needs attention now
    Urgent,
}

/// A generated observation plus a suggested next action.
///
/// `action` is an opaque token; the dashboard maps it to a button or a
/// deep link, the engine attaches no meaning to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Insight {
    /// Producing rule
    pub kind: InsightKind,

    /// Short headline
    pub title: String,

    /// One or two sentences of detail
    pub message: String,

    /// Display urgency
    pub priority: InsightPriority,

    /// Opaque action token for the caller to interpret
    pub action: String,
}
