//! The insight rules.

use beacon_core::{ProjectSnapshot, Time};
use beacon_metrics::{first_overdue_title, MetricSet};

use crate::{Insight, InsightKind, InsightPriority};

/// Velocity above which the team is called out for a strong pace.
const HIGH_VELOCITY: f64 = 1.0;

/// Velocity below which (but above zero) progress is flagged as slow.
const SLOW_VELOCITY: f64 = 0.5;

/// Evaluate every rule against the current metrics.
///
/// `previous` enables the delta-driven momentum rule and is otherwise
/// unused; `now` anchors the overdue lookup so the result is
/// deterministic for a pinned clock. Output is sorted most urgent first,
/// stable within a priority.
pub fn generate_insights(
    current: &MetricSet,
    previous: Option<&MetricSet>,
    snapshot: &ProjectSnapshot,
    now: Time,
) -> Vec<Insight> {
    let mut insights = Vec::new();

    insights.push(progress_band(current.overall_progress));

    if let Some(insight) = overdue(current, snapshot, now) {
        insights.push(insight);
    }
    if let Some(insight) = velocity_pace(current.velocity) {
        insights.push(insight);
    }
    if let Some(insight) = momentum(current, previous) {
        insights.push(insight);
    }

    insights.sort_by(|a, b| b.priority.cmp(&a.priority));
    insights
}

/// Exactly one insight per call, keyed by the progress band.
fn progress_band(progress: u8) -> Insight {
    let (title, message, priority, action) = match progress {
        0 => (
            "Project not started",
            "No progress has been recorded yet. Kick off the first milestone to build momentum.",
            InsightPriority::Normal,
            "schedule_kickoff",
        ),
        1..=24 => (
            "Early days",
            "The project is in its opening stretch. Confirm the plan and unblock the first deliverables.",
            InsightPriority::Normal,
            "review_plan",
        ),
        25..=49 => (
            "Gaining ground",
            "A quarter of the project is behind you. Keep the current cadence going.",
            InsightPriority::Normal,
            "keep_pace",
        ),
        50..=74 => (
            "Past the halfway mark",
            "More than half of the project is done. Start lining up the remaining milestones.",
            InsightPriority::Low,
            "review_remaining",
        ),
        75..=99 => (
            "Closing in",
            "The finish line is near. Schedule final reviews and prepare handover materials.",
            InsightPriority::Low,
            "plan_delivery",
        ),
        _ => (
            "Project complete",
            "Every milestone is done. Request final sign-off and close out the booking.",
            InsightPriority::Low,
            "request_final_approval",
        ),
    };

    Insight {
        kind: InsightKind::Progress,
        title: title.to_string(),
        message: message.to_string(),
        priority,
        action: action.to_string(),
    }
}

/// Urgent call-out when deadlines have been missed.
fn overdue(current: &MetricSet, snapshot: &ProjectSnapshot, now: Time) -> Option<Insight> {
    if current.overdue_items == 0 {
        return None;
    }

    let noun = if current.overdue_items == 1 {
        "item is"
    } else {
        "items are"
    };
    let mut message = format!("{} {noun} past their deadline.", current.overdue_items);
    if let Some(title) = first_overdue_title(snapshot, now) {
        message.push_str(&format!(" Start with \"{title}\"."));
    }

    Some(Insight {
        kind: InsightKind::Overdue,
        title: "Overdue work needs attention".to_string(),
        message,
        priority: InsightPriority::Urgent,
        action: "review_overdue".to_string(),
    })
}

/// Pace observations from the trailing-week velocity.
///
/// Zero velocity emits nothing: a project with no completions yet is
/// already covered by the progress band.
fn velocity_pace(velocity: f64) -> Option<Insight> {
    if velocity > HIGH_VELOCITY {
        return Some(Insight {
            kind: InsightKind::Velocity,
            title: "Strong pace this week".to_string(),
            message: format!(
                "The team is completing {velocity:.1} tasks per day. Consider pulling work forward."
            ),
            priority: InsightPriority::Low,
            action: "pull_work_forward".to_string(),
        });
    }

    if velocity > 0.0 && velocity < SLOW_VELOCITY {
        return Some(Insight {
            kind: InsightKind::Velocity,
            title: "Progress has slowed".to_string(),
            message: format!(
                "Only {velocity:.1} tasks per day were completed over the last week. Check for blockers."
            ),
            priority: InsightPriority::Normal,
            action: "check_blockers".to_string(),
        });
    }

    None
}

/// Delta-driven note when progress rose since the previous aggregation.
fn momentum(current: &MetricSet, previous: Option<&MetricSet>) -> Option<Insight> {
    let previous = previous?;
    let gained = current.overall_progress as i32 - previous.overall_progress as i32;
    if gained <= 0 {
        return None;
    }

    Some(Insight {
        kind: InsightKind::Momentum,
        title: "Progress is up".to_string(),
        message: format!("Overall progress rose {gained}% since the last check."),
        priority: InsightPriority::Low,
        action: "share_update".to_string(),
    })
}
