//! Deadline tracking: overdue detection and the next deadline.

use beacon_core::{ProjectSnapshot, Time};

/// Count milestones and tasks whose deadline passed while still open.
///
/// Items without a deadline never count; malformed dates were already
/// degraded to `None` at the serde boundary, so nothing here can fail.
pub fn overdue_count(snapshot: &ProjectSnapshot, now: Time) -> usize {
    let milestones = snapshot
        .milestones
        .iter()
        .filter(|m| m.is_overdue(now))
        .count();
    let tasks = snapshot.tasks().filter(|t| t.is_overdue(now)).count();
    milestones + tasks
}

/// Title of the first overdue item in snapshot order, milestones first.
///
/// Used to name the worst offender in the overdue insight.
pub fn first_overdue_title(snapshot: &ProjectSnapshot, now: Time) -> Option<&str> {
    snapshot
        .milestones
        .iter()
        .find(|m| m.is_overdue(now))
        .map(|m| m.title.as_str())
        .or_else(|| {
            snapshot
                .tasks()
                .find(|t| t.is_overdue(now))
                .map(|t| t.title.as_str())
        })
}

/// Earliest deadline among non-completed milestones.
///
/// Ties resolve to the milestone that appears first in the snapshot's
/// creation order. `None` when no open milestone has a deadline.
pub fn next_deadline(snapshot: &ProjectSnapshot) -> Option<Time> {
    let mut earliest: Option<Time> = None;
    for milestone in &snapshot.milestones {
        if milestone.status.is_completed() {
            continue;
        }
        if let Some(due) = milestone.due_date {
            // Strictly-less keeps the first milestone on equal deadlines.
            if earliest.map_or(true, |current| due < current) {
                earliest = Some(due);
            }
        }
    }
    earliest
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{milestone, snapshot, task, test_now};
    use beacon_core::WorkStatus;
    use chrono::Duration;

    #[test]
    fn counts_open_milestones_and_tasks_past_deadline() {
        let now = test_now();
        let mut late_ms = milestone(
            "ms-1",
            WorkStatus::InProgress,
            vec![
                task("t-1", "ms-1", WorkStatus::Pending),
                task("t-2", "ms-1", WorkStatus::Completed),
            ],
        );
        late_ms.due_date = Some(now - Duration::days(2));
        late_ms.tasks[0].due_date = Some(now - Duration::days(1));
        late_ms.tasks[1].due_date = Some(now - Duration::days(1)); // completed, exempt

        let snap = snapshot(vec![late_ms], Vec::new());
        assert_eq!(overdue_count(&snap, now), 2);
    }

    #[test]
    fn cancelled_items_are_never_overdue() {
        let now = test_now();
        let mut ms = milestone("ms-1", WorkStatus::Cancelled, Vec::new());
        ms.due_date = Some(now - Duration::days(30));
        let snap = snapshot(vec![ms], Vec::new());
        assert_eq!(overdue_count(&snap, now), 0);
    }

    #[test]
    fn first_overdue_title_prefers_milestones_in_order() {
        let now = test_now();
        let mut ms = milestone(
            "ms-1",
            WorkStatus::InProgress,
            vec![task("t-1", "ms-1", WorkStatus::Pending)],
        );
        ms.due_date = Some(now - Duration::days(1));
        ms.tasks[0].due_date = Some(now - Duration::days(3));
        let snap = snapshot(vec![ms], Vec::new());

        assert_eq!(first_overdue_title(&snap, now), Some("Milestone ms-1"));
    }

    #[test]
    fn next_deadline_skips_completed_and_breaks_ties_by_order() {
        let now = test_now();
        let mut done = milestone("ms-1", WorkStatus::Completed, Vec::new());
        done.due_date = Some(now - Duration::days(5));

        let mut second = milestone("ms-2", WorkStatus::InProgress, Vec::new());
        second.due_date = Some(now + Duration::days(3));

        let mut third = milestone("ms-3", WorkStatus::Pending, Vec::new());
        third.due_date = Some(now + Duration::days(3));

        let snap = snapshot(vec![done, second, third], Vec::new());
        assert_eq!(next_deadline(&snap), Some(now + Duration::days(3)));
    }

    #[test]
    fn next_deadline_is_none_without_open_deadlines() {
        let snap = snapshot(
            vec![milestone("ms-1", WorkStatus::InProgress, Vec::new())],
            Vec::new(),
        );
        assert!(next_deadline(&snap).is_none());
    }
}
