//! Task throughput over the trailing week.

use beacon_core::{ProjectSnapshot, Time};
use chrono::Duration;

/// Length of the velocity window in days.
const WINDOW_DAYS: i64 = 7;

/// Tasks completed per day over the trailing seven days.
///
/// Only tasks with completed status and a completion stamp inside the
/// window count; a completed task with no timestamp contributes nothing
/// rather than being assigned a fabricated date.
pub fn velocity(snapshot: &ProjectSnapshot, now: Time) -> f64 {
    let window = Duration::days(WINDOW_DAYS);
    let recent = snapshot
        .tasks()
        .filter(|t| t.completed_within(now, window))
        .count();
    recent as f64 / WINDOW_DAYS as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{milestone, snapshot, task, test_now};
    use beacon_core::WorkStatus;
    use chrono::Duration;

    #[test]
    fn counts_only_completions_inside_the_window() {
        let now = test_now();
        let mut ms = milestone(
            "ms-1",
            WorkStatus::InProgress,
            vec![
                task("t-1", "ms-1", WorkStatus::Completed),
                task("t-2", "ms-1", WorkStatus::Completed),
                task("t-3", "ms-1", WorkStatus::Completed),
                task("t-4", "ms-1", WorkStatus::InProgress),
            ],
        );
        ms.tasks[0].completed_at = Some(now - Duration::days(1));
        ms.tasks[1].completed_at = Some(now - Duration::days(6));
        ms.tasks[2].completed_at = Some(now - Duration::days(10)); // outside
        ms.tasks[3].completed_at = Some(now - Duration::days(1)); // not completed status

        let snap = snapshot(vec![ms], Vec::new());
        assert!((velocity(&snap, now) - 2.0 / 7.0).abs() < f64::EPSILON);
    }

    #[test]
    fn completed_without_timestamp_contributes_nothing() {
        let snap = snapshot(
            vec![milestone(
                "ms-1",
                WorkStatus::InProgress,
                vec![task("t-1", "ms-1", WorkStatus::Completed)],
            )],
            Vec::new(),
        );
        assert_eq!(velocity(&snap, test_now()), 0.0);
    }
}
