//! The consolidated aggregation result.

use beacon_core::{BookingId, Time};
use beacon_insights::Insight;
use beacon_metrics::MetricSet;
use beacon_timeline::TimelineEvent;
use serde::{Deserialize, Serialize};

/// Everything the dashboard needs for one booking, in one value.
///
/// The metric fields flatten into the top level of the JSON shape, so a
/// serialized status reads `{ "bookingId": ..., "overallProgress": ...,
/// "riskLevel": ..., "insights": [...] }`. `generated_at` equals the
/// `now` the aggregation ran against and is the only wall-clock-derived
/// field; with a pinned `now`, identical snapshots serialize
/// byte-identically.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectStatus {
    /// The booking this status describes
    pub booking_id: BookingId,

    /// All derived metrics, flattened into the top level
    #[serde(flatten)]
    pub metrics: MetricSet,

    /// Progress gained (or lost) since the previous aggregation;
    /// present only when the caller supplied previous metrics
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub progress_delta: Option<i32>,

    /// Generated observations, most urgent first
    pub insights: Vec<Insight>,

    /// Chronological event log; present only when the engine is
    /// configured to include it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeline: Option<Vec<TimelineEvent>>,

    /// The instant the aggregation ran against
    pub generated_at: Time,
}

/// Caller-owned memo of an earlier aggregation.
///
/// The engine never stores this itself; a live-tracking caller keeps the
/// last [`MetricSet`] (and when it was taken) and hands it back on the
/// next tick to get delta-driven output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreviousStatus {
    /// Metrics from the earlier aggregation
    pub metrics: MetricSet,

    /// When that aggregation ran
    pub timestamp: Time,
}

impl PreviousStatus {
    /// Memoize the parts of a [`ProjectStatus`] needed for the next delta.
    pub fn from_status(status: &ProjectStatus) -> Self {
        Self {
            metrics: status.metrics.clone(),
            timestamp: status.generated_at,
        }
    }
}
