//! Snapshot-read collaborator.
//!
//! The engine itself never performs I/O; callers hand it a snapshot.
//! [`SnapshotSource`] is the seam where that snapshot comes from: the
//! hosted datastore in production, a JSON file for the CLI and for
//! fixtures. Implementations live with the caller.

use async_trait::async_trait;
use beacon_core::{BookingId, ProjectSnapshot};
use std::path::PathBuf;

/// Error type for snapshot loading.
pub type Result<T> = std::result::Result<T, SourceError>;

/// Errors that can occur while loading a snapshot.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// No snapshot exists for the requested booking
    #[error("no snapshot for booking {0}")]
    NotFound(BookingId),
}

/// Read access to project snapshots, keyed by booking.
#[async_trait]
pub trait SnapshotSource: Send + Sync {
    /// Load the current snapshot for a booking.
    async fn load_snapshot(&self, booking_id: &BookingId) -> Result<ProjectSnapshot>;
}

/// A [`SnapshotSource`] backed by a single JSON file in the wire shape
/// of the snapshot (`bookingId`, `milestones`, `timeEntries`, ...).
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    /// Create a source reading from `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Load whatever booking the file holds.
    pub async fn load(&self) -> Result<ProjectSnapshot> {
        let raw = tokio::fs::read_to_string(&self.path).await?;
        let snapshot: ProjectSnapshot = serde_json::from_str(&raw)?;
        Ok(snapshot)
    }
}

#[async_trait]
impl SnapshotSource for JsonFileSource {
    async fn load_snapshot(&self, booking_id: &BookingId) -> Result<ProjectSnapshot> {
        let snapshot = self.load().await?;
        if &snapshot.booking_id != booking_id {
            return Err(SourceError::NotFound(booking_id.clone()));
        }
        Ok(snapshot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SNAPSHOT_JSON: &str = r#"{
        "bookingId": "b-1",
        "milestones": [],
        "timeEntries": [],
        "commentsByMilestone": {},
        "approvalsByMilestone": {}
    }"#;

    #[tokio::test]
    async fn loads_the_matching_booking() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SNAPSHOT_JSON.as_bytes()).unwrap();

        let source = JsonFileSource::new(file.path());
        let snapshot = source.load_snapshot(&BookingId::new("b-1")).await.unwrap();
        assert_eq!(snapshot.booking_id, BookingId::new("b-1"));
    }

    #[tokio::test]
    async fn rejects_a_foreign_booking() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SNAPSHOT_JSON.as_bytes()).unwrap();

        let source = JsonFileSource::new(file.path());
        let err = source
            .load_snapshot(&BookingId::new("b-other"))
            .await
            .unwrap_err();
        assert!(matches!(err, SourceError::NotFound(_)));
    }

    #[tokio::test]
    async fn missing_file_surfaces_io_error() {
        let source = JsonFileSource::new("/nonexistent/snapshot.json");
        let err = source.load().await.unwrap_err();
        assert!(matches!(err, SourceError::Io(_)));
    }

    #[tokio::test]
    async fn malformed_json_surfaces_json_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"{ not json").unwrap();

        let source = JsonFileSource::new(file.path());
        let err = source.load().await.unwrap_err();
        assert!(matches!(err, SourceError::Json(_)));
    }
}
