//! Unique identifiers for Beacon entities.
//!
//! Every id is minted by the external datastore and arrives as an opaque
//! string; the newtypes below keep the different entity spaces from being
//! mixed up without imposing any format on the stored value.

use serde::{Deserialize, Serialize};

/// Unique identifier for a Booking (the root aggregate).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookingId(String);

/// Unique identifier for a Milestone.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MilestoneId(String);

/// Unique identifier for a Task.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(String);

/// Unique identifier for a TimeEntry.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TimeEntryId(String);

/// Unique identifier for a Comment.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CommentId(String);

/// Unique identifier for an Approval.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ApprovalId(String);

/// Unique identifier for a User (client or provider account).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

macro_rules! string_id_impls {
    ($($ty:ident),+ $(,)?) => {
        $(
            impl $ty {
                /// Wrap an externally minted identifier.
                pub fn new(value: impl Into<String>) -> Self {
                    Self(value.into())
                }

                /// The raw identifier string.
                pub fn as_str(&self) -> &str {
                    &self.0
                }
            }

            impl std::fmt::Display for $ty {
                fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                    self.0.fmt(f)
                }
            }

            impl From<&str> for $ty {
                fn from(value: &str) -> Self {
                    Self(value.to_string())
                }
            }

            impl From<String> for $ty {
                fn from(value: String) -> Self {
                    Self(value)
                }
            }
        )+
    };
}

string_id_impls!(
    BookingId,
    MilestoneId,
    TaskId,
    TimeEntryId,
    CommentId,
    ApprovalId,
    UserId,
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_round_trips_the_raw_string() {
        let id = MilestoneId::new("ms-42");
        assert_eq!(id.to_string(), "ms-42");
        assert_eq!(id.as_str(), "ms-42");
    }

    #[test]
    fn ids_serialize_transparently() {
        let id = TaskId::from("task-1");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, r#""task-1""#);

        let back: TaskId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn ids_from_different_spaces_are_distinct_types() {
        // Compile-time property really; just pin the conversions.
        let booking: BookingId = "b-1".into();
        let user: UserId = String::from("u-1").into();
        assert_eq!(booking.as_str(), "b-1");
        assert_eq!(user.as_str(), "u-1");
    }
}
