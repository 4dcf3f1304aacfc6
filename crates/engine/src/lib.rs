//! Aggregation facade.
//!
//! The single entry point over the calculators: take a validated
//! [`ProjectSnapshot`](beacon_core::ProjectSnapshot), return a
//! consolidated [`ProjectStatus`] with metrics, insights, and (when
//! configured) the timeline. The engine holds no state between calls;
//! callers that want live deltas keep the previous metrics themselves and
//! pass them back in.

#![warn(missing_docs)]

mod facade;
mod source;
mod status;

pub use facade::{Engine, EngineConfig};
pub use source::{JsonFileSource, Result, SnapshotSource, SourceError};
pub use status::{PreviousStatus, ProjectStatus};
