//! Application state and its reducer.
//!
//! # Responsibility
//! - Own every entity collection plus the global settings in one struct.
//! - Apply user actions as pure transitions producing a new state.
//! - Define the serialization boundary for the entity store.
//!
//! # Invariants
//! - Collections change only by append or map-replace; never in place.
//! - Rejected actions leave the state untouched.
//! - Late insight results for a superseded request are discarded.

pub mod action;
pub mod app;
pub mod seed;
pub mod snapshot;
pub mod store;

pub use action::{Action, ActionRejected};
pub use app::{AppState, InsightState, Settings, Theme};
pub use seed::demo_store;
pub use snapshot::{load_snapshot, save_snapshot, SnapshotError};
pub use store::EntityStore;

/// Current wall-clock time in Unix epoch milliseconds.
pub fn now_ms() -> i64 {
    chrono::Utc::now().timestamp_millis()
}
