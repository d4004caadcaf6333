//! Snapshot history with undo/redo and branch truncation.
//!
//! - `Snapshot`: any immutable, cloneable state value
//! - `Restorable`: owners that can produce and restore snapshots
//! - `SnapshotHistory`: the cursor-based buffer
//!
//! Undo and redo are pure navigation over recorded snapshots. Writing a new
//! snapshot after an undo throws away the redo branch.

mod buffer;
mod config;
mod snapshot;

pub use buffer::SnapshotHistory;
pub use config::{HistoryConfig, HistoryError};
pub use snapshot::{Restorable, Snapshot};
