//! Branch-truncating undo/redo buffer.

use super::config::{HistoryConfig, HistoryError};
use super::snapshot::Snapshot;

/// Ordered snapshots plus a cursor marking the current one.
///
/// Recording and navigating are separate operations: `push` records, while
/// `undo` and `redo` only move the cursor and hand back the snapshot under
/// it. Nothing here re-runs the logic that produced a snapshot.
///
/// Invariants:
/// - the cursor is `None` exactly when the buffer is empty, otherwise it
///   indexes a stored snapshot;
/// - after `push`, every snapshot that was after the cursor is gone and the
///   cursor sits on the new last snapshot.
///
/// # Example
///
/// ```rust
/// use turnstile::history::SnapshotHistory;
///
/// let mut history = SnapshotHistory::new();
/// history.push(String::new());
/// history.push("a".to_string());
/// history.push("ab".to_string());
///
/// assert_eq!(history.undo().map(String::as_str), Some("a"));
/// assert_eq!(history.undo().map(String::as_str), Some(""));
/// assert_eq!(history.redo().map(String::as_str), Some("a"));
///
/// // Writing after an undo discards the redo branch
/// history.push("ax".to_string());
/// assert!(history.redo().is_none());
/// assert_eq!(history.snapshots(), ["", "a", "ax"]);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct SnapshotHistory<T: Snapshot> {
    snapshots: Vec<T>,
    cursor: Option<usize>,
    config: HistoryConfig,
}

impl<T: Snapshot> Default for SnapshotHistory<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Snapshot> SnapshotHistory<T> {
    /// Create an empty, unbounded history.
    pub fn new() -> Self {
        Self {
            snapshots: Vec::new(),
            cursor: None,
            config: HistoryConfig::default(),
        }
    }

    /// Create an empty history with the given configuration.
    pub fn with_config(config: HistoryConfig) -> Result<Self, HistoryError> {
        config.validate()?;
        Ok(Self {
            snapshots: Vec::new(),
            cursor: None,
            config,
        })
    }

    /// Rebuild a history from captured parts. Callers check the invariants.
    pub(crate) fn from_parts(snapshots: Vec<T>, cursor: Option<usize>, config: HistoryConfig) -> Self {
        Self {
            snapshots,
            cursor,
            config,
        }
    }

    /// Record a snapshot as the new current one.
    ///
    /// Anything after the cursor (the redo branch) is discarded first. When a
    /// capacity is configured and exceeded, the oldest snapshot is evicted.
    pub fn push(&mut self, snapshot: T) {
        let keep = self.cursor.map_or(0, |cursor| cursor + 1);
        let discarded = self.snapshots.len() - keep;
        self.snapshots.truncate(keep);
        self.snapshots.push(snapshot);

        if let Some(capacity) = self.config.capacity {
            if self.snapshots.len() > capacity {
                let overflow = self.snapshots.len() - capacity;
                self.snapshots.drain(..overflow);
                tracing::trace!(evicted = overflow, capacity, "history capacity reached");
            }
        }

        self.cursor = Some(self.snapshots.len() - 1);
        tracing::trace!(
            discarded,
            size = self.snapshots.len(),
            cursor = ?self.cursor,
            "snapshot pushed"
        );
    }

    /// Step back to the previous snapshot.
    ///
    /// Returns `None` and changes nothing when the cursor is at the first
    /// snapshot or the history is empty.
    pub fn undo(&mut self) -> Option<&T> {
        match self.cursor {
            Some(cursor) if cursor > 0 => {
                self.cursor = Some(cursor - 1);
                tracing::trace!(cursor = cursor - 1, "history undo");
                self.snapshots.get(cursor - 1)
            }
            _ => None,
        }
    }

    /// Step forward to the next snapshot.
    ///
    /// Returns `None` and changes nothing when the cursor is already at the
    /// newest snapshot.
    pub fn redo(&mut self) -> Option<&T> {
        match self.cursor {
            Some(cursor) if cursor + 1 < self.snapshots.len() => {
                self.cursor = Some(cursor + 1);
                tracing::trace!(cursor = cursor + 1, "history redo");
                self.snapshots.get(cursor + 1)
            }
            _ => None,
        }
    }

    /// The snapshot under the cursor.
    pub fn current(&self) -> Option<&T> {
        self.cursor.and_then(|cursor| self.snapshots.get(cursor))
    }

    /// Number of stored snapshots, including the redo branch.
    pub fn size(&self) -> usize {
        self.snapshots.len()
    }

    /// Index of the current snapshot, `None` when empty.
    pub fn position(&self) -> Option<usize> {
        self.cursor
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    pub fn can_undo(&self) -> bool {
        matches!(self.cursor, Some(cursor) if cursor > 0)
    }

    pub fn can_redo(&self) -> bool {
        matches!(self.cursor, Some(cursor) if cursor + 1 < self.snapshots.len())
    }

    /// All stored snapshots, oldest first.
    pub fn snapshots(&self) -> &[T] {
        &self.snapshots
    }

    pub fn config(&self) -> &HistoryConfig {
        &self.config
    }

    /// Discard every snapshot.
    pub fn clear(&mut self) {
        self.snapshots.clear();
        self.cursor = None;
        tracing::trace!("history cleared");
    }
}
