//! Configuration for snapshot histories.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised when a history is configured incorrectly.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum HistoryError {
    #[error("History capacity must be at least 1")]
    ZeroCapacity,
}

/// Tunables for a [`SnapshotHistory`](crate::history::SnapshotHistory).
///
/// Deserializable so hosts can keep it alongside the rest of their settings.
///
/// ```rust
/// use turnstile::history::HistoryConfig;
///
/// let config: HistoryConfig = serde_json::from_str(r#"{ "capacity": 50 }"#).unwrap();
/// assert_eq!(config.capacity, Some(50));
///
/// let unbounded: HistoryConfig = serde_json::from_str("{}").unwrap();
/// assert_eq!(unbounded, HistoryConfig::default());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryConfig {
    /// Maximum number of snapshots kept. `None` keeps everything.
    #[serde(default)]
    pub capacity: Option<usize>,
}

impl HistoryConfig {
    /// Unbounded history.
    pub fn unbounded() -> Self {
        Self::default()
    }

    /// History that keeps at most `capacity` snapshots, evicting the oldest.
    pub fn bounded(capacity: usize) -> Self {
        Self {
            capacity: Some(capacity),
        }
    }

    pub(crate) fn validate(&self) -> Result<(), HistoryError> {
        match self.capacity {
            Some(0) => Err(HistoryError::ZeroCapacity),
            _ => Ok(()),
        }
    }
}
