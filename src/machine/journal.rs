//! Journal of committed transitions.
//!
//! Only transitions that actually committed are journaled: rejected fires
//! and failed actions leave no trace here.

use crate::core::State;
use crate::history::{HistoryConfig, HistoryError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of a single committed transition.
///
/// # Example
///
/// ```rust
/// use turnstile::machine::TransitionRecord;
/// use turnstile::state_enum;
/// use chrono::Utc;
///
/// state_enum! {
///     enum Light { Off, On }
/// }
///
/// let record = TransitionRecord {
///     from: Light::Off,
///     event: "toggle".to_string(),
///     to: Light::On,
///     timestamp: Utc::now(),
/// };
/// assert_eq!(record.event, "toggle");
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct TransitionRecord<S: State> {
    /// The state being transitioned from
    pub from: S,
    /// Name of the event that triggered the transition
    pub event: String,
    /// The state being transitioned to
    pub to: S,
    /// When the transition committed
    pub timestamp: DateTime<Utc>,
}

/// Ordered journal of committed transitions.
///
/// `record` returns a new journal with the transition appended and leaves
/// the original untouched. A journal built with a capacity keeps only the
/// most recent records and counts the ones it evicted.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct TransitionJournal<S: State> {
    records: Vec<TransitionRecord<S>>,
    #[serde(default)]
    capacity: Option<usize>,
    #[serde(default)]
    dropped: usize,
}

impl<S: State> Default for TransitionJournal<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State> TransitionJournal<S> {
    /// Create a new empty journal.
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            capacity: None,
            dropped: 0,
        }
    }

    /// Create an empty journal that keeps at most `config.capacity` records.
    pub fn with_config(config: HistoryConfig) -> Result<Self, HistoryError> {
        config.validate()?;
        Ok(Self {
            records: Vec::new(),
            capacity: config.capacity,
            dropped: 0,
        })
    }

    /// Record a transition, returning a new journal.
    ///
    /// This does not mutate the existing journal.
    pub fn record(&self, record: TransitionRecord<S>) -> Self {
        let mut journal = self.clone();
        journal.push(record);
        journal
    }

    /// Append a transition in place, evicting the oldest record when the
    /// capacity is exceeded.
    pub(crate) fn push(&mut self, record: TransitionRecord<S>) {
        self.records.push(record);
        if let Some(capacity) = self.capacity {
            if self.records.len() > capacity {
                let overflow = self.records.len() - capacity;
                self.records.drain(..overflow);
                self.dropped += overflow;
                tracing::trace!(evicted = overflow, capacity, "journal capacity reached");
            }
        }
    }

    /// Get the path of states traversed.
    ///
    /// Returns the first record's `from` state followed by the `to` state of
    /// every record, in order. Empty when nothing has been recorded.
    pub fn path(&self) -> Vec<&S> {
        let mut path = Vec::new();
        if let Some(first) = self.records.first() {
            path.push(&first.from);
        }
        for record in &self.records {
            path.push(&record.to);
        }
        path
    }

    /// Elapsed time between the first and last committed transition.
    ///
    /// `None` when the journal is empty.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.records.first(), self.records.last()) {
            last.timestamp
                .signed_duration_since(first.timestamp)
                .to_std()
                .ok()
        } else {
            None
        }
    }

    /// All records, oldest first.
    pub fn records(&self) -> &[TransitionRecord<S>] {
        &self.records
    }

    /// Maximum number of records kept. `None` keeps everything.
    pub fn capacity(&self) -> Option<usize> {
        self.capacity
    }

    /// How many of the oldest records were evicted to respect the capacity.
    pub fn dropped(&self) -> usize {
        self.dropped
    }

    /// Number of records currently held.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The most recently committed transition.
    pub fn last(&self) -> Option<&TransitionRecord<S>> {
        self.records.last()
    }
}
