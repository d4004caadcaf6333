//! Serializable captures of histories and state machines.
//!
//! A checkpoint is a versioned value, not a storage mechanism: it can be
//! encoded to JSON (readable) or bincode (compact) and handed to whatever
//! storage the host uses. Transition tables hold closures and are never part
//! of a checkpoint; resuming a machine takes the table again.

use crate::core::{Event, State};
use crate::history::{HistoryConfig, Snapshot, SnapshotHistory};
use crate::machine::{StateMachine, TransitionJournal, TransitionTable};
use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub mod error;

pub use error::CheckpointError;

/// Version identifier for checkpoint format
pub const CHECKPOINT_VERSION: u32 = 1;

/// Captured snapshot history: every snapshot plus the cursor.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct HistoryCheckpoint<T: Snapshot> {
    /// Checkpoint format version
    pub version: u32,

    /// Unique checkpoint identifier
    pub id: Uuid,

    /// When checkpoint was created
    pub timestamp: DateTime<Utc>,

    /// Stored snapshots, oldest first, including any redo branch
    pub snapshots: Vec<T>,

    /// Index of the current snapshot
    pub cursor: Option<usize>,

    /// Configuration the history was running with
    pub config: HistoryConfig,
}

/// Captured state machine: position, context, and journal.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound(serialize = "C: Serialize", deserialize = "C: DeserializeOwned"))]
pub struct MachineCheckpoint<S: State, C> {
    pub version: u32,
    pub id: Uuid,
    pub timestamp: DateTime<Utc>,

    /// Initial state of the machine
    pub initial_state: S,

    /// Current state of the machine
    pub current_state: S,

    /// Machine context at capture time
    pub context: C,

    /// Committed transitions up to capture time
    pub journal: TransitionJournal<S>,
}

fn check_version(found: u32) -> Result<(), CheckpointError> {
    if found == CHECKPOINT_VERSION {
        Ok(())
    } else {
        Err(CheckpointError::UnsupportedVersion {
            found,
            supported: CHECKPOINT_VERSION,
        })
    }
}

fn encode_json<V: Serialize>(value: &V) -> Result<String, CheckpointError> {
    serde_json::to_string(value).map_err(|e| CheckpointError::SerializationFailed(e.to_string()))
}

fn decode_json<V: DeserializeOwned>(json: &str) -> Result<V, CheckpointError> {
    serde_json::from_str(json).map_err(|e| CheckpointError::DeserializationFailed(e.to_string()))
}

fn encode_binary<V: Serialize>(value: &V) -> Result<Vec<u8>, CheckpointError> {
    bincode::serialize(value).map_err(|e| CheckpointError::SerializationFailed(e.to_string()))
}

fn decode_binary<V: DeserializeOwned>(bytes: &[u8]) -> Result<V, CheckpointError> {
    bincode::deserialize(bytes).map_err(|e| CheckpointError::DeserializationFailed(e.to_string()))
}

impl<T: Snapshot> HistoryCheckpoint<T> {
    pub fn to_json(&self) -> Result<String, CheckpointError> {
        encode_json(self)
    }

    pub fn from_json(json: &str) -> Result<Self, CheckpointError> {
        decode_json(json)
    }

    pub fn to_binary(&self) -> Result<Vec<u8>, CheckpointError> {
        encode_binary(self)
    }

    pub fn from_binary(bytes: &[u8]) -> Result<Self, CheckpointError> {
        decode_binary(bytes)
    }

    /// Check version and cursor invariants.
    pub fn validate(&self) -> Result<(), CheckpointError> {
        check_version(self.version)?;

        match (self.snapshots.len(), self.cursor) {
            (0, None) => {}
            (0, Some(cursor)) => {
                return Err(CheckpointError::ValidationFailed(format!(
                    "empty history has cursor {cursor}"
                )))
            }
            (_, None) => {
                return Err(CheckpointError::ValidationFailed(
                    "non-empty history has no cursor".to_string(),
                ))
            }
            (len, Some(cursor)) if cursor >= len => {
                return Err(CheckpointError::ValidationFailed(format!(
                    "cursor {cursor} out of range for {len} snapshots"
                )))
            }
            _ => {}
        }

        match self.config.capacity {
            Some(0) => Err(CheckpointError::ValidationFailed(
                "capacity must be at least 1".to_string(),
            )),
            Some(capacity) if self.snapshots.len() > capacity => {
                Err(CheckpointError::ValidationFailed(format!(
                    "{} snapshots exceed capacity {capacity}",
                    self.snapshots.len()
                )))
            }
            _ => Ok(()),
        }
    }
}

impl<S: State, C: Serialize + DeserializeOwned> MachineCheckpoint<S, C> {
    pub fn to_json(&self) -> Result<String, CheckpointError> {
        encode_json(self)
    }

    pub fn from_json(json: &str) -> Result<Self, CheckpointError> {
        decode_json(json)
    }

    pub fn to_binary(&self) -> Result<Vec<u8>, CheckpointError> {
        encode_binary(self)
    }

    pub fn from_binary(bytes: &[u8]) -> Result<Self, CheckpointError> {
        decode_binary(bytes)
    }
}

impl<S: State, C> MachineCheckpoint<S, C> {
    /// Check version and that the journal agrees with the recorded states.
    pub fn validate(&self) -> Result<(), CheckpointError> {
        check_version(self.version)?;

        match self.journal.capacity() {
            Some(0) => {
                return Err(CheckpointError::ValidationFailed(
                    "journal capacity must be at least 1".to_string(),
                ))
            }
            Some(capacity) if self.journal.len() > capacity => {
                return Err(CheckpointError::ValidationFailed(format!(
                    "{} journal records exceed capacity {capacity}",
                    self.journal.len()
                )))
            }
            _ => {}
        }

        for (index, pair) in self.journal.records().windows(2).enumerate() {
            if pair[0].to != pair[1].from {
                return Err(CheckpointError::ValidationFailed(format!(
                    "journal record {} ends in '{}' but record {} starts in '{}'",
                    index,
                    pair[0].to.name(),
                    index + 1,
                    pair[1].from.name()
                )));
            }
        }

        match (self.journal.records().first(), self.journal.last()) {
            (Some(first), Some(last)) => {
                // Once records were evicted the journal no longer starts at
                // the initial state.
                if self.journal.dropped() == 0 && first.from != self.initial_state {
                    return Err(CheckpointError::ValidationFailed(format!(
                        "journal starts in '{}' but initial state is '{}'",
                        first.from.name(),
                        self.initial_state.name()
                    )));
                }
                if last.to != self.current_state {
                    return Err(CheckpointError::ValidationFailed(format!(
                        "journal ends in '{}' but current state is '{}'",
                        last.to.name(),
                        self.current_state.name()
                    )));
                }
                Ok(())
            }
            _ if self.current_state != self.initial_state => {
                Err(CheckpointError::ValidationFailed(format!(
                    "empty journal but machine moved from '{}' to '{}'",
                    self.initial_state.name(),
                    self.current_state.name()
                )))
            }
            _ => Ok(()),
        }
    }
}

impl<T: Snapshot> SnapshotHistory<T> {
    /// Capture every snapshot and the cursor.
    pub fn checkpoint(&self) -> HistoryCheckpoint<T> {
        HistoryCheckpoint {
            version: CHECKPOINT_VERSION,
            id: Uuid::new_v4(),
            timestamp: Utc::now(),
            snapshots: self.snapshots().to_vec(),
            cursor: self.position(),
            config: self.config().clone(),
        }
    }

    /// Rebuild a history from a validated checkpoint.
    pub fn resume(checkpoint: HistoryCheckpoint<T>) -> Result<Self, CheckpointError> {
        checkpoint.validate()?;
        tracing::debug!(
            checkpoint = %checkpoint.id,
            size = checkpoint.snapshots.len(),
            cursor = ?checkpoint.cursor,
            "history resumed"
        );
        Ok(SnapshotHistory::from_parts(
            checkpoint.snapshots,
            checkpoint.cursor,
            checkpoint.config,
        ))
    }
}

impl<S: State, E: Event, C: Clone, P> StateMachine<S, E, C, P> {
    /// Capture the machine's position, context, and journal.
    pub fn checkpoint(&self) -> MachineCheckpoint<S, C> {
        MachineCheckpoint {
            version: CHECKPOINT_VERSION,
            id: Uuid::new_v4(),
            timestamp: Utc::now(),
            initial_state: self.initial_state().clone(),
            current_state: self.current_state().clone(),
            context: self.context().clone(),
            journal: self.journal().clone(),
        }
    }

    /// Rebuild a machine from a validated checkpoint and its transition table.
    ///
    /// Listeners are not part of a checkpoint and must be subscribed again.
    pub fn resume(
        checkpoint: MachineCheckpoint<S, C>,
        table: TransitionTable<S, E, C, P>,
    ) -> Result<Self, CheckpointError> {
        checkpoint.validate()?;
        tracing::debug!(
            checkpoint = %checkpoint.id,
            state = checkpoint.current_state.name(),
            transitions = checkpoint.journal.len(),
            "machine resumed"
        );
        Ok(StateMachine::from_parts(
            checkpoint.initial_state,
            checkpoint.current_state,
            checkpoint.context,
            table,
            checkpoint.journal,
        ))
    }
}
