//! Turnstile: guarded state machines with undoable history
//!
//! Turnstile keeps three small engines side by side:
//!
//! - a **state machine** that fires events through a table of guarded
//!   transitions, committing atomically and journaling what happened,
//! - a **snapshot history** with a cursor, where recording after an undo
//!   discards the abandoned redo branch,
//! - a **command invoker** that undoes commands either by their own inverse
//!   or by restoring a snapshot.
//!
//! All three are single-writer: operations take `&mut self` and callers that
//! need sharing put the value behind a lock or a task.
//!
//! # Core Concepts
//!
//! - **State / Event**: Type-safe vocabularies via the `State` and `Event` traits
//! - **Guards**: Pure predicates over context and event payload
//! - **Journal**: Immutable record of committed transitions
//! - **Checkpoints**: JSON or binary capture of machines and histories
//!
//! # Example
//!
//! ```rust
//! use turnstile::builder::{StateMachineBuilder, TransitionBuilder};
//! use turnstile::machine::TransitionError;
//! use turnstile::{event_enum, state_enum};
//!
//! state_enum! {
//!     enum Door {
//!         Closed,
//!         Opening,
//!         Open,
//!         Closing,
//!     }
//! }
//!
//! event_enum! {
//!     enum Sensor {
//!         PersonDetected,
//!         FullyOpen,
//!         Timeout,
//!         FullyClosed,
//!     }
//! }
//!
//! let mut door = StateMachineBuilder::<Door, Sensor>::new()
//!     .initial(Door::Closed)
//!     .transition(TransitionBuilder::new().from(Door::Closed).on(Sensor::PersonDetected).to(Door::Opening))?
//!     .transition(TransitionBuilder::new().from(Door::Opening).on(Sensor::FullyOpen).to(Door::Open))?
//!     .transition(TransitionBuilder::new().from(Door::Open).on(Sensor::Timeout).to(Door::Closing))?
//!     .transition(TransitionBuilder::new().from(Door::Closing).on(Sensor::FullyClosed).to(Door::Closed))?
//!     .build()?;
//!
//! door.fire(Sensor::PersonDetected)?;
//! door.fire(Sensor::FullyOpen)?;
//!
//! // Closing an open door needs a timeout first
//! let early = door.fire(Sensor::FullyClosed);
//! assert!(matches!(early, Err(TransitionError::NoMatchingTransition { .. })));
//! assert_eq!(door.current_state(), &Door::Open);
//! assert_eq!(door.journal().len(), 2);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod builder;
pub mod checkpoint;
pub mod command;
pub mod core;
pub mod history;
pub mod machine;
pub mod notify;

// Re-export commonly used types
pub use builder::{BuildError, StateMachineBuilder, TransitionBuilder};
pub use checkpoint::{CheckpointError, HistoryCheckpoint, MachineCheckpoint};
pub use command::{Command, CommandError, CommandInvoker, Reversal};
pub use core::{Event, Guard, State};
pub use history::{HistoryConfig, HistoryError, Restorable, Snapshot, SnapshotHistory};
pub use machine::{
    ActionError, StateMachine, TableError, Transition, TransitionError, TransitionJournal,
    TransitionRecord, TransitionTable,
};
pub use notify::SubscriptionId;
