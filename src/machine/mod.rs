//! Guarded finite-state machines.
//!
//! # Key Concepts
//!
//! - **Transitions**: `(from, event) -> (guard, action, to)` rules
//! - **Table**: at most one transition per `(from, event)`
//! - **State Machine**: fires events atomically and journals what committed
//!
//! Rejections (`NoMatchingTransition`, `GuardRejected`) are ordinary results.
//! A failing action leaves the machine exactly where it was.

mod error;
mod journal;
mod state_machine;
mod table;
mod transition;

pub use error::{ActionError, TableError, TransitionError};
pub use journal::{TransitionJournal, TransitionRecord};
pub use state_machine::StateMachine;
pub use table::TransitionTable;
pub use transition::{Action, Transition};
