//! Build errors for state machine and transition builders.

use crate::machine::TableError;
use thiserror::Error;

/// Errors that can occur when building state machines and transitions.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BuildError {
    #[error("Initial state not specified. Call .initial(state) before .build()")]
    MissingInitialState,

    #[error("No transitions defined. Add at least one transition")]
    NoTransitions,

    #[error("Transition source state not specified. Call .from(state)")]
    MissingFromState,

    #[error("Transition event not specified. Call .on(event)")]
    MissingEvent,

    #[error("Transition target state not specified. Call .to(state)")]
    MissingToState,

    /// Every `(from, event)` pair registered more than once, in order.
    #[error("{} duplicate transition(s) registered", .0.len())]
    DuplicateTransitions(Vec<TableError>),
}
