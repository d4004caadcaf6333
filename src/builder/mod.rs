//! Builder API for ergonomic state machine construction.
//!
//! This module provides fluent builders and macros for declaring states,
//! events and transition tables with minimal boilerplate.

pub mod error;
pub mod machine;
pub mod macros;
pub mod transition;

pub use error::BuildError;
pub use machine::StateMachineBuilder;
pub use transition::TransitionBuilder;

use crate::core::{Event, Guard, State};
use crate::machine::Transition;

/// Create an unguarded transition with no side effect.
///
/// # Example
///
/// ```
/// use turnstile::builder::simple_transition;
/// use turnstile::machine::Transition;
/// use turnstile::{event_enum, state_enum};
///
/// state_enum! {
///     enum Phase { Start, End }
///     final: [End]
/// }
///
/// event_enum! {
///     enum Tick { Next }
/// }
///
/// let transition: Transition<Phase, Tick> = simple_transition(Phase::Start, Tick::Next, Phase::End);
/// assert!(transition.allows(&(), &()));
/// ```
pub fn simple_transition<S, E, C, P>(from: S, event: E, to: S) -> Transition<S, E, C, P>
where
    S: State,
    E: Event,
{
    Transition::new(from, event, to)
}

/// Create a transition guarded by a context predicate.
///
/// # Example
///
/// ```
/// use turnstile::builder::guarded_transition;
/// use turnstile::machine::Transition;
/// use turnstile::{event_enum, state_enum};
///
/// state_enum! {
///     enum Phase { Start, End }
/// }
///
/// event_enum! {
///     enum Tick { Next }
/// }
///
/// let transition: Transition<Phase, Tick, u32> =
///     guarded_transition(Phase::Start, Tick::Next, Phase::End, |ticks: &u32| *ticks >= 3);
///
/// assert!(!transition.allows(&2, &()));
/// assert!(transition.allows(&3, &()));
/// ```
pub fn guarded_transition<S, E, C, P, F>(from: S, event: E, to: S, guard: F) -> Transition<S, E, C, P>
where
    S: State,
    E: Event,
    F: Fn(&C) -> bool + Send + Sync + 'static,
{
    Transition::new(from, event, to).with_guard(Guard::on_context(guard))
}
