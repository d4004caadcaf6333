//! Declarative transition table.

use crate::core::{Event, State};
use crate::machine::error::TableError;
use crate::machine::transition::Transition;
use std::collections::HashMap;
use std::fmt;

/// Map from `(state, event)` to the single transition registered for it.
///
/// Registration order is preserved, so listings such as
/// [`events_from`](Self::events_from) are deterministic.
///
/// # Example
///
/// ```rust
/// use turnstile::machine::{TableError, Transition, TransitionTable};
/// use turnstile::{event_enum, state_enum};
///
/// state_enum! {
///     enum Door { Closed, Open }
/// }
///
/// event_enum! {
///     enum DoorEvent { Open, Close }
/// }
///
/// let mut table: TransitionTable<Door, DoorEvent> = TransitionTable::new();
/// table.register(Transition::new(Door::Closed, DoorEvent::Open, Door::Open)).unwrap();
///
/// let duplicate = table.register(Transition::new(Door::Closed, DoorEvent::Open, Door::Closed));
/// assert!(matches!(duplicate, Err(TableError::DuplicateTransition { .. })));
/// ```
pub struct TransitionTable<S: State, E: Event, C = (), P = ()> {
    transitions: Vec<Transition<S, E, C, P>>,
    index: HashMap<S, HashMap<E, usize>>,
}

impl<S: State, E: Event, C, P> TransitionTable<S, E, C, P> {
    pub fn new() -> Self {
        Self {
            transitions: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Register a transition.
    ///
    /// Fails if a transition for the same `(from, event)` pair exists; the
    /// existing one is kept.
    pub fn register(&mut self, transition: Transition<S, E, C, P>) -> Result<(), TableError> {
        let by_event = self.index.entry(transition.from.clone()).or_default();
        if by_event.contains_key(&transition.event) {
            return Err(TableError::DuplicateTransition {
                state: transition.from.name().to_string(),
                event: transition.event.name().to_string(),
            });
        }

        by_event.insert(transition.event.clone(), self.transitions.len());
        tracing::trace!(
            from = transition.from.name(),
            event = transition.event.name(),
            to = transition.to.name(),
            "transition registered"
        );
        self.transitions.push(transition);
        Ok(())
    }

    /// The transition for `(from, event)`, if registered.
    pub fn lookup(&self, from: &S, event: &E) -> Option<&Transition<S, E, C, P>> {
        self.index
            .get(from)
            .and_then(|by_event| by_event.get(event))
            .map(|&position| &self.transitions[position])
    }

    pub fn contains(&self, from: &S, event: &E) -> bool {
        self.lookup(from, event).is_some()
    }

    /// Events with a registered transition out of `state`, in registration order.
    pub fn events_from(&self, state: &S) -> Vec<&E> {
        self.transitions
            .iter()
            .filter(|transition| transition.from == *state)
            .map(|transition| &transition.event)
            .collect()
    }

    /// All transitions, in registration order.
    pub fn transitions(&self) -> &[Transition<S, E, C, P>] {
        &self.transitions
    }

    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }
}

impl<S: State, E: Event, C, P> Default for TransitionTable<S, E, C, P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State, E: Event, C, P> Clone for TransitionTable<S, E, C, P> {
    fn clone(&self) -> Self {
        Self {
            transitions: self.transitions.clone(),
            index: self.index.clone(),
        }
    }
}

impl<S: State, E: Event, C, P> fmt::Debug for TransitionTable<S, E, C, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.transitions.iter()).finish()
    }
}
