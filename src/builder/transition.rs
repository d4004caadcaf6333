//! Builder for constructing transitions.

use crate::builder::error::BuildError;
use crate::core::{Event, Guard, State};
use crate::machine::{Action, ActionError, Transition};
use std::sync::Arc;

/// Builder for constructing transitions with a fluent API.
///
/// # Example
///
/// ```
/// use turnstile::builder::TransitionBuilder;
/// use turnstile::machine::Transition;
/// use turnstile::{event_enum, state_enum};
///
/// state_enum! {
///     enum Door { Closed, Open }
/// }
///
/// event_enum! {
///     enum Push { Handle }
/// }
///
/// let transition: Transition<Door, Push, bool> = TransitionBuilder::new()
///     .from(Door::Closed)
///     .on(Push::Handle)
///     .to(Door::Open)
///     .when(|unlocked: &bool| *unlocked)
///     .build()
///     .unwrap();
///
/// assert!(transition.allows(&true, &()));
/// assert!(!transition.allows(&false, &()));
/// ```
pub struct TransitionBuilder<S: State, E: Event, C = (), P = ()> {
    from: Option<S>,
    event: Option<E>,
    to: Option<S>,
    guard: Option<Guard<C, P>>,
    action: Option<Action<C, P>>,
}

impl<S: State, E: Event, C, P> TransitionBuilder<S, E, C, P> {
    pub fn new() -> Self {
        Self {
            from: None,
            event: None,
            to: None,
            guard: None,
            action: None,
        }
    }

    /// Set the source state (required).
    pub fn from(mut self, state: S) -> Self {
        self.from = Some(state);
        self
    }

    /// Set the triggering event (required).
    pub fn on(mut self, event: E) -> Self {
        self.event = Some(event);
        self
    }

    /// Set the target state (required).
    pub fn to(mut self, state: S) -> Self {
        self.to = Some(state);
        self
    }

    /// Add a guard over context and payload (optional).
    pub fn guard(mut self, guard: Guard<C, P>) -> Self {
        self.guard = Some(guard);
        self
    }

    /// Add a guard that only looks at the context (optional).
    pub fn when<F>(mut self, predicate: F) -> Self
    where
        F: Fn(&C) -> bool + Send + Sync + 'static,
    {
        self.guard = Some(Guard::on_context(predicate));
        self
    }

    /// Set the side effect run when the transition fires (optional).
    pub fn action<F>(mut self, action: F) -> Self
    where
        F: Fn(&mut C, &P) -> Result<(), ActionError> + Send + Sync + 'static,
    {
        self.action = Some(Arc::new(action));
        self
    }

    pub fn build(self) -> Result<Transition<S, E, C, P>, BuildError> {
        let from = self.from.ok_or(BuildError::MissingFromState)?;
        let event = self.event.ok_or(BuildError::MissingEvent)?;
        let to = self.to.ok_or(BuildError::MissingToState)?;

        Ok(Transition {
            from,
            event,
            to,
            guard: self.guard,
            action: self.action,
        })
    }
}

impl<S: State, E: Event, C, P> Default for TransitionBuilder<S, E, C, P> {
    fn default() -> Self {
        Self::new()
    }
}
