//! A single `(from, event) -> (guard, action, to)` rule.

use crate::core::{Event, Guard, State};
use crate::machine::error::ActionError;
use std::fmt;
use std::sync::Arc;

/// Side effect run once per successful transition.
///
/// Actions receive a staged copy of the machine context; the copy replaces
/// the real context only if the action returns `Ok`.
pub type Action<C, P> = Arc<dyn Fn(&mut C, &P) -> Result<(), ActionError> + Send + Sync>;

/// A registered transition.
pub struct Transition<S: State, E: Event, C = (), P = ()> {
    pub from: S,
    pub event: E,
    pub to: S,
    pub guard: Option<Guard<C, P>>,
    pub action: Option<Action<C, P>>,
}

impl<S: State, E: Event, C, P> Transition<S, E, C, P> {
    /// Unguarded transition with no side effect.
    pub fn new(from: S, event: E, to: S) -> Self {
        Self {
            from,
            event,
            to,
            guard: None,
            action: None,
        }
    }

    pub fn with_guard(mut self, guard: Guard<C, P>) -> Self {
        self.guard = Some(guard);
        self
    }

    pub fn with_action<F>(mut self, action: F) -> Self
    where
        F: Fn(&mut C, &P) -> Result<(), ActionError> + Send + Sync + 'static,
    {
        self.action = Some(Arc::new(action));
        self
    }

    /// Check the guard, if any (pure).
    pub fn allows(&self, context: &C, payload: &P) -> bool {
        self.guard
            .as_ref()
            .map_or(true, |guard| guard.check(context, payload))
    }
}

impl<S: State, E: Event, C, P> Clone for Transition<S, E, C, P> {
    fn clone(&self) -> Self {
        Self {
            from: self.from.clone(),
            event: self.event.clone(),
            to: self.to.clone(),
            guard: self.guard.clone(),
            action: self.action.as_ref().map(Arc::clone),
        }
    }
}

impl<S: State, E: Event, C, P> fmt::Debug for Transition<S, E, C, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Transition")
            .field("from", &self.from)
            .field("event", &self.event)
            .field("to", &self.to)
            .field("guarded", &self.guard.is_some())
            .field("has_action", &self.action.is_some())
            .finish()
    }
}
