//! Builder for constructing state machines.

use crate::builder::error::BuildError;
use crate::builder::transition::TransitionBuilder;
use crate::core::{Event, State};
use crate::machine::{StateMachine, TableError, Transition, TransitionTable};
use std::collections::HashSet;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Builder for constructing state machines with a fluent API.
///
/// Unlike [`TransitionTable::register`], which stops at the first
/// duplicate, `build` reports every duplicate `(from, event)` pair at once.
///
/// # Example
///
/// ```
/// use turnstile::builder::{StateMachineBuilder, TransitionBuilder};
/// use turnstile::{event_enum, state_enum};
///
/// state_enum! {
///     enum Light { Off, On }
/// }
///
/// event_enum! {
///     enum Switch { Flip }
/// }
///
/// let mut machine = StateMachineBuilder::<Light, Switch>::new()
///     .initial(Light::Off)
///     .transition(TransitionBuilder::new().from(Light::Off).on(Switch::Flip).to(Light::On))
///     .unwrap()
///     .transition(TransitionBuilder::new().from(Light::On).on(Switch::Flip).to(Light::Off))
///     .unwrap()
///     .build()
///     .unwrap();
///
/// assert_eq!(machine.fire(Switch::Flip).unwrap(), Light::On);
/// ```
pub struct StateMachineBuilder<S: State, E: Event, C = (), P = ()> {
    initial: Option<S>,
    context: C,
    transitions: Vec<Transition<S, E, C, P>>,
}

impl<S: State, E: Event, C: Default, P> StateMachineBuilder<S, E, C, P> {
    /// Create a builder with a default context.
    pub fn new() -> Self {
        Self::with_context(C::default())
    }
}

impl<S: State, E: Event, C, P> StateMachineBuilder<S, E, C, P> {
    /// Create a builder around an explicit starting context.
    pub fn with_context(context: C) -> Self {
        Self {
            initial: None,
            context,
            transitions: Vec::new(),
        }
    }

    /// Set the initial state (required).
    pub fn initial(mut self, state: S) -> Self {
        self.initial = Some(state);
        self
    }

    /// Add a transition using a builder.
    /// Returns an error if the builder fails validation.
    pub fn transition(
        mut self,
        builder: TransitionBuilder<S, E, C, P>,
    ) -> Result<Self, BuildError> {
        let transition = builder.build()?;
        self.transitions.push(transition);
        Ok(self)
    }

    /// Add a pre-built transition.
    pub fn add_transition(mut self, transition: Transition<S, E, C, P>) -> Self {
        self.transitions.push(transition);
        self
    }

    /// Add multiple transitions at once.
    pub fn transitions(mut self, transitions: Vec<Transition<S, E, C, P>>) -> Self {
        self.transitions.extend(transitions);
        self
    }

    /// Build the state machine.
    ///
    /// Fails if the initial state is missing, no transitions were added, or
    /// any `(from, event)` pair was added twice.
    pub fn build(self) -> Result<StateMachine<S, E, C, P>, BuildError> {
        let initial = self.initial.ok_or(BuildError::MissingInitialState)?;

        if self.transitions.is_empty() {
            return Err(BuildError::NoTransitions);
        }

        if let Validation::Failure(errors) = Self::check_unique(&self.transitions) {
            let duplicates: Vec<TableError> = errors.iter().cloned().collect();
            tracing::warn!(count = duplicates.len(), "rejected machine with duplicate transitions");
            return Err(BuildError::DuplicateTransitions(duplicates));
        }

        let mut table = TransitionTable::new();
        for transition in self.transitions {
            table
                .register(transition)
                .map_err(|error| BuildError::DuplicateTransitions(vec![error]))?;
        }

        Ok(StateMachine::new(initial, self.context, table))
    }

    fn check_unique(
        transitions: &[Transition<S, E, C, P>],
    ) -> Validation<(), NonEmptyVec<TableError>> {
        let mut seen = HashSet::new();
        let checks: Vec<Validation<(), NonEmptyVec<TableError>>> = transitions
            .iter()
            .map(|transition| {
                if seen.insert((&transition.from, &transition.event)) {
                    Validation::success(())
                } else {
                    Validation::fail(TableError::DuplicateTransition {
                        state: transition.from.name().to_string(),
                        event: transition.event.name().to_string(),
                    })
                }
            })
            .collect();

        Validation::all_vec(checks).map(|_| ())
    }
}

impl<S: State, E: Event, C: Default, P> Default for StateMachineBuilder<S, E, C, P> {
    fn default() -> Self {
        Self::new()
    }
}
