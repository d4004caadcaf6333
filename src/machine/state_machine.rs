//! State machine driven by a transition table.

use crate::core::{Event, State};
use crate::history::{HistoryConfig, HistoryError};
use crate::machine::error::{TableError, TransitionError};
use crate::machine::journal::{TransitionJournal, TransitionRecord};
use crate::machine::table::TransitionTable;
use crate::machine::transition::Transition;
use crate::notify::{SubscriptionId, Subscribers};
use chrono::Utc;

/// Guarded finite-state machine.
///
/// Holds exactly one current state, an explicit context value that guards
/// read and actions mutate, the transition table, and a journal of
/// committed transitions.
///
/// `fire` is atomic: the action runs against a staged copy of the context,
/// and state and context are committed together only if the action succeeds.
///
/// The machine does no internal locking. Callers that share one across
/// threads must serialize access themselves (a lock, or a single task that
/// owns the machine and receives events over a channel).
///
/// # Example
///
/// ```rust
/// use turnstile::machine::{StateMachine, Transition, TransitionError, TransitionTable};
/// use turnstile::{event_enum, state_enum};
///
/// state_enum! {
///     enum Vending { WaitingForMoney, ProductSelected, Dispensing }
/// }
///
/// event_enum! {
///     enum Action { InsertMoney, SelectProduct, Dispense }
/// }
///
/// let mut table: TransitionTable<Vending, Action> = TransitionTable::new();
/// table.register(Transition::new(Vending::WaitingForMoney, Action::InsertMoney, Vending::ProductSelected)).unwrap();
/// table.register(Transition::new(Vending::ProductSelected, Action::SelectProduct, Vending::Dispensing)).unwrap();
/// table.register(Transition::new(Vending::Dispensing, Action::Dispense, Vending::WaitingForMoney)).unwrap();
///
/// let mut machine = StateMachine::new(Vending::WaitingForMoney, (), table);
///
/// // Selecting before paying is rejected and nothing changes
/// let rejected = machine.fire(Action::SelectProduct);
/// assert!(matches!(rejected, Err(TransitionError::NoMatchingTransition { .. })));
/// assert_eq!(machine.current_state(), &Vending::WaitingForMoney);
///
/// assert_eq!(machine.fire(Action::InsertMoney).unwrap(), Vending::ProductSelected);
/// ```
pub struct StateMachine<S: State, E: Event, C = (), P = ()> {
    initial: S,
    current: S,
    context: C,
    table: TransitionTable<S, E, C, P>,
    journal: TransitionJournal<S>,
    listeners: Subscribers<TransitionRecord<S>>,
}

impl<S: State, E: Event, C, P> StateMachine<S, E, C, P> {
    /// Create a machine in the initial state.
    pub fn new(initial: S, context: C, table: TransitionTable<S, E, C, P>) -> Self {
        Self {
            current: initial.clone(),
            initial,
            context,
            table,
            journal: TransitionJournal::new(),
            listeners: Subscribers::new(),
        }
    }

    pub(crate) fn from_parts(
        initial: S,
        current: S,
        context: C,
        table: TransitionTable<S, E, C, P>,
        journal: TransitionJournal<S>,
    ) -> Self {
        Self {
            initial,
            current,
            context,
            table,
            journal,
            listeners: Subscribers::new(),
        }
    }

    /// Keep at most `capacity` journal records, evicting the oldest.
    ///
    /// Machines that cycle indefinitely should be bounded; the default journal
    /// keeps every committed transition.
    pub fn with_journal_capacity(mut self, capacity: usize) -> Result<Self, HistoryError> {
        let mut journal = TransitionJournal::with_config(HistoryConfig::bounded(capacity))?;
        for record in self.journal.records() {
            journal.push(record.clone());
        }
        self.journal = journal;
        Ok(self)
    }

    /// Register another transition.
    ///
    /// Fails with [`TableError::DuplicateTransition`] if `(from, event)` is
    /// already taken.
    pub fn register_transition(
        &mut self,
        transition: Transition<S, E, C, P>,
    ) -> Result<(), TableError> {
        self.table.register(transition)
    }

    /// Get current state (pure)
    pub fn current_state(&self) -> &S {
        &self.current
    }

    pub fn initial_state(&self) -> &S {
        &self.initial
    }

    /// Check if machine is in a final state (pure)
    pub fn is_final(&self) -> bool {
        self.current.is_final()
    }

    pub fn context(&self) -> &C {
        &self.context
    }

    pub fn table(&self) -> &TransitionTable<S, E, C, P> {
        &self.table
    }

    /// Committed transitions so far.
    pub fn journal(&self) -> &TransitionJournal<S> {
        &self.journal
    }

    /// Events registered out of the current state, in registration order.
    ///
    /// Guards are not consulted; use [`can_fire_with`](Self::can_fire_with)
    /// for that.
    pub fn available_events(&self) -> Vec<&E> {
        self.table.events_from(&self.current)
    }

    /// Would `fire_with(event, payload)` pass lookup and guard? (pure)
    pub fn can_fire_with(&self, event: &E, payload: &P) -> bool {
        self.table
            .lookup(&self.current, event)
            .is_some_and(|transition| transition.allows(&self.context, payload))
    }

    /// Subscribe to committed transitions.
    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: Fn(&TransitionRecord<S>) + Send + Sync + 'static,
    {
        self.listeners.subscribe(listener)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.listeners.unsubscribe(id)
    }
}

impl<S: State, E: Event, C: Clone, P> StateMachine<S, E, C, P> {
    /// Fire an event carrying a payload.
    ///
    /// 1. No transition for `(current, event)`: `NoMatchingTransition`.
    /// 2. Guard returns false: `GuardRejected`.
    /// 3. Action fails: `ActionFailed`; state and context are untouched.
    /// 4. Otherwise state and context are committed, the transition is
    ///    journaled, listeners are notified, and the new state is returned.
    pub fn fire_with(&mut self, event: E, payload: &P) -> Result<S, TransitionError> {
        let Some(transition) = self.table.lookup(&self.current, &event) else {
            tracing::debug!(
                state = self.current.name(),
                event = event.name(),
                "no matching transition"
            );
            return Err(TransitionError::NoMatchingTransition {
                state: self.current.name().to_string(),
                event: event.name().to_string(),
            });
        };

        if !transition.allows(&self.context, payload) {
            tracing::debug!(
                state = self.current.name(),
                event = event.name(),
                "guard rejected transition"
            );
            return Err(TransitionError::GuardRejected {
                state: self.current.name().to_string(),
                event: event.name().to_string(),
            });
        }

        let staged = match &transition.action {
            Some(action) => {
                let mut staged = self.context.clone();
                if let Err(source) = action(&mut staged, payload) {
                    tracing::warn!(
                        state = self.current.name(),
                        event = event.name(),
                        error = %source,
                        "transition action failed"
                    );
                    return Err(TransitionError::ActionFailed {
                        state: self.current.name().to_string(),
                        event: event.name().to_string(),
                        source,
                    });
                }
                Some(staged)
            }
            None => None,
        };

        let to = transition.to.clone();
        let record = TransitionRecord {
            from: self.current.clone(),
            event: event.name().to_string(),
            to: to.clone(),
            timestamp: Utc::now(),
        };

        if let Some(staged) = staged {
            self.context = staged;
        }
        self.current = to.clone();
        self.journal.push(record.clone());

        tracing::debug!(
            from = record.from.name(),
            event = %record.event,
            to = to.name(),
            "transition committed"
        );
        self.listeners.notify(&record);

        Ok(to)
    }
}

impl<S: State, E: Event, C: Clone, P: Default> StateMachine<S, E, C, P> {
    /// Fire an event with the default payload.
    pub fn fire(&mut self, event: E) -> Result<S, TransitionError> {
        self.fire_with(event, &P::default())
    }

    /// Would `fire(event)` pass lookup and guard? (pure)
    pub fn can_fire(&self, event: &E) -> bool {
        self.can_fire_with(event, &P::default())
    }
}
