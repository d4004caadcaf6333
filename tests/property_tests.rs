//! Property-based tests for histories, machines and the command invoker.
//!
//! These tests use proptest to verify properties hold across
//! many randomly generated inputs.

use proptest::prelude::*;
use turnstile::builder::StateMachineBuilder;
use turnstile::command::{Command, CommandError, CommandInvoker};
use turnstile::core::{Event, Guard, State};
use turnstile::history::{HistoryConfig, Restorable, SnapshotHistory};
use turnstile::machine::{
    ActionError, StateMachine, TableError, Transition, TransitionError, TransitionTable,
};
use turnstile::{event_enum, state_enum, BuildError};

state_enum! {
    enum Phase {
        Idle,
        Running,
        Paused,
        Done,
    }
    final: [Done]
}

event_enum! {
    enum Signal {
        Start,
        Pause,
        Resume,
        Finish,
    }
}

prop_compose! {
    fn arbitrary_phase()(variant in 0..4u8) -> Phase {
        match variant {
            0 => Phase::Idle,
            1 => Phase::Running,
            2 => Phase::Paused,
            _ => Phase::Done,
        }
    }
}

prop_compose! {
    fn arbitrary_signal()(variant in 0..4u8) -> Signal {
        match variant {
            0 => Signal::Start,
            1 => Signal::Pause,
            2 => Signal::Resume,
            _ => Signal::Finish,
        }
    }
}

#[derive(Clone, Debug)]
enum Op {
    Push(i32),
    Undo,
    Redo,
}

fn arbitrary_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        any::<i32>().prop_map(Op::Push),
        Just(Op::Undo),
        Just(Op::Redo),
    ]
}

/// Counts how many transitions committed; `Finish` fails while odd.
fn counting_machine() -> StateMachine<Phase, Signal, u32> {
    let mut table = TransitionTable::new();
    let bump = |count: &mut u32, _: &()| -> Result<(), ActionError> {
        *count += 1;
        Ok(())
    };
    table
        .register(Transition::new(Phase::Idle, Signal::Start, Phase::Running).with_action(bump))
        .unwrap();
    table
        .register(Transition::new(Phase::Running, Signal::Pause, Phase::Paused).with_action(bump))
        .unwrap();
    table
        .register(Transition::new(Phase::Paused, Signal::Resume, Phase::Running).with_action(bump))
        .unwrap();
    table
        .register(
            Transition::new(Phase::Running, Signal::Finish, Phase::Done).with_action(
                |count: &mut u32, _: &()| {
                    *count += 100;
                    if *count % 2 == 1 {
                        return Err(ActionError::new("odd count"));
                    }
                    Ok(())
                },
            ),
        )
        .unwrap();
    StateMachine::new(Phase::Idle, 0, table)
}

struct Counter {
    value: i64,
}

impl Restorable for Counter {
    type Snapshot = i64;

    fn snapshot(&self) -> i64 {
        self.value
    }

    fn restore(&mut self, snapshot: &i64) {
        self.value = *snapshot;
    }
}

struct Add(i64);

impl Command<Counter> for Add {
    fn name(&self) -> &str {
        "add"
    }

    fn execute(&mut self, counter: &mut Counter) -> Result<(), CommandError> {
        counter.value += self.0;
        Ok(())
    }
}

proptest! {
    #[test]
    fn guard_is_deterministic(count in any::<u32>(), limit in any::<u32>()) {
        let guard = Guard::new(|count: &u32, limit: &u32| count < limit);
        prop_assert_eq!(guard.check(&count, &limit), guard.check(&count, &limit));
    }

    #[test]
    fn state_name_is_stable(phase in arbitrary_phase()) {
        prop_assert_eq!(phase.name(), phase.name());
        prop_assert_eq!(phase.is_final(), phase == Phase::Done);
    }

    #[test]
    fn truncation_law(
        prefix in prop::collection::vec(any::<i32>(), 1..10),
        undos in 0usize..10,
        next in any::<i32>(),
    ) {
        let mut history = SnapshotHistory::new();
        for value in &prefix {
            history.push(*value);
        }

        let undos = undos.min(prefix.len() - 1);
        for _ in 0..undos {
            history.undo();
        }
        let kept = prefix.len() - undos;

        history.push(next);

        let mut expected = prefix[..kept].to_vec();
        expected.push(next);
        prop_assert_eq!(history.snapshots(), expected.as_slice());
        prop_assert_eq!(history.position(), Some(kept));
        prop_assert!(history.redo().is_none());
    }

    #[test]
    fn undo_then_redo_returns_to_current(ops in prop::collection::vec(arbitrary_op(), 0..40)) {
        let mut history = SnapshotHistory::new();
        for op in ops {
            match op {
                Op::Push(value) => history.push(value),
                Op::Undo => { history.undo(); }
                Op::Redo => { history.redo(); }
            }
        }

        let before = history.current().copied();
        if history.undo().is_some() {
            prop_assert_eq!(history.redo().copied(), before);
        }
        prop_assert_eq!(history.current().copied(), before);
    }

    #[test]
    fn cursor_stays_in_bounds(
        ops in prop::collection::vec(arbitrary_op(), 0..60),
        capacity in prop::option::of(1usize..6),
    ) {
        let config = HistoryConfig { capacity };
        let mut history = SnapshotHistory::with_config(config).unwrap();
        for op in ops {
            match op {
                Op::Push(value) => history.push(value),
                Op::Undo => { history.undo(); }
                Op::Redo => { history.redo(); }
            }

            match history.position() {
                None => prop_assert!(history.is_empty()),
                Some(cursor) => prop_assert!(cursor < history.size()),
            }
            if let Some(capacity) = capacity {
                prop_assert!(history.size() <= capacity);
            }
        }
    }

    #[test]
    fn undo_at_boundary_is_noop(values in prop::collection::vec(any::<i32>(), 0..5)) {
        let mut history = SnapshotHistory::new();
        for value in &values {
            history.push(*value);
        }
        while history.undo().is_some() {}

        let position = history.position();
        let size = history.size();
        prop_assert!(history.undo().is_none());
        prop_assert_eq!(history.position(), position);
        prop_assert_eq!(history.size(), size);
    }

    #[test]
    fn rejected_fire_changes_nothing(
        signals in prop::collection::vec(arbitrary_signal(), 0..30),
    ) {
        let mut machine = counting_machine();
        for signal in signals {
            let state_before = machine.current_state().clone();
            let context_before = *machine.context();
            let journal_before = machine.journal().len();

            match machine.fire(signal) {
                Ok(next) => {
                    prop_assert_eq!(machine.current_state(), &next);
                    prop_assert_eq!(machine.journal().len(), journal_before + 1);
                }
                Err(error) => {
                    let is_action_fault = matches!(error, TransitionError::ActionFailed { .. });
                    prop_assert!(error.is_rejection() || is_action_fault);
                    prop_assert_eq!(machine.current_state(), &state_before);
                    prop_assert_eq!(*machine.context(), context_before);
                    prop_assert_eq!(machine.journal().len(), journal_before);
                }
            }
        }
    }

    #[test]
    fn duplicate_registration_is_deterministic(
        pairs in prop::collection::vec((arbitrary_phase(), arbitrary_signal(), arbitrary_phase()), 1..12),
    ) {
        let mut table: TransitionTable<Phase, Signal> = TransitionTable::new();
        let mut expected = Vec::new();
        let mut seen = std::collections::HashSet::new();
        for (from, signal, to) in &pairs {
            let first = seen.insert((from.clone(), *signal));
            let result = table.register(Transition::new(from.clone(), *signal, to.clone()));
            prop_assert_eq!(result.is_ok(), first);
            if !first {
                expected.push(TableError::DuplicateTransition {
                    state: from.name().to_string(),
                    event: signal.name().to_string(),
                });
            }
        }
        prop_assert_eq!(table.len(), seen.len());

        let transitions = pairs
            .iter()
            .map(|(from, signal, to)| Transition::new(from.clone(), *signal, to.clone()))
            .collect();
        let built = StateMachineBuilder::<Phase, Signal>::new()
            .initial(Phase::Idle)
            .transitions(transitions)
            .build();

        match built {
            Ok(_) => prop_assert!(expected.is_empty()),
            Err(BuildError::DuplicateTransitions(errors)) => prop_assert_eq!(errors, expected),
            Err(other) => prop_assert!(false, "unexpected build error: {}", other),
        }
    }

    #[test]
    fn invoker_undo_restores_every_prior_value(
        amounts in prop::collection::vec(-50i64..50, 1..15),
    ) {
        let mut invoker = CommandInvoker::new(Counter { value: 0 });
        let mut values = vec![0];
        for amount in &amounts {
            invoker.execute(Add(*amount)).unwrap();
            values.push(invoker.receiver().value);
        }

        for expected in values.iter().rev().skip(1) {
            invoker.undo().unwrap();
            prop_assert_eq!(invoker.receiver().value, *expected);
        }
        prop_assert_eq!(invoker.undo(), Err(CommandError::NothingToUndo));

        for expected in values.iter().skip(1) {
            invoker.redo().unwrap();
            prop_assert_eq!(invoker.receiver().value, *expected);
        }
        prop_assert_eq!(invoker.redo(), Err(CommandError::NothingToRedo));
    }
}
