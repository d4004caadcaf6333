//! State tags for state machines.
//!
//! States are plain values. They carry a name for display and logging, and
//! nothing else: what a state *does* is decided by the transition table.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use std::hash::Hash;

/// Trait for state machine states.
///
/// All methods are pure. States are immutable tags describing the current
/// position of a machine.
///
/// # Required Traits
///
/// - `Clone`: states are copied into journals and checkpoints
/// - `Eq` + `Hash`: states key the transition table
/// - `Debug`: states must be debuggable for diagnostics
/// - `Serialize` + `Deserialize`: states are captured by checkpoints
///
/// # Example
///
/// ```rust
/// use turnstile::core::State;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
/// enum DoorState {
///     Closed,
///     Opening,
///     Open,
///     Closing,
/// }
///
/// impl State for DoorState {
///     fn name(&self) -> &str {
///         match self {
///             Self::Closed => "Closed",
///             Self::Opening => "Opening",
///             Self::Open => "Open",
///             Self::Closing => "Closing",
///         }
///     }
/// }
///
/// assert_eq!(DoorState::Opening.name(), "Opening");
/// assert!(!DoorState::Open.is_final());
/// ```
pub trait State:
    Clone + Eq + Hash + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Get the state's name for display/logging.
    fn name(&self) -> &str;

    /// Check if this is a final (terminal) state.
    ///
    /// Machines such as doors and vending machines cycle forever and never
    /// reach one. Default implementation returns `false`.
    fn is_final(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
    enum TestState {
        WaitingForMoney,
        ProductSelected,
        Dispensing,
        OutOfOrder,
    }

    impl State for TestState {
        fn name(&self) -> &str {
            match self {
                Self::WaitingForMoney => "WaitingForMoney",
                Self::ProductSelected => "ProductSelected",
                Self::Dispensing => "Dispensing",
                Self::OutOfOrder => "OutOfOrder",
            }
        }

        fn is_final(&self) -> bool {
            matches!(self, Self::OutOfOrder)
        }
    }

    #[test]
    fn state_name_returns_correct_value() {
        assert_eq!(TestState::WaitingForMoney.name(), "WaitingForMoney");
        assert_eq!(TestState::ProductSelected.name(), "ProductSelected");
        assert_eq!(TestState::Dispensing.name(), "Dispensing");
        assert_eq!(TestState::OutOfOrder.name(), "OutOfOrder");
    }

    #[test]
    fn is_final_identifies_terminal_states() {
        assert!(!TestState::WaitingForMoney.is_final());
        assert!(!TestState::Dispensing.is_final());
        assert!(TestState::OutOfOrder.is_final());
    }

    #[test]
    fn state_serializes_correctly() {
        let state = TestState::ProductSelected;
        let json = serde_json::to_string(&state).unwrap();
        let deserialized: TestState = serde_json::from_str(&json).unwrap();
        assert_eq!(state, deserialized);
    }

    #[test]
    fn equal_states_hash_equally() {
        use std::collections::HashSet;

        let mut set = HashSet::new();
        set.insert(TestState::Dispensing);
        set.insert(TestState::Dispensing.clone());

        assert_eq!(set.len(), 1);
    }
}
