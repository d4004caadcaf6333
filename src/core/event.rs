//! Event tags that drive state machines.

use std::fmt::Debug;
use std::hash::Hash;

/// Trait for state machine events.
///
/// Events are inputs: a machine consumes or rejects them but never stores
/// them. Parameters travel separately as a payload passed to
/// [`StateMachine::fire_with`](crate::machine::StateMachine::fire_with), so the
/// tag itself stays usable as a table key.
///
/// # Example
///
/// ```rust
/// use turnstile::core::Event;
///
/// #[derive(Clone, PartialEq, Eq, Hash, Debug)]
/// enum DoorEvent {
///     Open,
///     Close,
/// }
///
/// impl Event for DoorEvent {
///     fn name(&self) -> &str {
///         match self {
///             Self::Open => "open",
///             Self::Close => "close",
///         }
///     }
/// }
///
/// assert_eq!(DoorEvent::Close.name(), "close");
/// ```
pub trait Event: Clone + Eq + Hash + Debug + Send + Sync {
    /// Get the event's name for display/logging.
    fn name(&self) -> &str;
}
