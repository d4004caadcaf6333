//! Core vocabulary shared by every other module.
//!
//! - State tags via the `State` trait
//! - Event tags via the `Event` trait
//! - Guard predicates for transition control
//!
//! Nothing in this module has side effects.

mod event;
mod guard;
mod state;

pub use event::Event;
pub use guard::Guard;
pub use state::State;
