//! Commands with undo and redo.
//!
//! Two families of commands are supported side by side:
//!
//! - **Self-undoing** commands carry their own inverse (turning a light off
//!   undoes turning it on).
//! - **History-backed** commands are reversed by restoring the receiver's
//!   previous snapshot (typing and pasting in an editor).
//!
//! Mapping buttons or keys to commands is left to the caller.

mod error;
mod invoker;
mod traits;

pub use error::CommandError;
pub use invoker::CommandInvoker;
pub use traits::{Command, Reversal};
