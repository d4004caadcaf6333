//! Snapshot values and the owners that produce them.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// An immutable point-in-time copy of some owner's state.
///
/// Any owned, cloneable, comparable, serializable value qualifies. Owned
/// collections inside a snapshot are deep copies by construction, and the
/// history only hands out shared borrows, so a stored snapshot can never be
/// mutated through an alias.
pub trait Snapshot:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
}

impl<T> Snapshot for T where
    T: Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
}

/// An owner that can capture and restore its state as snapshots.
///
/// # Example
///
/// ```rust
/// use turnstile::history::Restorable;
///
/// struct DrawingBoard {
///     shapes: Vec<String>,
/// }
///
/// impl Restorable for DrawingBoard {
///     type Snapshot = Vec<String>;
///
///     fn snapshot(&self) -> Vec<String> {
///         self.shapes.clone()
///     }
///
///     fn restore(&mut self, snapshot: &Vec<String>) {
///         self.shapes = snapshot.clone();
///     }
/// }
///
/// let mut board = DrawingBoard { shapes: vec!["circle".into()] };
/// let saved = board.snapshot();
/// board.shapes.push("square".into());
/// board.restore(&saved);
/// assert_eq!(board.shapes, vec!["circle".to_string()]);
/// ```
pub trait Restorable {
    /// The captured form of this owner's state.
    type Snapshot: Snapshot;

    /// Capture the current state.
    fn snapshot(&self) -> Self::Snapshot;

    /// Replace the current state with a copy of `snapshot`.
    fn restore(&mut self, snapshot: &Self::Snapshot);
}
