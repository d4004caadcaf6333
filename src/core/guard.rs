//! Guard predicates for controlling state transitions.
//!
//! Guards are pure boolean functions over the machine context and the event
//! payload. They decide whether a registered transition may fire, and they
//! never change anything.

use std::fmt;
use std::sync::Arc;

/// Pure predicate that determines if a transition can execute.
///
/// Guards are evaluated after the `(state, event)` lookup succeeds and before
/// the transition's action runs. Undo and redo never re-run them.
///
/// # Example
///
/// ```rust
/// use turnstile::core::Guard;
///
/// struct Wallet {
///     credit: u32,
/// }
///
/// // Only allow a purchase when the credit covers the requested price
/// let affordable = Guard::new(|wallet: &Wallet, price: &u32| wallet.credit >= *price);
///
/// assert!(affordable.check(&Wallet { credit: 150 }, &100));
/// assert!(!affordable.check(&Wallet { credit: 50 }, &100));
/// ```
pub struct Guard<C, P = ()> {
    predicate: Arc<dyn Fn(&C, &P) -> bool + Send + Sync>,
}

impl<C, P> Guard<C, P> {
    /// Create a guard from a pure predicate function.
    ///
    /// The predicate must be deterministic, free of side effects, and
    /// thread-safe (Send + Sync).
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&C, &P) -> bool + Send + Sync + 'static,
    {
        Guard {
            predicate: Arc::new(predicate),
        }
    }

    /// Create a guard that only inspects the context.
    ///
    /// ```rust
    /// use turnstile::core::Guard;
    ///
    /// let has_stock: Guard<u32> = Guard::on_context(|stock: &u32| *stock > 0);
    /// assert!(has_stock.check(&3, &()));
    /// assert!(!has_stock.check(&0, &()));
    /// ```
    pub fn on_context<F>(predicate: F) -> Self
    where
        F: Fn(&C) -> bool + Send + Sync + 'static,
    {
        Self::new(move |context, _payload| predicate(context))
    }

    /// Check if the guard allows the transition.
    pub fn check(&self, context: &C, payload: &P) -> bool {
        (self.predicate)(context, payload)
    }
}

impl<C, P> Clone for Guard<C, P> {
    fn clone(&self) -> Self {
        Self {
            predicate: Arc::clone(&self.predicate),
        }
    }
}

impl<C, P> fmt::Debug for Guard<C, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Guard(..)")
    }
}
