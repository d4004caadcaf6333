//! Listener registry with snapshot-then-notify semantics.
//!
//! `notify` copies the listener list before calling anyone, so the set of
//! listeners reached by a broadcast is exactly the set registered when the
//! broadcast started.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use uuid::Uuid;

/// Callback invoked with each broadcast value.
pub type Listener<T> = Arc<dyn Fn(&T) + Send + Sync>;

/// Handle returned by `subscribe`, used to unsubscribe later.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SubscriptionId(Uuid);

impl SubscriptionId {
    fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Ordered set of listeners for values of type `T`.
///
/// # Example
///
/// ```rust
/// use std::sync::{Arc, Mutex};
/// use turnstile::notify::Subscribers;
///
/// let received = Arc::new(Mutex::new(Vec::new()));
/// let mut channel = Subscribers::new();
///
/// let sink = Arc::clone(&received);
/// let id = channel.subscribe(move |title: &String| sink.lock().unwrap().push(title.clone()));
///
/// channel.notify(&"first upload".to_string());
/// channel.unsubscribe(id);
/// channel.notify(&"second upload".to_string());
///
/// assert_eq!(*received.lock().unwrap(), vec!["first upload".to_string()]);
/// ```
pub struct Subscribers<T> {
    entries: Vec<(SubscriptionId, Listener<T>)>,
}

impl<T> Subscribers<T> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Register a listener; it receives every later broadcast.
    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: Fn(&T) + Send + Sync + 'static,
    {
        let id = SubscriptionId::new();
        self.entries.push((id, Arc::new(listener)));
        tracing::trace!(subscription = %id, listeners = self.entries.len(), "listener subscribed");
        id
    }

    /// Remove a listener. Returns `false` if the id was unknown.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry, _)| *entry != id);
        let removed = self.entries.len() < before;
        tracing::trace!(subscription = %id, removed, "listener unsubscribed");
        removed
    }

    /// Broadcast `value` to every listener registered at call start.
    ///
    /// Returns the number of listeners reached.
    pub fn notify(&self, value: &T) -> usize {
        let listeners: Vec<Listener<T>> = self
            .entries
            .iter()
            .map(|(_, listener)| Arc::clone(listener))
            .collect();

        for listener in &listeners {
            listener(value);
        }
        listeners.len()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<T> Default for Subscribers<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for Subscribers<T> {
    fn clone(&self) -> Self {
        Self {
            entries: self.entries.clone(),
        }
    }
}

impl<T> fmt::Debug for Subscribers<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscribers")
            .field("listeners", &self.entries.len())
            .finish()
    }
}
