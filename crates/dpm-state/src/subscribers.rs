//! Synchronous observer lists.

use std::fmt;

/// Handle returned by [`Subscribers::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Callback<T> = Box<dyn Fn(&T)>;

/// Ordered list of callbacks notified with the latest state.
pub struct Subscribers<T> {
    next_id: u64,
    callbacks: Vec<(SubscriptionId, Callback<T>)>,
}

impl<T> Default for Subscribers<T> {
    fn default() -> Self {
        Self {
            next_id: 0,
            callbacks: Vec::new(),
        }
    }
}

impl<T> fmt::Debug for Subscribers<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscribers")
            .field("count", &self.callbacks.len())
            .finish()
    }
}

impl<T> Subscribers<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a callback. Callbacks run in registration order.
    pub fn subscribe(&mut self, callback: impl Fn(&T) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.callbacks.push((id, Box::new(callback)));
        id
    }

    /// Remove a callback. Returns `false` if it was already gone.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.callbacks.len();
        self.callbacks.retain(|(existing, _)| *existing != id);
        self.callbacks.len() != before
    }

    pub fn notify(&self, value: &T) {
        for (_, callback) in &self.callbacks {
            callback(value);
        }
    }
}
