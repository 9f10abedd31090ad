//! Subscriber types for the reactive system.
//!
//! A Subscriber is one registered callback on a signal. Each registration
//! gets its own id, so the same closure subscribed twice is two subscribers.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Shared form of a subscriber callback.
///
/// Reference counted so a notification pass can snapshot the subscriber
/// list without holding its lock while callbacks run.
pub(crate) type Callback<T> = Arc<dyn Fn(&T) + Send + Sync>;

/// Unique identifier for a subscriber.
///
/// Allocated from a process-wide counter when a callback is registered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriberId(u64);

impl SubscriberId {
    /// Generate a new unique subscriber ID.
    pub fn new() -> Self {
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for SubscriberId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SubscriberId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "sub#{}", self.0)
    }
}

/// A callback registered on a `Signal<T>`.
pub(crate) struct Subscriber<T> {
    id: SubscriberId,
    callback: Callback<T>,
}

impl<T> Subscriber<T> {
    pub(crate) fn new<F>(callback: F) -> Self
    where
        F: Fn(&T) + Send + Sync + 'static,
    {
        Self {
            id: SubscriberId::new(),
            callback: Arc::new(callback),
        }
    }

    pub(crate) fn id(&self) -> SubscriberId {
        self.id
    }

    /// Clone out the callback for a notification snapshot.
    pub(crate) fn callback(&self) -> Callback<T> {
        Arc::clone(&self.callback)
    }
}

impl<T> fmt::Debug for Subscriber<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscriber").field("id", &self.id).finish()
    }
}
