//! Signal Implementation
//!
//! A Signal is the fundamental reactive primitive: one current value plus
//! an ordered list of subscriber callbacks.
//!
//! # How Signals Work
//!
//! 1. `set` compares the new value against the current one. Equal values
//!    are dropped without notifying anyone.
//!
//! 2. A different value is stored, then every subscriber registered at that
//!    moment is called in subscription order with the new value.
//!
//! 3. Callbacks run synchronously before `set` returns. A panic in a
//!    callback propagates to the caller of `set`; the remaining callbacks
//!    for that change are skipped.
//!
//! # Re-entrancy
//!
//! The subscriber list is snapshotted before the first callback runs and
//! no lock is held while callbacks execute. A callback may read the signal,
//! set it again, or subscribe and unsubscribe; list changes apply from the
//! next notification.
//!
//! # Thread Safety
//!
//! The value sits behind a `parking_lot::RwLock` and the subscriber list
//! behind a `parking_lot::Mutex`. Neither poisons, so a signal stays usable
//! after a callback panics.

use std::fmt::{self, Debug};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Weak};

use parking_lot::{Mutex, RwLock};
use smallvec::SmallVec;
use tracing::trace;

use super::subscriber::{Callback, Subscriber};
use super::subscription::{Detach, Subscription};
use super::SubscriberId;

/// Counter for generating unique signal IDs.
static SIGNAL_ID_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Generate a new unique signal ID.
fn next_signal_id() -> u64 {
    SIGNAL_ID_COUNTER.fetch_add(1, Ordering::Relaxed)
}

/// Shared state behind every clone of a signal.
struct SignalInner<T> {
    id: u64,
    value: RwLock<T>,
    subscribers: Mutex<Vec<Subscriber<T>>>,
}

impl<T> Detach for SignalInner<T>
where
    T: Send + Sync,
{
    fn detach(&self, id: SubscriberId) -> bool {
        let mut subscribers = self.subscribers.lock();
        let before = subscribers.len();
        subscribers.retain(|s| s.id() != id);
        subscribers.len() != before
    }

    fn is_attached(&self, id: SubscriberId) -> bool {
        self.subscribers.lock().iter().any(|s| s.id() == id)
    }
}

/// A reactive signal holding a value of type T.
///
/// Cloning a signal yields another handle to the same value and
/// subscriber list. The state is freed when the last handle is dropped.
///
/// # Example
///
/// ```rust
/// use std::sync::{Arc, Mutex};
/// use vbf_core::reactive::Signal;
///
/// let count = Signal::new(0);
/// let seen = Arc::new(Mutex::new(Vec::new()));
///
/// let sink = seen.clone();
/// let sub = count.subscribe(move |v| sink.lock().unwrap().push(*v));
///
/// count.set(1);
/// count.set(1); // equal, no notification
/// count.set(2);
/// sub.unsubscribe();
/// count.set(3);
///
/// assert_eq!(*seen.lock().unwrap(), vec![1, 2]);
/// ```
pub struct Signal<T>
where
    T: Clone + PartialEq + Send + Sync + 'static,
{
    inner: Arc<SignalInner<T>>,
}

impl<T> Signal<T>
where
    T: Clone + PartialEq + Send + Sync + 'static,
{
    /// Create a new signal with the given initial value.
    pub fn new(value: T) -> Self {
        Self {
            inner: Arc::new(SignalInner {
                id: next_signal_id(),
                value: RwLock::new(value),
                subscribers: Mutex::new(Vec::new()),
            }),
        }
    }

    /// Get the signal's unique ID.
    pub fn id(&self) -> u64 {
        self.inner.id
    }

    /// Get the current value.
    pub fn get(&self) -> T {
        self.inner.value.read().clone()
    }

    /// Borrow the current value without cloning it.
    ///
    /// The closure runs under the value's read lock, so it must not call
    /// `set` or `update` on this signal.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&*self.inner.value.read())
    }

    /// Set a new value and notify subscribers if it differs from the
    /// current one.
    pub fn set(&self, value: T) {
        {
            let mut current = self.inner.value.write();
            if *current == value {
                trace!(signal = self.inner.id, "set skipped, value unchanged");
                return;
            }
            *current = value.clone();
        }

        let snapshot: SmallVec<[Callback<T>; 4]> = self
            .inner
            .subscribers
            .lock()
            .iter()
            .map(Subscriber::callback)
            .collect();

        trace!(signal = self.inner.id, subscribers = snapshot.len(), "notifying");

        for callback in &snapshot {
            callback(&value);
        }
    }

    /// Update the value using a function of the current value.
    ///
    /// Goes through `set`, so an unchanged result notifies nobody. The
    /// closure sees a copy of the value and runs without any lock held, so
    /// it may read or set this signal.
    pub fn update<F>(&self, f: F)
    where
        F: FnOnce(&T) -> T,
    {
        let current = self.get();
        self.set(f(&current));
    }

    /// Register a callback that receives every subsequent change.
    ///
    /// Values set before this call are not replayed.
    pub fn subscribe<F>(&self, callback: F) -> Subscription
    where
        F: Fn(&T) + Send + Sync + 'static,
    {
        let subscriber = Subscriber::new(callback);
        let id = subscriber.id();
        self.inner.subscribers.lock().push(subscriber);

        trace!(signal = self.inner.id, subscriber = %id, "subscribed");

        let source: Weak<dyn Detach> = Arc::downgrade(&self.inner) as Weak<dyn Detach>;
        Subscription::new(id, self.inner.id, source)
    }

    /// Get the number of subscribers.
    pub fn subscriber_count(&self) -> usize {
        self.inner.subscribers.lock().len()
    }
}

impl<T> Clone for Signal<T>
where
    T: Clone + PartialEq + Send + Sync + 'static,
{
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T> Default for Signal<T>
where
    T: Clone + PartialEq + Send + Sync + Default + 'static,
{
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T> Debug for Signal<T>
where
    T: Clone + PartialEq + Send + Sync + Debug + 'static,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Signal")
            .field("id", &self.inner.id)
            .field("value", &*self.inner.value.read())
            .field("subscriber_count", &self.subscriber_count())
            .finish()
    }
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------
