//! Subscription handles.
//!
//! `Signal::subscribe` returns a [`Subscription`]. Calling
//! [`Subscription::unsubscribe`] removes exactly the callback that produced
//! it. The handle only holds a weak reference to the signal, so it never
//! keeps the signal alive, and it does not unsubscribe when dropped.

use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Weak;

use tracing::trace;

use super::SubscriberId;

/// The side of a signal a subscription can detach from.
///
/// Type-erased so subscriptions to signals of different value types can be
/// stored together (see `AppState`).
pub(crate) trait Detach: Send + Sync {
    /// Remove the subscriber. Returns whether it was still registered.
    fn detach(&self, id: SubscriberId) -> bool;

    /// Whether the subscriber is still registered.
    fn is_attached(&self, id: SubscriberId) -> bool;
}

/// Handle returned by `Signal::subscribe`.
#[must_use = "dropping a Subscription leaves the callback registered"]
pub struct Subscription {
    id: SubscriberId,
    signal_id: u64,
    source: Weak<dyn Detach>,
    active: AtomicBool,
}

impl Subscription {
    pub(crate) fn new(id: SubscriberId, signal_id: u64, source: Weak<dyn Detach>) -> Self {
        Self {
            id,
            signal_id,
            source,
            active: AtomicBool::new(true),
        }
    }

    /// The id of the registered callback.
    pub fn id(&self) -> SubscriberId {
        self.id
    }

    /// The id of the signal this subscription belongs to.
    pub fn signal_id(&self) -> u64 {
        self.signal_id
    }

    /// Remove the callback from the signal.
    ///
    /// Idempotent: only the first call has any effect. Safe to call after
    /// the signal itself has been dropped.
    pub fn unsubscribe(&self) {
        if !self.active.swap(false, Ordering::AcqRel) {
            return;
        }

        let removed = self
            .source
            .upgrade()
            .map(|source| source.detach(self.id))
            .unwrap_or(false);

        trace!(subscriber = %self.id, signal = self.signal_id, removed, "unsubscribed");
    }

    /// Whether the callback is still registered on a live signal.
    pub fn is_active(&self) -> bool {
        self.active.load(Ordering::Acquire)
            && self
                .source
                .upgrade()
                .is_some_and(|source| source.is_attached(self.id))
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("id", &self.id)
            .field("signal_id", &self.signal_id)
            .field("active", &self.is_active())
            .finish()
    }
}
