//! Root-owned application state.
//!
//! `AppState` is created once at startup and owned by the root UI component.
//! It holds the keyed [`Store`] and the list of subscriptions made on behalf
//! of the application. `shutdown` (or dropping the state) unsubscribes all
//! of them.

use parking_lot::Mutex;
use serde_json::Value;
use tracing::debug;

use super::{AppStateConfig, Store};
use crate::error::{Result, StateError};
use crate::reactive::{SubscriberId, Subscription};

/// Subscriptions tracked for teardown.
#[derive(Debug, Default)]
struct Tracked {
    subscriptions: Vec<Subscription>,
    shut_down: bool,
}

/// Application state with an explicit lifecycle.
#[derive(Debug, Default)]
pub struct AppState {
    store: Store,
    tracked: Mutex<Tracked>,
}

impl AppState {
    /// Create an empty state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a state whose store is seeded from `config`.
    pub fn from_config(config: AppStateConfig) -> Self {
        let state = Self::new();
        for (key, value) in config.initial {
            state.store.signal(key, value);
        }
        debug!(keys = state.store.len(), "application state created");
        state
    }

    /// The keyed signal store.
    pub fn store(&self) -> &Store {
        &self.store
    }

    /// Hand a subscription to the state so `shutdown` releases it.
    ///
    /// Entries that are no longer active (released elsewhere, or whose
    /// signal is gone) are pruned first. After shutdown the subscription is
    /// released immediately and [`StateError::ShutDown`] is returned.
    pub fn track(&self, subscription: Subscription) -> Result<SubscriberId> {
        let id = subscription.id();
        let mut tracked = self.tracked.lock();
        if tracked.shut_down {
            drop(tracked);
            subscription.unsubscribe();
            return Err(StateError::ShutDown);
        }
        tracked.subscriptions.retain(Subscription::is_active);
        tracked.subscriptions.push(subscription);
        Ok(id)
    }

    /// Release one tracked subscription by id.
    ///
    /// Returns `false` if no tracked subscription has that id.
    pub fn unwatch(&self, id: SubscriberId) -> bool {
        let removed = {
            let mut tracked = self.tracked.lock();
            let index = tracked.subscriptions.iter().position(|s| s.id() == id);
            index.map(|index| tracked.subscriptions.remove(index))
        };

        match removed {
            Some(subscription) => {
                subscription.unsubscribe();
                true
            }
            None => false,
        }
    }

    /// Subscribe to the store signal under `key` and track the subscription.
    pub fn watch<F>(&self, key: &str, callback: F) -> Result<SubscriberId>
    where
        F: Fn(&Value) + Send + Sync + 'static,
    {
        if self.is_shut_down() {
            return Err(StateError::ShutDown);
        }
        let signal = self
            .store
            .get(key)
            .ok_or_else(|| StateError::UnknownKey(key.to_owned()))?;
        self.track(signal.subscribe(callback))
    }

    /// Number of subscriptions currently tracked.
    pub fn tracked_count(&self) -> usize {
        self.tracked.lock().subscriptions.len()
    }

    pub fn is_shut_down(&self) -> bool {
        self.tracked.lock().shut_down
    }

    /// Unsubscribe every tracked subscription, in registration order.
    ///
    /// Returns how many were still active when released. Calling it again
    /// releases nothing.
    pub fn shutdown(&self) -> usize {
        let subscriptions = {
            let mut tracked = self.tracked.lock();
            tracked.shut_down = true;
            std::mem::take(&mut tracked.subscriptions)
        };

        let released = subscriptions
            .iter()
            .filter(|subscription| {
                let active = subscription.is_active();
                subscription.unsubscribe();
                active
            })
            .count();

        if !subscriptions.is_empty() {
            debug!(released, tracked = subscriptions.len(), "application state shut down");
        }
        released
    }
}

impl Drop for AppState {
    fn drop(&mut self) {
        self.shutdown();
    }
}
