//! Keyed signal store.
//!
//! Maps string keys to `Signal<Value>` in insertion order. Values are JSON
//! so one store can hold heterogeneous UI state.

use indexmap::IndexMap;
use parking_lot::RwLock;
use serde_json::{Map, Value};

use crate::reactive::Signal;

/// Insertion-ordered map of named signals.
#[derive(Debug, Default)]
pub struct Store {
    signals: RwLock<IndexMap<String, Signal<Value>>>,
}

impl Store {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the signal for `key`, creating it with `initial` if absent.
    ///
    /// An existing signal keeps its current value; `initial` is ignored.
    pub fn signal(&self, key: impl Into<String>, initial: Value) -> Signal<Value> {
        self.signals
            .write()
            .entry(key.into())
            .or_insert_with(|| Signal::new(initial))
            .clone()
    }

    /// Get the signal for `key`, if one exists.
    pub fn get(&self, key: &str) -> Option<Signal<Value>> {
        self.signals.read().get(key).cloned()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.signals.read().contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.signals.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.signals.read().is_empty()
    }

    /// Keys in insertion order.
    pub fn keys(&self) -> Vec<String> {
        self.signals.read().keys().cloned().collect()
    }

    /// Current value of every signal as a JSON object, in insertion order.
    pub fn snapshot(&self) -> Value {
        let signals = self.signals.read();
        let mut object = Map::with_capacity(signals.len());
        for (key, signal) in signals.iter() {
            object.insert(key.clone(), signal.get());
        }
        Value::Object(object)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn signal_is_get_or_create() {
        let store = Store::new();
        let first = store.signal("count", json!(1));
        first.set(json!(5));

        let again = store.signal("count", json!(100));
        assert_eq!(again.get(), json!(5));
        assert_eq!(first.id(), again.id());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn get_missing_key() {
        let store = Store::new();
        assert!(store.get("nope").is_none());
        assert!(!store.contains("nope"));
        assert!(store.is_empty());
    }

    #[test]
    fn snapshot_preserves_insertion_order() {
        let store = Store::new();
        store.signal("zeta", json!("z"));
        store.signal("alpha", json!([1, 2]));
        if let Some(zeta) = store.get("zeta") {
            zeta.set(json!("updated"));
        }

        assert_eq!(store.keys(), vec!["zeta", "alpha"]);

        let snapshot = store.snapshot();
        assert_eq!(snapshot, json!({ "zeta": "updated", "alpha": [1, 2] }));
        let order: Vec<_> = snapshot
            .as_object()
            .map(|o| o.keys().cloned().collect())
            .unwrap_or_default();
        assert_eq!(order, vec!["zeta", "alpha"]);
    }
}
