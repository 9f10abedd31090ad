//! Application-state configuration.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::Result;

/// Startup configuration for [`AppState`](super::AppState).
///
/// ```json
/// { "initial": { "theme": "dark", "count": 0 } }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppStateConfig {
    /// Store keys to create at startup, with their initial values.
    #[serde(default)]
    pub initial: IndexMap<String, Value>,
}

impl AppStateConfig {
    /// Parse a configuration from a JSON document.
    pub fn from_json(source: &str) -> Result<Self> {
        Ok(serde_json::from_str(source)?)
    }

    /// Add an initial store entry.
    pub fn with_initial(mut self, key: impl Into<String>, value: Value) -> Self {
        self.initial.insert(key.into(), value);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StateError;
    use serde_json::json;

    #[test]
    fn parses_initial_values_in_order() {
        let config = AppStateConfig::from_json(r#"{"initial": {"b": 1, "a": "x"}}"#).unwrap();
        let keys: Vec<_> = config.initial.keys().cloned().collect();
        assert_eq!(keys, vec!["b", "a"]);
        assert_eq!(config.initial["a"], json!("x"));
    }

    #[test]
    fn empty_document_is_default() {
        let config = AppStateConfig::from_json("{}").unwrap();
        assert_eq!(config, AppStateConfig::default());
    }

    #[test]
    fn rejects_unknown_fields() {
        let err = AppStateConfig::from_json(r#"{"initial": {}, "events": []}"#).unwrap_err();
        assert!(matches!(err, StateError::Config(_)));
    }

    #[test]
    fn rejects_malformed_json() {
        assert!(matches!(
            AppStateConfig::from_json("not json"),
            Err(StateError::Config(_))
        ));
    }

    #[test]
    fn builder_adds_entries() {
        let config = AppStateConfig::default()
            .with_initial("count", json!(0))
            .with_initial("theme", json!("dark"));
        assert_eq!(config.initial.len(), 2);
    }
}
