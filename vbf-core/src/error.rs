//! Error types for the application-state layer.
//!
//! Signal operations are total and never return errors; only `AppState`
//! and its configuration can fail.

use thiserror::Error;

/// Errors raised by [`AppState`](crate::state::AppState) and
/// [`AppStateConfig`](crate::state::AppStateConfig).
#[derive(Debug, Error)]
pub enum StateError {
    /// The configuration document could not be parsed.
    #[error("invalid state configuration: {0}")]
    Config(#[from] serde_json::Error),

    /// No signal is registered in the store under this key.
    #[error("no signal registered for key `{0}`")]
    UnknownKey(String),

    /// The state has been shut down and no longer accepts subscriptions.
    #[error("application state has been shut down")]
    ShutDown,
}

/// Result alias for state operations.
pub type Result<T> = std::result::Result<T, StateError>;
