//! Application State
//!
//! The state layer replaces process-wide mutable globals with one object
//! the application constructs at startup and passes down:
//!
//! - [`Store`]: named `Signal<serde_json::Value>` cells.
//! - [`AppState`]: the store plus the subscriptions made on the
//!   application's behalf, released together at shutdown.
//! - [`AppStateConfig`]: serde-loaded seed values for the store.

mod app_state;
mod config;
mod store;

pub use app_state::AppState;
pub use config::AppStateConfig;
pub use store::Store;
