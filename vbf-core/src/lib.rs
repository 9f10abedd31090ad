//! vbf Core
//!
//! This crate provides the client-side state primitives for vbf front ends.
//! It implements:
//!
//! - Reactive signals with change notification
//! - A keyed signal store
//! - Root-owned application state with explicit teardown
//!
//! # Architecture
//!
//! The crate is organized into two modules:
//!
//! - `reactive`: `Signal`, subscriber ids, and subscription handles
//! - `state`: `Store`, `AppState`, and its configuration
//!
//! # Example
//!
//! ```rust
//! use serde_json::json;
//! use vbf_core::state::{AppState, AppStateConfig};
//!
//! let config = AppStateConfig::from_json(r#"{"initial": {"count": 0}}"#)?;
//! let state = AppState::from_config(config);
//!
//! state.watch("count", |v| println!("count is now {v}"))?;
//!
//! if let Some(count) = state.store().get("count") {
//!     count.set(json!(5)); // prints "count is now 5"
//! }
//!
//! state.shutdown();
//! # Ok::<(), vbf_core::StateError>(())
//! ```

pub mod reactive;
pub mod state;
mod error;

pub use error::{Result, StateError};
