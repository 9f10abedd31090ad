//! Reactive Primitives
//!
//! This module implements the signal: a single-value cell that notifies
//! registered callbacks when its value changes.
//!
//! # Concepts
//!
//! ## Signals
//!
//! A Signal holds exactly one current value. Writing a value that differs
//! from the current one (by `PartialEq`) stores it and calls every
//! subscriber with the new value, in subscription order. Writing an equal
//! value does nothing.
//!
//! ## Subscriptions
//!
//! `subscribe` returns a [`Subscription`]. Its `unsubscribe` removes exactly
//! that registration and may be called any number of times.
//!
//! # Implementation Notes
//!
//! There is no dependency tracking and no scheduler. Notification is a
//! synchronous loop over a snapshot of the subscriber list, so callbacks are
//! free to touch the signal they were called from.

mod signal;
mod subscriber;
mod subscription;

pub use signal::Signal;
pub use subscriber::SubscriberId;
pub use subscription::Subscription;
