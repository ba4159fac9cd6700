//! # Notification subscribers.
//!
//! This module provides the [`Subscribe`] trait and the built-in
//! implementations that receive notifications dispatched by a
//! [`Publisher`](crate::publisher::Publisher).
//!
//! ## Architecture
//! ```text
//! Dispatch flow:
//!   Publisher ── trigger() ──► snapshot handlers ──► notify each, in order
//!                                                        │
//!                                                   Subscribe::notify(sender, Arc<Notification>)
//!                                                        │
//!                                                ┌───────┴────────┬─────────┐
//!                                                ▼                ▼         ▼
//!                                            Subscriber      SubscribeFn  Custom
//!                                            (console)       (closure)    ...
//! ```
//!
//! ## Subscriber types
//! - [`Subscriber`] - built-in console handler, prints `<id> received this message: <message>`
//! - [`SubscribeFn`] - wraps an async closure, for one-off handlers without a struct
//! - Custom - any type implementing [`Subscribe`]
//!
//! ## Implementing custom subscribers
//! ```rust
//! use std::sync::Arc;
//! use async_trait::async_trait;
//! use fanfare::{Notification, NotifyError, Publisher, Subscribe};
//!
//! struct Metrics;
//!
//! #[async_trait]
//! impl Subscribe for Metrics {
//!     async fn notify(&self, _sender: &Publisher, notice: Arc<Notification>) -> Result<(), NotifyError> {
//!         // increment a counter keyed by notice.seq()...
//!         let _ = notice.seq();
//!         Ok(())
//!     }
//! }
//! ```

mod console;
mod subscribe;
mod subscribe_fn;

pub use console::Subscriber;
pub use subscribe::{Subscribe, SubscribeRef};
pub use subscribe_fn::SubscribeFn;
