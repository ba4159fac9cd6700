//! Notification data model: payload and stamp strategies.
//!
//! This module groups the per-trigger **payload** and the **stamp** hook that
//! augments it right before dispatch.
//!
//! ## Contents
//! - [`Notification`]: message, global sequence number, optional stamp instant
//! - [`Stamp`], [`local_stamp`], [`utc_stamp`]: pre-dispatch augmentation
//!
//! ## Quick reference
//! - **Producer**: `Publisher::trigger` constructs and stamps the payload.
//! - **Consumers**: every `Subscribe::notify` invocation of one trigger run
//!   receives the same `Arc<Notification>`.

mod notification;
mod stamp;

pub use notification::Notification;
pub use stamp::{local_stamp, utc_stamp, Stamp};

pub(crate) use stamp::LOCAL_FORMAT;
