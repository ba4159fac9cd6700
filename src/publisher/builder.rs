//! # Publisher builder.
//!
//! Fluent construction for [`Publisher`]: base message, stamp strategy, and
//! subscribers that should be in place before the first trigger.
//!
//! ## Example
//! ```rust
//! use std::sync::Arc;
//!
//! use fanfare::{utc_stamp, Notification, Publisher, SubscribeFn, SubscribeRef};
//!
//! let audit: SubscribeRef = SubscribeFn::arc("audit", |notice: Arc<Notification>| async move {
//!     let _ = notice.message();
//!     Ok(())
//! });
//!
//! let publisher = Publisher::builder()
//!     .with_base_message("Deploy finished")
//!     .with_stamp(utc_stamp())
//!     .with_subscribers(vec![audit])
//!     .build();
//!
//! assert_eq!(publisher.base_message(), "Deploy finished");
//! assert_eq!(publisher.subscriber_count(), 1);
//! ```

use crate::notifications::{local_stamp, Stamp};
use crate::publisher::Publisher;
use crate::subscribers::SubscribeRef;

/// Base message used when none is configured.
pub(crate) const DEFAULT_BASE: &str = "Event triggered";

/// Builder for [`Publisher`].
///
/// Obtained via [`Publisher::builder`]. Every setter consumes and returns the
/// builder; [`PublisherBuilder::build`] is infallible.
pub struct PublisherBuilder {
    base: String,
    stamp: Stamp,
    subscribers: Vec<SubscribeRef>,
}

impl Default for PublisherBuilder {
    /// Defaults: base message `"Event triggered"`, local-time stamp, no
    /// subscribers.
    fn default() -> Self {
        Self {
            base: DEFAULT_BASE.to_string(),
            stamp: local_stamp(),
            subscribers: Vec::new(),
        }
    }
}

impl PublisherBuilder {
    /// Creates a builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the message every dispatched notification starts from.
    pub fn with_base_message(mut self, base: impl Into<String>) -> Self {
        self.base = base.into();
        self
    }

    /// Sets the stamp applied to each payload before dispatch.
    ///
    /// See [`local_stamp`](crate::local_stamp) and
    /// [`utc_stamp`](crate::utc_stamp) for the bundled strategies.
    pub fn with_stamp(mut self, stamp: Stamp) -> Self {
        self.stamp = stamp;
        self
    }

    /// Replaces the initial subscriber list.
    ///
    /// Order is preserved: on dispatch these run first, in the order given,
    /// followed by anything added later via
    /// [`Publisher::add_handler`](crate::Publisher::add_handler).
    pub fn with_subscribers(mut self, subscribers: Vec<SubscribeRef>) -> Self {
        self.subscribers = subscribers;
        self
    }

    /// Builds the publisher.
    pub fn build(self) -> Publisher {
        Publisher::from_parts(self.base, self.stamp, self.subscribers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    use chrono::NaiveDateTime;

    use crate::notifications::{Notification, LOCAL_FORMAT};
    use crate::subscribers::SubscribeFn;

    #[tokio::test]
    async fn test_defaults_use_base_message_and_local_stamp() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let tap: SubscribeRef = {
            let log = Arc::clone(&log);
            SubscribeFn::arc("tap", move |notice: Arc<Notification>| {
                let log = Arc::clone(&log);
                async move {
                    log.lock().unwrap().push(notice.message().to_string());
                    Ok(())
                }
            })
        };

        let publisher = PublisherBuilder::default().with_subscribers(vec![tap]).build();
        assert_eq!(publisher.base_message(), DEFAULT_BASE);

        publisher.trigger().await.unwrap();

        let log = log.lock().unwrap();
        let suffix = log[0]
            .strip_prefix("Event triggered at ")
            .unwrap_or_else(|| panic!("default stamp must append local time, got: {:?}", log[0]));
        assert!(
            NaiveDateTime::parse_from_str(suffix, LOCAL_FORMAT).is_ok(),
            "stamped suffix must parse back with the stamp format, got: {suffix:?}"
        );
    }

    #[tokio::test]
    async fn test_with_subscribers_preserves_order() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let tap = |marker: &'static str| -> SubscribeRef {
            let log = Arc::clone(&log);
            SubscribeFn::arc(marker, move |_notice| {
                let log = Arc::clone(&log);
                async move {
                    log.lock().unwrap().push(marker);
                    Ok(())
                }
            })
        };

        let publisher = Publisher::builder()
            .with_subscribers(vec![tap("one"), tap("two")])
            .build();
        publisher.trigger().await.unwrap();

        assert_eq!(
            *log.lock().unwrap(),
            ["one", "two"],
            "pre-registered subscribers must keep their given order"
        );
    }

    #[test]
    fn test_custom_base_message() {
        let publisher = PublisherBuilder::new()
            .with_base_message("Backup completed")
            .build();

        assert_eq!(publisher.base_message(), "Backup completed");
        assert_eq!(publisher.subscriber_count(), 0);
    }
}
