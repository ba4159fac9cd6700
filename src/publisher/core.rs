//! # Publisher core.
//!
//! [`Publisher`] owns the ordered handler list and drives dispatch.
//!
//! ## Dispatch contract
//! ```text
//! trigger()
//!    │
//!    ├─► snapshot handlers (read lock, then release)
//!    │      └─ empty? ── yes ──► Ok(()) (no payload is built)
//!    │
//!    ├─► build Notification from the base message, apply the stamp
//!    │
//!    └─► for each handler, in registration order:
//!           notify(sender, Arc<Notification>).await
//!              └─ Err? ──► abort, wrap as TriggerError::HandlerFailed
//! ```
//!
//! - Handlers run strictly in registration order; each one completes before
//!   the next starts.
//! - All handlers in one run receive the *same* `Arc<Notification>` instance.
//! - Registrations made while a run is in flight (including from inside a
//!   handler) apply to the next trigger, never the current one.
//! - The first handler error aborts the run; remaining handlers are skipped.
//! - Concurrent triggers are not coordinated: each run takes its own snapshot
//!   and dispatches independently. There is no queueing and no deferral.

use std::sync::{Arc, RwLock};

use crate::error::{RegisterError, TriggerError};
use crate::notifications::{Notification, Stamp};
use crate::publisher::PublisherBuilder;
use crate::subscribers::{Subscribe, SubscribeRef};

/// Dispatches notifications to an ordered list of subscribers.
///
/// Create one with [`Publisher::new`] for the defaults (base message
/// `"Event triggered"`, local-time stamp) or [`Publisher::builder`] to
/// customize.
///
/// ## Example
/// ```rust
/// use fanfare::{Publisher, Subscriber};
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let publisher = Publisher::new();
/// Subscriber::register("sub1", &publisher)?;
/// Subscriber::register("sub2", &publisher)?;
///
/// // Prints, in order:
/// //   sub1 received this message: Event triggered at <timestamp>
/// //   sub2 received this message: Event triggered at <timestamp>
/// publisher.trigger().await?;
/// # Ok(())
/// # }
/// ```
pub struct Publisher {
    /// Handlers in registration order. Guarded so registration can race
    /// dispatch without tearing the list.
    handlers: RwLock<Vec<SubscribeRef>>,
    /// Message every dispatched notification starts from.
    base: String,
    /// Applied to the payload once per run, before any handler sees it.
    stamp: Stamp,
}

impl Publisher {
    /// Creates a publisher with default settings.
    ///
    /// Equivalent to `Publisher::builder().build()`.
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Returns a builder for configuring base message, stamp, and initial
    /// subscribers.
    pub fn builder() -> PublisherBuilder {
        PublisherBuilder::default()
    }

    pub(crate) fn from_parts(base: String, stamp: Stamp, handlers: Vec<SubscribeRef>) -> Self {
        Self {
            handlers: RwLock::new(handlers),
            base,
            stamp,
        }
    }

    /// Appends `handler` to the end of the handler list.
    ///
    /// The same handler may be registered more than once; it is then invoked
    /// once per registration on every run. Registering during an in-flight
    /// run is allowed and takes effect from the next run.
    ///
    /// # Errors
    /// Returns [`RegisterError::Poisoned`] when the handler list is unusable
    /// because a previous lock holder panicked. The list is left unchanged.
    pub fn add_handler(&self, handler: SubscribeRef) -> Result<(), RegisterError> {
        let mut handlers = self.handlers.write().map_err(|_| RegisterError::Poisoned)?;
        handlers.push(handler);
        Ok(())
    }

    /// Runs one dispatch: builds a stamped notification and delivers it to
    /// every registered handler, in registration order.
    ///
    /// With no handlers registered this is a no-op: `Ok(())` without building
    /// a payload. Otherwise every handler receives a clone of the same
    /// `Arc<Notification>` and is awaited to completion before the next
    /// handler starts.
    ///
    /// # Errors
    /// - [`TriggerError::HandlerFailed`] when a handler returns an error; the
    ///   run stops there and the error names the failing subscriber.
    /// - [`TriggerError::Poisoned`] when the handler list is unusable; no
    ///   handler is invoked.
    pub async fn trigger(&self) -> Result<(), TriggerError> {
        // Snapshot under the read lock, then release it: handlers are free to
        // register more handlers while the run is in flight.
        let snapshot: Vec<SubscribeRef> = self
            .handlers
            .read()
            .map_err(|_| TriggerError::Poisoned)?
            .clone();
        if snapshot.is_empty() {
            return Ok(());
        }

        let mut notice = Notification::new(self.base.clone());
        (self.stamp)(&mut notice);
        let notice = Arc::new(notice);

        for sub in &snapshot {
            sub.notify(self, Arc::clone(&notice))
                .await
                .map_err(|source| TriggerError::HandlerFailed {
                    subscriber: sub.name().to_owned(),
                    source,
                })?;
        }
        Ok(())
    }

    /// Number of currently registered handlers.
    ///
    /// Reads as `0` when the handler list is poisoned.
    pub fn subscriber_count(&self) -> usize {
        self.handlers.read().map(|h| h.len()).unwrap_or(0)
    }

    /// The message every dispatched notification starts from, before the
    /// stamp is applied.
    #[inline]
    pub fn base_message(&self) -> &str {
        &self.base
    }
}

impl Default for Publisher {
    fn default() -> Self {
        Self::new()
    }
}
