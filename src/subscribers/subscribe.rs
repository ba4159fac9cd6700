//! # Core subscriber trait.
//!
//! [`Subscribe`] is the extension point for plugging handlers into a
//! publisher. Handlers are invoked by `Publisher::trigger`, one after another
//! in registration order; each call is awaited to completion before the next
//! subscriber runs, and the first error aborts the remaining invocations of
//! that run.
//!
//! ## Contract
//! - `notify` runs inside the trigger call, not on a background worker: a slow
//!   handler delays every handler registered after it, and the trigger caller.
//! - Errors are not isolated; return `Ok(())` for failures the run should
//!   survive, `Err` to abort dispatch.
//! - Panics are not caught and unwind through the trigger to its caller.
//!
//! ## Example
//! ```rust
//! use std::sync::Arc;
//! use async_trait::async_trait;
//! use fanfare::{Notification, NotifyError, Publisher, Subscribe};
//!
//! struct Audit;
//!
//! #[async_trait]
//! impl Subscribe for Audit {
//!     async fn notify(
//!         &self,
//!         _sender: &Publisher,
//!         notice: Arc<Notification>,
//!     ) -> Result<(), NotifyError> {
//!         // write an audit record...
//!         let _ = notice.message();
//!         Ok(())
//!     }
//!
//!     fn name(&self) -> &str {
//!         "audit"
//!     }
//! }
//! ```

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::NotifyError;
use crate::notifications::Notification;
use crate::publisher::Publisher;

/// Shared handle to a subscriber (`Arc<dyn Subscribe>`).
pub type SubscribeRef = Arc<dyn Subscribe>;

/// Contract for notification handlers.
///
/// Invoked synchronously (in dispatch order, awaited to completion) by the
/// publisher that the handler was registered with. The handler receives the
/// publisher as `sender`, which makes reentrant registration possible: calling
/// `sender.add_handler(...)` from inside `notify` appends to the live list, and
/// the new handler is first invoked by the *next* trigger, never the current
/// one.
#[async_trait]
pub trait Subscribe: Send + Sync + 'static {
    /// Handles a single notification.
    ///
    /// Every handler of one trigger run receives a clone of the same
    /// `Arc<Notification>`: identical content, identical allocation.
    ///
    /// Returning an error aborts dispatch of the handlers registered after
    /// this one and surfaces to the trigger caller with this subscriber's
    /// [`name`](Subscribe::name) attached.
    async fn notify(
        &self,
        sender: &Publisher,
        notice: Arc<Notification>,
    ) -> Result<(), NotifyError>;

    /// Returns the subscriber name used in error attribution and logs.
    ///
    /// Prefer short, descriptive names (e.g. "metrics", "audit"). The default
    /// uses `type_name::<Self>()`, which can be verbose; override it when
    /// possible.
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Quiet;

    #[async_trait]
    impl Subscribe for Quiet {
        async fn notify(
            &self,
            _sender: &Publisher,
            _notice: Arc<Notification>,
        ) -> Result<(), NotifyError> {
            Ok(())
        }
    }

    #[test]
    fn test_default_name_is_type_name() {
        let sub = Quiet;
        assert!(
            sub.name().ends_with("Quiet"),
            "default name {:?} should come from the type name",
            sub.name()
        );
    }

    #[tokio::test]
    async fn test_notify_callable_through_trait_object() {
        let publisher = Publisher::new();
        let sub: SubscribeRef = Arc::new(Quiet);
        let notice = Arc::new(Notification::new("Event triggered"));
        sub.notify(&publisher, notice)
            .await
            .expect("quiet subscriber never fails");
    }
}
