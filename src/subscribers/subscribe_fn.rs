//! # Function-backed subscriber (`SubscribeFn`).
//!
//! [`SubscribeFn`] wraps a closure `F: Fn(Arc<Notification>) -> Fut`, producing
//! a fresh future per invocation. The closure receives only the payload; a
//! handler that needs the sender (for example, to register more handlers
//! mid-dispatch) implements [`Subscribe`] directly.
//!
//! ## Example
//! ```rust
//! use std::sync::Arc;
//!
//! use fanfare::{Notification, Subscribe, SubscribeFn, SubscribeRef};
//!
//! let audit: SubscribeRef = SubscribeFn::arc("audit", |notice: Arc<Notification>| async move {
//!     // ship notice.message() somewhere...
//!     let _ = notice.message();
//!     Ok(())
//! });
//!
//! assert_eq!(audit.name(), "audit");
//! ```

use std::borrow::Cow;
use std::future::Future;
use std::sync::Arc;

use async_trait::async_trait;

use crate::error::NotifyError;
use crate::notifications::Notification;
use crate::publisher::Publisher;
use crate::subscribers::Subscribe;

/// Function-backed subscriber implementation.
///
/// Wraps a closure that *creates* a new future per notification, so no state
/// is shared between invocations unless the closure captures an `Arc<...>`
/// explicitly.
#[derive(Debug)]
pub struct SubscribeFn<F> {
    name: Cow<'static, str>,
    f: F,
}

impl<F> SubscribeFn<F> {
    /// Creates a new function-backed subscriber.
    ///
    /// Prefer [`SubscribeFn::arc`] when you immediately need a
    /// [`SubscribeRef`](crate::SubscribeRef).
    pub fn new(name: impl Into<Cow<'static, str>>, f: F) -> Self {
        Self {
            name: name.into(),
            f,
        }
    }

    /// Creates the subscriber and returns it as a shared handle.
    pub fn arc(name: impl Into<Cow<'static, str>>, f: F) -> Arc<Self> {
        Arc::new(Self::new(name, f))
    }
}

#[async_trait]
impl<F, Fut> Subscribe for SubscribeFn<F>
where
    F: Fn(Arc<Notification>) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<(), NotifyError>> + Send + 'static,
{
    async fn notify(
        &self,
        _sender: &Publisher,
        notice: Arc<Notification>,
    ) -> Result<(), NotifyError> {
        (self.f)(notice).await
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[tokio::test]
    async fn test_closure_runs_per_notification() {
        let hits = Arc::new(AtomicUsize::new(0));
        let sub = {
            let hits = Arc::clone(&hits);
            SubscribeFn::new("counter", move |_notice| {
                let hits = Arc::clone(&hits);
                async move {
                    hits.fetch_add(1, Ordering::Relaxed);
                    Ok(())
                }
            })
        };

        let publisher = Publisher::new();
        let notice = Arc::new(Notification::new("Event triggered"));
        sub.notify(&publisher, Arc::clone(&notice)).await.unwrap();
        sub.notify(&publisher, notice).await.unwrap();

        assert_eq!(hits.load(Ordering::Relaxed), 2);
    }

    #[tokio::test]
    async fn test_closure_error_propagates() {
        let sub = SubscribeFn::new("flaky", |_notice| async move {
            Err(NotifyError::failed("boom"))
        });

        let publisher = Publisher::new();
        let notice = Arc::new(Notification::new("x"));
        let err = sub
            .notify(&publisher, notice)
            .await
            .expect_err("closure error must surface");
        assert_eq!(err.as_label(), "notify_failed");
    }

    #[test]
    fn test_name_is_stored() {
        let sub = SubscribeFn::new("audit", |_notice| async move { Ok(()) });
        assert_eq!(sub.name(), "audit");
    }
}
