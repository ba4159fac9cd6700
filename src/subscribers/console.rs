//! # Console subscriber.
//!
//! [`Subscriber`] is the built-in handler: it identifies itself by `id` and
//! prints every notification it receives to stdout on one line.
//!
//! ## Output format
//! ```text
//! <id> received this message: <message>
//! ```
//!
//! e.g.
//! ```text
//! sub1 received this message: Event triggered at 2026-08-25 14:03:07.412
//! ```
//!
//! A `Subscriber` attaches itself to a publisher at construction time via
//! [`Subscriber::register`], mirroring how most hand-written handlers want to
//! come into existence already wired up.

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::{NotifyError, RegisterError};
use crate::notifications::Notification;
use crate::publisher::Publisher;
use crate::subscribers::{Subscribe, SubscribeRef};

/// Built-in console subscriber.
///
/// Cheap to share: the id lives in an `Arc<str>` and the struct holds no
/// other state.
#[derive(Debug, Clone)]
pub struct Subscriber {
    id: Arc<str>,
}

impl Subscriber {
    /// Creates a subscriber and registers it with `publisher` in one step.
    ///
    /// The returned handle can be kept for inspection ([`Subscriber::id`],
    /// [`Subscriber::line`]) or dropped; the publisher holds its own reference
    /// until the publisher itself is dropped.
    ///
    /// # Errors
    /// Returns [`RegisterError::Poisoned`] when the publisher's handler list
    /// is unusable because a previous registration panicked.
    pub fn register(id: impl Into<Arc<str>>, publisher: &Publisher) -> Result<Arc<Self>, RegisterError> {
        let sub = Arc::new(Self { id: id.into() });
        publisher.add_handler(Arc::clone(&sub) as SubscribeRef)?;
        Ok(sub)
    }

    /// Subscriber id, as passed to [`Subscriber::register`].
    #[inline]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Renders the output line for `notice` without printing it.
    pub fn line(&self, notice: &Notification) -> String {
        format!("{} received this message: {}", self.id, notice.message())
    }
}

#[async_trait]
impl Subscribe for Subscriber {
    async fn notify(
        &self,
        _sender: &Publisher,
        notice: Arc<Notification>,
    ) -> Result<(), NotifyError> {
        println!("{}", self.line(&notice));
        Ok(())
    }

    fn name(&self) -> &str {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_appends_one_handler() {
        let publisher = Publisher::new();
        let sub = Subscriber::register("sub1", &publisher).unwrap();

        assert_eq!(sub.id(), "sub1");
        assert_eq!(
            publisher.subscriber_count(),
            1,
            "registration must append exactly one handler"
        );
    }

    #[test]
    fn test_duplicate_ids_register_independently() {
        let publisher = Publisher::new();
        Subscriber::register("dup", &publisher).unwrap();
        Subscriber::register("dup", &publisher).unwrap();

        assert_eq!(
            publisher.subscriber_count(),
            2,
            "identical ids must not collapse into one registration"
        );
    }

    #[test]
    fn test_line_prefixes_id() {
        let publisher = Publisher::new();
        let sub = Subscriber::register("sub2", &publisher).unwrap();

        let mut notice = Notification::new("Event triggered");
        notice.annotate(" at 2026-08-25 14:03:07.412");

        assert_eq!(
            sub.line(&notice),
            "sub2 received this message: Event triggered at 2026-08-25 14:03:07.412"
        );
    }

    #[test]
    fn test_name_matches_id() {
        let publisher = Publisher::new();
        let sub = Subscriber::register("metrics", &publisher).unwrap();
        assert_eq!(sub.name(), "metrics");
    }
}
