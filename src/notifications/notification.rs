//! # Notification payload delivered to subscribers.
//!
//! A [`Notification`] carries the human-readable message for one trigger run,
//! together with a little metadata:
//! - `seq`: a globally unique, monotonically increasing sequence number, taken
//!   at construction. When output from several publishers interleaves, `seq`
//!   restores the exact creation order.
//! - `stamped_at`: the wall-clock instant recorded by the stamp step, `None`
//!   until a stamp runs.
//!
//! ## Lifecycle
//! The publisher constructs the payload when dispatch will actually happen,
//! runs the stamp strategy over `&mut Notification` (the only mutation window),
//! then wraps it in an [`Arc`](std::sync::Arc) and hands the same instance to
//! every handler. Once shared, no `&mut` access exists; immutability after the
//! augmentation step is enforced by ownership rather than by convention.
//!
//! ## Example
//! ```rust
//! use fanfare::Notification;
//!
//! let mut notice = Notification::new("Event triggered");
//! assert_eq!(notice.message(), "Event triggered");
//! assert!(!notice.is_stamped());
//!
//! notice.annotate(" at 2026-08-25 10:15:00.000");
//! assert!(notice.message().ends_with("10:15:00.000"));
//! ```

use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};
use std::time::SystemTime;

/// Global sequence counter for notification ordering.
static NOTICE_SEQ: AtomicU64 = AtomicU64::new(0);

/// Per-trigger message value shared by all handlers of one dispatch run.
///
/// Constructed from any string; the empty string is legal and no validation is
/// performed. The message is readable at any time and writable only through
/// [`Notification::annotate`] while the holder still has exclusive access.
#[derive(Clone, Debug)]
pub struct Notification {
    seq: u64,
    stamped_at: Option<SystemTime>,
    message: String,
}

impl Notification {
    /// Creates a payload with the given base message and the next global
    /// sequence number. No stamp is recorded yet.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            seq: NOTICE_SEQ.fetch_add(1, AtomicOrdering::Relaxed),
            stamped_at: None,
            message: message.into(),
        }
    }

    /// Returns the current (possibly augmented) message.
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the globally unique, monotonically increasing sequence number.
    #[inline]
    pub fn seq(&self) -> u64 {
        self.seq
    }

    /// Returns the instant recorded by the stamp step, if any.
    #[inline]
    pub fn stamped_at(&self) -> Option<SystemTime> {
        self.stamped_at
    }

    /// Returns `true` once a stamp has recorded its instant.
    #[inline]
    pub fn is_stamped(&self) -> bool {
        self.stamped_at.is_some()
    }

    /// Appends text to the message.
    ///
    /// This is the augmentation-step mutator used by stamp strategies; it is
    /// callable only while the holder has exclusive access, i.e. before the
    /// payload is shared with handlers.
    #[inline]
    pub fn annotate(&mut self, text: impl AsRef<str>) {
        self.message.push_str(text.as_ref());
    }

    /// Records the wall-clock instant the payload was stamped at.
    #[inline]
    pub fn mark_stamped(&mut self, at: SystemTime) {
        self.stamped_at = Some(at);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_holds_base_message_unstamped() {
        let notice = Notification::new("Event triggered");
        assert_eq!(notice.message(), "Event triggered");
        assert!(!notice.is_stamped(), "fresh payload must not be stamped");
        assert!(notice.stamped_at().is_none());
    }

    #[test]
    fn test_empty_message_is_legal() {
        let notice = Notification::new("");
        assert_eq!(notice.message(), "");
    }

    #[test]
    fn test_seq_is_monotonic() {
        let first = Notification::new("a");
        let second = Notification::new("b");
        let third = Notification::new("c");
        assert!(
            first.seq() < second.seq() && second.seq() < third.seq(),
            "seq must grow across constructions: {} {} {}",
            first.seq(),
            second.seq(),
            third.seq()
        );
    }

    #[test]
    fn test_annotate_appends() {
        let mut notice = Notification::new("Event triggered");
        notice.annotate(" at noon");
        notice.annotate(" sharp");
        assert_eq!(notice.message(), "Event triggered at noon sharp");
    }

    #[test]
    fn test_mark_stamped_records_instant() {
        let mut notice = Notification::new("x");
        let at = SystemTime::now();
        notice.mark_stamped(at);
        assert_eq!(notice.stamped_at(), Some(at));
        assert!(notice.is_stamped());
    }
}
