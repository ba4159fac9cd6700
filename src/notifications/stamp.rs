//! # Stamp strategies: pre-dispatch payload augmentation.
//!
//! A [`Stamp`] is the hook a publisher runs over the payload right before
//! dispatch, while it still has exclusive access. The built-in stamps append
//! `" at <wall-clock timestamp>"` to the message and record the instant via
//! [`Notification::mark_stamped`]; a custom stamp may perform any augmentation.
//!
//! The hook runs only when the handler snapshot is non-empty: a trigger with
//! zero subscribers never stamps.
//!
//! ## Built-ins
//! - [`local_stamp`]: local wall clock, `2026-08-25 10:15:00.000` form (default).
//! - [`utc_stamp`]: UTC, RFC 3339 form, for machine-sortable output.
//!
//! ## Example
//! ```rust
//! use fanfare::{local_stamp, Notification};
//!
//! let mut notice = Notification::new("Event triggered");
//! (local_stamp())(&mut notice);
//!
//! assert!(notice.message().starts_with("Event triggered at "));
//! assert!(notice.is_stamped());
//! ```

use std::sync::Arc;
use std::time::SystemTime;

use chrono::{DateTime, Local, SecondsFormat, Utc};

use crate::notifications::Notification;

/// Pre-dispatch augmentation strategy, injected at publisher construction.
pub type Stamp = Arc<dyn Fn(&mut Notification) + Send + Sync>;

/// Render format used by [`local_stamp`].
pub(crate) const LOCAL_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

/// Returns the default stamp: appends `" at <local time>"` in
/// `2026-08-25 10:15:00.000` form and records the instant.
pub fn local_stamp() -> Stamp {
    Arc::new(|notice: &mut Notification| {
        let at = SystemTime::now();
        let local: DateTime<Local> = at.into();
        notice.annotate(format!(" at {}", local.format(LOCAL_FORMAT)));
        notice.mark_stamped(at);
    })
}

/// Returns a UTC stamp: appends `" at <RFC 3339>"` (second precision, `Z`
/// suffix) and records the instant.
pub fn utc_stamp() -> Stamp {
    Arc::new(|notice: &mut Notification| {
        let at = SystemTime::now();
        let utc: DateTime<Utc> = at.into();
        notice.annotate(format!(
            " at {}",
            utc.to_rfc3339_opts(SecondsFormat::Secs, true)
        ));
        notice.mark_stamped(at);
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;

    #[test]
    fn test_local_stamp_appends_parseable_timestamp() {
        let mut notice = Notification::new("Event triggered");
        (local_stamp())(&mut notice);

        let rendered = notice
            .message()
            .strip_prefix("Event triggered at ")
            .expect("message must carry the ` at ` separator");
        assert!(
            NaiveDateTime::parse_from_str(rendered, LOCAL_FORMAT).is_ok(),
            "stamp {:?} must parse back with {:?}",
            rendered,
            LOCAL_FORMAT
        );
        assert!(notice.is_stamped());
    }

    #[test]
    fn test_utc_stamp_appends_rfc3339() {
        let mut notice = Notification::new("Event triggered");
        (utc_stamp())(&mut notice);

        let rendered = notice
            .message()
            .strip_prefix("Event triggered at ")
            .expect("message must carry the ` at ` separator");
        assert!(
            DateTime::parse_from_rfc3339(rendered).is_ok(),
            "stamp {:?} must be valid RFC 3339",
            rendered
        );
    }

    #[test]
    fn test_stamp_on_empty_base_message() {
        let mut notice = Notification::new("");
        (local_stamp())(&mut notice);
        assert!(
            notice.message().starts_with(" at "),
            "empty base keeps only the stamp suffix, got {:?}",
            notice.message()
        );
    }

    #[test]
    fn test_stamps_record_distinct_instants() {
        let mut first = Notification::new("a");
        let mut second = Notification::new("b");
        (local_stamp())(&mut first);
        (local_stamp())(&mut second);

        let first_at = first.stamped_at().expect("first stamped");
        let second_at = second.stamped_at().expect("second stamped");
        assert!(
            second_at >= first_at,
            "later stamp must not precede the earlier one"
        );
    }
}
