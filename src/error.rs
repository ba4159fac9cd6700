//! Error types used by the fanfare publisher and its subscribers.
//!
//! This module defines three error enums:
//!
//! - [`RegisterError`]: failures while appending a handler to a publisher.
//! - [`TriggerError`]: failures surfaced by a dispatch run.
//! - [`NotifyError`]: failures raised by an individual handler.
//!
//! All types provide helper methods (`as_label`, `as_message`) for logging and
//! metrics. Dispatch is fail-fast: the first [`NotifyError`] aborts the run and
//! is wrapped in [`TriggerError::HandlerFailed`] together with the name of the
//! subscriber that produced it.

use thiserror::Error;

/// # Errors produced while registering a handler.
///
/// Registration appends to the publisher's handler list under a write lock.
/// The only reachable failure is a poisoned lock: a thread panicked while the
/// list was held for writing. A failed registration leaves the handler
/// sequence unchanged.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum RegisterError {
    /// The handler-list lock is poisoned; the publisher can no longer accept
    /// registrations.
    #[error("handler list lock poisoned; registration rejected")]
    Poisoned,
}

impl RegisterError {
    /// Returns a short stable label (snake_case) for use in logs/metrics.
    ///
    /// # Example
    /// ```
    /// use fanfare::RegisterError;
    ///
    /// assert_eq!(RegisterError::Poisoned.as_label(), "register_poisoned");
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            RegisterError::Poisoned => "register_poisoned",
        }
    }

    /// Returns a human-readable message with details about the error.
    pub fn as_message(&self) -> String {
        match self {
            RegisterError::Poisoned => "handler list lock poisoned".to_string(),
        }
    }
}

/// # Errors produced by a trigger run.
///
/// Dispatch invokes every handler from the snapshot in registration order and
/// stops at the first failure; later handlers in the same run are not invoked.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum TriggerError {
    /// A handler returned an error. Dispatch of the remaining handlers in this
    /// run was aborted.
    #[error("subscriber {subscriber:?} failed: {source}")]
    HandlerFailed {
        /// Name of the failing subscriber (see `Subscribe::name`).
        subscriber: String,
        /// The handler's own error.
        #[source]
        source: NotifyError,
    },

    /// The handler-list lock is poisoned; no snapshot could be taken and no
    /// handler was invoked.
    #[error("handler list lock poisoned; dispatch aborted")]
    Poisoned,
}

impl TriggerError {
    /// Returns a short stable label (snake_case) for use in logs/metrics.
    ///
    /// # Example
    /// ```
    /// use fanfare::{NotifyError, TriggerError};
    ///
    /// let err = TriggerError::HandlerFailed {
    ///     subscriber: "audit".to_string(),
    ///     source: NotifyError::failed("sink unavailable"),
    /// };
    /// assert_eq!(err.as_label(), "trigger_handler_failed");
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            TriggerError::HandlerFailed { .. } => "trigger_handler_failed",
            TriggerError::Poisoned => "trigger_poisoned",
        }
    }

    /// Returns a human-readable message with details about the error.
    pub fn as_message(&self) -> String {
        match self {
            TriggerError::HandlerFailed { subscriber, source } => {
                format!("subscriber {subscriber:?} failed: {}", source.as_message())
            }
            TriggerError::Poisoned => "handler list lock poisoned".to_string(),
        }
    }

    /// Returns the name of the failing subscriber, if this error carries one.
    pub fn subscriber(&self) -> Option<&str> {
        match self {
            TriggerError::HandlerFailed { subscriber, .. } => Some(subscriber),
            TriggerError::Poisoned => None,
        }
    }
}

/// # Errors produced by handler execution.
///
/// Returned from `Subscribe::notify`. The publisher does not isolate or retry
/// these; the first one aborts the in-progress dispatch and propagates to the
/// trigger caller.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum NotifyError {
    /// Handler execution failed.
    #[error("handler failed: {reason}")]
    Failed {
        /// The underlying failure message.
        reason: String,
    },
}

impl NotifyError {
    /// Creates a [`NotifyError::Failed`] from any displayable reason.
    ///
    /// # Example
    /// ```
    /// use fanfare::NotifyError;
    ///
    /// let err = NotifyError::failed("connection refused");
    /// assert_eq!(err.as_message(), "error: connection refused");
    /// ```
    pub fn failed(reason: impl Into<String>) -> Self {
        NotifyError::Failed {
            reason: reason.into(),
        }
    }

    /// Returns a short stable label (snake_case) for use in logs/metrics.
    ///
    /// # Example
    /// ```
    /// use fanfare::NotifyError;
    ///
    /// assert_eq!(NotifyError::failed("boom").as_label(), "notify_failed");
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            NotifyError::Failed { .. } => "notify_failed",
        }
    }

    /// Returns a human-readable message with details about the error.
    pub fn as_message(&self) -> String {
        match self {
            NotifyError::Failed { reason } => format!("error: {reason}"),
        }
    }
}
