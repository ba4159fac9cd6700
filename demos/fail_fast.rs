//! # Example: fail_fast
//!
//! Demonstrates fail-fast dispatch: the first handler error aborts the run,
//! later handlers are skipped, and the error names the failing subscriber.
//!
//! Shows how to:
//! - Return [`NotifyError`] from a handler.
//! - Inspect [`TriggerError`] at the trigger call site.
//!
//! ## Flow
//! ```text
//! trigger()
//!   ├─► "greeter"  ──► Ok, prints
//!   ├─► "flaky"    ──► Err(NotifyError) ──► run aborts here
//!   └─► "closer"   ──► (never runs)
//! ```
//!
//! ## Run
//! Exits non-zero: the trigger error propagates out of `main`.
//! ```bash
//! cargo run --example fail_fast
//! ```

use std::sync::Arc;

use fanfare::{Notification, NotifyError, Publisher, SubscribeFn};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let publisher = Publisher::new();

    publisher.add_handler(SubscribeFn::arc("greeter", |notice: Arc<Notification>| async move {
        println!("[greeter] {}", notice.message());
        Ok(())
    }))?;
    publisher.add_handler(SubscribeFn::arc("flaky", |_notice| async move {
        Err(NotifyError::failed("sink unavailable"))
    }))?;
    publisher.add_handler(SubscribeFn::arc("closer", |notice: Arc<Notification>| async move {
        // Never reached: dispatch stops at the first failure.
        println!("[closer] {}", notice.message());
        Ok(())
    }))?;

    // The error names the failing subscriber and carries its reason.
    if let Err(err) = publisher.trigger().await {
        eprintln!(
            "[main] dispatch aborted: label={} subscriber={:?}",
            err.as_label(),
            err.subscriber()
        );
        return Err(err.into());
    }
    Ok(())
}
