//! # Example: basic
//!
//! Demonstrates the smallest useful setup: one publisher, two console
//! subscribers, one trigger.
//!
//! Shows how to:
//! - Create a [`Publisher`] with default settings.
//! - Register [`Subscriber`]s (they attach themselves at construction).
//! - Dispatch one stamped notification with [`Publisher::trigger`].
//!
//! ## Flow
//! ```text
//! main
//!   ├─► Publisher::new()
//!   ├─► Subscriber::register("sub1", &publisher)
//!   ├─► Subscriber::register("sub2", &publisher)
//!   └─► publisher.trigger()
//!         ├─► sub1 prints: sub1 received this message: Event triggered at <ts>
//!         └─► sub2 prints: sub2 received this message: Event triggered at <ts>
//! ```
//!
//! ## Run
//! ```bash
//! cargo run --example basic
//! ```

use fanfare::{Publisher, Subscriber};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // 1) One publisher with the default base message and local-time stamp.
    let publisher = Publisher::new();

    // 2) Two console subscribers; registration order decides dispatch order.
    Subscriber::register("sub1", &publisher)?;
    Subscriber::register("sub2", &publisher)?;

    // 3) One trigger: both subscribers print the same stamped line.
    publisher.trigger().await?;

    Ok(())
}
