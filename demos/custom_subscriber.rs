//! # Example: custom_subscriber
//!
//! Demonstrates how to build and attach custom notification handlers.
//!
//! Shows how to:
//! - Implement the [`Subscribe`] trait on your own type.
//! - Keep per-handler state (a delivery counter).
//! - Attach a closure handler with [`SubscribeFn`].
//!
//! ## Flow
//! ```text
//! main
//!   ├─► Publisher::builder().with_subscribers([counter])
//!   ├─► publisher.add_handler(SubscribeFn "echo")
//!   └─► publisher.trigger()  (three times)
//!         ├─► counter.notify(): bumps the counter, prints seq + message
//!         └─► echo closure: prints the message
//! ```
//!
//! ## Run
//! ```bash
//! cargo run --example custom_subscriber
//! ```

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use fanfare::{Notification, NotifyError, Publisher, Subscribe, SubscribeFn, SubscribeRef};

/// Counts deliveries as they arrive.
/// In real life, you could export metrics, ship logs, or trigger alerts.
struct CountingSubscriber {
    delivered: AtomicU64,
}

#[async_trait]
impl Subscribe for CountingSubscriber {
    async fn notify(
        &self,
        sender: &Publisher,
        notice: Arc<Notification>,
    ) -> Result<(), NotifyError> {
        let n = self.delivered.fetch_add(1, Ordering::Relaxed) + 1;
        println!(
            "[counter] delivery #{n}: seq={} base={:?} message={:?}",
            notice.seq(),
            sender.base_message(),
            notice.message()
        );
        Ok(())
    }

    fn name(&self) -> &str {
        "counter"
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // 1) Struct handler, attached at build time.
    let counter = Arc::new(CountingSubscriber {
        delivered: AtomicU64::new(0),
    });
    let publisher = Publisher::builder()
        .with_subscribers(vec![Arc::clone(&counter) as SubscribeRef])
        .build();

    // 2) Closure handler, attached afterwards; runs after the counter.
    publisher.add_handler(SubscribeFn::arc("echo", |notice: Arc<Notification>| async move {
        println!("[echo]    {}", notice.message());
        Ok(())
    }))?;

    // 3) Several runs; each one builds a fresh, freshly stamped payload.
    for _ in 0..3 {
        publisher.trigger().await?;
    }

    println!(
        "\n[counter] total deliveries: {}",
        counter.delivered.load(Ordering::Relaxed)
    );
    Ok(())
}
