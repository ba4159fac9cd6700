//! # Example: stamp_hook
//!
//! Demonstrates swapping the stamp strategy that annotates each payload
//! before dispatch.
//!
//! Shows how to:
//! - Use the bundled [`utc_stamp`] instead of the default local-time stamp.
//! - Write a fully custom [`Stamp`] closure.
//!
//! ## Flow
//! ```text
//! trigger()
//!   ├─► Notification::new(base_message)
//!   ├─► stamp(&mut notification)      <── the hook this example swaps out
//!   └─► handlers see the annotated message
//! ```
//!
//! ## Run
//! ```bash
//! cargo run --example stamp_hook
//! ```

use std::sync::Arc;

use fanfare::{utc_stamp, Notification, Publisher, Stamp, SubscribeFn, SubscribeRef};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let echo = |tag: &'static str| -> SubscribeRef {
        SubscribeFn::arc(tag, move |notice: Arc<Notification>| async move {
            println!("[{tag}] {}", notice.message());
            Ok(())
        })
    };

    // 1) Bundled alternative: RFC 3339 UTC instead of local time.
    let deploys = Publisher::builder()
        .with_base_message("Deploy finished")
        .with_stamp(utc_stamp())
        .with_subscribers(vec![echo("utc")])
        .build();
    deploys.trigger().await?;

    // 2) Fully custom stamp: tag each payload with its own sequence number.
    let run_tag: Stamp = Arc::new(|notice: &mut Notification| {
        let seq = notice.seq();
        notice.annotate(format!(" (run #{seq})"));
    });
    let backups = Publisher::builder()
        .with_base_message("Backup completed")
        .with_stamp(run_tag)
        .with_subscribers(vec![echo("tagged")])
        .build();
    backups.trigger().await?;
    backups.trigger().await?;

    Ok(())
}
