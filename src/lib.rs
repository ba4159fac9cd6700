//! # fanfare
//!
//! **Fanfare** is a lightweight publish/subscribe notification library for Rust.
//!
//! It provides primitives to register subscribers on a publisher and dispatch
//! stamped notification payloads to them in strict registration order, with
//! fail-fast error propagation. The crate is designed as a building block for
//! in-process event hooks: deploy announcements, lifecycle callbacks, audit
//! fan-out.
//!
//! ## Architecture
//! ### Overview
//! ```text
//!     ┌──────────────┐   ┌──────────────┐   ┌──────────────┐
//!     │  Subscriber  │   │ SubscribeFn  │   │    Custom    │
//!     │  (console)   │   │  (closure)   │   │ (your type)  │
//!     └──────┬───────┘   └──────┬───────┘   └──────┬───────┘
//!            │ register         │ add_handler      │ add_handler
//!            ▼                  ▼                  ▼
//! ┌───────────────────────────────────────────────────────────┐
//! │  Publisher                                                │
//! │  - handlers: ordered list (RwLock<Vec<SubscribeRef>>)     │
//! │  - base message ("Event triggered" by default)            │
//! │  - stamp: appends the trigger time to each payload        │
//! └──────────────────────────┬────────────────────────────────┘
//!                            │ trigger()
//!                            ▼
//!            Notification { seq, message, stamped_at }
//!                            │ Arc<Notification>
//!              ┌─────────────┼─────────────┐
//!              ▼             ▼             ▼
//!          handler #1 ──► handler #2 ──► handler #3
//!          (awaited one at a time, in registration order)
//! ```
//!
//! ### Dispatch lifecycle
//! ```text
//! Publisher::trigger()
//!   ├─► snapshot the handler list
//!   │     (registrations during a run apply to the next run)
//!   ├─► empty? ──► return Ok(()) without building a payload
//!   ├─► Notification::new(base_message)
//!   ├─► stamp(&mut notification)   // appends " at <time>" by default
//!   └─► for each handler, in order:
//!         handler.notify(publisher, Arc<Notification>).await
//!           └─ Err ──► abort run, TriggerError::HandlerFailed { subscriber, source }
//! ```
//!
//! ## Features
//! | Area               | Description                                                        | Key types / traits                           |
//! |--------------------|--------------------------------------------------------------------|----------------------------------------------|
//! | **Subscriber API** | Receive notifications via structs, closures, or the console writer.| [`Subscribe`], [`SubscribeFn`], [`Subscriber`] |
//! | **Publishing**     | Ordered, fail-fast dispatch with snapshot isolation.               | [`Publisher`], [`PublisherBuilder`]          |
//! | **Payloads**       | Sequence-numbered messages, stamped once per run.                  | [`Notification`], [`Stamp`]                  |
//! | **Errors**         | Typed errors for registration, dispatch, and handlers.             | [`RegisterError`], [`TriggerError`], [`NotifyError`] |
//!
//! ## Example
//! ```rust
//! use fanfare::{Publisher, Subscriber};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // One publisher, two console subscribers.
//!     let publisher = Publisher::new();
//!     Subscriber::register("sub1", &publisher)?;
//!     Subscriber::register("sub2", &publisher)?;
//!
//!     // Dispatches one stamped notification to sub1, then sub2:
//!     //   sub1 received this message: Event triggered at <timestamp>
//!     //   sub2 received this message: Event triggered at <timestamp>
//!     publisher.trigger().await?;
//!     Ok(())
//! }
//! ```
mod error;
mod notifications;
mod publisher;
mod subscribers;

// ---- Public re-exports ----

pub use error::{NotifyError, RegisterError, TriggerError};
pub use notifications::{local_stamp, utc_stamp, Notification, Stamp};
pub use publisher::{Publisher, PublisherBuilder};
pub use subscribers::{Subscribe, SubscribeFn, SubscribeRef, Subscriber};
