//! # Publisher: ordered, fail-fast notification dispatch.
//!
//! - [`Publisher`] - owns the handler list, builds the stamped payload,
//!   dispatches it to every handler in registration order
//! - [`PublisherBuilder`] - fluent configuration (base message, stamp,
//!   initial subscribers)

mod builder;
mod core;

pub use builder::PublisherBuilder;
pub use core::Publisher;
