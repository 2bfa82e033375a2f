//! Logging infrastructure: console formatting and task summary collection.

mod logger;
mod subscriber;
mod types;

pub use logger::Logger;
pub use subscriber::init_subscriber;
pub use types::{Log, TaskEntry, TaskStatus};

/// `tracing` target used for stage headers.
pub(crate) const STAGE_TARGET: &str = "retrofe_package::stage";
