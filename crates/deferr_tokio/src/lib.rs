//! [`deferr`] for resources that close asynchronously.
mod close;
pub use close::{AsyncClose, Blocking, Shutdown};

mod policy;
pub use policy::{close_and_log, close_defer_to_existing, close_overwrite};

/// Re-exports
pub use async_trait::async_trait;
pub use deferr::{LogSink, Logger, Outcome};
