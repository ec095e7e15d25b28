//! Don't lose the error from closing a resource.
//!
//! Releasing a resource can fail, and for some resources that failure matters:
//! a file that fails to sync may not have all of its data written. The helpers
//! here pick what happens to that error when there may already be one in
//! flight:
//!
//! - [`close_overwrite`]: the close error wins.
//! - [`close_defer_to_existing`]: the existing error wins.
//! - [`close_and_log`]: the close error is only logged.
//!
//! ```
//! use std::io::{BufWriter, Write};
//!
//! fn save(data: &[u8]) -> std::io::Result<()> {
//!     let mut out = BufWriter::new(Vec::new());
//!     let mut result = out.write_all(data);
//!     deferr::close_overwrite(&mut out, &mut result);
//!     result
//! }
//!
//! save(b"hello world").unwrap();
//! ```
mod close;
pub use close::{from_fn, Close, FnClose};

mod outcome;
pub use outcome::{Outcome, OutcomeExt};

mod policy;
pub use policy::{close_and_log, close_defer_to_existing, close_named, close_overwrite};

mod sink;
pub use sink::{LogSink, Logger};

mod config;
pub use config::Config;

mod error;
pub use error::CloseError;

mod guard;
pub use guard::CloseGuard;


/// Re-exports
pub use log;
