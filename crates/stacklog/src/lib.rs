//! stacklog.
//!
//! Leveled logging (`DEBUG`, `INFO`, `ERROR`) attributed to the calling
//! line, optional redirection to a file, and stack reports for errors that
//! carry the trace of where they were raised.
//!
//! ```no_run
//! use stacklog::{ResultExt, TracedError};
//!
//! fn connect() -> Result<(), TracedError> {
//!     Err(TracedError::msg("connection refused"))
//! }
//!
//! fn sync() -> Result<(), TracedError> {
//!     connect().wrap_traced("syncing")
//! }
//!
//! stacklog::init(false, "").expect("console logger");
//! stacklog::info!("starting sync");
//! if let Err(err) = sync() {
//!     stacklog::error_with_stack("sync failed", &err);
//! }
//! ```

#[macro_use]
mod macros;

mod error;
pub mod logging;
pub mod report;
pub mod trace;

#[cfg(test)]
mod testing;

pub use error::SetupError;
pub use logging::{
    error_with_stack, init, init_with, install, logger, Level, Logger, LoggingConfig, Sink,
};
pub use trace::{root_cause, Frame, HasStackTrace, ResultExt, StackTrace, TracedError};

#[doc(hidden)]
pub use logging::{__emit, __emit_custom};
