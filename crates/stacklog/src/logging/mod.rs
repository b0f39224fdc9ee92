//! Logging.
//!
//! A [`Logger`] is built from a [`LoggingConfig`] and writes through
//! `env_logger` into a [`Sink`]. The process-wide handle (see [`init`]) is
//! what the macros and the `log` facade write to.

mod config;
mod format;
mod init;
mod level;
mod logger;
mod sink;

pub use config::{LoggingConfig, DEFAULT_SKIP_FRAMES};
pub use format::{format_record, CUSTOM_TARGET, UNKNOWN_FILE};
pub use init::{error_with_stack, init, init_with, install, logger, __emit, __emit_custom};
pub use level::Level;
pub use logger::Logger;
pub use sink::Sink;
