use std::error::Error;
use std::fmt;
use std::sync::{Arc, OnceLock, PoisonError, RwLock};

use log::{Log, Metadata, Record};

use super::{Level, Logger, LoggingConfig, Sink};
use crate::error::SetupError;

static ACTIVE: RwLock<Option<Arc<Logger>>> = RwLock::new(None);

/// Whether the `log` facade hook is ours. Set on first install.
static FACADE: OnceLock<bool> = OnceLock::new();

/// Forwards `log` facade records to the active logger.
struct Dispatch;

static DISPATCH: Dispatch = Dispatch;

impl Log for Dispatch {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        current().is_some_and(|logger| logger.enabled(metadata))
    }

    fn log(&self, record: &Record<'_>) {
        if let Some(logger) = current() {
            logger.log(record);
        }
    }

    fn flush(&self) {
        if let Some(logger) = current() {
            logger.flush();
        }
    }
}

fn current() -> Option<Arc<Logger>> {
    ACTIVE
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .clone()
}

fn hook_facade(logger: &Logger) {
    let ours = *FACADE.get_or_init(|| log::set_logger(&DISPATCH).is_ok());
    if ours {
        log::set_max_level(logger.max_level());
    }
}

/// Configures the process-wide logger.
///
/// A non-empty `file_name` is created (or truncated) and receives every
/// following line. An empty one keeps the current sink, which is the
/// console if nothing was configured before. On error the previously
/// active logger stays in place.
pub fn init(debug: bool, file_name: &str) -> Result<(), SetupError> {
    init_with(LoggingConfig::new().debug(debug).file(file_name))
}

/// [`init`] with a full configuration.
///
/// Without a file, the active logger's sink is kept.
pub fn init_with(config: LoggingConfig) -> Result<(), SetupError> {
    let logger = match (config.file_path(), current()) {
        (None, Some(active)) => active.reconfigure(config),
        _ => Logger::new(config)?,
    };
    install(logger);
    Ok(())
}

/// Makes `logger` the process-wide logger and returns the shared handle.
///
/// Records sent through the `log` facade are routed to it too, unless
/// another logger claimed the facade first.
pub fn install(logger: Logger) -> Arc<Logger> {
    let logger = Arc::new(logger);
    *ACTIVE.write().unwrap_or_else(PoisonError::into_inner) = Some(Arc::clone(&logger));
    hook_facade(&logger);
    logger
}

/// The process-wide logger.
///
/// Installs a console logger with debug output off if nothing was
/// configured yet.
pub fn logger() -> Arc<Logger> {
    if let Some(logger) = current() {
        return logger;
    }

    let logger = {
        let mut slot = ACTIVE.write().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(slot.get_or_insert_with(|| {
            Arc::new(Logger::with_sink(LoggingConfig::default(), Sink::Stdout))
        }))
    };
    hook_facade(&logger);
    logger
}

/// Reports `err` and its captured stack through the process-wide logger.
///
/// See [`Logger::error_with_stack`].
#[track_caller]
pub fn error_with_stack(message: &str, err: &(dyn Error + 'static)) {
    logger().error_with_stack(message, err);
}

#[doc(hidden)]
pub fn __emit(level: Level, target: &str, file: &str, line: u32, args: fmt::Arguments<'_>) {
    logger().emit_target(level, target, file, line, args);
}

#[doc(hidden)]
pub fn __emit_custom(args: fmt::Arguments<'_>) {
    logger().emit_custom(args);
}
