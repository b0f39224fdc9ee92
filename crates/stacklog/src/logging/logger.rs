use std::error::Error;
use std::fmt;
use std::io::Write;
use std::panic::Location;

use log::{Log, Metadata, Record};

use super::format::{format_record, CUSTOM_TARGET};
use super::sink::Output;
use super::{Level, LoggingConfig, Sink};
use crate::error::SetupError;
use crate::report;

/// Target of leveled records built without a module path, i.e. from the
/// `Logger` methods and the stack reporter. The macros use `module_path!()`.
const LEVELED_TARGET: &str = "stacklog";

/// A configured logger: debug flag, sink and stack report settings.
///
/// Built once (usually at startup) and either used directly or installed
/// as the process-wide handle with [`install`](crate::install).
pub struct Logger {
    inner: env_logger::Logger,
    output: Output,
    debug: bool,
    skip_frames: usize,
}

impl Logger {
    /// Builds a logger, creating the configured log file if there is one.
    ///
    /// Fails only when the file cannot be created.
    pub fn new(config: LoggingConfig) -> Result<Self, SetupError> {
        let sink = match config.file_path() {
            Some(path) => Sink::create(path)?,
            None => Sink::Stdout,
        };
        Ok(Self::with_sink(config, sink))
    }

    /// Builds a logger writing into an already opened sink.
    ///
    /// `config.file` is ignored.
    pub fn with_sink(config: LoggingConfig, sink: Sink) -> Self {
        Self::build(config, sink.into_output())
    }

    /// A logger with `config`'s settings writing to this logger's sink.
    ///
    /// `config.file` is ignored.
    pub fn reconfigure(&self, config: LoggingConfig) -> Self {
        Self::build(config, self.output.clone())
    }

    fn build(config: LoggingConfig, output: Output) -> Self {
        let mut builder = env_logger::Builder::new();
        builder.filter_level(config.level_filter());
        if let Some(filter) = &config.env_filter {
            builder.parse_filters(filter);
        }
        builder.write_style(config.write_style);
        builder.target(output.target());

        let timestamps = config.timestamps;
        builder.format(move |buf, record| {
            if timestamps {
                let now = buf.timestamp_seconds();
                write!(buf, "{now} ")?;
            }
            format_record(buf, record)
        });

        Self {
            inner: builder.build(),
            output,
            debug: config.debug,
            skip_frames: config.skip_frames,
        }
    }

    pub fn debug_enabled(&self) -> bool {
        self.debug
    }

    pub fn skip_frames(&self) -> usize {
        self.skip_frames
    }

    pub fn max_level(&self) -> log::LevelFilter {
        self.inner.filter()
    }

    /// Writes `<file>:<line> [<LEVEL>] <message>`.
    ///
    /// Debug lines are dropped unless the logger was built with `debug`.
    pub fn emit(&self, level: Level, file: &str, line: u32, args: fmt::Arguments<'_>) {
        self.emit_target(level, LEVELED_TARGET, file, line, args);
    }

    /// [`emit`](Logger::emit) with an explicit record target, which the
    /// `env_filter` directives match against.
    pub fn emit_target(
        &self,
        level: Level,
        target: &str,
        file: &str,
        line: u32,
        args: fmt::Arguments<'_>,
    ) {
        if level == Level::Debug && !self.debug {
            return;
        }

        self.log(
            &Record::builder()
                .level(level.into())
                .target(target)
                .file(Some(file))
                .line(Some(line))
                .args(args)
                .build(),
        );
    }

    /// Writes the message alone, without location or level.
    pub fn emit_custom(&self, args: fmt::Arguments<'_>) {
        self.log(
            &Record::builder()
                .level(log::Level::Error)
                .target(CUSTOM_TARGET)
                .args(args)
                .build(),
        );
    }

    #[track_caller]
    pub fn debug(&self, args: fmt::Arguments<'_>) {
        let at = Location::caller();
        self.emit(Level::Debug, at.file(), at.line(), args);
    }

    #[track_caller]
    pub fn info(&self, args: fmt::Arguments<'_>) {
        let at = Location::caller();
        self.emit(Level::Info, at.file(), at.line(), args);
    }

    #[track_caller]
    pub fn error(&self, args: fmt::Arguments<'_>) {
        let at = Location::caller();
        self.emit(Level::Error, at.file(), at.line(), args);
    }

    /// Logs `message: err`, then every captured frame of `err`, outermost
    /// first.
    ///
    /// Errors without a stack produce a single unprefixed
    /// `No stacked error: <err>` line instead.
    #[track_caller]
    pub fn error_with_stack(&self, message: &str, err: &(dyn Error + 'static)) {
        let at = Location::caller();
        report::report_with_stack(self, at.file(), at.line(), message, err);
    }
}

impl Log for Logger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        if metadata.level() >= log::Level::Debug && !self.debug {
            return false;
        }
        self.inner.enabled(metadata)
    }

    fn log(&self, record: &Record<'_>) {
        if self.enabled(record.metadata()) {
            self.inner.log(record);
        }
    }

    fn flush(&self) {
        self.inner.flush();
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("debug", &self.debug)
            .field("skip_frames", &self.skip_frames)
            .field("max_level", &self.max_level())
            .finish()
    }
}
