use std::path::{Path, PathBuf};

/// Frames a stack report skips by default.
///
/// Traces are recorded at the creation and propagation sites themselves,
/// so there are no capture or reporting frames to hide.
pub const DEFAULT_SKIP_FRAMES: usize = 0;

/// Logger configuration.
///
/// `file` selects the output sink: `None` (or an empty path) keeps the
/// console, anything else is created/truncated and receives every line.
///
/// `env_filter` follows the `env_logger` filter syntax (e.g.
/// "info,my_crate::db=off") and can narrow output per target. DEBUG records
/// still require `debug`.
///
/// `write_style` is passed through to `env_logger`. The line formats carry
/// no styling, so it only matters for records that request it.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub debug: bool,
    pub file: Option<PathBuf>,
    pub skip_frames: usize,
    pub timestamps: bool,
    pub env_filter: Option<String>,
    pub write_style: env_logger::WriteStyle,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            debug: false,
            file: None,
            skip_frames: DEFAULT_SKIP_FRAMES,
            timestamps: false,
            env_filter: None,
            write_style: env_logger::WriteStyle::Auto,
        }
    }
}

impl LoggingConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn debug(mut self, enabled: bool) -> Self {
        self.debug = enabled;
        self
    }

    pub fn file(mut self, path: impl Into<PathBuf>) -> Self {
        self.file = Some(path.into());
        self
    }

    /// Number of outermost frames a stack report leaves out.
    pub fn skip_frames(mut self, count: usize) -> Self {
        self.skip_frames = count;
        self
    }

    pub fn timestamps(mut self, enabled: bool) -> Self {
        self.timestamps = enabled;
        self
    }

    pub fn env_filter(mut self, filter: impl Into<String>) -> Self {
        self.env_filter = Some(filter.into());
        self
    }

    pub fn write_style(mut self, style: env_logger::WriteStyle) -> Self {
        self.write_style = style;
        self
    }

    /// The file to log into, if any. Empty paths mean "console".
    pub fn file_path(&self) -> Option<&Path> {
        self.file
            .as_deref()
            .filter(|path| !path.as_os_str().is_empty())
    }

    pub(crate) fn level_filter(&self) -> log::LevelFilter {
        if self.debug {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        }
    }
}
