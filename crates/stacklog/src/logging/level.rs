use std::fmt;

/// Severity of a leveled log line.
///
/// `Debug` is emitted only when the logger was configured with `debug`
/// enabled. `Info` and `Error` are always emitted.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Level {
    Debug,
    Info,
    Error,
}

impl Level {
    /// Tag printed between the brackets of a leveled line.
    pub const fn as_str(self) -> &'static str {
        match self {
            Level::Debug => "DEBUG",
            Level::Info => "INFO",
            Level::Error => "ERROR",
        }
    }
}

impl From<Level> for log::Level {
    fn from(level: Level) -> Self {
        match level {
            Level::Debug => log::Level::Debug,
            Level::Info => log::Level::Info,
            Level::Error => log::Level::Error,
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
