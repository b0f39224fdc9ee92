use std::fmt;
use std::io;
use std::path::PathBuf;

/// Failure while setting up a logger.
///
/// Emitting lines never fails; only opening the sink can.
#[derive(Debug)]
pub enum SetupError {
    /// The log file could not be created.
    CreateSink { path: PathBuf, source: io::Error },
}

impl SetupError {
    /// The underlying I/O error.
    pub fn io_error(&self) -> &io::Error {
        match self {
            SetupError::CreateSink { source, .. } => source,
        }
    }
}

impl fmt::Display for SetupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SetupError::CreateSink { path, source } => {
                write!(f, "cannot create log file {}: {}", path.display(), source)
            }
        }
    }
}

impl std::error::Error for SetupError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SetupError::CreateSink { source, .. } => Some(source),
        }
    }
}
