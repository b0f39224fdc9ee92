use std::fs::File;
use std::io::{self, Write};
use std::path::Path;
use std::sync::{Arc, Mutex, PoisonError};

use crate::error::SetupError;

/// Destination of formatted lines.
///
/// Once handed to a logger, a sink is shared by every logger rebuilt on top
/// of it and closes when the last of them is dropped.
#[derive(Default)]
pub enum Sink {
    /// Standard output, the default console sink.
    #[default]
    Stdout,
    /// A file created (or truncated) at configuration time.
    File(File),
    /// Any writer, e.g. an in-memory buffer.
    Writer(Box<dyn Write + Send>),
}

impl Sink {
    /// Creates or truncates `path` and returns it as a sink.
    pub fn create(path: &Path) -> Result<Self, SetupError> {
        File::create(path)
            .map(Sink::File)
            .map_err(|source| SetupError::CreateSink {
                path: path.to_path_buf(),
                source,
            })
    }

    pub fn writer(writer: impl Write + Send + 'static) -> Self {
        Sink::Writer(Box::new(writer))
    }

    pub(crate) fn into_output(self) -> Output {
        match self {
            Sink::Stdout => Output::Stdout,
            Sink::File(file) => Output::Shared(SharedWriter::new(Box::new(file))),
            Sink::Writer(writer) => Output::Shared(SharedWriter::new(writer)),
        }
    }
}

/// An opened sink as held by a logger. Clones write to the same place.
#[derive(Clone)]
pub(crate) enum Output {
    Stdout,
    Shared(SharedWriter),
}

impl Output {
    pub(crate) fn target(&self) -> env_logger::Target {
        match self {
            Output::Stdout => env_logger::Target::Stdout,
            Output::Shared(writer) => env_logger::Target::Pipe(Box::new(writer.clone())),
        }
    }
}

/// Writer shared between loggers; each `write_all` holds the lock for the
/// whole line.
#[derive(Clone)]
pub(crate) struct SharedWriter {
    inner: Arc<Mutex<Box<dyn Write + Send>>>,
}

impl SharedWriter {
    fn new(writer: Box<dyn Write + Send>) -> Self {
        Self { inner: Arc::new(Mutex::new(writer)) }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Box<dyn Write + Send>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Write for SharedWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.lock().write(buf)
    }

    fn write_all(&mut self, buf: &[u8]) -> io::Result<()> {
        self.lock().write_all(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.lock().flush()
    }
}

impl std::fmt::Debug for Sink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Sink::Stdout => f.write_str("Sink::Stdout"),
            Sink::File(file) => f.debug_tuple("Sink::File").field(file).finish(),
            Sink::Writer(_) => f.write_str("Sink::Writer(..)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_truncates_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("app.log");
        std::fs::write(&path, "stale contents\n").unwrap();

        let sink = Sink::create(&path).unwrap();
        assert!(matches!(sink, Sink::File(_)));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "");
    }

    #[test]
    fn output_clones_share_one_writer() {
        let buffer = crate::testing::SharedBuffer::new();
        let output = Sink::writer(buffer.clone()).into_output();
        let Output::Shared(mut first) = output.clone() else {
            panic!("writer sink should be shared");
        };
        let Output::Shared(mut second) = output else {
            panic!("writer sink should be shared");
        };

        first.write_all(b"one\n").unwrap();
        second.write_all(b"two\n").unwrap();
        assert_eq!(buffer.contents(), "one\ntwo\n");
    }

    #[test]
    fn create_in_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("app.log");

        let err = Sink::create(&path).unwrap_err();
        let SetupError::CreateSink { path: reported, .. } = &err;
        assert_eq!(reported, &path);
        assert_eq!(err.io_error().kind(), std::io::ErrorKind::NotFound);
        assert!(err.to_string().contains("app.log"));
    }
}
