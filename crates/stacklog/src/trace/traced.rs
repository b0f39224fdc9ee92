use std::error::Error;
use std::fmt;

use super::{Frame, StackTrace};

type BoxError = Box<dyn Error + Send + Sync + 'static>;

/// An error carrying the stack of places it was created and propagated.
///
/// Wrapping a `TracedError` again does not nest: the new location is
/// appended to the existing trace, so one error always owns one trace.
///
/// ```
/// use stacklog::{ResultExt, TracedError};
///
/// fn open() -> Result<(), TracedError> {
///     Err(TracedError::msg("device busy"))
/// }
///
/// fn start() -> Result<(), TracedError> {
///     open().wrap_traced("starting capture")
/// }
///
/// let err = start().unwrap_err();
/// assert_eq!(err.to_string(), "starting capture: device busy");
/// assert_eq!(err.trace().len(), 2);
/// ```
pub struct TracedError {
    context: Option<String>,
    cause: BoxError,
    trace: StackTrace,
}

impl TracedError {
    /// Wraps `cause`, recording the caller as the innermost frame.
    ///
    /// If `cause` already is a `TracedError`, the caller is appended to its
    /// trace instead.
    #[track_caller]
    pub fn new<E>(cause: E) -> Self
    where
        E: Into<BoxError>,
    {
        Self::from_boxed(cause.into(), Frame::caller())
    }

    /// A new error from a plain message.
    #[track_caller]
    pub fn msg(message: impl Into<String>) -> Self {
        let message: String = message.into();
        Self::new(message)
    }

    /// Adds a context message and records the caller.
    #[track_caller]
    pub fn wrap(mut self, context: impl fmt::Display) -> Self {
        self.trace.push(Frame::caller());
        self.context = Some(match self.context.take() {
            Some(inner) => format!("{context}: {inner}"),
            None => context.to_string(),
        });
        self
    }

    fn from_boxed(cause: BoxError, frame: Frame) -> Self {
        match cause.downcast::<TracedError>() {
            Ok(traced) => {
                let mut traced = *traced;
                traced.trace.push(frame);
                traced
            }
            Err(cause) => Self {
                context: None,
                cause,
                trace: StackTrace::from(vec![frame]),
            },
        }
    }

    pub fn trace(&self) -> &StackTrace {
        &self.trace
    }

    #[cfg(test)]
    pub(crate) fn trace_mut(&mut self) -> &mut StackTrace {
        &mut self.trace
    }

    pub fn context(&self) -> Option<&str> {
        self.context.as_deref()
    }

    /// The wrapped error.
    pub fn cause(&self) -> &(dyn Error + Send + Sync + 'static) {
        self.cause.as_ref()
    }

    pub fn into_cause(self) -> BoxError {
        self.cause
    }
}

impl fmt::Display for TracedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.context {
            Some(context) => write!(f, "{}: {}", context, self.cause),
            None => write!(f, "{}", self.cause),
        }
    }
}

impl fmt::Debug for TracedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TracedError")
            .field("context", &self.context)
            .field("cause", &self.cause)
            .field("trace", &self.trace)
            .finish()
    }
}

impl Error for TracedError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(self.cause.as_ref())
    }
}

/// Extension trait recording the caller's location on the error path of
/// a `Result`.
///
/// Both methods are `#[track_caller]`: the recorded frame is the line that
/// calls `.traced()` / `.wrap_traced(..)`.
pub trait ResultExt<T> {
    /// Converts the error into a `TracedError`, or extends its trace.
    fn traced(self) -> Result<T, TracedError>;

    /// Like [`traced`](ResultExt::traced), adding a context message.
    fn wrap_traced<C>(self, context: C) -> Result<T, TracedError>
    where
        C: fmt::Display;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
    E: Error + Send + Sync + 'static,
{
    // `map_err` would record the closure body, not the caller.
    #[track_caller]
    fn traced(self) -> Result<T, TracedError> {
        match self {
            Ok(value) => Ok(value),
            Err(err) => Err(TracedError::from_boxed(Box::new(err), Frame::caller())),
        }
    }

    #[track_caller]
    fn wrap_traced<C>(self, context: C) -> Result<T, TracedError>
    where
        C: fmt::Display,
    {
        match self {
            Ok(value) => Ok(value),
            Err(err) => {
                let traced = match (Box::new(err) as BoxError).downcast::<TracedError>() {
                    Ok(traced) => *traced,
                    Err(cause) => TracedError {
                        context: None,
                        cause,
                        trace: StackTrace::new(),
                    },
                };
                Err(traced.wrap(context))
            }
        }
    }
}

/// Returns early with a `TracedError` built from a format string.
///
/// The error's origin frame is the line of the macro invocation.
#[macro_export]
macro_rules! bail_traced {
    ($($arg:tt)+) => {
        return ::core::result::Result::Err(
            $crate::TracedError::msg(::std::format!($($arg)+)).into(),
        )
    };
}
