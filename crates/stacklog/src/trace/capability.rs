use std::error::Error;

use super::{StackTrace, TracedError};

/// Errors that can expose a captured stack.
///
/// Implemented by [`TracedError`] itself and by the type-erased error
/// forms (`dyn Error`, `anyhow::Error`), which search their chain for one.
pub trait HasStackTrace {
    fn stack_trace(&self) -> Option<&StackTrace>;
}

impl HasStackTrace for TracedError {
    fn stack_trace(&self) -> Option<&StackTrace> {
        Some(self.trace())
    }
}

impl HasStackTrace for dyn Error + 'static {
    fn stack_trace(&self) -> Option<&StackTrace> {
        root_cause(self)
            .downcast_ref::<TracedError>()
            .map(TracedError::trace)
    }
}

impl HasStackTrace for dyn Error + Send + Sync + 'static {
    fn stack_trace(&self) -> Option<&StackTrace> {
        let err: &(dyn Error + 'static) = self;
        err.stack_trace()
    }
}

impl HasStackTrace for anyhow::Error {
    fn stack_trace(&self) -> Option<&StackTrace> {
        let err: &(dyn Error + 'static) = &**self;
        err.stack_trace()
    }
}

/// Follows `source()` links from `err` and returns the first error that
/// carries a stack, or the last error of the chain.
pub fn root_cause<'a>(err: &'a (dyn Error + 'static)) -> &'a (dyn Error + 'static) {
    let mut current = err;
    loop {
        if current.is::<TracedError>() {
            return current;
        }
        match current.source() {
            Some(next) => current = next,
            None => return current,
        }
    }
}
