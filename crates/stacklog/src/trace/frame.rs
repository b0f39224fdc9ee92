use std::fmt;
use std::panic::Location;

use crate::logging::UNKNOWN_FILE;

/// One program location in a captured stack.
///
/// Frames are recorded with `#[track_caller]`, so a frame points at the
/// line that created or propagated an error rather than at any capture
/// machinery. A frame may also be unresolved, in which case it prints as
/// `unknown:0`.
#[derive(Copy, Clone, PartialEq, Eq)]
pub struct Frame {
    location: Option<&'static Location<'static>>,
}

impl Frame {
    /// The location of the caller of the enclosing `#[track_caller]` chain.
    #[track_caller]
    #[inline]
    pub fn caller() -> Self {
        Self { location: Some(Location::caller()) }
    }

    pub const fn from_location(location: &'static Location<'static>) -> Self {
        Self { location: Some(location) }
    }

    /// A frame whose location is not known.
    pub const fn unresolved() -> Self {
        Self { location: None }
    }

    /// File and line of this frame, if known.
    pub fn resolve(&self) -> Option<(&'static str, u32)> {
        self.location.map(|loc| (loc.file(), loc.line()))
    }

    /// File and line, with `("unknown", 0)` for unresolved frames.
    pub fn file_line(&self) -> (&'static str, u32) {
        self.resolve().unwrap_or((UNKNOWN_FILE, 0))
    }

    pub fn is_resolved(&self) -> bool {
        self.location.is_some()
    }
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (file, line) = self.file_line();
        write!(f, "{file}:{line}")
    }
}

impl fmt::Debug for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Frame({self})")
    }
}
