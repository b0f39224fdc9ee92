//! Traced errors.
//!
//! A [`TracedError`] records the line where it was created and every line
//! that propagated it with [`ResultExt::traced`]. The resulting
//! [`StackTrace`] is what the stack reporter prints.

mod capability;
mod frame;
mod stack;
mod traced;

pub use capability::{root_cause, HasStackTrace};
pub use frame::Frame;
pub use stack::StackTrace;
pub use traced::{ResultExt, TracedError};
