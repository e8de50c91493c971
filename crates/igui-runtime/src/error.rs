#![forbid(unsafe_code)]

//! Session errors.

use std::fmt;

use igui_core::GuiId;

/// A session operation was called in a state that does not allow it.
///
/// Unreachable actors are never an error; operations on them are no-ops.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionError {
    /// The GUI was never shown to anyone, so there is nothing to close.
    NoViewer(GuiId),
    /// No session holds the GUI.
    UnknownGui(GuiId),
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoViewer(id) => write!(f, "{id} has no attached viewer"),
            Self::UnknownGui(id) => write!(f, "{id} is not in any session"),
        }
    }
}

impl std::error::Error for SessionError {}
