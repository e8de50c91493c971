#![forbid(unsafe_code)]

//! Unified error type.

use std::fmt;

use igui_core::ConstructionError;
use igui_runtime::{ConfigError, SessionError};

/// Any error an igui API can return.
#[derive(Debug)]
pub enum Error {
    /// A constructor rejected its arguments.
    Construction(ConstructionError),
    /// A session operation was called in the wrong state.
    Session(SessionError),
    /// Configuration could not be loaded or is invalid.
    Config(ConfigError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Construction(err) => write!(f, "construction error: {err}"),
            Self::Session(err) => write!(f, "session error: {err}"),
            Self::Config(err) => write!(f, "config error: {err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Construction(err) => Some(err),
            Self::Session(err) => Some(err),
            Self::Config(err) => Some(err),
        }
    }
}

impl From<ConstructionError> for Error {
    fn from(err: ConstructionError) -> Self {
        Self::Construction(err)
    }
}

impl From<SessionError> for Error {
    fn from(err: SessionError) -> Self {
        Self::Session(err)
    }
}

impl From<ConfigError> for Error {
    fn from(err: ConfigError) -> Self {
        Self::Config(err)
    }
}

/// Standard result type for igui APIs.
pub type Result<T> = std::result::Result<T, Error>;
