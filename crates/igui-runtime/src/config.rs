#![forbid(unsafe_code)]

//! Engine configuration.
//!
//! [`EngineConfig`] captures the host-grid convention every [`Gui`] is built
//! against. The defaults describe the common host: 9 cells per row, up to 6
//! rows, GUIs reopen when the user dismisses them.
//!
//! # Loading
//!
//! ```toml
//! # igui.toml
//! row_width = 9
//! max_rows = 3
//! reopen_on_close_default = false
//! ```
//!
//! ```rust,ignore
//! let config = EngineConfig::from_toml_file("igui.toml")?;
//! let config = EngineConfig::from_json_str(json)?;
//! ```
//!
//! Missing keys keep their defaults. Loaded configs are validated before
//! they are returned.
//!
//! [`Gui`]: crate::Gui

#[cfg(feature = "config")]
use std::path::Path;

#[cfg(feature = "config")]
use serde::{Deserialize, Serialize};

/// Largest surface the default host can display.
pub const MAX_SURFACE_CELLS: usize = 54;

/// Host-grid parameters shared by every GUI of one manager.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "config", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "config", serde(default))]
pub struct EngineConfig {
    /// Cells per surface row.
    pub row_width: u16,
    /// Upper bound on surface rows.
    pub max_rows: u16,
    /// Initial reopen-on-close flag of new GUIs.
    pub reopen_on_close_default: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            row_width: 9,
            max_rows: 6,
            reopen_on_close_default: true,
        }
    }
}

impl EngineConfig {
    /// Load from a TOML string.
    #[cfg(feature = "config")]
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        toml::from_str::<Self>(s)
            .map_err(ConfigError::Toml)?
            .validated()
    }

    /// Load from a TOML file on disk.
    #[cfg(feature = "config")]
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(ConfigError::Io)?;
        Self::from_toml_str(&content)
    }

    /// Load from a JSON string.
    #[cfg(feature = "config")]
    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        serde_json::from_str::<Self>(s)
            .map_err(ConfigError::Json)?
            .validated()
    }

    /// Check every parameter.
    ///
    /// Returns a list of problems; empty means the config is usable.
    #[must_use]
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();
        if self.row_width == 0 {
            errors.push("row_width must be > 0".to_string());
        }
        if self.max_rows == 0 {
            errors.push("max_rows must be >= 1".to_string());
        }
        let cells = self.row_width as usize * self.max_rows as usize;
        if cells > MAX_SURFACE_CELLS {
            errors.push(format!(
                "row_width * max_rows must be <= {MAX_SURFACE_CELLS}, got {cells}"
            ));
        }
        errors
    }

    /// `self` if valid, otherwise every problem found.
    pub fn validated(self) -> Result<Self, ConfigError> {
        let errors = self.validate();
        if errors.is_empty() {
            Ok(self)
        } else {
            Err(ConfigError::Validation(errors))
        }
    }
}

/// Errors raised while loading or checking an [`EngineConfig`].
#[derive(Debug)]
pub enum ConfigError {
    /// I/O error reading a file.
    Io(std::io::Error),
    /// TOML parse error.
    #[cfg(feature = "config")]
    Toml(toml::de::Error),
    /// JSON parse error.
    #[cfg(feature = "config")]
    Json(serde_json::Error),
    /// Validation errors.
    Validation(Vec<String>),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            #[cfg(feature = "config")]
            Self::Toml(e) => write!(f, "TOML parse error: {e}"),
            #[cfg(feature = "config")]
            Self::Json(e) => write!(f, "JSON parse error: {e}"),
            Self::Validation(errors) => {
                write!(f, "validation errors: {}", errors.join("; "))
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            #[cfg(feature = "config")]
            Self::Toml(e) => Some(e),
            #[cfg(feature = "config")]
            Self::Json(e) => Some(e),
            Self::Validation(_) => None,
        }
    }
}
