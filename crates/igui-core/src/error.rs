#![forbid(unsafe_code)]

//! Construction errors.
//!
//! Every constructor in the workspace fails fast with a
//! [`ConstructionError`]; nothing is partially built. Placement conflicts
//! are deliberately not errors and never appear here.

use std::fmt;

use crate::geometry::Dimension;

/// A value could not be constructed from the given arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstructionError {
    /// Width or height was zero.
    InvalidDimension { width: u16, height: u16 },
    /// Two parts that must agree on size do not.
    SizeMismatch {
        expected: Dimension,
        actual: Dimension,
    },
    /// A grid layout cannot divide the area into the requested cells.
    InvalidGrid { columns: u16, rows: u16 },
    /// A surface row count is outside the host's supported range.
    InvalidRows { rows: u16, max: u16 },
    /// A required argument was empty or absent.
    MissingArgument(&'static str),
}

impl fmt::Display for ConstructionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimension { width, height } => {
                write!(f, "invalid dimension {width}x{height}: both sides must be > 0")
            }
            Self::SizeMismatch { expected, actual } => write!(
                f,
                "size mismatch: expected {}x{}, got {}x{}",
                expected.width(),
                expected.height(),
                actual.width(),
                actual.height()
            ),
            Self::InvalidGrid { columns, rows } => {
                write!(f, "cannot divide area into {columns} columns x {rows} rows")
            }
            Self::InvalidRows { rows, max } => {
                write!(f, "row count {rows} outside supported range 1..={max}")
            }
            Self::MissingArgument(name) => write!(f, "missing required argument: {name}"),
        }
    }
}

impl std::error::Error for ConstructionError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_problem() {
        let err = ConstructionError::InvalidRows { rows: 7, max: 6 };
        assert_eq!(err.to_string(), "row count 7 outside supported range 1..=6");

        let err = ConstructionError::MissingArgument("title");
        assert!(err.to_string().contains("title"));
    }

    #[test]
    fn size_mismatch_reports_both_sides() {
        let err = ConstructionError::SizeMismatch {
            expected: Dimension::new(9, 6).unwrap(),
            actual: Dimension::new(9, 3).unwrap(),
        };
        assert_eq!(err.to_string(), "size mismatch: expected 9x6, got 9x3");
    }
}
