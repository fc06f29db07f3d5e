//! Error types for grid construction, resizing and direction parsing
//!
//! Most grid queries fail soft (absence, empty iterators, no-ops). Only the
//! strict entry points that would otherwise reshape the grid with a bad
//! value surface a typed error.

use std::fmt;

/// Main error type for grid operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// A width or height was not a positive integer, or the shape is too large
    InvalidDimension {
        /// Name of the rejected parameter (`"width"`, `"height"` or `"shape"`)
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// A direction name did not match any of the nine known directions
    UnknownDirection {
        /// The name as provided by the caller
        name: String,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimension {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid dimension '{parameter}' = '{value}': {reason}")
            }
            Self::UnknownDirection { name } => {
                write!(f, "Unknown direction '{name}'")
            }
        }
    }
}

impl std::error::Error for GridError {}

/// Convenience type alias for grid results
pub type Result<T> = std::result::Result<T, GridError>;

/// Create an invalid dimension error
pub fn invalid_dimension(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> GridError {
    GridError::InvalidDimension {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create an unknown direction error
pub fn unknown_direction(name: &impl ToString) -> GridError {
    GridError::UnknownDirection {
        name: name.to_string(),
    }
}
