//! Validation error types

use std::fmt;

/// Validation error for post fields
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Field is empty or whitespace only
    Empty { field: &'static str },

    /// Field exceeds maximum length (in characters)
    TooLong {
        field: &'static str,
        max: usize,
        actual: usize,
    },
}

impl ValidationError {
    /// Name of the offending field.
    pub fn field(&self) -> &'static str {
        match self {
            Self::Empty { field } | Self::TooLong { field, .. } => field,
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { field } => write!(f, "{} is required", field),
            Self::TooLong { field, max, actual } => write!(
                f,
                "{} exceeds maximum length of {} characters (got {})",
                field, max, actual
            ),
        }
    }
}

impl std::error::Error for ValidationError {}
