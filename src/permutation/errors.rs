//! Input validation errors

use std::fmt;

/// Reasons an input sequence is rejected before solving
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    /// No values were supplied
    Empty,

    /// The same value appears more than once
    Duplicate { value: i64 },

    /// More values than the solver accepts
    TooLarge { len: usize, limit: usize },
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputError::Empty => write!(f, "No values to sort"),
            InputError::Duplicate { value } => write!(f, "Duplicate value: {}", value),
            InputError::TooLarge { len, limit } => {
                write!(f, "Too many values: {} (limit is {})", len, limit)
            }
        }
    }
}

impl std::error::Error for InputError {}
