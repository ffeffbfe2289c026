//! Error types for amount conversion.

use thiserror::Error;

/// Result type alias for conversion operations
pub type Result<T> = std::result::Result<T, WordsError>;

/// Errors that can occur while converting amounts to words.
#[derive(Error, Debug)]
pub enum WordsError {
    /// Amount outside the convertible domain (negative, non-finite, too large)
    #[error("Invalid amount {value}: {reason}")]
    InvalidAmount { value: String, reason: &'static str },

    /// Failed to open or read the input file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV parsing or writing error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Invalid input row
    #[error("Invalid record at row {row}: {message}")]
    InvalidRecord { row: usize, message: String },

    /// Missing input file argument
    #[error("Missing input file argument. Usage: tamil-amount-words <input.csv>")]
    MissingArgument,
}

impl WordsError {
    pub(crate) fn invalid_amount(value: impl ToString, reason: &'static str) -> Self {
        WordsError::InvalidAmount {
            value: value.to_string(),
            reason,
        }
    }
}
