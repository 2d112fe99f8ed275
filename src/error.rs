//! Error types for argument interpretation.

use thiserror::Error;

/// Errors raised before any calendar is rendered.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CalError {
    /// A 10-character argument that is not a `YYYY-MM-DD` date.
    #[error("Invalid date format: {0}. Please use YYYY-MM-DD or just YYYY.")]
    InvalidDate(String),
    /// A 4-character argument that is not a `YYYY` year.
    #[error("Invalid year format: {0}. Please use YYYY-MM-DD or just YYYY.")]
    InvalidYear(String),
    /// An argument of any other shape.
    #[error("Unsupported argument: {0}. Please use YYYY-MM-DD or just YYYY.")]
    UnsupportedArgument(String),
    /// Components that do not name a real Gregorian day.
    #[error("Invalid calendar date: {year:04}-{month:02}-{day:02}")]
    InvalidCalendarDate { year: i32, month: u32, day: u32 },
}
