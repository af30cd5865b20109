//! Error types for overlap-engine operations.

use chrono::NaiveDate;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OverlapError {
    /// An overlap needs at least two people; a lone instructor is never
    /// reported as "overlapping" with themselves.
    #[error("at least 2 instructors must be selected (got {selected})")]
    InsufficientInstructors { selected: usize },

    #[error("invalid date range: start date {start} is after end date {end}")]
    InvalidRange { start: NaiveDate, end: NaiveDate },

    #[error("saved view name must not be blank")]
    InvalidViewName,
}

pub type Result<T> = std::result::Result<T, OverlapError>;
