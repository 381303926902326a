//! Error types for civil-date handling.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from Gregorian date construction or parsing.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum TimeError {
    /// Month outside 1..=12.
    InvalidMonth(u32),
    /// Day outside 1..=days-in-month for the given year and month.
    InvalidDay { year: i32, month: u32, day: u32 },
    /// Date string could not be parsed.
    Parse(String),
}

impl Display for TimeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidMonth(m) => write!(f, "invalid month: {m} (must be 1..=12)"),
            Self::InvalidDay { year, month, day } => {
                write!(f, "invalid day: {day} for {year:04}-{month:02}")
            }
            Self::Parse(msg) => write!(f, "date parse error: {msg}"),
        }
    }
}

impl Error for TimeError {}
