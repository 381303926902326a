//! Error types for Hebrew date construction.

use std::error::Error;
use std::fmt::{Display, Formatter};

use luach_time::TimeError;

use crate::month::HebrewMonth;

/// Errors raised at the Hebrew-date boundary.
///
/// The arithmetic itself is total; only caller-supplied values are rejected.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum CalendarError {
    /// Error from civil-date handling.
    Time(TimeError),
    /// Hebrew year below 1.
    InvalidYear(i64),
    /// Day outside 1..=30.
    InvalidDay {
        year: i64,
        month: HebrewMonth,
        day: u32,
    },
    /// Adar II requested in a common year.
    MonthNotInYear { month: HebrewMonth, year: i64 },
    /// Month number outside 1..=13.
    MonthOutOfRange(u32),
    /// Month name not recognised.
    UnknownMonth(String),
}

impl Display for CalendarError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Time(e) => write!(f, "time error: {e}"),
            Self::InvalidYear(y) => write!(f, "invalid Hebrew year: {y} (must be >= 1)"),
            Self::InvalidDay { year, month, day } => {
                write!(f, "invalid day: {day} for {month} {year} (must be 1..=30)")
            }
            Self::MonthNotInYear { month, year } => {
                write!(f, "{month} does not occur in {year}, which is not a leap year")
            }
            Self::MonthOutOfRange(n) => write!(f, "month number out of range: {n} (must be 1..=13)"),
            Self::UnknownMonth(name) => write!(f, "unknown Hebrew month: '{name}'"),
        }
    }
}

impl Error for CalendarError {}

impl From<TimeError> for CalendarError {
    fn from(e: TimeError) -> Self {
        Self::Time(e)
    }
}
