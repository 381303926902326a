//! Civil-date primitives for the luach workspace.
//!
//! This crate provides:
//! - Proleptic Gregorian ↔ absolute day-count conversion
//! - Day-of-week on the absolute count
//! - Calendar → Julian Date conversion and the JD → absolute-day bridge
//!
//! Every other calendar in the workspace meets the Gregorian calendar on
//! the absolute day count defined here (day 1 = 0001-01-01).

pub mod error;
pub mod gregorian;
pub mod julian;
pub mod weekday;

pub use error::TimeError;
pub use gregorian::{
    GregorianDate, absolute_to_gregorian, days_in_gregorian_month, gregorian_to_absolute,
    is_gregorian_leap_year,
};
pub use julian::{JD_ABSOLUTE_OFFSET, calendar_to_jd, jd_to_absolute, julian_day_number};
pub use weekday::{ALL_DAYS, DayOfWeek};
