//! The `HebrewDate` value type.

use std::cmp::Ordering;

use luach_time::{DayOfWeek, GregorianDate};

use crate::bridge::{absolute_to_hebrew, days_since_start_of_year, hebrew_to_absolute};
use crate::dechiyos::elapsed_days;
use crate::error::CalendarError;
use crate::molad::MoladDate;
use crate::month::HebrewMonth;
use crate::year::{
    YearLength, days_in_month, days_in_year, is_cheshvan_long, is_kislev_short, is_leap_year,
};

/// An immutable Hebrew calendar date.
///
/// The fields are always consistent: `day` is within the month's length and
/// Adar II appears only in leap years. Dates compare by absolute day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HebrewDate {
    year: i64,
    month: HebrewMonth,
    day: u32,
    absolute: i64,
}

impl HebrewDate {
    /// Build a date from its parts.
    ///
    /// Day 30 of a 29-day month rolls forward to the 1st of the following
    /// month rather than failing. Years below 1, days outside 1..=30, and
    /// Adar II in a common year are rejected.
    pub fn new(year: i64, month: HebrewMonth, day: u32) -> Result<Self, CalendarError> {
        if year < 1 {
            return Err(CalendarError::InvalidYear(year));
        }
        if !(1..=30).contains(&day) {
            return Err(CalendarError::InvalidDay { year, month, day });
        }
        if !month.occurs_in(year) {
            return Err(CalendarError::MonthNotInYear { month, year });
        }
        Ok(Self::from_absolute(hebrew_to_absolute(year, month, day)))
    }

    /// Build a date from a 1-based month number (Nissan = 1).
    pub fn from_numbers(year: i64, month: u32, day: u32) -> Result<Self, CalendarError> {
        Self::new(year, HebrewMonth::try_from(month)?, day)
    }

    /// Date of an absolute day number.
    ///
    /// Total over all days; days before 1 Tishrei of year 1 yield
    /// proleptic years of 0 or less.
    pub fn from_absolute(absolute: i64) -> Self {
        let (year, month, day) = absolute_to_hebrew(absolute);
        Self {
            year,
            month,
            day,
            absolute,
        }
    }

    /// Hebrew date of a Gregorian date.
    pub fn from_gregorian(date: &GregorianDate) -> Self {
        Self::from_absolute(date.to_absolute())
    }

    pub fn year(&self) -> i64 {
        self.year
    }

    pub fn month(&self) -> HebrewMonth {
        self.month
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    /// Absolute day number (day 1 = 0001-01-01 Gregorian).
    pub fn to_absolute(&self) -> i64 {
        self.absolute
    }

    pub fn to_gregorian(&self) -> GregorianDate {
        GregorianDate::from_absolute(self.absolute)
    }

    pub fn weekday(&self) -> DayOfWeek {
        DayOfWeek::from_absolute(self.absolute)
    }

    pub fn is_leap_year(&self) -> bool {
        is_leap_year(self.year)
    }

    /// Day of the year, 1 Tishrei = 1.
    pub fn days_since_start_of_year(&self) -> i64 {
        days_since_start_of_year(self.year, self.month, self.day)
    }

    /// Length of this date's month.
    pub fn days_in_month(&self) -> u32 {
        days_in_month(self.month, self.year)
    }

    pub fn days_in_year(&self) -> i64 {
        days_in_year(self.year)
    }

    pub fn year_length(&self) -> YearLength {
        YearLength::of(self.year)
    }

    /// Elapsed days to the eve of this year's Rosh Hashana.
    pub fn elapsed_days(&self) -> i64 {
        elapsed_days(self.year)
    }

    pub fn is_cheshvan_long(&self) -> bool {
        is_cheshvan_long(self.year)
    }

    pub fn is_kislev_short(&self) -> bool {
        is_kislev_short(self.year)
    }

    /// Date `days` later (negative moves backwards).
    pub fn add_days(&self, days: i64) -> Self {
        Self::from_absolute(self.absolute + days)
    }

    pub fn next_day(&self) -> Self {
        self.add_days(1)
    }

    pub fn previous_day(&self) -> Self {
        self.add_days(-1)
    }

    /// Molad of this date's month on the civil clock.
    pub fn molad(&self) -> MoladDate {
        MoladDate::for_month(self.year, self.month)
    }
}

impl PartialOrd for HebrewDate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HebrewDate {
    fn cmp(&self, other: &Self) -> Ordering {
        self.absolute.cmp(&other.absolute)
    }
}

impl std::fmt::Display for HebrewDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {}, {}",
            self.day,
            self.month.name_in_year(self.year),
            self.year
        )
    }
}

impl From<GregorianDate> for HebrewDate {
    fn from(date: GregorianDate) -> Self {
        Self::from_gregorian(&date)
    }
}
