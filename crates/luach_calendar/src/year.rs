//! Leap years, year lengths and month lengths.
//!
//! Seven of every nineteen years are leap years (the Metonic cycle). A
//! year's length is fixed by the gap between consecutive Rosh Hashanas,
//! and that length in turn fixes Cheshvan and Kislev.

use luach_time::DayOfWeek;

use crate::constants::JEWISH_EPOCH;
use crate::dechiyos::{Dechiya, elapsed_days, resolve_rosh_hashana};
use crate::month::HebrewMonth;

/// Leap year: `(7y + 1) mod 19 < 7`, with a floor modulus.
pub fn is_leap_year(year: i64) -> bool {
    (7 * year + 1).rem_euclid(19) < 7
}

/// Days in `year`: 353–355 or 383–385.
pub fn days_in_year(year: i64) -> i64 {
    elapsed_days(year + 1) - elapsed_days(year)
}

/// Length category of a year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum YearLength {
    /// Chaserim: Cheshvan and Kislev both 29 days (353 / 383).
    Deficient,
    /// Kesidran: Cheshvan 29, Kislev 30 (354 / 384).
    Regular,
    /// Shelaimim: Cheshvan and Kislev both 30 days (355 / 385).
    Complete,
}

impl YearLength {
    /// Category from a day count, by its last digit.
    pub fn from_days(days: i64) -> Self {
        match days.rem_euclid(10) {
            3 => Self::Deficient,
            5 => Self::Complete,
            _ => Self::Regular,
        }
    }

    /// Category of `year`.
    pub fn of(year: i64) -> Self {
        Self::from_days(days_in_year(year))
    }

    /// Hebrew name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Deficient => "Chaserim",
            Self::Regular => "Kesidran",
            Self::Complete => "Shelaimim",
        }
    }
}

impl std::fmt::Display for YearLength {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Cheshvan has 30 days only in a complete year.
pub fn is_cheshvan_long(year: i64) -> bool {
    YearLength::of(year) == YearLength::Complete
}

/// Kislev has 29 days only in a deficient year.
pub fn is_kislev_short(year: i64) -> bool {
    YearLength::of(year) == YearLength::Deficient
}

/// Month length given a year's leap flag and length category.
pub(crate) fn month_length(month: HebrewMonth, leap: bool, length: YearLength) -> u32 {
    use HebrewMonth::*;
    let short = match month {
        Iyar | Tammuz | Elul | Teves | AdarII => true,
        Cheshvan => length != YearLength::Complete,
        Kislev => length == YearLength::Deficient,
        Adar => !leap,
        Nissan | Sivan | Av | Tishrei | Shevat => false,
    };
    if short { 29 } else { 30 }
}

/// Days in `month` of `year` (29 or 30).
pub fn days_in_month(month: HebrewMonth, year: i64) -> u32 {
    month_length(month, is_leap_year(year), YearLength::of(year))
}

// ---------------------------------------------------------------------------
// Year summary
// ---------------------------------------------------------------------------

/// Queryable facts about one Hebrew year.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YearInfo {
    pub year: i64,
    pub is_leap: bool,
    pub days: i64,
    pub length: YearLength,
    /// Elapsed days to the eve of Rosh Hashana.
    pub elapsed_days: i64,
    /// Absolute day of 1 Tishrei.
    pub rosh_hashana: i64,
    pub rosh_hashana_weekday: DayOfWeek,
    /// Postponements that moved Rosh Hashana off the molad day.
    pub dechiyos: Vec<Dechiya>,
}

/// Summary of `year`.
pub fn year_info(year: i64) -> YearInfo {
    let resolution = resolve_rosh_hashana(year);
    let days = elapsed_days(year + 1) - resolution.elapsed_days;
    let rosh_hashana = resolution.elapsed_days + JEWISH_EPOCH + 1;
    YearInfo {
        year,
        is_leap: is_leap_year(year),
        days,
        length: YearLength::from_days(days),
        elapsed_days: resolution.elapsed_days,
        rosh_hashana,
        rosh_hashana_weekday: DayOfWeek::from_absolute(rosh_hashana),
        dechiyos: resolution.applied(),
    }
}
