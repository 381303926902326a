//! Conversion between Hebrew dates and the absolute day count.
//!
//! The absolute count is shared with `luach_time`, so a Hebrew date reaches
//! the Gregorian calendar through `hebrew_to_absolute` followed by
//! `absolute_to_gregorian`, and back the same way.

use tracing::trace;

use crate::constants::JEWISH_EPOCH;
use crate::dechiyos::elapsed_days;
use crate::month::{HebrewMonth, last_month_of_year};
use crate::year::{YearLength, is_leap_year, month_length};

/// Day of the Hebrew year on which (`month`, `day`) falls; 1 Tishrei = 1.
///
/// Nissan through Elul are numbered before Tishrei but fall after Adar, so
/// for those months the whole Tishrei..Adar span is counted first. `day` is
/// not checked against the month length.
pub fn days_since_start_of_year(year: i64, month: HebrewMonth, day: u32) -> i64 {
    let leap = is_leap_year(year);
    let length = YearLength::of(year);
    let len = |m: HebrewMonth| i64::from(month_length(m, leap, length));

    let tishrei = HebrewMonth::Tishrei.number();
    let mut days = i64::from(day);
    if month.number() < tishrei {
        let last = last_month_of_year(year).number();
        days += (tishrei..=last).filter_map(HebrewMonth::from_number).map(len).sum::<i64>();
        days += (1..month.number()).filter_map(HebrewMonth::from_number).map(len).sum::<i64>();
    } else {
        days += (tishrei..month.number()).filter_map(HebrewMonth::from_number).map(len).sum::<i64>();
    }
    days
}

/// Absolute day of 1 Tishrei of `year`.
pub fn rosh_hashana_absolute(year: i64) -> i64 {
    elapsed_days(year) + JEWISH_EPOCH + 1
}

/// Absolute day of a Hebrew date.
///
/// A `day` past the end of its month counts on into the next month.
pub fn hebrew_to_absolute(year: i64, month: HebrewMonth, day: u32) -> i64 {
    days_since_start_of_year(year, month, day) + elapsed_days(year) + JEWISH_EPOCH
}

/// Hebrew `(year, month, day)` of an absolute day.
///
/// The year is found by stepping from an estimate in whichever direction
/// the Rosh Hashana bounds require; the month by walking forward from
/// Tishrei, or from Nissan once the date is past the end of Adar.
pub fn absolute_to_hebrew(abs: i64) -> (i64, HebrewMonth, u32) {
    let estimate = (abs - JEWISH_EPOCH).div_euclid(366);
    let mut year = estimate;
    while abs >= rosh_hashana_absolute(year + 1) {
        year += 1;
    }
    while abs < rosh_hashana_absolute(year) {
        year -= 1;
    }
    trace!(abs, estimate, year, "hebrew year located");

    let mut month = if abs < hebrew_to_absolute(year, HebrewMonth::Nissan, 1) {
        HebrewMonth::Tishrei
    } else {
        HebrewMonth::Nissan
    };
    let leap = is_leap_year(year);
    let length = YearLength::of(year);
    while abs > hebrew_to_absolute(year, month, month_length(month, leap, length)) {
        month = month.next_in_year(year);
    }

    let day = abs - hebrew_to_absolute(year, month, 1) + 1;
    (year, month, day as u32)
}
