//! Julian Date interchange.
//!
//! Calendar → JD follows Meeus, "Astronomical Algorithms" ch. 7, for the
//! Gregorian calendar. The absolute-day bridge is a fixed offset: absolute
//! day 1 (0001-01-01) begins at JD 1,721,425.5.

/// Day number of a civil day minus its absolute day.
///
/// A civil day's number is the integer part of the JD at its 0h.
pub const JD_ABSOLUTE_OFFSET: i64 = 1_721_424;

/// Julian Date for a Gregorian calendar date.
///
/// `day` may carry a fraction of a day (0.5 = noon).
pub fn calendar_to_jd(year: i32, month: u32, day: f64) -> f64 {
    let (y, m) = if month <= 2 {
        (f64::from(year) - 1.0, f64::from(month) + 12.0)
    } else {
        (f64::from(year), f64::from(month))
    };
    let a = (y / 100.0).floor();
    let b = 2.0 - a + (a / 4.0).floor();
    (365.25 * (y + 4716.0)).floor() + (30.6001 * (m + 1.0)).floor() + day + b - 1524.5
}

/// Day number of the civil day containing the instant `jd`.
///
/// Civil days begin at JD `n + 0.5`, so every instant of a day, morning or
/// afternoon, maps to the same `n`. A JD of `2460299.5` (midnight starting
/// 2023-12-21) yields `2460299`. This is the only float-to-integer step in
/// the date pipeline.
pub fn julian_day_number(jd: f64) -> i64 {
    (jd + 0.5).floor() as i64 - 1
}

/// Absolute day containing the instant `jd`.
pub fn jd_to_absolute(jd: f64) -> i64 {
    julian_day_number(jd) - JD_ABSOLUTE_OFFSET
}
