//! Proleptic Gregorian calendar on an absolute day count.
//!
//! Absolute day 1 is 0001-01-01 (proleptic Gregorian). Years are
//! astronomical: 1 BCE is year 0, 2 BCE is year -1. All divisions are
//! floor divisions so the formulas hold for years <= 0.

use std::str::FromStr;

use crate::error::TimeError;
use crate::julian::calendar_to_jd;
use crate::weekday::DayOfWeek;

/// Cumulative days before each month in a common year (index 0 = January).
const DAYS_BEFORE_MONTH: [i64; 12] = [0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];

/// Gregorian leap-year rule: divisible by 4 but not 100, or by 400.
pub fn is_gregorian_leap_year(year: i32) -> bool {
    let y = i64::from(year);
    (y.rem_euclid(4) == 0 && y.rem_euclid(100) != 0) || y.rem_euclid(400) == 0
}

/// Number of days in a Gregorian month (1..=12). Returns 0 for an invalid month.
pub fn days_in_gregorian_month(month: u32, year: i32) -> u32 {
    match month {
        2 => {
            if is_gregorian_leap_year(year) {
                29
            } else {
                28
            }
        }
        4 | 6 | 9 | 11 => 30,
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        _ => 0,
    }
}

/// Absolute day number of a Gregorian date.
///
/// The day and month are not validated; an out-of-range day simply counts
/// past the end of the month, which the inverse search relies on.
pub fn gregorian_to_absolute(year: i32, month: u32, day: u32) -> i64 {
    let month_idx = month.clamp(1, 12) as usize - 1;
    let mut days = i64::from(day) + DAYS_BEFORE_MONTH[month_idx];
    if month_idx >= 2 && is_gregorian_leap_year(year) {
        days += 1;
    }
    let prior = i64::from(year) - 1;
    days + 365 * prior + prior.div_euclid(4) - prior.div_euclid(100) + prior.div_euclid(400)
}

/// Gregorian `(year, month, day)` of an absolute day number.
///
/// Starts from `abs / 366` and corrects the year in both directions (the
/// estimate undershoots for positive days and overshoots for negative
/// ones), then walks forward month by month.
pub fn absolute_to_gregorian(abs: i64) -> (i32, u32, u32) {
    let mut year = abs.div_euclid(366) as i32;
    while abs >= gregorian_to_absolute(year + 1, 1, 1) {
        year += 1;
    }
    while abs < gregorian_to_absolute(year, 1, 1) {
        year -= 1;
    }

    let mut month = 1;
    while month < 12
        && abs > gregorian_to_absolute(year, month, days_in_gregorian_month(month, year))
    {
        month += 1;
    }

    let day = abs - gregorian_to_absolute(year, month, 1) + 1;
    (year, month, day as u32)
}

/// A validated proleptic Gregorian calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GregorianDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl GregorianDate {
    /// Create a date, rejecting months outside 1..=12 and days past the month end.
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self, TimeError> {
        if !(1..=12).contains(&month) {
            return Err(TimeError::InvalidMonth(month));
        }
        if day == 0 || day > days_in_gregorian_month(month, year) {
            return Err(TimeError::InvalidDay { year, month, day });
        }
        Ok(Self { year, month, day })
    }

    /// Date for an absolute day number.
    pub fn from_absolute(abs: i64) -> Self {
        let (year, month, day) = absolute_to_gregorian(abs);
        Self { year, month, day }
    }

    /// Absolute day number of this date.
    pub fn to_absolute(&self) -> i64 {
        gregorian_to_absolute(self.year, self.month, self.day)
    }

    /// Day of the week.
    pub fn weekday(&self) -> DayOfWeek {
        DayOfWeek::from_absolute(self.to_absolute())
    }

    /// Date `days` days later (negative moves backwards).
    pub fn add_days(&self, days: i64) -> Self {
        Self::from_absolute(self.to_absolute() + days)
    }

    /// Julian Date at 0h of this date.
    pub fn to_jd(&self) -> f64 {
        calendar_to_jd(self.year, self.month, f64::from(self.day))
    }
}

impl std::fmt::Display for GregorianDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.year < 0 {
            write!(f, "-{:04}-{:02}-{:02}", -self.year, self.month, self.day)
        } else {
            write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
        }
    }
}

impl FromStr for GregorianDate {
    type Err = TimeError;

    /// Parse `YYYY-MM-DD`, with an optional leading `-` for years before 1 BCE.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (negative, body) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s),
        };
        let mut parts = body.splitn(3, '-');
        let (Some(y), Some(m), Some(d)) = (parts.next(), parts.next(), parts.next()) else {
            return Err(TimeError::Parse(format!("expected YYYY-MM-DD, got '{s}'")));
        };
        let year: i32 = y
            .parse()
            .map_err(|_| TimeError::Parse(format!("invalid year '{y}'")))?;
        let month: u32 = m
            .parse()
            .map_err(|_| TimeError::Parse(format!("invalid month '{m}'")))?;
        let day: u32 = d
            .parse()
            .map_err(|_| TimeError::Parse(format!("invalid day '{d}'")))?;
        Self::new(if negative { -year } else { year }, month, day)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leap_years() {
        assert!(is_gregorian_leap_year(2000));
        assert!(is_gregorian_leap_year(2024));
        assert!(!is_gregorian_leap_year(1900));
        assert!(!is_gregorian_leap_year(2023));
        assert!(is_gregorian_leap_year(0));
        assert!(is_gregorian_leap_year(-4));
    }

    #[test]
    fn month_lengths() {
        assert_eq!(days_in_gregorian_month(2, 2024), 29);
        assert_eq!(days_in_gregorian_month(2, 2023), 28);
        assert_eq!(days_in_gregorian_month(9, 2023), 30);
        assert_eq!(days_in_gregorian_month(12, 2023), 31);
        assert_eq!(days_in_gregorian_month(13, 2023), 0);
    }

    #[test]
    fn epoch_is_day_one() {
        assert_eq!(gregorian_to_absolute(1, 1, 1), 1);
        assert_eq!(absolute_to_gregorian(1), (1, 1, 1));
        assert_eq!(absolute_to_gregorian(0), (0, 12, 31));
    }

    #[test]
    fn known_absolute_day() {
        assert_eq!(gregorian_to_absolute(2023, 12, 21), 738_875);
        assert_eq!(absolute_to_gregorian(738_875), (2023, 12, 21));
    }

    #[test]
    fn century_boundaries() {
        for &(y, m, d) in &[(1900, 2, 28), (1900, 3, 1), (2000, 2, 29), (2000, 12, 31), (2100, 3, 1)] {
            let abs = gregorian_to_absolute(y, m, d);
            assert_eq!(absolute_to_gregorian(abs), (y, m, d));
        }
    }

    #[test]
    fn negative_days_resolve_backwards() {
        assert_eq!(absolute_to_gregorian(-400), (-1, 11, 27));
        assert_eq!(absolute_to_gregorian(-366_000), (-1002, 12, 4));
    }

    #[test]
    fn new_rejects_invalid() {
        assert_eq!(GregorianDate::new(2023, 13, 1), Err(TimeError::InvalidMonth(13)));
        assert!(GregorianDate::new(2023, 2, 29).is_err());
        assert!(GregorianDate::new(2024, 2, 29).is_ok());
        assert!(GregorianDate::new(2024, 1, 0).is_err());
    }

    #[test]
    fn parse_and_display() {
        let d: GregorianDate = "2023-12-26".parse().unwrap();
        assert_eq!(d, GregorianDate { year: 2023, month: 12, day: 26 });
        assert_eq!(d.to_string(), "2023-12-26");

        let bce: GregorianDate = "-3760-09-07".parse().unwrap();
        assert_eq!(bce.year, -3760);
        assert_eq!(bce.to_string(), "-3760-09-07");
    }

    #[test]
    fn parse_errors() {
        assert!(matches!("2023-12".parse::<GregorianDate>(), Err(TimeError::Parse(_))));
        assert!(matches!("abcd-01-01".parse::<GregorianDate>(), Err(TimeError::Parse(_))));
        assert!(matches!(
            "2023-02-30".parse::<GregorianDate>(),
            Err(TimeError::InvalidDay { .. })
        ));
    }

    #[test]
    fn weekday_and_add_days() {
        let d = GregorianDate::new(2023, 12, 26).unwrap();
        assert_eq!(d.weekday(), DayOfWeek::Tuesday);
        assert_eq!(d.add_days(6), GregorianDate::new(2024, 1, 1).unwrap());
        assert_eq!(d.add_days(-26), GregorianDate::new(2023, 11, 30).unwrap());
    }

    #[test]
    fn jd_paths_agree() {
        let d = GregorianDate::new(2023, 12, 21).unwrap();
        assert_eq!(d.to_jd(), 2_460_299.5);
        assert_eq!(crate::jd_to_absolute(d.to_jd()), d.to_absolute());
    }
}
