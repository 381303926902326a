//! Molad (mean new moon) arithmetic.
//!
//! All intermediate values are integer chalakim counted from Molad Tohu;
//! floating point appears only when converting a molad to clock seconds
//! for display.

use luach_time::GregorianDate;

use crate::constants::{
    CHALAKIM_MOLAD_TOHU, CHALAKIM_PER_DAY, CHALAKIM_PER_HOUR, CHALAKIM_PER_MINUTE,
    CHALAKIM_PER_MONTH, JERUSALEM_MEAN_TIME_OFFSET_S, JEWISH_EPOCH, SECONDS_PER_CHELEK,
};
use crate::month::{HebrewMonth, month_of_year};

/// Time of day of a molad: hours 0..23, minutes 0..59, chalakim 0..17.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Molad {
    pub hours: u32,
    pub minutes: u32,
    pub chalakim: u32,
}

impl Molad {
    /// Seconds after the start of the hour count.
    pub fn seconds(&self) -> f64 {
        f64::from(self.hours * 3600 + self.minutes * 60) + f64::from(self.chalakim) * SECONDS_PER_CHELEK
    }
}

impl std::fmt::Display for Molad {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}h {}m {} chalakim",
            self.hours, self.minutes, self.chalakim
        )
    }
}

/// Months from Molad Tohu to the start of (`year`, `month`).
pub fn months_elapsed(year: i64, month: HebrewMonth) -> i64 {
    let prior = year - 1;
    let cycle_year = prior.rem_euclid(19);
    235 * prior.div_euclid(19)
        + 12 * cycle_year
        + (7 * cycle_year + 1).div_euclid(19)
        + i64::from(month_of_year(year, month)) - 1
}

/// Chalakim from the calendar epoch to the molad of (`year`, `month`).
pub fn chalakim_since_molad_tohu(year: i64, month: HebrewMonth) -> i64 {
    CHALAKIM_MOLAD_TOHU + CHALAKIM_PER_MONTH * months_elapsed(year, month)
}

/// Split a chalakim count into whole days and the time of day.
///
/// The time of day counts from 18:00 of the preceding evening.
pub fn molad_from_chalakim(chalakim: i64) -> (i64, Molad) {
    let days = chalakim.div_euclid(CHALAKIM_PER_DAY);
    let parts = chalakim.rem_euclid(CHALAKIM_PER_DAY);
    let hours = parts / CHALAKIM_PER_HOUR;
    let rest = parts % CHALAKIM_PER_HOUR;
    let molad = Molad {
        hours: hours as u32,
        minutes: (rest / CHALAKIM_PER_MINUTE) as u32,
        chalakim: (rest % CHALAKIM_PER_MINUTE) as u32,
    };
    (days, molad)
}

/// Absolute day of a chalakim count.
pub fn molad_to_absolute(chalakim: i64) -> i64 {
    chalakim.div_euclid(CHALAKIM_PER_DAY) + JEWISH_EPOCH
}

// ---------------------------------------------------------------------------
// Civil-clock molad
// ---------------------------------------------------------------------------

/// A molad on the civil calendar, as a Jerusalem mean-time clock reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoladDate {
    /// Civil date of the molad.
    pub date: GregorianDate,
    /// Civil clock time (hours from midnight).
    pub molad: Molad,
}

/// A molad as an instant in Israel standard time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoladInstant {
    pub date: GregorianDate,
    /// Seconds after local midnight, in `0.0..86400.0`.
    pub seconds_of_day: f64,
}

impl MoladDate {
    /// Molad of (`year`, `month`) on the civil clock.
    ///
    /// The raw hour count starts at 18:00; a raw hour of 6 or more
    /// therefore falls on the following civil date.
    pub fn for_month(year: i64, month: HebrewMonth) -> Self {
        let chalakim = chalakim_since_molad_tohu(year, month);
        let (_, raw) = molad_from_chalakim(chalakim);
        let mut date = GregorianDate::from_absolute(molad_to_absolute(chalakim));
        if raw.hours >= 6 {
            date = date.add_days(1);
        }
        let molad = Molad {
            hours: (raw.hours + 18) % 24,
            ..raw
        };
        Self { date, molad }
    }

    /// The same instant in Israel standard time.
    pub fn standard_time(&self) -> MoladInstant {
        let mut seconds = self.molad.seconds() - JERUSALEM_MEAN_TIME_OFFSET_S;
        let mut date = self.date;
        if seconds < 0.0 {
            seconds += 86_400.0;
            date = date.add_days(-1);
        }
        MoladInstant {
            date,
            seconds_of_day: seconds,
        }
    }
}

impl MoladInstant {
    /// `(hours, minutes, seconds)` of the instant.
    pub fn hms(&self) -> (u32, u32, f64) {
        let whole = self.seconds_of_day.floor();
        let total = whole as u32;
        (
            total / 3600,
            (total % 3600) / 60,
            f64::from(total % 60) + (self.seconds_of_day - whole),
        )
    }
}

impl std::fmt::Display for MoladInstant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (h, m, s) = self.hms();
        write!(f, "{} {:02}:{:02}:{:06.3}", self.date, h, m, s)
    }
}
