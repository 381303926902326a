//! Kiddush Levana windows measured from the month's molad.
//!
//! All instants are Israel standard time, starting from
//! [`MoladDate::standard_time`].

use luach_calendar::{HebrewMonth, MoladDate, MoladInstant};

use crate::context::ObservanceContext;

const SECONDS_PER_DAY: f64 = 86_400.0;

/// Earliest time according to the opinion of three days after the molad.
pub const EARLIEST_3_DAYS_S: f64 = 3.0 * SECONDS_PER_DAY;
/// Earliest time according to the opinion of seven days after the molad.
pub const EARLIEST_7_DAYS_S: f64 = 7.0 * SECONDS_PER_DAY;
/// Half a mean lunation: 14 d 18 h 22 m 1.666 s.
pub const HALFWAY_BETWEEN_MOLADOS_S: f64 = 1_275_721.666;
/// Latest time according to the opinion of fifteen days after the molad.
pub const LATEST_15_DAYS_S: f64 = 15.0 * SECONDS_PER_DAY;

/// The four Kiddush Levana bounds for one month.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KiddushLevanaTimes {
    pub molad: MoladInstant,
    pub earliest_3_days: MoladInstant,
    pub earliest_7_days: MoladInstant,
    pub latest_between_moldos: MoladInstant,
    pub latest_15_days: MoladInstant,
}

impl KiddushLevanaTimes {
    pub fn for_month(year: i64, month: HebrewMonth) -> Self {
        let molad = MoladDate::for_month(year, month).standard_time();
        Self {
            molad,
            earliest_3_days: shift(molad, EARLIEST_3_DAYS_S),
            earliest_7_days: shift(molad, EARLIEST_7_DAYS_S),
            latest_between_moldos: shift(molad, HALFWAY_BETWEEN_MOLADOS_S),
            latest_15_days: shift(molad, LATEST_15_DAYS_S),
        }
    }
}

/// Move an instant forward by `seconds`, carrying whole days into the date.
fn shift(instant: MoladInstant, seconds: f64) -> MoladInstant {
    let total = instant.seconds_of_day + seconds;
    let days = (total / SECONDS_PER_DAY).floor();
    MoladInstant {
        date: instant.date.add_days(days as i64),
        seconds_of_day: total - days * SECONDS_PER_DAY,
    }
}

impl ObservanceContext {
    /// Kiddush Levana windows for the month this date falls in.
    pub fn kiddush_levana(&self) -> KiddushLevanaTimes {
        KiddushLevanaTimes::for_month(self.date().year(), self.date().month())
    }
}
