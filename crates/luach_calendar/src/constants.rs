//! Fixed units and epochs of the Hebrew calendar.
//!
//! Time inside the calendar is counted in chalakim (parts): 1080 per hour,
//! 18 per minute. A chelek is 3⅓ seconds.

pub const CHALAKIM_PER_MINUTE: i64 = 18;
pub const CHALAKIM_PER_HOUR: i64 = 1080;
pub const CHALAKIM_PER_DAY: i64 = 25_920;

/// Mean synodic month: 29 days 12 hours 793 chalakim.
pub const CHALAKIM_PER_MONTH: i64 = 765_433;

/// Molad Tohu (BaHaRaD): 1 day 5 hours 204 chalakim.
pub const CHALAKIM_MOLAD_TOHU: i64 = 31_524;

/// Offset from elapsed Hebrew days to the absolute (Gregorian) day count.
pub const JEWISH_EPOCH: i64 = -1_373_429;

/// Molad Zaken threshold: noon (18 hours after the 18:00 day start).
pub const MOLAD_ZAKEN_PARTS: i64 = 19_440;

/// GaTRaD threshold: 9 hours 204 chalakim.
pub const GATRAD_PARTS: i64 = 9_924;

/// BeTuTaKFoT threshold: 15 hours 589 chalakim.
pub const BETUTAKFOT_PARTS: i64 = 16_789;

/// Seconds in one chelek.
pub const SECONDS_PER_CHELEK: f64 = 10.0 / 3.0;

/// Jerusalem mean time minus Israel standard time (20 min 56.496 s).
pub const JERUSALEM_MEAN_TIME_OFFSET_S: f64 = 20.0 * 60.0 + 56.496;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_relations() {
        assert_eq!(CHALAKIM_PER_HOUR, 60 * CHALAKIM_PER_MINUTE);
        assert_eq!(CHALAKIM_PER_DAY, 24 * CHALAKIM_PER_HOUR);
        assert_eq!(
            CHALAKIM_PER_MONTH,
            29 * CHALAKIM_PER_DAY + 12 * CHALAKIM_PER_HOUR + 793
        );
        assert_eq!(CHALAKIM_MOLAD_TOHU, CHALAKIM_PER_DAY + 5 * CHALAKIM_PER_HOUR + 204);
    }

    #[test]
    fn thresholds_in_hours_and_parts() {
        assert_eq!(MOLAD_ZAKEN_PARTS, 18 * CHALAKIM_PER_HOUR);
        assert_eq!(GATRAD_PARTS, 9 * CHALAKIM_PER_HOUR + 204);
        assert_eq!(BETUTAKFOT_PARTS, 15 * CHALAKIM_PER_HOUR + 589);
    }
}
