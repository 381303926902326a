//! Property tests for the calendar arithmetic.

use luach_calendar::{
    ALL_MONTHS, HebrewDate, absolute_to_hebrew, days_in_month, days_in_year, elapsed_days,
    hebrew_to_absolute, is_leap_year, rosh_hashana_absolute,
};
use luach_time::{DayOfWeek, GregorianDate};
use proptest::prelude::*;

proptest! {
    #[test]
    fn absolute_round_trip(abs in -1_300_000i64..1_500_000) {
        let (y, m, d) = absolute_to_hebrew(abs);
        prop_assert!(d >= 1 && d <= days_in_month(m, y));
        prop_assert!(m.occurs_in(y));
        prop_assert_eq!(hebrew_to_absolute(y, m, d), abs);
    }

    #[test]
    fn civil_round_trip_is_idempotent(abs in 1i64..1_000_000) {
        let civil = GregorianDate::from_absolute(abs);
        let once = HebrewDate::from_gregorian(&civil);
        let twice = HebrewDate::from_gregorian(&once.to_gregorian());
        prop_assert_eq!(once, twice);
        prop_assert_eq!(twice.to_gregorian(), civil);
    }

    #[test]
    fn seven_leap_years_in_nineteen(start in -2_000i64..10_000) {
        let leaps = (start..start + 19).filter(|&y| is_leap_year(y)).count();
        prop_assert_eq!(leaps, 7);
    }

    #[test]
    fn rosh_hashana_never_adu(year in 1i64..10_000) {
        let weekday = DayOfWeek::from_absolute(rosh_hashana_absolute(year));
        prop_assert!(!matches!(
            weekday,
            DayOfWeek::Sunday | DayOfWeek::Wednesday | DayOfWeek::Friday
        ));
        // Rosh Hashana shares its weekday with the elapsed-day count.
        prop_assert_eq!(weekday, DayOfWeek::from_absolute(elapsed_days(year)));
    }

    #[test]
    fn year_length_closure(year in 1i64..10_000) {
        let days = days_in_year(year);
        if is_leap_year(year) {
            prop_assert!((383..=385).contains(&days));
        } else {
            prop_assert!((353..=355).contains(&days));
        }
    }

    #[test]
    fn month_lengths_sum_to_year(year in 1i64..10_000) {
        let sum: i64 = ALL_MONTHS
            .iter()
            .filter(|m| m.occurs_in(year))
            .map(|&m| i64::from(days_in_month(m, year)))
            .sum();
        prop_assert_eq!(sum, days_in_year(year));
    }
}
