//! Yerushalmi Daf Yomi.
//!
//! The cycle began on 1980-02-02 and studies one page a day, except on
//! Yom Kippur and (observed) Tisha B'Av, which do not advance the count.
//! Cycle boundaries therefore drift and are found by walking forward one
//! cycle at a time.

use luach_calendar::HebrewDate;
use luach_observance::{observed_tisha_beav, yom_kippur};
use luach_time::{GregorianDate, JD_ABSOLUTE_OFFSET, jd_to_absolute};
use tracing::{trace, warn};

use crate::daf::{Daf, DafCycle};
use crate::tractate::{ALL_YERUSHALMI_TRACTATES, YERUSHALMI_CYCLE_PAGES};

/// Julian day number of 1980-02-02, the first day of cycle 1.
pub const YERUSHALMI_CYCLE_START_JDN: i64 = 2_444_271;

/// Upper bound on the cycle walk (about 4,300 years).
pub const MAX_YERUSHALMI_CYCLES: u32 = 1000;

/// Absolute day of 1980-02-02.
const CYCLE_START_ABS: i64 = YERUSHALMI_CYCLE_START_JDN - JD_ABSOLUTE_OFFSET;

/// Whether `abs` is a day with no Yerushalmi study.
pub fn is_excluded_day(abs: i64) -> bool {
    let year = HebrewDate::from_absolute(abs).year();
    yom_kippur(year).to_absolute() == abs || observed_tisha_beav(year).to_absolute() == abs
}

/// Excluded days strictly between `start` and `end`.
fn excluded_days_between(start: i64, end: i64) -> i64 {
    let first = HebrewDate::from_absolute(start).year();
    let last = HebrewDate::from_absolute(end).year();
    let inside = |abs: i64| start < abs && abs < end;
    (first..=last)
        .map(|year| {
            i64::from(inside(yom_kippur(year).to_absolute()))
                + i64::from(inside(observed_tisha_beav(year).to_absolute()))
        })
        .sum()
}

/// First day of the cycle after the one starting on `start`.
///
/// The span is widened until it holds exactly one cycle of study days,
/// re-counting exclusions each time it grows, and then moved off an
/// excluded day. `start` must itself be a study day.
fn next_cycle_start(start: i64) -> i64 {
    let mut next = start + YERUSHALMI_CYCLE_PAGES;
    loop {
        let widened = start + YERUSHALMI_CYCLE_PAGES + excluded_days_between(start, next);
        if widened == next {
            break;
        }
        next = widened;
    }
    while is_excluded_day(next) {
        next += 1;
    }
    next
}

/// Start of the cycle containing `abs` and its 1-based cycle number.
fn cycle_start(abs: i64) -> Option<(i64, u32)> {
    let mut prev = CYCLE_START_ABS;
    let mut next = CYCLE_START_ABS;
    for cycle in 0..=MAX_YERUSHALMI_CYCLES {
        if next > abs {
            return Some((prev, cycle));
        }
        prev = next;
        next = next_cycle_start(prev);
        trace!(cycle = cycle + 1, start = prev, next, "yerushalmi cycle boundary");
    }
    warn!(abs, bound = MAX_YERUSHALMI_CYCLES, "yerushalmi cycle walk exhausted");
    None
}

/// Yerushalmi daf for the day containing `jd`.
///
/// `None` before 1980-02-02 and on Yom Kippur or Tisha B'Av.
pub fn yerushalmi_daf_for_jd(jd: f64) -> Option<Daf> {
    let abs = jd_to_absolute(jd);
    if abs < CYCLE_START_ABS || is_excluded_day(abs) {
        return None;
    }
    let (start, _) = cycle_start(abs)?;
    let mut remaining = (abs - start) - excluded_days_between(start, abs);

    for tractate in ALL_YERUSHALMI_TRACTATES {
        let pages = i64::from(tractate.pages());
        if remaining < pages {
            return Some(Daf {
                tractate_index: tractate.index(),
                page: u32::try_from(remaining + 1).ok()?,
                cycle: DafCycle::Yerushalmi,
            });
        }
        remaining -= pages;
    }
    None
}

/// Yerushalmi daf for a civil date.
pub fn yerushalmi_daf(date: &GregorianDate) -> Option<Daf> {
    yerushalmi_daf_for_jd(date.to_jd())
}

/// 1-based Yerushalmi cycle containing `jd`, or `None` before 1980-02-02.
pub fn yerushalmi_cycle_number(jd: f64) -> Option<u32> {
    let abs = jd_to_absolute(jd);
    if abs < CYCLE_START_ABS {
        return None;
    }
    cycle_start(abs).map(|(_, cycle)| cycle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use luach_time::{calendar_to_jd, gregorian_to_absolute, julian_day_number};

    fn on(y: i32, m: u32, d: u32) -> Option<(usize, u32)> {
        yerushalmi_daf(&GregorianDate::new(y, m, d).unwrap())
            .map(|daf| (daf.tractate_index, daf.page))
    }

    #[test]
    fn start_constant_matches_calendar() {
        assert_eq!(
            julian_day_number(calendar_to_jd(1980, 2, 2.0)),
            YERUSHALMI_CYCLE_START_JDN
        );
        assert_eq!(CYCLE_START_ABS, gregorian_to_absolute(1980, 2, 2));
    }

    #[test]
    fn first_days() {
        assert_eq!(on(1980, 2, 1), None);
        assert_eq!(on(1980, 2, 2), Some((0, 1)));
        assert_eq!(on(1980, 2, 3), Some((0, 2)));
    }

    #[test]
    fn second_cycle_boundary() {
        assert_eq!(on(1984, 5, 12), Some((38, 13)));
        assert_eq!(on(1984, 5, 13), Some((0, 1)));
        assert_eq!(yerushalmi_cycle_number(calendar_to_jd(1984, 5, 12.0)), Some(1));
        assert_eq!(yerushalmi_cycle_number(calendar_to_jd(1984, 5, 13.0)), Some(2));
    }

    #[test]
    fn excluded_days_have_no_daf() {
        // Yom Kippur 5784, and Tisha B'Av 5782 observed on Sunday 10 Av.
        assert_eq!(on(2023, 9, 25), None);
        assert_eq!(on(2022, 8, 7), None);
        // 9 Av 5782 itself was Shabbos and is a study day.
        assert_eq!(on(2022, 8, 6), Some((35, 29)));
    }

    #[test]
    fn every_cycle_holds_every_page() {
        let mut start = CYCLE_START_ABS;
        for cycle in 1..=100 {
            let next = next_cycle_start(start);
            let study_days = (next - start) - excluded_days_between(start, next);
            assert_eq!(study_days, YERUSHALMI_CYCLE_PAGES, "cycle {cycle}");
            assert!(!is_excluded_day(next), "cycle {cycle}");
            start = next;
        }
    }

    #[test]
    fn last_page_before_each_early_boundary() {
        let mut start = CYCLE_START_ABS;
        for cycle in 2..=6 {
            start = next_cycle_start(start);
            let last_study_day = (1..).map(|i| start - i).find(|&abs| !is_excluded_day(abs)).unwrap();
            let jd = |abs: i64| (abs + JD_ABSOLUTE_OFFSET) as f64 + 0.5;
            let last = yerushalmi_daf_for_jd(jd(last_study_day)).unwrap();
            let first = yerushalmi_daf_for_jd(jd(start)).unwrap();
            assert_eq!((last.tractate_index, last.page), (38, 13), "cycle {cycle}");
            assert_eq!((first.tractate_index, first.page), (0, 1), "cycle {cycle}");
            assert_eq!(yerushalmi_cycle_number(jd(start)), Some(cycle));
        }
    }

    #[test]
    fn boundary_moves_off_tisha_beav() {
        // The unwidened boundary for cycle 71 is Sunday 10 Av 6039.
        assert_eq!(on(2279, 7, 20), None);
        assert_eq!(on(2279, 7, 21), Some((38, 12)));
        assert_eq!(on(2279, 7, 22), Some((38, 13)));
        assert_eq!(on(2279, 7, 23), Some((0, 1)));
    }

    #[test]
    fn excluded_count_is_exclusive() {
        let yk = gregorian_to_absolute(2023, 9, 25);
        assert_eq!(excluded_days_between(yk, yk + 10), 0);
        assert_eq!(excluded_days_between(yk - 1, yk + 1), 1);
        assert!(is_excluded_day(yk));
        assert!(!is_excluded_day(yk + 1));
    }
}
