//! Bavli Daf Yomi.
//!
//! Cycle 1 began on 1923-09-11. Cycles 1–7 ran 2,702 days each; from
//! cycle 8 (1975-06-24) Shekalim grew from 13 to 22 blatt and every cycle
//! is 2,711 days.

use luach_time::{GregorianDate, julian_day_number};

use crate::daf::{Daf, DafCycle};
use crate::tractate::{ALL_BAVLI_TRACTATES, LAST_EARLY_SHEKALIM_CYCLE};

/// Julian day number of 1923-09-11, the first day of cycle 1.
pub const BAVLI_CYCLE_START_JDN: i64 = 2_423_673;

/// Julian day number of 1975-06-24, the first day of cycle 8.
pub const SHEKALIM_CHANGE_JDN: i64 = 2_442_587;

/// Days in each of cycles 1–7.
pub const EARLY_BAVLI_CYCLE_DAYS: i64 = 2702;

/// Days in each cycle from cycle 8 on.
pub const BAVLI_CYCLE_DAYS: i64 = 2711;

/// Cycle number and 0-based day within it, or `None` before cycle 1.
fn cycle_position(jdn: i64) -> Option<(u32, i64)> {
    if jdn < BAVLI_CYCLE_START_JDN {
        return None;
    }
    let (first, start, length) = if jdn >= SHEKALIM_CHANGE_JDN {
        (LAST_EARLY_SHEKALIM_CYCLE + 1, SHEKALIM_CHANGE_JDN, BAVLI_CYCLE_DAYS)
    } else {
        (1, BAVLI_CYCLE_START_JDN, EARLY_BAVLI_CYCLE_DAYS)
    };
    let elapsed = jdn - start;
    let cycle = first + u32::try_from(elapsed / length).ok()?;
    Some((cycle, elapsed % length))
}

/// Cycle number containing `jd`, or `None` before 1923-09-11.
pub fn bavli_cycle_number(jd: f64) -> Option<u32> {
    cycle_position(julian_day_number(jd)).map(|(cycle, _)| cycle)
}

/// Bavli daf for the day containing `jd`, or `None` before 1923-09-11.
pub fn bavli_daf_for_jd(jd: f64) -> Option<Daf> {
    let (cycle, day) = cycle_position(julian_day_number(jd))?;

    // Each tractate starts at daf 2, so it spans `pages - 1` days.
    let mut end = 0i64;
    for tractate in ALL_BAVLI_TRACTATES {
        let pages = i64::from(tractate.pages(cycle));
        end += pages - 1;
        if day < end {
            let page = u32::try_from(1 + pages - (end - day)).ok()?;
            return Some(Daf {
                tractate_index: tractate.index(),
                page: page + tractate.first_page_offset(),
                cycle: DafCycle::Bavli,
            });
        }
    }
    None
}

/// Bavli daf for a civil date.
pub fn bavli_daf(date: &GregorianDate) -> Option<Daf> {
    bavli_daf_for_jd(date.to_jd())
}
