//! Rosh Hashana postponements (dechiyos) and elapsed days.
//!
//! The Tishrei molad fixes a provisional day. Rules 1–3 together add at
//! most one day; Lo ADU Rosh is checked afterwards and may add a second.

use crate::constants::{BETUTAKFOT_PARTS, CHALAKIM_PER_DAY, GATRAD_PARTS, MOLAD_ZAKEN_PARTS};
use crate::molad::chalakim_since_molad_tohu;
use crate::month::HebrewMonth;
use crate::year::is_leap_year;

/// A single postponement rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dechiya {
    /// Molad at or after noon.
    MoladZaken,
    /// Tuesday molad at or after 9h 204p in a common year.
    GaTRaD,
    /// Monday molad at or after 15h 589p following a leap year.
    BeTuTaKFoT,
    /// Rosh Hashana may not fall on Sunday, Wednesday or Friday.
    LoAduRosh,
}

impl Dechiya {
    /// Transliterated name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::MoladZaken => "Molad Zaken",
            Self::GaTRaD => "GaTRaD",
            Self::BeTuTaKFoT => "BeTuTaKFoT",
            Self::LoAduRosh => "Lo ADU Rosh",
        }
    }
}

impl std::fmt::Display for Dechiya {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// How Rosh Hashana of a year was fixed from its Tishrei molad.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoshHashanaResolution {
    /// Day of the Tishrei molad, counted in elapsed Hebrew days.
    pub molad_day: i64,
    /// Time of day of the molad in chalakim (0..25920), from 18:00.
    pub molad_parts: i64,
    /// The molad-based postponement applied, if any (rules 1–3).
    pub postponement: Option<Dechiya>,
    /// Whether Lo ADU Rosh added a day after the molad-based rules.
    pub lo_adu_rosh: bool,
    /// Resulting elapsed days; Rosh Hashana is the day after.
    pub elapsed_days: i64,
}

impl RoshHashanaResolution {
    /// Postponements applied, in the order they were evaluated.
    pub fn applied(&self) -> Vec<Dechiya> {
        self.postponement
            .into_iter()
            .chain(self.lo_adu_rosh.then_some(Dechiya::LoAduRosh))
            .collect()
    }

    /// Total days Rosh Hashana was moved (0, 1 or 2).
    pub fn total_delay(&self) -> i64 {
        self.elapsed_days - self.molad_day
    }
}

/// The molad-based rule (1–3) that applies, if any.
fn molad_postponement(year: i64, molad_day: i64, molad_parts: i64) -> Option<Dechiya> {
    let weekday = molad_day.rem_euclid(7);
    if molad_parts >= MOLAD_ZAKEN_PARTS {
        Some(Dechiya::MoladZaken)
    } else if weekday == 2 && molad_parts >= GATRAD_PARTS && !is_leap_year(year) {
        Some(Dechiya::GaTRaD)
    } else if weekday == 1 && molad_parts >= BETUTAKFOT_PARTS && is_leap_year(year - 1) {
        Some(Dechiya::BeTuTaKFoT)
    } else {
        None
    }
}

/// Sunday, Wednesday or Friday on the elapsed-day count.
fn is_adu(day: i64) -> bool {
    matches!(day.rem_euclid(7), 0 | 3 | 5)
}

/// Apply the four postponement rules to a Tishrei molad.
pub fn add_dechiyos(year: i64, molad_day: i64, molad_parts: i64) -> i64 {
    let mut day = molad_day;
    if molad_postponement(year, molad_day, molad_parts).is_some() {
        day += 1;
    }
    if is_adu(day) {
        day += 1;
    }
    day
}

/// Resolve Rosh Hashana of `year` with a breakdown of the rules applied.
pub fn resolve_rosh_hashana(year: i64) -> RoshHashanaResolution {
    let chalakim = chalakim_since_molad_tohu(year, HebrewMonth::Tishrei);
    let molad_day = chalakim.div_euclid(CHALAKIM_PER_DAY);
    let molad_parts = chalakim.rem_euclid(CHALAKIM_PER_DAY);

    let postponement = molad_postponement(year, molad_day, molad_parts);
    let provisional = molad_day + i64::from(postponement.is_some());
    let lo_adu_rosh = is_adu(provisional);
    let elapsed_days = provisional + i64::from(lo_adu_rosh);

    RoshHashanaResolution {
        molad_day,
        molad_parts,
        postponement,
        lo_adu_rosh,
        elapsed_days,
    }
}

/// Days elapsed from the calendar epoch to the eve of Rosh Hashana of `year`.
pub fn elapsed_days(year: i64) -> i64 {
    let chalakim = chalakim_since_molad_tohu(year, HebrewMonth::Tishrei);
    add_dechiyos(
        year,
        chalakim.div_euclid(CHALAKIM_PER_DAY),
        chalakim.rem_euclid(CHALAKIM_PER_DAY),
    )
}
