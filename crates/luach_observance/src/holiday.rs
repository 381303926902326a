//! Holiday kinds and their observance rules.
//!
//! `Holiday::observed_on` is the single place that maps a kind to its
//! predicate; precedence follows declaration order, so Chanukah wins over
//! Rosh Chodesh on 1 Teves.

use luach_calendar::{HebrewDate, HebrewMonth, hebrew_to_absolute};
use luach_time::DayOfWeek;

use crate::context::ObservanceContext;

/// A holiday, fast day or other marked day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum Holiday {
    ErevPesach,
    Pesach,
    CholHamoedPesach,
    PesachSheni,
    ErevShavuos,
    Shavuos,
    SeventeenthOfTammuz,
    TishaBeav,
    TuBeav,
    ErevRoshHashana,
    RoshHashana,
    FastOfGedalia,
    ErevYomKippur,
    YomKippur,
    ErevSuccos,
    Succos,
    CholHamoedSuccos,
    HoshanaRabba,
    SheminiAtzeres,
    SimchasTorah,
    ErevChanukah,
    Chanukah,
    TenthOfTeves,
    TuBeshvat,
    FastOfEsther,
    Purim,
    ShushanPurim,
    PurimKatan,
    ErevRoshChodesh,
    RoshChodesh,
    YomHashoah,
    YomHazikaron,
    YomHaatzmaut,
    YomYerushalayim,
    LagBaomer,
    ShushanPurimKatan,
    IsruChag,
}

/// All holidays in precedence order.
pub const ALL_HOLIDAYS: [Holiday; 37] = [
    Holiday::ErevPesach,
    Holiday::Pesach,
    Holiday::CholHamoedPesach,
    Holiday::PesachSheni,
    Holiday::ErevShavuos,
    Holiday::Shavuos,
    Holiday::SeventeenthOfTammuz,
    Holiday::TishaBeav,
    Holiday::TuBeav,
    Holiday::ErevRoshHashana,
    Holiday::RoshHashana,
    Holiday::FastOfGedalia,
    Holiday::ErevYomKippur,
    Holiday::YomKippur,
    Holiday::ErevSuccos,
    Holiday::Succos,
    Holiday::CholHamoedSuccos,
    Holiday::HoshanaRabba,
    Holiday::SheminiAtzeres,
    Holiday::SimchasTorah,
    Holiday::ErevChanukah,
    Holiday::Chanukah,
    Holiday::TenthOfTeves,
    Holiday::TuBeshvat,
    Holiday::FastOfEsther,
    Holiday::Purim,
    Holiday::ShushanPurim,
    Holiday::PurimKatan,
    Holiday::ErevRoshChodesh,
    Holiday::RoshChodesh,
    Holiday::YomHashoah,
    Holiday::YomHazikaron,
    Holiday::YomHaatzmaut,
    Holiday::YomYerushalayim,
    Holiday::LagBaomer,
    Holiday::ShushanPurimKatan,
    Holiday::IsruChag,
];

/// Erev / festival pairs.
const EREV_PAIRS: [(Holiday, Holiday); 6] = [
    (Holiday::ErevPesach, Holiday::Pesach),
    (Holiday::ErevShavuos, Holiday::Shavuos),
    (Holiday::ErevYomKippur, Holiday::YomKippur),
    (Holiday::ErevRoshHashana, Holiday::RoshHashana),
    (Holiday::ErevSuccos, Holiday::Succos),
    (Holiday::SheminiAtzeres, Holiday::SimchasTorah),
];

impl Holiday {
    /// Whether this holiday is observed on the context's day.
    pub fn observed_on(self, ctx: &ObservanceContext) -> bool {
        match self {
            Self::ErevPesach => ctx.is_erev_pesach(),
            Self::Pesach => ctx.is_pesach(),
            Self::CholHamoedPesach => ctx.is_chol_hamoed_pesach(),
            Self::PesachSheni => ctx.is_pesach_sheni(),
            Self::ErevShavuos => ctx.is_erev_shavuos(),
            Self::Shavuos => ctx.is_shavuos(),
            Self::SeventeenthOfTammuz => ctx.is_seventeenth_of_tammuz(),
            Self::TishaBeav => ctx.is_tisha_beav(),
            Self::TuBeav => ctx.is_tu_beav(),
            Self::ErevRoshHashana => ctx.is_erev_rosh_hashana(),
            Self::RoshHashana => ctx.is_rosh_hashana(),
            Self::FastOfGedalia => ctx.is_fast_of_gedalia(),
            Self::ErevYomKippur => ctx.is_erev_yom_kippur(),
            Self::YomKippur => ctx.is_yom_kippur(),
            Self::ErevSuccos => ctx.is_erev_succos(),
            Self::Succos => ctx.is_succos(),
            Self::CholHamoedSuccos => ctx.is_chol_hamoed_succos(),
            Self::HoshanaRabba => ctx.is_hoshana_rabba(),
            Self::SheminiAtzeres => ctx.is_shemini_atzeres(),
            Self::SimchasTorah => ctx.is_simchas_torah(),
            Self::ErevChanukah => ctx.is_erev_chanukah(),
            Self::Chanukah => ctx.is_chanukah(),
            Self::TenthOfTeves => ctx.is_tenth_of_teves(),
            Self::TuBeshvat => ctx.is_tu_beshvat(),
            Self::FastOfEsther => ctx.is_fast_of_esther(),
            Self::Purim => ctx.is_purim(),
            Self::ShushanPurim => ctx.is_shushan_purim(),
            Self::PurimKatan => ctx.is_purim_katan(),
            Self::ErevRoshChodesh => ctx.is_erev_rosh_chodesh(),
            Self::RoshChodesh => ctx.is_rosh_chodesh(),
            Self::YomHashoah => ctx.is_yom_hashoah(),
            Self::YomHazikaron => ctx.is_yom_hazikaron(),
            Self::YomHaatzmaut => ctx.is_yom_haatzmaut(),
            Self::YomYerushalayim => ctx.is_yom_yerushalayim(),
            Self::LagBaomer => ctx.is_lag_baomer(),
            Self::ShushanPurimKatan => ctx.is_shushan_purim_katan(),
            Self::IsruChag => ctx.is_isru_chag(),
        }
    }

    /// Position in precedence order.
    pub fn index(self) -> usize {
        ALL_HOLIDAYS
            .iter()
            .position(|&h| h == self)
            .unwrap_or(ALL_HOLIDAYS.len())
    }

    /// The other half of an erev / festival pair, if this is one.
    pub fn erev_counterpart(self) -> Option<Self> {
        EREV_PAIRS.iter().find_map(|&(erev, chag)| {
            if self == erev {
                Some(chag)
            } else if self == chag {
                Some(erev)
            } else {
                None
            }
        })
    }

    /// Whether `self` and `other` form an erev / festival pair.
    pub fn is_erev_connection(self, other: Self) -> bool {
        self.erev_counterpart() == Some(other)
    }

    /// Transliterated name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::ErevPesach => "Erev Pesach",
            Self::Pesach => "Pesach",
            Self::CholHamoedPesach => "Chol Hamoed Pesach",
            Self::PesachSheni => "Pesach Sheni",
            Self::ErevShavuos => "Erev Shavuos",
            Self::Shavuos => "Shavuos",
            Self::SeventeenthOfTammuz => "Seventeenth of Tammuz",
            Self::TishaBeav => "Tishah B'Av",
            Self::TuBeav => "Tu B'Av",
            Self::ErevRoshHashana => "Erev Rosh Hashana",
            Self::RoshHashana => "Rosh Hashana",
            Self::FastOfGedalia => "Fast of Gedalyah",
            Self::ErevYomKippur => "Erev Yom Kippur",
            Self::YomKippur => "Yom Kippur",
            Self::ErevSuccos => "Erev Succos",
            Self::Succos => "Succos",
            Self::CholHamoedSuccos => "Chol Hamoed Succos",
            Self::HoshanaRabba => "Hoshana Rabbah",
            Self::SheminiAtzeres => "Shemini Atzeres",
            Self::SimchasTorah => "Simchas Torah",
            Self::ErevChanukah => "Erev Chanukah",
            Self::Chanukah => "Chanukah",
            Self::TenthOfTeves => "Tenth of Teves",
            Self::TuBeshvat => "Tu B'Shvat",
            Self::FastOfEsther => "Fast of Esther",
            Self::Purim => "Purim",
            Self::ShushanPurim => "Shushan Purim",
            Self::PurimKatan => "Purim Katan",
            Self::ErevRoshChodesh => "Erev Rosh Chodesh",
            Self::RoshChodesh => "Rosh Chodesh",
            Self::YomHashoah => "Yom HaShoah",
            Self::YomHazikaron => "Yom Hazikaron",
            Self::YomHaatzmaut => "Yom Ha'atzmaut",
            Self::YomYerushalayim => "Yom Yerushalayim",
            Self::LagBaomer => "Lag B'Omer",
            Self::ShushanPurimKatan => "Shushan Purim Katan",
            Self::IsruChag => "Isru Chag",
        }
    }
}

impl std::fmt::Display for Holiday {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

// ---------------------------------------------------------------------------
// Fixed anchors
// ---------------------------------------------------------------------------

/// Yom Kippur (10 Tishrei) of `year`.
pub fn yom_kippur(year: i64) -> HebrewDate {
    HebrewDate::from_absolute(hebrew_to_absolute(year, HebrewMonth::Tishrei, 10))
}

/// Tisha B'Av as observed in `year`: 9 Av, or 10 Av when 9 Av is Shabbos.
pub fn observed_tisha_beav(year: i64) -> HebrewDate {
    let ninth = hebrew_to_absolute(year, HebrewMonth::Av, 9);
    if DayOfWeek::from_absolute(ninth) == DayOfWeek::Saturday {
        HebrewDate::from_absolute(ninth + 1)
    } else {
        HebrewDate::from_absolute(ninth)
    }
}
