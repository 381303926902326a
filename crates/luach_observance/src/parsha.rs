//! Weekly readings, their year types, and the four special Shabbasos.
//!
//! A year's reading schedule is fixed by the weekday of Rosh Hashana, the
//! year's length and leap status, and (for some year types) whether the
//! reader is in Israel. The seventeen resulting types index the standard
//! weekly-reading table, types 0–11 being the diaspora / shared rows and
//! 12–16 the Israel-only variants.
//!
//! Each row is indexed by week of the year: week `n` holds the Shabbos on
//! which `rosh_hashana_weekday + day_of_year` equals `7n` (Sunday = 0,
//! 1 Tishrei = day 1). A Shabbos that is a festival has no reading.

use luach_calendar::HebrewMonth::{Adar, AdarII, Nissan, Shevat};
use luach_calendar::{YearLength, elapsed_days, is_leap_year};
use luach_time::DayOfWeek;
use tracing::warn;

use crate::context::ObservanceContext;

/// Shabbosos searched by [`ObservanceContext::upcoming_parsha`].
pub const MAX_UPCOMING_PARSHA_WEEKS: i64 = 4;

/// One of the four Shabbasos with an added Torah reading before Pesach.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpecialShabbos {
    Shekalim,
    Zachor,
    Parah,
    HaChodesh,
}

impl SpecialShabbos {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Shekalim => "Shekalim",
            Self::Zachor => "Zachor",
            Self::Parah => "Parah",
            Self::HaChodesh => "HaChodesh",
        }
    }
}

impl std::fmt::Display for SpecialShabbos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A weekly Torah reading, single or doubled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum Parsha {
    Bereshis,
    Noach,
    LechLecha,
    Vayera,
    ChayeiSara,
    Toldos,
    Vayetzei,
    Vayishlach,
    Vayeshev,
    Miketz,
    Vayigash,
    Vayechi,
    Shemos,
    Vaera,
    Bo,
    Beshalach,
    Yisro,
    Mishpatim,
    Terumah,
    Tetzaveh,
    KiSisa,
    Vayakhel,
    Pekudei,
    Vayikra,
    Tzav,
    Shmini,
    Tazria,
    Metzora,
    AchreiMos,
    Kedoshim,
    Emor,
    Behar,
    Bechukosai,
    Bamidbar,
    Nasso,
    Behaaloscha,
    Shlach,
    Korach,
    Chukas,
    Balak,
    Pinchas,
    Matos,
    Masei,
    Devarim,
    Vaeschanan,
    Eikev,
    Reeh,
    Shoftim,
    KiSeitzei,
    KiSavo,
    Nitzavim,
    Vayeilech,
    Haazinu,
    // Doubled readings
    VayakhelPekudei,
    TazriaMetzora,
    AchreiMosKedoshim,
    BeharBechukosai,
    ChukasBalak,
    MatosMasei,
    NitzavimVayeilech,
}

impl Parsha {
    /// Transliterated name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Bereshis => "Bereshis",
            Self::Noach => "Noach",
            Self::LechLecha => "Lech Lecha",
            Self::Vayera => "Vayera",
            Self::ChayeiSara => "Chayei Sara",
            Self::Toldos => "Toldos",
            Self::Vayetzei => "Vayetzei",
            Self::Vayishlach => "Vayishlach",
            Self::Vayeshev => "Vayeshev",
            Self::Miketz => "Miketz",
            Self::Vayigash => "Vayigash",
            Self::Vayechi => "Vayechi",
            Self::Shemos => "Shemos",
            Self::Vaera => "Vaera",
            Self::Bo => "Bo",
            Self::Beshalach => "Beshalach",
            Self::Yisro => "Yisro",
            Self::Mishpatim => "Mishpatim",
            Self::Terumah => "Terumah",
            Self::Tetzaveh => "Tetzaveh",
            Self::KiSisa => "Ki Sisa",
            Self::Vayakhel => "Vayakhel",
            Self::Pekudei => "Pekudei",
            Self::Vayikra => "Vayikra",
            Self::Tzav => "Tzav",
            Self::Shmini => "Shmini",
            Self::Tazria => "Tazria",
            Self::Metzora => "Metzora",
            Self::AchreiMos => "Achrei Mos",
            Self::Kedoshim => "Kedoshim",
            Self::Emor => "Emor",
            Self::Behar => "Behar",
            Self::Bechukosai => "Bechukosai",
            Self::Bamidbar => "Bamidbar",
            Self::Nasso => "Nasso",
            Self::Behaaloscha => "Beha'aloscha",
            Self::Shlach => "Sh'lach",
            Self::Korach => "Korach",
            Self::Chukas => "Chukas",
            Self::Balak => "Balak",
            Self::Pinchas => "Pinchas",
            Self::Matos => "Matos",
            Self::Masei => "Masei",
            Self::Devarim => "Devarim",
            Self::Vaeschanan => "Vaeschanan",
            Self::Eikev => "Eikev",
            Self::Reeh => "Re'eh",
            Self::Shoftim => "Shoftim",
            Self::KiSeitzei => "Ki Seitzei",
            Self::KiSavo => "Ki Savo",
            Self::Nitzavim => "Nitzavim",
            Self::Vayeilech => "Vayeilech",
            Self::Haazinu => "Ha'Azinu",
            Self::VayakhelPekudei => "Vayakhel Pekudei",
            Self::TazriaMetzora => "Tazria Metzora",
            Self::AchreiMosKedoshim => "Achrei Mos Kedoshim",
            Self::BeharBechukosai => "Behar Bechukosai",
            Self::ChukasBalak => "Chukas Balak",
            Self::MatosMasei => "Matos Masei",
            Self::NitzavimVayeilech => "Nitzavim Vayeilech",
        }
    }
}

impl std::fmt::Display for Parsha {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

macro_rules! week {
    (N) => {
        None
    };
    ($parsha:ident) => {
        Some(Parsha::$parsha)
    };
}

macro_rules! row {
    ($($parsha:ident),* $(,)?) => {
        &[$(week!($parsha)),*]
    };
}

/// Weekly readings per year type; `N` marks a Shabbos without one.
pub const PARSHA_LIST: [&[Option<Parsha>]; 17] = [
    // 0
    row![
        N, Vayeilech, Haazinu, N, Bereshis, Noach, LechLecha, Vayera, ChayeiSara, Toldos,
        Vayetzei, Vayishlach, Vayeshev, Miketz, Vayigash, Vayechi, Shemos, Vaera, Bo, Beshalach,
        Yisro, Mishpatim, Terumah, Tetzaveh, KiSisa, VayakhelPekudei, Vayikra, Tzav, N, Shmini,
        TazriaMetzora, AchreiMosKedoshim, Emor, BeharBechukosai, Bamidbar, Nasso, Behaaloscha,
        Shlach, Korach, Chukas, Balak, Pinchas, MatosMasei, Devarim, Vaeschanan, Eikev, Reeh,
        Shoftim, KiSeitzei, KiSavo, NitzavimVayeilech
    ],
    // 1
    row![
        N, Vayeilech, Haazinu, N, Bereshis, Noach, LechLecha, Vayera, ChayeiSara, Toldos,
        Vayetzei, Vayishlach, Vayeshev, Miketz, Vayigash, Vayechi, Shemos, Vaera, Bo, Beshalach,
        Yisro, Mishpatim, Terumah, Tetzaveh, KiSisa, VayakhelPekudei, Vayikra, Tzav, N, Shmini,
        TazriaMetzora, AchreiMosKedoshim, Emor, BeharBechukosai, Bamidbar, N, Nasso,
        Behaaloscha, Shlach, Korach, ChukasBalak, Pinchas, MatosMasei, Devarim, Vaeschanan,
        Eikev, Reeh, Shoftim, KiSeitzei, KiSavo, NitzavimVayeilech
    ],
    // 2
    row![
        N, Haazinu, N, N, Bereshis, Noach, LechLecha, Vayera, ChayeiSara, Toldos, Vayetzei,
        Vayishlach, Vayeshev, Miketz, Vayigash, Vayechi, Shemos, Vaera, Bo, Beshalach, Yisro,
        Mishpatim, Terumah, Tetzaveh, KiSisa, VayakhelPekudei, Vayikra, Tzav, N, N, Shmini,
        TazriaMetzora, AchreiMosKedoshim, Emor, BeharBechukosai, Bamidbar, Nasso, Behaaloscha,
        Shlach, Korach, Chukas, Balak, Pinchas, MatosMasei, Devarim, Vaeschanan, Eikev, Reeh,
        Shoftim, KiSeitzei, KiSavo, Nitzavim
    ],
    // 3
    row![
        N, Haazinu, N, N, Bereshis, Noach, LechLecha, Vayera, ChayeiSara, Toldos, Vayetzei,
        Vayishlach, Vayeshev, Miketz, Vayigash, Vayechi, Shemos, Vaera, Bo, Beshalach, Yisro,
        Mishpatim, Terumah, Tetzaveh, KiSisa, Vayakhel, Pekudei, Vayikra, Tzav, N, Shmini,
        TazriaMetzora, AchreiMosKedoshim, Emor, BeharBechukosai, Bamidbar, Nasso, Behaaloscha,
        Shlach, Korach, Chukas, Balak, Pinchas, MatosMasei, Devarim, Vaeschanan, Eikev, Reeh,
        Shoftim, KiSeitzei, KiSavo, Nitzavim
    ],
    // 4
    row![
        N, N, Haazinu, N, N, Bereshis, Noach, LechLecha, Vayera, ChayeiSara, Toldos, Vayetzei,
        Vayishlach, Vayeshev, Miketz, Vayigash, Vayechi, Shemos, Vaera, Bo, Beshalach, Yisro,
        Mishpatim, Terumah, Tetzaveh, KiSisa, VayakhelPekudei, Vayikra, Tzav, N, Shmini,
        TazriaMetzora, AchreiMosKedoshim, Emor, BeharBechukosai, Bamidbar, Nasso, Behaaloscha,
        Shlach, Korach, Chukas, Balak, Pinchas, MatosMasei, Devarim, Vaeschanan, Eikev, Reeh,
        Shoftim, KiSeitzei, KiSavo, Nitzavim
    ],
    // 5
    row![
        N, N, Haazinu, N, N, Bereshis, Noach, LechLecha, Vayera, ChayeiSara, Toldos, Vayetzei,
        Vayishlach, Vayeshev, Miketz, Vayigash, Vayechi, Shemos, Vaera, Bo, Beshalach, Yisro,
        Mishpatim, Terumah, Tetzaveh, KiSisa, VayakhelPekudei, Vayikra, Tzav, N, Shmini,
        TazriaMetzora, AchreiMosKedoshim, Emor, BeharBechukosai, Bamidbar, Nasso, Behaaloscha,
        Shlach, Korach, Chukas, Balak, Pinchas, MatosMasei, Devarim, Vaeschanan, Eikev, Reeh,
        Shoftim, KiSeitzei, KiSavo, NitzavimVayeilech
    ],
    // 6
    row![
        N, Vayeilech, Haazinu, N, Bereshis, Noach, LechLecha, Vayera, ChayeiSara, Toldos,
        Vayetzei, Vayishlach, Vayeshev, Miketz, Vayigash, Vayechi, Shemos, Vaera, Bo, Beshalach,
        Yisro, Mishpatim, Terumah, Tetzaveh, KiSisa, Vayakhel, Pekudei, Vayikra, Tzav, Shmini,
        Tazria, Metzora, N, AchreiMos, Kedoshim, Emor, Behar, Bechukosai, Bamidbar, N, Nasso,
        Behaaloscha, Shlach, Korach, ChukasBalak, Pinchas, MatosMasei, Devarim, Vaeschanan,
        Eikev, Reeh, Shoftim, KiSeitzei, KiSavo, NitzavimVayeilech
    ],
    // 7
    row![
        N, Vayeilech, Haazinu, N, Bereshis, Noach, LechLecha, Vayera, ChayeiSara, Toldos,
        Vayetzei, Vayishlach, Vayeshev, Miketz, Vayigash, Vayechi, Shemos, Vaera, Bo, Beshalach,
        Yisro, Mishpatim, Terumah, Tetzaveh, KiSisa, Vayakhel, Pekudei, Vayikra, Tzav, Shmini,
        Tazria, Metzora, N, N, AchreiMos, Kedoshim, Emor, Behar, Bechukosai, Bamidbar, Nasso,
        Behaaloscha, Shlach, Korach, Chukas, Balak, Pinchas, MatosMasei, Devarim, Vaeschanan,
        Eikev, Reeh, Shoftim, KiSeitzei, KiSavo, Nitzavim
    ],
    // 8
    row![
        N, Haazinu, N, N, Bereshis, Noach, LechLecha, Vayera, ChayeiSara, Toldos, Vayetzei,
        Vayishlach, Vayeshev, Miketz, Vayigash, Vayechi, Shemos, Vaera, Bo, Beshalach, Yisro,
        Mishpatim, Terumah, Tetzaveh, KiSisa, Vayakhel, Pekudei, Vayikra, Tzav, Shmini, Tazria,
        Metzora, AchreiMos, N, Kedoshim, Emor, Behar, Bechukosai, Bamidbar, Nasso, Behaaloscha,
        Shlach, Korach, Chukas, Balak, Pinchas, Matos, Masei, Devarim, Vaeschanan, Eikev, Reeh,
        Shoftim, KiSeitzei, KiSavo, Nitzavim
    ],
    // 9
    row![
        N, Haazinu, N, N, Bereshis, Noach, LechLecha, Vayera, ChayeiSara, Toldos, Vayetzei,
        Vayishlach, Vayeshev, Miketz, Vayigash, Vayechi, Shemos, Vaera, Bo, Beshalach, Yisro,
        Mishpatim, Terumah, Tetzaveh, KiSisa, Vayakhel, Pekudei, Vayikra, Tzav, Shmini, Tazria,
        Metzora, AchreiMos, N, Kedoshim, Emor, Behar, Bechukosai, Bamidbar, Nasso, Behaaloscha,
        Shlach, Korach, Chukas, Balak, Pinchas, Matos, Masei, Devarim, Vaeschanan, Eikev, Reeh,
        Shoftim, KiSeitzei, KiSavo, NitzavimVayeilech
    ],
    // 10
    row![
        N, N, Haazinu, N, N, Bereshis, Noach, LechLecha, Vayera, ChayeiSara, Toldos, Vayetzei,
        Vayishlach, Vayeshev, Miketz, Vayigash, Vayechi, Shemos, Vaera, Bo, Beshalach, Yisro,
        Mishpatim, Terumah, Tetzaveh, KiSisa, Vayakhel, Pekudei, Vayikra, Tzav, Shmini, Tazria,
        Metzora, N, AchreiMos, Kedoshim, Emor, Behar, Bechukosai, Bamidbar, Nasso, Behaaloscha,
        Shlach, Korach, Chukas, Balak, Pinchas, MatosMasei, Devarim, Vaeschanan, Eikev, Reeh,
        Shoftim, KiSeitzei, KiSavo, NitzavimVayeilech
    ],
    // 11
    row![
        N, N, Haazinu, N, N, Bereshis, Noach, LechLecha, Vayera, ChayeiSara, Toldos, Vayetzei,
        Vayishlach, Vayeshev, Miketz, Vayigash, Vayechi, Shemos, Vaera, Bo, Beshalach, Yisro,
        Mishpatim, Terumah, Tetzaveh, KiSisa, Vayakhel, Pekudei, Vayikra, Tzav, Shmini, Tazria,
        Metzora, N, AchreiMos, Kedoshim, Emor, Behar, Bechukosai, Bamidbar, N, Nasso,
        Behaaloscha, Shlach, Korach, ChukasBalak, Pinchas, MatosMasei, Devarim, Vaeschanan,
        Eikev, Reeh, Shoftim, KiSeitzei, KiSavo, NitzavimVayeilech
    ],
    // 12
    row![
        N, Vayeilech, Haazinu, N, Bereshis, Noach, LechLecha, Vayera, ChayeiSara, Toldos,
        Vayetzei, Vayishlach, Vayeshev, Miketz, Vayigash, Vayechi, Shemos, Vaera, Bo, Beshalach,
        Yisro, Mishpatim, Terumah, Tetzaveh, KiSisa, VayakhelPekudei, Vayikra, Tzav, N, Shmini,
        TazriaMetzora, AchreiMosKedoshim, Emor, BeharBechukosai, Bamidbar, Nasso, Behaaloscha,
        Shlach, Korach, Chukas, Balak, Pinchas, MatosMasei, Devarim, Vaeschanan, Eikev, Reeh,
        Shoftim, KiSeitzei, KiSavo, NitzavimVayeilech
    ],
    // 13
    row![
        N, Haazinu, N, N, Bereshis, Noach, LechLecha, Vayera, ChayeiSara, Toldos, Vayetzei,
        Vayishlach, Vayeshev, Miketz, Vayigash, Vayechi, Shemos, Vaera, Bo, Beshalach, Yisro,
        Mishpatim, Terumah, Tetzaveh, KiSisa, VayakhelPekudei, Vayikra, Tzav, N, Shmini,
        TazriaMetzora, AchreiMosKedoshim, Emor, Behar, Bechukosai, Bamidbar, Nasso, Behaaloscha,
        Shlach, Korach, Chukas, Balak, Pinchas, MatosMasei, Devarim, Vaeschanan, Eikev, Reeh,
        Shoftim, KiSeitzei, KiSavo, Nitzavim
    ],
    // 14
    row![
        N, Vayeilech, Haazinu, N, Bereshis, Noach, LechLecha, Vayera, ChayeiSara, Toldos,
        Vayetzei, Vayishlach, Vayeshev, Miketz, Vayigash, Vayechi, Shemos, Vaera, Bo, Beshalach,
        Yisro, Mishpatim, Terumah, Tetzaveh, KiSisa, Vayakhel, Pekudei, Vayikra, Tzav, Shmini,
        Tazria, Metzora, N, AchreiMos, Kedoshim, Emor, Behar, Bechukosai, Bamidbar, Nasso,
        Behaaloscha, Shlach, Korach, Chukas, Balak, Pinchas, MatosMasei, Devarim, Vaeschanan,
        Eikev, Reeh, Shoftim, KiSeitzei, KiSavo, NitzavimVayeilech
    ],
    // 15
    row![
        N, Vayeilech, Haazinu, N, Bereshis, Noach, LechLecha, Vayera, ChayeiSara, Toldos,
        Vayetzei, Vayishlach, Vayeshev, Miketz, Vayigash, Vayechi, Shemos, Vaera, Bo, Beshalach,
        Yisro, Mishpatim, Terumah, Tetzaveh, KiSisa, Vayakhel, Pekudei, Vayikra, Tzav, Shmini,
        Tazria, Metzora, N, AchreiMos, Kedoshim, Emor, Behar, Bechukosai, Bamidbar, Nasso,
        Behaaloscha, Shlach, Korach, Chukas, Balak, Pinchas, Matos, Masei, Devarim, Vaeschanan,
        Eikev, Reeh, Shoftim, KiSeitzei, KiSavo, Nitzavim
    ],
    // 16
    row![
        N, N, Haazinu, N, N, Bereshis, Noach, LechLecha, Vayera, ChayeiSara, Toldos, Vayetzei,
        Vayishlach, Vayeshev, Miketz, Vayigash, Vayechi, Shemos, Vaera, Bo, Beshalach, Yisro,
        Mishpatim, Terumah, Tetzaveh, KiSisa, Vayakhel, Pekudei, Vayikra, Tzav, Shmini, Tazria,
        Metzora, N, AchreiMos, Kedoshim, Emor, Behar, Bechukosai, Bamidbar, Nasso, Behaaloscha,
        Shlach, Korach, Chukas, Balak, Pinchas, MatosMasei, Devarim, Vaeschanan, Eikev, Reeh,
        Shoftim, KiSeitzei, KiSavo, NitzavimVayeilech
    ],
];

/// Reading-table row for a year, or `None` for a combination that the
/// calendar never produces.
pub fn parsha_year_type(year: i64, in_israel: bool) -> Option<u8> {
    let rosh_hashana = DayOfWeek::from_absolute(elapsed_days(year));
    let length = YearLength::of(year);
    let leap = is_leap_year(year);
    let israel = |here: u8, abroad: u8| if in_israel { here } else { abroad };

    use DayOfWeek::{Monday, Saturday, Thursday, Tuesday};
    use YearLength::{Complete, Deficient, Regular};
    let ty = match (leap, rosh_hashana, length) {
        (false, Monday, Deficient) => 0,
        (false, Monday, Complete) => israel(12, 1),
        (false, Tuesday, _) => israel(12, 1),
        (false, Thursday, Regular) => israel(13, 2),
        (false, Thursday, Complete) => 3,
        (false, Saturday, Deficient) => 4,
        (false, Saturday, Complete) => 5,
        (true, Monday, Deficient) => israel(14, 6),
        (true, Monday, Complete) => israel(15, 7),
        (true, Tuesday, _) => israel(15, 7),
        (true, Thursday, Deficient) => 8,
        (true, Thursday, Complete) => 9,
        (true, Saturday, Deficient) => 10,
        (true, Saturday, Complete) => israel(16, 11),
        _ => return None,
    };
    Some(ty)
}

impl ObservanceContext {
    /// Reading-table row for this date's year and locale.
    pub fn parsha_year_type(&self) -> Option<u8> {
        parsha_year_type(self.date().year(), self.in_israel())
    }

    /// This Shabbos's weekly reading; `None` on weekdays and on a Shabbos
    /// that is a festival.
    pub fn parsha(&self) -> Option<Parsha> {
        let date = self.date();
        if date.weekday() != DayOfWeek::Saturday {
            return None;
        }
        let row = PARSHA_LIST.get(usize::from(self.parsha_year_type()?))?;
        let rosh_hashana = DayOfWeek::from_absolute(date.elapsed_days());
        let day = i64::from(rosh_hashana.index()) + date.days_since_start_of_year();
        let week = usize::try_from(day / 7).ok()?;
        row.get(week).copied().flatten()
    }

    /// Reading of the next Shabbos that has one, not counting today.
    ///
    /// Festival Shabbosos are skipped, looking at most
    /// [`MAX_UPCOMING_PARSHA_WEEKS`] Shabbosos ahead.
    pub fn upcoming_parsha(&self) -> Option<Parsha> {
        let to_shabbos = match 6 - i64::from(self.date().weekday().index()) {
            0 => 7,
            days => days,
        };
        let found = (0..MAX_UPCOMING_PARSHA_WEEKS)
            .find_map(|week| self.add_days(to_shabbos + 7 * week).parsha());
        if found.is_none() {
            warn!(date = %self.date(), bound = MAX_UPCOMING_PARSHA_WEEKS, "no reading within bound");
        }
        found
    }

    /// Which special reading, if any, this Shabbos carries.
    pub fn special_shabbos(&self) -> Option<SpecialShabbos> {
        let date = self.date();
        if date.weekday() != DayOfWeek::Saturday {
            return None;
        }
        let (month, day, leap) = (date.month(), date.day(), date.is_leap_year());

        let before_purim_month = (month == Shevat && !leap) || (month == Adar && leap);
        if before_purim_month && matches!(day, 25 | 27 | 29) {
            return Some(SpecialShabbos::Shekalim);
        }

        let purim_month = (month == Adar && !leap) || month == AdarII;
        if purim_month {
            match day {
                1 => return Some(SpecialShabbos::Shekalim),
                8 | 9 | 11 | 13 => return Some(SpecialShabbos::Zachor),
                18 | 20 | 22 | 23 => return Some(SpecialShabbos::Parah),
                25 | 27 | 29 => return Some(SpecialShabbos::HaChodesh),
                _ => {}
            }
        }

        if month == Nissan && day == 1 {
            return Some(SpecialShabbos::HaChodesh);
        }
        None
    }
}
