//! A Hebrew date paired with the Israel / diaspora flag.
//!
//! Every predicate here is a pure function of the date, its weekday, the
//! year's leap and length facts, and `in_israel`.

use luach_calendar::HebrewMonth::{self, *};
use luach_calendar::{HebrewDate, YearLength};
use luach_time::DayOfWeek::{self, *};
use luach_time::GregorianDate;
use tracing::warn;

use crate::holiday::{ALL_HOLIDAYS, Holiday};

/// Days searched backwards for the eve that opened a festival.
pub const MAX_CHAG_START_LOOKBACK: i64 = 31;

/// Days searched forwards for the end of a run of melacha-prohibited days.
pub const MAX_CHAG_LENGTH: i64 = 7;

/// A date together with the locale flag that selects Israel or diaspora
/// observance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObservanceContext {
    date: HebrewDate,
    in_israel: bool,
}

impl ObservanceContext {
    pub fn new(date: HebrewDate, in_israel: bool) -> Self {
        Self { date, in_israel }
    }

    pub fn from_gregorian(date: &GregorianDate, in_israel: bool) -> Self {
        Self::new(HebrewDate::from_gregorian(date), in_israel)
    }

    pub fn date(&self) -> &HebrewDate {
        &self.date
    }

    pub fn in_israel(&self) -> bool {
        self.in_israel
    }

    fn month(&self) -> HebrewMonth {
        self.date.month()
    }

    fn day(&self) -> u32 {
        self.date.day()
    }

    fn dow(&self) -> DayOfWeek {
        self.date.weekday()
    }

    fn is_leap(&self) -> bool {
        self.date.is_leap_year()
    }

    /// Adar in a common year, Adar II in a leap year.
    fn is_purim_month(&self) -> bool {
        self.month() == AdarII || (self.month() == Adar && !self.is_leap())
    }

    fn is_kislev_short(&self) -> bool {
        self.date.year_length() == YearLength::Deficient
    }

    // -----------------------------------------------------------------------
    // Navigation
    // -----------------------------------------------------------------------

    /// Same locale, `days` later.
    pub fn add_days(&self, days: i64) -> Self {
        Self::new(self.date.add_days(days), self.in_israel)
    }

    pub fn tomorrow(&self) -> Self {
        self.add_days(1)
    }

    pub fn yesterday(&self) -> Self {
        self.add_days(-1)
    }

    /// The erev that opened the festival this day belongs to, searching
    /// back at most [`MAX_CHAG_START_LOOKBACK`] days (this day included).
    pub fn chag_start(&self) -> Option<Self> {
        let found = (0..MAX_CHAG_START_LOOKBACK)
            .map(|i| self.add_days(-i))
            .find(Self::is_erev_yom_tov);
        if found.is_none() {
            warn!(date = %self.date, bound = MAX_CHAG_START_LOOKBACK, "no erev yom tov within lookback");
        }
        found
    }

    /// Last melacha-prohibited day of the festival opened by
    /// [`Self::chag_start`]; the day on which havdalah is made.
    pub fn chag_end(&self) -> Option<Self> {
        let start = self.chag_start()?;
        let mut day = start.tomorrow();
        for _ in 0..MAX_CHAG_LENGTH {
            if !day.is_assur_bemelacha() {
                return Some(day.yesterday());
            }
            day = day.tomorrow();
        }
        warn!(date = %self.date, bound = MAX_CHAG_LENGTH, "festival did not end within bound");
        None
    }

    // -----------------------------------------------------------------------
    // Holidays
    // -----------------------------------------------------------------------

    /// First holiday observed on this day, in [`Holiday`] precedence order.
    pub fn current_holiday(&self) -> Option<Holiday> {
        ALL_HOLIDAYS.into_iter().find(|h| h.observed_on(self))
    }

    /// Day before Rosh Chodesh. Erev Rosh Hashana is excluded.
    pub fn is_erev_rosh_chodesh(&self) -> bool {
        self.day() == 29 && self.month() != Elul
    }

    /// Rosh Chodesh: the 30th of any month, or the 1st other than Tishrei.
    pub fn is_rosh_chodesh(&self) -> bool {
        (self.day() == 1 && self.month() != Tishrei) || self.day() == 30
    }

    pub fn is_erev_pesach(&self) -> bool {
        self.month() == Nissan && self.day() == 14
    }

    /// Yom tov days of Pesach (15 and 21 Nissan, plus 16 and 22 outside Israel).
    pub fn is_pesach(&self) -> bool {
        self.month() == Nissan
            && (matches!(self.day(), 15 | 21) || (!self.in_israel && matches!(self.day(), 16 | 22)))
    }

    pub fn is_chol_hamoed_pesach(&self) -> bool {
        self.month() == Nissan
            && ((17..=20).contains(&self.day()) || (self.day() == 16 && self.in_israel))
    }

    /// Yom HaShoah: 27 Nissan, moved off Friday and Sunday.
    pub fn is_yom_hashoah(&self) -> bool {
        self.month() == Nissan
            && ((self.day() == 26 && self.dow() == Thursday)
                || (self.day() == 28 && self.dow() == Monday)
                || (self.day() == 27 && !matches!(self.dow(), Sunday | Friday)))
    }

    /// Yom HaZikaron: 4 Iyar, moved so that neither it nor Yom HaAtzmaut
    /// adjoins Shabbos.
    pub fn is_yom_hazikaron(&self) -> bool {
        self.month() == Iyar
            && ((self.day() == 4 && self.dow() == Tuesday)
                || (matches!(self.day(), 2 | 3) && self.dow() == Wednesday)
                || (self.day() == 5 && self.dow() == Monday))
    }

    pub fn is_yom_haatzmaut(&self) -> bool {
        self.month() == Iyar
            && ((self.day() == 5 && self.dow() == Wednesday)
                || (self.day() == 6 && self.dow() == Tuesday)
                || (matches!(self.day(), 3 | 4) && self.dow() == Thursday))
    }

    pub fn is_pesach_sheni(&self) -> bool {
        self.month() == Iyar && self.day() == 14
    }

    pub fn is_lag_baomer(&self) -> bool {
        self.month() == Iyar && self.day() == 18
    }

    pub fn is_yom_yerushalayim(&self) -> bool {
        self.month() == Iyar && self.day() == 28
    }

    pub fn is_erev_shavuos(&self) -> bool {
        self.month() == Sivan && self.day() == 5
    }

    pub fn is_shavuos(&self) -> bool {
        self.month() == Sivan && (self.day() == 6 || (!self.in_israel && self.day() == 7))
    }

    /// 17 Tammuz, postponed to Sunday when it falls on Shabbos.
    pub fn is_seventeenth_of_tammuz(&self) -> bool {
        self.month() == Tammuz
            && ((self.day() == 17 && self.dow() != Saturday)
                || (self.day() == 18 && self.dow() == Sunday))
    }

    /// 9 Av, postponed to Sunday 10 Av when it falls on Shabbos.
    pub fn is_tisha_beav(&self) -> bool {
        self.month() == Av
            && ((self.day() == 9 && self.dow() != Saturday)
                || (self.day() == 10 && self.dow() == Sunday))
    }

    pub fn is_tu_beav(&self) -> bool {
        self.month() == Av && self.day() == 15
    }

    pub fn is_erev_rosh_hashana(&self) -> bool {
        self.month() == Elul && self.day() == 29
    }

    pub fn is_rosh_hashana(&self) -> bool {
        self.month() == Tishrei && matches!(self.day(), 1 | 2)
    }

    /// 3 Tishrei, postponed to Sunday when it falls on Shabbos.
    pub fn is_fast_of_gedalia(&self) -> bool {
        self.month() == Tishrei
            && ((self.day() == 3 && self.dow() != Saturday)
                || (self.day() == 4 && self.dow() == Sunday))
    }

    pub fn is_erev_yom_kippur(&self) -> bool {
        self.month() == Tishrei && self.day() == 9
    }

    pub fn is_yom_kippur(&self) -> bool {
        self.month() == Tishrei && self.day() == 10
    }

    pub fn is_erev_succos(&self) -> bool {
        self.month() == Tishrei && self.day() == 14
    }

    /// Yom tov days of Succos; Shemini Atzeres is separate.
    pub fn is_succos(&self) -> bool {
        self.month() == Tishrei && (self.day() == 15 || (self.day() == 16 && !self.in_israel))
    }

    /// Chol hamoed Succos, not counting Hoshana Rabba.
    pub fn is_chol_hamoed_succos(&self) -> bool {
        self.month() == Tishrei
            && ((17..=20).contains(&self.day()) || (self.day() == 16 && self.in_israel))
    }

    pub fn is_hoshana_rabba(&self) -> bool {
        self.month() == Tishrei && self.day() == 21
    }

    pub fn is_shemini_atzeres(&self) -> bool {
        self.month() == Tishrei && self.day() == 22
    }

    /// 23 Tishrei outside Israel; in Israel it coincides with Shemini Atzeres.
    pub fn is_simchas_torah(&self) -> bool {
        self.month() == Tishrei && self.day() == 23 && !self.in_israel
    }

    pub fn is_erev_chanukah(&self) -> bool {
        self.month() == Kislev && self.day() == 24
    }

    /// 25 Kislev through 2 Teves, or 3 Teves when Kislev is short.
    pub fn is_chanukah(&self) -> bool {
        (self.month() == Kislev && self.day() >= 25)
            || (self.month() == Teves
                && (matches!(self.day(), 1 | 2) || (self.day() == 3 && self.is_kislev_short())))
    }

    pub fn is_tenth_of_teves(&self) -> bool {
        self.month() == Teves && self.day() == 10
    }

    pub fn is_tu_beshvat(&self) -> bool {
        self.month() == Shevat && self.day() == 15
    }

    /// 13 Adar (Adar II in a leap year), moved to Thursday when it falls on
    /// Friday or Shabbos.
    pub fn is_fast_of_esther(&self) -> bool {
        self.is_purim_month()
            && ((matches!(self.day(), 11 | 12) && self.dow() == Thursday)
                || (self.day() == 13 && !matches!(self.dow(), Friday | Saturday)))
    }

    pub fn is_purim(&self) -> bool {
        self.is_purim_month() && self.day() == 14
    }

    pub fn is_shushan_purim(&self) -> bool {
        self.is_purim_month() && self.day() == 15
    }

    pub fn is_purim_katan(&self) -> bool {
        self.is_leap() && self.month() == Adar && self.day() == 14
    }

    pub fn is_shushan_purim_katan(&self) -> bool {
        self.is_leap() && self.month() == Adar && self.day() == 15
    }

    /// Day after Shavuos.
    pub fn is_isru_chag(&self) -> bool {
        self.month() == Sivan
            && ((self.day() == 7 && self.in_israel) || (self.day() == 8 && !self.in_israel))
    }

    // -----------------------------------------------------------------------
    // Derived facts
    // -----------------------------------------------------------------------

    /// Whether the day counts as a festival.
    ///
    /// Any day with a [`Holiday`] qualifies, including minor ones such as
    /// Chanukah or Tu B'Av, except: festival eves other than Hoshana Rabba
    /// and chol hamoed Pesach, Erev Rosh Chodesh, fast days other than
    /// Yom Kippur, and Isru Chag.
    pub fn is_yom_tov(&self) -> bool {
        let Some(holiday) = self.current_holiday() else {
            return false;
        };
        let excluded = (self.is_erev_yom_tov()
            && !(self.is_hoshana_rabba() || self.is_chol_hamoed_pesach()))
            || holiday == Holiday::ErevRoshChodesh
            || (self.is_taanis() && !self.is_yom_kippur())
            || self.is_isru_chag();
        !excluded
    }

    /// Festival days on which melacha is forbidden.
    pub fn is_yom_tov_assur_bemelacha(&self) -> bool {
        self.is_pesach()
            || self.is_shavuos()
            || self.is_succos()
            || self.is_shemini_atzeres()
            || self.is_simchas_torah()
            || self.is_rosh_hashana()
            || self.is_yom_kippur()
    }

    /// Shabbos or a melacha-prohibited festival day.
    pub fn is_assur_bemelacha(&self) -> bool {
        self.dow() == Saturday || self.is_yom_tov_assur_bemelacha()
    }

    /// Eve of a melacha-prohibited festival (including the eve of the last
    /// days of Pesach and Hoshana Rabba).
    pub fn is_erev_yom_tov(&self) -> bool {
        self.is_erev_pesach()
            || self.is_erev_shavuos()
            || self.is_erev_succos()
            || self.is_erev_rosh_hashana()
            || self.is_erev_yom_kippur()
            || self.is_hoshana_rabba()
            || (self.is_chol_hamoed_pesach() && self.day() == 20)
    }

    /// First day of a two-day festival: the first day of Rosh Hashana
    /// everywhere, and the first days of Pesach, Succos, Shemini Atzeres
    /// and Shavuos outside Israel.
    pub fn is_erev_yom_tov_sheni(&self) -> bool {
        if self.month() == Tishrei && self.day() == 1 {
            return true;
        }
        if self.in_israel {
            return false;
        }
        match self.month() {
            Nissan => matches!(self.day(), 15 | 21),
            Tishrei => matches!(self.day(), 15 | 22),
            Sivan => self.day() == 6,
            _ => false,
        }
    }

    pub fn is_tomorrow_shabbos_or_yom_tov(&self) -> bool {
        self.dow() == Friday || self.is_erev_yom_tov() || self.is_erev_yom_tov_sheni()
    }

    pub fn is_aseres_yemei_teshuva(&self) -> bool {
        self.month() == Tishrei && self.day() <= 10
    }

    pub fn is_chol_hamoed(&self) -> bool {
        self.is_chol_hamoed_pesach() || self.is_chol_hamoed_succos()
    }

    /// 1-based day of chol hamoed, or `None` outside it.
    pub fn chol_hamoed_day(&self) -> Option<u32> {
        if !self.is_chol_hamoed() {
            return None;
        }
        let run = (0..MAX_CHAG_LENGTH)
            .take_while(|&i| self.add_days(-i).is_chol_hamoed())
            .count();
        Some(run as u32)
    }

    pub fn is_taanis(&self) -> bool {
        self.is_seventeenth_of_tammuz()
            || self.is_tisha_beav()
            || self.is_yom_kippur()
            || self.is_fast_of_esther()
            || self.is_fast_of_gedalia()
            || self.is_tenth_of_teves()
    }

    /// Fast of the firstborn: 14 Nissan, or Thursday 12 Nissan when
    /// Erev Pesach is Shabbos.
    pub fn is_taanis_bechoros(&self) -> bool {
        self.month() == Nissan
            && ((self.day() == 14 && self.dow() != Saturday)
                || (self.day() == 12 && self.dow() == Thursday))
    }

    /// Day of Chanukah (1..=8), or `None`.
    pub fn day_of_chanukah(&self) -> Option<u32> {
        if !self.is_chanukah() {
            return None;
        }
        if self.month() == Kislev {
            Some(self.day() - 24)
        } else if self.is_kislev_short() {
            Some(self.day() + 5)
        } else {
            Some(self.day() + 6)
        }
    }

    /// Day of the Omer (1..=49), or `None`.
    pub fn day_of_omer(&self) -> Option<u32> {
        match (self.month(), self.day()) {
            (Nissan, d) if d >= 16 => Some(d - 15),
            (Iyar, d) => Some(d + 15),
            (Sivan, d) if d < 6 => Some(d + 44),
            _ => None,
        }
    }

    /// Shabbos on the 29th or 30th, with Rosh Chodesh the next day.
    pub fn is_machar_chodesh(&self) -> bool {
        self.dow() == Saturday && matches!(self.day(), 29 | 30)
    }

    /// Shabbos before Rosh Chodesh, when the new month is announced.
    /// Not observed before Tishrei.
    pub fn is_shabbos_mevorchim(&self) -> bool {
        self.dow() == Saturday && self.month() != Elul && (23..=29).contains(&self.day())
    }
}
