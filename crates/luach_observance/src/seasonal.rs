//! Seasonal insertions in the Amidah, festival Hallel, and Birkas Hachama.
//!
//! The diaspora start of Vesein Tal Umatar is counted from Tekufas Tishrei
//! under Tekufas Shmuel (a 365.25-day solar year). Tekufas Tishrei of year 1
//! fell 12 days 15 hours before Rosh Hashana, so sixty days from the
//! tekufah is 47 days 9 hours into the count.

use luach_calendar::{HebrewMonth, hebrew_to_absolute};

use crate::context::ObservanceContext;

/// Days in a 28-year Tekufas Shmuel cycle (28 × 365.25).
pub const SOLAR_CYCLE_DAYS: i64 = 10_227;

/// Day of the solar cycle on which Birkas Hachama falls.
pub const BIRKAS_HACHAMA_DAY: i64 = 172;

impl ObservanceContext {
    /// Whole days elapsed since Tekufas Tishrei of this year.
    pub fn tekufas_tishrei_elapsed_days(&self) -> i64 {
        let date = self.date();
        let days = date.elapsed_days() + date.days_since_start_of_year() - 1;
        // floor(days + 0.5 - (year - 1) * 365.25), in quarter days.
        (4 * days + 2 - 1461 * (date.year() - 1)).div_euclid(4)
    }

    /// Whether Vesein Tal Umatar is said in Birkas Hashanim today.
    ///
    /// From the evening of 7 Cheshvan in Israel, or 60 days after Tekufas
    /// Tishrei elsewhere, until Pesach.
    pub fn is_vesein_tal_umatar_recited(&self) -> bool {
        let (month, day) = (self.date().month(), self.date().day());
        if month == HebrewMonth::Nissan && day < 15 {
            return true;
        }
        if month.number() < HebrewMonth::Cheshvan.number() {
            return false;
        }
        if self.in_israel() {
            return month != HebrewMonth::Cheshvan || day >= 7;
        }
        self.tekufas_tishrei_elapsed_days() >= 47
    }

    pub fn is_vesein_beracha_recited(&self) -> bool {
        !self.is_vesein_tal_umatar_recited()
    }

    /// First day Vesein Tal Umatar is said.
    ///
    /// Outside Israel the start is never Friday night, so a start that
    /// would fall on Shabbos moves to Sunday.
    pub fn is_vesein_tal_umatar_start_date(&self) -> bool {
        if self.in_israel() {
            return self.date().month() == HebrewMonth::Cheshvan && self.date().day() == 7;
        }
        match self.date().weekday() {
            luach_time::DayOfWeek::Saturday => false,
            luach_time::DayOfWeek::Sunday => {
                matches!(self.tekufas_tishrei_elapsed_days(), 47 | 48)
            }
            _ => self.tekufas_tishrei_elapsed_days() == 47,
        }
    }

    /// Vesein Tal Umatar starts at Maariv tonight.
    pub fn is_vesein_tal_umatar_starting_tonight(&self) -> bool {
        if self.in_israel() {
            return self.date().month() == HebrewMonth::Cheshvan && self.date().day() == 6;
        }
        match self.date().weekday() {
            luach_time::DayOfWeek::Friday => false,
            luach_time::DayOfWeek::Saturday => {
                matches!(self.tekufas_tishrei_elapsed_days(), 46 | 47)
            }
            _ => self.tekufas_tishrei_elapsed_days() == 46,
        }
    }

    /// Mashiv Haruach: strictly between Shemini Atzeres and the first day
    /// of Pesach of the same year.
    pub fn is_mashiv_haruach_recited(&self) -> bool {
        let year = self.date().year();
        let abs = self.date().to_absolute();
        let start = hebrew_to_absolute(year, HebrewMonth::Tishrei, 22);
        let end = hebrew_to_absolute(year, HebrewMonth::Nissan, 15);
        abs > start && abs < end
    }

    pub fn is_mashiv_haruach_start_date(&self) -> bool {
        self.date().month() == HebrewMonth::Tishrei && self.date().day() == 22
    }

    pub fn is_mashiv_haruach_end_date(&self) -> bool {
        self.date().month() == HebrewMonth::Nissan && self.date().day() == 15
    }

    /// Morid Hatal, including the two changeover days when either
    /// insertion may be heard.
    pub fn is_morid_hatal_recited(&self) -> bool {
        !self.is_mashiv_haruach_recited()
            || self.is_mashiv_haruach_start_date()
            || self.is_mashiv_haruach_end_date()
    }

    /// Hallel, whole or partial, is said at Shacharis.
    pub fn is_hallel_recited(&self) -> bool {
        let (month, day) = (self.date().month(), self.date().day());
        let last_pesach = if self.in_israel() { 21 } else { 22 };
        let last_succos = if self.in_israel() { 22 } else { 23 };
        (month == HebrewMonth::Nissan && (15..=last_pesach).contains(&day))
            || (month == HebrewMonth::Tishrei && (15..=last_succos).contains(&day))
            || self.is_shavuos()
            || self.is_rosh_chodesh()
            || self.is_chanukah()
            || self.is_yom_haatzmaut()
            || self.is_yom_yerushalayim()
    }

    /// Whole Hallel. Rosh Chodesh outside Chanukah and the later days of
    /// Pesach get the shortened form.
    pub fn is_hallel_shalem_recited(&self) -> bool {
        if !self.is_hallel_recited() {
            return false;
        }
        if self.is_rosh_chodesh() && !self.is_chanukah() {
            return false;
        }
        let last_whole = if self.in_israel() { 15 } else { 16 };
        !(self.date().month() == HebrewMonth::Nissan && self.date().day() > last_whole)
    }

    pub fn is_al_hanissim_recited(&self) -> bool {
        self.is_purim() || self.is_chanukah()
    }

    /// Yaaleh Veyavo: Rosh Chodesh and every festival day, chol hamoed
    /// included.
    pub fn is_yaaleh_veyavo_recited(&self) -> bool {
        let (month, day) = (self.date().month(), self.date().day());
        (month == HebrewMonth::Nissan && (15..=21).contains(&day))
            || (month == HebrewMonth::Tishrei && (15..=21).contains(&day))
            || self.is_pesach()
            || self.is_shavuos()
            || self.is_rosh_hashana()
            || self.is_yom_kippur()
            || self.is_shemini_atzeres()
            || self.is_simchas_torah()
            || self.is_rosh_chodesh()
    }

    /// Mizmor Lesoda. Not said on days melacha is forbidden, nor on Erev
    /// Yom Kippur or from Erev Pesach through chol hamoed.
    pub fn is_mizmor_lesoda_recited(&self) -> bool {
        !(self.is_assur_bemelacha()
            || self.is_erev_yom_kippur()
            || self.is_erev_pesach()
            || self.is_chol_hamoed_pesach())
    }

    /// Birkas Hachama, once every 28 years.
    pub fn is_birkas_hachama(&self) -> bool {
        let date = self.date();
        let days = date.elapsed_days() + date.days_since_start_of_year();
        days.rem_euclid(SOLAR_CYCLE_DAYS) == BIRKAS_HACHAMA_DAY
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use luach_time::GregorianDate;

    fn at(y: i32, m: u32, d: u32, in_israel: bool) -> ObservanceContext {
        ObservanceContext::from_gregorian(&GregorianDate::new(y, m, d).unwrap(), in_israel)
    }

    #[test]
    fn tekufah_count_december() {
        assert_eq!(at(2023, 12, 3, false).tekufas_tishrei_elapsed_days(), 44);
        assert_eq!(at(2023, 12, 5, false).tekufas_tishrei_elapsed_days(), 46);
        assert_eq!(at(2024, 12, 5, false).tekufas_tishrei_elapsed_days(), 47);
    }

    #[test]
    fn diaspora_start_of_tal_umatar() {
        assert!(!at(2023, 12, 5, false).is_vesein_tal_umatar_recited());
        assert!(at(2023, 12, 5, false).is_vesein_tal_umatar_starting_tonight());
        assert!(at(2023, 12, 6, false).is_vesein_tal_umatar_recited());
        assert!(at(2023, 12, 6, false).is_vesein_tal_umatar_start_date());
        assert!(at(2023, 12, 5, false).is_vesein_beracha_recited());
    }

    #[test]
    fn israel_start_of_tal_umatar() {
        // 7 Cheshvan 5784 = 2023-10-22.
        assert!(!at(2023, 10, 21, true).is_vesein_tal_umatar_recited());
        assert!(at(2023, 10, 21, true).is_vesein_tal_umatar_starting_tonight());
        assert!(at(2023, 10, 22, true).is_vesein_tal_umatar_recited());
        assert!(at(2023, 10, 22, true).is_vesein_tal_umatar_start_date());
        assert!(!at(2023, 10, 22, false).is_vesein_tal_umatar_recited());
    }

    #[test]
    fn tal_umatar_until_pesach() {
        // 14 Nissan 5784 = 2024-04-22, 15 Nissan = 2024-04-23.
        assert!(at(2024, 4, 22, false).is_vesein_tal_umatar_recited());
        assert!(!at(2024, 4, 23, false).is_vesein_tal_umatar_recited());
    }

    #[test]
    fn mashiv_haruach_window() {
        // 22 Tishrei 5784 = 2023-10-07.
        let start = at(2023, 10, 7, false);
        assert!(!start.is_mashiv_haruach_recited());
        assert!(start.is_mashiv_haruach_start_date());
        assert!(start.is_morid_hatal_recited());
        let winter = at(2024, 1, 15, false);
        assert!(winter.is_mashiv_haruach_recited());
        assert!(!winter.is_morid_hatal_recited());
        let pesach = at(2024, 4, 23, false);
        assert!(!pesach.is_mashiv_haruach_recited());
        assert!(pesach.is_mashiv_haruach_end_date());
        assert!(at(2024, 7, 1, false).is_morid_hatal_recited());
    }

    #[test]
    fn birkas_hachama_dates() {
        for y in [1981, 2009, 2037] {
            assert!(at(y, 4, 8, false).is_birkas_hachama(), "{y}");
            assert!(!at(y, 4, 9, false).is_birkas_hachama(), "{y}");
        }
        assert!(!at(2023, 4, 8, false).is_birkas_hachama());
    }

    #[test]
    fn hallel_on_festivals() {
        // 15 Nissan 5784 = 2024-04-23; 22 Nissan = 2024-04-30.
        assert!(at(2024, 4, 23, true).is_hallel_recited());
        assert!(at(2024, 4, 30, false).is_hallel_recited());
        assert!(!at(2024, 4, 30, true).is_hallel_recited());
        // 15 and 23 Tishrei 5785.
        assert!(at(2024, 10, 17, true).is_hallel_recited());
        assert!(at(2024, 10, 25, false).is_hallel_recited());
        assert!(!at(2024, 10, 25, true).is_hallel_recited());
        // 7 Sivan 5784 is Shavuos only outside Israel.
        assert!(at(2024, 6, 12, true).is_hallel_shalem_recited());
        assert!(at(2024, 6, 13, false).is_hallel_recited());
        assert!(!at(2024, 6, 13, true).is_hallel_recited());
        // Yom HaAtzmaut moved to Tuesday 6 Iyar.
        assert!(at(2024, 5, 14, true).is_hallel_recited());
        assert!(!at(2024, 1, 15, false).is_hallel_recited());
    }

    #[test]
    fn partial_hallel() {
        // 1 Shevat 5784.
        let rosh_chodesh = at(2024, 1, 11, false);
        assert!(rosh_chodesh.is_hallel_recited());
        assert!(!rosh_chodesh.is_hallel_shalem_recited());
        // 1 Teves is Rosh Chodesh during Chanukah.
        assert!(at(2023, 12, 13, false).is_hallel_shalem_recited());
        // 16 Nissan is yom tov only outside Israel.
        assert!(at(2024, 4, 24, false).is_hallel_shalem_recited());
        assert!(!at(2024, 4, 24, true).is_hallel_shalem_recited());
        assert!(at(2024, 4, 24, true).is_hallel_recited());
        assert!(!at(2024, 4, 25, false).is_hallel_shalem_recited());
    }

    #[test]
    fn al_hanissim_days() {
        assert!(at(2023, 12, 13, false).is_al_hanissim_recited());
        assert!(at(2024, 3, 24, false).is_al_hanissim_recited());
        assert!(!at(2024, 1, 11, false).is_al_hanissim_recited());
    }

    #[test]
    fn yaaleh_veyavo_days() {
        assert!(at(2024, 1, 11, false).is_yaaleh_veyavo_recited());
        assert!(at(2024, 4, 25, true).is_yaaleh_veyavo_recited());
        assert!(at(2024, 4, 30, false).is_yaaleh_veyavo_recited());
        assert!(at(2023, 9, 25, false).is_yaaleh_veyavo_recited());
        // 21 Tishrei 5785, Hoshana Rabba.
        assert!(at(2024, 10, 23, true).is_yaaleh_veyavo_recited());
        assert!(!at(2024, 1, 15, false).is_yaaleh_veyavo_recited());
        assert!(!at(2024, 3, 24, false).is_yaaleh_veyavo_recited());
    }

    #[test]
    fn mizmor_lesoda_days() {
        assert!(at(2024, 1, 15, false).is_mizmor_lesoda_recited());
        assert!(!at(2023, 9, 24, false).is_mizmor_lesoda_recited());
        assert!(!at(2023, 9, 25, false).is_mizmor_lesoda_recited());
        assert!(!at(2024, 4, 22, false).is_mizmor_lesoda_recited());
        assert!(!at(2024, 4, 25, false).is_mizmor_lesoda_recited());
        // Shabbos 2023-12-23.
        assert!(!at(2023, 12, 23, false).is_mizmor_lesoda_recited());
    }
}
