//! Golden-value integration tests for holidays and derived observances.
//!
//! Dates are taken from published luachos for 5782–5786.

use luach_calendar::{HebrewDate, HebrewMonth};
use luach_observance::{
    Holiday, ObservanceContext, Parsha, SpecialShabbos, observed_tisha_beav, yom_kippur,
};
use luach_time::GregorianDate;
use proptest::prelude::*;

fn greg(y: i32, m: u32, d: u32) -> GregorianDate {
    GregorianDate::new(y, m, d).unwrap()
}

fn diaspora(y: i32, m: u32, d: u32) -> ObservanceContext {
    ObservanceContext::from_gregorian(&greg(y, m, d), false)
}

fn israel(y: i32, m: u32, d: u32) -> ObservanceContext {
    ObservanceContext::from_gregorian(&greg(y, m, d), true)
}

// ---------------------------------------------------------------------------
// Festival dates
// ---------------------------------------------------------------------------

#[test]
fn festival_calendar_5784_to_5786() {
    let cases = [
        (greg(2023, 9, 25), Holiday::YomKippur),
        (greg(2023, 12, 8), Holiday::Chanukah),
        (greg(2024, 2, 23), Holiday::PurimKatan),
        (greg(2024, 3, 24), Holiday::Purim),
        (greg(2024, 4, 22), Holiday::ErevPesach),
        (greg(2024, 4, 23), Holiday::Pesach),
        (greg(2024, 7, 23), Holiday::SeventeenthOfTammuz),
        (greg(2024, 10, 3), Holiday::RoshHashana),
        (greg(2025, 3, 13), Holiday::FastOfEsther),
        (greg(2025, 3, 14), Holiday::Purim),
        (greg(2025, 4, 13), Holiday::Pesach),
        (greg(2025, 6, 2), Holiday::Shavuos),
        (greg(2025, 7, 13), Holiday::SeventeenthOfTammuz),
        (greg(2025, 9, 23), Holiday::RoshHashana),
    ];
    for (civil, expected) in cases {
        let ctx = ObservanceContext::from_gregorian(&civil, false);
        assert_eq!(ctx.current_holiday(), Some(expected), "{civil}");
    }
}

#[test]
fn pesach_first_day_5784() {
    let date = HebrewDate::new(5784, HebrewMonth::Nissan, 15).unwrap();
    assert_eq!(date.to_gregorian(), greg(2024, 4, 23));
    let ctx = ObservanceContext::new(date, false);
    assert_eq!(ctx.current_holiday(), Some(Holiday::Pesach));
    assert!(ctx.is_yom_tov());
    assert!(ctx.is_yom_tov_assur_bemelacha());
    assert!(ctx.is_erev_yom_tov_sheni());
    assert_eq!(ctx.day_of_omer(), None);
    assert_eq!(ctx.tomorrow().day_of_omer(), Some(1));
}

#[test]
fn tisha_beav_postponed_from_shabbos() {
    // 9 Av 5782 was Shabbos, 2022-08-06.
    assert_eq!(diaspora(2022, 8, 6).current_holiday(), None);
    assert_eq!(diaspora(2022, 8, 7).current_holiday(), Some(Holiday::TishaBeav));
    assert_eq!(observed_tisha_beav(5782).to_gregorian(), greg(2022, 8, 7));
    assert_eq!(observed_tisha_beav(5784).to_gregorian(), greg(2024, 8, 13));
    assert_eq!(yom_kippur(5784).to_gregorian(), greg(2023, 9, 25));
}

#[test]
fn israel_holidays_shift_5784_and_5785() {
    // 5784: 4 Iyar on Sunday, so Yom HaZikaron Monday and Yom HaAtzmaut Tuesday.
    assert_eq!(israel(2024, 5, 12).current_holiday(), None);
    assert_eq!(israel(2024, 5, 13).current_holiday(), Some(Holiday::YomHazikaron));
    assert_eq!(israel(2024, 5, 14).current_holiday(), Some(Holiday::YomHaatzmaut));
    // 5785: 4 Iyar on Friday, both move back to Wednesday / Thursday.
    assert_eq!(israel(2025, 4, 30).current_holiday(), Some(Holiday::YomHazikaron));
    assert_eq!(israel(2025, 5, 1).current_holiday(), Some(Holiday::YomHaatzmaut));
    assert_eq!(israel(2025, 5, 2).current_holiday(), None);
}

#[test]
fn taanis_bechoros_moves_before_shabbos_erev_pesach() {
    // Erev Pesach 5785 was Shabbos 2025-04-12.
    assert!(diaspora(2025, 4, 10).is_taanis_bechoros());
    assert!(!diaspora(2025, 4, 12).is_taanis_bechoros());
    assert!(diaspora(2024, 4, 22).is_taanis_bechoros());
}

// ---------------------------------------------------------------------------
// Bounded festival walks
// ---------------------------------------------------------------------------

#[test]
fn chag_bounds_pesach_diaspora() {
    let second_day = diaspora(2024, 4, 24);
    let start = second_day.chag_start().unwrap();
    assert_eq!(start.date().to_gregorian(), greg(2024, 4, 22));
    let end = second_day.chag_end().unwrap();
    assert_eq!(end.date().to_gregorian(), greg(2024, 4, 24));
}

#[test]
fn chag_end_runs_through_shabbos() {
    // Succos 5785 outside Israel: Thursday, Friday, then Shabbos.
    let end = diaspora(2024, 10, 17).chag_end().unwrap();
    assert_eq!(end.date().to_gregorian(), greg(2024, 10, 19));
}

#[test]
fn chanukah_in_short_kislev_year() {
    // 5784 has a 29-day Kislev, so the eighth day is 3 Teves.
    assert_eq!(diaspora(2023, 12, 8).day_of_chanukah(), Some(1));
    assert_eq!(diaspora(2023, 12, 15).day_of_chanukah(), Some(8));
    assert_eq!(diaspora(2023, 12, 16).day_of_chanukah(), None);
}

#[test]
fn special_shabbasos_5785() {
    // Common year: Shekalim 1 Adar, Zachor 8 Adar, Parah 22 Adar,
    // HaChodesh 29 Adar.
    assert_eq!(diaspora(2025, 2, 27).special_shabbos(), None);
    assert_eq!(diaspora(2025, 3, 1).special_shabbos(), Some(SpecialShabbos::Shekalim));
    assert_eq!(diaspora(2025, 3, 8).special_shabbos(), Some(SpecialShabbos::Zachor));
    assert_eq!(diaspora(2025, 3, 15).special_shabbos(), None);
    assert_eq!(diaspora(2025, 3, 22).special_shabbos(), Some(SpecialShabbos::Parah));
    assert_eq!(diaspora(2025, 3, 29).special_shabbos(), Some(SpecialShabbos::HaChodesh));
}

// ---------------------------------------------------------------------------
// Weekly reading
// ---------------------------------------------------------------------------

#[test]
fn parsha_in_teves_5784() {
    assert_eq!(diaspora(2023, 12, 20).parsha(), None);
    assert_eq!(diaspora(2023, 12, 23).parsha(), Some(Parsha::Vayigash));
    assert_eq!(diaspora(2023, 12, 30).parsha(), Some(Parsha::Vayechi));
}

#[test]
fn upcoming_parsha_from_any_day() {
    assert_eq!(diaspora(2023, 12, 20).upcoming_parsha(), Some(Parsha::Vayigash));
    // From Shabbos the next week's reading is returned.
    assert_eq!(diaspora(2023, 12, 23).upcoming_parsha(), Some(Parsha::Vayechi));
    assert_eq!(diaspora(2023, 12, 30).upcoming_parsha(), Some(Parsha::Shemos));
    // Shabbos chol hamoed Pesach has its own reading.
    assert_eq!(diaspora(2024, 4, 27).parsha(), None);
    assert_eq!(diaspora(2024, 4, 27).upcoming_parsha(), Some(Parsha::AchreiMos));
    assert_eq!(diaspora(2024, 5, 4).parsha(), Some(Parsha::AchreiMos));
}

#[test]
fn upcoming_parsha_crosses_rosh_hashana() {
    assert_eq!(diaspora(2024, 9, 28).parsha(), Some(Parsha::NitzavimVayeilech));
    assert_eq!(diaspora(2024, 9, 28).upcoming_parsha(), Some(Parsha::Haazinu));
    assert_eq!(diaspora(2024, 10, 5).parsha(), Some(Parsha::Haazinu));
    // Yom Kippur and chol hamoed Succos fall on the next two Shabbasos.
    assert_eq!(diaspora(2024, 10, 5).upcoming_parsha(), Some(Parsha::Bereshis));
    assert_eq!(diaspora(2024, 10, 26).parsha(), Some(Parsha::Bereshis));
}

#[test]
fn israel_runs_a_week_ahead_after_pesach_5782() {
    // The eighth day of Pesach fell on Shabbos 2022-04-23.
    assert_eq!(diaspora(2022, 4, 23).parsha(), None);
    assert_eq!(israel(2022, 4, 23).parsha(), Some(Parsha::AchreiMos));
    assert_eq!(diaspora(2022, 4, 30).parsha(), Some(Parsha::AchreiMos));
    assert_eq!(israel(2022, 4, 30).parsha(), Some(Parsha::Kedoshim));
}

#[test]
fn combined_readings_5784() {
    assert_eq!(diaspora(2024, 6, 8).parsha(), Some(Parsha::Bamidbar));
    assert_eq!(diaspora(2024, 8, 3).parsha(), Some(Parsha::MatosMasei));
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn current_holiday_is_observed(abs in 700_000i64..760_000, in_israel: bool) {
        let ctx = ObservanceContext::new(HebrewDate::from_absolute(abs), in_israel);
        if let Some(holiday) = ctx.current_holiday() {
            prop_assert!(holiday.observed_on(&ctx));
        }
        if ctx.is_yom_tov() {
            prop_assert!(ctx.current_holiday().is_some());
        }
    }

    #[test]
    fn omer_count_in_range(abs in 700_000i64..760_000) {
        let ctx = ObservanceContext::new(HebrewDate::from_absolute(abs), false);
        if let Some(day) = ctx.day_of_omer() {
            prop_assert!((1..=49).contains(&day));
            prop_assert_eq!(ctx.tomorrow().day_of_omer().unwrap_or(50), day + 1);
        }
    }
}
