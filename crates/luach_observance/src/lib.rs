//! Observances over Hebrew dates.
//!
//! An [`ObservanceContext`] pairs a [`HebrewDate`](luach_calendar::HebrewDate)
//! with the Israel / diaspora flag; every predicate here is a method on it.
//!
//! - `context`: day-level predicates and derived facts (yom tov, fasts,
//!   omer, chanukah, bounded chag walks)
//! - `holiday`: the [`Holiday`] kinds in precedence order
//! - `seasonal`: Amidah insertions, Hallel, and Birkas Hachama
//! - `parsha`: the weekly reading, its year types, and special Shabbasos
//! - `kiddush_levana`: windows measured from the molad

pub mod context;
pub mod holiday;
pub mod kiddush_levana;
pub mod parsha;
pub mod seasonal;

pub use context::{MAX_CHAG_LENGTH, MAX_CHAG_START_LOOKBACK, ObservanceContext};
pub use holiday::{ALL_HOLIDAYS, Holiday, observed_tisha_beav, yom_kippur};
pub use kiddush_levana::{
    EARLIEST_3_DAYS_S, EARLIEST_7_DAYS_S, HALFWAY_BETWEEN_MOLADOS_S, KiddushLevanaTimes,
    LATEST_15_DAYS_S,
};
pub use parsha::{MAX_UPCOMING_PARSHA_WEEKS, PARSHA_LIST, Parsha, SpecialShabbos, parsha_year_type};
pub use seasonal::{BIRKAS_HACHAMA_DAY, SOLAR_CYCLE_DAYS};
