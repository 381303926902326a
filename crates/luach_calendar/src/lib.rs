//! Hebrew calendar arithmetic.
//!
//! Leaf-first modules:
//! - `constants`: chalakim units and epochs
//! - `year`: leap years, year-length categories, month lengths
//! - `molad`: mean new moon in chalakim and on the civil clock
//! - `dechiyos`: Rosh Hashana postponements and elapsed days
//! - `bridge`: Hebrew date ↔ absolute day
//! - `date`: the `HebrewDate` value type
//!
//! Everything below `date` is a total integer function; validation happens
//! only in `HebrewDate` constructors.

pub mod bridge;
pub mod constants;
pub mod date;
pub mod dechiyos;
pub mod error;
pub mod molad;
pub mod month;
pub mod year;

pub use bridge::{
    absolute_to_hebrew, days_since_start_of_year, hebrew_to_absolute, rosh_hashana_absolute,
};
pub use date::HebrewDate;
pub use dechiyos::{Dechiya, RoshHashanaResolution, add_dechiyos, elapsed_days, resolve_rosh_hashana};
pub use error::CalendarError;
pub use molad::{
    Molad, MoladDate, MoladInstant, chalakim_since_molad_tohu, molad_from_chalakim,
    molad_to_absolute, months_elapsed,
};
pub use month::{ALL_MONTHS, HebrewMonth, last_month_of_year, month_of_year, months_in_year};
pub use year::{
    YearInfo, YearLength, days_in_month, days_in_year, is_cheshvan_long, is_kislev_short,
    is_leap_year, year_info,
};
