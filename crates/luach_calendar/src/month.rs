//! Hebrew months and their placement within a year.
//!
//! Months are numbered from Nissan (1) as in the Torah; the civil year
//! starts at Tishrei (7). Adar (12) is Adar I in a leap year, and Adar II
//! (13) exists only in leap years.

use std::str::FromStr;

use crate::error::CalendarError;
use crate::year::is_leap_year;

/// A Hebrew month, numbered Nissan = 1 .. Adar = 12, Adar II = 13.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[allow(missing_docs)]
pub enum HebrewMonth {
    Nissan,
    Iyar,
    Sivan,
    Tammuz,
    Av,
    Elul,
    Tishrei,
    Cheshvan,
    Kislev,
    Teves,
    Shevat,
    Adar,
    AdarII,
}

/// All 13 months in numeric order (index 0 = Nissan).
pub const ALL_MONTHS: [HebrewMonth; 13] = [
    HebrewMonth::Nissan,
    HebrewMonth::Iyar,
    HebrewMonth::Sivan,
    HebrewMonth::Tammuz,
    HebrewMonth::Av,
    HebrewMonth::Elul,
    HebrewMonth::Tishrei,
    HebrewMonth::Cheshvan,
    HebrewMonth::Kislev,
    HebrewMonth::Teves,
    HebrewMonth::Shevat,
    HebrewMonth::Adar,
    HebrewMonth::AdarII,
];

impl HebrewMonth {
    /// 1-based month number (Nissan = 1, Adar II = 13).
    pub const fn number(self) -> u32 {
        match self {
            Self::Nissan => 1,
            Self::Iyar => 2,
            Self::Sivan => 3,
            Self::Tammuz => 4,
            Self::Av => 5,
            Self::Elul => 6,
            Self::Tishrei => 7,
            Self::Cheshvan => 8,
            Self::Kislev => 9,
            Self::Teves => 10,
            Self::Shevat => 11,
            Self::Adar => 12,
            Self::AdarII => 13,
        }
    }

    /// Month for a 1-based number, or `None` outside 1..=13.
    pub fn from_number(n: u32) -> Option<Self> {
        if (1..=13).contains(&n) {
            Some(ALL_MONTHS[n as usize - 1])
        } else {
            None
        }
    }

    /// Transliterated name. Adar is reported as plain "Adar"; see
    /// [`Self::name_in_year`] for the leap-year form.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Nissan => "Nissan",
            Self::Iyar => "Iyar",
            Self::Sivan => "Sivan",
            Self::Tammuz => "Tammuz",
            Self::Av => "Av",
            Self::Elul => "Elul",
            Self::Tishrei => "Tishrei",
            Self::Cheshvan => "Cheshvan",
            Self::Kislev => "Kislev",
            Self::Teves => "Teves",
            Self::Shevat => "Shevat",
            Self::Adar => "Adar",
            Self::AdarII => "Adar II",
        }
    }

    /// Name as written in `year`: Adar becomes "Adar I" in a leap year.
    pub fn name_in_year(self, year: i64) -> &'static str {
        if self == Self::Adar && is_leap_year(year) {
            "Adar I"
        } else {
            self.name()
        }
    }

    /// Whether this month occurs in `year`.
    pub fn occurs_in(self, year: i64) -> bool {
        self != Self::AdarII || is_leap_year(year)
    }

    /// The month that follows this one in `year`.
    ///
    /// Adar is followed by Adar II in a leap year and by Nissan otherwise;
    /// Elul is followed by Tishrei of the same numbering scheme (the year
    /// number itself changes at Tishrei, which callers track).
    pub fn next_in_year(self, year: i64) -> Self {
        match self {
            Self::Adar if is_leap_year(year) => Self::AdarII,
            Self::Adar | Self::AdarII => Self::Nissan,
            other => ALL_MONTHS[other.number() as usize],
        }
    }
}

impl std::fmt::Display for HebrewMonth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl TryFrom<u32> for HebrewMonth {
    type Error = CalendarError;

    fn try_from(n: u32) -> Result<Self, Self::Error> {
        Self::from_number(n).ok_or(CalendarError::MonthOutOfRange(n))
    }
}

impl FromStr for HebrewMonth {
    type Err = CalendarError;

    /// Case-insensitive; accepts the names above, common alternate
    /// spellings, and month numbers.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, ' ' | '\'' | '-' | '_'))
            .flat_map(char::to_lowercase)
            .collect();
        if let Ok(n) = key.parse::<u32>() {
            return Self::try_from(n);
        }
        let month = match key.as_str() {
            "nissan" | "nisan" => Self::Nissan,
            "iyar" | "iyyar" => Self::Iyar,
            "sivan" => Self::Sivan,
            "tammuz" | "tamuz" => Self::Tammuz,
            "av" | "menachemav" => Self::Av,
            "elul" => Self::Elul,
            "tishrei" | "tishri" => Self::Tishrei,
            "cheshvan" | "heshvan" | "marcheshvan" | "marheshvan" => Self::Cheshvan,
            "kislev" => Self::Kislev,
            "teves" | "tevet" => Self::Teves,
            "shevat" | "shvat" => Self::Shevat,
            "adar" | "adari" | "adar1" => Self::Adar,
            "adarii" | "adar2" | "adarbeis" | "adarsheni" => Self::AdarII,
            _ => return Err(CalendarError::UnknownMonth(s.trim().to_string())),
        };
        Ok(month)
    }
}

// ---------------------------------------------------------------------------
// Month ordering within a year
// ---------------------------------------------------------------------------

/// Number of months in `year` (12, or 13 in a leap year).
pub fn months_in_year(year: i64) -> u32 {
    if is_leap_year(year) { 13 } else { 12 }
}

/// Last month of `year` in numeric order: Adar II in a leap year, else Adar.
pub fn last_month_of_year(year: i64) -> HebrewMonth {
    if is_leap_year(year) {
        HebrewMonth::AdarII
    } else {
        HebrewMonth::Adar
    }
}

/// Tishrei-first ordinal of `month` in `year` (Tishrei = 1).
///
/// Used to count months elapsed since the year began.
pub fn month_of_year(year: i64, month: HebrewMonth) -> u32 {
    let leap = is_leap_year(year);
    let (shift, modulus) = if leap { (6, 13) } else { (5, 12) };
    (month.number() + shift) % modulus + 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_round_trip() {
        for (i, m) in ALL_MONTHS.iter().enumerate() {
            assert_eq!(m.number() as usize, i + 1);
            assert_eq!(HebrewMonth::from_number(m.number()), Some(*m));
        }
        assert_eq!(HebrewMonth::from_number(0), None);
        assert_eq!(HebrewMonth::from_number(14), None);
    }

    #[test]
    fn tishrei_is_first_of_year() {
        assert_eq!(month_of_year(5784, HebrewMonth::Tishrei), 1);
        assert_eq!(month_of_year(5785, HebrewMonth::Tishrei), 1);
        assert_eq!(month_of_year(5785, HebrewMonth::Adar), 6);
        assert_eq!(month_of_year(5785, HebrewMonth::Nissan), 7);
        assert_eq!(month_of_year(5785, HebrewMonth::Elul), 12);
    }

    #[test]
    fn leap_year_ordinals() {
        // 5784 is a leap year.
        assert_eq!(month_of_year(5784, HebrewMonth::Adar), 6);
        assert_eq!(month_of_year(5784, HebrewMonth::AdarII), 7);
        assert_eq!(month_of_year(5784, HebrewMonth::Nissan), 8);
        assert_eq!(month_of_year(5784, HebrewMonth::Elul), 13);
    }

    #[test]
    fn next_month_wraps_through_adar() {
        assert_eq!(HebrewMonth::Adar.next_in_year(5784), HebrewMonth::AdarII);
        assert_eq!(HebrewMonth::Adar.next_in_year(5785), HebrewMonth::Nissan);
        assert_eq!(HebrewMonth::AdarII.next_in_year(5784), HebrewMonth::Nissan);
        assert_eq!(HebrewMonth::Elul.next_in_year(5784), HebrewMonth::Tishrei);
        assert_eq!(HebrewMonth::Teves.next_in_year(5784), HebrewMonth::Shevat);
    }

    #[test]
    fn months_per_year() {
        assert_eq!(months_in_year(5784), 13);
        assert_eq!(months_in_year(5785), 12);
        assert_eq!(last_month_of_year(5784), HebrewMonth::AdarII);
        assert_eq!(last_month_of_year(5785), HebrewMonth::Adar);
    }

    #[test]
    fn adar_names() {
        assert_eq!(HebrewMonth::Adar.name_in_year(5784), "Adar I");
        assert_eq!(HebrewMonth::Adar.name_in_year(5785), "Adar");
        assert_eq!(HebrewMonth::AdarII.name_in_year(5784), "Adar II");
        assert!(!HebrewMonth::AdarII.occurs_in(5785));
    }

    #[test]
    fn parse_names_and_numbers() {
        assert_eq!("Teves".parse::<HebrewMonth>().unwrap(), HebrewMonth::Teves);
        assert_eq!("tevet".parse::<HebrewMonth>().unwrap(), HebrewMonth::Teves);
        assert_eq!("Adar II".parse::<HebrewMonth>().unwrap(), HebrewMonth::AdarII);
        assert_eq!("adar-1".parse::<HebrewMonth>().unwrap(), HebrewMonth::Adar);
        assert_eq!("7".parse::<HebrewMonth>().unwrap(), HebrewMonth::Tishrei);
        assert_eq!(
            "14".parse::<HebrewMonth>(),
            Err(CalendarError::MonthOutOfRange(14))
        );
        assert!(matches!(
            "Thermidor".parse::<HebrewMonth>(),
            Err(CalendarError::UnknownMonth(_))
        ));
    }
}
