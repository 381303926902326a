//! Day of the week on the absolute day count.
//!
//! Absolute day 1 (0001-01-01, proleptic Gregorian) was a Monday, so
//! `abs mod 7` maps 0 to Sunday.

/// Day of the week, Sunday first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[allow(missing_docs)]
pub enum DayOfWeek {
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

/// All seven days in order (index 0 = Sunday).
pub const ALL_DAYS: [DayOfWeek; 7] = [
    DayOfWeek::Sunday,
    DayOfWeek::Monday,
    DayOfWeek::Tuesday,
    DayOfWeek::Wednesday,
    DayOfWeek::Thursday,
    DayOfWeek::Friday,
    DayOfWeek::Saturday,
];

impl DayOfWeek {
    /// Weekday of an absolute day number.
    pub fn from_absolute(abs: i64) -> Self {
        ALL_DAYS[abs.rem_euclid(7) as usize]
    }

    /// 0-based index (Sunday=0 .. Saturday=6).
    pub const fn index(self) -> u8 {
        match self {
            Self::Sunday => 0,
            Self::Monday => 1,
            Self::Tuesday => 2,
            Self::Wednesday => 3,
            Self::Thursday => 4,
            Self::Friday => 5,
            Self::Saturday => 6,
        }
    }

    /// 1-based number (Sunday=1 .. Saturday=7).
    pub const fn number(self) -> u8 {
        self.index() + 1
    }

    /// English name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sunday => "Sunday",
            Self::Monday => "Monday",
            Self::Tuesday => "Tuesday",
            Self::Wednesday => "Wednesday",
            Self::Thursday => "Thursday",
            Self::Friday => "Friday",
            Self::Saturday => "Saturday",
        }
    }
}

impl std::fmt::Display for DayOfWeek {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_sequential() {
        for (i, d) in ALL_DAYS.iter().enumerate() {
            assert_eq!(d.index() as usize, i);
        }
    }

    #[test]
    fn absolute_day_one_is_monday() {
        assert_eq!(DayOfWeek::from_absolute(1), DayOfWeek::Monday);
    }

    #[test]
    fn negative_days_wrap() {
        // Day 0 is the Sunday before day 1; day -1 is Saturday.
        assert_eq!(DayOfWeek::from_absolute(0), DayOfWeek::Sunday);
        assert_eq!(DayOfWeek::from_absolute(-1), DayOfWeek::Saturday);
        assert_eq!(DayOfWeek::from_absolute(-7), DayOfWeek::Sunday);
    }

    #[test]
    fn number_is_one_based() {
        assert_eq!(DayOfWeek::Sunday.number(), 1);
        assert_eq!(DayOfWeek::Saturday.number(), 7);
    }
}
