//! Validated birth dates.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::core::{ArcanaError, ArcanaResult};

/// A real calendar date, as entered in the birth-date picker.
///
/// Serializes as the ISO `YYYY-MM-DD` string.
///
/// ```
/// use arcana::numerology::BirthDate;
///
/// let date: BirthDate = "1990-05-15".parse().unwrap();
/// assert_eq!((date.year(), date.month(), date.day()), (1990, 5, 15));
/// assert!("2023-02-30".parse::<BirthDate>().is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct BirthDate {
    date: NaiveDate,
}

impl BirthDate {
    /// Build a date from its components.
    ///
    /// The year must be positive and the triple must exist in the calendar.
    pub fn new(year: u32, month: u32, day: u32) -> ArcanaResult<Self> {
        if year == 0 {
            return Err(ArcanaError::invalid_input("year must be positive"));
        }
        if !(1..=12).contains(&month) {
            return Err(ArcanaError::invalid_input(format!("month {month} out of range 1-12")));
        }
        if !(1..=31).contains(&day) {
            return Err(ArcanaError::invalid_input(format!("day {day} out of range 1-31")));
        }
        let year = i32::try_from(year)
            .map_err(|_| ArcanaError::invalid_input(format!("year {year} too large")))?;

        NaiveDate::from_ymd_opt(year, month, day)
            .map(|date| Self { date })
            .ok_or_else(|| {
                ArcanaError::invalid_input(format!("{year:04}-{month:02}-{day:02} is not a calendar date"))
            })
    }

    /// Parse `YYYY-MM-DD`. Surrounding whitespace is ignored.
    pub fn parse(input: &str) -> ArcanaResult<Self> {
        let input = input.trim();
        if input.is_empty() {
            return Err(ArcanaError::invalid_input("no birth date supplied"));
        }

        let mut parts = input.split('-');
        let (Some(year), Some(month), Some(day), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(ArcanaError::invalid_input(format!("expected YYYY-MM-DD, got {input:?}")));
        };

        Self::new(parse_component(year, input)?, parse_component(month, input)?, parse_component(day, input)?)
    }

    /// Reject dates after `today`.
    pub fn ensure_not_after(self, today: NaiveDate) -> ArcanaResult<Self> {
        if self.date > today {
            return Err(ArcanaError::invalid_input(format!("birth date {self} is in the future")));
        }
        Ok(self)
    }

    #[must_use]
    pub fn year(&self) -> u32 {
        self.date.year().unsigned_abs()
    }

    #[must_use]
    pub fn month(&self) -> u32 {
        self.date.month()
    }

    #[must_use]
    pub fn day(&self) -> u32 {
        self.date.day()
    }

    #[must_use]
    pub fn as_naive(&self) -> NaiveDate {
        self.date
    }
}

fn parse_component(part: &str, input: &str) -> ArcanaResult<u32> {
    if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ArcanaError::invalid_input(format!("expected YYYY-MM-DD, got {input:?}")));
    }
    part.parse()
        .map_err(|_| ArcanaError::invalid_input(format!("number out of range in {input:?}")))
}

impl fmt::Display for BirthDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year(), self.month(), self.day())
    }
}

impl FromStr for BirthDate {
    type Err = ArcanaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for BirthDate {
    type Error = ArcanaError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<BirthDate> for String {
    fn from(date: BirthDate) -> Self {
        date.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_iso() {
        let date = BirthDate::parse("1988-11-29").unwrap();
        assert_eq!(date.year(), 1988);
        assert_eq!(date.month(), 11);
        assert_eq!(date.day(), 29);
        assert_eq!(date.to_string(), "1988-11-29");
    }

    #[test]
    fn test_parse_trims_whitespace() {
        assert_eq!(BirthDate::parse("  1990-05-15\n").unwrap(), BirthDate::new(1990, 5, 15).unwrap());
    }

    #[test]
    fn test_empty_input_rejected() {
        assert!(matches!(BirthDate::parse(""), Err(ArcanaError::InvalidInput(_))));
        assert!(matches!(BirthDate::parse("   "), Err(ArcanaError::InvalidInput(_))));
    }

    #[test]
    fn test_malformed_input_rejected() {
        for input in ["1990/05/15", "1990-05", "1990-05-15-01", "abcd-ef-gh", "-1990-05-15", "1990-+5-15"] {
            assert!(BirthDate::parse(input).is_err(), "{input} should be rejected");
        }
    }

    #[test]
    fn test_component_ranges() {
        assert!(BirthDate::new(0, 1, 1).is_err());
        assert!(BirthDate::new(1990, 0, 1).is_err());
        assert!(BirthDate::new(1990, 13, 1).is_err());
        assert!(BirthDate::new(1990, 1, 0).is_err());
        assert!(BirthDate::new(1990, 1, 32).is_err());
        assert!(BirthDate::new(u32::MAX, 1, 1).is_err());
    }

    #[test]
    fn test_impossible_calendar_dates() {
        assert!(BirthDate::new(2023, 2, 29).is_err());
        assert!(BirthDate::new(2024, 2, 29).is_ok());
        assert!(BirthDate::new(2023, 4, 31).is_err());
    }

    #[test]
    fn test_future_dates() {
        let today = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        assert!(BirthDate::new(2024, 6, 1).unwrap().ensure_not_after(today).is_ok());
        assert!(BirthDate::new(2024, 6, 2).unwrap().ensure_not_after(today).is_err());
    }

    #[test]
    fn test_serde_as_string() {
        let date = BirthDate::new(1990, 5, 15).unwrap();
        let json = serde_json::to_string(&date).unwrap();
        assert_eq!(json, "\"1990-05-15\"");

        let back: BirthDate = serde_json::from_str(&json).unwrap();
        assert_eq!(back, date);
        assert!(serde_json::from_str::<BirthDate>("\"1990-02-31\"").is_err());
    }
}
