//! Calendar month identity
//!
//! The ledger is indexed by `(year, month)` pairs. Equality and ordering use
//! only those two fields; display rendering is cosmetic.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifies a single calendar month in the ledger
///
/// Ordering is chronological; `months_available` reverses it for the
/// most-recent-first presentation.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct MonthKey {
    pub year: i32,
    pub month: u32,
}

impl MonthKey {
    /// Create a month key
    pub fn new(year: i32, month: u32) -> Self {
        Self { year, month }
    }

    /// Create a month key from a calendar date
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// Get the key for the current calendar month
    pub fn current_month() -> Self {
        Self::from_date(chrono::Local::now().date_naive())
    }

    /// Get the preceding calendar month, rolling the year boundary
    pub fn prev(&self) -> Self {
        if self.month > 1 {
            Self {
                year: self.year,
                month: self.month - 1,
            }
        } else {
            Self {
                year: self.year - 1,
                month: 12,
            }
        }
    }

    /// Get the following calendar month, rolling the year boundary
    pub fn next(&self) -> Self {
        if self.month < 12 {
            Self {
                year: self.year,
                month: self.month + 1,
            }
        } else {
            Self {
                year: self.year + 1,
                month: 1,
            }
        }
    }

    /// Human-readable "Mon YYYY" rendering (e.g. "Jan 2024")
    ///
    /// Not used for equality or persistence.
    pub fn label(&self) -> String {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
            .map(|d| d.format("%b %Y").to_string())
            .unwrap_or_else(|| format!("{}-{}", self.year, self.month))
    }
}

impl fmt::Display for MonthKey {
    /// The persisted encoding: `"{year}-{month}"` with no zero-padding
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.year, self.month)
    }
}

impl FromStr for MonthKey {
    type Err = MonthParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (year, month) = s
            .split_once('-')
            .ok_or_else(|| MonthParseError::InvalidFormat(s.to_string()))?;

        let year: i32 = year
            .parse()
            .map_err(|_| MonthParseError::InvalidFormat(s.to_string()))?;
        let month: u32 = month
            .parse()
            .map_err(|_| MonthParseError::InvalidFormat(s.to_string()))?;

        if !(1..=12).contains(&month) {
            return Err(MonthParseError::InvalidMonth(month));
        }

        Ok(Self { year, month })
    }
}

/// Error type for month-key parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MonthParseError {
    InvalidFormat(String),
    InvalidMonth(u32),
}

impl fmt::Display for MonthParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MonthParseError::InvalidFormat(s) => write!(f, "Invalid month key: {}", s),
            MonthParseError::InvalidMonth(m) => write!(f, "Invalid month: {}", m),
        }
    }
}

impl std::error::Error for MonthParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prev() {
        let mar = MonthKey::new(2024, 3);
        assert_eq!(mar.prev(), MonthKey::new(2024, 2));
    }

    #[test]
    fn test_prev_rolls_year() {
        let jan = MonthKey::new(2024, 1);
        assert_eq!(jan.prev(), MonthKey::new(2023, 12));
    }

    #[test]
    fn test_prev_stays_in_range() {
        let mut key = MonthKey::new(2024, 6);
        for _ in 0..24 {
            key = key.prev();
            assert!((1..=12).contains(&key.month));
        }
        assert_eq!(key, MonthKey::new(2022, 6));
    }

    #[test]
    fn test_next_rolls_year() {
        let dec = MonthKey::new(2023, 12);
        assert_eq!(dec.next(), MonthKey::new(2024, 1));
        assert_eq!(dec.next().prev(), dec);
    }

    #[test]
    fn test_ordering() {
        assert!(MonthKey::new(2023, 12) < MonthKey::new(2024, 1));
        assert!(MonthKey::new(2024, 1) < MonthKey::new(2024, 2));
        assert_eq!(MonthKey::new(2024, 2), MonthKey::new(2024, 2));
    }

    #[test]
    fn test_label() {
        assert_eq!(MonthKey::new(2024, 1).label(), "Jan 2024");
        assert_eq!(MonthKey::new(2020, 12).label(), "Dec 2020");
    }

    #[test]
    fn test_display_encoding() {
        // No zero-padding in the persisted form
        assert_eq!(MonthKey::new(2020, 1).to_string(), "2020-1");
        assert_eq!(MonthKey::new(2020, 11).to_string(), "2020-11");
    }

    #[test]
    fn test_parse() {
        let key: MonthKey = "2020-1".parse().unwrap();
        assert_eq!(key, MonthKey::new(2020, 1));

        let key: MonthKey = "1999-12".parse().unwrap();
        assert_eq!(key, MonthKey::new(1999, 12));
    }

    #[test]
    fn test_parse_round_trip() {
        let key = MonthKey::new(2024, 7);
        let parsed: MonthKey = key.to_string().parse().unwrap();
        assert_eq!(key, parsed);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(matches!(
            "2020".parse::<MonthKey>(),
            Err(MonthParseError::InvalidFormat(_))
        ));
        assert!(matches!(
            "twenty-one".parse::<MonthKey>(),
            Err(MonthParseError::InvalidFormat(_))
        ));
        assert!(matches!(
            "2020-13".parse::<MonthKey>(),
            Err(MonthParseError::InvalidMonth(13))
        ));
        assert!(matches!(
            "2020-0".parse::<MonthKey>(),
            Err(MonthParseError::InvalidMonth(0))
        ));
    }

    #[test]
    fn test_from_date() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        assert_eq!(MonthKey::from_date(date), MonthKey::new(2024, 3));
    }
}
