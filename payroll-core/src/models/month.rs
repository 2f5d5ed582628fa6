use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParsePayMonthError {
    #[error("expected a month formatted as YYYY-MM, got '{0}'")]
    Malformed(String),
    #[error("month number out of range in '{0}'")]
    MonthOutOfRange(String),
}

/// A calendar month in the payroll ledger, e.g. `2025-01`.
///
/// Orders chronologically, so "strictly before month M" checks are plain
/// `<` comparisons. Serializes as its canonical `YYYY-MM` string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PayMonth {
    year: i32,
    month: u32,
}

impl PayMonth {
    /// Builds a month from its parts. Returns `None` unless `month` is 1-12
    /// and `year` has at most four digits.
    pub fn new(year: i32, month: u32) -> Option<Self> {
        if (1..=12).contains(&month) && (0..=9999).contains(&year) {
            Some(Self { year, month })
        } else {
            None
        }
    }

    /// The month a calendar date falls in.
    pub fn of(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    /// First calendar day of the month.
    pub fn first_day(&self) -> NaiveDate {
        // Construction guarantees a representable (year, month) pair.
        NaiveDate::from_ymd_opt(self.year, self.month, 1).unwrap_or_default()
    }

    pub fn next(&self) -> Self {
        if self.month == 12 {
            Self {
                year: self.year + 1,
                month: 1,
            }
        } else {
            Self {
                year: self.year,
                month: self.month + 1,
            }
        }
    }
}

impl fmt::Display for PayMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for PayMonth {
    type Err = ParsePayMonthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || ParsePayMonthError::Malformed(s.to_string());

        let (year, month) = s.split_once('-').ok_or_else(malformed)?;
        if year.len() != 4
            || month.len() != 2
            || !year.bytes().all(|b| b.is_ascii_digit())
            || !month.bytes().all(|b| b.is_ascii_digit())
        {
            return Err(malformed());
        }

        let year: i32 = year.parse().map_err(|_| malformed())?;
        let month: u32 = month.parse().map_err(|_| malformed())?;
        if !(1..=12).contains(&month) {
            return Err(ParsePayMonthError::MonthOutOfRange(s.to_string()));
        }

        Ok(Self { year, month })
    }
}

impl Serialize for PayMonth {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for PayMonth {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
