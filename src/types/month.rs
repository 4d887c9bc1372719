use crate::types::errors::MonthError;
use chrono::{DateTime, Datelike, NaiveDate, Utc};
use std::fmt;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// A calendar year and month, the bucket every aggregation is computed over.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Month {
    year: i32,
    month: u32
}

impl Month {
    pub fn new(year: i32, month: u32) -> Result<Self, MonthError> {
        if !(1..=12).contains(&month) {
            return Err(MonthError::OutOfRange(month));
        }

        Ok(Self { year, month })
    }

    /// The month a calendar date falls in.
    pub fn of(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month()
        }
    }

    /// The month of a reference instant, taken in UTC.
    pub fn containing(instant: DateTime<Utc>) -> Self {
        Self::of(instant.date_naive())
    }

    pub fn current() -> Self {
        Self::containing(Utc::now())
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    /// True for every day of the month, the same result as matching the
    /// `YYYY-MM` prefix of the date's ISO form.
    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }
}

impl Display for Month {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        write!(formatter, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for Month {
    type Err = MonthError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let value = value.trim();
        let invalid = || MonthError::InvalidFormat(value.to_string());

        let (year, month) = value.split_once('-').ok_or_else(invalid)?;

        if year.len() != 4 || month.len() != 2 {
            return Err(invalid());
        }

        if !year.bytes().chain(month.bytes()).all(|byte| byte.is_ascii_digit()) {
            return Err(invalid());
        }

        let year: i32 = year.parse().map_err(|_| invalid())?;
        let month: u32 = month.parse().map_err(|_| invalid())?;

        Month::new(year, month)
    }
}
