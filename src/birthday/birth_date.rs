use crate::error::ValidationError;
use chrono::{Datelike, Local, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Birth years are written as exactly four digits
const YEAR_RANGE: std::ops::RangeInclusive<i32> = 0..=9999;

/// Leap year written in place of an unknown birth year when a full date is
/// required (CSV export). Leap so that Feb 29 stays representable.
pub const PLACEHOLDER_YEAR: i32 = 2024;

/// Get the current date in local timezone
pub fn local_date_today() -> NaiveDate {
    Local::now().date_naive()
}

/// A birthday: month and day, plus the birth year when it is known.
///
/// Text form is `YYYY-MM-DD` when the year is known and `--MM-DD` (ISO 8601
/// date without year) when it is not. Parsing additionally accepts `MM-DD`.
///
/// Leap-day birthdays are observed on Feb 28 in common years.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BirthDate {
    month: u32,
    day: u32,
    year: Option<i32>,
}

impl BirthDate {
    /// Create a birth date, validating the month/day combination
    ///
    /// The day must exist in `month` of a leap year. When `year` is given the
    /// full date must exist as well (so `2023-02-29` is rejected), and the
    /// year must fit in four digits.
    pub fn new(month: u32, day: u32, year: Option<i32>) -> Result<Self, ValidationError> {
        if let Some(year) = year
            && !YEAR_RANGE.contains(&year)
        {
            return Err(ValidationError::YearOutOfRange(year));
        }
        if !(1..=12).contains(&month) {
            return Err(ValidationError::InvalidMonth(month));
        }
        if NaiveDate::from_ymd_opt(PLACEHOLDER_YEAR, month, day).is_none() {
            return Err(ValidationError::InvalidDay { month, day });
        }
        if let Some(year) = year
            && NaiveDate::from_ymd_opt(year, month, day).is_none()
        {
            return Err(ValidationError::InvalidDate { year, month, day });
        }
        Ok(Self { month, day, year })
    }

    /// Birth date with a known year
    pub fn from_date(date: NaiveDate) -> Result<Self, ValidationError> {
        Self::new(date.month(), date.day(), Some(date.year()))
    }

    /// Birth date taking only month and day from `date`
    pub fn without_year(date: NaiveDate) -> Self {
        Self {
            month: date.month(),
            day: date.day(),
            year: None,
        }
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    pub fn year(&self) -> Option<i32> {
        self.year
    }

    pub fn year_known(&self) -> bool {
        self.year.is_some()
    }

    pub fn is_leap_day(&self) -> bool {
        self.month == 2 && self.day == 29
    }

    /// Full `YYYY-MM-DD` form, using [`PLACEHOLDER_YEAR`] when the year is unknown
    pub fn to_iso_string(&self) -> String {
        format!(
            "{:04}-{:02}-{:02}",
            self.year.unwrap_or(PLACEHOLDER_YEAR),
            self.month,
            self.day
        )
    }

    /// The date this birthday is celebrated on in `year`
    ///
    /// Returns `None` only when `year` is outside chrono's supported range.
    pub fn observed_in(&self, year: i32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(year, self.month, self.day).or_else(|| {
            if self.is_leap_day() {
                NaiveDate::from_ymd_opt(year, 2, 28)
            } else {
                None
            }
        })
    }

    /// Whether the birthday is observed on `today` (year of birth ignored)
    pub fn is_today(&self, today: NaiveDate) -> bool {
        self.observed_in(today.year()) == Some(today)
    }

    /// The soonest observed date on or after `today`
    ///
    /// When the birthday falls on `today` the result is `today` itself, not
    /// the occurrence one year later.
    pub fn next_occurrence(&self, today: NaiveDate) -> NaiveDate {
        match self.observed_in(today.year()) {
            Some(candidate) if candidate >= today => candidate,
            _ => self
                .observed_in(today.year() + 1)
                .unwrap_or(NaiveDate::MAX),
        }
    }

    /// Whole days from `today` to the next occurrence; 0 when it is today
    pub fn days_until_next(&self, today: NaiveDate) -> i64 {
        (self.next_occurrence(today) - today).num_days()
    }

    /// Age turned on the next occurrence, if the birth year is known
    pub fn age_on_next(&self, today: NaiveDate) -> Option<i32> {
        let birth_year = self.year?;
        Some(self.next_occurrence(today).year() - birth_year)
    }
}

impl fmt::Display for BirthDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.year {
            Some(year) => write!(f, "{:04}-{:02}-{:02}", year, self.month, self.day),
            None => write!(f, "--{:02}-{:02}", self.month, self.day),
        }
    }
}

impl FromStr for BirthDate {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let unparseable = || ValidationError::Unparseable(s.to_string());
        let number = |part: &str| part.parse::<u32>().map_err(|_| unparseable());

        let trimmed = s.trim();
        let parts: Vec<&str> = trimmed
            .strip_prefix("--")
            .unwrap_or(trimmed)
            .split('-')
            .collect();

        match parts.as_slice() {
            [month, day] => BirthDate::new(number(month)?, number(day)?, None),
            [year, month, day] if year.len() == 4 => {
                let year = year.parse::<i32>().map_err(|_| unparseable())?;
                BirthDate::new(number(month)?, number(day)?, Some(year))
            }
            _ => Err(unparseable()),
        }
    }
}

impl Serialize for BirthDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for BirthDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}
