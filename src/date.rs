use crate::error::BookingError;
use chrono::{Days, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::ops::{Add, Sub};
use std::str::FromStr;

const FORMAT: &str = "%Y%m%d";

/// A whole calendar day, written as `YYYYMMDD` in data files and commands.
#[derive(Debug, Clone, Copy, Ord, Eq, PartialEq, PartialOrd, Hash)]
pub struct Date(pub NaiveDate);

impl Date {
    pub fn today() -> Date {
        Date(chrono::Local::now().date_naive())
    }

    pub fn succ(self) -> Option<Date> {
        self.0.succ_opt().map(Date)
    }

    pub fn is_next_day_after(self, other: Date) -> bool {
        other.succ() == Some(self)
    }

    /// Every day from `self` up to and including `end`. Empty when `end < self`.
    pub fn days_through(self, end: Date) -> impl Iterator<Item = Date> {
        std::iter::successors(Some(self), |d| d.succ()).take_while(move |d| *d <= end)
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(FORMAT))
    }
}

impl FromStr for Date {
    type Err = BookingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // chrono's %Y also accepts signs and extra digits
        if s.len() != 8 || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(BookingError::InvalidDate);
        }
        NaiveDate::parse_from_str(s, FORMAT)
            .map(Date)
            .map_err(|_| BookingError::InvalidDate)
    }
}

impl Serialize for Date {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Date {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

impl Add<u64> for Date {
    type Output = Self;

    fn add(self, rhs: u64) -> Self::Output {
        Date(self.0 + Days::new(rhs))
    }
}

impl Sub<Date> for Date {
    type Output = i64;

    fn sub(self, rhs: Date) -> Self::Output {
        self.0.signed_duration_since(rhs.0).num_days()
    }
}

/// Closed interval of days, `start..=end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: Date,
    pub end: Date,
}

impl DateRange {
    pub fn new(start: Date, end: Date) -> Result<DateRange, BookingError> {
        if end < start {
            return Err(BookingError::ReversedDateRange);
        }
        Ok(DateRange { start, end })
    }

    pub fn single(day: Date) -> DateRange {
        DateRange { start: day, end: day }
    }

    pub fn len_days(&self) -> i64 {
        self.end - self.start + 1
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.start == self.end {
            write!(f, "{}", self.start)
        } else {
            write!(f, "{}-{}", self.start, self.end)
        }
    }
}

impl FromStr for DateRange {
    type Err = BookingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if !s.contains('-') {
            return s.parse().map(DateRange::single);
        }
        let parts: Vec<&str> = s.split('-').collect();
        if parts.len() != 2 {
            return Err(BookingError::MalformedDateRange);
        }
        DateRange::new(parts[0].parse()?, parts[1].parse()?)
    }
}
