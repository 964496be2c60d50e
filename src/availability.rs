use crate::date::Date;
use std::fmt;

pub mod calculator;
pub mod consolidate;

/// Free rooms on one day. Negative when the room type is overbooked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DailyAvailability {
    pub date: Date,
    pub availability: i64,
}

impl DailyAvailability {
    pub fn new(date: Date, availability: i64) -> Self {
        DailyAvailability { date, availability }
    }
}

/// Days `start_date..=end_date` all sharing the same availability.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRangeAvailability {
    pub start_date: Date,
    pub end_date: Date,
    pub availability: i64,
}

impl fmt::Display for DateRangeAvailability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}-{}, {})", self.start_date, self.end_date, self.availability)
    }
}
