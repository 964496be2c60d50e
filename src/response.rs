use crate::availability::DateRangeAvailability;
use crate::date::DateRange;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvailabilityResponse {
    pub hotel_id: String,
    pub room_type: String,
    pub date_range: DateRange,
    pub availability: i64,
}

impl fmt::Display for AvailabilityResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Hotel: {}, Room Type: {}, Date Range: {}, Available Rooms: {}",
            self.hotel_id, self.room_type, self.date_range, self.availability
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResponse {
    pub ranges: Vec<DateRangeAvailability>,
}

impl fmt::Display for SearchResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered = self
            .ranges
            .iter()
            .map(|r| r.to_string())
            .collect::<Vec<_>>();
        write!(f, "{}", rendered.join(", "))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    Availability(AvailabilityResponse),
    Search(SearchResponse),
}

impl fmt::Display for Response {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Response::Availability(r) => write!(f, "{r}"),
            Response::Search(r) => write!(f, "{r}"),
        }
    }
}
