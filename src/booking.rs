use crate::date::Date;
use crate::hotel::{HotelId, RoomTypeCode};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub hotel_id: HotelId,
    pub room_type: RoomTypeCode,
    #[serde(default)]
    pub room_rate: String,
    pub arrival: Date,
    pub departure: Date,
}

impl Booking {
    /// A stay holds its room on `[arrival, departure)`: the departure day is free.
    pub fn occupies(&self, date: Date) -> bool {
        self.arrival <= date && date < self.departure
    }

    pub fn is_empty_stay(&self) -> bool {
        self.departure <= self.arrival
    }
}
