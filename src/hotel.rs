use serde::{Deserialize, Serialize};
use std::fmt;
use std::fmt::Formatter;
use std::sync::Arc;
use tabled::Tabled;

pub type HotelId = Arc<str>;
pub type RoomTypeCode = Arc<str>;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RoomType {
    pub code: RoomTypeCode,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub amenities: Vec<String>,
    #[serde(default)]
    pub features: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    pub room_type: RoomTypeCode,
    pub room_id: Arc<str>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hotel {
    pub id: HotelId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub room_types: Vec<RoomType>,
    #[serde(default)]
    pub rooms: Vec<Room>,
}

impl Hotel {
    /// Rooms counted per room type code. Declared room types without rooms are absent.
    pub fn room_totals(&self) -> Vec<(RoomTypeCode, u32)> {
        let mut totals: Vec<(RoomTypeCode, u32)> = vec![];
        for room in &self.rooms {
            match totals.iter_mut().find(|(code, _)| *code == room.room_type) {
                Some((_, n)) => *n += 1,
                None => totals.push((room.room_type.clone(), 1)),
            }
        }
        totals.sort();
        totals
    }

    pub fn room_type(&self, code: &str) -> Option<&RoomType> {
        self.room_types.iter().find(|rt| &*rt.code == code)
    }
}

impl fmt::Display for Hotel {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id)
    }
}

/// One table row per hotel and room type, for the console `hotels` listing.
#[derive(Clone, Debug, PartialEq, Tabled)]
pub struct RoomTypeSummary {
    #[tabled(rename = "Hotel")]
    pub hotel_id: HotelId,
    #[tabled(rename = "Name")]
    pub hotel_name: String,
    #[tabled(rename = "Room Type")]
    pub code: RoomTypeCode,
    #[tabled(rename = "Description")]
    pub description: String,
    #[tabled(rename = "Rooms")]
    pub total_rooms: u32,
}

impl RoomTypeSummary {
    pub fn for_hotel(hotel: &Hotel) -> Vec<RoomTypeSummary> {
        hotel
            .room_totals()
            .into_iter()
            .map(|(code, total_rooms)| RoomTypeSummary {
                hotel_id: hotel.id.clone(),
                hotel_name: hotel.name.clone(),
                description: hotel
                    .room_type(&code)
                    .map(|rt| rt.description.clone())
                    .unwrap_or_default(),
                code,
                total_rooms,
            })
            .collect()
    }
}
