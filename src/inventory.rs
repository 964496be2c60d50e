use crate::booking::Booking;
use crate::date::Date;
use crate::error::{BookingError, Result};
use crate::hotel::{Hotel, HotelId, RoomTypeCode};
use serde::de::DeserializeOwned;
use std::collections::HashMap;
use std::path::Path;
use tracing::{debug, info, warn};

/// Immutable snapshot of hotels and bookings built from one pair of data files.
pub struct Inventory {
    hotels: HashMap<HotelId, Hotel>,
    room_totals: HashMap<HotelId, HashMap<RoomTypeCode, u32>>,
    // sorted by arrival within each room type
    bookings: HashMap<HotelId, HashMap<RoomTypeCode, Vec<Booking>>>,
    booking_count: usize,
}

impl Inventory {
    pub fn new(hotels: Vec<Hotel>, bookings: Vec<Booking>) -> Inventory {
        let room_totals = hotels
            .iter()
            .map(|h| {
                let totals = h.room_totals().into_iter().collect::<HashMap<_, _>>();
                debug!("hotel {}: room totals {:?}", h.id, totals);
                (h.id.clone(), totals)
            })
            .collect::<HashMap<HotelId, HashMap<RoomTypeCode, u32>>>();

        let hotels = hotels
            .into_iter()
            .map(|h| (h.id.clone(), h))
            .collect::<HashMap<HotelId, Hotel>>();

        let booking_count = bookings.len();
        let mut by_room_type = HashMap::<HotelId, HashMap<RoomTypeCode, Vec<Booking>>>::new();
        for booking in bookings {
            if !hotels.contains_key(&booking.hotel_id) {
                warn!("booking references unknown hotel {}", booking.hotel_id);
            }
            if booking.is_empty_stay() {
                warn!(
                    "booking at {} for {} departs {} before arriving {}, occupies no days",
                    booking.hotel_id, booking.room_type, booking.departure, booking.arrival
                );
            }
            by_room_type
                .entry(booking.hotel_id.clone())
                .or_default()
                .entry(booking.room_type.clone())
                .or_default()
                .push(booking);
        }
        by_room_type
            .values_mut()
            .flat_map(|types| types.values_mut())
            .for_each(|list| list.sort_by_key(|b| b.arrival));

        Inventory {
            hotels,
            room_totals,
            bookings: by_room_type,
            booking_count,
        }
    }

    pub fn load_from_files(hotels_path: &Path, bookings_path: &Path) -> Result<Self> {
        info!(
            "loading hotels from {}, bookings from {}",
            hotels_path.display(),
            bookings_path.display()
        );
        let hotels: Vec<Hotel> = read_json(hotels_path)?;
        let bookings: Vec<Booking> = read_json(bookings_path)?;
        let inventory = Inventory::new(hotels, bookings);
        info!(
            "loaded {} hotels and {} bookings",
            inventory.hotels.len(),
            inventory.booking_count
        );
        Ok(inventory)
    }

    #[cfg(test)]
    pub fn from_json(hotels: &str, bookings: &str) -> serde_json::Result<Self> {
        Ok(Inventory::new(
            serde_json::from_str(hotels)?,
            serde_json::from_str(bookings)?,
        ))
    }

    pub fn hotel(&self, hotel_id: &str) -> Option<&Hotel> {
        self.hotels.get(hotel_id)
    }

    /// All hotels, ordered by id.
    pub fn hotels(&self) -> Vec<&Hotel> {
        let mut hotels = self.hotels.values().collect::<Vec<_>>();
        hotels.sort_by(|a, b| a.id.cmp(&b.id));
        hotels
    }

    pub fn booking_count(&self) -> usize {
        self.booking_count
    }

    /// Total rooms of `room_type` in the hotel, 0 when either is unknown.
    pub fn total_rooms_by_type(&self, hotel_id: &str, room_type: &str) -> u32 {
        self.room_totals
            .get(hotel_id)
            .and_then(|totals| totals.get(room_type))
            .copied()
            .unwrap_or(0)
    }

    /// Number of bookings with `arrival <= date < departure`.
    pub fn bookings_occupying(&self, hotel_id: &str, room_type: &str, date: Date) -> u32 {
        self.bookings
            .get(hotel_id)
            .and_then(|types| types.get(room_type))
            .map_or(0, |list| {
                list.iter()
                    .take_while(|b| b.arrival <= date)
                    .filter(|b| b.occupies(date))
                    .count() as u32
            })
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let data = std::fs::read_to_string(path).map_err(|source| BookingError::DataRead {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&data).map_err(|source| BookingError::DataParse {
        path: path.to_path_buf(),
        source,
    })
}
