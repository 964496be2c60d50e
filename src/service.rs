use crate::availability::calculator::{find_available_dates, minimum_availability};
use crate::availability::consolidate::consolidate;
use crate::cache::OccupancyCache;
use crate::command::Command;
use crate::date::{Date, DateRange};
use crate::error::{BookingError, Result};
use crate::hotel::{Hotel, RoomTypeCode};
use crate::inventory::Inventory;
use crate::response::{AvailabilityResponse, Response, SearchResponse};
use tracing::{debug, info, warn};

/// Validates requests against one inventory snapshot and runs them through
/// the availability engine.
pub struct AvailabilityService<'a> {
    inventory: &'a Inventory,
    cache: &'a OccupancyCache,
}

impl<'a> AvailabilityService<'a> {
    pub fn new(inventory: &'a Inventory, cache: &'a OccupancyCache) -> Self {
        AvailabilityService { inventory, cache }
    }

    fn validate_hotel(&self, hotel_id: &str) -> Result<&'a Hotel> {
        self.inventory.hotel(hotel_id).ok_or_else(|| {
            warn!("hotel not found: {hotel_id}");
            BookingError::HotelNotFound(hotel_id.to_string())
        })
    }

    /// Returns the room type code and its total rooms. A type without rooms
    /// does not exist for availability purposes.
    fn validate_room_type(&self, hotel: &Hotel, room_type: &str) -> Result<(RoomTypeCode, u32)> {
        let total = self.inventory.total_rooms_by_type(&hotel.id, room_type);
        if total == 0 {
            warn!("room type {room_type} not found in hotel {}", hotel.id);
            return Err(BookingError::RoomTypeNotFound {
                hotel_id: hotel.id.to_string(),
                room_type: room_type.to_string(),
            });
        }
        Ok((RoomTypeCode::from(room_type), total))
    }

    /// Minimum availability over `date_range` (`YYYYMMDD` or
    /// `YYYYMMDD-YYYYMMDD`). The hotel and room type are validated before the
    /// dates are parsed.
    pub fn check_availability(
        &self,
        hotel_id: &str,
        date_range: &str,
        room_type: &str,
    ) -> Result<AvailabilityResponse> {
        debug!("availability check: hotel={hotel_id}, room_type={room_type}, range={date_range}");
        let hotel = self.validate_hotel(hotel_id)?;
        let (code, total) = self.validate_room_type(hotel, room_type)?;
        let date_range = date_range.parse::<DateRange>().inspect_err(|e| {
            warn!("bad date range '{date_range}' for hotel {hotel_id}: {e}");
        })?;
        debug!("checking {} days", date_range.len_days());

        let availability = minimum_availability(
            total,
            |date| self.cache.bookings_occupying(self.inventory, &hotel.id, &code, date),
            date_range.start,
            date_range.end,
        );
        info!(
            "availability check completed: hotel={hotel_id}, room_type={room_type}, range={date_range}, availability={availability}"
        );

        Ok(AvailabilityResponse {
            hotel_id: hotel_id.to_string(),
            room_type: room_type.to_string(),
            date_range,
            availability,
        })
    }

    pub fn search_availability(
        &self,
        hotel_id: &str,
        days_ahead: u32,
        room_type: &str,
        today: Date,
    ) -> Result<SearchResponse> {
        debug!("availability search: hotel={hotel_id}, room_type={room_type}, days_ahead={days_ahead}");
        let hotel = self.validate_hotel(hotel_id)?;
        let (code, total) = self.validate_room_type(hotel, room_type)?;
        if days_ahead == 0 {
            warn!("non-positive days ahead for hotel {hotel_id}");
            return Err(BookingError::NonPositiveDaysAhead);
        }

        let daily = find_available_dates(
            total,
            |date| self.cache.bookings_occupying(self.inventory, &hotel.id, &code, date),
            today,
            days_ahead,
        );
        let ranges = consolidate(&daily);
        info!(
            "availability search completed: hotel={hotel_id}, room_type={room_type}, days_ahead={days_ahead}, ranges={}",
            ranges.len()
        );

        Ok(SearchResponse { ranges })
    }

    pub fn execute(&self, command: &Command, today: Date) -> Result<Response> {
        match command {
            Command::Availability {
                hotel_id,
                date_range,
                room_type,
            } => self
                .check_availability(hotel_id, date_range, room_type)
                .map(Response::Availability),
            Command::Search {
                hotel_id,
                days_ahead,
                room_type,
            } => self
                .search_availability(hotel_id, *days_ahead, room_type, today)
                .map(Response::Search),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::availability::DateRangeAvailability;
    use crate::inventory::tests::{HOTELS, reference_inventory};

    fn day(s: &str) -> Date {
        s.parse().unwrap()
    }

    fn run(inventory: &Inventory, line: &str, today: Date) -> Result<String> {
        let cache = OccupancyCache::new();
        let service = AvailabilityService::new(inventory, &cache);
        let command: Command = line.parse()?;
        service.execute(&command, today).map(|r| r.to_string())
    }

    #[test]
    fn test_reference_data_set() {
        let inventory = reference_inventory();
        let today = day("20240801");
        assert_eq!(
            "Hotel: H1, Room Type: SGL, Date Range: 20240901, Available Rooms: 2",
            run(&inventory, "Availability(H1, 20240901, SGL)", today).unwrap()
        );
        assert_eq!(
            "Hotel: H1, Room Type: DBL, Date Range: 20240901-20240903, Available Rooms: 1",
            run(&inventory, "Availability(H1, 20240901-20240903, DBL)", today).unwrap()
        );
    }

    #[test]
    fn test_search_consolidates_window() {
        let inventory = reference_inventory();
        // SGL is booked 20240902..20240905, one of two rooms taken
        let result = run(&inventory, "Search(H1, 7, SGL)", day("20240831")).unwrap();
        assert_eq!(
            "(20240831-20240901, 2), (20240902-20240904, 1), (20240905-20240906, 2)",
            result
        );
    }

    #[test]
    fn test_search_skips_fully_booked_days() {
        let bookings = r#"[
            {"hotelId": "H1", "arrival": "20241016", "departure": "20241018", "roomType": "SGL"},
            {"hotelId": "H1", "arrival": "20241016", "departure": "20241017", "roomType": "SGL"}
        ]"#;
        let inventory = Inventory::from_json(HOTELS, bookings).unwrap();
        let cache = OccupancyCache::new();
        let service = AvailabilityService::new(&inventory, &cache);

        let response = service.search_availability("H1", 4, "SGL", day("20241015")).unwrap();
        assert_eq!(
            vec![
                DateRangeAvailability { start_date: day("20241015"), end_date: day("20241015"), availability: 2 },
                DateRangeAvailability { start_date: day("20241017"), end_date: day("20241017"), availability: 1 },
                DateRangeAvailability { start_date: day("20241018"), end_date: day("20241018"), availability: 2 },
            ],
            response.ranges
        );
    }

    #[test]
    fn test_overbooked_range_is_negative() {
        let bookings = r#"[
            {"hotelId": "H1", "arrival": "20240901", "departure": "20240902", "roomType": "DBL"},
            {"hotelId": "H1", "arrival": "20240901", "departure": "20240902", "roomType": "DBL"},
            {"hotelId": "H1", "arrival": "20240901", "departure": "20240902", "roomType": "DBL"}
        ]"#;
        let inventory = Inventory::from_json(HOTELS, bookings).unwrap();
        let cache = OccupancyCache::new();
        let service = AvailabilityService::new(&inventory, &cache);
        let response = service
            .check_availability("H1", "20240831-20240902", "DBL")
            .unwrap();
        assert_eq!(-1, response.availability);
    }

    #[test]
    fn test_validation_errors() {
        let inventory = reference_inventory();
        let today = day("20240801");

        let err = run(&inventory, "Availability(H9, 20240901, SGL)", today).unwrap_err();
        assert_eq!("Hotel not found: H9", err.to_string());

        let err = run(&inventory, "Search(H1, 5, STE)", today).unwrap_err();
        assert_eq!("Room type 'STE' not found in hotel 'H1'", err.to_string());

        let err = run(&inventory, "Search(H1, 0, SGL)", today).unwrap_err();
        assert_eq!("Days ahead must be positive", err.to_string());

        // hotel is checked before the day count
        let err = run(&inventory, "Search(H9, 0, SGL)", today).unwrap_err();
        assert!(matches!(err, BookingError::HotelNotFound(_)));

        let err = run(&inventory, "Hello", today).unwrap_err();
        assert_eq!("Invalid command", err.to_string());
    }

    #[test]
    fn test_hotel_and_room_type_checked_before_dates() {
        let inventory = reference_inventory();
        let today = day("20240801");

        let err = run(&inventory, "Availability(H9, 20241301, SGL)", today).unwrap_err();
        assert!(matches!(err, BookingError::HotelNotFound(_)));
        assert_eq!("Hotel not found: H9", err.to_string());

        let err = run(&inventory, "Availability(H1, 20241301, STE)", today).unwrap_err();
        assert!(matches!(err, BookingError::RoomTypeNotFound { .. }));

        let err = run(&inventory, "Availability(H1, 20241301, SGL)", today).unwrap_err();
        assert_eq!("Invalid date format. Expected YYYYMMDD", err.to_string());

        let err = run(&inventory, "Availability(H1, 20240903-20240901, SGL)", today).unwrap_err();
        assert!(matches!(err, BookingError::ReversedDateRange));

        let err = run(&inventory, "Availability(H1, 20240901-20240902-20240903, SGL)", today).unwrap_err();
        assert!(matches!(err, BookingError::MalformedDateRange));
    }

    #[test]
    fn test_cache_is_consulted() {
        let inventory = reference_inventory();
        let cache = OccupancyCache::new();
        let service = AvailabilityService::new(&inventory, &cache);
        service.check_availability("H1", "20240901-20240903", "DBL").unwrap();
        service.check_availability("H1", "20240901-20240903", "DBL").unwrap();

        let stats = cache.stats();
        assert_eq!(3, stats.entries);
        assert_eq!(3, stats.misses);
        assert_eq!(3, stats.hits);
    }
}
