use crate::date::Date;
use crate::hotel::{HotelId, RoomTypeCode};
use crate::inventory::Inventory;
use dashmap::DashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CacheStats {
    pub entries: usize,
    pub hits: usize,
    pub misses: usize,
}

/// Read-through cache of per-day occupancy counts.
///
/// Entries are only valid for the inventory snapshot they were read from:
/// whoever swaps the snapshot must call [`OccupancyCache::invalidate`].
#[derive(Default)]
pub struct OccupancyCache {
    entries: DashMap<(HotelId, RoomTypeCode, Date), u32>,
    hits: AtomicUsize,
    misses: AtomicUsize,
}

impl OccupancyCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bookings_occupying(
        &self,
        inventory: &Inventory,
        hotel_id: &HotelId,
        room_type: &RoomTypeCode,
        date: Date,
    ) -> u32 {
        let key = (hotel_id.clone(), room_type.clone(), date);
        if let Some(count) = self.entries.get(&key) {
            self.hits.fetch_add(1, Ordering::Relaxed);
            return *count;
        }
        self.misses.fetch_add(1, Ordering::Relaxed);
        let count = inventory.bookings_occupying(hotel_id, room_type, date);
        self.entries.insert(key, count);
        count
    }

    pub fn invalidate(&self) {
        self.entries.clear();
        self.hits.store(0, Ordering::Relaxed);
        self.misses.store(0, Ordering::Relaxed);
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            entries: self.entries.len(),
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
        }
    }
}
