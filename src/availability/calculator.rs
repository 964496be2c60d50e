use crate::availability::DailyAvailability;
use crate::date::Date;
use tracing::debug;

fn availability_on(total_rooms: u32, booked: u32) -> i64 {
    i64::from(total_rooms) - i64::from(booked)
}

/// Smallest free-room count on any day of `start..=end`.
///
/// A stay needs a room on every night, so the worst single day bounds the
/// whole range. The result goes negative when the room type is overbooked.
/// An empty walk (`end < start`) yields `total_rooms`.
pub fn minimum_availability<F>(total_rooms: u32, bookings_for_date: F, start: Date, end: Date) -> i64
where
    F: Fn(Date) -> u32,
{
    let min = start
        .days_through(end)
        .map(|date| availability_on(total_rooms, bookings_for_date(date)))
        .min()
        .unwrap_or_else(|| i64::from(total_rooms));
    debug!("minimum availability {start}..={end} over {total_rooms} rooms: {min}");
    min
}

/// Days in `start .. start + days_ahead` with at least one free room, ascending.
///
/// Days with no free room are dropped, so the result may skip dates.
pub fn find_available_dates<F>(
    total_rooms: u32,
    bookings_for_date: F,
    start: Date,
    days_ahead: u32,
) -> Vec<DailyAvailability>
where
    F: Fn(Date) -> u32,
{
    let available = std::iter::successors(Some(start), |d| d.succ())
        .take(days_ahead as usize)
        .map(|date| DailyAvailability::new(date, availability_on(total_rooms, bookings_for_date(date))))
        .filter(|daily| daily.availability > 0)
        .collect::<Vec<_>>();
    debug!(
        "{} of {days_ahead} days from {start} have free rooms",
        available.len()
    );
    available
}
