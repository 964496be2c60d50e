use crate::availability::{DailyAvailability, DateRangeAvailability};
use crate::date::Date;
use proptest::prelude::*;

pub fn day(s: &str) -> Date {
    s.parse().unwrap()
}

pub fn daily(date: &str, availability: i64) -> DailyAvailability {
    DailyAvailability::new(day(date), availability)
}

pub fn range(start: &str, end: &str, availability: i64) -> DateRangeAvailability {
    DateRangeAvailability {
        start_date: day(start),
        end_date: day(end),
        availability,
    }
}

/// One entry per day of every range, in order.
pub fn expand(ranges: &[DateRangeAvailability]) -> Vec<DailyAvailability> {
    ranges
        .iter()
        .flat_map(|r| {
            r.start_date
                .days_through(r.end_date)
                .map(move |date| DailyAvailability::new(date, r.availability))
        })
        .collect()
}

/// Booking lookup returning `counts[i]` for `start + i` and 0 outside.
pub fn counts_from(start: Date, counts: Vec<u32>) -> impl Fn(Date) -> u32 {
    move |date| {
        let offset = date - start;
        if offset < 0 {
            return 0;
        }
        counts.get(offset as usize).copied().unwrap_or(0)
    }
}

pub fn arb_date() -> impl Strategy<Value = Date> {
    (0..3000u64).prop_map(|offset| day("20200101") + offset)
}

/// Strictly ascending daily figures with occasional gaps and repeated values.
pub fn arb_daily_sequence() -> impl Strategy<Value = Vec<DailyAvailability>> {
    (
        arb_date(),
        prop::collection::vec((1..4u64, -2..4i64), 0..60),
    )
        .prop_map(|(start, steps)| {
            let mut date = start;
            steps
                .into_iter()
                .map(|(gap, availability)| {
                    date = date + gap;
                    DailyAvailability::new(date, availability)
                })
                .collect()
        })
}
