use crate::availability::{DailyAvailability, DateRangeAvailability};

/// Merges runs of calendar-consecutive days with equal availability into ranges.
///
/// `daily` must be strictly ascending by date. Days separated by a gap are
/// never merged, even when their availability matches, so listing every day
/// of every returned range gives back `daily` exactly.
pub fn consolidate(daily: &[DailyAvailability]) -> Vec<DateRangeAvailability> {
    debug_assert!(
        daily.windows(2).all(|w| w[0].date < w[1].date),
        "daily availability must be strictly ascending by date"
    );

    let Some((first, rest)) = daily.split_first() else {
        return vec![];
    };

    let mut ranges = vec![];
    let mut current = DateRangeAvailability {
        start_date: first.date,
        end_date: first.date,
        availability: first.availability,
    };

    for day in rest {
        if day.date.is_next_day_after(current.end_date) && day.availability == current.availability {
            current.end_date = day.date;
        } else {
            ranges.push(current);
            current = DateRangeAvailability {
                start_date: day.date,
                end_date: day.date,
                availability: day.availability,
            };
        }
    }
    ranges.push(current);
    ranges
}
