use crate::error::BookingError;
use std::str::FromStr;

/// A decoded console request.
///
/// ```text
/// Availability(H1, 20240901-20240903, SGL)
/// Search(H1, 365, SGL)
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `date_range` is kept as typed and parsed once the hotel and room
    /// type are known to exist.
    Availability {
        hotel_id: String,
        date_range: String,
        room_type: String,
    },
    Search {
        hotel_id: String,
        days_ahead: u32,
        room_type: String,
    },
}

fn is_identifier(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Splits `Name(a, b, c)` into the name and its three trimmed arguments.
fn split_call(input: &str) -> Option<(&str, [&str; 3])> {
    let (name, rest) = input.trim().split_once('(')?;
    let args = rest.strip_suffix(')')?;
    let parts: Vec<&str> = args.split(',').map(str::trim).collect();
    match parts.as_slice() {
        [a, b, c] => Some((name, [*a, *b, *c])),
        _ => None,
    }
}

impl FromStr for Command {
    type Err = BookingError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let (name, [hotel_id, middle, room_type]) =
            split_call(input).ok_or(BookingError::InvalidCommand)?;
        if !is_identifier(hotel_id) || !is_identifier(room_type) || middle.is_empty() {
            return Err(BookingError::InvalidCommand);
        }

        match name {
            "Availability" => {
                if !middle.chars().all(|c| c.is_ascii_digit() || c == '-') {
                    return Err(BookingError::InvalidCommand);
                }
                Ok(Command::Availability {
                    hotel_id: hotel_id.to_string(),
                    date_range: middle.to_string(),
                    room_type: room_type.to_string(),
                })
            }
            "Search" => {
                if !middle.chars().all(|c| c.is_ascii_digit()) {
                    return Err(BookingError::InvalidCommand);
                }
                // at most i32::MAX days
                let days_ahead = middle
                    .parse::<i32>()
                    .ok()
                    .and_then(|n| u32::try_from(n).ok())
                    .ok_or(BookingError::InvalidDaysAhead)?;
                Ok(Command::Search {
                    hotel_id: hotel_id.to_string(),
                    days_ahead,
                    room_type: room_type.to_string(),
                })
            }
            _ => Err(BookingError::InvalidCommand),
        }
    }
}
