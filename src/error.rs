use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BookingError {
    #[error("Failed to read {}: {source}", path.display())]
    DataRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {}: {source}", path.display())]
    DataParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Hotel not found: {0}")]
    HotelNotFound(String),

    #[error("Room type '{room_type}' not found in hotel '{hotel_id}'")]
    RoomTypeNotFound { hotel_id: String, room_type: String },

    #[error("Invalid date format. Expected YYYYMMDD")]
    InvalidDate,

    #[error("Invalid date range format. Expected 'YYYYMMDD-YYYYMMDD'")]
    MalformedDateRange,

    #[error("End date cannot be before start date")]
    ReversedDateRange,

    #[error("Days ahead must be positive")]
    NonPositiveDaysAhead,

    #[error("Invalid days ahead format")]
    InvalidDaysAhead,

    #[error("Invalid command")]
    InvalidCommand,
}

pub type Result<T> = std::result::Result<T, BookingError>;
