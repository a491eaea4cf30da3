use thiserror::Error;

/// Booking error types
#[derive(Debug, Error)]
pub enum BookingError {
    /// Room type identifier is not part of the room enumeration
    #[error("Unknown room type: {0}")]
    UnknownRoomType(String),

    /// Room type is known but the price table has no rate for it
    #[error("No price configured for room type: {0}")]
    MissingPrice(String),

    /// unit_price * days does not fit in an i64
    #[error("Cost overflow: {unit_price} x {days} days")]
    CostOverflow { unit_price: u64, days: i64 },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<config::ConfigError> for BookingError {
    fn from(err: config::ConfigError) -> Self {
        Self::Config(err.to_string())
    }
}
