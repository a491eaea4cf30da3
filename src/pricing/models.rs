use crate::error::BookingError;
use clap::ValueEnum;
use std::fmt;
use std::str::FromStr;

/// Room category selecting a nightly rate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, ValueEnum)]
#[value(rename_all = "snake_case")]
pub enum RoomType {
    Single,
    Double,
    BedAndBreakfast,
    WithKitchen,
    Exclusive,
    Economy,
    Luxury,
    Budget,
    PremiumSuite,
}

impl RoomType {
    pub const ALL: [RoomType; 9] = [
        RoomType::Single,
        RoomType::Double,
        RoomType::BedAndBreakfast,
        RoomType::WithKitchen,
        RoomType::Exclusive,
        RoomType::Economy,
        RoomType::Luxury,
        RoomType::Budget,
        RoomType::PremiumSuite,
    ];

    /// Identifier used on the command line and in config files
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Single => "single",
            Self::Double => "double",
            Self::BedAndBreakfast => "bed_and_breakfast",
            Self::WithKitchen => "with_kitchen",
            Self::Exclusive => "exclusive",
            Self::Economy => "economy",
            Self::Luxury => "luxury",
            Self::Budget => "budget",
            Self::PremiumSuite => "premium_suite",
        }
    }

    /// Human-readable name, e.g. "bed and breakfast"
    pub fn display_name(&self) -> String {
        self.as_str().replace('_', " ")
    }
}

impl fmt::Display for RoomType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RoomType {
    type Err = BookingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|room| room.as_str() == s)
            .ok_or_else(|| BookingError::UnknownRoomType(s.to_string()))
    }
}

/// A single (room type, day count) pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BookingRequest {
    pub room_type: RoomType,
    pub days: i64,
}

/// Priced booking, ready for display
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingResult {
    pub room_type: RoomType,
    pub days: i64,
    pub unit_price: u64,
    pub total_cost: i64,
}

impl BookingResult {
    /// One-line confirmation printed by the CLI
    pub fn summary(&self, currency: &str) -> String {
        format!(
            "You booked a {} room for {} day(s). Total: {} {}",
            self.room_type.display_name(),
            self.days,
            currency,
            self.total_cost
        )
    }
}
