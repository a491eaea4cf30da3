use crate::error::BookingError;
use crate::pricing::models::RoomType;
use std::collections::{BTreeMap, HashMap};
use tracing::debug;

/// Nightly rates per room type
///
/// Built once at startup and handed to the calculator by reference. There is
/// no way to mutate a table after construction; overrides produce a new one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceTable {
    prices: BTreeMap<RoomType, u64>,
}

impl PriceTable {
    /// Canonical rates
    pub fn standard() -> Self {
        [
            (RoomType::Single, 2000),
            (RoomType::Double, 3500),
            (RoomType::BedAndBreakfast, 4000),
            (RoomType::WithKitchen, 4500),
            (RoomType::Exclusive, 6000),
            (RoomType::Economy, 1500),
            (RoomType::Luxury, 9500),
            (RoomType::Budget, 1000),
            (RoomType::PremiumSuite, 10000),
        ]
        .into_iter()
        .collect()
    }

    /// Return a copy with the given rates replaced
    ///
    /// Keys are room type identifiers as they appear in config files.
    pub fn with_overrides(&self, overrides: &HashMap<String, u64>) -> Result<Self, BookingError> {
        let mut prices = self.prices.clone();
        for (name, price) in overrides {
            let room: RoomType = name.parse()?;
            debug!("Overriding price for {}: {}", room, price);
            prices.insert(room, *price);
        }
        Ok(Self { prices })
    }

    pub fn unit_price(&self, room_type: RoomType) -> Option<u64> {
        self.prices.get(&room_type).copied()
    }

    pub fn len(&self) -> usize {
        self.prices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }
}

impl FromIterator<(RoomType, u64)> for PriceTable {
    fn from_iter<I: IntoIterator<Item = (RoomType, u64)>>(iter: I) -> Self {
        Self {
            prices: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_table_covers_every_room() {
        let table = PriceTable::standard();
        assert_eq!(table.len(), RoomType::ALL.len());
        for room in RoomType::ALL {
            assert!(table.unit_price(room).is_some(), "missing {}", room);
        }
    }

    #[test]
    fn test_standard_rates() {
        let table = PriceTable::standard();
        assert_eq!(table.unit_price(RoomType::Single), Some(2000));
        assert_eq!(table.unit_price(RoomType::Luxury), Some(9500));
        assert_eq!(table.unit_price(RoomType::PremiumSuite), Some(10000));
    }

    #[test]
    fn test_overrides_replace_rate() {
        let mut overrides = HashMap::new();
        overrides.insert("luxury".to_string(), 8000);

        let base = PriceTable::standard();
        let table = base.with_overrides(&overrides).unwrap();

        assert_eq!(table.unit_price(RoomType::Luxury), Some(8000));
        assert_eq!(table.unit_price(RoomType::Double), Some(3500));
        // original is untouched
        assert_eq!(base.unit_price(RoomType::Luxury), Some(9500));
    }

    #[test]
    fn test_overrides_reject_unknown_room() {
        let mut overrides = HashMap::new();
        overrides.insert("penthouse".to_string(), 50000);

        let result = PriceTable::standard().with_overrides(&overrides);
        assert!(matches!(result, Err(BookingError::UnknownRoomType(_))));
    }

    #[test]
    fn test_partial_table() {
        let table: PriceTable = [(RoomType::Budget, 1000)].into_iter().collect();
        assert_eq!(table.len(), 1);
        assert_eq!(table.unit_price(RoomType::Single), None);
    }
}
