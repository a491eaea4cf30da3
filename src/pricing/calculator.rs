use crate::error::BookingError;
use crate::pricing::models::{BookingRequest, BookingResult, RoomType};
use crate::pricing::table::PriceTable;
use tracing::debug;

/// Calculator for computing booking costs from a price table
pub struct CostCalculator<'a> {
    table: &'a PriceTable,
}

impl<'a> CostCalculator<'a> {
    /// Create a new cost calculator
    pub fn new(table: &'a PriceTable) -> Self {
        Self { table }
    }

    /// Calculate total cost for a room identifier and a number of days
    ///
    /// Unrecognised identifiers are an error, not a zero price.
    pub fn calculate_cost(&self, room_type: &str, days: i64) -> Result<i64, BookingError> {
        let room: RoomType = room_type.parse()?;
        self.calculate(room, days)
    }

    /// Calculate total cost for an already validated room type
    pub fn calculate(&self, room_type: RoomType, days: i64) -> Result<i64, BookingError> {
        self.book(&BookingRequest { room_type, days })
            .map(|result| result.total_cost)
    }

    /// Price a booking request
    pub fn book(&self, request: &BookingRequest) -> Result<BookingResult, BookingError> {
        let unit_price = self
            .table
            .unit_price(request.room_type)
            .ok_or_else(|| BookingError::MissingPrice(request.room_type.to_string()))?;
        let total_cost = multiply(unit_price, request.days)?;

        debug!(
            room_type = %request.room_type,
            days = request.days,
            unit_price,
            total_cost,
            "Calculated booking cost"
        );
        Ok(BookingResult {
            room_type: request.room_type,
            days: request.days,
            unit_price,
            total_cost,
        })
    }
}

/// unit_price * days, refusing to wrap
fn multiply(unit_price: u64, days: i64) -> Result<i64, BookingError> {
    i64::try_from(unit_price)
        .ok()
        .and_then(|price| price.checked_mul(days))
        .ok_or(BookingError::CostOverflow { unit_price, days })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_room() {
        let table = PriceTable::standard();
        let calculator = CostCalculator::new(&table);
        assert_eq!(calculator.calculate_cost("single", 2).unwrap(), 4000);
    }

    #[test]
    fn test_double_room() {
        let table = PriceTable::standard();
        let calculator = CostCalculator::new(&table);
        assert_eq!(calculator.calculate_cost("double", 1).unwrap(), 3500);
    }

    #[test]
    fn test_luxury_room() {
        let table = PriceTable::standard();
        let calculator = CostCalculator::new(&table);
        assert_eq!(calculator.calculate_cost("luxury", 1).unwrap(), 9500);
    }

    #[test]
    fn test_economy_room() {
        let table = PriceTable::standard();
        let calculator = CostCalculator::new(&table);
        assert_eq!(calculator.calculate_cost("economy", 1).unwrap(), 1500);
    }

    #[test]
    fn test_premium_suite() {
        let table = PriceTable::standard();
        let calculator = CostCalculator::new(&table);
        assert_eq!(calculator.calculate_cost("premium_suite", 2).unwrap(), 20000);
    }

    #[test]
    fn test_unknown_room_is_error() {
        let table = PriceTable::standard();
        let calculator = CostCalculator::new(&table);

        let result = calculator.calculate_cost("opera", 3);
        assert!(matches!(result, Err(BookingError::UnknownRoomType(ref name)) if name == "opera"));
    }

    #[test]
    fn test_negative_days_pass_through() {
        let table = PriceTable::standard();
        let calculator = CostCalculator::new(&table);
        assert_eq!(calculator.calculate(RoomType::Budget, -3).unwrap(), -3000);
    }

    #[test]
    fn test_missing_price_in_partial_table() {
        let table: PriceTable = [(RoomType::Budget, 1000)].into_iter().collect();
        let calculator = CostCalculator::new(&table);

        let result = calculator.calculate(RoomType::Luxury, 1);
        assert!(matches!(result, Err(BookingError::MissingPrice(ref name)) if name == "luxury"));
    }

    #[test]
    fn test_overflow_is_error() {
        let table = PriceTable::standard();
        let calculator = CostCalculator::new(&table);

        let result = calculator.calculate(RoomType::PremiumSuite, i64::MAX);
        assert!(matches!(result, Err(BookingError::CostOverflow { unit_price: 10000, .. })));
    }

    #[test]
    fn test_unit_price_beyond_i64_is_overflow() {
        let table: PriceTable = [(RoomType::Exclusive, u64::MAX)].into_iter().collect();
        let calculator = CostCalculator::new(&table);

        let result = calculator.calculate(RoomType::Exclusive, 1);
        assert!(matches!(result, Err(BookingError::CostOverflow { .. })));
    }

    #[test]
    fn test_book_fills_result() {
        let table = PriceTable::standard();
        let calculator = CostCalculator::new(&table);

        let result = calculator
            .book(&BookingRequest {
                room_type: RoomType::BedAndBreakfast,
                days: 2,
            })
            .unwrap();

        assert_eq!(result.unit_price, 4000);
        assert_eq!(result.total_cost, 8000);
        assert_eq!(
            result.summary("KES"),
            "You booked a bed and breakfast room for 2 day(s). Total: KES 8000"
        );
    }

    #[test]
    fn test_book_and_calculate_agree() {
        let table = PriceTable::standard();
        let calculator = CostCalculator::new(&table);

        for room in RoomType::ALL {
            for days in [-1, 0, 1, 7] {
                let result = calculator.book(&BookingRequest { room_type: room, days }).unwrap();
                assert_eq!(calculator.calculate(room, days).unwrap(), result.total_cost);
                assert_eq!(Some(result.unit_price), table.unit_price(room));
            }
        }
    }
}
