pub mod calculator;
pub mod models;
pub mod table;

pub use calculator::CostCalculator;
pub use models::{BookingRequest, BookingResult, RoomType};
pub use table::PriceTable;
