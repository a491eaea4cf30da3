use anyhow::Result;
use hotel_booking::config::Config;
use hotel_booking::pricing::{BookingRequest, CostCalculator, PriceTable};
use tracing::info;

/// Execute the booking command
///
/// Prices the request against `table` and prints one summary line to stdout.
pub fn execute(cfg: &Config, table: &PriceTable, request: &BookingRequest) -> Result<()> {
    let summary = render(cfg, table, request)?;
    println!("{}", summary);
    Ok(())
}

fn render(cfg: &Config, table: &PriceTable, request: &BookingRequest) -> Result<String> {
    let calculator = CostCalculator::new(table);
    let result = calculator.book(request)?;

    info!(
        room_type = %result.room_type,
        days = result.days,
        total_cost = result.total_cost,
        "Booking priced"
    );

    Ok(result.summary(&cfg.currency))
}
