use clap::error::{Error, ErrorKind};
use clap::{CommandFactory, Parser};
use hotel_booking::pricing::{BookingRequest, RoomType};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "hotel-booking", version, about = "Hotel Room Booking System")]
pub struct Cli {
    /// Configuration file path (defaults to ./hotel.toml when present)
    #[arg(short, long, env = "HOTEL_BOOKING_CONFIG")]
    pub config: Option<PathBuf>,

    /// Type of room to book
    #[arg(value_enum)]
    pub room_type: RoomType,

    /// Number of days to stay
    #[arg(allow_negative_numbers = true)]
    pub days: i64,
}

impl Cli {
    /// Parse process arguments, exiting with clap's code on failure
    ///
    /// Value errors get the usage line appended; clap only prints it for
    /// missing or unexpected arguments.
    pub fn parse_or_exit() -> Self {
        match Self::try_parse() {
            Ok(cli) => cli,
            Err(e) => match usage_hint(&e) {
                Some(usage) => {
                    let _ = e.print();
                    eprintln!("\n{}", usage);
                    std::process::exit(e.exit_code());
                }
                None => e.exit(),
            },
        }
    }

    pub fn booking_request(&self) -> BookingRequest {
        BookingRequest {
            room_type: self.room_type,
            days: self.days,
        }
    }
}

/// Usage line to print after a rejected value, if clap leaves it out
fn usage_hint(err: &Error) -> Option<String> {
    match err.kind() {
        ErrorKind::InvalidValue | ErrorKind::ValueValidation => {
            Some(Cli::command().render_usage().to_string())
        }
        _ => None,
    }
}
