use crate::error::BookingError;
use crate::pricing::PriceTable;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

/// Config file looked up in the working directory when `--config` is not given
pub const DEFAULT_CONFIG_FILE: &str = "hotel.toml";

/// Prefix for environment overrides, e.g. `HOTEL_BOOKING__CURRENCY=USD`
pub const ENV_PREFIX: &str = "HOTEL_BOOKING";

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Label printed in front of the total
    pub currency: String,
    pub log_level: String,
    /// "text" or "json"
    pub log_format: String,
    /// Per-room rate overrides keyed by room identifier
    #[serde(default)]
    pub prices: HashMap<String, u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            currency: "KES".to_string(),
            log_level: "warn".to_string(),
            log_format: "text".to_string(),
            prices: HashMap::new(),
        }
    }
}

impl Config {
    /// Standard rates with this config's overrides applied
    pub fn price_table(&self) -> Result<PriceTable, BookingError> {
        PriceTable::standard().with_overrides(&self.prices)
    }
}

/// Load configuration from an optional file plus environment overrides
///
/// An explicitly given file must exist; the default `hotel.toml` may be absent.
pub fn load_config(path: Option<&Path>) -> Result<Config, BookingError> {
    let defaults = Config::default();

    let file = match path {
        Some(path) => config::File::from(path).required(true),
        None => config::File::with_name(DEFAULT_CONFIG_FILE).required(false),
    };

    let config = config::Config::builder()
        .set_default("currency", defaults.currency)?
        .set_default("log_level", defaults.log_level)?
        .set_default("log_format", defaults.log_format)?
        .add_source(file)
        .add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    let cfg: Config = config.try_deserialize()?;
    validate_config(&cfg)?;

    Ok(cfg)
}

fn validate_config(cfg: &Config) -> Result<(), BookingError> {
    if cfg.currency.trim().is_empty() {
        return Err(BookingError::Config(
            "Currency label cannot be empty".to_string(),
        ));
    }

    match cfg.log_format.as_str() {
        "text" | "json" => {}
        other => {
            return Err(BookingError::Config(format!(
                "Invalid log format: {} (expected \"text\" or \"json\")",
                other
            )))
        }
    }

    // Every override must name a known room
    cfg.price_table().map_err(|e| match e {
        BookingError::UnknownRoomType(name) => {
            BookingError::Config(format!("Price override for unknown room type: {}", name))
        }
        other => other,
    })?;

    Ok(())
}
