use anyhow::{Context, Result};
use colored::Colorize;

mod cli;
mod commands;

use hotel_booking::{config, init_tracing};

fn main() {
    // Parse CLI arguments; exits with code 2 on invalid input
    let args = cli::Cli::parse_or_exit();

    if let Err(e) = run(&args) {
        eprintln!("{} {:#}", "error:".red().bold(), e);
        std::process::exit(1);
    }
}

fn run(args: &cli::Cli) -> Result<()> {
    let cfg = config::load_config(args.config.as_deref()).context("Failed to load configuration")?;

    init_tracing(&cfg.log_level, cfg.log_format == "json");

    let table = cfg.price_table()?;
    tracing::debug!("Loaded price table with {} room types", table.len());

    commands::book::execute(&cfg, &table, &args.booking_request())
}
