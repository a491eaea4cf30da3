//! Command implementations for the CLI
//!
//! - book: price a booking and print the confirmation line

pub mod book;
