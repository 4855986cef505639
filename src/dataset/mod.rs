//! Booking dataset ingestion.
//!
//! This module loads the hotel booking CSV files into a [`Dataset`] and
//! resolves country codes to display names.

mod country;
mod loader;

pub use country::country_name;
pub use loader::{
    Dataset, LoadReport, parse_bookings, parse_daily_headcount, parse_market_segments,
};
