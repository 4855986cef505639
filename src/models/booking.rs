//! Booking dataset models.
//!
//! This module defines the cleaned records the dashboard aggregates: one
//! [`Booking`] per reservation plus the two pre-grouped tables shipped next
//! to the bookings file.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Whether a booking was cancelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum CancellationStatus {
    /// The guest arrived (or has not cancelled yet).
    #[serde(rename = "Not Cancelled")]
    NotCancelled,
    /// The booking was cancelled.
    #[serde(rename = "Cancelled")]
    Cancelled,
}

impl CancellationStatus {
    /// Maps the dataset's `is_canceled` flag.
    pub fn from_flag(is_canceled: bool) -> Self {
        if is_canceled {
            CancellationStatus::Cancelled
        } else {
            CancellationStatus::NotCancelled
        }
    }

    /// Display label used in chart legends.
    pub fn label(self) -> &'static str {
        match self {
            CancellationStatus::NotCancelled => "Not Cancelled",
            CancellationStatus::Cancelled => "Cancelled",
        }
    }
}

/// Longest lead time a booking may have, in days. Rows beyond it are
/// treated as malformed.
pub const MAX_LEAD_TIME_DAYS: u32 = 3650;

/// A single cleaned hotel booking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Booking {
    /// The arrival date.
    pub date: NaiveDate,
    /// Days between booking and arrival.
    pub lead_time: u32,
    /// Cancellation status.
    pub status: CancellationStatus,
    /// Raw ISO 3166-1 alpha-3 code from the dataset.
    pub country_code: String,
    /// Full country name, or empty when the code is unknown.
    pub country_name: String,
    /// Market segment (e.g., "Online TA").
    pub market_segment: String,
    /// Number of adults.
    pub adults: u32,
    /// Number of children (missing values count as zero).
    pub children: u32,
    /// Number of babies.
    pub babies: u32,
}

impl Booking {
    /// Total number of people on the booking.
    pub fn party_size(&self) -> u64 {
        u64::from(self.adults) + u64::from(self.children) + u64::from(self.babies)
    }
}

/// Number of adults booking on a given date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyHeadcount {
    /// The date.
    pub date: NaiveDate,
    /// Number of adults.
    pub adults: u64,
}

/// Number of bookings in a market segment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarketSegmentCount {
    /// The market segment name.
    pub market_segment: String,
    /// Number of bookings.
    pub count: u64,
}
