//! Core data models for HotelWizard.
//!
//! This module contains the domain models shared by the budget estimator,
//! the dataset loader and the dashboard views.

mod booking;
mod estimate;
mod staffing;

pub use booking::{
    Booking, CancellationStatus, DailyHeadcount, MAX_LEAD_TIME_DAYS, MarketSegmentCount,
};
pub use estimate::{
    EstimateRequest, EstimateResult, LaborLine, NIGHTLY_RATE_FIELD, ROOM_COUNT_FIELD,
};
pub use staffing::{LaborCategory, Overhead, Staffing, StaffingTier};
