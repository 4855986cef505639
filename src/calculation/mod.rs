//! Budget calculation logic for HotelWizard.
//!
//! This module contains the calculator behind the dashboard's budget form:
//! staffing tier selection by room count, monthly labor cost per category,
//! the informational revenue projection, and the composed estimate.

mod estimate;
mod labor_cost;
mod revenue;
mod tier_selection;

pub use estimate::{estimate, estimate_with_config};
pub use labor_cost::{LaborCostResult, MONTHLY_HOURS, calculate_labor_cost};
pub use revenue::{DAYS_PER_MONTH, occupancy_factor, projected_revenue};
pub use tier_selection::select_tier;
