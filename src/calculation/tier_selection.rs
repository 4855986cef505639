//! Staffing tier selection.
//!
//! This module maps a room count onto the one staffing tier whose
//! half-open range contains it.

use crate::error::{WizardError, WizardResult};
use crate::models::StaffingTier;

/// Selects the staffing tier for `room_count`.
///
/// Tiers are scanned in order and the first one whose range contains the
/// room count wins. Boundaries are exact: a room count equal to a tier's
/// `max_rooms` belongs to the next tier.
///
/// # Errors
///
/// Returns `InvalidConfig` if no tier covers the room count, which cannot
/// happen for a validated [`BudgetConfig`](crate::config::BudgetConfig).
///
/// # Examples
///
/// ```
/// use hotel_wizard::calculation::select_tier;
/// use hotel_wizard::config::BudgetConfig;
///
/// let config = BudgetConfig::standard();
/// assert_eq!(select_tier(9, config.tiers()).unwrap().name, "tier_1");
/// assert_eq!(select_tier(10, config.tiers()).unwrap().name, "tier_2");
/// ```
pub fn select_tier(room_count: u32, tiers: &[StaffingTier]) -> WizardResult<&StaffingTier> {
    tiers
        .iter()
        .find(|tier| tier.contains(room_count))
        .ok_or_else(|| WizardError::InvalidConfig {
            message: format!("no staffing tier covers {} rooms", room_count),
        })
}
