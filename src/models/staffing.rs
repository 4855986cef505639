//! Staffing tier models.
//!
//! This module defines the labor categories, the per-tier headcounts and
//! overheads, and the [`StaffingTier`] record that ties them to a room-count
//! range.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A category of hotel labor with its own hourly wage.
///
/// # Example
///
/// ```
/// use hotel_wizard::models::LaborCategory;
///
/// assert_eq!(LaborCategory::ALL.len(), 7);
/// assert_eq!(LaborCategory::Housekeeping.label(), "Housekeeping");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LaborCategory {
    /// Room cleaning staff.
    Housekeeping,
    /// Front desk and office clerks.
    Clerical,
    /// Hotel managers.
    Management,
    /// Shift supervisors.
    Supervisory,
    /// Security guards.
    Security,
    /// Kitchen staff.
    Kitchen,
    /// Everyone else (porters, gardeners, ...).
    Miscellaneous,
}

impl LaborCategory {
    /// Every labor category, in reporting order.
    pub const ALL: [LaborCategory; 7] = [
        LaborCategory::Housekeeping,
        LaborCategory::Clerical,
        LaborCategory::Management,
        LaborCategory::Supervisory,
        LaborCategory::Security,
        LaborCategory::Kitchen,
        LaborCategory::Miscellaneous,
    ];

    /// Human-readable name of the category.
    pub fn label(self) -> &'static str {
        match self {
            LaborCategory::Housekeeping => "Housekeeping",
            LaborCategory::Clerical => "Clerical",
            LaborCategory::Management => "Management",
            LaborCategory::Supervisory => "Supervisory",
            LaborCategory::Security => "Security",
            LaborCategory::Kitchen => "Kitchen",
            LaborCategory::Miscellaneous => "Miscellaneous",
        }
    }
}

/// Headcount per labor category for one tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Staffing {
    /// Number of housekeepers.
    pub housekeeping: u32,
    /// Number of clerks.
    pub clerical: u32,
    /// Number of managers.
    pub management: u32,
    /// Number of supervisors.
    pub supervisory: u32,
    /// Number of security guards.
    pub security: u32,
    /// Number of kitchen staff.
    pub kitchen: u32,
    /// Number of miscellaneous staff.
    pub miscellaneous: u32,
}

impl Staffing {
    /// Returns the headcount for `category`.
    pub fn headcount(&self, category: LaborCategory) -> u32 {
        match category {
            LaborCategory::Housekeeping => self.housekeeping,
            LaborCategory::Clerical => self.clerical,
            LaborCategory::Management => self.management,
            LaborCategory::Supervisory => self.supervisory,
            LaborCategory::Security => self.security,
            LaborCategory::Kitchen => self.kitchen,
            LaborCategory::Miscellaneous => self.miscellaneous,
        }
    }

    /// Total number of employees across all categories.
    pub fn total(&self) -> u64 {
        LaborCategory::ALL
            .iter()
            .map(|c| u64::from(self.headcount(*c)))
            .sum()
    }
}

/// Flat monthly overheads for one tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Overhead {
    /// Utility bills.
    pub bills: Decimal,
    /// Consumable supplies.
    pub supplies: Decimal,
    /// Building maintenance.
    pub maintenance: Decimal,
}

impl Overhead {
    /// Sum of the three overheads, or `None` if it overflows.
    pub fn total(&self) -> Option<Decimal> {
        self.bills
            .checked_add(self.supplies)?
            .checked_add(self.maintenance)
    }
}

/// A room-count bracket with its staffing and overhead profile.
///
/// The bracket is half-open: `min_rooms` is inclusive and `max_rooms` is
/// exclusive. A tier without `max_rooms` is unbounded above.
///
/// # Example
///
/// ```
/// use hotel_wizard::config::BudgetConfig;
///
/// let config = BudgetConfig::standard();
/// let first = &config.tiers()[0];
/// assert!(first.contains(9));
/// assert!(!first.contains(10));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaffingTier {
    /// Identifier of the tier (e.g., "tier_1").
    pub name: String,
    /// Smallest room count in this tier (inclusive).
    pub min_rooms: u32,
    /// First room count past this tier, or `None` if unbounded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_rooms: Option<u32>,
    /// Headcount per labor category.
    pub staffing: Staffing,
    /// Flat monthly overheads.
    pub overhead: Overhead,
}

impl StaffingTier {
    /// Returns true if `room_count` falls within this tier's range.
    pub fn contains(&self, room_count: u32) -> bool {
        room_count >= self.min_rooms && self.max_rooms.is_none_or(|max| room_count < max)
    }
}
