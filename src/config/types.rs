//! Configuration types for the budget estimator and the dashboard.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files, plus the built-in
//! standard budget tables.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::calculate_labor_cost;
use crate::error::{WizardError, WizardResult};
use crate::models::{LaborCategory, Overhead, Staffing, StaffingTier};

/// Hourly wage per labor category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WageTable {
    /// Hourly wage for housekeeping.
    pub housekeeping: Decimal,
    /// Hourly wage for clerical staff.
    pub clerical: Decimal,
    /// Hourly wage for management.
    pub management: Decimal,
    /// Hourly wage for supervisors.
    pub supervisory: Decimal,
    /// Hourly wage for security.
    pub security: Decimal,
    /// Hourly wage for kitchen staff.
    pub kitchen: Decimal,
    /// Hourly wage for miscellaneous staff.
    pub miscellaneous: Decimal,
}

impl WageTable {
    /// The standard wage table.
    pub fn standard() -> Self {
        Self {
            housekeeping: Decimal::from(13),
            clerical: Decimal::from(12),
            management: Decimal::from(28),
            supervisory: Decimal::from(21),
            security: Decimal::from(16),
            kitchen: Decimal::from(11),
            miscellaneous: Decimal::from(15),
        }
    }

    /// Returns the hourly wage for `category`.
    pub fn wage(&self, category: LaborCategory) -> Decimal {
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
}

/// Wages configuration file structure (`budget/wages.yaml`).
#[derive(Debug, Clone, Deserialize)]
pub struct WagesFile {
    /// Hourly wage per labor category.
    pub wages: WageTable,
}

/// Tiers configuration file structure (`budget/tiers.yaml`).
#[derive(Debug, Clone, Deserialize)]
pub struct TiersFile {
    /// Staffing tiers ordered by room count.
    pub tiers: Vec<StaffingTier>,
}

/// The complete budget configuration: wage table plus staffing tiers.
///
/// Construction validates that the tiers partition `[0, ∞)` into
/// consecutive half-open ranges, so tier selection always finds exactly
/// one tier.
///
/// # Example
///
/// ```
/// use hotel_wizard::config::BudgetConfig;
///
/// let config = BudgetConfig::standard();
/// assert_eq!(config.tiers().len(), 5);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BudgetConfig {
    wages: WageTable,
    tiers: Vec<StaffingTier>,
}

impl BudgetConfig {
    /// Creates a budget configuration, validating the tier layout.
    pub fn new(wages: WageTable, tiers: Vec<StaffingTier>) -> WizardResult<Self> {
        validate_tiers(&tiers)?;
        validate_wages(&wages)?;
        validate_costs(&wages, &tiers)?;
        Ok(Self { wages, tiers })
    }

    /// The built-in standard tables.
    pub fn standard() -> Self {
        Self {
            wages: WageTable::standard(),
            tiers: standard_tiers(),
        }
    }

    /// Returns the wage table.
    pub fn wages(&self) -> &WageTable {
        &self.wages
    }

    /// Returns the staffing tiers, ordered by room count.
    pub fn tiers(&self) -> &[StaffingTier] {
        &self.tiers
    }
}

impl Default for BudgetConfig {
    fn default() -> Self {
        Self::standard()
    }
}

fn validate_wages(wages: &WageTable) -> WizardResult<()> {
    for category in LaborCategory::ALL {
        let wage = wages.wage(category);
        if wage < Decimal::ZERO {
            return Err(WizardError::InvalidConfig {
                message: format!("wage for {} is negative: {}", category.label(), wage),
            });
        }
    }
    Ok(())
}

fn validate_costs(wages: &WageTable, tiers: &[StaffingTier]) -> WizardResult<()> {
    for tier in tiers {
        let labor = calculate_labor_cost(&tier.staffing, wages)?;
        let spending = tier
            .overhead
            .total()
            .and_then(|total| total.checked_add(labor.total));
        if spending.is_none() {
            return Err(WizardError::InvalidConfig {
                message: format!("monthly spending for tier '{}' overflows", tier.name),
            });
        }
    }
    Ok(())
}

fn validate_tiers(tiers: &[StaffingTier]) -> WizardResult<()> {
    let Some(first) = tiers.first() else {
        return Err(WizardError::InvalidConfig {
            message: "at least one staffing tier is required".to_string(),
        });
    };
    if first.min_rooms != 0 {
        return Err(WizardError::InvalidConfig {
            message: format!(
                "first tier '{}' must start at 0 rooms, starts at {}",
                first.name, first.min_rooms
            ),
        });
    }

    let mut expected_start = 0;
    for (index, tier) in tiers.iter().enumerate() {
        if tier.min_rooms != expected_start {
            return Err(WizardError::InvalidConfig {
                message: format!(
                    "tier '{}' starts at {} but the previous tier ends at {}",
                    tier.name, tier.min_rooms, expected_start
                ),
            });
        }
        let is_last = index + 1 == tiers.len();
        match tier.max_rooms {
            Some(max) if max <= tier.min_rooms => {
                return Err(WizardError::InvalidConfig {
                    message: format!(
                        "tier '{}' has an empty range [{}, {})",
                        tier.name, tier.min_rooms, max
                    ),
                });
            }
            Some(_) if is_last => {
                return Err(WizardError::InvalidConfig {
                    message: format!("last tier '{}' must be unbounded", tier.name),
                });
            }
            Some(max) => expected_start = max,
            None if !is_last => {
                return Err(WizardError::InvalidConfig {
                    message: format!("only the last tier may be unbounded, '{}' is not last", tier.name),
                });
            }
            None => {}
        }
        if tier.overhead.bills < Decimal::ZERO
            || tier.overhead.supplies < Decimal::ZERO
            || tier.overhead.maintenance < Decimal::ZERO
        {
            return Err(WizardError::InvalidConfig {
                message: format!("tier '{}' has a negative overhead", tier.name),
            });
        }
    }
    Ok(())
}

fn tier(
    name: &str,
    min_rooms: u32,
    max_rooms: Option<u32>,
    headcounts: [u32; 7],
    overhead: [i64; 3],
) -> StaffingTier {
    let [housekeeping, clerical, management, supervisory, security, kitchen, miscellaneous] =
        headcounts;
    let [bills, supplies, maintenance] = overhead;
    StaffingTier {
        name: name.to_string(),
        min_rooms,
        max_rooms,
        staffing: Staffing {
            housekeeping,
            clerical,
            management,
            supervisory,
            security,
            kitchen,
            miscellaneous,
        },
        overhead: Overhead {
            bills: Decimal::from(bills),
            supplies: Decimal::from(supplies),
            maintenance: Decimal::from(maintenance),
        },
    }
}

// Headcounts in LaborCategory::ALL order; overhead as bills, supplies, maintenance.
fn standard_tiers() -> Vec<StaffingTier> {
    vec![
        tier("tier_1", 0, Some(10), [2, 2, 1, 1, 0, 2, 0], [2000, 1000, 2000]),
        tier("tier_2", 10, Some(25), [5, 2, 1, 1, 0, 4, 1], [4000, 2000, 4000]),
        tier("tier_3", 25, Some(50), [10, 4, 1, 1, 1, 4, 3], [8000, 4000, 8000]),
        tier("tier_4", 50, Some(75), [15, 5, 1, 2, 2, 8, 5], [16000, 8000, 16000]),
        tier("tier_5", 75, None, [20, 5, 2, 3, 4, 10, 10], [32000, 16000, 32000]),
    ]
}

/// Names of the CSV files inside the data directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataFiles {
    /// One row per booking.
    #[serde(default = "default_bookings_file")]
    pub bookings: String,
    /// Adults booking per date.
    #[serde(default = "default_daily_headcount_file")]
    pub daily_headcount: String,
    /// Bookings per market segment.
    #[serde(default = "default_market_segments_file")]
    pub market_segments: String,
}

fn default_bookings_file() -> String {
    "hotel_bookings.csv".to_string()
}

fn default_daily_headcount_file() -> String {
    "hotelgrouped.csv".to_string()
}

fn default_market_segments_file() -> String {
    "hotelgroupedMarketSegment.csv".to_string()
}

impl Default for DataFiles {
    fn default() -> Self {
        Self {
            bookings: default_bookings_file(),
            daily_headcount: default_daily_headcount_file(),
            market_segments: default_market_segments_file(),
        }
    }
}

/// Dashboard settings from `dashboard.yaml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardSettings {
    /// Page heading.
    #[serde(default = "default_title")]
    pub title: String,
    /// CSV file names.
    #[serde(default)]
    pub data: DataFiles,
    /// Width of one lead-time histogram bucket, in days.
    #[serde(default = "default_lead_time_bin_days")]
    pub lead_time_bin_days: u32,
}

fn default_title() -> String {
    "HotelWizard".to_string()
}

fn default_lead_time_bin_days() -> u32 {
    10
}

impl Default for DashboardSettings {
    fn default() -> Self {
        Self {
            title: default_title(),
            data: DataFiles::default(),
            lead_time_bin_days: default_lead_time_bin_days(),
        }
    }
}

impl DashboardSettings {
    /// Checks the settings for values the views cannot work with.
    pub fn validate(&self) -> WizardResult<()> {
        if self.lead_time_bin_days == 0 {
            return Err(WizardError::InvalidConfig {
                message: "lead_time_bin_days must be greater than zero".to_string(),
            });
        }
        Ok(())
    }
}
