//! Budget estimate request and result models.
//!
//! This module contains the validated [`EstimateRequest`] and the
//! [`EstimateResult`] produced by the budget estimator, including the
//! per-category labor breakdown.

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{WizardError, WizardResult};

use super::LaborCategory;

/// Field name used when the room count is rejected.
pub const ROOM_COUNT_FIELD: &str = "room_count";

/// Field name used when the nightly rate is rejected.
pub const NIGHTLY_RATE_FIELD: &str = "nightly_rate";

/// A validated request for a monthly budget estimate.
///
/// Both values are guaranteed positive; construct through [`EstimateRequest::new`]
/// or [`EstimateRequest::parse`].
///
/// # Example
///
/// ```
/// use hotel_wizard::models::EstimateRequest;
///
/// let request = EstimateRequest::parse("12", "89.50").unwrap();
/// assert_eq!(request.room_count(), 12);
///
/// assert!(EstimateRequest::parse("0", "100").is_err());
/// assert!(EstimateRequest::parse("ten", "100").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EstimateRequest {
    room_count: u32,
    nightly_rate: Decimal,
}

impl EstimateRequest {
    /// Creates a request from numeric values.
    ///
    /// Fails with `InvalidInput` when either value is zero or negative, or
    /// when the room count does not fit in a `u32`.
    pub fn new(room_count: i64, nightly_rate: Decimal) -> WizardResult<Self> {
        if room_count <= 0 {
            return Err(WizardError::invalid_input(
                ROOM_COUNT_FIELD,
                format!("must be greater than zero, got {}", room_count),
            ));
        }
        let room_count = u32::try_from(room_count).map_err(|_| {
            WizardError::invalid_input(
                ROOM_COUNT_FIELD,
                format!("must be at most {}, got {}", u32::MAX, room_count),
            )
        })?;

        if nightly_rate <= Decimal::ZERO {
            return Err(WizardError::invalid_input(
                NIGHTLY_RATE_FIELD,
                format!("must be greater than zero, got {}", nightly_rate),
            ));
        }

        Ok(Self {
            room_count,
            nightly_rate,
        })
    }

    /// Creates a request from the two text fields of the calculator form.
    ///
    /// Surrounding whitespace is ignored. The room count must be a whole
    /// number; the nightly rate may have a fractional part.
    pub fn parse(room_count: &str, nightly_rate: &str) -> WizardResult<Self> {
        let rooms_text = room_count.trim();
        let rooms = rooms_text.parse::<i64>().map_err(|_| {
            WizardError::invalid_input(
                ROOM_COUNT_FIELD,
                format!("expected a whole number, got '{}'", rooms_text),
            )
        })?;

        let rate_text = nightly_rate.trim();
        let rate = Decimal::from_str(rate_text).map_err(|_| {
            WizardError::invalid_input(
                NIGHTLY_RATE_FIELD,
                format!("expected a number, got '{}'", rate_text),
            )
        })?;

        Self::new(rooms, rate)
    }

    /// Number of rooms in the hotel.
    pub fn room_count(&self) -> u32 {
        self.room_count
    }

    /// Price of one room for one night.
    pub fn nightly_rate(&self) -> Decimal {
        self.nightly_rate
    }
}

/// Monthly cost of one labor category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LaborLine {
    /// The labor category.
    pub category: LaborCategory,
    /// Number of employees in this category.
    pub headcount: u32,
    /// Hourly wage for this category.
    pub hourly_wage: Decimal,
    /// Hours worked per employee per month.
    pub monthly_hours: u32,
    /// Total monthly cost (headcount * hourly_wage * monthly_hours).
    pub amount: Decimal,
}

/// Recommended monthly spending for a hotel.
///
/// The five headline figures are `bills`, `supplies`, `maintenance`,
/// `total_labor` and `total_spending`; `Display` renders them as the
/// calculator's summary line.
///
/// # Example
///
/// ```
/// use hotel_wizard::calculation::estimate;
/// use rust_decimal::Decimal;
///
/// let result = estimate(5, Decimal::from(100)).unwrap();
/// assert_eq!(
///     result.to_string(),
///     "Bills: 2000, Supplies: 1000, Maintenance: 2000, Total labor: 19360, Total spending: 24360"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EstimateResult {
    /// Name of the staffing tier the room count fell into.
    pub tier: String,
    /// Monthly utility bills.
    pub bills: Decimal,
    /// Monthly supplies.
    pub supplies: Decimal,
    /// Monthly maintenance.
    pub maintenance: Decimal,
    /// Sum of all labor lines.
    pub total_labor: Decimal,
    /// Labor plus the three overheads.
    pub total_spending: Decimal,
    /// Labor cost per category, in [`LaborCategory::ALL`] order.
    pub labor: Vec<LaborLine>,
    /// Expected monthly room revenue. Informational only.
    pub projected_revenue: Decimal,
}

impl EstimateResult {
    /// Returns the calculator summary line.
    pub fn summary(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for EstimateResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Bills: {}, Supplies: {}, Maintenance: {}, Total labor: {}, Total spending: {}",
            self.bills, self.supplies, self.maintenance, self.total_labor, self.total_spending
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field_of(err: WizardError) -> String {
        match err {
            WizardError::InvalidInput { field, .. } => field,
            other => panic!("Expected InvalidInput, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_accepts_whitespace_and_fractional_rate() {
        let request = EstimateRequest::parse(" 30 ", "79.99\n").unwrap();
        assert_eq!(request.room_count(), 30);
        assert_eq!(request.nightly_rate(), Decimal::from_str("79.99").unwrap());
    }

    #[test]
    fn test_parse_rejects_non_numeric_room_count() {
        let err = EstimateRequest::parse("many", "100").unwrap_err();
        assert_eq!(field_of(err), ROOM_COUNT_FIELD);
    }

    #[test]
    fn test_parse_rejects_fractional_room_count() {
        let err = EstimateRequest::parse("5.5", "100").unwrap_err();
        assert_eq!(field_of(err), ROOM_COUNT_FIELD);
    }

    #[test]
    fn test_parse_rejects_empty_fields() {
        assert_eq!(
            field_of(EstimateRequest::parse("", "100").unwrap_err()),
            ROOM_COUNT_FIELD
        );
        assert_eq!(
            field_of(EstimateRequest::parse("5", "  ").unwrap_err()),
            NIGHTLY_RATE_FIELD
        );
    }

    #[test]
    fn test_parse_rejects_non_numeric_rate() {
        let err = EstimateRequest::parse("5", "cheap").unwrap_err();
        assert_eq!(field_of(err), NIGHTLY_RATE_FIELD);
    }

    #[test]
    fn test_new_rejects_zero_and_negative_values() {
        assert_eq!(
            field_of(EstimateRequest::new(0, Decimal::from(100)).unwrap_err()),
            ROOM_COUNT_FIELD
        );
        assert_eq!(
            field_of(EstimateRequest::new(-3, Decimal::from(100)).unwrap_err()),
            ROOM_COUNT_FIELD
        );
        assert_eq!(
            field_of(EstimateRequest::new(10, Decimal::from(-5)).unwrap_err()),
            NIGHTLY_RATE_FIELD
        );
        assert_eq!(
            field_of(EstimateRequest::new(10, Decimal::ZERO).unwrap_err()),
            NIGHTLY_RATE_FIELD
        );
    }

    #[test]
    fn test_new_rejects_room_count_beyond_u32() {
        let err = EstimateRequest::new(i64::from(u32::MAX) + 1, Decimal::ONE).unwrap_err();
        assert_eq!(field_of(err), ROOM_COUNT_FIELD);
    }

    #[test]
    fn test_summary_lists_fields_in_order() {
        let result = EstimateResult {
            tier: "tier_1".to_string(),
            bills: Decimal::from(1),
            supplies: Decimal::from(2),
            maintenance: Decimal::from(3),
            total_labor: Decimal::from(4),
            total_spending: Decimal::from(10),
            labor: vec![],
            projected_revenue: Decimal::ZERO,
        };
        assert_eq!(
            result.summary(),
            "Bills: 1, Supplies: 2, Maintenance: 3, Total labor: 4, Total spending: 10"
        );
    }
}
