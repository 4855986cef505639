//! Projected monthly room revenue.

use rust_decimal::Decimal;

use crate::error::{WizardError, WizardResult};
use crate::models::{EstimateRequest, NIGHTLY_RATE_FIELD};

/// Days in a billing month.
pub const DAYS_PER_MONTH: u32 = 30;

/// Average share of rooms occupied on a given night (65%).
pub fn occupancy_factor() -> Decimal {
    Decimal::new(65, 2)
}

/// Projects monthly room revenue as rate * rooms * 30 days * 65% occupancy.
///
/// The figure is reported alongside an estimate but never feeds into the
/// spending totals.
///
/// # Errors
///
/// Returns `InvalidInput` on `nightly_rate` when the projection does not fit
/// in a [`Decimal`].
pub fn projected_revenue(request: &EstimateRequest) -> WizardResult<Decimal> {
    request
        .nightly_rate()
        .checked_mul(Decimal::from(request.room_count()))
        .and_then(|revenue| revenue.checked_mul(Decimal::from(DAYS_PER_MONTH)))
        .and_then(|revenue| revenue.checked_mul(occupancy_factor()))
        .ok_or_else(|| {
            WizardError::invalid_input(NIGHTLY_RATE_FIELD, "is too large to project revenue")
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_revenue_for_small_hotel() {
        let request = EstimateRequest::new(5, Decimal::from(100)).unwrap();
        assert_eq!(projected_revenue(&request).unwrap(), Decimal::from(9750));
    }

    #[test]
    fn test_revenue_with_fractional_rate() {
        let request = EstimateRequest::new(2, Decimal::from_str("99.50").unwrap()).unwrap();
        assert_eq!(
            projected_revenue(&request).unwrap(),
            Decimal::from_str("3880.5").unwrap()
        );
    }

    #[test]
    fn test_revenue_overflow_is_invalid_rate() {
        let request = EstimateRequest::parse("1000", "79228162514264337593543950335").unwrap();
        match projected_revenue(&request) {
            Err(WizardError::InvalidInput { field, .. }) => assert_eq!(field, "nightly_rate"),
            other => panic!("Expected InvalidInput, got {:?}", other),
        }
    }
}
