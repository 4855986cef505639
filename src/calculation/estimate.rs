//! Monthly budget estimation.
//!
//! This module composes tier selection, labor cost and overheads into an
//! [`EstimateResult`]. Estimation is a pure function of the request and the
//! budget tables.

use rust_decimal::Decimal;

use crate::config::BudgetConfig;
use crate::error::{WizardError, WizardResult};
use crate::models::{EstimateRequest, EstimateResult};

use super::labor_cost::calculate_labor_cost;
use super::revenue::projected_revenue;
use super::tier_selection::select_tier;

/// Estimates monthly spending using the standard budget tables.
///
/// # Errors
///
/// Returns `InvalidInput` when `room_count` or `nightly_rate` is zero or
/// negative, or when the nightly rate is too large to project revenue.
///
/// # Examples
///
/// ```
/// use hotel_wizard::calculation::estimate;
/// use rust_decimal::Decimal;
///
/// let result = estimate(30, Decimal::from(80)).unwrap();
/// assert_eq!(result.tier, "tier_3");
/// assert_eq!(result.bills, Decimal::from(8000));
///
/// assert!(estimate(0, Decimal::from(100)).is_err());
/// ```
pub fn estimate(room_count: i64, nightly_rate: Decimal) -> WizardResult<EstimateResult> {
    let request = EstimateRequest::new(room_count, nightly_rate)?;
    estimate_with_config(&request, &BudgetConfig::standard())
}

/// Estimates monthly spending for a validated request against `config`.
///
/// # Errors
///
/// Returns `InvalidInput` when the revenue projection overflows. Cost
/// overflow and uncovered room counts are `InvalidConfig`, which a
/// validated [`BudgetConfig`] rules out.
pub fn estimate_with_config(
    request: &EstimateRequest,
    config: &BudgetConfig,
) -> WizardResult<EstimateResult> {
    let tier = select_tier(request.room_count(), config.tiers())?;
    let labor = calculate_labor_cost(&tier.staffing, config.wages())?;
    let overhead = tier.overhead;
    let total_spending = overhead
        .total()
        .and_then(|total| total.checked_add(labor.total))
        .ok_or_else(|| WizardError::InvalidConfig {
            message: format!("monthly spending for tier '{}' overflows", tier.name),
        })?;
    let projected_revenue = projected_revenue(request)?;

    Ok(EstimateResult {
        tier: tier.name.clone(),
        bills: overhead.bills,
        supplies: overhead.supplies,
        maintenance: overhead.maintenance,
        total_labor: labor.total,
        total_spending,
        labor: labor.lines,
        projected_revenue,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn dec(n: i64) -> Decimal {
        Decimal::from(n)
    }

    #[test]
    fn test_small_hotel_scenario() {
        let result = estimate(5, dec(100)).unwrap();

        assert_eq!(result.tier, "tier_1");
        assert_eq!(result.bills, dec(2000));
        assert_eq!(result.supplies, dec(1000));
        assert_eq!(result.maintenance, dec(2000));
        assert_eq!(result.total_labor, dec(19360));
        assert_eq!(result.total_spending, dec(24360));
    }

    #[test]
    fn test_mid_size_hotel_scenario() {
        let result = estimate(30, dec(80)).unwrap();

        assert_eq!(result.tier, "tier_3");
        assert_eq!(result.bills, dec(8000));
        assert_eq!(result.supplies, dec(4000));
        assert_eq!(result.maintenance, dec(8000));
        // (10*13 + 4*12 + 28 + 21 + 16 + 4*11 + 3*15) * 160
        assert_eq!(result.total_labor, dec(53120));
        assert_eq!(result.total_spending, dec(73120));
    }

    #[test]
    fn test_every_tier_totals() {
        let expected = [
            (1, "tier_1", 19360, 24360),
            (10, "tier_2", 31520, 41520),
            (25, "tier_3", 53120, 73120),
            (50, "tier_4", 83200, 123200),
            (75, "tier_5", 122080, 202080),
        ];
        for (rooms, tier, labor, spending) in expected {
            let result = estimate(rooms, dec(100)).unwrap();
            assert_eq!(result.tier, tier, "rooms = {}", rooms);
            assert_eq!(result.total_labor, dec(labor), "rooms = {}", rooms);
            assert_eq!(result.total_spending, dec(spending), "rooms = {}", rooms);
        }
    }

    #[test]
    fn test_invalid_inputs_are_rejected() {
        assert!(matches!(
            estimate(0, dec(100)),
            Err(WizardError::InvalidInput { .. })
        ));
        assert!(matches!(
            estimate(10, dec(-5)),
            Err(WizardError::InvalidInput { .. })
        ));
    }

    #[test]
    fn test_huge_rate_is_rejected_not_panicking() {
        let request = EstimateRequest::parse("1000", "79228162514264337593543950335").unwrap();
        let result = estimate_with_config(&request, &BudgetConfig::standard());
        assert!(matches!(
            result,
            Err(WizardError::InvalidInput { ref field, .. }) if field == "nightly_rate"
        ));
    }

    #[test]
    fn test_largest_rate_for_one_room_is_estimated() {
        // rate * 30 * 0.65 stays in range at a hundredth of the maximum
        let rate = Decimal::MAX / Decimal::ONE_HUNDRED;
        let result = estimate(1, rate).unwrap();
        assert_eq!(result.total_spending, dec(24360));
    }

    #[test]
    fn test_revenue_does_not_change_spending() {
        let cheap = estimate(40, dec(1)).unwrap();
        let luxury = estimate(40, dec(5000)).unwrap();

        assert_ne!(cheap.projected_revenue, luxury.projected_revenue);
        assert_eq!(cheap.total_labor, luxury.total_labor);
        assert_eq!(cheap.total_spending, luxury.total_spending);
        assert_eq!(cheap.labor, luxury.labor);
    }

    #[test]
    fn test_labor_breakdown_sums_to_total() {
        let result = estimate(60, dec(120)).unwrap();
        let sum: Decimal = result.labor.iter().map(|line| line.amount).sum();
        assert_eq!(sum, result.total_labor);
    }

    proptest! {
        #[test]
        fn prop_spending_is_labor_plus_overheads(rooms in 1i64..1_000, rate in 1i64..10_000) {
            let result = estimate(rooms, dec(rate)).unwrap();
            prop_assert_eq!(
                result.total_spending,
                result.total_labor + result.bills + result.supplies + result.maintenance
            );
        }

        #[test]
        fn prop_estimate_is_idempotent(rooms in 1i64..1_000, cents in 1i64..1_000_000) {
            let rate = Decimal::new(cents, 2);
            prop_assert_eq!(estimate(rooms, rate).unwrap(), estimate(rooms, rate).unwrap());
        }

        #[test]
        fn prop_selected_tier_contains_room_count(rooms in 1u32..1_000) {
            let config = BudgetConfig::standard();
            let request = EstimateRequest::new(i64::from(rooms), Decimal::ONE).unwrap();
            let result = estimate_with_config(&request, &config).unwrap();
            let tier = config.tiers().iter().find(|t| t.name == result.tier).unwrap();
            prop_assert!(tier.contains(rooms));
        }

        #[test]
        fn prop_non_positive_room_counts_rejected(rooms in -1_000i64..=0) {
            prop_assert!(estimate(rooms, dec(100)).is_err());
        }
    }
}
