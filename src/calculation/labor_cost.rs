//! Monthly labor cost calculation.
//!
//! Each labor category costs headcount * hourly wage * monthly hours, where
//! a full-time employee is assumed to work [`MONTHLY_HOURS`] hours a month.

use rust_decimal::Decimal;

use crate::config::WageTable;
use crate::error::{WizardError, WizardResult};
use crate::models::{LaborCategory, LaborLine, Staffing};

/// Hours one full-time employee works per month.
pub const MONTHLY_HOURS: u32 = 160;

/// The labor lines of a tier together with their sum.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaborCostResult {
    /// One line per labor category, in [`LaborCategory::ALL`] order.
    pub lines: Vec<LaborLine>,
    /// Sum of all line amounts.
    pub total: Decimal,
}

/// Calculates the monthly labor cost for a staffing profile.
///
/// Categories with a headcount of zero still produce a line (with a zero
/// amount) so the breakdown always lists all seven categories.
///
/// # Errors
///
/// Returns `InvalidConfig` when a line amount or the total does not fit in
/// a [`Decimal`].
///
/// # Examples
///
/// ```
/// use hotel_wizard::calculation::calculate_labor_cost;
/// use hotel_wizard::config::BudgetConfig;
/// use rust_decimal::Decimal;
///
/// let config = BudgetConfig::standard();
/// let result = calculate_labor_cost(&config.tiers()[0].staffing, config.wages()).unwrap();
/// assert_eq!(result.total, Decimal::from(19360));
/// ```
pub fn calculate_labor_cost(
    staffing: &Staffing,
    wages: &WageTable,
) -> WizardResult<LaborCostResult> {
    let hours = Decimal::from(MONTHLY_HOURS);
    let lines = LaborCategory::ALL
        .iter()
        .map(|&category| {
            let headcount = staffing.headcount(category);
            let hourly_wage = wages.wage(category);
            let amount = Decimal::from(headcount)
                .checked_mul(hourly_wage)
                .and_then(|cost| cost.checked_mul(hours))
                .ok_or_else(|| labor_overflow(category.label()))?;
            Ok(LaborLine {
                category,
                headcount,
                hourly_wage,
                monthly_hours: MONTHLY_HOURS,
                amount,
            })
        })
        .collect::<WizardResult<Vec<LaborLine>>>()?;

    let total = lines
        .iter()
        .try_fold(Decimal::ZERO, |sum, line| sum.checked_add(line.amount))
        .ok_or_else(|| labor_overflow("all categories"))?;

    Ok(LaborCostResult { lines, total })
}

fn labor_overflow(scope: &str) -> WizardError {
    WizardError::InvalidConfig {
        message: format!("monthly labor cost for {} overflows", scope),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tier_1_staffing() -> Staffing {
        Staffing {
            housekeeping: 2,
            clerical: 2,
            management: 1,
            supervisory: 1,
            security: 0,
            kitchen: 2,
            miscellaneous: 0,
        }
    }

    fn amount_for(result: &LaborCostResult, category: LaborCategory) -> Decimal {
        result
            .lines
            .iter()
            .find(|line| line.category == category)
            .map(|line| line.amount)
            .unwrap()
    }

    #[test]
    fn test_tier_1_line_amounts() {
        let result = calculate_labor_cost(&tier_1_staffing(), &WageTable::standard()).unwrap();

        assert_eq!(amount_for(&result, LaborCategory::Housekeeping), Decimal::from(4160));
        assert_eq!(amount_for(&result, LaborCategory::Clerical), Decimal::from(3840));
        assert_eq!(amount_for(&result, LaborCategory::Management), Decimal::from(4480));
        assert_eq!(amount_for(&result, LaborCategory::Supervisory), Decimal::from(3360));
        assert_eq!(amount_for(&result, LaborCategory::Security), Decimal::ZERO);
        assert_eq!(amount_for(&result, LaborCategory::Kitchen), Decimal::from(3520));
        assert_eq!(amount_for(&result, LaborCategory::Miscellaneous), Decimal::ZERO);
        assert_eq!(result.total, Decimal::from(19360));
    }

    #[test]
    fn test_every_category_has_a_line() {
        let result = calculate_labor_cost(&tier_1_staffing(), &WageTable::standard()).unwrap();
        let categories: Vec<LaborCategory> = result.lines.iter().map(|l| l.category).collect();
        assert_eq!(categories, LaborCategory::ALL.to_vec());
        assert!(result.lines.iter().all(|l| l.monthly_hours == MONTHLY_HOURS));
    }

    #[test]
    fn test_fractional_wages() {
        let wages = WageTable {
            housekeeping: Decimal::new(1350, 2),
            ..WageTable::standard()
        };
        let staffing = Staffing {
            housekeeping: 1,
            clerical: 0,
            management: 0,
            supervisory: 0,
            security: 0,
            kitchen: 0,
            miscellaneous: 0,
        };
        let result = calculate_labor_cost(&staffing, &wages).unwrap();
        assert_eq!(result.total, Decimal::from(2160));
    }

    #[test]
    fn test_wage_overflow_is_config_error() {
        let wages = WageTable {
            management: Decimal::MAX,
            ..WageTable::standard()
        };
        let result = calculate_labor_cost(&tier_1_staffing(), &wages);
        match result {
            Err(WizardError::InvalidConfig { message }) => {
                assert!(message.contains("Management"), "message: {}", message);
            }
            other => panic!("Expected InvalidConfig, got {:?}", other),
        }
    }

    #[test]
    fn test_total_overflow_is_config_error() {
        // each line fits, their sum does not
        let wages = WageTable {
            housekeeping: Decimal::MAX / Decimal::from(500),
            clerical: Decimal::MAX / Decimal::from(500),
            ..WageTable::standard()
        };
        assert!(matches!(
            calculate_labor_cost(&tier_1_staffing(), &wages),
            Err(WizardError::InvalidConfig { .. })
        ));
    }
}
