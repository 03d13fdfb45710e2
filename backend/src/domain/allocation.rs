//! Savings/spending split derivation.
//!
//! The split is never stored. Amounts are integer cents; spend is defined as
//! income minus the save amount, so the two always sum back to income exactly.

use crate::domain::models::budget::ChildBudget;

/// Derived allocation of one income period, in cents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BudgetSplit {
    pub save_cents: i64,
    pub spend_cents: i64,
}

impl BudgetSplit {
    /// Split an income amount by a savings percentage (0-100).
    /// The save amount rounds to the nearest cent. The product is taken in
    /// i128 so incomes near i64::MAX cannot overflow; the quotient is at most
    /// the income, so narrowing back is lossless.
    pub fn derive(income_cents: i64, savings_percent: u8) -> Self {
        let save_cents =
            ((i128::from(income_cents) * i128::from(savings_percent) + 50) / 100) as i64;
        let spend_cents = income_cents - save_cents;
        Self {
            save_cents,
            spend_cents,
        }
    }

    pub fn for_budget(budget: &ChildBudget) -> Self {
        Self::derive(budget.income_cents, budget.savings_percent)
    }
}

/// Render a cent amount as a dollar string, e.g. 500 -> "$5.00".
pub fn format_dollars(cents: i64) -> String {
    format!("${}.{:02}", cents / 100, (cents % 100).abs())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_record_split() {
        // income=$10.00, percent=50 -> save=$5.00, spend=$5.00
        let split = BudgetSplit::derive(1000, 50);
        assert_eq!(split.save_cents, 500);
        assert_eq!(split.spend_cents, 500);
    }

    #[test]
    fn test_uneven_split() {
        // income=$20.00, percent=75 -> save=$15.00, spend=$5.00
        let split = BudgetSplit::derive(2000, 75);
        assert_eq!(split.save_cents, 1500);
        assert_eq!(split.spend_cents, 500);
    }

    #[test]
    fn test_boundary_percentages() {
        let all_spend = BudgetSplit::derive(1250, 0);
        assert_eq!(all_spend.save_cents, 0);
        assert_eq!(all_spend.spend_cents, 1250);

        let all_save = BudgetSplit::derive(1250, 100);
        assert_eq!(all_save.save_cents, 1250);
        assert_eq!(all_save.spend_cents, 0);
    }

    #[test]
    fn test_sub_cent_share_rounds_to_nearest() {
        // 1 cent at 7% rounds down to 0; 33 cents at 50% rounds 16.5 up to 17
        assert_eq!(BudgetSplit::derive(1, 7).save_cents, 0);
        assert_eq!(BudgetSplit::derive(33, 50).save_cents, 17);
    }

    #[test]
    fn test_split_handles_very_large_incomes() {
        let income = i64::MAX / 64;
        let split = BudgetSplit::derive(income, 75);
        assert!(split.save_cents >= 0);
        assert!(split.spend_cents >= 0);
        assert_eq!(split.save_cents + split.spend_cents, income);

        let split = BudgetSplit::derive(i64::MAX, 100);
        assert_eq!(split.save_cents, i64::MAX);
        assert_eq!(split.spend_cents, 0);
    }

    #[test]
    fn test_save_plus_spend_equals_income() {
        for percent in 0..=100u8 {
            for income in [0, 1, 733, 1000, 1999, 25000] {
                let split = BudgetSplit::derive(income, percent);
                assert_eq!(split.save_cents + split.spend_cents, income);
            }
        }
    }

    #[test]
    fn test_format_dollars() {
        assert_eq!(format_dollars(500), "$5.00");
        assert_eq!(format_dollars(1999), "$19.99");
        assert_eq!(format_dollars(5), "$0.05");
        assert_eq!(format_dollars(0), "$0.00");
    }
}
