//! Child allowance calculation.
//!
//! The allowance is a fraction of base pay chosen by the exact number of
//! dependent children. Only counts present in the rate table (1 to 3 by
//! default) pay anything.

use crate::config::SalaryRules;

use super::amount::scaled_amount;

/// Calculates the child allowance.
///
/// # Examples
///
/// ```
/// use payroll_register::calculation::compute_child_allowance;
/// use payroll_register::config::SalaryRules;
///
/// let rules = SalaryRules::default();
/// assert_eq!(compute_child_allowance(3_000_000, 2, &rules), 240_000);
/// assert_eq!(compute_child_allowance(3_000_000, 4, &rules), 0);
/// ```
pub fn compute_child_allowance(base_pay: u64, child_count: u32, rules: &SalaryRules) -> u64 {
    rules
        .child_allowance_rates
        .get(&child_count)
        .map(|rate| scaled_amount(base_pay, *rate))
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_child_five_percent() {
        let rules = SalaryRules::default();
        assert_eq!(compute_child_allowance(2_500_000, 1, &rules), 125_000);
    }

    #[test]
    fn test_two_children_eight_percent() {
        let rules = SalaryRules::default();
        assert_eq!(compute_child_allowance(3_500_000, 2, &rules), 280_000);
    }

    #[test]
    fn test_three_children_twelve_percent() {
        let rules = SalaryRules::default();
        assert_eq!(compute_child_allowance(4_000_000, 3, &rules), 480_000);
    }

    #[test]
    fn test_no_children_is_zero() {
        let rules = SalaryRules::default();
        assert_eq!(compute_child_allowance(4_000_000, 0, &rules), 0);
    }

    #[test]
    fn test_more_than_three_children_is_zero() {
        let rules = SalaryRules::default();
        assert_eq!(compute_child_allowance(4_000_000, 4, &rules), 0);
        assert_eq!(compute_child_allowance(4_000_000, 10, &rules), 0);
    }

    #[test]
    fn test_rounds_to_nearest() {
        let rules = SalaryRules::default();
        // 1_000_010 * 0.05 = 50_000.5
        assert_eq!(compute_child_allowance(1_000_010, 1, &rules), 50_001);
    }
}
