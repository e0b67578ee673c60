//! Family allowance calculation.
//!
//! Married employees receive a fixed fraction of base pay; everyone else
//! receives nothing.

use crate::config::SalaryRules;

use super::amount::scaled_amount;

/// Calculates the family allowance.
///
/// # Examples
///
/// ```
/// use payroll_register::calculation::compute_family_allowance;
/// use payroll_register::config::SalaryRules;
///
/// let rules = SalaryRules::default();
/// assert_eq!(compute_family_allowance(3_000_000, "Nikah", &rules), 300_000);
/// assert_eq!(compute_family_allowance(3_000_000, "Belum Nikah", &rules), 0);
/// ```
pub fn compute_family_allowance(base_pay: u64, marital_status: &str, rules: &SalaryRules) -> u64 {
    let rule = &rules.family_allowance;
    if marital_status == rule.married_status {
        scaled_amount(base_pay, rule.rate)
    } else {
        0
    }
}
