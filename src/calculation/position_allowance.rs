//! Position allowance calculation.
//!
//! Most positions carry a flat allowance. The top position instead earns a
//! multiple of base pay, checked before the flat table.

use crate::config::SalaryRules;

use super::amount::scaled_amount;

/// Calculates the position allowance.
///
/// # Examples
///
/// ```
/// use payroll_register::calculation::compute_position_allowance;
/// use payroll_register::config::SalaryRules;
///
/// let rules = SalaryRules::default();
/// assert_eq!(compute_position_allowance(3_000_000, "Lektor", &rules), 700_000);
/// assert_eq!(compute_position_allowance(4_000_000, "Guru Besar", &rules), 12_000_000);
/// assert_eq!(compute_position_allowance(4_000_000, "Dekan", &rules), 0);
/// ```
pub fn compute_position_allowance(base_pay: u64, position: &str, rules: &SalaryRules) -> u64 {
    if position == rules.top_position.name {
        return scaled_amount(base_pay, rules.top_position.multiplier);
    }
    rules.position_allowance.get(position).copied().unwrap_or(0)
}
