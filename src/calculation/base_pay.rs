//! Base pay lookup functionality.
//!
//! This module maps an employee's pay grade (golongan) to monthly base pay.

use crate::config::SalaryRules;

/// Looks up the base pay for a pay grade.
///
/// The lookup is exact and case-sensitive. Unknown grades yield 0 rather
/// than an error.
///
/// # Examples
///
/// ```
/// use payroll_register::calculation::compute_base_pay;
/// use payroll_register::config::SalaryRules;
///
/// let rules = SalaryRules::default();
/// assert_eq!(compute_base_pay("IIIB", &rules), 3_000_000);
/// assert_eq!(compute_base_pay("IVA", &rules), 0);
/// ```
pub fn compute_base_pay(grade: &str, rules: &SalaryRules) -> u64 {
    rules.base_pay.get(grade).copied().unwrap_or(0)
}
