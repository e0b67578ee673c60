//! Net pay aggregation.

/// Sums base pay and the three allowances.
///
/// Inputs are already whole amounts, so no rounding happens here.
///
/// # Examples
///
/// ```
/// use payroll_register::calculation::compute_net_pay;
///
/// assert_eq!(compute_net_pay(3_000_000, 300_000, 240_000, 700_000), 4_240_000);
/// ```
pub fn compute_net_pay(
    base_pay: u64,
    family_allowance: u64,
    child_allowance: u64,
    position_allowance: u64,
) -> u64 {
    base_pay
        .saturating_add(family_allowance)
        .saturating_add(child_allowance)
        .saturating_add(position_allowance)
}
