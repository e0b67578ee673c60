//! Rounding of fractional salary amounts.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

/// Multiplies `base_pay` by `rate` and rounds to a whole amount.
///
/// Midpoints round away from zero. A negative product yields 0 and a product
/// too large for `u64` saturates at `u64::MAX`.
///
/// # Examples
///
/// ```
/// use payroll_register::calculation::scaled_amount;
/// use rust_decimal::Decimal;
///
/// assert_eq!(scaled_amount(3_000_000, Decimal::new(8, 2)), 240_000);
/// assert_eq!(scaled_amount(5, Decimal::new(10, 2)), 1);
/// assert_eq!(scaled_amount(u64::MAX, Decimal::from(3)), u64::MAX);
/// ```
pub fn scaled_amount(base_pay: u64, rate: Decimal) -> u64 {
    if rate.is_sign_negative() {
        return 0;
    }

    // Out of Decimal range
    let Some(product) = Decimal::from(base_pay).checked_mul(rate) else {
        return u64::MAX;
    };

    product
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_u64()
        .unwrap_or(u64::MAX)
}
