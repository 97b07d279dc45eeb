//! Rental charge calculation.
//!
//! Converts a chargeable day count into the pre-discount charge, the
//! discount amount and the final charge. Pre-discount charges round half
//! down and discounts round half up, both to whole cents.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::error::{RentalError, RentalResult};

/// Number of decimal places kept on every monetary amount.
pub const CURRENCY_DECIMAL_PLACES: u32 = 2;

/// The monetary breakdown of a rental.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChargeBreakdown {
    /// Chargeable days multiplied by the daily charge.
    pub pre_discount_charge: Decimal,
    /// The discount taken off the pre-discount charge.
    pub discount_amount: Decimal,
    /// The amount owed.
    pub final_charge: Decimal,
}

/// Calculates the charge before any discount is applied.
///
/// The result is rounded to cents, with exact halves rounded down.
///
/// # Example
///
/// ```
/// use tool_rental::calculation::pre_discount_charge;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let charge = pre_discount_charge(3, Decimal::from_str("1.49").unwrap()).unwrap();
/// assert_eq!(charge, Decimal::from_str("4.47").unwrap());
/// ```
pub fn pre_discount_charge(chargeable_days: u32, daily_charge: Decimal) -> RentalResult<Decimal> {
    let charge = Decimal::from(chargeable_days)
        .checked_mul(daily_charge)
        .ok_or_else(|| RentalError::CalculationError {
            message: format!(
                "pre-discount charge overflows: {} days at {}",
                chargeable_days, daily_charge
            ),
        })?;

    Ok(round_to_cents(charge, RoundingStrategy::MidpointTowardZero))
}

/// Calculates the discount taken off the pre-discount charge.
///
/// The result is rounded to cents, with exact halves rounded up.
///
/// # Example
///
/// ```
/// use tool_rental::calculation::discount_amount;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// // 50% of $2.99 is $1.495, which rounds up
/// let discount = discount_amount(50, Decimal::from_str("2.99").unwrap()).unwrap();
/// assert_eq!(discount, Decimal::from_str("1.50").unwrap());
/// ```
pub fn discount_amount(discount_percent: u32, pre_discount_charge: Decimal) -> RentalResult<Decimal> {
    let discount = pre_discount_charge
        .checked_mul(Decimal::from(discount_percent))
        .and_then(|scaled| scaled.checked_div(Decimal::new(100, 0)))
        .ok_or_else(|| RentalError::CalculationError {
            message: format!(
                "discount overflows: {}% of {}",
                discount_percent, pre_discount_charge
            ),
        })?;

    Ok(round_to_cents(discount, RoundingStrategy::MidpointAwayFromZero))
}

/// Rounds to whole cents, always keeping two decimal places.
fn round_to_cents(amount: Decimal, strategy: RoundingStrategy) -> Decimal {
    let mut rounded = amount.round_dp_with_strategy(CURRENCY_DECIMAL_PLACES, strategy);
    rounded.rescale(CURRENCY_DECIMAL_PLACES);
    rounded
}

/// Calculates the amount owed. Both inputs are already whole cents, so the
/// subtraction is exact and no rounding is applied.
pub fn final_charge(pre_discount_charge: Decimal, discount_amount: Decimal) -> RentalResult<Decimal> {
    pre_discount_charge
        .checked_sub(discount_amount)
        .ok_or_else(|| RentalError::CalculationError {
            message: format!(
                "final charge overflows: {} - {}",
                pre_discount_charge, discount_amount
            ),
        })
}

/// Prices a rental from its chargeable days, daily charge and discount.
pub fn calculate_charges(
    chargeable_days: u32,
    daily_charge: Decimal,
    discount_percent: u32,
) -> RentalResult<ChargeBreakdown> {
    let pre_discount_charge = pre_discount_charge(chargeable_days, daily_charge)?;
    let discount_amount = discount_amount(discount_percent, pre_discount_charge)?;
    let final_charge = final_charge(pre_discount_charge, discount_amount)?;

    Ok(ChargeBreakdown {
        pre_discount_charge,
        discount_amount,
        final_charge,
    })
}
