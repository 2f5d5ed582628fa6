//! Common utility functions for payroll calculations.
//!
//! This module provides shared functionality used across the wage and
//! balance calculations, currently the whole-unit rounding convention.

use rust_decimal::Decimal;

/// Rounds a decimal value to the nearest whole currency unit using half-up
/// rounding.
///
/// This follows standard financial rounding conventions where values at
/// exactly 0.5 are rounded up (away from zero). Payroll figures shown to
/// the business owner are always whole currency units.
///
/// # Arguments
///
/// * `value` - The decimal value to round
///
/// # Returns
///
/// The value rounded to zero decimal places.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use payroll_core::calculations::common::round_to_unit;
///
/// assert_eq!(round_to_unit(dec!(1062.4)), dec!(1062));
/// assert_eq!(round_to_unit(dec!(1062.5)), dec!(1063));
/// assert_eq!(round_to_unit(dec!(-1062.5)), dec!(-1063)); // Away from zero
/// ```
pub fn round_to_unit(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(0, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
}
