//! Daily wage calculation.
//!
//! Converts a single day's attendance into pay, given the employee's
//! daily salary and the business-wide [`PayrollSettings`].
//!
//! Three pay shapes exist, checked in this order:
//!
//! 1. **Sunday mode**: the full daily salary, flat, regardless of hours
//!    worked. Takes precedence over slab mode.
//! 2. **Slab mode**, when hours exceed the standard day: hours up to
//!    `standard_hours` are paid at the normal rate and the excess at the
//!    richer slab rate of `salary / slab_hours`.
//! 3. Otherwise: `(salary / standard_hours) * worked_hours`.
//!
//! Fare reimbursements are not part of the day wage; aggregation adds
//! them on top separately.
//!
//! Bad inputs never abort a payroll run. A non-positive salary or
//! negative hours zero out the day's wage, and a non-positive settings
//! figure skips the affected division and marks the result degraded so
//! the monthly statement can be flagged.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use payroll_core::PayrollSettings;
//! use payroll_core::calculations::DailyWageCalculator;
//!
//! let calculator = DailyWageCalculator::new(PayrollSettings::default());
//!
//! // A full 8.5 hour day at a daily salary of 850
//! let pay = calculator.day_pay(dec!(8.5), dec!(850), false, false);
//!
//! assert_eq!(pay.base_pay, dec!(850));
//! assert_eq!(pay.overtime_pay, dec!(0));
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::models::PayrollSettings;

/// Pay components for one attendance day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayPay {
    /// Wage for hours up to the standard day (or the flat Sunday rate).
    pub base_pay: Decimal,

    /// Wage for hours beyond the standard day under slab mode.
    pub overtime_pay: Decimal,

    /// True when a non-positive settings figure forced part of this day's
    /// wage to zero instead of dividing by it.
    pub settings_degraded: bool,
}

impl DayPay {
    /// `base_pay + overtime_pay`. Fare is added by the caller.
    pub fn total(&self) -> Decimal {
        self.base_pay + self.overtime_pay
    }

    fn zero() -> Self {
        Self {
            base_pay: Decimal::ZERO,
            overtime_pay: Decimal::ZERO,
            settings_degraded: false,
        }
    }

    /// A zero wage caused by unusable settings.
    fn degraded() -> Self {
        Self {
            settings_degraded: true,
            ..Self::zero()
        }
    }
}

/// Calculator for a single day's wage.
///
/// Holds the settings in force for the whole payroll run; the same
/// instance is applied to every attendance record, past months included.
#[derive(Debug, Clone)]
pub struct DailyWageCalculator {
    settings: PayrollSettings,
}

impl DailyWageCalculator {
    pub fn new(settings: PayrollSettings) -> Self {
        Self { settings }
    }

    /// Computes the wage for one attendance day.
    ///
    /// # Arguments
    ///
    /// * `worked_hours` - Decimal hours recorded for the day
    /// * `salary` - The employee's daily salary
    /// * `slab_mode` - Pay hours beyond the standard day at the slab rate
    /// * `sunday_mode` - Flat full-day pay; wins over `slab_mode`
    ///
    /// # Returns
    ///
    /// The [`DayPay`] split into base and overtime components. Never
    /// fails: unusable inputs degrade the affected component to zero and
    /// log a warning instead.
    ///
    /// # Example
    ///
    /// ```
    /// use rust_decimal_macros::dec;
    /// use payroll_core::PayrollSettings;
    /// use payroll_core::calculations::DailyWageCalculator;
    ///
    /// let calculator = DailyWageCalculator::new(PayrollSettings {
    ///     standard_hours: dec!(9),
    ///     slab_hours: dec!(6),
    /// });
    ///
    /// // 12 hours on slab: 9 at the normal rate, 3 at the slab rate
    /// let pay = calculator.day_pay(dec!(12), dec!(900), true, false);
    ///
    /// assert_eq!(pay.base_pay, dec!(900));
    /// assert_eq!(pay.overtime_pay, dec!(450));
    ///
    /// // Sunday work pays the full day no matter the hours
    /// let sunday = calculator.day_pay(dec!(2), dec!(900), true, true);
    ///
    /// assert_eq!(sunday.base_pay, dec!(900));
    /// assert_eq!(sunday.overtime_pay, dec!(0));
    /// ```
    pub fn day_pay(
        &self,
        worked_hours: Decimal,
        salary: Decimal,
        slab_mode: bool,
        sunday_mode: bool,
    ) -> DayPay {
        if salary <= Decimal::ZERO {
            warn!(
                salary = %salary,
                "non-positive salary; treating day wage as zero"
            );
            return DayPay::zero();
        }

        // Sunday pays the flat day rate before any hour logic applies.
        if sunday_mode {
            return DayPay {
                base_pay: salary,
                overtime_pay: Decimal::ZERO,
                settings_degraded: false,
            };
        }

        if worked_hours < Decimal::ZERO {
            warn!(
                worked_hours = %worked_hours,
                "negative worked hours; treating day wage as zero"
            );
            return DayPay::zero();
        }

        if self.settings.standard_hours <= Decimal::ZERO {
            warn!(
                standard_hours = %self.settings.standard_hours,
                "standard hours not positive; treating day wage as zero"
            );
            return DayPay::degraded();
        }

        if slab_mode && worked_hours > self.settings.standard_hours {
            self.slab_pay(worked_hours, salary)
        } else {
            self.hourly_pay(worked_hours, salary)
        }
    }

    /// Base wage capped at the standard day plus the excess hours at the
    /// slab rate.
    fn slab_pay(
        &self,
        worked_hours: Decimal,
        salary: Decimal,
    ) -> DayPay {
        let base_pay = self.normal_rate(salary) * self.settings.standard_hours;

        if self.settings.slab_hours <= Decimal::ZERO {
            warn!(
                slab_hours = %self.settings.slab_hours,
                "slab hours not positive; treating overtime wage as zero"
            );
            return DayPay {
                base_pay,
                overtime_pay: Decimal::ZERO,
                settings_degraded: true,
            };
        }

        let overtime_hours = worked_hours - self.settings.standard_hours;
        let overtime_pay = salary / self.settings.slab_hours * overtime_hours;

        DayPay {
            base_pay,
            overtime_pay,
            settings_degraded: false,
        }
    }

    /// Straight hours at the normal rate.
    fn hourly_pay(
        &self,
        worked_hours: Decimal,
        salary: Decimal,
    ) -> DayPay {
        DayPay {
            base_pay: self.normal_rate(salary) * worked_hours,
            overtime_pay: Decimal::ZERO,
            settings_degraded: false,
        }
    }

    fn normal_rate(&self, salary: Decimal) -> Decimal {
        salary / self.settings.standard_hours
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;
    use tracing_subscriber::fmt::format::FmtSpan;

    use super::*;

    /// Settings with exact divisions for most salaries used below.
    fn test_settings() -> PayrollSettings {
        PayrollSettings {
            standard_hours: dec!(8.5),
            slab_hours: dec!(6),
        }
    }

    fn calculator() -> DailyWageCalculator {
        DailyWageCalculator::new(test_settings())
    }

    /// Initializes tracing subscriber for tests that verify log output.
    fn init_test_tracing() -> tracing::subscriber::DefaultGuard {
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::WARN)
            .with_span_events(FmtSpan::NONE)
            .with_test_writer()
            .finish();
        tracing::subscriber::set_default(subscriber)
    }

    // =========================================================================
    // sunday mode tests
    // =========================================================================

    #[test]
    fn sunday_pays_the_flat_day_rate() {
        let result = calculator().day_pay(dec!(2), dec!(800), false, true);

        assert_eq!(result.base_pay, dec!(800));
        assert_eq!(result.overtime_pay, dec!(0));
    }

    #[test]
    fn sunday_takes_precedence_over_slab_mode() {
        let result = calculator().day_pay(dec!(2), dec!(800), true, true);

        assert_eq!(result.base_pay, dec!(800));
        assert_eq!(result.overtime_pay, dec!(0));
    }

    #[test]
    fn sunday_ignores_long_hours() {
        let result = calculator().day_pay(dec!(12), dec!(800), true, true);

        assert_eq!(result.total(), dec!(800));
    }

    #[test]
    fn sunday_pays_full_rate_for_zero_hours() {
        let result = calculator().day_pay(dec!(0), dec!(800), false, true);

        assert_eq!(result.total(), dec!(800));
    }

    // =========================================================================
    // hourly (no slab) tests
    // =========================================================================

    #[test]
    fn full_standard_day_earns_the_daily_salary() {
        let result = calculator().day_pay(dec!(8.5), dec!(850), false, false);

        assert_eq!(result.base_pay, dec!(850));
        assert_eq!(result.overtime_pay, dec!(0));
    }

    #[test]
    fn partial_day_is_paid_pro_rata() {
        // 850 / 8.5 = 100 per hour
        let result = calculator().day_pay(dec!(4), dec!(850), false, false);

        assert_eq!(result.base_pay, dec!(400));
    }

    #[test]
    fn zero_hours_earn_nothing() {
        let result = calculator().day_pay(dec!(0), dec!(850), false, false);

        assert_eq!(result, DayPay::zero());
    }

    #[test]
    fn overtime_without_slab_mode_is_paid_at_the_normal_rate() {
        let result = calculator().day_pay(dec!(10), dec!(850), false, false);

        assert_eq!(result.base_pay, dec!(1000));
        assert_eq!(result.overtime_pay, dec!(0));
    }

    // =========================================================================
    // slab mode tests
    // =========================================================================

    #[test]
    fn slab_splits_base_and_overtime() {
        let settings = PayrollSettings {
            standard_hours: dec!(9),
            slab_hours: dec!(6),
        };

        let result = DailyWageCalculator::new(settings).day_pay(dec!(12), dec!(900), true, false);

        assert_eq!(result.base_pay, dec!(900));
        assert_eq!(result.overtime_pay, dec!(450));
        assert_eq!(result.total(), dec!(1350));
    }

    #[test]
    fn slab_caps_base_pay_at_standard_hours() {
        let result = calculator().day_pay(dec!(10), dec!(850), true, false);

        assert_eq!(result.base_pay, dec!(850));
    }

    #[test]
    fn slab_pays_excess_hours_at_the_slab_rate() {
        let result = calculator().day_pay(dec!(10), dec!(850), true, false);

        // 850 / 6 per overtime hour, 1.5 overtime hours
        assert_eq!(result.overtime_pay, dec!(850) / dec!(6) * dec!(1.5));
    }

    #[test]
    fn slab_mode_below_standard_hours_is_plain_hourly_pay() {
        let result = calculator().day_pay(dec!(4), dec!(850), true, false);

        assert_eq!(result.base_pay, dec!(400));
        assert_eq!(result.overtime_pay, dec!(0));
    }

    #[test]
    fn slab_mode_at_exactly_standard_hours_earns_no_overtime() {
        let result = calculator().day_pay(dec!(8.5), dec!(850), true, false);

        assert_eq!(result.base_pay, dec!(850));
        assert_eq!(result.overtime_pay, dec!(0));
    }

    // =========================================================================
    // degraded input tests
    // =========================================================================

    #[test]
    fn non_positive_salary_earns_nothing() {
        let _guard = init_test_tracing();

        let result = calculator().day_pay(dec!(8.5), dec!(0), false, false);

        assert_eq!(result, DayPay::zero());
    }

    #[test]
    fn negative_salary_earns_nothing() {
        let _guard = init_test_tracing();

        let result = calculator().day_pay(dec!(8.5), dec!(-850), false, false);

        assert_eq!(result, DayPay::zero());
    }

    #[test]
    fn negative_worked_hours_earn_nothing() {
        let _guard = init_test_tracing();

        let result = calculator().day_pay(dec!(-1), dec!(850), false, false);

        assert_eq!(result, DayPay::zero());
    }

    #[test]
    fn zero_standard_hours_degrades_instead_of_dividing() {
        let _guard = init_test_tracing();
        let settings = PayrollSettings {
            standard_hours: dec!(0),
            slab_hours: dec!(6),
        };

        let result = DailyWageCalculator::new(settings).day_pay(dec!(8.5), dec!(850), false, false);

        assert_eq!(result.total(), dec!(0));
        assert!(result.settings_degraded);
    }

    #[test]
    fn zero_slab_hours_degrades_only_the_overtime_component() {
        let _guard = init_test_tracing();
        let settings = PayrollSettings {
            standard_hours: dec!(8.5),
            slab_hours: dec!(0),
        };

        let result = DailyWageCalculator::new(settings).day_pay(dec!(10), dec!(850), true, false);

        assert_eq!(result.base_pay, dec!(850));
        assert_eq!(result.overtime_pay, dec!(0));
        assert!(result.settings_degraded);
    }

    #[test]
    fn sunday_pay_survives_zero_standard_hours() {
        let _guard = init_test_tracing();
        let settings = PayrollSettings {
            standard_hours: dec!(0),
            slab_hours: dec!(0),
        };

        let result = DailyWageCalculator::new(settings).day_pay(dec!(5), dec!(800), false, true);

        assert_eq!(result.base_pay, dec!(800));
        assert!(!result.settings_degraded);
    }
}
