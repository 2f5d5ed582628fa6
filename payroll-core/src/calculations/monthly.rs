//! Aggregation of one employee's payroll activity over a single month.
//!
//! Sums the daily wages and fares of every attendance record falling in
//! the target month, advances attributed to the month via their effective
//! deduction month, and payments applied against the month.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::calculations::common::round_to_unit;
use crate::calculations::daily_wage::DailyWageCalculator;
use crate::models::{Advance, Attendance, Employee, PayMonth, Payment};

/// One employee's activity summed over one month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthTotals {
    /// Number of attendance records in the month.
    pub days_worked: u32,

    /// Base plus overtime wages, rounded to the whole currency unit.
    pub salary_earned: Decimal,

    /// Exact fare sum; never rounded.
    pub fare_total: Decimal,

    /// Advances whose effective deduction month is this month.
    pub advance_total: Decimal,

    /// Payments applied against this month's payroll.
    pub paid_total: Decimal,

    /// `salary_earned + fare_total - advance_total`, with no further
    /// rounding applied to the sum.
    pub current_month_net: Decimal,

    /// True when invalid settings zeroed part of a day wage.
    pub settings_degraded: bool,
}

/// Walks the raw record collections and produces [`MonthTotals`].
#[derive(Debug, Clone)]
pub struct MonthlyAggregator<'a> {
    calculator: &'a DailyWageCalculator,
    attendance: &'a [Attendance],
    advances: &'a [Advance],
    payments: &'a [Payment],
}

impl<'a> MonthlyAggregator<'a> {
    pub fn new(
        calculator: &'a DailyWageCalculator,
        attendance: &'a [Attendance],
        advances: &'a [Advance],
        payments: &'a [Payment],
    ) -> Self {
        Self {
            calculator,
            attendance,
            advances,
            payments,
        }
    }

    /// Sums the employee's wages, fares, advances and payments for `month`.
    ///
    /// Records belonging to other employees or other months are ignored;
    /// individually bad records contribute zero rather than failing the
    /// run.
    pub fn month_totals(
        &self,
        employee: &Employee,
        month: PayMonth,
    ) -> MonthTotals {
        let mut days_worked = 0u32;
        let mut wage_total = Decimal::ZERO;
        let mut fare_total = Decimal::ZERO;
        let mut settings_degraded = false;

        let in_month = self
            .attendance
            .iter()
            .filter(|a| a.employee_id == employee.id && PayMonth::of(a.date) == month);
        for record in in_month {
            let pay = self.calculator.day_pay(
                record.worked_hours,
                employee.salary,
                record.slab_mode,
                record.sunday_mode,
            );

            days_worked += 1;
            wage_total += pay.total();
            fare_total += self.checked_fare(record);
            settings_degraded |= pay.settings_degraded;
        }

        let salary_earned = round_to_unit(wage_total);
        let advance_total = self.advance_total(employee.id, month);
        let paid_total = self.paid_total(employee.id, month);

        MonthTotals {
            days_worked,
            salary_earned,
            fare_total,
            advance_total,
            paid_total,
            current_month_net: salary_earned + fare_total - advance_total,
            settings_degraded,
        }
    }

    fn checked_fare(&self, record: &Attendance) -> Decimal {
        if record.fare < Decimal::ZERO {
            warn!(
                attendance_id = record.id,
                fare = %record.fare,
                "negative fare; contributing zero for this record"
            );
            Decimal::ZERO
        } else {
            record.fare
        }
    }

    fn advance_total(
        &self,
        employee_id: i64,
        month: PayMonth,
    ) -> Decimal {
        let mut total = Decimal::ZERO;
        let in_month = self
            .advances
            .iter()
            .filter(|a| a.employee_id == employee_id && a.effective_month() == month);
        for advance in in_month {
            if advance.amount < Decimal::ZERO {
                warn!(
                    advance_id = advance.id,
                    amount = %advance.amount,
                    "negative advance amount; contributing zero for this record"
                );
                continue;
            }
            total += advance.amount;
        }
        total
    }

    fn paid_total(
        &self,
        employee_id: i64,
        month: PayMonth,
    ) -> Decimal {
        let mut total = Decimal::ZERO;
        let in_month = self
            .payments
            .iter()
            .filter(|p| p.employee_id == employee_id && p.salary_month == month);
        for payment in in_month {
            if payment.amount < Decimal::ZERO {
                warn!(
                    payment_id = payment.id,
                    amount = %payment.amount,
                    "negative payment amount; contributing zero for this record"
                );
                continue;
            }
            total += payment.amount;
        }
        total
    }
}
