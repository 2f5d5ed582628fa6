//! Balance carry-forward across months.
//!
//! An employee's previous balance for month M is their entire financial
//! history strictly before M replayed in one pass: every past attendance
//! day re-valued, minus every past advance and payment. The replay uses
//! the settings and the employee's salary in force *now*, not whatever
//! was in force at the time; editing either reshapes historical balances
//! on the next query.
//!
//! The sign convention: positive means the employee was underpaid
//! historically and the amount is owed on top of the current month;
//! negative means overpaid.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::calculations::common::round_to_unit;
use crate::calculations::daily_wage::DailyWageCalculator;
use crate::models::{Advance, Attendance, Employee, PayMonth, Payment};

/// The carry-forward position immediately before a month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreviousBalance {
    /// `round(past earnings - past deductions - past payments)`, rounded
    /// once at the end.
    pub amount: Decimal,

    /// True when invalid settings zeroed part of a historical day wage.
    pub settings_degraded: bool,
}

/// Replays history strictly before a target month.
#[derive(Debug, Clone)]
pub struct BalanceCarryForward<'a> {
    calculator: &'a DailyWageCalculator,
    attendance: &'a [Attendance],
    advances: &'a [Advance],
    payments: &'a [Payment],
}

impl<'a> BalanceCarryForward<'a> {
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

    /// Computes the employee's net position from all activity before
    /// `month`.
    ///
    /// Attendance is selected by calendar date against the first day of
    /// the month; advances by their effective deduction month, so a
    /// deferred advance stays out of the balance until its deduction
    /// month has passed; payments by the salary month they settle.
    pub fn previous_balance(
        &self,
        employee: &Employee,
        month: PayMonth,
    ) -> PreviousBalance {
        let cutoff = month.first_day();

        let mut earnings = Decimal::ZERO;
        let mut settings_degraded = false;
        let past_attendance = self
            .attendance
            .iter()
            .filter(|a| a.employee_id == employee.id && a.date < cutoff);
        for record in past_attendance {
            let pay = self.calculator.day_pay(
                record.worked_hours,
                employee.salary,
                record.slab_mode,
                record.sunday_mode,
            );

            earnings += pay.total();
            settings_degraded |= pay.settings_degraded;
            if record.fare < Decimal::ZERO {
                warn!(
                    attendance_id = record.id,
                    fare = %record.fare,
                    "negative fare; contributing zero for this record"
                );
            } else {
                earnings += record.fare;
            }
        }

        let deductions = self.past_deductions(employee.id, month);
        let payments = self.past_payments(employee.id, month);

        PreviousBalance {
            amount: round_to_unit(earnings - deductions - payments),
            settings_degraded,
        }
    }

    fn past_deductions(
        &self,
        employee_id: i64,
        month: PayMonth,
    ) -> Decimal {
        let mut total = Decimal::ZERO;
        let past = self
            .advances
            .iter()
            .filter(|a| a.employee_id == employee_id && a.effective_month() < month);
        for advance in past {
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

    fn past_payments(
        &self,
        employee_id: i64,
        month: PayMonth,
    ) -> Decimal {
        let mut total = Decimal::ZERO;
        let past = self
            .payments
            .iter()
            .filter(|p| p.employee_id == employee_id && p.salary_month < month);
        for payment in past {
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
