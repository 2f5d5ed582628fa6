//! Payroll statement assembly.
//!
//! Combines the monthly aggregation and the balance carry-forward into
//! the per-employee statement the admin screens, payslips and exports
//! consume. The builder is a pure view over borrowed record collections:
//! it never mutates them and recomputes everything on each call, so
//! concurrent month queries over the same data cannot interfere.
//!
//! # Example
//!
//! ```
//! use chrono::Utc;
//! use rust_decimal_macros::dec;
//! use payroll_core::{Employee, Attendance, PayrollSettings, PaymentStatus};
//! use payroll_core::calculations::compute_payroll;
//!
//! let employees = vec![Employee {
//!     id: 1,
//!     custom_id: None,
//!     name: "Asha".to_string(),
//!     salary: dec!(850),
//!     designation: "Machinist".to_string(),
//!     normal_hours: None,
//!     slab_base_hours: None,
//!     created_at: Utc::now(),
//!     updated_at: Utc::now(),
//! }];
//! let attendance = vec![Attendance {
//!     id: 1,
//!     employee_id: 1,
//!     date: "2025-01-06".parse().unwrap(),
//!     time_in: None,
//!     time_out: None,
//!     worked_hours: dec!(8.5),
//!     slab_mode: false,
//!     sunday_mode: false,
//!     fare: dec!(0),
//!     created_at: Utc::now(),
//!     updated_at: Utc::now(),
//! }];
//!
//! let statements = compute_payroll(
//!     &employees,
//!     &attendance,
//!     &[],
//!     &[],
//!     &PayrollSettings::default(),
//!     "2025-01".parse().unwrap(),
//! );
//!
//! assert_eq!(statements[0].salary_earned, dec!(850));
//! assert_eq!(statements[0].final_payable, dec!(850));
//! assert_eq!(statements[0].status, PaymentStatus::Unpaid);
//! ```

use std::collections::HashSet;

use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::calculations::carry_forward::BalanceCarryForward;
use crate::calculations::common::round_to_unit;
use crate::calculations::daily_wage::DailyWageCalculator;
use crate::calculations::monthly::MonthlyAggregator;
use crate::models::{
    Advance, Attendance, DayLine, Employee, PayMonth, Payment, PaymentStatus, PayrollDataset,
    PayrollSettings, PayrollStatement,
};

/// Builds [`PayrollStatement`]s from borrowed record collections.
#[derive(Debug, Clone)]
pub struct StatementBuilder<'a> {
    employees: &'a [Employee],
    attendance: &'a [Attendance],
    advances: &'a [Advance],
    payments: &'a [Payment],
    calculator: DailyWageCalculator,
}

impl<'a> StatementBuilder<'a> {
    pub fn new(
        employees: &'a [Employee],
        attendance: &'a [Attendance],
        advances: &'a [Advance],
        payments: &'a [Payment],
        settings: &PayrollSettings,
    ) -> Self {
        Self {
            employees,
            attendance,
            advances,
            payments,
            calculator: DailyWageCalculator::new(settings.clone()),
        }
    }

    /// Borrows every collection of a loaded dataset snapshot.
    pub fn for_dataset(dataset: &'a PayrollDataset) -> Self {
        Self::new(
            &dataset.employees,
            &dataset.attendance,
            &dataset.advances,
            &dataset.payments,
            &dataset.settings,
        )
    }

    /// Builds one statement per known employee, in input order.
    ///
    /// Every employee gets a statement, active this month or not; an
    /// inactive employee's statement carries only the balance brought
    /// forward. Records referencing unknown employees are logged and
    /// excluded.
    pub fn month_statements(&self, month: PayMonth) -> Vec<PayrollStatement> {
        debug!(
            %month,
            employees = self.employees.len(),
            "computing monthly payroll"
        );
        self.warn_orphans();

        self.employees
            .iter()
            .map(|employee| self.statement_for(employee, month))
            .collect()
    }

    /// Builds the employee's statement for `month`.
    ///
    /// `final_payable` folds the month's net into the carried balance and
    /// rounds once. `remaining_due` subtracts what was already paid
    /// against the month and is not clamped at zero, so an overpaid month
    /// shows how far ahead the business is.
    pub fn statement_for(
        &self,
        employee: &Employee,
        month: PayMonth,
    ) -> PayrollStatement {
        let totals = MonthlyAggregator::new(
            &self.calculator,
            self.attendance,
            self.advances,
            self.payments,
        )
        .month_totals(employee, month);

        let previous = BalanceCarryForward::new(
            &self.calculator,
            self.attendance,
            self.advances,
            self.payments,
        )
        .previous_balance(employee, month);

        let final_payable = round_to_unit(totals.current_month_net + previous.amount);
        let remaining_due = final_payable - totals.paid_total;
        let status = Self::settlement_status(final_payable, totals.paid_total, remaining_due);

        let last_payment_date = self
            .month_payments(employee.id, month)
            .map(|payment| payment.date)
            .max();
        let payment_proofs = self
            .month_payments(employee.id, month)
            .filter_map(|payment| payment.proof.clone())
            .collect();

        PayrollStatement {
            employee_id: employee.id,
            month,
            days_worked: totals.days_worked,
            salary_earned: totals.salary_earned,
            fare_total: totals.fare_total,
            advance_paid: totals.advance_total,
            paid_total: totals.paid_total,
            previous_balance: previous.amount,
            current_month_net: totals.current_month_net,
            final_payable,
            remaining_due,
            status,
            last_payment_date,
            payment_proofs,
            settings_degraded: totals.settings_degraded || previous.settings_degraded,
        }
    }

    /// Expands the employee's attendance in `month` into per-day pay
    /// lines, sorted by date, for payslip detail views and exports.
    pub fn day_lines(
        &self,
        employee: &Employee,
        month: PayMonth,
    ) -> Vec<DayLine> {
        let mut lines: Vec<DayLine> = self
            .attendance
            .iter()
            .filter(|a| a.employee_id == employee.id && PayMonth::of(a.date) == month)
            .map(|record| {
                let pay = self.calculator.day_pay(
                    record.worked_hours,
                    employee.salary,
                    record.slab_mode,
                    record.sunday_mode,
                );
                let fare = if record.fare < Decimal::ZERO {
                    Decimal::ZERO
                } else {
                    record.fare
                };

                DayLine {
                    date: record.date,
                    time_in: record.time_in.clone(),
                    time_out: record.time_out.clone(),
                    worked_hours: record.worked_hours,
                    sunday_mode: record.sunday_mode,
                    slab_mode: record.slab_mode,
                    base_pay: pay.base_pay,
                    overtime_pay: pay.overtime_pay,
                    fare,
                    day_total: pay.base_pay + pay.overtime_pay + fare,
                }
            })
            .collect();

        lines.sort_by_key(|line| line.date);
        lines
    }

    fn settlement_status(
        final_payable: Decimal,
        paid_total: Decimal,
        remaining_due: Decimal,
    ) -> PaymentStatus {
        // Nothing payable and nothing paid is an untouched month, not a
        // settled one.
        if final_payable == Decimal::ZERO && paid_total == Decimal::ZERO {
            PaymentStatus::Unpaid
        } else if remaining_due <= Decimal::ZERO {
            PaymentStatus::Settled
        } else if paid_total > Decimal::ZERO {
            PaymentStatus::Partial
        } else {
            PaymentStatus::Unpaid
        }
    }

    fn month_payments(
        &self,
        employee_id: i64,
        month: PayMonth,
    ) -> impl Iterator<Item = &'a Payment> {
        self.payments
            .iter()
            .filter(move |p| p.employee_id == employee_id && p.salary_month == month)
    }

    fn warn_orphans(&self) {
        let known: HashSet<i64> = self.employees.iter().map(|e| e.id).collect();

        for record in self.attendance {
            if !known.contains(&record.employee_id) {
                warn!(
                    attendance_id = record.id,
                    employee_id = record.employee_id,
                    "attendance references unknown employee; excluded from payroll"
                );
            }
        }
        for advance in self.advances {
            if !known.contains(&advance.employee_id) {
                warn!(
                    advance_id = advance.id,
                    employee_id = advance.employee_id,
                    "advance references unknown employee; excluded from payroll"
                );
            }
        }
        for payment in self.payments {
            if !known.contains(&payment.employee_id) {
                warn!(
                    payment_id = payment.id,
                    employee_id = payment.employee_id,
                    "payment references unknown employee; excluded from payroll"
                );
            }
        }
    }
}

/// Computes the payroll statements for every employee for one month.
///
/// This is the engine's single entry point for the statement list: pure,
/// synchronous and free of I/O. Callers fetch the collections and the
/// settings first, then invoke it once per queried month.
pub fn compute_payroll(
    employees: &[Employee],
    attendance: &[Attendance],
    advances: &[Advance],
    payments: &[Payment],
    settings: &PayrollSettings,
    month: PayMonth,
) -> Vec<PayrollStatement> {
    StatementBuilder::new(employees, attendance, advances, payments, settings)
        .month_statements(month)
}
