use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::month::PayMonth;

/// Settlement state of one employee's month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentStatus {
    Unpaid,
    Partial,
    Settled,
}

impl PaymentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unpaid => "Unpaid",
            Self::Partial => "Partial",
            Self::Settled => "Settled",
        }
    }
}

/// One employee's computed payroll for one month.
///
/// Ephemeral: rebuilt from the raw records on every query, never stored.
/// Whole-unit rounding is applied to `salary_earned`, `previous_balance`
/// and `final_payable` only; the other money fields carry exact sums.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollStatement {
    pub employee_id: i64,
    pub month: PayMonth,

    // This month's activity
    pub days_worked: u32,
    pub salary_earned: Decimal,
    pub fare_total: Decimal,
    pub advance_paid: Decimal,
    pub paid_total: Decimal,

    // Carry-forward and settlement
    pub previous_balance: Decimal,
    pub current_month_net: Decimal,
    pub final_payable: Decimal,
    pub remaining_due: Decimal,
    pub status: PaymentStatus,

    pub last_payment_date: Option<NaiveDate>,
    /// Proof references from this month's payments, in payment order.
    pub payment_proofs: Vec<String>,

    /// True when invalid settings forced at least one of this employee's
    /// attendance records to a zero wage.
    pub settings_degraded: bool,
}

/// One attendance day expanded into its pay components, for payslip
/// detail views and exports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayLine {
    pub date: NaiveDate,
    pub time_in: Option<String>,
    pub time_out: Option<String>,
    pub worked_hours: Decimal,
    pub sunday_mode: bool,
    pub slab_mode: bool,
    pub base_pay: Decimal,
    pub overtime_pay: Decimal,
    pub fare: Decimal,
    /// `base_pay + overtime_pay + fare`, unrounded.
    pub day_total: Decimal,
}
