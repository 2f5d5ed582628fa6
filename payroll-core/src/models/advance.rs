use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::month::PayMonth;
use super::payment::PaymentMode;

/// A cash advance handed to an employee ahead of payroll.
///
/// The advance creates a liability against one specific month's payroll,
/// which need not be the month the cash was given.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Advance {
    pub id: i64,
    pub employee_id: i64,
    /// Always positive.
    pub amount: Decimal,
    /// When the cash was handed over.
    pub date: NaiveDate,
    /// The payroll month this advance is deducted from. When absent the
    /// month of `date` applies; use [`Advance::effective_month`] rather
    /// than reading this field directly.
    pub deduction_month: Option<PayMonth>,
    pub mode: PaymentMode,
    pub notes: Option<String>,
    /// Reference to an uploaded proof attachment.
    pub proof: Option<String>,

    pub created_at: DateTime<Utc>,
}

impl Advance {
    /// The single place the deduction-month fallback is applied: the
    /// explicit `deduction_month` when present, otherwise the month of
    /// `date`. Current-month aggregation and past-balance exclusion both
    /// key off this value.
    pub fn effective_month(&self) -> PayMonth {
        self.deduction_month
            .unwrap_or_else(|| PayMonth::of(self.date))
    }
}

/// For recording new advances (no id or timestamp)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewAdvance {
    pub employee_id: i64,
    pub amount: Decimal,
    pub date: NaiveDate,
    pub deduction_month: Option<PayMonth>,
    pub mode: PaymentMode,
    pub notes: Option<String>,
    pub proof: Option<String>,
}
