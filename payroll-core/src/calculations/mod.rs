//! Payroll calculation modules.
//!
//! This module turns raw attendance, advance and payment records into
//! per-employee monthly statements: daily wage valuation, monthly
//! aggregation, balance carry-forward across months, and final statement
//! assembly.

pub mod carry_forward;
pub mod common;
pub mod daily_wage;
pub mod monthly;
pub mod statement;

pub use carry_forward::{BalanceCarryForward, PreviousBalance};
pub use daily_wage::{DailyWageCalculator, DayPay};
pub use monthly::{MonthTotals, MonthlyAggregator};
pub use statement::{StatementBuilder, compute_payroll};
