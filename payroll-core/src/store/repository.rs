use async_trait::async_trait;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use thiserror::Error;

use crate::models::{
    Advance, Attendance, Employee, NewAdvance, NewAttendance, NewEmployee, NewPayment, Payment,
    PayrollDataset, PayrollSettings, SettingsError,
};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Record not found")]
    NotFound,

    #[error("Employee {0} does not exist")]
    UnknownEmployee(i64),

    #[error("Attendance for employee {employee_id} on {date} already recorded")]
    DuplicateAttendance { employee_id: i64, date: NaiveDate },

    #[error("Employee code '{0}' is already taken")]
    DuplicateCustomId(String),

    #[error("Amount must be positive, got {0}")]
    NonPositiveAmount(Decimal),

    #[error("Salary must be positive, got {0}")]
    NonPositiveSalary(Decimal),

    #[error("Worked hours must not be negative, got {0}")]
    NegativeWorkedHours(Decimal),

    #[error("Fare must not be negative, got {0}")]
    NegativeFare(Decimal),

    #[error(transparent)]
    Settings(#[from] SettingsError),

    #[error("Storage error: {0}")]
    Storage(String),
}

/// Write boundary for the payroll record collections.
///
/// All referential and numeric validation lives here so the engine can
/// assume well-formed inputs: employees must exist before records can
/// reference them, amounts are positive, and the one-record-per-day
/// attendance rule is enforced atomically by each backend.
#[async_trait]
pub trait PayrollStore: Send + Sync {
    // Employees
    async fn create_employee(&self, employee: NewEmployee) -> Result<Employee, StoreError>;

    async fn get_employee(&self, id: i64) -> Result<Employee, StoreError>;

    async fn update_employee(&self, employee: &Employee) -> Result<(), StoreError>;

    /// Deletes the employee and every attendance, advance and payment
    /// record belonging to them.
    async fn delete_employee(&self, id: i64) -> Result<(), StoreError>;

    async fn list_employees(&self) -> Result<Vec<Employee>, StoreError>;

    // Attendance
    /// Records one day of attendance. The check for an existing record on
    /// the same (employee, date) and the insert are a single atomic step;
    /// two concurrent calls for the same day cannot both succeed.
    async fn record_attendance(&self, attendance: NewAttendance) -> Result<Attendance, StoreError>;

    /// Rewrites an attendance record. Moving it to another date requires
    /// that date to be free for the employee.
    async fn update_attendance(&self, attendance: &Attendance) -> Result<(), StoreError>;

    async fn delete_attendance(&self, id: i64) -> Result<(), StoreError>;

    async fn list_attendance(&self) -> Result<Vec<Attendance>, StoreError>;

    // Advances
    async fn create_advance(&self, advance: NewAdvance) -> Result<Advance, StoreError>;

    async fn delete_advance(&self, id: i64) -> Result<(), StoreError>;

    async fn list_advances(&self) -> Result<Vec<Advance>, StoreError>;

    // Payments
    async fn record_payment(&self, payment: NewPayment) -> Result<Payment, StoreError>;

    async fn delete_payment(&self, id: i64) -> Result<(), StoreError>;

    async fn list_payments(&self) -> Result<Vec<Payment>, StoreError>;

    // Settings
    /// Returns the saved settings, or the stock defaults when none have
    /// ever been written.
    async fn get_settings(&self) -> Result<PayrollSettings, StoreError>;

    async fn update_settings(&self, settings: PayrollSettings) -> Result<(), StoreError>;

    /// One consistent snapshot of every collection plus settings, ready
    /// to feed the payroll engine.
    async fn dataset(&self) -> Result<PayrollDataset, StoreError>;
}
