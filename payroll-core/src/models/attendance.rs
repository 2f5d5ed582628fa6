use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attendance {
    pub id: i64,
    pub employee_id: i64,
    /// Calendar day; at most one record per employee per day.
    pub date: NaiveDate,
    /// Wall-clock capture like "09:15", kept verbatim for payslips.
    pub time_in: Option<String>,
    pub time_out: Option<String>,
    /// Decimal hours. Derived from time in/out at capture, but stored
    /// independently and editable directly.
    pub worked_hours: Decimal,
    /// Pays hours beyond the standard day at the slab overtime rate.
    pub slab_mode: bool,
    /// Flat full-day pay regardless of hours; wins over `slab_mode`.
    pub sunday_mode: bool,
    /// Travel reimbursement added on top of the wage, never scaled by hours.
    pub fare: Decimal,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// For recording new attendance (no id or timestamps)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewAttendance {
    pub employee_id: i64,
    pub date: NaiveDate,
    pub time_in: Option<String>,
    pub time_out: Option<String>,
    pub worked_hours: Decimal,
    pub slab_mode: bool,
    pub sunday_mode: bool,
    pub fare: Decimal,
}
