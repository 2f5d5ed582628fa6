mod advance;
mod attendance;
mod dataset;
mod employee;
mod month;
mod payment;
mod settings;
mod statement;

pub use advance::{Advance, NewAdvance};
pub use attendance::{Attendance, NewAttendance};
pub use dataset::PayrollDataset;
pub use employee::{Employee, NewEmployee};
pub use month::{ParsePayMonthError, PayMonth};
pub use payment::{NewPayment, Payment, PaymentMode};
pub use settings::{PayrollSettings, SettingsError};
pub use statement::{DayLine, PaymentStatus, PayrollStatement};
