use serde::{Deserialize, Serialize};

use super::advance::Advance;
use super::attendance::Attendance;
use super::employee::Employee;
use super::payment::Payment;
use super::settings::PayrollSettings;

/// Everything the payroll engine consumes, as one consistent snapshot.
///
/// Missing sections deserialize to their defaults, so a snapshot that was
/// taken before any settings were saved still loads with the stock
/// settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PayrollDataset {
    pub employees: Vec<Employee>,
    pub attendance: Vec<Attendance>,
    pub advances: Vec<Advance>,
    pub payments: Vec<Payment>,
    pub settings: PayrollSettings,
}
