use std::collections::HashSet;
use std::io::Read;

use chrono::NaiveDate;
use payroll_core::PayrollDataset;
use thiserror::Error;

/// Errors that can occur when loading a payroll snapshot.
#[derive(Debug, Error)]
pub enum SnapshotLoaderError {
    #[error("JSON parse error: {0}")]
    JsonParse(String),

    #[error("Duplicate attendance for employee {employee_id} on {date}")]
    DuplicateAttendance { employee_id: i64, date: NaiveDate },
}

impl From<serde_json::Error> for SnapshotLoaderError {
    fn from(err: serde_json::Error) -> Self {
        SnapshotLoaderError::JsonParse(err.to_string())
    }
}

/// Loader for payroll dataset snapshots.
///
/// A snapshot is the JSON serialization of a [`PayrollDataset`]: the four
/// record collections plus the hour settings, exactly as a store hands
/// them out. Sections absent from the file load as empty (settings fall
/// back to the defaults), so a trimmed snapshot holding only employees
/// and attendance is still valid.
pub struct SnapshotLoader;

impl SnapshotLoader {
    /// Parse a dataset snapshot from a JSON reader.
    ///
    /// The reader can be any type that implements `Read`, such as a file
    /// or a string slice. Record-level problems (orphaned rows, zero
    /// amounts) are NOT rejected here; the engine degrades those at
    /// computation time. The one exception is two attendance records for
    /// the same employee and day, which a store would never emit and
    /// which would double-count a worked day.
    pub fn parse<R: Read>(reader: R) -> Result<PayrollDataset, SnapshotLoaderError> {
        let dataset: PayrollDataset = serde_json::from_reader(reader)?;

        let mut seen = HashSet::new();
        for record in &dataset.attendance {
            if !seen.insert((record.employee_id, record.date)) {
                return Err(SnapshotLoaderError::DuplicateAttendance {
                    employee_id: record.employee_id,
                    date: record.date,
                });
            }
        }

        Ok(dataset)
    }
}
