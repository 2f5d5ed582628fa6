//! In-memory [`PayrollStore`] backend.
//!
//! The reference store implementation: mutex-guarded vectors with stable
//! insertion order and monotonically assigned ids. Every mutation runs
//! under one lock, which makes the same-day attendance check and its
//! insert a single atomic step.

use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use payroll_core::{
    Advance, Attendance, Employee, NewAdvance, NewAttendance, NewEmployee, NewPayment, Payment,
    PayrollDataset, PayrollSettings, PayrollStore, StoreError,
};
use rust_decimal::Decimal;
use tracing::debug;

#[derive(Debug)]
struct Inner {
    employees: Vec<Employee>,
    attendance: Vec<Attendance>,
    advances: Vec<Advance>,
    payments: Vec<Payment>,
    settings: Option<PayrollSettings>,
    next_id: i64,
}

impl Default for Inner {
    fn default() -> Self {
        Self {
            employees: Vec::new(),
            attendance: Vec::new(),
            advances: Vec::new(),
            payments: Vec::new(),
            settings: None,
            next_id: 1,
        }
    }
}

impl Inner {
    fn alloc_id(&mut self) -> i64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    fn require_employee(&self, id: i64) -> Result<(), StoreError> {
        if self.employees.iter().any(|e| e.id == id) {
            Ok(())
        } else {
            Err(StoreError::UnknownEmployee(id))
        }
    }

    fn custom_id_taken(&self, code: &str, excluding: Option<i64>) -> bool {
        self.employees
            .iter()
            .any(|e| Some(e.id) != excluding && e.custom_id.as_deref() == Some(code))
    }

    fn attendance_taken(
        &self,
        employee_id: i64,
        date: NaiveDate,
        excluding: Option<i64>,
    ) -> bool {
        self.attendance
            .iter()
            .any(|a| Some(a.id) != excluding && a.employee_id == employee_id && a.date == date)
    }
}

fn check_salary(salary: Decimal) -> Result<(), StoreError> {
    if salary <= Decimal::ZERO {
        return Err(StoreError::NonPositiveSalary(salary));
    }
    Ok(())
}

fn check_amount(amount: Decimal) -> Result<(), StoreError> {
    if amount <= Decimal::ZERO {
        return Err(StoreError::NonPositiveAmount(amount));
    }
    Ok(())
}

fn check_attendance_values(
    worked_hours: Decimal,
    fare: Decimal,
) -> Result<(), StoreError> {
    if worked_hours < Decimal::ZERO {
        return Err(StoreError::NegativeWorkedHours(worked_hours));
    }
    if fare < Decimal::ZERO {
        return Err(StoreError::NegativeFare(fare));
    }
    Ok(())
}

#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: Mutex<Inner>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the store from a dataset snapshot; id assignment continues
    /// above the highest id found in it.
    pub fn with_dataset(dataset: PayrollDataset) -> Self {
        let next_id = [
            dataset.employees.iter().map(|e| e.id).max(),
            dataset.attendance.iter().map(|a| a.id).max(),
            dataset.advances.iter().map(|a| a.id).max(),
            dataset.payments.iter().map(|p| p.id).max(),
        ]
        .into_iter()
        .flatten()
        .max()
        .unwrap_or(0)
            + 1;

        Self {
            inner: Mutex::new(Inner {
                employees: dataset.employees,
                attendance: dataset.attendance,
                advances: dataset.advances,
                payments: dataset.payments,
                settings: Some(dataset.settings),
                next_id,
            }),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, Inner>, StoreError> {
        self.inner
            .lock()
            .map_err(|e| StoreError::Storage(e.to_string()))
    }
}

#[async_trait]
impl PayrollStore for MemoryStore {
    async fn create_employee(&self, employee: NewEmployee) -> Result<Employee, StoreError> {
        check_salary(employee.salary)?;
        let mut inner = self.lock()?;
        if let Some(code) = employee.custom_id.as_deref() {
            if inner.custom_id_taken(code, None) {
                return Err(StoreError::DuplicateCustomId(code.to_string()));
            }
        }

        let now = Utc::now();
        let record = Employee {
            id: inner.alloc_id(),
            custom_id: employee.custom_id,
            name: employee.name,
            salary: employee.salary,
            designation: employee.designation,
            normal_hours: employee.normal_hours,
            slab_base_hours: employee.slab_base_hours,
            created_at: now,
            updated_at: now,
        };
        inner.employees.push(record.clone());
        Ok(record)
    }

    async fn get_employee(&self, id: i64) -> Result<Employee, StoreError> {
        self.lock()?
            .employees
            .iter()
            .find(|e| e.id == id)
            .cloned()
            .ok_or(StoreError::NotFound)
    }

    async fn update_employee(&self, employee: &Employee) -> Result<(), StoreError> {
        check_salary(employee.salary)?;
        let mut inner = self.lock()?;
        if let Some(code) = employee.custom_id.as_deref() {
            if inner.custom_id_taken(code, Some(employee.id)) {
                return Err(StoreError::DuplicateCustomId(code.to_string()));
            }
        }
        let index = inner
            .employees
            .iter()
            .position(|e| e.id == employee.id)
            .ok_or(StoreError::NotFound)?;

        let mut updated = employee.clone();
        updated.created_at = inner.employees[index].created_at;
        updated.updated_at = Utc::now();
        inner.employees[index] = updated;
        Ok(())
    }

    async fn delete_employee(&self, id: i64) -> Result<(), StoreError> {
        let mut inner = self.lock()?;
        let index = inner
            .employees
            .iter()
            .position(|e| e.id == id)
            .ok_or(StoreError::NotFound)?;
        inner.employees.remove(index);

        let before = inner.attendance.len() + inner.advances.len() + inner.payments.len();
        inner.attendance.retain(|a| a.employee_id != id);
        inner.advances.retain(|a| a.employee_id != id);
        inner.payments.retain(|p| p.employee_id != id);
        let after = inner.attendance.len() + inner.advances.len() + inner.payments.len();
        debug!(
            employee_id = id,
            cascaded = before - after,
            "deleted employee and owned records"
        );
        Ok(())
    }

    async fn list_employees(&self) -> Result<Vec<Employee>, StoreError> {
        Ok(self.lock()?.employees.clone())
    }

    async fn record_attendance(&self, attendance: NewAttendance) -> Result<Attendance, StoreError> {
        check_attendance_values(attendance.worked_hours, attendance.fare)?;
        let mut inner = self.lock()?;
        inner.require_employee(attendance.employee_id)?;

        // Uniqueness check and insert happen under the same lock.
        if inner.attendance_taken(attendance.employee_id, attendance.date, None) {
            return Err(StoreError::DuplicateAttendance {
                employee_id: attendance.employee_id,
                date: attendance.date,
            });
        }

        let now = Utc::now();
        let record = Attendance {
            id: inner.alloc_id(),
            employee_id: attendance.employee_id,
            date: attendance.date,
            time_in: attendance.time_in,
            time_out: attendance.time_out,
            worked_hours: attendance.worked_hours,
            slab_mode: attendance.slab_mode,
            sunday_mode: attendance.sunday_mode,
            fare: attendance.fare,
            created_at: now,
            updated_at: now,
        };
        inner.attendance.push(record.clone());
        Ok(record)
    }

    async fn update_attendance(&self, attendance: &Attendance) -> Result<(), StoreError> {
        check_attendance_values(attendance.worked_hours, attendance.fare)?;
        let mut inner = self.lock()?;
        inner.require_employee(attendance.employee_id)?;
        let index = inner
            .attendance
            .iter()
            .position(|a| a.id == attendance.id)
            .ok_or(StoreError::NotFound)?;

        if inner.attendance_taken(attendance.employee_id, attendance.date, Some(attendance.id)) {
            return Err(StoreError::DuplicateAttendance {
                employee_id: attendance.employee_id,
                date: attendance.date,
            });
        }

        let mut updated = attendance.clone();
        updated.created_at = inner.attendance[index].created_at;
        updated.updated_at = Utc::now();
        inner.attendance[index] = updated;
        Ok(())
    }

    async fn delete_attendance(&self, id: i64) -> Result<(), StoreError> {
        let mut inner = self.lock()?;
        let index = inner
            .attendance
            .iter()
            .position(|a| a.id == id)
            .ok_or(StoreError::NotFound)?;
        inner.attendance.remove(index);
        Ok(())
    }

    async fn list_attendance(&self) -> Result<Vec<Attendance>, StoreError> {
        Ok(self.lock()?.attendance.clone())
    }

    async fn create_advance(&self, advance: NewAdvance) -> Result<Advance, StoreError> {
        check_amount(advance.amount)?;
        let mut inner = self.lock()?;
        inner.require_employee(advance.employee_id)?;

        let record = Advance {
            id: inner.alloc_id(),
            employee_id: advance.employee_id,
            amount: advance.amount,
            date: advance.date,
            deduction_month: advance.deduction_month,
            mode: advance.mode,
            notes: advance.notes,
            proof: advance.proof,
            created_at: Utc::now(),
        };
        inner.advances.push(record.clone());
        Ok(record)
    }

    async fn delete_advance(&self, id: i64) -> Result<(), StoreError> {
        let mut inner = self.lock()?;
        let index = inner
            .advances
            .iter()
            .position(|a| a.id == id)
            .ok_or(StoreError::NotFound)?;
        inner.advances.remove(index);
        Ok(())
    }

    async fn list_advances(&self) -> Result<Vec<Advance>, StoreError> {
        Ok(self.lock()?.advances.clone())
    }

    async fn record_payment(&self, payment: NewPayment) -> Result<Payment, StoreError> {
        check_amount(payment.amount)?;
        let mut inner = self.lock()?;
        inner.require_employee(payment.employee_id)?;

        let record = Payment {
            id: inner.alloc_id(),
            employee_id: payment.employee_id,
            salary_month: payment.salary_month,
            amount: payment.amount,
            date: payment.date,
            mode: payment.mode,
            notes: payment.notes,
            proof: payment.proof,
            created_at: Utc::now(),
        };
        inner.payments.push(record.clone());
        Ok(record)
    }

    async fn delete_payment(&self, id: i64) -> Result<(), StoreError> {
        let mut inner = self.lock()?;
        let index = inner
            .payments
            .iter()
            .position(|p| p.id == id)
            .ok_or(StoreError::NotFound)?;
        inner.payments.remove(index);
        Ok(())
    }

    async fn list_payments(&self) -> Result<Vec<Payment>, StoreError> {
        Ok(self.lock()?.payments.clone())
    }

    async fn get_settings(&self) -> Result<PayrollSettings, StoreError> {
        Ok(self.lock()?.settings.clone().unwrap_or_default())
    }

    async fn update_settings(&self, settings: PayrollSettings) -> Result<(), StoreError> {
        settings.validate()?;
        debug!(
            standard_hours = %settings.standard_hours,
            slab_hours = %settings.slab_hours,
            "updated payroll settings"
        );
        self.lock()?.settings = Some(settings);
        Ok(())
    }

    async fn dataset(&self) -> Result<PayrollDataset, StoreError> {
        let inner = self.lock()?;
        Ok(PayrollDataset {
            employees: inner.employees.clone(),
            attendance: inner.attendance.clone(),
            advances: inner.advances.clone(),
            payments: inner.payments.clone(),
            settings: inner.settings.clone().unwrap_or_default(),
        })
    }
}
