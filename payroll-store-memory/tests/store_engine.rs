//! Integration tests driving the payroll engine from a live store: records
//! go in through the [`PayrollStore`] API, a dataset snapshot comes out,
//! and the statements are computed from that snapshot.

use chrono::NaiveDate;
use payroll_core::calculations::compute_payroll;
use payroll_core::{
    NewAdvance, NewAttendance, NewEmployee, NewPayment, PayMonth, PaymentMode, PaymentStatus,
    PayrollSettings, PayrollStore,
};
use payroll_store_memory::MemoryStore;
use pretty_assertions::assert_eq;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn month(s: &str) -> PayMonth {
    s.parse().expect("valid month literal")
}

fn date(s: &str) -> NaiveDate {
    s.parse().expect("valid date literal")
}

fn employee(name: &str, salary: Decimal) -> NewEmployee {
    NewEmployee {
        custom_id: None,
        name: name.to_string(),
        salary,
        designation: "Worker".to_string(),
        normal_hours: None,
        slab_base_hours: None,
    }
}

fn day(employee_id: i64, on: &str, worked_hours: Decimal) -> NewAttendance {
    NewAttendance {
        employee_id,
        date: date(on),
        time_in: None,
        time_out: None,
        worked_hours,
        slab_mode: false,
        sunday_mode: false,
        fare: dec!(0),
    }
}

/// One employee with a January to remember: a plain nine-hour day, a slab
/// overtime day with a fare, a Sunday, one cash advance and one partial
/// salary payment.
async fn seeded_store() -> (MemoryStore, i64) {
    let store = MemoryStore::new();
    store
        .update_settings(PayrollSettings {
            standard_hours: dec!(9),
            slab_hours: dec!(6),
        })
        .await
        .expect("Failed to update settings");

    let asha = store
        .create_employee(employee("Asha", dec!(900)))
        .await
        .expect("Failed to create employee")
        .id;

    store
        .record_attendance(day(asha, "2025-01-06", dec!(9)))
        .await
        .expect("Failed to record attendance");

    let mut slab_day = day(asha, "2025-01-07", dec!(10.5));
    slab_day.slab_mode = true;
    slab_day.fare = dec!(50);
    store
        .record_attendance(slab_day)
        .await
        .expect("Failed to record attendance");

    let mut sunday = day(asha, "2025-01-12", dec!(0));
    sunday.sunday_mode = true;
    store
        .record_attendance(sunday)
        .await
        .expect("Failed to record attendance");

    store
        .create_advance(NewAdvance {
            employee_id: asha,
            amount: dec!(500),
            date: date("2025-01-10"),
            deduction_month: None,
            mode: PaymentMode::Cash,
            notes: None,
            proof: None,
        })
        .await
        .expect("Failed to create advance");

    store
        .record_payment(NewPayment {
            employee_id: asha,
            salary_month: month("2025-01"),
            amount: dec!(2000),
            date: date("2025-02-01"),
            mode: PaymentMode::Upi,
            notes: Some("part payment".to_string()),
            proof: Some("upi-88412.png".to_string()),
        })
        .await
        .expect("Failed to record payment");

    (store, asha)
}

#[tokio::test]
async fn test_live_store_snapshot_drives_the_january_statement() {
    let (store, asha) = seeded_store().await;
    let dataset = store.dataset().await.expect("Failed to take dataset");

    let statements = compute_payroll(
        &dataset.employees,
        &dataset.attendance,
        &dataset.advances,
        &dataset.payments,
        &dataset.settings,
        month("2025-01"),
    );

    assert_eq!(statements.len(), 1);
    let statement = &statements[0];
    assert_eq!(statement.employee_id, asha);
    assert_eq!(statement.days_worked, 3);
    // 900 normal + (900 base + 150/h * 1.5h overtime) slab + 900 Sunday
    assert_eq!(statement.salary_earned, dec!(2925));
    assert_eq!(statement.fare_total, dec!(50));
    assert_eq!(statement.advance_paid, dec!(500));
    assert_eq!(statement.paid_total, dec!(2000));
    assert_eq!(statement.previous_balance, dec!(0));
    assert_eq!(statement.current_month_net, dec!(2475));
    assert_eq!(statement.final_payable, dec!(2475));
    assert_eq!(statement.remaining_due, dec!(475));
    assert_eq!(statement.status, PaymentStatus::Partial);
    assert_eq!(statement.last_payment_date, NaiveDate::from_ymd_opt(2025, 2, 1));
    assert_eq!(statement.payment_proofs, vec!["upi-88412.png"]);
    assert!(!statement.settings_degraded);
}

#[tokio::test]
async fn test_january_balance_carries_into_february() {
    let (store, asha) = seeded_store().await;
    store
        .record_attendance(day(asha, "2025-02-03", dec!(9)))
        .await
        .expect("Failed to record attendance");
    let dataset = store.dataset().await.expect("Failed to take dataset");

    let statements = compute_payroll(
        &dataset.employees,
        &dataset.attendance,
        &dataset.advances,
        &dataset.payments,
        &dataset.settings,
        month("2025-02"),
    );

    let statement = &statements[0];
    assert_eq!(statement.days_worked, 1);
    assert_eq!(statement.salary_earned, dec!(900));
    // January: 2925 wages + 50 fare - 500 advance - 2000 paid
    assert_eq!(statement.previous_balance, dec!(475));
    assert_eq!(statement.final_payable, dec!(1375));
    assert_eq!(statement.remaining_due, dec!(1375));
    assert_eq!(statement.status, PaymentStatus::Unpaid);
}

#[tokio::test]
async fn test_every_employee_appears_even_without_records() {
    let (store, asha) = seeded_store().await;
    let bina = store
        .create_employee(employee("Bina", dec!(700)))
        .await
        .expect("Failed to create employee")
        .id;
    let dataset = store.dataset().await.expect("Failed to take dataset");

    let statements = compute_payroll(
        &dataset.employees,
        &dataset.attendance,
        &dataset.advances,
        &dataset.payments,
        &dataset.settings,
        month("2025-01"),
    );

    assert_eq!(statements.len(), 2);
    assert_eq!(statements[0].employee_id, asha);
    let idle = &statements[1];
    assert_eq!(idle.employee_id, bina);
    assert_eq!(idle.days_worked, 0);
    assert_eq!(idle.final_payable, dec!(0));
    assert_eq!(idle.status, PaymentStatus::Unpaid);
}

#[tokio::test]
async fn test_snapshot_reload_preserves_statements() {
    let (store, _) = seeded_store().await;
    let snapshot = store.dataset().await.expect("Failed to take dataset");
    let original = compute_payroll(
        &snapshot.employees,
        &snapshot.attendance,
        &snapshot.advances,
        &snapshot.payments,
        &snapshot.settings,
        month("2025-01"),
    );

    let reloaded = MemoryStore::with_dataset(snapshot)
        .dataset()
        .await
        .expect("Failed to take dataset");
    let result = compute_payroll(
        &reloaded.employees,
        &reloaded.attendance,
        &reloaded.advances,
        &reloaded.payments,
        &reloaded.settings,
        month("2025-01"),
    );

    assert_eq!(result, original);
}

#[tokio::test]
async fn test_deleting_an_employee_removes_their_payroll() {
    let (store, asha) = seeded_store().await;
    store
        .delete_employee(asha)
        .await
        .expect("Failed to delete employee");
    let dataset = store.dataset().await.expect("Failed to take dataset");

    let statements = compute_payroll(
        &dataset.employees,
        &dataset.attendance,
        &dataset.advances,
        &dataset.payments,
        &dataset.settings,
        month("2025-01"),
    );

    assert!(statements.is_empty());
}
