//! Plain-text rendering of payroll statements.
//!
//! Fixed-width tables meant for a terminal or a text report file. Money
//! columns are shown with two decimal places; the underlying statement
//! values keep their exact precision.

use std::collections::HashMap;

use payroll_core::{DayLine, Employee, PayMonth, PayrollStatement};
use rust_decimal::Decimal;

/// Formats a money value with two decimal places, e.g. `2925.00`.
fn money(value: Decimal) -> String {
    format!("{value:.2}")
}

/// Mode shown in the payslip day table. Sunday wins over slab, matching
/// the wage calculator's precedence.
fn mode_label(line: &DayLine) -> &'static str {
    if line.sunday_mode {
        "sunday"
    } else if line.slab_mode {
        "slab"
    } else {
        "normal"
    }
}

/// One row per employee for the month, in statement order, with a totals
/// line across the payable, paid and due columns.
pub fn render_summary(
    month: PayMonth,
    statements: &[PayrollStatement],
    employees: &[Employee],
) -> String {
    let names: HashMap<i64, &str> = employees
        .iter()
        .map(|e| (e.id, e.name.as_str()))
        .collect();

    let mut out = String::new();
    out.push_str(&format!("Payroll for {month}\n\n"));

    if statements.is_empty() {
        out.push_str("No employees in the snapshot.\n");
        return out;
    }

    let header = format!(
        "{:>6}  {:<20} {:>4} {:>10} {:>8} {:>10} {:>10} {:>10} {:>10} {:>10}  {:<7}",
        "ID", "Name", "Days", "Earned", "Fare", "Advance", "Prev Bal", "Payable", "Paid", "Due", "Status"
    );
    out.push_str(&header);
    out.push('\n');
    out.push_str(&"-".repeat(header.len()));
    out.push('\n');

    for statement in statements {
        let name = names
            .get(&statement.employee_id)
            .copied()
            .unwrap_or("unknown");
        out.push_str(&format!(
            "{:>6}  {:<20} {:>4} {:>10} {:>8} {:>10} {:>10} {:>10} {:>10} {:>10}  {:<7}\n",
            statement.employee_id,
            name,
            statement.days_worked,
            money(statement.salary_earned),
            money(statement.fare_total),
            money(statement.advance_paid),
            money(statement.previous_balance),
            money(statement.final_payable),
            money(statement.paid_total),
            money(statement.remaining_due),
            statement.status.as_str(),
        ));
    }

    let payable: Decimal = statements.iter().map(|s| s.final_payable).sum();
    let paid: Decimal = statements.iter().map(|s| s.paid_total).sum();
    let due: Decimal = statements.iter().map(|s| s.remaining_due).sum();
    out.push_str(&"-".repeat(header.len()));
    out.push('\n');
    out.push_str(&format!(
        "{:>6}  {:<20} {:>4} {:>10} {:>8} {:>10} {:>10} {:>10} {:>10} {:>10}\n",
        "",
        "Total",
        "",
        "",
        "",
        "",
        "",
        money(payable),
        money(paid),
        money(due),
    ));

    let degraded: Vec<i64> = statements
        .iter()
        .filter(|s| s.settings_degraded)
        .map(|s| s.employee_id)
        .collect();
    if !degraded.is_empty() {
        out.push('\n');
        out.push_str(&format!(
            "warning: invalid hour settings zeroed wages for employee ids {degraded:?}\n"
        ));
    }

    out
}

/// One employee's month in full: the day-by-day wage split followed by
/// the statement totals.
pub fn render_payslip(
    employee: &Employee,
    statement: &PayrollStatement,
    day_lines: &[DayLine],
) -> String {
    let mut out = String::new();
    out.push_str(&format!("Payslip {}\n", statement.month));
    out.push_str(&format!(
        "Employee: {} (id {}, code {})\n",
        employee.name,
        employee.id,
        employee.custom_id.as_deref().unwrap_or("-")
    ));
    out.push_str(&format!("Designation: {}\n", employee.designation));
    out.push_str(&format!("Daily salary: {}\n\n", money(employee.salary)));

    if day_lines.is_empty() {
        out.push_str("No attendance this month.\n\n");
    } else {
        let header = format!(
            "{:<10}  {:>5} {:>5} {:>6}  {:<7} {:>9} {:>9} {:>8} {:>9}",
            "Date", "In", "Out", "Hours", "Mode", "Base", "OT", "Fare", "Total"
        );
        out.push_str(&header);
        out.push('\n');
        out.push_str(&"-".repeat(header.len()));
        out.push('\n');

        for line in day_lines {
            out.push_str(&format!(
                "{:<10}  {:>5} {:>5} {:>6.2}  {:<7} {:>9} {:>9} {:>8} {:>9}\n",
                line.date.to_string(),
                line.time_in.as_deref().unwrap_or("-"),
                line.time_out.as_deref().unwrap_or("-"),
                line.worked_hours,
                mode_label(line),
                money(line.base_pay),
                money(line.overtime_pay),
                money(line.fare),
                money(line.day_total),
            ));
        }
        out.push('\n');
    }

    out.push_str(&format!("{:<18} {:>10}\n", "Days worked", statement.days_worked));
    out.push_str(&format!(
        "{:<18} {:>10}\n",
        "Salary earned",
        money(statement.salary_earned)
    ));
    out.push_str(&format!("{:<18} {:>10}\n", "Fare", money(statement.fare_total)));
    out.push_str(&format!(
        "{:<18} {:>10}\n",
        "Advance deducted",
        money(statement.advance_paid)
    ));
    out.push_str(&format!(
        "{:<18} {:>10}\n",
        "Current month net",
        money(statement.current_month_net)
    ));
    out.push_str(&format!(
        "{:<18} {:>10}\n",
        "Previous balance",
        money(statement.previous_balance)
    ));
    out.push_str(&format!(
        "{:<18} {:>10}\n",
        "Final payable",
        money(statement.final_payable)
    ));
    out.push_str(&format!("{:<18} {:>10}\n", "Paid", money(statement.paid_total)));
    out.push_str(&format!(
        "{:<18} {:>10}\n",
        "Remaining due",
        money(statement.remaining_due)
    ));
    out.push_str(&format!(
        "{:<18} {:>10}\n",
        "Status",
        statement.status.as_str()
    ));
    if let Some(date) = statement.last_payment_date {
        out.push_str(&format!("{:<18} {:>10}\n", "Last payment", date.to_string()));
    }
    if !statement.payment_proofs.is_empty() {
        out.push_str(&format!("Proofs: {}\n", statement.payment_proofs.join(", ")));
    }
    if statement.settings_degraded {
        out.push_str("warning: invalid hour settings zeroed one or more days\n");
    }

    out
}
