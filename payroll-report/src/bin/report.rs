use std::fs::File;
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::Local;
use clap::Parser;
use payroll_core::calculations::StatementBuilder;
use payroll_core::{PayMonth, PayrollStore};
use payroll_report::{SnapshotLoader, render_payslip, render_summary};
use payroll_store_memory::MemoryStore;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Monthly payroll statements from a dataset snapshot.
///
/// Reads a JSON snapshot of the payroll records (employees, attendance,
/// advances, payments and the hour settings), computes every employee's
/// statement for one month, and prints a summary table. With --employee,
/// prints that employee's full payslip including the day-by-day wage
/// split instead.
#[derive(Debug, Parser)]
#[command(name = "payroll-report")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the JSON snapshot file
    #[arg(short, long)]
    data: PathBuf,

    /// Payroll month as YYYY-MM; defaults to the current month
    #[arg(short, long)]
    month: Option<String>,

    /// Employee id to print a single payslip for
    #[arg(short, long)]
    employee: Option<i64>,
}

/// Initialise the tracing subscriber.
///
/// * Honours `RUST_LOG` when set.
/// * Falls back to `warn` so the report itself stays clean while
///   degraded-input warnings from the engine still show.
/// * Strips timestamps and target names to keep CLI output clean.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::from("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .without_time()
        .with_target(false)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let args = Args::parse();

    let month = match &args.month {
        Some(raw) => raw
            .parse::<PayMonth>()
            .with_context(|| format!("Invalid --month value: {raw}"))?,
        None => PayMonth::of(Local::now().date_naive()),
    };

    let file = File::open(&args.data)
        .with_context(|| format!("Failed to open: {}", args.data.display()))?;
    let snapshot = SnapshotLoader::parse(file)
        .with_context(|| format!("Failed to parse snapshot: {}", args.data.display()))?;

    debug!(
        employees = snapshot.employees.len(),
        attendance = snapshot.attendance.len(),
        "loaded snapshot"
    );

    // The report runs off a store snapshot, the same way a live frontend
    // would; the in-memory store re-serves the file contents.
    let store = MemoryStore::with_dataset(snapshot);
    let dataset = store.dataset().await?;

    let builder = StatementBuilder::for_dataset(&dataset);
    let statements = builder.month_statements(month);

    match args.employee {
        Some(id) => {
            let statement = statements
                .iter()
                .find(|s| s.employee_id == id)
                .with_context(|| format!("No employee with id {id} in the snapshot"))?;
            let worker = dataset
                .employees
                .iter()
                .find(|e| e.id == id)
                .with_context(|| format!("No employee with id {id} in the snapshot"))?;
            let lines = builder.day_lines(worker, month);
            print!("{}", render_payslip(worker, statement, &lines));
        }
        None => {
            print!("{}", render_summary(month, &statements, &dataset.employees));
        }
    }

    Ok(())
}
