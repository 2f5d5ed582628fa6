use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    pub id: i64,
    /// Human-readable badge code shown on payslips, unique when present.
    pub custom_id: Option<String>,
    pub name: String,
    /// Daily wage in currency units; always positive.
    pub salary: Decimal,
    pub designation: String,

    // Per-employee hour overrides. Stored and round-tripped but not yet
    // consulted by the wage calculators; global settings apply to everyone.
    pub normal_hours: Option<Decimal>,
    pub slab_base_hours: Option<Decimal>,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// For creating new employees (no id or timestamps)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewEmployee {
    pub custom_id: Option<String>,
    pub name: String,
    pub salary: Decimal,
    pub designation: String,
    pub normal_hours: Option<Decimal>,
    pub slab_base_hours: Option<Decimal>,
}
