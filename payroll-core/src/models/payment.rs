use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::month::PayMonth;

/// How cash changed hands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMode {
    Cash,
    Bank,
    Upi,
    Cheque,
}

impl PaymentMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Cash => "cash",
            Self::Bank => "bank",
            Self::Upi => "upi",
            Self::Cheque => "cheque",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "cash" => Some(Self::Cash),
            "bank" => Some(Self::Bank),
            "upi" => Some(Self::Upi),
            "cheque" => Some(Self::Cheque),
            _ => None,
        }
    }
}

/// A salary disbursement applied against one month's payroll.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payment {
    pub id: i64,
    pub employee_id: i64,
    /// The payroll month this payment settles, which may differ from the
    /// month the cash was actually handed over.
    pub salary_month: PayMonth,
    /// Always positive.
    pub amount: Decimal,
    pub date: NaiveDate,
    pub mode: PaymentMode,
    pub notes: Option<String>,
    /// Reference to an uploaded proof attachment (receipt photo etc.).
    pub proof: Option<String>,

    pub created_at: DateTime<Utc>,
}

/// For recording new payments (no id or timestamp)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewPayment {
    pub employee_id: i64,
    pub salary_month: PayMonth,
    pub amount: Decimal,
    pub date: NaiveDate,
    pub mode: PaymentMode,
    pub notes: Option<String>,
    pub proof: Option<String>,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn mode_as_str_parse_round_trips() {
        for mode in [
            PaymentMode::Cash,
            PaymentMode::Bank,
            PaymentMode::Upi,
            PaymentMode::Cheque,
        ] {
            let result = PaymentMode::parse(mode.as_str());

            assert_eq!(result, Some(mode));
        }
    }

    #[test]
    fn mode_parse_rejects_unknown_code() {
        let result = PaymentMode::parse("barter");

        assert_eq!(result, None);
    }
}
