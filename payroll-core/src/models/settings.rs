//! Global payroll settings.
//!
//! The two hour figures are the denominators the daily wage calculator
//! divides an employee's daily salary by: `standard_hours` yields the
//! normal hourly rate, `slab_hours` yields the (richer) overtime rate.
//! There is one settings record for the whole business; changing it
//! affects every subsequent computation, including recomputation of past
//! months.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

/// Errors produced when validating [`PayrollSettings`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SettingsError {
    /// Standard hours is the divisor for the normal hourly rate.
    #[error("standard hours must be positive, got {0}")]
    InvalidStandardHours(Decimal),

    /// Slab hours is the divisor for the overtime hourly rate.
    #[error("slab hours must be positive, got {0}")]
    InvalidSlabHours(Decimal),
}

/// Business-wide wage configuration.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use payroll_core::PayrollSettings;
///
/// let settings = PayrollSettings::default();
///
/// assert_eq!(settings.standard_hours, dec!(8.5));
/// assert_eq!(settings.slab_hours, dec!(6));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollSettings {
    /// Hours that make up a full working day.
    ///
    /// The normal hourly rate is `salary / standard_hours`.
    pub standard_hours: Decimal,

    /// Divisor for the overtime slab rate.
    ///
    /// Kept below `standard_hours` so that `salary / slab_hours` pays a
    /// premium over the normal rate.
    pub slab_hours: Decimal,
}

impl Default for PayrollSettings {
    fn default() -> Self {
        Self {
            standard_hours: Decimal::new(85, 1),
            slab_hours: Decimal::new(6, 0),
        }
    }
}

impl PayrollSettings {
    /// Validates the settings values.
    ///
    /// Both hour figures must be positive; either at zero would divide the
    /// daily salary by zero. A slab figure at or above the standard figure
    /// is legal but logs a warning, since overtime then pays no premium.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError`] if either figure is zero or negative.
    ///
    /// # Example
    ///
    /// ```
    /// use rust_decimal_macros::dec;
    /// use payroll_core::{PayrollSettings, SettingsError};
    ///
    /// let settings = PayrollSettings {
    ///     standard_hours: dec!(0),
    ///     slab_hours: dec!(6),
    /// };
    ///
    /// let result = settings.validate();
    /// assert_eq!(result, Err(SettingsError::InvalidStandardHours(dec!(0))));
    /// ```
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.standard_hours <= Decimal::ZERO {
            return Err(SettingsError::InvalidStandardHours(self.standard_hours));
        }
        if self.slab_hours <= Decimal::ZERO {
            return Err(SettingsError::InvalidSlabHours(self.slab_hours));
        }
        if self.slab_hours >= self.standard_hours {
            warn!(
                standard_hours = %self.standard_hours,
                slab_hours = %self.slab_hours,
                "slab hours at or above standard hours; overtime pays no premium"
            );
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;
    use tracing_subscriber::fmt::format::FmtSpan;

    use super::*;

    /// Initializes tracing subscriber for tests that verify log output.
    fn init_test_tracing() -> tracing::subscriber::DefaultGuard {
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::WARN)
            .with_span_events(FmtSpan::NONE)
            .with_test_writer()
            .finish();
        tracing::subscriber::set_default(subscriber)
    }

    // =========================================================================
    // PayrollSettings::validate tests
    // =========================================================================

    #[test]
    fn validate_accepts_default_settings() {
        let settings = PayrollSettings::default();

        let result = settings.validate();

        assert_eq!(result, Ok(()));
    }

    #[test]
    fn validate_rejects_zero_standard_hours() {
        let settings = PayrollSettings {
            standard_hours: dec!(0),
            ..PayrollSettings::default()
        };

        let result = settings.validate();

        assert_eq!(result, Err(SettingsError::InvalidStandardHours(dec!(0))));
    }

    #[test]
    fn validate_rejects_negative_standard_hours() {
        let settings = PayrollSettings {
            standard_hours: dec!(-8.5),
            ..PayrollSettings::default()
        };

        let result = settings.validate();

        assert_eq!(result, Err(SettingsError::InvalidStandardHours(dec!(-8.5))));
    }

    #[test]
    fn validate_rejects_zero_slab_hours() {
        let settings = PayrollSettings {
            slab_hours: dec!(0),
            ..PayrollSettings::default()
        };

        let result = settings.validate();

        assert_eq!(result, Err(SettingsError::InvalidSlabHours(dec!(0))));
    }

    #[test]
    fn validate_rejects_negative_slab_hours() {
        let settings = PayrollSettings {
            slab_hours: dec!(-6),
            ..PayrollSettings::default()
        };

        let result = settings.validate();

        assert_eq!(result, Err(SettingsError::InvalidSlabHours(dec!(-6))));
    }

    #[test]
    fn validate_accepts_slab_above_standard_with_warning() {
        let _guard = init_test_tracing();
        let settings = PayrollSettings {
            standard_hours: dec!(6),
            slab_hours: dec!(8.5),
        };

        let result = settings.validate();

        assert_eq!(result, Ok(()));
    }

    #[test]
    fn default_matches_documented_values() {
        let settings = PayrollSettings::default();

        assert_eq!(settings.standard_hours, dec!(8.5));
        assert_eq!(settings.slab_hours, dec!(6));
    }
}
