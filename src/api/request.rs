//! Request types for the PAYE engine API.
//!
//! This module defines the JSON request body shared by the `/calculate`
//! endpoints and the caller-side validation the engine itself never performs.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::{CompensationInput, PayPeriod};

/// Request body for the `/calculate` endpoints.
///
/// Only `basic_salary` is required. Allowances default to zero, the pension
/// rate to 8% and the period to monthly.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationRequest {
    /// Basic salary.
    pub basic_salary: Decimal,
    /// Housing allowance.
    #[serde(default)]
    pub housing_allowance: Decimal,
    /// Transport allowance.
    #[serde(default)]
    pub transport_allowance: Decimal,
    /// Any other allowances.
    #[serde(default)]
    pub other_allowances: Decimal,
    /// Employee pension contribution as a percentage of gross income.
    #[serde(default = "default_pension_rate")]
    pub pension_rate_percent: Decimal,
    /// Scale of the monetary fields.
    #[serde(default)]
    pub period: PayPeriod,
}

fn default_pension_rate() -> Decimal {
    Decimal::new(8, 0)
}

impl CalculationRequest {
    /// Rejects negative amounts, pension rates outside `[0, 100]` and
    /// amounts too large for the engine to carry through a year.
    ///
    /// `months_per_year` is the annualization multiplier of the regime the
    /// request will be computed under.
    pub fn validate(&self, months_per_year: u32) -> EngineResult<()> {
        let amounts = [
            ("basic_salary", self.basic_salary),
            ("housing_allowance", self.housing_allowance),
            ("transport_allowance", self.transport_allowance),
            ("other_allowances", self.other_allowances),
        ];

        for (field, value) in amounts {
            if value < Decimal::ZERO {
                return Err(EngineError::InvalidInput {
                    field: field.to_string(),
                    message: format!("must not be negative, got {}", value),
                });
            }
        }

        if self.pension_rate_percent < Decimal::ZERO
            || self.pension_rate_percent > Decimal::ONE_HUNDRED
        {
            return Err(EngineError::InvalidInput {
                field: "pension_rate_percent".to_string(),
                message: format!(
                    "must be between 0 and 100, got {}",
                    self.pension_rate_percent
                ),
            });
        }

        // Reliefs can add up to twice annual gross, so that must also fit.
        let factor = Decimal::from(self.period.periods_per_year(months_per_year));
        let fits = amounts
            .iter()
            .try_fold(Decimal::ZERO, |sum, (_, value)| sum.checked_add(*value))
            .and_then(|gross| gross.checked_mul(factor))
            .and_then(|annual| annual.checked_mul(Decimal::TWO))
            .is_some();
        if !fits {
            return Err(EngineError::InvalidInput {
                field: "gross_income".to_string(),
                message: "annualized gross income exceeds the supported range".to_string(),
            });
        }

        Ok(())
    }
}

impl From<CalculationRequest> for CompensationInput {
    fn from(req: CalculationRequest) -> Self {
        CompensationInput {
            basic_salary: req.basic_salary,
            housing_allowance: req.housing_allowance,
            transport_allowance: req.transport_allowance,
            other_allowances: req.other_allowances,
            pension_rate_percent: req.pension_rate_percent,
            period: req.period,
        }
    }
}
