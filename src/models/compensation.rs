//! Compensation input models.
//!
//! This module contains the [`CompensationInput`] passed to the engine and the
//! [`PayPeriod`] that says which scale its monetary fields are expressed in.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The scale at which compensation figures are quoted.
///
/// # Example
///
/// ```
/// use paye_engine::models::PayPeriod;
///
/// assert_eq!(PayPeriod::Monthly.periods_per_year(12), 12);
/// assert_eq!(PayPeriod::Annual.periods_per_year(12), 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PayPeriod {
    /// Figures are per calendar month.
    #[default]
    Monthly,
    /// Figures already cover the whole year.
    #[serde(alias = "annually")]
    Annual,
}

impl PayPeriod {
    /// How many of these periods make up a year.
    pub fn periods_per_year(self, months_per_year: u32) -> u32 {
        match self {
            PayPeriod::Monthly => months_per_year,
            PayPeriod::Annual => 1,
        }
    }

    /// Wire name of the period.
    pub fn as_str(self) -> &'static str {
        match self {
            PayPeriod::Monthly => "monthly",
            PayPeriod::Annual => "annual",
        }
    }
}

/// Salary components and contribution settings for one tax computation.
///
/// The engine assumes every monetary field is finite and non-negative and that
/// `pension_rate_percent` lies in `[0, 100]`. Nothing here enforces it; values
/// outside that range flow through the formulas unchanged.
///
/// # Example
///
/// ```
/// use paye_engine::models::{CompensationInput, PayPeriod};
/// use rust_decimal::Decimal;
///
/// let input = CompensationInput {
///     basic_salary: Decimal::new(100_000, 0),
///     housing_allowance: Decimal::new(20_000, 0),
///     transport_allowance: Decimal::new(10_000, 0),
///     other_allowances: Decimal::ZERO,
///     pension_rate_percent: Decimal::new(8, 0),
///     period: PayPeriod::Monthly,
/// };
/// assert_eq!(input.period, PayPeriod::Monthly);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompensationInput {
    /// Basic salary. Also the base for the NHF contribution.
    pub basic_salary: Decimal,
    /// Housing allowance.
    pub housing_allowance: Decimal,
    /// Transport allowance.
    pub transport_allowance: Decimal,
    /// Any other taxable allowances.
    pub other_allowances: Decimal,
    /// Employee pension contribution as a percentage of gross income.
    pub pension_rate_percent: Decimal,
    /// Scale of the monetary fields above.
    pub period: PayPeriod,
}
