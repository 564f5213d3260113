//! The PAYE tax engine.
//!
//! [`TaxEngine`] chains the individual calculation steps in statutory order
//! and assembles the [`TaxResult`]. It holds only an immutable regime, so one
//! engine can serve any number of concurrent callers.

use std::sync::LazyLock;
use std::time::Instant;

use rust_decimal::Decimal;

use crate::config::TaxRegime;
use crate::models::{AuditStep, AuditTrace, CompensationInput, TaxResult};

use super::annualization::annualize;
use super::band_tax::calculate_band_tax;
use super::contributions::{calculate_nhf_contribution, calculate_pension_contribution};
use super::gross_income::calculate_gross_income;
use super::relief_allowance::{calculate_consolidated_relief, calculate_taxable_income};

static STATUTORY_ENGINE: LazyLock<TaxEngine> = LazyLock::new(TaxEngine::statutory);

/// Computes PAYE for `input` under the statutory regime.
///
/// # Examples
///
/// ```
/// use paye_engine::calculation::compute;
/// use paye_engine::models::{CompensationInput, PayPeriod};
/// use rust_decimal::Decimal;
///
/// let result = compute(&CompensationInput {
///     basic_salary: Decimal::new(100_000, 0),
///     housing_allowance: Decimal::new(20_000, 0),
///     transport_allowance: Decimal::new(10_000, 0),
///     other_allowances: Decimal::ZERO,
///     pension_rate_percent: Decimal::new(8, 0),
///     period: PayPeriod::Monthly,
/// });
///
/// assert_eq!(result.taxable_income, Decimal::new(893_200, 0));
/// assert_eq!(result.annual_tax, Decimal::new(97_980, 0));
/// assert_eq!(result.monthly_tax, Decimal::new(8_165, 0));
/// ```
pub fn compute(input: &CompensationInput) -> TaxResult {
    STATUTORY_ENGINE.compute(input)
}

/// Derives the monthly figure from annual tax.
///
/// Always `annual_tax / months_per_year`, whatever the input period was. The
/// divisor is the regime's annualization multiplier, so monthly tax is
/// `annual_tax / 12` under every shipped regime. A regime must carry a
/// positive `months_per_year`; [`TaxRegime::new`] rejects zero.
pub fn calculate_monthly_tax(
    annual_tax: Decimal,
    months_per_year: u32,
    step_number: u32,
) -> (Decimal, AuditStep) {
    let months = Decimal::from(months_per_year);
    let monthly_tax = annual_tax / months;

    let audit_step = AuditStep {
        step_number,
        rule_id: "monthly_tax".to_string(),
        rule_name: "Monthly PAYE".to_string(),
        clause_ref: "PITA s.81".to_string(),
        input: serde_json::json!({
            "annual_tax": annual_tax.to_string(),
            "months_per_year": months_per_year
        }),
        output: serde_json::json!({
            "monthly_tax": monthly_tax.to_string()
        }),
        reasoning: format!(
            "{} / {} = {}",
            annual_tax.normalize(),
            months_per_year,
            monthly_tax.normalize()
        ),
    };

    (monthly_tax, audit_step)
}

/// Computes PAYE under a fixed tax regime.
#[derive(Debug, Clone)]
pub struct TaxEngine {
    regime: TaxRegime,
}

impl TaxEngine {
    /// Creates an engine for the given regime.
    pub fn new(regime: TaxRegime) -> Self {
        Self { regime }
    }

    /// Creates an engine for the built-in statutory regime.
    pub fn statutory() -> Self {
        Self::new(TaxRegime::statutory())
    }

    /// Returns the regime this engine applies.
    pub fn regime(&self) -> &TaxRegime {
        &self.regime
    }

    /// Computes the tax result for `input`.
    pub fn compute(&self, input: &CompensationInput) -> TaxResult {
        self.compute_traced(input).0
    }

    /// Computes the tax result along with the audit trace of every step.
    pub fn compute_traced(&self, input: &CompensationInput) -> (TaxResult, AuditTrace) {
        let start_time = Instant::now();
        let reliefs = self.regime.reliefs();
        let mut steps: Vec<AuditStep> = Vec::with_capacity(8);

        let gross = calculate_gross_income(input, 1);
        steps.push(gross.audit_step);

        let pension = calculate_pension_contribution(
            gross.gross_income,
            input.pension_rate_percent,
            reliefs,
            2,
        );
        steps.push(pension.audit_step);

        let nhf = calculate_nhf_contribution(input.basic_salary, reliefs, 3);
        steps.push(nhf.audit_step);

        let annual = annualize(
            gross.gross_income,
            pension.amount,
            nhf.amount,
            input.period,
            reliefs.months_per_year,
            4,
        );
        steps.push(annual.audit_step);

        let cra = calculate_consolidated_relief(annual.gross_income, reliefs, 5);
        steps.push(cra.audit_step);

        let taxable = calculate_taxable_income(
            annual.gross_income,
            cra.allowance,
            annual.pension_contribution,
            annual.nhf_contribution,
            6,
        );
        steps.push(taxable.audit_step);

        let band_tax = calculate_band_tax(taxable.taxable_income, self.regime.bands(), 7);
        steps.push(band_tax.audit_step);

        let (monthly_tax, monthly_step) =
            calculate_monthly_tax(band_tax.annual_tax, reliefs.months_per_year, 8);
        steps.push(monthly_step);

        let result = TaxResult {
            period: input.period,
            gross_income: gross.gross_income,
            pension_contribution: pension.amount,
            nhf_contribution: nhf.amount,
            annual_gross_income: annual.gross_income,
            annual_pension_contribution: annual.pension_contribution,
            annual_nhf_contribution: annual.nhf_contribution,
            consolidated_relief_allowance: cra.allowance,
            total_reliefs: taxable.total_reliefs,
            taxable_income: taxable.taxable_income,
            band_charges: band_tax.charges,
            annual_tax: band_tax.annual_tax,
            monthly_tax,
        };

        let trace = AuditTrace {
            steps,
            duration_us: start_time.elapsed().as_micros() as u64,
        };

        (result, trace)
    }
}

impl Default for TaxEngine {
    fn default() -> Self {
        Self::statutory()
    }
}
