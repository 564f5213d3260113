//! Consolidated Relief Allowance and taxable income.
//!
//! This module computes the CRA from annual gross income and then nets it,
//! together with the annual pension and NHF contributions, off gross income
//! to arrive at taxable income.

use rust_decimal::Decimal;

use crate::config::ReliefConfig;
use crate::models::AuditStep;

/// The result of the CRA calculation, including the audit step.
#[derive(Debug, Clone)]
pub struct ConsolidatedReliefResult {
    /// The annual Consolidated Relief Allowance.
    pub allowance: Decimal,
    /// Whether the fixed floor strictly exceeded the percentage alternative.
    pub floor_applied: bool,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// The result of netting reliefs off gross income.
#[derive(Debug, Clone)]
pub struct TaxableIncomeResult {
    /// CRA plus annual pension plus annual NHF.
    pub total_reliefs: Decimal,
    /// Annual taxable income, clamped at zero.
    pub taxable_income: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Computes the Consolidated Relief Allowance.
///
/// `cra_gross_rate * gross + max(cra_floor, cra_alternative_rate * gross)`.
/// The floor applies even when gross income is zero.
///
/// # Examples
///
/// ```
/// use paye_engine::calculation::calculate_consolidated_relief;
/// use paye_engine::config::TaxRegime;
/// use rust_decimal::Decimal;
///
/// let regime = TaxRegime::statutory();
/// let result = calculate_consolidated_relief(Decimal::new(1_560_000, 0), regime.reliefs(), 1);
/// assert_eq!(result.allowance, Decimal::new(512_000, 0));
/// assert!(result.floor_applied);
/// ```
pub fn calculate_consolidated_relief(
    annual_gross_income: Decimal,
    reliefs: &ReliefConfig,
    step_number: u32,
) -> ConsolidatedReliefResult {
    let flat_component = reliefs.cra_gross_rate * annual_gross_income;
    let alternative = reliefs.cra_alternative_rate * annual_gross_income;
    let floor_applied = reliefs.cra_floor > alternative;
    let higher_of = reliefs.cra_floor.max(alternative);
    let allowance = flat_component + higher_of;

    let audit_step = AuditStep {
        step_number,
        rule_id: "consolidated_relief_allowance".to_string(),
        rule_name: "Consolidated Relief Allowance".to_string(),
        clause_ref: reliefs.cra_clause.clone(),
        input: serde_json::json!({
            "annual_gross_income": annual_gross_income.to_string(),
            "cra_gross_rate": reliefs.cra_gross_rate.to_string(),
            "cra_floor": reliefs.cra_floor.to_string(),
            "cra_alternative_rate": reliefs.cra_alternative_rate.to_string()
        }),
        output: serde_json::json!({
            "flat_component": flat_component.to_string(),
            "higher_of": higher_of.to_string(),
            "floor_applied": floor_applied,
            "consolidated_relief_allowance": allowance.to_string()
        }),
        reasoning: format!(
            "{} + max({}, {}) = {}",
            flat_component.normalize(),
            reliefs.cra_floor.normalize(),
            alternative.normalize(),
            allowance.normalize()
        ),
    };

    ConsolidatedReliefResult {
        allowance,
        floor_applied,
        audit_step,
    }
}

/// Nets CRA, pension and NHF off annual gross income.
///
/// Reliefs can never push taxable income below zero.
///
/// # Examples
///
/// ```
/// use paye_engine::calculation::calculate_taxable_income;
/// use rust_decimal::Decimal;
///
/// let result = calculate_taxable_income(
///     Decimal::new(1_560_000, 0),
///     Decimal::new(512_000, 0),
///     Decimal::new(124_800, 0),
///     Decimal::new(30_000, 0),
///     1,
/// );
/// assert_eq!(result.total_reliefs, Decimal::new(666_800, 0));
/// assert_eq!(result.taxable_income, Decimal::new(893_200, 0));
/// ```
pub fn calculate_taxable_income(
    annual_gross_income: Decimal,
    consolidated_relief: Decimal,
    annual_pension: Decimal,
    annual_nhf: Decimal,
    step_number: u32,
) -> TaxableIncomeResult {
    let total_reliefs = consolidated_relief + annual_pension + annual_nhf;
    let unclamped = annual_gross_income - total_reliefs;
    let taxable_income = unclamped.max(Decimal::ZERO);
    let clamped = unclamped < Decimal::ZERO;

    let reasoning = if clamped {
        format!(
            "Reliefs {} exceed gross {} - taxable income clamped to 0",
            total_reliefs.normalize(),
            annual_gross_income.normalize()
        )
    } else {
        format!(
            "{} - ({} + {} + {}) = {}",
            annual_gross_income.normalize(),
            consolidated_relief.normalize(),
            annual_pension.normalize(),
            annual_nhf.normalize(),
            taxable_income.normalize()
        )
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "taxable_income".to_string(),
        rule_name: "Taxable Income".to_string(),
        clause_ref: "PITA s.33".to_string(),
        input: serde_json::json!({
            "annual_gross_income": annual_gross_income.to_string(),
            "consolidated_relief_allowance": consolidated_relief.to_string(),
            "annual_pension_contribution": annual_pension.to_string(),
            "annual_nhf_contribution": annual_nhf.to_string()
        }),
        output: serde_json::json!({
            "total_reliefs": total_reliefs.to_string(),
            "taxable_income": taxable_income.to_string(),
            "clamped": clamped
        }),
        reasoning,
    };

    TaxableIncomeResult {
        total_reliefs,
        taxable_income,
        audit_step,
    }
}
