//! Statutory contribution calculations.
//!
//! This module computes the employee pension contribution and the National
//! Housing Fund contribution. Both stay at the scale of the input period.

use rust_decimal::Decimal;

use crate::config::ReliefConfig;
use crate::models::AuditStep;

/// The result of a contribution calculation, including the audit step.
#[derive(Debug, Clone)]
pub struct ContributionResult {
    /// The contribution amount at the scale of the input period.
    pub amount: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Computes the pension contribution as a percentage of gross income.
///
/// The rate is not clamped: a rate outside `[0, 100]` produces a
/// proportionally unusual contribution rather than an error.
///
/// # Examples
///
/// ```
/// use paye_engine::calculation::calculate_pension_contribution;
/// use paye_engine::config::TaxRegime;
/// use rust_decimal::Decimal;
///
/// let regime = TaxRegime::statutory();
/// let result = calculate_pension_contribution(
///     Decimal::new(130_000, 0),
///     Decimal::new(8, 0),
///     regime.reliefs(),
///     1,
/// );
/// assert_eq!(result.amount, Decimal::new(10_400, 0));
/// ```
pub fn calculate_pension_contribution(
    gross_income: Decimal,
    rate_percent: Decimal,
    reliefs: &ReliefConfig,
    step_number: u32,
) -> ContributionResult {
    let amount = rate_percent / Decimal::ONE_HUNDRED * gross_income;

    let audit_step = AuditStep {
        step_number,
        rule_id: "pension_contribution".to_string(),
        rule_name: "Pension Contribution".to_string(),
        clause_ref: reliefs.pension_clause.clone(),
        input: serde_json::json!({
            "gross_income": gross_income.to_string(),
            "pension_rate_percent": rate_percent.to_string()
        }),
        output: serde_json::json!({
            "pension_contribution": amount.to_string()
        }),
        reasoning: format!(
            "{}% x {} = {}",
            rate_percent.normalize(),
            gross_income.normalize(),
            amount.normalize()
        ),
    };

    ContributionResult { amount, audit_step }
}

/// Computes the NHF contribution from basic salary only.
///
/// # Examples
///
/// ```
/// use paye_engine::calculation::calculate_nhf_contribution;
/// use paye_engine::config::TaxRegime;
/// use rust_decimal::Decimal;
///
/// let regime = TaxRegime::statutory();
/// let result = calculate_nhf_contribution(Decimal::new(100_000, 0), regime.reliefs(), 1);
/// assert_eq!(result.amount, Decimal::new(2_500, 0));
/// ```
pub fn calculate_nhf_contribution(
    basic_salary: Decimal,
    reliefs: &ReliefConfig,
    step_number: u32,
) -> ContributionResult {
    let amount = reliefs.nhf_rate * basic_salary;

    let audit_step = AuditStep {
        step_number,
        rule_id: "nhf_contribution".to_string(),
        rule_name: "National Housing Fund Contribution".to_string(),
        clause_ref: reliefs.nhf_clause.clone(),
        input: serde_json::json!({
            "basic_salary": basic_salary.to_string(),
            "nhf_rate": reliefs.nhf_rate.to_string()
        }),
        output: serde_json::json!({
            "nhf_contribution": amount.to_string()
        }),
        reasoning: format!(
            "{} x {} = {} (basic salary only)",
            reliefs.nhf_rate.normalize(),
            basic_salary.normalize(),
            amount.normalize()
        ),
    };

    ContributionResult { amount, audit_step }
}
