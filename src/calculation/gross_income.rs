//! Gross income calculation.

use rust_decimal::Decimal;

use crate::models::{AuditStep, CompensationInput};

/// The result of summing compensation components, including the audit step.
#[derive(Debug, Clone)]
pub struct GrossIncomeResult {
    /// Gross income at the scale of the input period.
    pub gross_income: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Sums basic salary and the three allowances.
///
/// The sum stays at the scale of `input.period`; annualization happens later.
///
/// # Examples
///
/// ```
/// use paye_engine::calculation::calculate_gross_income;
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
///
/// let result = calculate_gross_income(&input, 1);
/// assert_eq!(result.gross_income, Decimal::new(130_000, 0));
/// ```
pub fn calculate_gross_income(input: &CompensationInput, step_number: u32) -> GrossIncomeResult {
    let gross_income = input.basic_salary
        + input.housing_allowance
        + input.transport_allowance
        + input.other_allowances;

    let audit_step = AuditStep {
        step_number,
        rule_id: "gross_income".to_string(),
        rule_name: "Gross Income".to_string(),
        clause_ref: "PITA s.3".to_string(),
        input: serde_json::json!({
            "basic_salary": input.basic_salary.to_string(),
            "housing_allowance": input.housing_allowance.to_string(),
            "transport_allowance": input.transport_allowance.to_string(),
            "other_allowances": input.other_allowances.to_string(),
            "period": input.period.as_str()
        }),
        output: serde_json::json!({
            "gross_income": gross_income.to_string()
        }),
        reasoning: format!(
            "{} + {} + {} + {} = {} ({})",
            input.basic_salary.normalize(),
            input.housing_allowance.normalize(),
            input.transport_allowance.normalize(),
            input.other_allowances.normalize(),
            gross_income.normalize(),
            input.period.as_str()
        ),
    };

    GrossIncomeResult {
        gross_income,
        audit_step,
    }
}
