//! Annualization of period-scale figures.

use rust_decimal::Decimal;

use crate::models::{AuditStep, PayPeriod};

/// Gross income and contributions expressed over a full year.
#[derive(Debug, Clone)]
pub struct AnnualizedFigures {
    /// Annual gross income.
    pub gross_income: Decimal,
    /// Annual pension contribution.
    pub pension_contribution: Decimal,
    /// Annual NHF contribution.
    pub nhf_contribution: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Scales gross income, pension and NHF to annual figures.
///
/// Monthly figures are multiplied by `months_per_year`; annual figures pass
/// through unchanged.
///
/// # Examples
///
/// ```
/// use paye_engine::calculation::annualize;
/// use paye_engine::models::PayPeriod;
/// use rust_decimal::Decimal;
///
/// let annual = annualize(
///     Decimal::new(130_000, 0),
///     Decimal::new(10_400, 0),
///     Decimal::new(2_500, 0),
///     PayPeriod::Monthly,
///     12,
///     1,
/// );
/// assert_eq!(annual.gross_income, Decimal::new(1_560_000, 0));
/// assert_eq!(annual.nhf_contribution, Decimal::new(30_000, 0));
/// ```
pub fn annualize(
    gross_income: Decimal,
    pension_contribution: Decimal,
    nhf_contribution: Decimal,
    period: PayPeriod,
    months_per_year: u32,
    step_number: u32,
) -> AnnualizedFigures {
    let factor = Decimal::from(period.periods_per_year(months_per_year));

    let annual_gross = gross_income * factor;
    let annual_pension = pension_contribution * factor;
    let annual_nhf = nhf_contribution * factor;

    let reasoning = match period {
        PayPeriod::Monthly => format!(
            "Monthly figures x {}: gross {}, pension {}, NHF {}",
            factor,
            annual_gross.normalize(),
            annual_pension.normalize(),
            annual_nhf.normalize()
        ),
        PayPeriod::Annual => "Figures are already annual - no scaling applied".to_string(),
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "annualization".to_string(),
        rule_name: "Annualization".to_string(),
        clause_ref: "PITA s.33".to_string(),
        input: serde_json::json!({
            "period": period.as_str(),
            "gross_income": gross_income.to_string(),
            "pension_contribution": pension_contribution.to_string(),
            "nhf_contribution": nhf_contribution.to_string()
        }),
        output: serde_json::json!({
            "factor": factor.to_string(),
            "annual_gross_income": annual_gross.to_string(),
            "annual_pension_contribution": annual_pension.to_string(),
            "annual_nhf_contribution": annual_nhf.to_string()
        }),
        reasoning,
    };

    AnnualizedFigures {
        gross_income: annual_gross,
        pension_contribution: annual_pension,
        nhf_contribution: annual_nhf,
        audit_step,
    }
}
