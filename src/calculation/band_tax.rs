//! Progressive band tax calculation.
//!
//! Each band is a separate slice of taxable income. Bands are applied in
//! order, each consuming up to its width of whatever income remains, until
//! nothing remains. The unbounded top band absorbs any remainder.

use rust_decimal::Decimal;

use crate::config::BandTable;
use crate::models::{AuditStep, BandCharge};

/// The result of applying the band table, including the audit step.
#[derive(Debug, Clone)]
pub struct BandTaxResult {
    /// Total tax for the year.
    pub annual_tax: Decimal,
    /// One entry per band that consumed income, in table order.
    pub charges: Vec<BandCharge>,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Applies the progressive band table to annual taxable income.
///
/// Stops as soon as the remaining income is exhausted; unused band capacity
/// carries no tax. A zero or negative taxable amount yields no charges.
///
/// # Examples
///
/// ```
/// use paye_engine::calculation::calculate_band_tax;
/// use paye_engine::config::TaxRegime;
/// use rust_decimal::Decimal;
///
/// let regime = TaxRegime::statutory();
/// let result = calculate_band_tax(Decimal::new(893_200, 0), regime.bands(), 1);
/// assert_eq!(result.annual_tax, Decimal::new(97_980, 0));
/// assert_eq!(result.charges.len(), 3);
/// ```
pub fn calculate_band_tax(taxable_income: Decimal, table: &BandTable, step_number: u32) -> BandTaxResult {
    let mut remaining = taxable_income;
    let mut annual_tax = Decimal::ZERO;
    let mut charges = Vec::new();

    for (index, band) in table.bands.iter().enumerate() {
        if remaining <= Decimal::ZERO {
            break;
        }

        let taxed_amount = match band.width {
            Some(width) => width.min(remaining),
            None => remaining,
        };
        let tax = taxed_amount * band.rate;

        annual_tax += tax;
        remaining -= taxed_amount;

        charges.push(BandCharge {
            band: index as u32 + 1,
            width: band.width,
            rate: band.rate,
            taxed_amount,
            tax,
        });
    }

    let breakdown: Vec<String> = charges
        .iter()
        .map(|c| {
            format!(
                "{} @ {}% = {}",
                c.taxed_amount.normalize(),
                (c.rate * Decimal::ONE_HUNDRED).normalize(),
                c.tax.normalize()
            )
        })
        .collect();

    let reasoning = if breakdown.is_empty() {
        "No taxable income - no band applies".to_string()
    } else {
        format!("{}; total {}", breakdown.join("; "), annual_tax.normalize())
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "band_tax".to_string(),
        rule_name: "Progressive Band Tax".to_string(),
        clause_ref: table.clause.clone(),
        input: serde_json::json!({
            "taxable_income": taxable_income.to_string(),
            "bands": table.bands.len()
        }),
        output: serde_json::json!({
            "bands_applied": charges.len(),
            "annual_tax": annual_tax.to_string()
        }),
        reasoning,
    };

    BandTaxResult {
        annual_tax,
        charges,
        audit_step,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{TaxBand, TaxRegime};
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn statutory_tax(taxable: &str) -> BandTaxResult {
        let regime = TaxRegime::statutory();
        calculate_band_tax(dec(taxable), regime.bands(), 1)
    }

    #[test]
    fn test_income_within_first_band() {
        let result = statutory_tax("100000");
        assert_eq!(result.annual_tax, dec("7000"));
        assert_eq!(result.charges.len(), 1);
        assert_eq!(result.charges[0].taxed_amount, dec("100000"));
    }

    #[test]
    fn test_income_exactly_fills_first_band() {
        let result = statutory_tax("300000");
        assert_eq!(result.annual_tax, dec("21000"));
        assert_eq!(result.charges.len(), 1);
    }

    #[test]
    fn test_income_spanning_three_bands() {
        let result = statutory_tax("893200");

        assert_eq!(result.charges.len(), 3);
        assert_eq!(result.charges[0].tax, dec("21000"));
        assert_eq!(result.charges[1].tax, dec("33000"));
        assert_eq!(result.charges[2].taxed_amount, dec("293200"));
        assert_eq!(result.charges[2].tax, dec("43980"));
        assert_eq!(result.annual_tax, dec("97980"));
    }

    #[test]
    fn test_income_filling_all_bounded_bands() {
        // 21,000 + 33,000 + 75,000 + 95,000 + 336,000
        let result = statutory_tax("3200000");
        assert_eq!(result.annual_tax, dec("560000"));
        assert_eq!(result.charges.len(), 5);
    }

    #[test]
    fn test_remainder_goes_to_top_band() {
        let result = statutory_tax("4200000");

        assert_eq!(result.charges.len(), 6);
        let top = &result.charges[5];
        assert_eq!(top.band, 6);
        assert_eq!(top.width, None);
        assert_eq!(top.taxed_amount, dec("1000000"));
        assert_eq!(top.tax, dec("240000"));
        assert_eq!(result.annual_tax, dec("800000"));
    }

    #[test]
    fn test_zero_income_has_no_charges() {
        let result = statutory_tax("0");
        assert_eq!(result.annual_tax, Decimal::ZERO);
        assert!(result.charges.is_empty());
        assert!(result.audit_step.reasoning.contains("No taxable income"));
    }

    #[test]
    fn test_negative_income_has_no_charges() {
        let result = statutory_tax("-5000");
        assert_eq!(result.annual_tax, Decimal::ZERO);
        assert!(result.charges.is_empty());
    }

    #[test]
    fn test_taxed_amounts_sum_to_taxable_income() {
        let result = statutory_tax("2750000.50");
        let sum: Decimal = result.charges.iter().map(|c| c.taxed_amount).sum();
        assert_eq!(sum, dec("2750000.50"));
    }

    #[test]
    fn test_custom_table() {
        let table = BandTable {
            clause: "test".to_string(),
            bands: vec![
                TaxBand::bounded(dec("1000"), dec("0")),
                TaxBand::unbounded(dec("0.5")),
            ],
        };
        let result = calculate_band_tax(dec("3000"), &table, 1);
        assert_eq!(result.annual_tax, dec("1000"));
    }

    #[test]
    fn test_audit_step_summarizes_bands() {
        let result = statutory_tax("893200");
        assert_eq!(result.audit_step.rule_id, "band_tax");
        assert_eq!(result.audit_step.clause_ref, "PITA Sixth Schedule");
        assert_eq!(result.audit_step.output["bands_applied"], 3);
        assert!(result.audit_step.reasoning.contains("300000 @ 7% = 21000"));
        assert!(result.audit_step.reasoning.contains("total 97980"));
    }
}
