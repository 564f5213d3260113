//! The tax result record produced by the engine.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::PayPeriod;

/// Tax charged within one band of the progressive table.
///
/// # Example
///
/// ```
/// use paye_engine::models::BandCharge;
/// use rust_decimal::Decimal;
///
/// let charge = BandCharge {
///     band: 1,
///     width: Some(Decimal::new(300_000, 0)),
///     rate: Decimal::new(7, 2),
///     taxed_amount: Decimal::new(300_000, 0),
///     tax: Decimal::new(21_000, 0),
/// };
/// assert_eq!(charge.taxed_amount * charge.rate, charge.tax);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BandCharge {
    /// 1-based position of the band in the table.
    pub band: u32,
    /// Width of the band, `None` for the unbounded top band.
    pub width: Option<Decimal>,
    /// Rate applied within the band.
    pub rate: Decimal,
    /// Portion of taxable income that fell into this band.
    pub taxed_amount: Decimal,
    /// `taxed_amount * rate`.
    pub tax: Decimal,
}

/// The outcome of one PAYE computation.
///
/// Gross income, pension and NHF are kept at the scale of the input period.
/// Everything from the relief allowance onward is annual. No field is
/// rounded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxResult {
    /// Scale of the period-scale fields.
    pub period: PayPeriod,
    /// Sum of the four compensation components (period scale).
    pub gross_income: Decimal,
    /// Employee pension contribution (period scale).
    pub pension_contribution: Decimal,
    /// National Housing Fund contribution (period scale).
    pub nhf_contribution: Decimal,
    /// Gross income over the year.
    pub annual_gross_income: Decimal,
    /// Pension contribution over the year.
    pub annual_pension_contribution: Decimal,
    /// NHF contribution over the year.
    pub annual_nhf_contribution: Decimal,
    /// Consolidated Relief Allowance (annual).
    pub consolidated_relief_allowance: Decimal,
    /// CRA plus annual pension and NHF.
    pub total_reliefs: Decimal,
    /// Annual income subject to the band table, never negative.
    pub taxable_income: Decimal,
    /// Per-band breakdown of `annual_tax`.
    pub band_charges: Vec<BandCharge>,
    /// Tax due for the year.
    pub annual_tax: Decimal,
    /// `annual_tax / 12`.
    pub monthly_tax: Decimal,
}

impl TaxResult {
    /// Total income consumed across all bands.
    pub fn banded_income(&self) -> Decimal {
        self.band_charges.iter().map(|c| c.taxed_amount).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn sample_result() -> TaxResult {
        TaxResult {
            period: PayPeriod::Monthly,
            gross_income: dec("130000"),
            pension_contribution: dec("10400"),
            nhf_contribution: dec("2500"),
            annual_gross_income: dec("1560000"),
            annual_pension_contribution: dec("124800"),
            annual_nhf_contribution: dec("30000"),
            consolidated_relief_allowance: dec("512000"),
            total_reliefs: dec("666800"),
            taxable_income: dec("893200"),
            band_charges: vec![
                BandCharge {
                    band: 1,
                    width: Some(dec("300000")),
                    rate: dec("0.07"),
                    taxed_amount: dec("300000"),
                    tax: dec("21000"),
                },
                BandCharge {
                    band: 2,
                    width: Some(dec("300000")),
                    rate: dec("0.11"),
                    taxed_amount: dec("300000"),
                    tax: dec("33000"),
                },
                BandCharge {
                    band: 3,
                    width: Some(dec("500000")),
                    rate: dec("0.15"),
                    taxed_amount: dec("293200"),
                    tax: dec("43980"),
                },
            ],
            annual_tax: dec("97980"),
            monthly_tax: dec("8165"),
        }
    }

    #[test]
    fn test_banded_income_sums_taxed_amounts() {
        assert_eq!(sample_result().banded_income(), dec("893200"));
    }

    #[test]
    fn test_tax_result_serializes_decimals_as_strings() {
        let json = serde_json::to_string(&sample_result()).unwrap();
        assert!(json.contains("\"period\":\"monthly\""));
        assert!(json.contains("\"taxable_income\":\"893200\""));
        assert!(json.contains("\"annual_tax\":\"97980\""));
        assert!(json.contains("\"band_charges\":["));
    }

    #[test]
    fn test_unbounded_band_serializes_null_width() {
        let charge = BandCharge {
            band: 6,
            width: None,
            rate: dec("0.24"),
            taxed_amount: dec("100"),
            tax: dec("24"),
        };
        let json = serde_json::to_string(&charge).unwrap();
        assert!(json.contains("\"width\":null"));
    }

    #[test]
    fn test_tax_result_deserializes_back() {
        let json = serde_json::to_string(&sample_result()).unwrap();
        let result: TaxResult = serde_json::from_str(&json).unwrap();
        assert_eq!(result.monthly_tax, dec("8165"));
        assert_eq!(result.band_charges.len(), 3);
    }
}
