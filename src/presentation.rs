//! Boundary formatting of tax results.
//!
//! The engine never rounds. Rounding to kobo and currency formatting happen
//! here, when a [`TaxResult`] is rendered for people to read.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::models::TaxResult;

/// Currency symbol used for every rendered amount.
pub const CURRENCY_SYMBOL: &str = "₦";

/// One labelled, formatted figure of a summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryLine {
    /// What the figure is.
    pub label: String,
    /// The formatted amount.
    pub value: String,
}

/// Formats an amount as naira with two decimals and thousands separators.
///
/// # Example
///
/// ```
/// use paye_engine::presentation::format_currency;
/// use rust_decimal::Decimal;
///
/// assert_eq!(format_currency(Decimal::new(8_165, 0)), "₦8,165.00");
/// assert_eq!(format_currency(Decimal::new(1_234_567_891, 3)), "₦1,234,567.89");
/// ```
pub fn format_currency(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let negative = rounded.is_sign_negative() && !rounded.is_zero();
    let digits = format!("{:.2}", rounded.abs());

    let (whole, fraction) = digits.split_once('.').unwrap_or((digits.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if negative { "-" } else { "" };
    format!("{sign}{CURRENCY_SYMBOL}{grouped}.{fraction}")
}

/// Renders a result as labelled lines, in reading order.
pub fn summary_lines(result: &TaxResult) -> Vec<SummaryLine> {
    [
        ("Gross Income", result.gross_income),
        ("Pension Contribution", result.pension_contribution),
        ("NHF Contribution (2.5% of Basic)", result.nhf_contribution),
        (
            "Consolidated Relief Allowance (CRA)",
            result.consolidated_relief_allowance,
        ),
        ("Taxable Income", result.taxable_income),
        ("Annual PAYE", result.annual_tax),
        ("Monthly PAYE", result.monthly_tax),
    ]
    .into_iter()
    .map(|(label, amount)| SummaryLine {
        label: label.to_string(),
        value: format_currency(amount),
    })
    .collect()
}
