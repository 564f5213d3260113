//! Calculation logic for the PAYE engine.
//!
//! This module contains the individual steps of a PAYE computation (gross
//! income, pension and NHF contributions, annualization, Consolidated Relief
//! Allowance, taxable income, progressive band tax and the monthly figure)
//! and the [`TaxEngine`] that chains them.

mod annualization;
mod band_tax;
mod contributions;
mod engine;
mod gross_income;
mod relief_allowance;

pub use annualization::{AnnualizedFigures, annualize};
pub use band_tax::{BandTaxResult, calculate_band_tax};
pub use contributions::{
    ContributionResult, calculate_nhf_contribution, calculate_pension_contribution,
};
pub use engine::{TaxEngine, calculate_monthly_tax, compute};
pub use gross_income::{GrossIncomeResult, calculate_gross_income};
pub use relief_allowance::{
    ConsolidatedReliefResult, TaxableIncomeResult, calculate_consolidated_relief,
    calculate_taxable_income,
};
