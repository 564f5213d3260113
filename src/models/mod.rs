//! Core data models for the PAYE engine.
//!
//! This module contains all the domain models used throughout the engine.

mod calculation_result;
mod compensation;
mod tax_result;

pub use calculation_result::{AuditStep, AuditTrace, TaxCalculation};
pub use compensation::{CompensationInput, PayPeriod};
pub use tax_result::{BandCharge, TaxResult};
