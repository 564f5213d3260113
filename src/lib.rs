//! PAYE income tax engine for Nigerian personal income tax.
//!
//! This crate computes Pay-As-You-Earn liability from salary components:
//! gross income, pension and NHF contributions, the Consolidated Relief
//! Allowance, taxable income, and progressive band tax at annual and monthly
//! granularity.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod presentation;
