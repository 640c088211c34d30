//! Investment Tax Domain
//!
//! This crate computes the Brazilian taxes due when an investment is
//! redeemed or sold.
//!
//! # Key Concepts
//!
//! - **Income tax (IR)**: regressive by holding period for fixed income and
//!   funds (22.5% → 20% → 17.5% → 15%), flat for stocks
//! - **Stock exemption**: no income tax when monthly stock sales stay at or
//!   below R$ 20,000 (not available to day trades)
//! - **IOF**: transaction tax charged on gains redeemed within 30 days,
//!   following the official daily table
//! - **Tips**: how many days to wait for IOF to end or for the next bracket
//!
//! Both taxes are charged on the gross profit at the same time; IOF does not
//! replace income tax.

pub mod brackets;
pub mod calculator;
pub mod error;
pub mod instrument;
pub mod tips;

pub use brackets::{income_tax_rate, iof_rate, regressive_rate, IncomeTaxBracket};
pub use calculator::{compute_tax, TaxResult, TaxableEvent};
pub use error::TaxError;
pub use instrument::InstrumentType;
pub use tips::{optimization_tips, TaxTip};
