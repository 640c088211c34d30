//! Core Kernel - Foundational types and utilities for the investment calculators
//!
//! This crate provides the building blocks shared by every calculation engine:
//! - Money and Rate types with precise decimal arithmetic
//! - The compounding primitive used by growth, fund and goal simulations
//! - Input-boundary parsing of user-entered numbers

pub mod money;
pub mod compounding;
pub mod input;
pub mod error;

pub use money::{Money, Currency, MoneyError, Rate, round_half_up};
pub use compounding::{
    apply_period, annuity_factor, equivalent_periodic_rate, growth_factor,
    monthly_rate_from_annual_percent, DAYS_PER_YEAR, MONTHS_PER_YEAR,
};
pub use input::{coerce_number, parse_validated_number, LenientDecimal};
pub use error::CoreError;
