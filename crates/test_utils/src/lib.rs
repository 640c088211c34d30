//! Test Utilities Crate
//!
//! Provides shared test infrastructure for the calculator test suites.
//!
//! # Modules
//!
//! - `assertions`: Custom assertion helpers for Money, Rate and Decimal values
//! - `generators`: Property-based test data generators

pub mod assertions;
pub mod generators;

pub use assertions::*;
pub use generators::*;
