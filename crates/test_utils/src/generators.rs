//! Property-Based Test Generators
//!
//! Provides proptest strategies for generating calculator inputs that stay
//! inside the engines' input contracts.

use proptest::prelude::*;
use rust_decimal::Decimal;

/// Strategy for non-negative amounts with centavo precision (R$ 0.00 to R$ 10,000,000.00)
pub fn amount_strategy() -> impl Strategy<Value = Decimal> {
    (0i64..1_000_000_000i64).prop_map(|minor| Decimal::new(minor, 2))
}

/// Strategy for strictly positive amounts with centavo precision
pub fn positive_amount_strategy() -> impl Strategy<Value = Decimal> {
    (1i64..1_000_000_000i64).prop_map(|minor| Decimal::new(minor, 2))
}

/// Strategy for monthly contributions (R$ 0.00 to R$ 100,000.00)
pub fn contribution_strategy() -> impl Strategy<Value = Decimal> {
    (0i64..10_000_000i64).prop_map(|minor| Decimal::new(minor, 2))
}

/// Strategy for periodic rates as fractions (0.0000 to 0.0500 per period)
pub fn periodic_rate_strategy() -> impl Strategy<Value = Decimal> {
    (0i64..=500i64).prop_map(|n| Decimal::new(n, 4))
}

/// Strategy for annual percentages (0.00% to 40.00%)
pub fn annual_percent_strategy() -> impl Strategy<Value = Decimal> {
    (0i64..=4000i64).prop_map(|n| Decimal::new(n, 2))
}

/// Strategy for a number of monthly periods (up to 40 years)
pub fn periods_strategy() -> impl Strategy<Value = u32> {
    0u32..=480u32
}

/// Strategy for holding periods in days (up to 5 years)
pub fn holding_days_strategy() -> impl Strategy<Value = u32> {
    1u32..=1825u32
}
