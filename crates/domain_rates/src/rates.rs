//! Benchmark rates and their derived values

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use core_kernel::{equivalent_periodic_rate, round_half_up, MONTHS_PER_YEAR};

/// Selic level above which savings pay a fixed share of Selic
pub const SAVINGS_SELIC_THRESHOLD: Decimal = dec!(8.5);

/// Share of Selic paid by savings above the threshold
pub const SAVINGS_SHARE_OF_SELIC: Decimal = dec!(0.7);

/// Savings rate, % a.a., at or below the threshold
pub const SAVINGS_FLOOR_RATE: Decimal = dec!(6.17);

/// Current benchmark rates, all as annual percentages
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkRates {
    pub selic: Decimal,
    pub cdi: Decimal,
    pub ipca: Decimal,
    /// Savings account (poupança), derived from Selic
    pub savings: Decimal,
    pub fetched_at: DateTime<Utc>,
    /// Set when these rates were served from cache after a failed refresh
    pub is_stale: bool,
}

impl BenchmarkRates {
    /// Builds a fresh set of rates, deriving the savings rate from Selic
    pub fn new(selic: Decimal, cdi: Decimal, ipca: Decimal, fetched_at: DateTime<Utc>) -> Self {
        Self {
            selic,
            cdi,
            ipca,
            savings: savings_rate(selic),
            fetched_at,
            is_stale: false,
        }
    }

    /// Marks the rates as served from an outdated cache
    pub fn into_stale(mut self) -> Self {
        self.is_stale = true;
        self
    }
}

/// Savings rate for a given Selic, % a.a.
///
/// Simplified rule: 70% of Selic when Selic is above 8.5%, otherwise 6.17%.
pub fn savings_rate(selic: Decimal) -> Decimal {
    if selic > SAVINGS_SELIC_THRESHOLD {
        selic * SAVINGS_SHARE_OF_SELIC
    } else {
        SAVINGS_FLOOR_RATE
    }
}

/// Monthly rate equivalent to an annual percentage, in percent
///
/// `((1 + annual / 100)^(1/12) - 1) × 100`, rounded to 6 decimal places.
/// Returns `None` for annual rates at or below -100%.
pub fn equivalent_monthly_rate(annual_percent: Decimal) -> Option<Decimal> {
    let exponent = Decimal::ONE / Decimal::from(MONTHS_PER_YEAR);
    equivalent_periodic_rate(annual_percent / Decimal::ONE_HUNDRED, exponent)
        .map(|monthly| round_half_up(monthly * Decimal::ONE_HUNDRED, 6))
}
