//! Rates DTOs

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;

use domain_rates::{equivalent_monthly_rate, BenchmarkRates};

/// A benchmark rate with its monthly equivalent, both in percent
#[derive(Debug, Serialize)]
pub struct RateResponse {
    pub annual: Decimal,
    pub monthly: Option<Decimal>,
}

impl RateResponse {
    fn from_annual(annual: Decimal) -> Self {
        Self {
            annual,
            monthly: equivalent_monthly_rate(annual),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct RatesResponse {
    pub selic: RateResponse,
    pub cdi: RateResponse,
    pub ipca: RateResponse,
    pub savings: RateResponse,
    pub fetched_at: DateTime<Utc>,
    pub is_stale: bool,
}

impl From<BenchmarkRates> for RatesResponse {
    fn from(rates: BenchmarkRates) -> Self {
        Self {
            selic: RateResponse::from_annual(rates.selic),
            cdi: RateResponse::from_annual(rates.cdi),
            ipca: RateResponse::from_annual(rates.ipca),
            savings: RateResponse::from_annual(rates.savings),
            fetched_at: rates.fetched_at,
            is_stale: rates.is_stale,
        }
    }
}
